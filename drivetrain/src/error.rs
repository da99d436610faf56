/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of gear-crane.
 *
 * gear-crane is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * gear-crane is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with gear-crane. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fmt::{Display, Formatter};
use std::result;

use crate::combination::GearCombination;

pub type Result<T> = result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no cogs provided for the {0} set")]
    EmptyCogSet(CogSide),
    #[error("initial gear combination {combination} is not present in the combination table")]
    InvalidInitialCombination { combination: GearCombination }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CogSide {
    Front,
    Rear
}

impl Display for CogSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CogSide::Front => write!(f, "front"),
            CogSide::Rear => write!(f, "rear")
        }
    }
}
