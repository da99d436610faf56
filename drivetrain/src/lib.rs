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

mod calculator;
mod combination;
pub mod error;

pub use calculator::GearRatioCalculator;
pub use combination::{GearCombination, RatioEntry};
pub use error::{CogSide, Error, Result};

/// Target pedal-to-wheel ratio assumed when a caller doesn't supply one.
pub const DEFAULT_TARGET_RATIO: f64 = 1.6;
