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

use serde::{Deserialize, Serialize};

/// A front crank cog paired with a rear cassette cog, both as tooth counts.
///
/// Ordering is front cog first, then rear cog; combination tables keyed by
/// this type iterate in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GearCombination {
    pub front: u32,
    pub rear: u32
}

impl GearCombination {
    pub fn new(front: u32, rear: u32) -> GearCombination {
        GearCombination { front, rear }
    }

    /// The output ratio from the pedals to the rear wheel.
    pub fn ratio(&self) -> f64 {
        f64::from(self.front) / f64::from(self.rear)
    }
}

impl Display for GearCombination {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.front, self.rear)
    }
}

/// A gear combination together with its precomputed ratio, as returned by
/// calculator queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioEntry {
    pub combination: GearCombination,
    pub ratio: f64
}

impl RatioEntry {
    pub fn new(combination: GearCombination, ratio: f64) -> RatioEntry {
        RatioEntry { combination, ratio }
    }

    pub fn total_cmp(&self, other: &RatioEntry) -> std::cmp::Ordering {
        self.ratio.total_cmp(&other.ratio)
    }
}

impl Display for RatioEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.3})", self.combination, self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combination_display_matches_key_format() {
        assert_eq!(GearCombination::new(38, 28).to_string(), "38-28");
    }

    #[test]
    fn combination_ratio() {
        assert!((GearCombination::new(38, 28).ratio() - 38.0 / 28.0).abs() < 1e-9);
    }

    #[test]
    fn combinations_order_by_front_then_rear() {
        let mut pairs = vec![
            GearCombination::new(38, 16),
            GearCombination::new(30, 28),
            GearCombination::new(38, 28),
            GearCombination::new(30, 16)
        ];
        pairs.sort();
        assert_eq!(pairs, vec![
            GearCombination::new(30, 16),
            GearCombination::new(30, 28),
            GearCombination::new(38, 16),
            GearCombination::new(38, 28)
        ]);
    }
}
