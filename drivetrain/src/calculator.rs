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

use std::collections::BTreeMap;

use itertools::iproduct;
use tracing::{debug, warn};

use crate::combination::{GearCombination, RatioEntry};
use crate::error::{CogSide, Error, Result};

/// Finds the gear combination of a bicycle drivetrain whose pedal-to-wheel
/// ratio sits closest to a target ratio, and works out the shift sequence
/// needed to get there from a configured starting combination.
///
/// The combination table is built once, from the full cross product of the
/// front and rear cog sets; the target ratio and initial combination can be
/// changed between queries without a rebuild.
#[derive(Debug, Clone)]
pub struct GearRatioCalculator {
    front_cogs: Vec<u32>,
    rear_cogs: Vec<u32>,
    target_ratio: f64,
    initial_combination: GearCombination,
    combinations: BTreeMap<GearCombination, f64>
}

impl GearRatioCalculator {
    /// Build a calculator from the front crank and rear cassette tooth counts.
    ///
    /// Cog sets keep their supplied order; the initial combination starts out
    /// as the first cog of each set. An empty set leaves the combination
    /// table empty and every query degrades to its "no combination" result.
    pub fn new(front_cogs: Vec<u32>, rear_cogs: Vec<u32>, target_ratio: f64) -> GearRatioCalculator {
        if front_cogs.is_empty() {
            warn!("Front cog set is empty; combination table will be empty");
        }
        if rear_cogs.is_empty() {
            warn!("Rear cog set is empty; combination table will be empty");
        }
        let initial_combination = match (front_cogs.first(), rear_cogs.first()) {
            (Some(&front), Some(&rear)) => GearCombination::new(front, rear),
            _ => GearCombination::new(0, 0)
        };
        let combinations: BTreeMap<GearCombination, f64> = iproduct!(&front_cogs, &rear_cogs)
            .map(|(&front, &rear)| {
                let combination = GearCombination::new(front, rear);
                (combination, combination.ratio())
            })
            .collect();
        debug!("Generated {} gear combinations from {} front and {} rear cogs",
               combinations.len(), front_cogs.len(), rear_cogs.len());
        GearRatioCalculator {
            front_cogs,
            rear_cogs,
            target_ratio,
            initial_combination,
            combinations
        }
    }

    pub fn front_cogs(&self) -> &[u32] {
        &self.front_cogs
    }

    pub fn rear_cogs(&self) -> &[u32] {
        &self.rear_cogs
    }

    pub fn target_ratio(&self) -> f64 {
        self.target_ratio
    }

    pub fn initial_combination(&self) -> GearCombination {
        self.initial_combination
    }

    pub fn combinations(&self) -> &BTreeMap<GearCombination, f64> {
        &self.combinations
    }

    /// All table entries, lowest ratio first.
    pub fn entries(&self) -> Vec<RatioEntry> {
        let mut v: Vec<RatioEntry> = self.combinations.iter()
            .map(|(&combination, &ratio)| RatioEntry::new(combination, ratio))
            .collect();
        v.sort_by(|a, b| a.total_cmp(b));
        v
    }

    /// Replace the target ratio. Ratios are precomputed per combination, so
    /// no table rebuild happens.
    pub fn set_target_ratio(&mut self, ratio: f64) {
        self.target_ratio = ratio;
    }

    /// Replace the starting combination for shift sequences.
    ///
    /// The pair is not checked against the combination table here;
    /// [`generate_shift_sequence`](Self::generate_shift_sequence) reports a
    /// pair that isn't in the table.
    pub fn set_initial_combination(&mut self, front_cog: u32, rear_cog: u32) {
        self.initial_combination = GearCombination::new(front_cog, rear_cog);
    }

    /// Report an empty front or rear cog set.
    ///
    /// The query methods don't require this to have been called; they degrade
    /// gracefully on an empty table.
    pub fn validate(&self) -> Result<()> {
        if self.front_cogs.is_empty() {
            return Err(Error::EmptyCogSet(CogSide::Front));
        }
        if self.rear_cogs.is_empty() {
            return Err(Error::EmptyCogSet(CogSide::Rear));
        }
        Ok(())
    }

    /// The table entry whose ratio is nearest the target ratio.
    ///
    /// Exact ties go to the first entry in table iteration order, which is
    /// ascending front cog then rear cog. An empty table yields the sentinel
    /// entry `0-0` with ratio `0.0`.
    pub fn find_closest_combination(&self) -> RatioEntry {
        let mut closest = RatioEntry::new(GearCombination::new(0, 0), 0.0);
        let mut min_diff = f64::MAX;
        for (&combination, &ratio) in &self.combinations {
            let diff = (self.target_ratio - ratio).abs();
            if diff < min_diff {
                min_diff = diff;
                closest = RatioEntry::new(combination, ratio);
            }
        }
        closest
    }

    /// The combinations a rider passes through from the initial combination
    /// to the closest one, starting with the initial combination itself.
    ///
    /// The walk is a fixed two-phase heuristic: jump the front cog straight
    /// to the closest combination's front cog, then sweep the rear cog set in
    /// its stored order, stopping inclusively at the closest combination's
    /// rear cog. It assumes the rear cassette carries at least as many cogs
    /// as the front crank and makes no attempt to minimise shift count.
    ///
    /// An empty table yields an empty sequence; an initial combination that
    /// isn't in the table yields [`Error::InvalidInitialCombination`].
    pub fn generate_shift_sequence(&self) -> Result<Vec<RatioEntry>> {
        let mut sequence = Vec::new();
        if self.combinations.is_empty() {
            return Ok(sequence);
        }

        let initial_ratio = match self.combinations.get(&self.initial_combination) {
            Some(&ratio) => ratio,
            None => {
                warn!("Initial gear combination {} is not in the combination table",
                      self.initial_combination);
                return Err(Error::InvalidInitialCombination {
                    combination: self.initial_combination
                });
            }
        };
        sequence.push(RatioEntry::new(self.initial_combination, initial_ratio));

        let closest = self.find_closest_combination();
        if closest.combination == self.initial_combination {
            return Ok(sequence);
        }

        for &rear_cog in &self.rear_cogs {
            let combination = GearCombination::new(closest.combination.front, rear_cog);
            let ratio = match self.combinations.get(&combination) {
                Some(&ratio) => ratio,
                // The sweep only visits the closest front cog crossed with
                // stored rear cogs, all of which were inserted at build time.
                None => unreachable!("combination {} missing from table", combination)
            };
            sequence.push(RatioEntry::new(combination, ratio));
            if rear_cog == closest.combination.rear {
                break;
            }
        }
        Ok(sequence)
    }
}

#[cfg(test)]
mod tests {
    use utils::numeric::round_float_to;

    use super::*;

    fn demo_calculator() -> GearRatioCalculator {
        GearRatioCalculator::new(vec![38, 30], vec![28, 23, 19, 16], 1.6)
    }

    fn rounded_steps(sequence: &[RatioEntry]) -> Vec<(u32, u32, f64)> {
        sequence.iter()
            .map(|entry| (entry.combination.front, entry.combination.rear, round_float_to(entry.ratio, 3)))
            .collect()
    }

    #[test]
    fn table_is_full_cross_product() {
        let calc = demo_calculator();
        assert_eq!(calc.combinations().len(), 8);
        for (&front, &rear) in iproduct!(calc.front_cogs(), calc.rear_cogs()) {
            let combination = GearCombination::new(front, rear);
            let ratio = calc.combinations()[&combination];
            assert!((ratio - f64::from(front) / f64::from(rear)).abs() < 1e-9);
        }
    }

    #[test]
    fn initial_combination_defaults_to_first_cogs() {
        let calc = demo_calculator();
        assert_eq!(calc.initial_combination(), GearCombination::new(38, 28));
    }

    #[test]
    fn closest_combination_for_target_1_6() {
        let closest = demo_calculator().find_closest_combination();
        assert_eq!(closest.combination, GearCombination::new(30, 19));
        assert_eq!(round_float_to(closest.ratio, 3), 1.579);
    }

    #[test]
    fn no_table_entry_is_closer_than_the_result() {
        let calc = demo_calculator();
        let closest = calc.find_closest_combination();
        let closest_diff = (calc.target_ratio() - closest.ratio).abs();
        assert!(calc.combinations().contains_key(&closest.combination));
        for &ratio in calc.combinations().values() {
            assert!((calc.target_ratio() - ratio).abs() >= closest_diff);
        }
    }

    #[test]
    fn retargeting_needs_no_rebuild() {
        let mut calc = demo_calculator();
        assert_eq!(calc.find_closest_combination().combination, GearCombination::new(30, 19));
        calc.set_target_ratio(2.4);
        assert_eq!(calc.find_closest_combination().combination, GearCombination::new(38, 16));
    }

    #[test]
    fn shift_sequence_for_target_1_6() {
        let calc = demo_calculator();
        let sequence = calc.generate_shift_sequence().unwrap();
        assert_eq!(rounded_steps(&sequence), vec![
            (38, 28, 1.357),
            (30, 28, 1.071),
            (30, 23, 1.304),
            (30, 19, 1.579)
        ]);
    }

    #[test]
    fn shift_sequence_when_already_closest() {
        let mut calc = demo_calculator();
        calc.set_target_ratio(1.4);
        let closest = calc.find_closest_combination();
        assert_eq!(closest.combination, GearCombination::new(38, 28));
        assert_eq!(round_float_to(closest.ratio, 3), 1.357);
        let sequence = calc.generate_shift_sequence().unwrap();
        assert_eq!(rounded_steps(&sequence), vec![(38, 28, 1.357)]);
    }

    #[test]
    fn shift_sequence_for_target_1_2() {
        let mut calc = demo_calculator();
        calc.set_target_ratio(1.2);
        calc.set_initial_combination(38, 23);
        let closest = calc.find_closest_combination();
        assert_eq!(closest.combination, GearCombination::new(30, 23));
        assert_eq!(round_float_to(closest.ratio, 3), 1.304);
        let sequence = calc.generate_shift_sequence().unwrap();
        assert_eq!(rounded_steps(&sequence), vec![
            (38, 23, 1.652),
            (30, 28, 1.071),
            (30, 23, 1.304)
        ]);
    }

    #[test]
    fn shift_sequence_starts_with_initial_combination() {
        let mut calc = demo_calculator();
        calc.set_initial_combination(30, 16);
        let sequence = calc.generate_shift_sequence().unwrap();
        assert_eq!(sequence[0].combination, GearCombination::new(30, 16));
    }

    #[test]
    fn rear_sweep_revisits_initial_on_shared_front_cog() {
        // The sweep appends unconditionally once the front cog has jumped,
        // so an initial combination on the closest front cog shows up twice.
        let mut calc = demo_calculator();
        calc.set_initial_combination(30, 28);
        let sequence = calc.generate_shift_sequence().unwrap();
        assert_eq!(rounded_steps(&sequence), vec![
            (30, 28, 1.071),
            (30, 28, 1.071),
            (30, 23, 1.304),
            (30, 19, 1.579)
        ]);
    }

    #[test]
    fn unknown_initial_combination_is_reported() {
        let mut calc = demo_calculator();
        calc.set_initial_combination(40, 28);
        assert_eq!(calc.generate_shift_sequence(),
                   Err(Error::InvalidInitialCombination {
                       combination: GearCombination::new(40, 28)
                   }));
    }

    #[test]
    fn empty_front_cog_set_degrades_gracefully() {
        let calc = GearRatioCalculator::new(vec![], vec![28, 23, 19, 16], 1.6);
        assert!(calc.combinations().is_empty());
        let closest = calc.find_closest_combination();
        assert_eq!(closest.combination, GearCombination::new(0, 0));
        assert_eq!(closest.ratio, 0.0);
        assert_eq!(calc.generate_shift_sequence(), Ok(vec![]));
        assert_eq!(calc.validate(), Err(Error::EmptyCogSet(CogSide::Front)));
    }

    #[test]
    fn empty_rear_cog_set_degrades_gracefully() {
        let calc = GearRatioCalculator::new(vec![38, 30], vec![], 1.6);
        assert!(calc.combinations().is_empty());
        assert_eq!(calc.generate_shift_sequence(), Ok(vec![]));
        assert_eq!(calc.validate(), Err(Error::EmptyCogSet(CogSide::Rear)));
    }

    #[test]
    fn entries_are_sorted_by_ratio() {
        let entries = demo_calculator().entries();
        assert_eq!(entries.len(), 8);
        assert_eq!(entries.first().unwrap().combination, GearCombination::new(30, 28));
        assert_eq!(entries.last().unwrap().combination, GearCombination::new(38, 16));
        for pair in entries.windows(2) {
            assert!(pair[0].ratio <= pair[1].ratio);
        }
    }
}
