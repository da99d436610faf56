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

mod settings;

use std::env;
use std::process::ExitCode;
use tracing_subscriber;
use tracing_appender;
use tracing::{debug, info, warn};

use drivetrain::{GearRatioCalculator, RatioEntry};
use utils;

fn main() -> ExitCode {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "gear_crane.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }

    let settings = match settings::DrivetrainSettings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings. {}", e.to_string());
            return ExitCode::FAILURE;
        }
    };
    info!("Loaded drivetrain with {} front and {} rear cogs",
          settings.front_cogs().len(), settings.rear_cogs().len());

    let mut calculator = GearRatioCalculator::new(settings.front_cogs().to_vec(),
                                                  settings.rear_cogs().to_vec(),
                                                  settings.target_ratio());
    let initial = settings.initial_combination();
    calculator.set_initial_combination(initial.front, initial.rear);

    if let Some(ratio_arg) = env::args().nth(1) {
        if utils::numeric::is_valid_ratio_str(&ratio_arg) {
            if let Ok(ratio) = ratio_arg.parse::<f64>() {
                info!("Target ratio overridden to {} from the command line", ratio);
                calculator.set_target_ratio(ratio);
            }
        } else {
            warn!("Ignoring invalid target ratio argument '{}'", ratio_arg);
            eprintln!("Ignoring invalid target ratio '{}'", ratio_arg);
        }
    }

    if let Err(e) = calculator.validate() {
        eprintln!("Invalid drivetrain configuration: {}", e.to_string());
        return ExitCode::FAILURE;
    }
    for entry in calculator.entries() {
        debug!("Combination table entry {}", entry);
    }

    output_closest_combination(&calculator.find_closest_combination());
    match calculator.generate_shift_sequence() {
        Ok(sequence) => output_shift_sequence(&sequence),
        Err(e) => {
            eprintln!("{}", e.to_string());
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

fn output_closest_combination(closest: &RatioEntry) {
    println!("Front: {}, Rear: {}, Ratio {:.3}",
             closest.combination.front, closest.combination.rear, closest.ratio);
}

fn output_shift_sequence(sequence: &[RatioEntry]) {
    if sequence.is_empty() {
        println!("No shift gear!");
        return;
    }
    for (idx, entry) in sequence.iter().enumerate() {
        println!("{} - F:{} R:{} Ratio {:.3}",
                 idx + 1, entry.combination.front, entry.combination.rear, entry.ratio);
    }
}
