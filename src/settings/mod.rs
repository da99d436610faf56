use std::fs;
use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use drivetrain::GearCombination;

pub const DEFAULT_FRONT_COGS: [u32; 2] = [38, 30];
pub const DEFAULT_REAR_COGS: [u32; 4] = [28, 23, 19, 16];

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DrivetrainSettings {
    front_cogs: Vec<u32>,
    rear_cogs: Vec<u32>,
    target_ratio: f64,
    initial_combination: GearCombination
}

impl DrivetrainSettings {
    const FRONT_COGS: &'static str = "front_cogs";
    const REAR_COGS: &'static str = "rear_cogs";
    const TARGET_RATIO: &'static str = "target_ratio";
    const INITIAL_COMBINATION: &'static str = "initial_combination";
    const CONFIG_FILENAME: &'static str = "gear-crane-conf";

    pub fn default() -> Self {
        DrivetrainSettings {
            front_cogs: DEFAULT_FRONT_COGS.to_vec(),
            rear_cogs: DEFAULT_REAR_COGS.to_vec(),
            target_ratio: drivetrain::DEFAULT_TARGET_RATIO,
            initial_combination: GearCombination::new(DEFAULT_FRONT_COGS[0], DEFAULT_REAR_COGS[0])
        }
    }

    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder();
        return match builder
            .set_default(DrivetrainSettings::FRONT_COGS, default_front_cogs())?
            .set_default(DrivetrainSettings::REAR_COGS, default_rear_cogs())?
            .set_default(DrivetrainSettings::TARGET_RATIO, drivetrain::DEFAULT_TARGET_RATIO)?
            .set_default(DrivetrainSettings::INITIAL_COMBINATION, default_initial_combination())?
            .add_source(config::File::with_name(DrivetrainSettings::CONFIG_FILENAME))
            .add_source(config::Environment::with_prefix("APP"))
            .build() {
            Ok(settings) => {
                settings.try_deserialize()
            }
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let builder = Config::builder();
                let settings = builder
                    .set_default(DrivetrainSettings::FRONT_COGS, default_front_cogs())?
                    .set_default(DrivetrainSettings::REAR_COGS, default_rear_cogs())?
                    .set_default(DrivetrainSettings::TARGET_RATIO, drivetrain::DEFAULT_TARGET_RATIO)?
                    .set_default(DrivetrainSettings::INITIAL_COMBINATION, default_initial_combination())?
                    .build()?;
                let ret: DrivetrainSettings = settings.try_deserialize()?;
                ret.write().unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
                Ok(ret)
            }
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

    pub fn set_target_ratio(&mut self, new_ratio: f64) {
        self.target_ratio = new_ratio;
    }

    pub fn initial_combination(&self) -> GearCombination {
        self.initial_combination
    }

    pub fn set_initial_combination(&mut self, new_combination: GearCombination) {
        self.initial_combination = new_combination;
    }

    pub fn write(&self) -> std::io::Result<()> {
        fs::write(format!("{}.toml", DrivetrainSettings::CONFIG_FILENAME), toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}

fn default_front_cogs() -> Vec<i64> {
    DEFAULT_FRONT_COGS.iter().map(|&cog| i64::from(cog)).collect()
}

fn default_rear_cogs() -> Vec<i64> {
    DEFAULT_REAR_COGS.iter().map(|&cog| i64::from(cog)).collect()
}

fn default_initial_combination() -> std::collections::HashMap<String, i64> {
    std::collections::HashMap::from([
        ("front".to_string(), i64::from(DEFAULT_FRONT_COGS[0])),
        ("rear".to_string(), i64::from(DEFAULT_REAR_COGS[0]))
    ])
}
