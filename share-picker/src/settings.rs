//! Runtime settings: defaults, then an optional settings file, then
//! `SHARE_PICKER_*` environment variables. Command-line flags win over all
//! of them.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use shares_core::{CatalogLayout, StepPolicy};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_NAME: &str = "share-picker";
const ENV_PREFIX: &str = "SHARE_PICKER";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub catalog_file: PathBuf,
    pub layout: CatalogLayout,
    /// Budget in euros.
    pub budget: Decimal,
    pub debug_file: PathBuf,
    /// Budget in euros used with the debug catalog.
    pub debug_budget: Decimal,
    pub step: StepPolicy,
    pub log_level: String,
}

impl Settings {
    /// Loads the settings, reading `path` if given (it must then exist).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("catalog_file", "data/shares.csv")?
            .set_default("layout", "euros")?
            .set_default("budget", 500_i64)?
            .set_default("debug_file", "data/debug.csv")?
            .set_default("debug_budget", 14_i64)?
            .set_default("step", "min-gap")?
            .set_default("log_level", "info")?
            .add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to build settings")?
            .try_deserialize()
            .context("Failed to deserialize settings")
    }
}
