pub mod config;

pub use config::{Config, TOMLConfig};

use crate::curves::Curve;

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum MaybeCurve {
    Literal(Curve),
    Path(String),
}

impl MaybeCurve {
    pub fn resolve(self) -> anyhow::Result<Curve> {
        match self {
            Self::Literal(data) => Ok(data),
            Self::Path(path) => load_arbitrary(PathBuf::from(path)),
        }
    }
}

fn load_arbitrary<T>(filepath: PathBuf) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    info!("loading file at {}", &filepath.to_string_lossy());
    let mut input = String::new();

    let read_count = File::open(&filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read {}", filepath.to_string_lossy()))?;
    debug!("done: {} bytes", read_count);

    let data: T = toml::from_str(&input)
        .with_context(|| format!("failed to parse {}", filepath.to_string_lossy()))?;
    Ok(data)
}

pub fn parse_settings(input: &str) -> anyhow::Result<TOMLConfig> {
    let settings: TOMLConfig = toml::from_str(input).inspect_err(|e| {
        error!("encountered error when parsing config: {}", e);
    })?;
    Ok(settings)
}

pub fn get_settings(filepath: PathBuf) -> anyhow::Result<TOMLConfig> {
    let mut input = String::new();
    File::open(&filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read {}", filepath.to_string_lossy()))?;
    parse_settings(&input).with_context(|| format!("in {}", filepath.to_string_lossy()))
}

/// Loads and validates the configuration, or the benchmark defaults without a file.
pub fn load_config(filepath: Option<&Path>) -> anyhow::Result<Config> {
    let settings = match filepath {
        Some(path) => get_settings(path.to_path_buf())?,
        None => TOMLConfig::default(),
    };
    Config::try_from(settings)
}
