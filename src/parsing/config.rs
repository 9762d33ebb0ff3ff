use crate::curves::Curve;

use math::Bounds1D;

use anyhow::Context;
use serde::Deserialize;

use super::MaybeCurve;

pub const DEFAULT_ITERATIONS: usize = 5;
pub const DEFAULT_DOMAIN: (f64, f64) = (0.0, 1.0);

#[derive(Deserialize, Clone, Debug, Default)]
pub struct TOMLConfig {
    pub iterations: Option<usize>,
    pub domain: Option<Bounds1D>,
    pub curve: Option<MaybeCurve>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    pub iterations: usize,
    pub domain: Bounds1D,
    pub curve: Curve,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            iterations: DEFAULT_ITERATIONS,
            domain: Bounds1D::new(DEFAULT_DOMAIN.0, DEFAULT_DOMAIN.1),
            curve: Curve::Hint,
        }
    }
}

impl TryFrom<TOMLConfig> for Config {
    type Error = anyhow::Error;
    fn try_from(data: TOMLConfig) -> Result<Self, Self::Error> {
        let defaults = Config::default();
        let curve = match data.curve {
            Some(curve) => curve.resolve()?,
            None => defaults.curve,
        };
        let config = Config {
            iterations: data.iterations.unwrap_or(defaults.iterations),
            domain: data.domain.unwrap_or(defaults.domain),
            curve,
        };
        config
            .curve
            .validate(config.domain)
            .with_context(|| format!("invalid curve {:?}", config.curve))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{get_settings, parse_settings};

    use std::path::PathBuf;

    #[test]
    fn test_parsing_config() {
        let settings = get_settings(PathBuf::from("data/config.toml")).unwrap();
        let config = Config::try_from(settings).unwrap();
        assert_eq!(config.iterations, 8);
        assert_eq!(config.domain, Bounds1D::new(0.0, 1.0));
        assert_eq!(config.curve, Curve::Hint);
    }

    #[test]
    fn test_empty_config_is_benchmark() {
        let config = Config::try_from(parse_settings("").unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_tagged_curve_table() {
        let settings = parse_settings(
            r#"
            domain = [0.0, 2.0]

            [curve]
            type = "Exponential"
            scale = 2.0
            rate = 0.5
            "#,
        )
        .unwrap();
        let config = Config::try_from(settings).unwrap();
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.domain, Bounds1D::new(0.0, 2.0));
        assert_eq!(
            config.curve,
            Curve::Exponential {
                scale: 2.0,
                rate: 0.5
            }
        );
    }

    #[test]
    fn test_curve_loaded_from_path() {
        let settings = parse_settings(r#"curve = "data/curves/reciprocal.toml""#).unwrap();
        let config = Config::try_from(settings).unwrap();
        assert_eq!(config.curve, Curve::Reciprocal { shift: 1.0 });
    }

    #[test]
    fn test_inverted_domain_is_rejected() {
        assert!(parse_settings("domain = [1.0, 0.0]").is_err());
    }

    #[test]
    fn test_increasing_curve_is_rejected() {
        let settings = parse_settings(
            r#"
            [curve]
            type = "Linear"
            slope = 1.0
            intercept = 0.0
            "#,
        )
        .unwrap();
        assert!(Config::try_from(settings).is_err());
    }

    #[test]
    fn test_overflowing_curve_is_rejected() {
        let settings = parse_settings(
            r#"
            domain = [-10.0, 1.0]

            [curve]
            type = "Exponential"
            scale = 1.0
            rate = 100.0
            "#,
        )
        .unwrap();
        assert!(Config::try_from(settings).is_err());
    }

    #[test]
    fn test_missing_curve_file_is_an_error() {
        let settings = parse_settings(r#"curve = "data/curves/missing.toml""#).unwrap();
        assert!(Config::try_from(settings).is_err());
    }
}
