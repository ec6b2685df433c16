use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{
    Config, FixedAmountParams, FixedPriceParams, FixedValueParams, PriceFeedSettings, Simulation,
    Strategies, WeightedPriceParams,
};

/// Loads the application configuration from the given TOML file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, validates it, and returns it.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()))
        // Optionally, one could add environment variables here as well.
        // .add_source(config::Environment::with_prefix("DRIP"));
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Rejects configurations that would make a simulation run meaningless.
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.simulation.periods == 0 {
        return Err(ConfigError::ValidationError(
            "simulation.periods must be at least 1".to_string(),
        ));
    }
    if config.simulation.max_cash.is_sign_negative() {
        return Err(ConfigError::ValidationError(
            "simulation.max_cash must not be negative".to_string(),
        ));
    }
    if config.simulation.spot_units.is_sign_negative() {
        return Err(ConfigError::ValidationError(
            "simulation.spot_units must not be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(toml: &str) -> Result<Config, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        let config = builder.try_deserialize::<Config>()?;
        validate(&config)?;
        Ok(config)
    }

    const SCENARIO: &str = r#"
        [simulation]
        periods = 60
        max_cash = 40000
        spot_units = 200

        [strategies.fixed_amount]
        units = 5

        [strategies.fixed_price]
        spend = 750

        [strategies.fixed_value]
        value = 750

        [strategies.weighted_price]
        spend = 750
        weight = 1.0

        [prices]
        kind = "cycle"
        prices = [100, 200]
    "#;

    #[test]
    fn a_full_scenario_deserializes() {
        let config = parse(SCENARIO).unwrap();
        assert_eq!(config.simulation.periods, 60);
        assert_eq!(config.strategies.fixed_price.spend, dec!(750));
        match config.prices {
            PriceFeedSettings::Cycle { ref prices } => {
                assert_eq!(prices, &vec![dec!(100), dec!(200)]);
            }
            ref other => panic!("expected a cycle feed, got {other:?}"),
        }
    }

    #[test]
    fn zero_periods_fail_validation() {
        let toml = SCENARIO.replace("periods = 60", "periods = 0");
        assert!(matches!(
            parse(&toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn history_feed_defaults_its_skip_to_zero() {
        let toml = SCENARIO.replace(
            "kind = \"cycle\"\n        prices = [100, 200]",
            "kind = \"history\"\n        path = \"data/index-monthly.txt\"",
        );
        let config = parse(&toml).unwrap();
        match config.prices {
            PriceFeedSettings::History { skip, .. } => assert_eq!(skip, 0),
            ref other => panic!("expected a history feed, got {other:?}"),
        }
    }
}
