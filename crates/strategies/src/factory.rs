use crate::Strategy;
use crate::error::StrategyError;
use crate::fixed_amount::FixedAmount;
use crate::fixed_price::FixedPrice;
use crate::fixed_value::FixedValue;
use crate::weighted_price::WeightedPrice;
use configuration::Config;
use core_types::StrategyId;

/// Creates a new strategy instance based on the provided ID and configuration.
///
/// The compiler will error if a new `StrategyId` is added but not handled
/// here, which keeps the factory and the enum in lockstep.
pub fn create_strategy(id: StrategyId, config: &Config) -> Result<Box<dyn Strategy>, StrategyError> {
    match id {
        StrategyId::FixedAmount => {
            let params = config.strategies.fixed_amount.clone();
            Ok(Box::new(FixedAmount::new(params)?))
        }
        StrategyId::FixedPrice => {
            let params = config.strategies.fixed_price.clone();
            Ok(Box::new(FixedPrice::new(params)?))
        }
        StrategyId::FixedValue => {
            let params = config.strategies.fixed_value.clone();
            Ok(Box::new(FixedValue::new(params)?))
        }
        StrategyId::WeightedPrice => {
            let params = config.strategies.weighted_price.clone();
            Ok(Box::new(WeightedPrice::new(params)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use configuration::{
        Config, FixedAmountParams, FixedPriceParams, FixedValueParams, PriceFeedSettings,
        Simulation, Strategies, WeightedPriceParams,
    };
    use rust_decimal_macros::dec;

    fn test_config() -> Config {
        Config {
            simulation: Simulation {
                periods: 12,
                max_cash: dec!(40000),
                spot_units: dec!(200),
            },
            strategies: Strategies {
                fixed_amount: FixedAmountParams { units: dec!(5) },
                fixed_price: FixedPriceParams { spend: dec!(750) },
                fixed_value: FixedValueParams { value: dec!(750) },
                weighted_price: WeightedPriceParams {
                    spend: dec!(750),
                    weight: dec!(1),
                },
            },
            prices: PriceFeedSettings::Cycle {
                prices: vec![dec!(100), dec!(200)],
            },
        }
    }

    #[test]
    fn every_strategy_id_is_constructible() {
        let config = test_config();
        for id in StrategyId::ALL {
            let strategy = create_strategy(id, &config).unwrap();
            assert_eq!(strategy.ledger().periods_recorded(), 0);
        }
    }

    #[test]
    fn invalid_parameters_surface_from_the_factory() {
        let mut config = test_config();
        config.strategies.fixed_price.spend = dec!(-750);
        assert!(matches!(
            create_strategy(StrategyId::FixedPrice, &config),
            Err(StrategyError::InvalidParameters(_))
        ));
    }
}
