//! Integration tests for payoff curve generation.
//!
//! Exercises the public API end to end on a four-leg iron condor with
//! known payoff geometry, plus serde contracts and input rejection.

use payoff_engine::{
    GridConfig, LegAction, OptionLeg, OptionType, PayoffEngine, PayoffError, PayoffPoint,
    PayoffResult, Scenario, Strategy, StrategyError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Iron condor: short 22000/22300 strangle hedged by 21900/22400 wings,
/// quoted at spot 22150 for a net credit of 80.
fn iron_condor() -> Strategy {
    Strategy::new(
        "NIFTY",
        dec!(22150),
        vec![
            OptionLeg::new(
                OptionType::Put,
                LegAction::Sell,
                dec!(22000),
                dec!(85),
                dec!(18),
            ),
            OptionLeg::new(
                OptionType::Put,
                LegAction::Buy,
                dec!(21900),
                dec!(45),
                dec!(19),
            ),
            OptionLeg::new(
                OptionType::Call,
                LegAction::Sell,
                dec!(22300),
                dec!(75),
                dec!(16),
            ),
            OptionLeg::new(
                OptionType::Call,
                LegAction::Buy,
                dec!(22400),
                dec!(35),
                dec!(16.5),
            ),
        ],
    )
}

/// Unit-step grid covering 21707..22593 so strikes and breakevens land
/// exactly on grid points.
fn unit_grid() -> GridConfig {
    GridConfig {
        range_fraction: dec!(0.02),
        steps: 886,
    }
}

fn point_at(result: &PayoffResult, price: Decimal) -> &PayoffPoint {
    result
        .points
        .iter()
        .find(|p| p.price == price)
        .unwrap_or_else(|| panic!("grid should contain price {price}"))
}

#[test]
fn test_iron_condor_summary_on_default_grid() {
    let engine = PayoffEngine::default();
    let result = engine.generate(&iron_condor()).expect("should generate");

    assert_eq!(result.points.len(), 81);
    assert_eq!(result.net_premium, dec!(80));
    assert_eq!(result.max_profit, dec!(80));
    assert_eq!(result.max_loss, dec!(-20));

    // Spot sits exactly on the grid midpoint, inside the profit plateau.
    let at_spot = point_at(&result, dec!(22150));
    assert_eq!(at_spot.expiry_pnl, dec!(80));

    for pair in result.points.windows(2) {
        assert!(pair[0].price < pair[1].price);
    }
}

#[test]
fn test_iron_condor_expiry_pnl_at_exact_prices() {
    let engine = PayoffEngine::default();
    let result = engine
        .generate_with(&iron_condor(), &Scenario::default(), &unit_grid())
        .expect("should generate");

    // Below the long put: both puts ITM, loss capped at width minus credit.
    assert_eq!(point_at(&result, dec!(21800)).expiry_pnl, dec!(-20));
    // Between the short strikes: full credit.
    assert_eq!(point_at(&result, dec!(22150)).expiry_pnl, dec!(80));
    // Above the long call: loss capped again.
    assert_eq!(point_at(&result, dec!(22500)).expiry_pnl, dec!(-20));
}

#[test]
fn test_iron_condor_exact_breakevens_on_unit_grid() {
    let engine = PayoffEngine::default();
    let result = engine
        .generate_with(&iron_condor(), &Scenario::default(), &unit_grid())
        .expect("should generate");

    assert_eq!(result.breakevens, vec![dec!(21920), dec!(22380)]);
}

#[test]
fn test_iron_condor_breakevens_within_one_step_on_default_grid() {
    let engine = PayoffEngine::default();
    let result = engine.generate(&iron_condor()).expect("should generate");

    // Default grid step for spot 22150 is 44.3; interpolation across a
    // strike kink stays within one step of the true crossing.
    let step = dec!(44.3);
    assert_eq!(result.breakevens.len(), 2);
    assert!((result.breakevens[0] - dec!(21920)).abs() <= step);
    assert!((result.breakevens[1] - dec!(22380)).abs() <= step);
}

#[test]
fn test_scenario_curve_converges_to_expiry_curve() {
    // Strangle on a 100-priced underlying; when all the legs' time has
    // elapsed, scenario PnL must sit within a currency unit of expiry PnL
    // at every grid point.
    let strategy = Strategy::new(
        "ACME",
        dec!(100),
        vec![
            OptionLeg::new(
                OptionType::Call,
                LegAction::Buy,
                dec!(105),
                dec!(1.80),
                dec!(25),
            ),
            OptionLeg::new(
                OptionType::Put,
                LegAction::Buy,
                dec!(95),
                dec!(1.60),
                dec!(27),
            ),
        ],
    );
    let scenario = Scenario::new(Decimal::ZERO, dec!(30));

    let engine = PayoffEngine::default();
    let result = engine
        .generate_with(&strategy, &scenario, &GridConfig::default())
        .expect("should generate");

    for point in &result.points {
        let gap = (point.scenario_pnl - point.expiry_pnl).abs();
        assert!(
            gap <= dec!(1),
            "scenario/expiry gap {gap} at price {}",
            point.price
        );
    }
}

#[test]
fn test_default_scenario_reprices_near_entry() {
    // Premium set to the theoretical value, so the unshifted scenario
    // should mark the position at roughly zero PnL at spot.
    let premium = payoff_engine::theoretical_price(
        OptionType::Call,
        100.0,
        100.0,
        30.0 / 365.0,
        0.05,
        0.20,
    )
    .expect("should price");
    let premium = Decimal::from_f64_retain(premium)
        .expect("should convert")
        .round_dp(2);

    let strategy = Strategy::new(
        "ACME",
        dec!(100),
        vec![OptionLeg::new(
            OptionType::Call,
            LegAction::Buy,
            dec!(100),
            premium,
            dec!(20),
        )],
    );

    let engine = PayoffEngine::default();
    let result = engine.generate(&strategy).expect("should generate");

    let at_spot = point_at(&result, dec!(100));
    assert!(
        at_spot.scenario_pnl.abs() < dec!(0.05),
        "got {}",
        at_spot.scenario_pnl
    );
}

#[test]
fn test_iv_shift_raises_long_option_value() {
    let strategy = Strategy::new(
        "ACME",
        dec!(100),
        vec![OptionLeg::new(
            OptionType::Call,
            LegAction::Buy,
            dec!(100),
            dec!(2.50),
            dec!(20),
        )],
    );

    let engine = PayoffEngine::default();
    let flat = engine.generate(&strategy).expect("should generate");
    let shifted = engine
        .generate_with(
            &strategy,
            &Scenario::new(dec!(5), Decimal::ZERO),
            &GridConfig::default(),
        )
        .expect("should generate");

    // +5 vol points makes a long call worth more at every grid price; a
    // cent of slack absorbs rounding at the deep ITM/OTM edges where vega
    // vanishes.
    for (a, b) in flat.points.iter().zip(shifted.points.iter()) {
        assert!(b.scenario_pnl >= a.scenario_pnl - dec!(0.01));
    }

    let flat_at_spot = point_at(&flat, dec!(100));
    let shifted_at_spot = point_at(&shifted, dec!(100));
    assert!(shifted_at_spot.scenario_pnl > flat_at_spot.scenario_pnl + dec!(0.10));
}

#[test]
fn test_result_round_trips_through_json() {
    let engine = PayoffEngine::default();
    let result = engine.generate(&iron_condor()).expect("should generate");

    let json = serde_json::to_string(&result).expect("should serialize");
    let back: PayoffResult = serde_json::from_str(&json).expect("should deserialize");

    assert_eq!(back.points.len(), result.points.len());
    assert_eq!(back.max_profit, dec!(80));
    assert_eq!(back.max_loss, dec!(-20));
    assert_eq!(back.net_premium, dec!(80));
    assert_eq!(back.breakevens, result.breakevens);
}

#[test]
fn test_strategy_deserializes_from_wire_format() {
    let json = r#"{
        "underlying": "NIFTY",
        "spot": "22150",
        "legs": [
            {
                "option_type": "PUT",
                "action": "SELL",
                "strike": "22000",
                "premium": "85",
                "implied_vol": "18"
            }
        ]
    }"#;

    let strategy: Strategy = serde_json::from_str(json).expect("should deserialize");
    assert_eq!(strategy.spot, dec!(22150));
    assert_eq!(strategy.legs[0].days_to_expiry, 30);

    let result = PayoffEngine::default()
        .generate(&strategy)
        .expect("should generate");
    assert_eq!(result.net_premium, dec!(85));
}

#[test]
fn test_structural_errors_are_typed() {
    let engine = PayoffEngine::default();

    let empty = Strategy::new("NIFTY", dec!(22150), vec![]);
    assert!(matches!(
        engine.generate(&empty),
        Err(PayoffError::InvalidStrategy(StrategyError::EmptyLegs))
    ));

    let zero_steps = GridConfig {
        steps: 0,
        ..GridConfig::default()
    };
    assert!(matches!(
        engine.generate_with(&iron_condor(), &Scenario::default(), &zero_steps),
        Err(PayoffError::InvalidGrid { .. })
    ));

    let wide = GridConfig {
        range_fraction: dec!(1.5),
        steps: 80,
    };
    assert!(matches!(
        engine.generate_with(&iron_condor(), &Scenario::default(), &wide),
        Err(PayoffError::InvalidGrid { .. })
    ));

    let mut bad_leg = iron_condor();
    bad_leg.legs[2].strike = Decimal::ZERO;
    assert!(matches!(
        engine.generate(&bad_leg),
        Err(PayoffError::InvalidStrategy(StrategyError::InvalidLeg {
            ..
        }))
    ));
}
