//! Property tests for configuration serialization and validation.

use actuary_bonds::Bond;
use actuary_config::*;
use actuary_core::prelude::*;
use approx::assert_relative_eq;
use proptest::prelude::*;

fn finite_kind() -> impl Strategy<Value = AnnuityKind> {
    prop_oneof![Just(AnnuityKind::Immediate), Just(AnnuityKind::Due)]
}

fn annuity_config() -> impl Strategy<Value = AnnuityConfig> {
    prop_oneof![
        (finite_kind(), -0.9..1.0f64, 0i64..500)
            .prop_map(|(kind, interest, periods)| AnnuityConfig::new(kind, interest, periods)),
        (0.001..1.0f64, proptest::option::of(0i64..500)).prop_map(|(interest, periods)| {
            AnnuityConfig {
                kind: AnnuityKind::Perpetuity,
                interest,
                periods,
            }
        }),
    ]
}

fn bond_config() -> impl Strategy<Value = BondConfig> {
    (
        1.0..10_000.0f64,
        0.0..10_000.0f64,
        0.0..0.25f64,
        -0.5..0.5f64,
        0i64..200,
        proptest::option::of("[a-z]{1,12}"),
    )
        .prop_map(|(par, redemption, coupon, yield_rate, periods, name)| {
            let config = BondConfig::new(coupon, yield_rate, periods)
                .with_par_value(par)
                .with_redemption_value(redemption);
            match name {
                Some(name) => config.with_name(name),
                None => config,
            }
        })
}

fn assert_annuity_close(parsed: &AnnuityConfig, original: &AnnuityConfig) {
    assert_eq!(parsed.kind, original.kind);
    assert_eq!(parsed.periods, original.periods);
    assert_relative_eq!(parsed.interest, original.interest, max_relative = 1e-15);
}

fn assert_bond_close(parsed: &BondConfig, original: &BondConfig) {
    assert_eq!(parsed.name, original.name);
    assert_eq!(parsed.periods, original.periods);
    assert_relative_eq!(parsed.par_value, original.par_value, max_relative = 1e-15);
    assert_relative_eq!(parsed.redemption_value, original.redemption_value, max_relative = 1e-15);
    assert_relative_eq!(parsed.coupon_rate, original.coupon_rate, max_relative = 1e-15);
    assert_relative_eq!(parsed.yield_rate, original.yield_rate, max_relative = 1e-15);
}

proptest! {
    #[test]
    fn valid_annuity_configs_survive_json(config in annuity_config()) {
        prop_assert!(config.is_valid());
        let parsed: AnnuityConfig = from_json_str(&to_json_string(&config).unwrap()).unwrap();
        assert_annuity_close(&parsed, &config);
    }

    #[test]
    fn valid_annuity_configs_survive_toml(config in annuity_config()) {
        let parsed: AnnuityConfig = from_toml_str(&to_toml_string(&config).unwrap()).unwrap();
        assert_annuity_close(&parsed, &config);
    }

    #[test]
    fn valid_bond_configs_survive_json(config in bond_config()) {
        prop_assert!(config.is_valid());
        let parsed: BondConfig = from_json_str(&to_json_string(&config).unwrap()).unwrap();
        assert_bond_close(&parsed, &config);
    }

    #[test]
    fn valid_bond_configs_survive_toml(config in bond_config()) {
        let parsed: BondConfig = from_toml_str(&to_toml_string(&config).unwrap()).unwrap();
        assert_bond_close(&parsed, &config);
    }

    #[test]
    fn valid_annuity_configs_build(config in annuity_config()) {
        let annuity = config.build().unwrap();
        prop_assert_eq!(annuity.kind(), config.kind);
        match config.periods {
            Some(periods) => prop_assert_eq!(annuity.periods().map(i64::from), Some(periods)),
            None => prop_assert_eq!(annuity.periods(), None),
        }
    }

    #[test]
    fn bond_validation_matches_construction(
        coupon in -0.1..0.3f64,
        yield_rate in -1.5..0.5f64,
        periods in -5i64..50,
    ) {
        let config = BondConfig::new(coupon, yield_rate, periods);
        prop_assert_eq!(
            config.is_valid(),
            Bond::new(100.0, 100.0, coupon, yield_rate, periods).is_ok()
        );
    }

    #[test]
    fn finite_annuities_without_periods_are_rejected(
        kind in finite_kind(),
        interest in -0.9..1.0f64,
    ) {
        let json = format!(r#"{{ "kind": "{}", "interest": {interest} }}"#, kind_name(kind));
        prop_assert!(from_json_str::<AnnuityConfig>(&json).is_err());
    }
}

fn kind_name(kind: AnnuityKind) -> &'static str {
    match kind {
        AnnuityKind::Immediate => "immediate",
        AnnuityKind::Due => "due",
        AnnuityKind::Perpetuity => "perpetuity",
    }
}
