//! Integration tests for loading and building instruments from configuration.

use actuary_config::*;
use actuary_core::prelude::*;
use approx::assert_relative_eq;

const BOOK_JSON: &str = r#"
{
  "instruments": [
    { "type": "annuity", "kind": "immediate", "interest": 0.1, "periods": 10 },
    { "type": "annuity", "kind": "due", "interest": 0.1, "periods": 10 },
    { "type": "annuity", "kind": "perpetuity", "interest": 0.1, "periods": 10 },
    { "type": "bond", "name": "long", "coupon_rate": 0.05, "yield_rate": 0.1, "periods": 100 }
  ]
}
"#;

#[test]
fn builds_every_instrument_in_order() {
    let set: InstrumentSet = from_json_str(BOOK_JSON).unwrap();
    let instruments = set.build().unwrap();
    assert_eq!(instruments.len(), 4);

    let values: Vec<f64> = instruments
        .iter()
        .map(|i| i.present_value().unwrap())
        .collect();

    assert_relative_eq!(values[0], 6.144567105704684, epsilon = 1e-9);
    assert_relative_eq!(values[1], 6.7590238162751515, epsilon = 1e-9);
    assert_relative_eq!(values[2], 10.0, epsilon = 1e-12);
    assert_relative_eq!(values[3], 55.00326545721556, epsilon = 1e-9);
}

#[test]
fn perpetuity_from_config_behaves_like_perpetuity() {
    let set: InstrumentSet = from_json_str(BOOK_JSON).unwrap();
    let mut instruments = set.build().unwrap();

    match &mut instruments[2] {
        Instrument::Annuity(annuity) => {
            assert_eq!(annuity.kind(), AnnuityKind::Perpetuity);
            assert_eq!(annuity.future_value().unwrap(), None);
            annuity.set_periods(-1).unwrap();
            assert_eq!(annuity.periods(), None);
        }
        other => panic!("expected perpetuity, got {other:?}"),
    }
}

#[test]
fn reports_all_invalid_fields_with_paths() {
    let json = r#"
    {
      "instruments": [
        { "type": "annuity", "kind": "due", "interest": -1.5, "periods": 10 },
        { "type": "bond", "coupon_rate": 0.05, "yield_rate": -1.0, "periods": -4 }
      ]
    }
    "#;

    match from_json_str::<InstrumentSet>(json) {
        Err(ConfigError::MultipleValidationErrors(errors)) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(
                fields,
                [
                    "instruments[0].interest",
                    "instruments[1].yield_rate",
                    "instruments[1].periods",
                ]
            );
        }
        other => panic!("expected validation errors, got {other:?}"),
    }
}

#[test]
fn toml_and_json_describe_the_same_bond() {
    let from_json: BondConfig = from_json_str(
        r#"{ "par_value": 1000.0, "redemption_value": 1050.0,
             "coupon_rate": 0.04, "yield_rate": 0.05, "periods": 10 }"#,
    )
    .unwrap();
    let from_toml: BondConfig = from_toml_str(
        r#"
        par_value = 1000.0
        redemption_value = 1050.0
        coupon_rate = 0.04
        yield_rate = 0.05
        periods = 10
        "#,
    )
    .unwrap();

    assert_eq!(from_json, from_toml);
    assert_eq!(
        from_json.build().unwrap().price().unwrap(),
        from_toml.build().unwrap().price().unwrap()
    );
}

#[test]
fn json_round_trip_of_instrument_set() {
    let set = InstrumentSet {
        instruments: vec![
            AnnuityConfig::new(AnnuityKind::Due, 0.07, 15).into(),
            BondConfig::new(0.03, 0.035, 40).with_name("forty").into(),
        ],
    };
    let text = to_json_string(&set).unwrap();
    let parsed: InstrumentSet = from_json_str(&text).unwrap();
    assert_eq!(parsed, set);
}
