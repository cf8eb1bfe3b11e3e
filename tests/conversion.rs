use evaporation_power_toolbox::conversion::{convert, ConversionError};
use evaporation_power_toolbox::quantity::QuantityKind;

#[test]
fn temperature_celsius_to_fahrenheit() {
    let out = convert(QuantityKind::Temperature, 20.0, "C", "F").unwrap();
    assert!((out - 68.0).abs() < 1e-9, "out={out}");
}

#[test]
fn temperature_kelvin_roundtrip() {
    let k = convert(QuantityKind::Temperature, -40.0, "C", "K").unwrap();
    assert!((k - 233.15).abs() < 1e-9);
    let back = convert(QuantityKind::Temperature, k, "K", "C").unwrap();
    assert!((back + 40.0).abs() < 1e-9);
}

#[test]
fn velocity_mps_to_kmh() {
    let out = convert(QuantityKind::Velocity, 10.0, "m/s", "km/h").unwrap();
    assert!((out - 36.0).abs() < 1e-9);
}

#[test]
fn pressure_kpa_to_hpa_and_mmhg() {
    let hpa = convert(QuantityKind::Pressure, 2.3385, "kPa", "hPa").unwrap();
    assert!((hpa - 23.385).abs() < 1e-9);
    let mmhg = convert(QuantityKind::Pressure, 101.325, "kPa", "mmHg").unwrap();
    assert!((mmhg - 760.0).abs() < 0.1, "mmhg={mmhg}");
}

#[test]
fn unknown_unit_is_an_error() {
    match convert(QuantityKind::Pressure, 1.0, "bar", "kPa") {
        Err(ConversionError::UnknownUnit(u)) => assert_eq!(u, "bar"),
        other => panic!("expected UnknownUnit, got {other:?}"),
    }
}
