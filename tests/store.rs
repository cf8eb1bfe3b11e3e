use evaporation_power_toolbox::air::vapor_pressure::VaporPressureMethod;
use evaporation_power_toolbox::store::{
    ParameterStore, SurfaceConditions, DEFAULT_REL_HUM_WET_FRAC,
};

#[test]
fn store_seeds_documented_defaults() {
    let store = ParameterStore::new();
    let c = store.conditions();
    assert!((c.irradiance_w_per_m2 - 500.0).abs() < 1e-12);
    assert!((c.air_temperature_k - 293.15).abs() < 1e-12);
    assert!((c.wind_speed_m_per_s - 4.0).abs() < 1e-12);
    assert!((c.relative_humidity_frac - 0.05).abs() < 1e-12);
    assert_eq!(store.method(), VaporPressureMethod::Buck);
    assert!((store.rel_hum_wet_frac() - DEFAULT_REL_HUM_WET_FRAC).abs() < 1e-12);

    // 생성 직후에도 유도값이 준비되어 있어야 한다.
    let d = store.derived();
    assert!(d.evaporation_rate_mm_per_day > 0.0);
    assert!(d.engine_power_w_per_m2.is_finite());
}

#[test]
fn update_recomputes_whole_pipeline() {
    let mut store = ParameterStore::new();
    let before = store.derived();

    let mut c = store.conditions();
    c.irradiance_w_per_m2 = 900.0;
    let after = store.update(c);

    assert!(after.evaporation_rate_mm_per_day > before.evaporation_rate_mm_per_day);
    assert!(after.latent_energy_w_per_m2 > before.latent_energy_w_per_m2);
    // 반환값과 저장된 값이 같은 스냅샷이어야 한다.
    assert_eq!(after, store.derived());
}

#[test]
fn identical_updates_are_bit_identical() {
    let mut store = ParameterStore::new();
    let c = SurfaceConditions {
        irradiance_w_per_m2: 321.0,
        air_temperature_k: 288.15,
        wind_speed_m_per_s: 1.7,
        relative_humidity_frac: 0.42,
    };
    let a = store.update(c);
    let b = store.update(c);
    assert_eq!(
        a.evaporation_rate_mm_per_day.to_bits(),
        b.evaporation_rate_mm_per_day.to_bits()
    );
    assert_eq!(
        a.engine_power_w_per_m2.to_bits(),
        b.engine_power_w_per_m2.to_bits()
    );
}

#[test]
fn derived_values_stay_consistent() {
    let store = ParameterStore::new();
    let d = store.derived();
    let expected_latent = d.evaporation_rate_mm_per_day * 2448.0 * 1000.0 / 86400.0;
    assert!((d.latent_energy_w_per_m2 - expected_latent).abs() < 1e-9);
}

#[test]
fn set_method_changes_derived_quantities() {
    let mut store = ParameterStore::new();
    let buck = store.derived();
    let antoine = store.set_method(VaporPressureMethod::Antoine);
    assert!(
        (buck.evaporation_rate_mm_per_day - antoine.evaporation_rate_mm_per_day).abs() > 1e-9,
        "buck={} antoine={}",
        buck.evaporation_rate_mm_per_day,
        antoine.evaporation_rate_mm_per_day
    );
    assert!(
        (buck.engine_power_w_per_m2 - antoine.engine_power_w_per_m2).abs() > 1e-9
    );
}

#[test]
fn zero_ambient_humidity_gives_nonfinite_power() {
    let mut store = ParameterStore::new();
    let mut c = store.conditions();
    c.relative_humidity_frac = 0.0;
    let d = store.update(c);
    assert!(!d.engine_power_w_per_m2.is_finite());
    // 나머지 유도값은 여전히 유한해야 한다.
    assert!(d.evaporation_rate_mm_per_day.is_finite());
    assert!(d.latent_energy_w_per_m2.is_finite());
}
