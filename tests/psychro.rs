use evaporation_power_toolbox::air::slope::{slope_kpa_per_k, SlopeInput};
use evaporation_power_toolbox::air::vapor_pressure::{
    clausius_clapeyron_kpa, saturation_vapor_pressure_kpa, VaporPressureMethod,
};
use evaporation_power_toolbox::evaporation::{
    evaporation_rate_mm_per_day, latent_energy_flux_w_per_m2, power_per_area_w_per_m2,
    EvaporationRateInput, PowerPerAreaInput,
};

const ICE_POINT_K: f64 = 273.15;

#[test]
fn ice_point_vapor_pressure_near_0_611_kpa() {
    // 각 경험식의 알려진 오차 범위 안에서 0.611 kPa에 수렴해야 한다.
    let tolerances = [
        (VaporPressureMethod::Buck, 0.001),
        (VaporPressureMethod::Magnus, 0.001),
        (VaporPressureMethod::Tetens, 0.001),
        (VaporPressureMethod::Antoine, 0.006),
        (VaporPressureMethod::GoffGratch, 0.002),
    ];
    for (method, tol) in tolerances {
        let e_s = saturation_vapor_pressure_kpa(ICE_POINT_K, method);
        assert!(
            (e_s - 0.611).abs() < tol,
            "{}: e_s={e_s}",
            method.as_code()
        );
    }
}

#[test]
fn vapor_pressure_strictly_increasing_minus40_to_50_c() {
    for method in VaporPressureMethod::ALL {
        let mut prev = saturation_vapor_pressure_kpa(ICE_POINT_K - 40.0, method);
        let mut t_c = -39.0;
        while t_c <= 50.0 {
            let e_s = saturation_vapor_pressure_kpa(ICE_POINT_K + t_c, method);
            assert!(
                e_s > prev,
                "{} not increasing at {t_c} °C: {e_s} <= {prev}",
                method.as_code()
            );
            prev = e_s;
            t_c += 1.0;
        }
    }
}

#[test]
fn antoine_singularity_propagates_without_panic() {
    // T = 39.724 K에서 분모가 0이지만 예외 없이 IEEE-754 규칙대로 값이 나온다.
    let e_s = saturation_vapor_pressure_kpa(39.724, VaporPressureMethod::Antoine);
    assert!(!e_s.is_nan(), "e_s={e_s}");
}

#[test]
fn clausius_clapeyron_anchored_at_boiling_point() {
    let p = clausius_clapeyron_kpa(373.15);
    assert!((p - 101.325).abs() < 1e-9, "p={p}");
    // 빙점 근처에서는 과대평가하지만 양수 유한값이어야 한다.
    let p_cold = clausius_clapeyron_kpa(ICE_POINT_K);
    assert!(p_cold.is_finite() && p_cold > 0.0, "p_cold={p_cold}");
}

#[test]
fn slope_positive_over_physical_range() {
    let mut t_k = 233.15;
    while t_k <= 323.15 {
        for method in VaporPressureMethod::ALL {
            let mut input = SlopeInput::at_temperature(t_k);
            input.method = method;
            let delta = slope_kpa_per_k(input);
            assert!(
                delta > 0.0,
                "{} delta={delta} at T={t_k}",
                method.as_code()
            );
        }
        t_k += 10.0;
    }
}

#[test]
fn slope_uses_supplied_vapor_pressure_when_given() {
    let mut input = SlopeInput::at_temperature(293.15);
    input.e_s_kpa = Some(2.0);
    let delta = slope_kpa_per_k(input);
    // Δ = 2448e3 * 2.0 / (461.5 * 293.15²)
    let expected = 2_448_000.0 * 2.0 / (461.5 * 293.15 * 293.15);
    assert!((delta - expected).abs() < 1e-12, "delta={delta}");
}

#[test]
fn reference_scenario_buck_20c() {
    // 500 W/m², 20 °C, 4 m/s, 상대습도 5 %, Buck.
    let t_k = 293.15;
    let delta = slope_kpa_per_k(SlopeInput::at_temperature(t_k));
    assert!((delta - 0.1444).abs() < 2e-3, "delta={delta}");

    let rate =
        evaporation_rate_mm_per_day(EvaporationRateInput::new(500.0, delta, 4.0, t_k, 0.05));
    assert!(rate.is_finite() && rate > 0.0, "rate={rate}");
    assert!((rate - 17.84).abs() < 0.1, "rate={rate}");

    let latent = latent_energy_flux_w_per_m2(rate);
    let expected_latent = rate * 2448.0 * 1000.0 / 86400.0;
    assert!((latent - expected_latent).abs() < 1e-9, "latent={latent}");

    let power = power_per_area_w_per_m2(PowerPerAreaInput::new(rate, t_k, 0.975, 0.05));
    assert!(power.is_finite() && power > 0.0, "power={power}");
    assert!((power - 83.0).abs() < 1.0, "power={power}");
}

#[test]
fn calculators_are_idempotent() {
    let input = EvaporationRateInput::new(640.0, 0.15, 2.5, 301.0, 0.4);
    let a = evaporation_rate_mm_per_day(input);
    let b = evaporation_rate_mm_per_day(input);
    assert_eq!(a.to_bits(), b.to_bits());

    let p_in = PowerPerAreaInput::new(a, 301.0, 0.99, 0.4);
    let p1 = power_per_area_w_per_m2(p_in);
    let p2 = power_per_area_w_per_m2(p_in);
    assert_eq!(p1.to_bits(), p2.to_bits());
}

#[test]
fn power_edge_cases_are_nonfinite_not_panics() {
    // 대기 습도 0 → 비율 무한대 → +Infinity
    let p = power_per_area_w_per_m2(PowerPerAreaInput::new(10.0, 293.15, 0.975, 0.0));
    assert!(!p.is_finite(), "p={p}");

    // 포화층 습도 0 → ln(0) → -Infinity
    let p = power_per_area_w_per_m2(PowerPerAreaInput::new(10.0, 293.15, 0.0, 0.5));
    assert!(!p.is_finite(), "p={p}");

    // 음수 비율 → NaN
    let p = power_per_area_w_per_m2(PowerPerAreaInput::new(10.0, 293.15, -0.5, 0.5));
    assert!(p.is_nan(), "p={p}");
}

#[test]
fn changing_method_shifts_results_through_vapor_pressure_only() {
    let t_k = 303.15;
    let mut rates = Vec::new();
    for method in [VaporPressureMethod::Buck, VaporPressureMethod::Tetens] {
        let mut slope_input = SlopeInput::at_temperature(t_k);
        slope_input.method = method;
        let delta = slope_kpa_per_k(slope_input);
        let rate = evaporation_rate_mm_per_day(
            EvaporationRateInput::new(700.0, delta, 3.0, t_k, 0.3).with_method(method),
        );
        assert!(rate.is_finite() && rate > 0.0);
        rates.push(rate);
    }
    assert!(
        (rates[0] - rates[1]).abs() > 1e-6,
        "buck={} tetens={}",
        rates[0],
        rates[1]
    );
}
