use evaporation_power_toolbox::air::vapor_pressure::VaporPressureMethod;
use evaporation_power_toolbox::weather::{
    self, parse_csv, rolling_weekly_mean, summarize, WeatherError,
};

const FIXTURE: &str = "\
latitude,longitude,elevation,utc_offset_seconds,timezone,timezone_abbreviation
40.7128,-74.006,32.0,0,GMT,GMT

time,temperature_2m (\u{b0}C),relative_humidity_2m (%),wind_speed_10m (km/h),terrestrial_radiation (W/m\u{b2})
1722470400,25.3,62,14.4,410.0
1722474000,26.1,58,10.8,520.5
1722477600,24.8,65,7.2,0.0
";

#[test]
fn parse_converts_units_to_si() {
    let series = parse_csv(FIXTURE).expect("parse fixture");
    assert!((series.latitude - 40.7128).abs() < 1e-9);
    assert!((series.longitude + 74.006).abs() < 1e-9);
    assert_eq!(series.records.len(), 3);

    let first = series.records[0];
    assert_eq!(first.epoch_s, 1722470400);
    assert!((first.temperature_k - 298.45).abs() < 1e-9);
    assert!((first.relative_humidity_frac - 0.62).abs() < 1e-9);
    assert!((first.wind_speed_m_per_s - 4.0).abs() < 1e-9);
    assert!((first.terrestrial_radiation_w_per_m2 - 410.0).abs() < 1e-9);
}

#[test]
fn series_computation_yields_positive_power() {
    let series = parse_csv(FIXTURE).expect("parse fixture");
    let derived = weather::compute_series_default(&series, VaporPressureMethod::Buck);
    assert_eq!(derived.len(), 3);
    for d in &derived {
        assert!(d.slope_kpa_per_k > 0.0);
        assert!(d.evaporation_rate_mm_per_day.is_finite());
        assert!(d.power_w_per_m2 > 0.0, "power={}", d.power_w_per_m2);
        let expected_energy = d.power_w_per_m2 * 3.6;
        assert!((d.energy_kj_per_m2 - expected_energy).abs() < 1e-9);
    }

    let summary = summarize(&derived);
    assert_eq!(summary.record_count, 3);
    assert!(summary.mean_power_w_per_m2 > 0.0);
    assert!(summary.peak_power_w_per_m2 >= summary.mean_power_w_per_m2);
    let expected_total = summary.mean_power_w_per_m2 * 3.0 * 3600.0;
    assert!(
        (summary.total_energy_j_per_m2 - expected_total).abs() < 1e-6,
        "total={}",
        summary.total_energy_j_per_m2
    );
}

#[test]
fn rolling_mean_matches_prefix_means_for_short_series() {
    let powers = [10.0, 20.0, 30.0];
    let rolling = rolling_weekly_mean(&powers);
    assert_eq!(rolling.len(), 3);
    assert!((rolling[0] - 10.0).abs() < 1e-12);
    assert!((rolling[1] - 15.0).abs() < 1e-12);
    assert!((rolling[2] - 20.0).abs() < 1e-12);
}

#[test]
fn missing_column_is_reported_by_name() {
    let broken = FIXTURE.replace("wind_speed_10m (km/h)", "wind_gusts_10m (km/h)");
    match parse_csv(&broken) {
        Err(WeatherError::MissingColumn(name)) => {
            assert!(name.contains("wind_speed_10m"), "name={name}")
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn malformed_row_reports_line_number() {
    let broken = FIXTURE.replace("1722474000,26.1,58,10.8,520.5", "1722474000,abc,58,10.8,520.5");
    match parse_csv(&broken) {
        Err(WeatherError::Parse { line, .. }) => assert_eq!(line, 6),
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn short_file_is_rejected() {
    assert!(matches!(
        parse_csv("latitude,longitude\n1,2\n"),
        Err(WeatherError::Parse { .. })
    ));
}
