use std::io::{self, Write};
use std::path::Path;

use crate::air::slope::{slope_kpa_per_k, SlopeInput};
use crate::air::vapor_pressure::{
    clausius_clapeyron_kpa, saturation_vapor_pressure_kpa, VaporPressureMethod,
};
use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::store::{ParameterStore, SurfaceConditions};
use crate::units::pressure::{convert_pressure, PressureUnit};
use crate::units::temperature::{to_kelvin, TemperatureUnit};
use crate::units::velocity::{to_meter_per_second, VelocityUnit};
use crate::weather;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EngineCalc,
    VaporTable,
    UnitConversion,
    WeatherCsv,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ENGINE_CALC));
    println!("{}", tr.t(keys::MAIN_MENU_VAPOR_TABLE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_WEATHER_CSV));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::EngineCalc),
            "2" => return Ok(MenuChoice::VaporTable),
            "3" => return Ok(MenuChoice::UnitConversion),
            "4" => return Ok(MenuChoice::WeatherCsv),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 증발 엔진 출력 계산 메뉴를 처리한다.
pub fn handle_engine_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ENGINE_HEADING));
    println!("{}", tr.t(keys::HELP_ENGINE));

    let irradiance = read_f64(tr, tr.t(keys::ENGINE_PROMPT_IRRADIANCE))?;
    let t_unit = read_temperature_unit(tr)?;
    let t_value = read_f64(tr, tr.t(keys::ENGINE_PROMPT_TEMPERATURE))?;
    let v_unit = read_velocity_unit(tr)?;
    let v_value = read_f64(tr, tr.t(keys::ENGINE_PROMPT_WIND))?;
    let rel_hum_pct = read_f64(tr, tr.t(keys::ENGINE_PROMPT_REL_HUM))?;
    let rel_hum_wet_pct = read_f64_or(
        tr,
        tr.t(keys::ENGINE_PROMPT_REL_HUM_WET),
        cfg.slider_defaults.rel_hum_wet_pct,
    )?;

    let conditions = SurfaceConditions {
        irradiance_w_per_m2: irradiance,
        air_temperature_k: to_kelvin(t_value, t_unit),
        wind_speed_m_per_s: to_meter_per_second(v_value, v_unit),
        relative_humidity_frac: rel_hum_pct / 100.0,
    };
    let store = ParameterStore::with_conditions(
        conditions,
        cfg.vapor_pressure_method,
        rel_hum_wet_pct / 100.0,
    );
    let derived = store.derived();

    println!(
        "{} {:.4} kPa/K",
        tr.t(keys::ENGINE_RESULT_SLOPE),
        derived.slope_kpa_per_k
    );
    println!(
        "{} {:.2} mm/day",
        tr.t(keys::ENGINE_RESULT_EVAPORATION),
        derived.evaporation_rate_mm_per_day
    );
    println!(
        "{} {:.1} W/m²",
        tr.t(keys::ENGINE_RESULT_LATENT),
        derived.latent_energy_w_per_m2
    );
    println!(
        "{} {:.1} W/m²",
        tr.t(keys::ENGINE_RESULT_POWER),
        derived.engine_power_w_per_m2
    );
    if !derived.engine_power_w_per_m2.is_finite() {
        println!("{}", tr.t(keys::ENGINE_NOTE_NONFINITE));
    }
    Ok(())
}

/// 포화수증기압 비교표 메뉴를 처리한다.
pub fn handle_vapor_table(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::VAPOR_HEADING));
    let t_unit = read_temperature_unit(tr)?;
    let t_value = read_f64(tr, tr.t(keys::VAPOR_PROMPT_TEMPERATURE))?;
    let t_kelvin = to_kelvin(t_value, t_unit);

    let out_unit = cfg.default_units.vapor_pressure;
    let unit_label = pressure_unit_label(out_unit);

    println!(
        "{:<28} {}",
        tr.t(keys::VAPOR_TABLE_METHOD),
        tr.t(keys::VAPOR_TABLE_ES)
    );
    for method in VaporPressureMethod::ALL {
        let e_s_kpa = saturation_vapor_pressure_kpa(t_kelvin, method);
        let shown = convert_pressure(e_s_kpa, PressureUnit::KiloPascal, out_unit);
        println!("{:<28} {:.4} {}", method.as_code(), shown, unit_label);
    }
    let cc_kpa = clausius_clapeyron_kpa(t_kelvin);
    let cc_shown = convert_pressure(cc_kpa, PressureUnit::KiloPascal, out_unit);
    println!(
        "{:<28} {:.4} {}",
        tr.t(keys::VAPOR_ROW_CLAUSIUS),
        cc_shown,
        unit_label
    );

    let mut slope_input = SlopeInput::at_temperature(t_kelvin);
    slope_input.method = cfg.vapor_pressure_method;
    println!(
        "{} {:.5} kPa/K ({})",
        tr.t(keys::VAPOR_RESULT_SLOPE),
        slope_kpa_per_k(slope_input),
        cfg.vapor_pressure_method.as_code()
    );
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Temperature),
        2 => Some(QuantityKind::Velocity),
        3 => Some(QuantityKind::Pressure),
        _ => None,
    }
}

/// 날씨 CSV 분석 메뉴를 처리한다.
pub fn handle_weather_csv(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::WEATHER_HEADING));
    let path_input = read_line(tr.t(keys::WEATHER_PROMPT_PATH))?;
    let path = if path_input.trim().is_empty() {
        "./weather-data.csv"
    } else {
        path_input.trim()
    };

    let series = weather::load_csv(Path::new(path))?;
    let derived = weather::compute_series(
        &series,
        cfg.vapor_pressure_method,
        cfg.slider_defaults.rel_hum_wet_pct / 100.0,
    );
    let summary = weather::summarize(&derived);

    println!(
        "{} ({:.4}, {:.4})",
        tr.t(keys::WEATHER_RESULT_SITE),
        series.latitude,
        series.longitude
    );
    println!("{} {}", tr.t(keys::WEATHER_RESULT_COUNT), summary.record_count);
    println!(
        "{} {:.2} mm/day",
        tr.t(keys::WEATHER_RESULT_MEAN_RATE),
        summary.mean_evaporation_rate_mm_per_day
    );
    println!(
        "{} {:.2} W/m²",
        tr.t(keys::WEATHER_RESULT_MEAN_POWER),
        summary.mean_power_w_per_m2
    );
    println!(
        "{} {:.2} W/m²",
        tr.t(keys::WEATHER_RESULT_PEAK_POWER),
        summary.peak_power_w_per_m2
    );
    println!(
        "{} {:.3e} J/m²",
        tr.t(keys::WEATHER_RESULT_TOTAL_ENERGY),
        summary.total_energy_j_per_m2
    );
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_METHOD),
        cfg.vapor_pressure_method.as_code()
    );
    println!("{}", tr.t(keys::SETTINGS_METHOD_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if !sel.trim().is_empty() {
        let method = match sel.trim() {
            "1" => Some(VaporPressureMethod::Buck),
            "2" => Some(VaporPressureMethod::Magnus),
            "3" => Some(VaporPressureMethod::Tetens),
            "4" => Some(VaporPressureMethod::Antoine),
            "5" => Some(VaporPressureMethod::GoffGratch),
            _ => None,
        };
        match method {
            Some(m) => cfg.vapor_pressure_method = m,
            None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }

    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language
    );
    let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANG))?;
    if !lang.trim().is_empty() {
        match lang.trim().to_lowercase().as_str() {
            code @ ("auto" | "en" | "en-us" | "ko" | "ko-kr") => cfg.language = code.to_string(),
            _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }

    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 기본값을 돌려주는 숫자 입력.
fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        if s.trim().is_empty() {
            return Ok(default);
        }
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_temperature_unit(tr: &Translator) -> Result<TemperatureUnit, AppError> {
    println!("{}", tr.t(keys::TEMPERATURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => TemperatureUnit::Celsius,
        "2" => TemperatureUnit::Kelvin,
        "3" => TemperatureUnit::Fahrenheit,
        _ => TemperatureUnit::Celsius,
    };
    Ok(unit)
}

fn read_velocity_unit(tr: &Translator) -> Result<VelocityUnit, AppError> {
    println!("{}", tr.t(keys::VELOCITY_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => VelocityUnit::MeterPerSecond,
        "2" => VelocityUnit::KilometerPerHour,
        "3" => VelocityUnit::MilePerHour,
        _ => VelocityUnit::MeterPerSecond,
    };
    Ok(unit)
}

fn pressure_unit_label(unit: PressureUnit) -> &'static str {
    match unit {
        PressureUnit::KiloPascal => "kPa",
        PressureUnit::HectoPascal => "hPa",
        PressureUnit::Pascal => "Pa",
        PressureUnit::MilliBar => "mbar",
        PressureUnit::MmHg => "mmHg",
        PressureUnit::Atm => "atm",
    }
}
