//! Open-Meteo 형식의 시간별 날씨 CSV를 읽어 증발률/출력 시계열을 계산한다.
//! 파일 구조: 메타데이터 2행(위도/경도 등) + 빈 행 + 데이터 헤더 + 시간별 행.

use std::fs;
use std::path::Path;

use crate::air::slope::{slope_kpa_per_k, SlopeInput};
use crate::air::vapor_pressure::VaporPressureMethod;
use crate::evaporation::{
    evaporation_rate_mm_per_day, power_per_area_w_per_m2, EvaporationRateInput, PowerPerAreaInput,
};
use crate::store::DEFAULT_REL_HUM_WET_FRAC;
use crate::units::temperature::{to_kelvin, TemperatureUnit};
use crate::units::velocity::{to_meter_per_second, VelocityUnit};

const COL_TIME: &str = "time";
const COL_TEMPERATURE: &str = "temperature_2m (°C)";
const COL_RELATIVE_HUMIDITY: &str = "relative_humidity_2m (%)";
const COL_WIND_SPEED: &str = "wind_speed_10m (km/h)";
const COL_RADIATION: &str = "terrestrial_radiation (W/m²)";

/// 시간별 데이터 한 주를 이루는 표본 수.
const SAMPLES_PER_WEEK: usize = 168;

/// CSV 로드/파싱 시 발생 가능한 오류.
#[derive(Debug)]
pub enum WeatherError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 필요한 열이 헤더에 없음
    MissingColumn(String),
    /// 행 파싱 실패
    Parse { line: usize, message: String },
}

impl std::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherError::Io(e) => write!(f, "CSV 입출력 오류: {e}"),
            WeatherError::MissingColumn(c) => write!(f, "필요한 열이 없습니다: {c}"),
            WeatherError::Parse { line, message } => {
                write!(f, "CSV 파싱 오류(줄 {line}): {message}")
            }
        }
    }
}

impl std::error::Error for WeatherError {}

impl From<std::io::Error> for WeatherError {
    fn from(value: std::io::Error) -> Self {
        WeatherError::Io(value)
    }
}

/// SI 단위로 환산된 시간별 관측 한 건.
#[derive(Debug, Clone, Copy)]
pub struct WeatherRecord {
    /// 관측 시각 (epoch 초)
    pub epoch_s: i64,
    /// 기온 (K)
    pub temperature_k: f64,
    /// 상대습도 (0~1)
    pub relative_humidity_frac: f64,
    /// 풍속 (m/s)
    pub wind_speed_m_per_s: f64,
    /// 지표 복사량 (W/m²)
    pub terrestrial_radiation_w_per_m2: f64,
}

/// 관측 지점 정보와 관측 목록.
#[derive(Debug, Clone)]
pub struct WeatherSeries {
    pub latitude: f64,
    pub longitude: f64,
    pub records: Vec<WeatherRecord>,
}

/// 관측 한 건에서 유도된 값 묶음.
#[derive(Debug, Clone, Copy)]
pub struct DerivedRecord {
    pub epoch_s: i64,
    pub slope_kpa_per_k: f64,
    pub evaporation_rate_mm_per_day: f64,
    pub power_w_per_m2: f64,
    /// 한 시간 동안의 에너지 (kJ/m²)
    pub energy_kj_per_m2: f64,
}

/// 시계열 전체 요약 통계.
#[derive(Debug, Clone, Copy)]
pub struct SeriesSummary {
    pub record_count: usize,
    pub mean_evaporation_rate_mm_per_day: f64,
    pub mean_power_w_per_m2: f64,
    pub peak_power_w_per_m2: f64,
    /// 기간 전체 에너지 (J/m²). 시간별 표본 가정으로 power·3600을 적산한다.
    pub total_energy_j_per_m2: f64,
}

/// 파일을 읽어 파싱한다.
pub fn load_csv(path: &Path) -> Result<WeatherSeries, WeatherError> {
    let text = fs::read_to_string(path)?;
    parse_csv(&text)
}

/// CSV 본문을 파싱한다. 메타데이터 2행 + 빈 행 + 헤더를 전제로 한다.
pub fn parse_csv(text: &str) -> Result<WeatherSeries, WeatherError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 5 {
        return Err(WeatherError::Parse {
            line: lines.len(),
            message: "메타데이터/헤더/데이터 행이 부족합니다".into(),
        });
    }

    let (latitude, longitude) = parse_site_metadata(lines[0], lines[1])?;

    let header: Vec<&str> = lines[3].split(',').map(str::trim).collect();
    let time_idx = column_index(&header, COL_TIME)?;
    let temp_idx = column_index(&header, COL_TEMPERATURE)?;
    let rh_idx = column_index(&header, COL_RELATIVE_HUMIDITY)?;
    let wind_idx = column_index(&header, COL_WIND_SPEED)?;
    let rad_idx = column_index(&header, COL_RADIATION)?;

    let mut records = Vec::with_capacity(lines.len().saturating_sub(4));
    for (offset, raw) in lines[4..].iter().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let line_no = offset + 5;
        let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
        let max_idx = [time_idx, temp_idx, rh_idx, wind_idx, rad_idx]
            .into_iter()
            .max()
            .unwrap_or(0);
        if fields.len() <= max_idx {
            return Err(WeatherError::Parse {
                line: line_no,
                message: format!("열 수가 부족합니다 ({}개)", fields.len()),
            });
        }

        let epoch_s = parse_i64(fields[time_idx], line_no)?;
        let temp_c = parse_f64(fields[temp_idx], line_no)?;
        let rh_pct = parse_f64(fields[rh_idx], line_no)?;
        let wind_kmh = parse_f64(fields[wind_idx], line_no)?;
        let radiation = parse_f64(fields[rad_idx], line_no)?;

        records.push(WeatherRecord {
            epoch_s,
            temperature_k: to_kelvin(temp_c, TemperatureUnit::Celsius),
            relative_humidity_frac: rh_pct / 100.0,
            wind_speed_m_per_s: to_meter_per_second(wind_kmh, VelocityUnit::KilometerPerHour),
            terrestrial_radiation_w_per_m2: radiation,
        });
    }

    Ok(WeatherSeries {
        latitude,
        longitude,
        records,
    })
}

/// 관측마다 Δ → E_pr → 출력 → 시간당 에너지를 계산한다.
pub fn compute_series(
    series: &WeatherSeries,
    method: VaporPressureMethod,
    rel_hum_wet_frac: f64,
) -> Vec<DerivedRecord> {
    series
        .records
        .iter()
        .map(|r| {
            let mut slope_input = SlopeInput::at_temperature(r.temperature_k);
            slope_input.method = method;
            let slope = slope_kpa_per_k(slope_input);

            let rate = evaporation_rate_mm_per_day(
                EvaporationRateInput::new(
                    r.terrestrial_radiation_w_per_m2,
                    slope,
                    r.wind_speed_m_per_s,
                    r.temperature_k,
                    r.relative_humidity_frac,
                )
                .with_method(method),
            );

            let power = power_per_area_w_per_m2(PowerPerAreaInput::new(
                rate,
                r.temperature_k,
                rel_hum_wet_frac,
                r.relative_humidity_frac,
            ));

            DerivedRecord {
                epoch_s: r.epoch_s,
                slope_kpa_per_k: slope,
                evaporation_rate_mm_per_day: rate,
                power_w_per_m2: power,
                energy_kj_per_m2: power * 3600.0 / 1000.0,
            }
        })
        .collect()
}

/// 기본 포화층 습도로 시계열을 계산한다.
pub fn compute_series_default(
    series: &WeatherSeries,
    method: VaporPressureMethod,
) -> Vec<DerivedRecord> {
    compute_series(series, method, DEFAULT_REL_HUM_WET_FRAC)
}

/// 직전 1주(168표본) 후행 이동평균. 앞부분은 가용 표본만으로 평균한다.
pub fn rolling_weekly_mean(powers: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(powers.len());
    let mut window_sum = 0.0;
    for (i, p) in powers.iter().enumerate() {
        window_sum += p;
        if i >= SAMPLES_PER_WEEK {
            window_sum -= powers[i - SAMPLES_PER_WEEK];
        }
        let window_len = (i + 1).min(SAMPLES_PER_WEEK);
        out.push(window_sum / window_len as f64);
    }
    out
}

/// 요약 통계를 만든다. 유한하지 않은 출력값은 통계에서 제외한다.
pub fn summarize(derived: &[DerivedRecord]) -> SeriesSummary {
    let mut rate_sum = 0.0;
    let mut power_sum = 0.0;
    let mut peak = f64::NEG_INFINITY;
    let mut finite_count = 0usize;
    for d in derived {
        if d.power_w_per_m2.is_finite() && d.evaporation_rate_mm_per_day.is_finite() {
            rate_sum += d.evaporation_rate_mm_per_day;
            power_sum += d.power_w_per_m2;
            peak = peak.max(d.power_w_per_m2);
            finite_count += 1;
        }
    }
    let denom = finite_count.max(1) as f64;
    SeriesSummary {
        record_count: derived.len(),
        mean_evaporation_rate_mm_per_day: rate_sum / denom,
        mean_power_w_per_m2: power_sum / denom,
        peak_power_w_per_m2: if finite_count > 0 { peak } else { f64::NAN },
        total_energy_j_per_m2: power_sum * 3600.0,
    }
}

fn parse_site_metadata(header: &str, values: &str) -> Result<(f64, f64), WeatherError> {
    let meta_header: Vec<&str> = header.split(',').map(str::trim).collect();
    let meta_values: Vec<&str> = values.split(',').map(str::trim).collect();
    let lat_idx = column_index(&meta_header, "latitude")?;
    let lon_idx = column_index(&meta_header, "longitude")?;
    if meta_values.len() <= lat_idx.max(lon_idx) {
        return Err(WeatherError::Parse {
            line: 2,
            message: "메타데이터 값 행이 짧습니다".into(),
        });
    }
    let latitude = parse_f64(meta_values[lat_idx], 2)?;
    let longitude = parse_f64(meta_values[lon_idx], 2)?;
    Ok((latitude, longitude))
}

fn column_index(header: &[&str], name: &str) -> Result<usize, WeatherError> {
    header
        .iter()
        .position(|h| *h == name)
        .ok_or_else(|| WeatherError::MissingColumn(name.to_string()))
}

fn parse_f64(s: &str, line: usize) -> Result<f64, WeatherError> {
    s.parse::<f64>().map_err(|_| WeatherError::Parse {
        line,
        message: format!("숫자가 아닙니다: {s}"),
    })
}

fn parse_i64(s: &str, line: usize) -> Result<i64, WeatherError> {
    s.parse::<i64>().map_err(|_| WeatherError::Parse {
        line,
        message: format!("정수가 아닙니다: {s}"),
    })
}
