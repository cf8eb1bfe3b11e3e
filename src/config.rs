use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::air::vapor_pressure::VaporPressureMethod;
use crate::units::{PressureUnit, TemperatureUnit, VelocityUnit};

/// 슬라이더 초기값 묶음. UI에서 보여주는 단위 그대로 저장한다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SliderDefaults {
    /// 일사량 (W/m²)
    pub irradiance_w_per_m2: f64,
    /// 기온 (°C)
    pub air_temperature_c: f64,
    /// 풍속 (m/s)
    pub wind_speed_m_per_s: f64,
    /// 대기 상대습도 (%)
    pub relative_humidity_pct: f64,
    /// 수면 위 포화층 상대습도 (%)
    pub rel_hum_wet_pct: f64,
}

impl Default for SliderDefaults {
    fn default() -> Self {
        Self {
            irradiance_w_per_m2: 500.0,
            air_temperature_c: 20.0,
            wind_speed_m_per_s: 4.0,
            relative_humidity_pct: 5.0,
            rel_hum_wet_pct: 97.5,
        }
    }
}

/// 막대 차트 축 최대값. 값이 넘치면 막대가 가득 찬 상태로 고정된다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChartAxes {
    pub evaporation_max_mm_per_day: f64,
    pub latent_max_w_per_m2: f64,
    pub power_max_w_per_m2: f64,
}

impl Default for ChartAxes {
    fn default() -> Self {
        Self {
            evaporation_max_mm_per_day: 30.0,
            latent_max_w_per_m2: 800.0,
            power_max_w_per_m2: 150.0,
        }
    }
}

/// 각 물리량별 기본 표시 단위 설정을 담는다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub temperature: TemperatureUnit,
    pub velocity: VelocityUnit,
    pub vapor_pressure: PressureUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            velocity: VelocityUnit::MeterPerSecond,
            vapor_pressure: PressureUnit::KiloPascal,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드 (auto/en-us/ko-kr 등)
    pub language: String,
    /// 언어팩 디렉터리 (locales/ 외 경로를 쓸 때)
    pub language_pack_dir: Option<String>,
    /// GUI 창 투명도 (0.3~1.0)
    pub window_alpha: f32,
    /// 포화수증기압 경험식 기본값
    pub vapor_pressure_method: VaporPressureMethod,
    pub slider_defaults: SliderDefaults,
    pub chart_axes: ChartAxes,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            window_alpha: 1.0,
            vapor_pressure_method: VaporPressureMethod::default(),
            slider_defaults: SliderDefaults::default(),
            chart_axes: ChartAxes::default(),
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
