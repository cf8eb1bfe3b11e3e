use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ENGINE_CALC: &str = "main_menu.engine_calc";
    pub const MAIN_MENU_VAPOR_TABLE: &str = "main_menu.vapor_table";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_WEATHER_CSV: &str = "main_menu.weather_csv";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const ENGINE_HEADING: &str = "engine.heading";
    pub const ENGINE_PROMPT_IRRADIANCE: &str = "engine.prompt_irradiance";
    pub const ENGINE_PROMPT_TEMPERATURE: &str = "engine.prompt_temperature";
    pub const ENGINE_PROMPT_WIND: &str = "engine.prompt_wind";
    pub const ENGINE_PROMPT_REL_HUM: &str = "engine.prompt_rel_hum";
    pub const ENGINE_PROMPT_REL_HUM_WET: &str = "engine.prompt_rel_hum_wet";
    pub const ENGINE_RESULT_SLOPE: &str = "engine.result_slope";
    pub const ENGINE_RESULT_EVAPORATION: &str = "engine.result_evaporation";
    pub const ENGINE_RESULT_LATENT: &str = "engine.result_latent";
    pub const ENGINE_RESULT_POWER: &str = "engine.result_power";
    pub const ENGINE_NOTE_NONFINITE: &str = "engine.note_nonfinite";

    pub const VAPOR_HEADING: &str = "vapor.heading";
    pub const VAPOR_PROMPT_TEMPERATURE: &str = "vapor.prompt_temperature";
    pub const VAPOR_TABLE_METHOD: &str = "vapor.table_method";
    pub const VAPOR_TABLE_ES: &str = "vapor.table_es";
    pub const VAPOR_ROW_CLAUSIUS: &str = "vapor.row_clausius";
    pub const VAPOR_RESULT_SLOPE: &str = "vapor.result_slope";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const WEATHER_HEADING: &str = "weather.heading";
    pub const WEATHER_PROMPT_PATH: &str = "weather.prompt_path";
    pub const WEATHER_RESULT_SITE: &str = "weather.result_site";
    pub const WEATHER_RESULT_COUNT: &str = "weather.result_count";
    pub const WEATHER_RESULT_MEAN_RATE: &str = "weather.result_mean_rate";
    pub const WEATHER_RESULT_MEAN_POWER: &str = "weather.result_mean_power";
    pub const WEATHER_RESULT_PEAK_POWER: &str = "weather.result_peak_power";
    pub const WEATHER_RESULT_TOTAL_ENERGY: &str = "weather.result_total_energy";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_METHOD: &str = "settings.current_method";
    pub const SETTINGS_METHOD_OPTIONS: &str = "settings.method_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANG: &str = "settings.prompt_lang";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const TEMPERATURE_UNIT_OPTIONS: &str = "unit.temperature_options";
    pub const VELOCITY_UNIT_OPTIONS: &str = "unit.velocity_options";
    pub const PRESSURE_UNIT_OPTIONS: &str = "unit.pressure_options";

    pub const HELP_ENGINE: &str = "help.engine";
    pub const HELP_VAPOR: &str = "help.vapor";
    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
    pub const HELP_WEATHER: &str = "help.weather";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Evaporation Power Toolbox ===",
        MAIN_MENU_ENGINE_CALC => "1) 증발 엔진 출력 계산",
        MAIN_MENU_VAPOR_TABLE => "2) 포화수증기압 비교표",
        MAIN_MENU_UNIT_CONVERSION => "3) 단위 변환기",
        MAIN_MENU_WEATHER_CSV => "4) 날씨 CSV 분석",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ENGINE_HEADING => "\n-- 증발 엔진 출력 계산 --",
        ENGINE_PROMPT_IRRADIANCE => "일사량 [W/m²]: ",
        ENGINE_PROMPT_TEMPERATURE => "기온 값: ",
        ENGINE_PROMPT_WIND => "풍속 값: ",
        ENGINE_PROMPT_REL_HUM => "대기 상대습도 [%]: ",
        ENGINE_PROMPT_REL_HUM_WET => "포화층 상대습도 [%] (기본 97.5): ",
        ENGINE_RESULT_SLOPE => "포화 곡선 기울기 Δ:",
        ENGINE_RESULT_EVAPORATION => "증발률:",
        ENGINE_RESULT_LATENT => "잠열 플럭스:",
        ENGINE_RESULT_POWER => "엔진 이론 출력:",
        ENGINE_NOTE_NONFINITE => "유한하지 않은 값은 유효한 추정이 아닙니다 (습도 0 등).",
        VAPOR_HEADING => "\n-- 포화수증기압 비교표 --",
        VAPOR_PROMPT_TEMPERATURE => "온도 값: ",
        VAPOR_TABLE_METHOD => "계산식",
        VAPOR_TABLE_ES => "e_s",
        VAPOR_ROW_CLAUSIUS => "clausius-clapeyron (참고)",
        VAPOR_RESULT_SLOPE => "포화 곡선 기울기 Δ:",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 온도  2) 풍속  3) 압력",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: C, m/s, kPa): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: K, km/h, mmHg): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        WEATHER_HEADING => "\n-- 날씨 CSV 분석 --",
        WEATHER_PROMPT_PATH => "CSV 경로 (기본 ./weather-data.csv): ",
        WEATHER_RESULT_SITE => "지점:",
        WEATHER_RESULT_COUNT => "관측 수:",
        WEATHER_RESULT_MEAN_RATE => "평균 증발률:",
        WEATHER_RESULT_MEAN_POWER => "평균 출력밀도:",
        WEATHER_RESULT_PEAK_POWER => "최대 출력밀도:",
        WEATHER_RESULT_TOTAL_ENERGY => "기간 총 에너지:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_METHOD => "현재 포화수증기압 계산식:",
        SETTINGS_METHOD_OPTIONS => "1) buck  2) magnus  3) tetens  4) antoine  5) goff-gratch",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_LANG => "언어 코드(auto/en-us/ko-kr, 취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        TEMPERATURE_UNIT_OPTIONS => "온도 단위: 1=°C 2=K 3=°F",
        VELOCITY_UNIT_OPTIONS => "풍속 단위: 1=m/s 2=km/h 3=mph",
        PRESSURE_UNIT_OPTIONS => "압력 단위: 1=kPa 2=hPa 3=Pa 4=mbar 5=mmHg 6=atm",
        HELP_ENGINE => "도움말: 일사량, 기온, 풍속, 상대습도를 입력하면 Δ → 증발률 → 잠열/출력 순으로 계산합니다.",
        HELP_VAPOR => "도움말: 한 온도에 대해 다섯 경험식의 포화수증기압을 나란히 보여줍니다.",
        HELP_UNIT_CONVERSION => "도움말: 물리량 번호 → 값 → 입력/변환 단위 순으로 입력 (예: C/K/F, m/s/km/h, kPa/mmHg).",
        HELP_WEATHER => "도움말: Open-Meteo 형식 시간별 CSV를 읽어 기간 평균/최대 출력과 총 에너지를 요약합니다.",
        HELP_SETTINGS => "도움말: 기본 계산식과 언어를 바꾸면 config.toml에 저장됩니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Evaporation Power Toolbox ===",
        MAIN_MENU_ENGINE_CALC => "1) Evaporation engine power",
        MAIN_MENU_VAPOR_TABLE => "2) Saturation vapor pressure table",
        MAIN_MENU_UNIT_CONVERSION => "3) Unit converter",
        MAIN_MENU_WEATHER_CSV => "4) Weather CSV analysis",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ENGINE_HEADING => "\n-- Evaporation Engine Power --",
        ENGINE_PROMPT_IRRADIANCE => "Irradiance [W/m²]: ",
        ENGINE_PROMPT_TEMPERATURE => "Air temperature value: ",
        ENGINE_PROMPT_WIND => "Wind speed value: ",
        ENGINE_PROMPT_REL_HUM => "Ambient relative humidity [%]: ",
        ENGINE_PROMPT_REL_HUM_WET => "Saturated-zone relative humidity [%] (default 97.5): ",
        ENGINE_RESULT_SLOPE => "Vapor-pressure curve slope Δ:",
        ENGINE_RESULT_EVAPORATION => "Evaporation rate:",
        ENGINE_RESULT_LATENT => "Latent energy flux:",
        ENGINE_RESULT_POWER => "Theoretical engine power:",
        ENGINE_NOTE_NONFINITE => "Non-finite values mean no valid estimate (e.g. zero humidity).",
        VAPOR_HEADING => "\n-- Saturation Vapor Pressure Table --",
        VAPOR_PROMPT_TEMPERATURE => "Temperature value: ",
        VAPOR_TABLE_METHOD => "Method",
        VAPOR_TABLE_ES => "e_s",
        VAPOR_ROW_CLAUSIUS => "clausius-clapeyron (reference)",
        VAPOR_RESULT_SLOPE => "Vapor-pressure curve slope Δ:",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Temperature  2) Wind speed  3) Pressure",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: C, m/s, kPa): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: K, km/h, mmHg): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        WEATHER_HEADING => "\n-- Weather CSV Analysis --",
        WEATHER_PROMPT_PATH => "CSV path (default ./weather-data.csv): ",
        WEATHER_RESULT_SITE => "Site:",
        WEATHER_RESULT_COUNT => "Records:",
        WEATHER_RESULT_MEAN_RATE => "Mean evaporation rate:",
        WEATHER_RESULT_MEAN_POWER => "Mean power density:",
        WEATHER_RESULT_PEAK_POWER => "Peak power density:",
        WEATHER_RESULT_TOTAL_ENERGY => "Total energy over period:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_METHOD => "Current vapor-pressure method:",
        SETTINGS_METHOD_OPTIONS => "1) buck  2) magnus  3) tetens  4) antoine  5) goff-gratch",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_LANG => "Language code (auto/en-us/ko-kr, enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        TEMPERATURE_UNIT_OPTIONS => "Temperature units: 1=°C 2=K 3=°F",
        VELOCITY_UNIT_OPTIONS => "Wind speed units: 1=m/s 2=km/h 3=mph",
        PRESSURE_UNIT_OPTIONS => "Pressure units: 1=kPa 2=hPa 3=Pa 4=mbar 5=mmHg 6=atm",
        HELP_ENGINE => "Help: enter irradiance, temperature, wind and humidity; computes Δ → evaporation rate → latent flux/power.",
        HELP_VAPOR => "Help: shows saturation vapor pressure from the five empirical formulas side by side.",
        HELP_UNIT_CONVERSION => "Help: choose quantity → enter value → from/to units (C/K/F, m/s/km/h, kPa/mmHg, etc).",
        HELP_WEATHER => "Help: reads an Open-Meteo style hourly CSV and summarizes mean/peak power and total energy.",
        HELP_SETTINGS => "Help: default method and language are persisted to config.toml.",
        _ => return None,
    })
}
