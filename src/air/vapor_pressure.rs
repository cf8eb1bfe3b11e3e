use serde::{Deserialize, Serialize};

use crate::constants::{IDEAL_GAS_CONSTANT, KELVIN_OFFSET};

/// 포화수증기압 경험식 종류.
///
/// 다섯 식 모두 온도(K)만으로 kPa 단위 포화수증기압을 돌려준다.
/// 물리적으로 유효한 범위(대략 150~650 K)를 벗어난 입력은 거르지 않고
/// IEEE-754 규칙대로 NaN/Infinity를 그대로 전파한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VaporPressureMethod {
    Buck,
    Magnus,
    Tetens,
    Antoine,
    GoffGratch,
}

impl Default for VaporPressureMethod {
    fn default() -> Self {
        VaporPressureMethod::Buck
    }
}

impl VaporPressureMethod {
    pub const ALL: [VaporPressureMethod; 5] = [
        VaporPressureMethod::Buck,
        VaporPressureMethod::Magnus,
        VaporPressureMethod::Tetens,
        VaporPressureMethod::Antoine,
        VaporPressureMethod::GoffGratch,
    ];

    /// 설정 파일/CLI에서 쓰는 문자열 코드.
    pub fn as_code(&self) -> &'static str {
        match self {
            VaporPressureMethod::Buck => "buck",
            VaporPressureMethod::Magnus => "magnus",
            VaporPressureMethod::Tetens => "tetens",
            VaporPressureMethod::Antoine => "antoine",
            VaporPressureMethod::GoffGratch => "goff-gratch",
        }
    }

    /// 문자열 코드를 enum으로 바꾼다. 알 수 없는 코드는 None.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "buck" => Some(VaporPressureMethod::Buck),
            "magnus" => Some(VaporPressureMethod::Magnus),
            "tetens" => Some(VaporPressureMethod::Tetens),
            "antoine" => Some(VaporPressureMethod::Antoine),
            "goff-gratch" | "goff_gratch" | "goffgratch" => Some(VaporPressureMethod::GoffGratch),
            _ => None,
        }
    }
}

// ---------------- 상수 ----------------
/// Goff-Gratch 기준 증기점 온도 (K)
const STEAM_POINT_K: f64 = 373.16;
/// mmHg → kPa
const MMHG_TO_KPA: f64 = 0.133322;
/// Clausius-Clapeyron용 물 몰 증발 엔탈피 (kJ/mol)
const MOLAR_ENTHALPY_OF_VAPORIZATION_KJ_PER_MOL: f64 = 40.66;
/// 표준 대기압 (kPa)
const STANDARD_PRESSURE_KPA: f64 = 101.325;
/// 물 끓는점 (K)
const WATER_BOILING_POINT_K: f64 = 373.15;

/// 선택한 경험식으로 포화수증기압(kPa)을 계산한다.
pub fn saturation_vapor_pressure_kpa(t_kelvin: f64, method: VaporPressureMethod) -> f64 {
    match method {
        VaporPressureMethod::Buck => buck_kpa(t_kelvin),
        VaporPressureMethod::Magnus => magnus_kpa(t_kelvin),
        VaporPressureMethod::Tetens => tetens_kpa(t_kelvin),
        VaporPressureMethod::Antoine => antoine_kpa(t_kelvin),
        VaporPressureMethod::GoffGratch => goff_gratch_kpa(t_kelvin),
    }
}

/// Buck(1981) 식. hPa 결과를 10으로 나눠 kPa로 돌려준다.
fn buck_kpa(t_kelvin: f64) -> f64 {
    let t_c = t_kelvin - KELVIN_OFFSET;
    6.1121 * ((18.678 - t_c / 234.5) * t_c / (257.14 + t_c)).exp() / 10.0
}

/// Magnus 식.
fn magnus_kpa(t_kelvin: f64) -> f64 {
    let t_c = t_kelvin - KELVIN_OFFSET;
    6.112 * (17.67 * t_c / (t_c + 243.5)).exp() / 10.0
}

/// Tetens(1930) 식.
fn tetens_kpa(t_kelvin: f64) -> f64 {
    let t_c = t_kelvin - KELVIN_OFFSET;
    6.1078 * (17.27 * t_c / (t_c + 237.3)).exp() / 10.0
}

/// Antoine 식 (물 1~100 °C 계수, mmHg 기반).
/// T = 39.724 K에서 0으로 나눠 Infinity가 되지만 예외는 던지지 않는다.
fn antoine_kpa(t_kelvin: f64) -> f64 {
    10f64.powf(8.07131 - 1730.63 / (t_kelvin - 39.724)) * MMHG_TO_KPA
}

/// Goff-Gratch(1946) 식. 증기점 기준 log10 다항식을 지수화한 뒤 kPa로 환산한다.
fn goff_gratch_kpa(t_kelvin: f64) -> f64 {
    let ratio = STEAM_POINT_K / t_kelvin;
    let log10_e_hpa = -7.90298 * (ratio - 1.0)
        + 5.02808 * ratio.log10()
        - 1.3816e-7 * (10f64.powf(11.344 * (1.0 - t_kelvin / STEAM_POINT_K)) - 1.0)
        + 8.1328e-3 * (10f64.powf(-3.49149 * (ratio - 1.0)) - 1.0)
        + 1013.246f64.log10();
    10f64.powf(log10_e_hpa) / 10.0
}

/// Clausius-Clapeyron 근사로 수증기압(kPa)을 구한다.
///
/// 끓는점(373.15 K, 101.325 kPa)을 기준점으로 외삽하는 단순식이라
/// 다섯 경험식 대비 오차가 크다. 비교/검증 용도로만 쓴다.
pub fn clausius_clapeyron_kpa(t_kelvin: f64) -> f64 {
    let h_vap_j_per_mol = MOLAR_ENTHALPY_OF_VAPORIZATION_KJ_PER_MOL * 1000.0;
    let ln_p_ratio =
        -(h_vap_j_per_mol / IDEAL_GAS_CONSTANT) * (1.0 / t_kelvin - 1.0 / WATER_BOILING_POINT_K);
    STANDARD_PRESSURE_KPA * ln_p_ratio.exp()
}
