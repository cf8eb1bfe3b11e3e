use crate::constants::{EVAPORATION_CONVERSION_CONSTANT, IDEAL_GAS_CONSTANT};

/// 증발 구동 엔진의 이론 출력밀도 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct PowerPerAreaInput {
    /// 증발률 E_pr (mm/day)
    pub evaporation_rate_mm_per_day: f64,
    /// 기온 (K)
    pub air_temperature_k: f64,
    /// 수면 위 포화층 상대습도 (0.95~1.0 권장)
    pub rel_hum_wet_frac: f64,
    /// 대기 상대습도 (0~1)
    pub rel_hum_air_frac: f64,
    /// 환산 상수 c_t (mol·day/(mm·m²·s))
    pub conversion_constant: f64,
    /// 이상기체 상수 R (J/(mol·K))
    pub gas_constant: f64,
}

impl PowerPerAreaInput {
    /// 환산 상수와 기체상수를 기본값으로 채운 입력을 만든다.
    pub fn new(
        evaporation_rate_mm_per_day: f64,
        air_temperature_k: f64,
        rel_hum_wet_frac: f64,
        rel_hum_air_frac: f64,
    ) -> Self {
        Self {
            evaporation_rate_mm_per_day,
            air_temperature_k,
            rel_hum_wet_frac,
            rel_hum_air_frac,
            conversion_constant: EVAPORATION_CONVERSION_CONSTANT,
            gas_constant: IDEAL_GAS_CONSTANT,
        }
    }
}

/// P = c_t·E_pr·R·T·ln(RH_wet/RH_air) [W/m²].
///
/// 습도비의 로그항이 혼합 엔트로피 기울기 역할을 한다.
/// RH_air = 0이면 ±Infinity, 비율이 0 이하이면 NaN이 그대로 반환된다.
/// 호출자는 유한하지 않은 값을 "유효한 추정 없음"으로 다뤄야 한다.
pub fn power_per_area_w_per_m2(input: PowerPerAreaInput) -> f64 {
    input.conversion_constant
        * input.evaporation_rate_mm_per_day
        * input.gas_constant
        * input.air_temperature_k
        * (input.rel_hum_wet_frac / input.rel_hum_air_frac).ln()
}
