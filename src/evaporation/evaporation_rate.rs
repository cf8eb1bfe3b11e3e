use crate::air::vapor_pressure::{saturation_vapor_pressure_kpa, VaporPressureMethod};
use crate::constants::{
    LATENT_HEAT_OF_VAPORIZATION_MJ_PER_MG, PSYCHROMETRIC_CONSTANT_KPA_PER_K,
    PSYCHROMETRIC_CONVERSION_CONSTANT, SECONDS_PER_DAY, WATER_DENSITY_MG_PER_M3,
};

/// 수면 증발률 계산 입력.
///
/// 상수 필드는 `new`가 기본값으로 채운다. 필요할 때만 바꾼다.
#[derive(Debug, Clone, Copy)]
pub struct EvaporationRateInput {
    /// 순복사량 R_n (W/m²)
    pub net_radiation_w_per_m2: f64,
    /// 포화수증기압 곡선 기울기 Δ (kPa/K)
    pub slope_kpa_per_k: f64,
    /// 풍속 u_a (m/s)
    pub wind_speed_m_per_s: f64,
    /// 일평균 기온 (K)
    pub mean_temperature_k: f64,
    /// 상대습도 (0~1). 범위 검증은 호출자 몫이다.
    pub relative_humidity_frac: f64,
    /// 환산 상수 c_1 (W·m·day/(MJ·mm))
    pub conversion_constant: f64,
    /// 증발 잠열 L_v (MJ/Mg)
    pub latent_heat_mj_per_mg: f64,
    /// 물 밀도 rho_w (Mg/m³)
    pub water_density_mg_per_m3: f64,
    /// 건습계 상수 γ (kPa/K)
    pub psychrometric_constant_kpa_per_k: f64,
    /// 포화수증기압 경험식
    pub method: VaporPressureMethod,
}

impl EvaporationRateInput {
    /// 물리 상수를 기본값으로 채운 입력을 만든다.
    pub fn new(
        net_radiation_w_per_m2: f64,
        slope_kpa_per_k: f64,
        wind_speed_m_per_s: f64,
        mean_temperature_k: f64,
        relative_humidity_frac: f64,
    ) -> Self {
        Self {
            net_radiation_w_per_m2,
            slope_kpa_per_k,
            wind_speed_m_per_s,
            mean_temperature_k,
            relative_humidity_frac,
            conversion_constant: PSYCHROMETRIC_CONVERSION_CONSTANT,
            latent_heat_mj_per_mg: LATENT_HEAT_OF_VAPORIZATION_MJ_PER_MG,
            water_density_mg_per_m3: WATER_DENSITY_MG_PER_M3,
            psychrometric_constant_kpa_per_k: PSYCHROMETRIC_CONSTANT_KPA_PER_K,
            method: VaporPressureMethod::default(),
        }
    }

    pub fn with_method(mut self, method: VaporPressureMethod) -> Self {
        self.method = method;
        self
    }
}

/// 수면 증발률 E_pr(mm/day)을 Penman형 심리측정식으로 계산한다.
///
/// 복사항(Δ·R_n)과 공기역학항(풍속·포차)을 Δ/γ 비율로 가중 합산한다.
/// 입력 검증 없이 여섯 개 수치 입력의 순수 함수로 동작한다.
pub fn evaporation_rate_mm_per_day(input: EvaporationRateInput) -> f64 {
    let e_star = saturation_vapor_pressure_kpa(input.mean_temperature_k, input.method);
    let vapor_pressure_deficit = (1.0 - input.relative_humidity_frac) * e_star;

    let aerodynamic = 2.6
        * input.conversion_constant
        * input.latent_heat_mj_per_mg
        * input.water_density_mg_per_m3
        * input.psychrometric_constant_kpa_per_k
        * (1.0 + 0.54 * input.wind_speed_m_per_s)
        * vapor_pressure_deficit;

    let numerator = input.slope_kpa_per_k * input.net_radiation_w_per_m2 + aerodynamic;
    let denominator = input.conversion_constant
        * input.latent_heat_mj_per_mg
        * input.water_density_mg_per_m3
        * (input.slope_kpa_per_k + input.psychrometric_constant_kpa_per_k);

    numerator / denominator
}

/// 증발률(mm/day)을 잠열 플럭스(W/m²)로 환산한다.
///
/// rho_w = 1 Mg/m³ 기준으로 mm/day ≡ kg/(m²·day)이므로
/// L_v[J/kg]를 곱하고 하루 초 수로 나눈다.
pub fn latent_energy_flux_w_per_m2(evaporation_rate_mm_per_day: f64) -> f64 {
    evaporation_rate_mm_per_day * LATENT_HEAT_OF_VAPORIZATION_MJ_PER_MG * 1000.0 / SECONDS_PER_DAY
}
