use crate::air::vapor_pressure::{saturation_vapor_pressure_kpa, VaporPressureMethod};
use crate::constants::{LATENT_HEAT_OF_VAPORIZATION_MJ_PER_MG, WATER_VAPOR_GAS_CONSTANT};

/// 포화수증기압 곡선 기울기(Δ) 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct SlopeInput {
    /// 온도 (K)
    pub t_kelvin: f64,
    /// 포화수증기압 (kPa). None이면 method로 계산한다.
    pub e_s_kpa: Option<f64>,
    /// 증발 잠열 L_v (MJ/Mg)
    pub latent_heat_mj_per_mg: f64,
    /// 수증기 기체상수 R_v (J/(kg·K))
    pub gas_constant_j_per_kg_k: f64,
    /// e_s 계산에 쓸 경험식
    pub method: VaporPressureMethod,
}

impl SlopeInput {
    /// 기본 상수(L_v=2448, R_v=461.5)와 기본 경험식으로 입력을 만든다.
    pub fn at_temperature(t_kelvin: f64) -> Self {
        Self {
            t_kelvin,
            e_s_kpa: None,
            latent_heat_mj_per_mg: LATENT_HEAT_OF_VAPORIZATION_MJ_PER_MG,
            gas_constant_j_per_kg_k: WATER_VAPOR_GAS_CONSTANT,
            method: VaporPressureMethod::default(),
        }
    }
}

/// Δ = de_s/dT = L_v·e_s / (R_v·T²) [kPa/K].
///
/// L_v는 MJ/Mg → J/kg로 환산해 R_v의 단위와 맞춘다.
/// e_s > 0, T ≠ 0이면 항상 양수. T = 0에서는 Infinity가 된다.
pub fn slope_kpa_per_k(input: SlopeInput) -> f64 {
    let e_s = input
        .e_s_kpa
        .unwrap_or_else(|| saturation_vapor_pressure_kpa(input.t_kelvin, input.method));
    let l_v_j_per_kg = input.latent_heat_mj_per_mg * 1000.0;
    l_v_j_per_kg * e_s / (input.gas_constant_j_per_kg_k * input.t_kelvin * input.t_kelvin)
}
