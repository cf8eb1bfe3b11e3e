//! 증발/출력 계산에 공통으로 쓰는 물리 상수.
//! 단위는 각 상수 주석에 명시한다. 계산식은 이 단위 조합을 전제로 한다.

/// 심리측정식 환산 상수 c_1 (W·m·day/(MJ·mm))
pub const PSYCHROMETRIC_CONVERSION_CONSTANT: f64 = 0.01157;

/// 물 증발 잠열 L_v (MJ/Mg)
pub const LATENT_HEAT_OF_VAPORIZATION_MJ_PER_MG: f64 = 2448.0;

/// 물 밀도 rho_w (Mg/m³)
pub const WATER_DENSITY_MG_PER_M3: f64 = 1.0;

/// 건습계 상수 gamma (kPa/K)
pub const PSYCHROMETRIC_CONSTANT_KPA_PER_K: f64 = 0.067;

/// 증발률 → 몰 플럭스 환산 상수 c_t (mol·day/(mm·m²·s))
pub const EVAPORATION_CONVERSION_CONSTANT: f64 = 6.42465e-4;

/// 이상기체 상수 R (J/(mol·K))
pub const IDEAL_GAS_CONSTANT: f64 = 8.314_462_618_153_24;

/// 수증기 기체상수 R_v (J/(kg·K))
pub const WATER_VAPOR_GAS_CONSTANT: f64 = 461.5;

/// 섭씨 0도 = 273.15 K
pub const KELVIN_OFFSET: f64 = 273.15;

/// 하루의 초 수. 잠열 플럭스 환산(mm/day → W/m²)에 쓴다.
pub const SECONDS_PER_DAY: f64 = 86_400.0;
