//! 증발률과 증발 구동 엔진 출력 계산 모듈 모음.

pub mod evaporation_rate;
pub mod power_per_area;

pub use evaporation_rate::*;
pub use power_per_area::*;
