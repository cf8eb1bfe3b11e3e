//! 수증기 물성 계산 모듈 모음.
//! 포화수증기압 경험식들과 포화 곡선 기울기 계산으로 구성한다.

pub mod slope;
pub mod vapor_pressure;

pub use slope::*;
pub use vapor_pressure::*;
