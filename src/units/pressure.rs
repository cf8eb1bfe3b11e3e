use serde::{Deserialize, Serialize};

/// 수증기압 표시 단위. 내부 기준은 kPa이다.
///
/// 증기압 크기(수 kPa)에 맞는 단위만 두고, 게이지/절대 구분은 하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    KiloPascal,
    HectoPascal,
    Pascal,
    MilliBar,
    MmHg,
    Atm,
}

fn to_kpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::KiloPascal => value,
        PressureUnit::HectoPascal => value / 10.0,
        PressureUnit::Pascal => value / 1000.0,
        PressureUnit::MilliBar => value / 10.0,
        PressureUnit::MmHg => value * 0.133322,
        PressureUnit::Atm => value * 101.325,
    }
}

fn from_kpa(value_kpa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::KiloPascal => value_kpa,
        PressureUnit::HectoPascal => value_kpa * 10.0,
        PressureUnit::Pascal => value_kpa * 1000.0,
        PressureUnit::MilliBar => value_kpa * 10.0,
        PressureUnit::MmHg => value_kpa / 0.133322,
        PressureUnit::Atm => value_kpa / 101.325,
    }
}

/// 압력을 서로 다른 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let base = to_kpa(value, from);
    from_kpa(base, to)
}
