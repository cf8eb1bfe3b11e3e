use serde::{Deserialize, Serialize};

/// 풍속 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
}

/// 주어진 값을 m/s로 변환한다. 날씨 CSV의 km/h 풍속 환산에도 쓴다.
pub fn to_meter_per_second(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::KilometerPerHour => value / 3.6,
        VelocityUnit::MilePerHour => value * 0.44704,
    }
}

fn from_meter_per_second(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::KilometerPerHour => value * 3.6,
        VelocityUnit::MilePerHour => value / 0.44704,
    }
}

/// 풍속을 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    let base = to_meter_per_second(value, from);
    from_meter_per_second(base, to)
}
