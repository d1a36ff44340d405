//! 입력 화면(슬라이더/프롬프트)이 넘겨주는 값과 그 허용 범위.

use serde::{Deserialize, Serialize};

use crate::deemter::Coefficients;

/// 닫힌 구간 [min, max] 와 슬라이더 간격.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Bound {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// 값을 구간 안으로 제한한다. NaN은 하한으로 보낸다.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// 구간이 잘못된 경우 그 이유를 돌려준다.
    pub fn problem(&self) -> Option<String> {
        if !self.min.is_finite() || !self.max.is_finite() {
            Some(format!(
                "min and max must be finite (got {}, {})",
                self.min, self.max
            ))
        } else if self.min > self.max {
            Some(format!("min {} must not exceed max {}", self.min, self.max))
        } else if self.step.is_nan() || self.step < 0.0 {
            Some(format!("step must be a non-negative number (got {})", self.step))
        } else {
            None
        }
    }
}

/// 각 입력값의 허용 범위.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    pub a: Bound,
    pub b: Bound,
    pub c: Bound,
    /// 유속 하한은 0보다 커야 한다
    pub flow_rate: Bound,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            a: Bound::new(0.0, 2.0, 0.01),
            b: Bound::new(0.0, 1.0, 0.01),
            c: Bound::new(0.0, 0.1, 0.001),
            flow_rate: Bound::new(1.0, 200.0, 1.0),
        }
    }
}

impl InputBounds {
    /// 스냅샷의 모든 값을 범위 안으로 제한한 새 스냅샷을 돌려준다.
    pub fn clamp(&self, snapshot: &InputSnapshot) -> InputSnapshot {
        InputSnapshot {
            coefficients: Coefficients {
                a: self.a.clamp(snapshot.coefficients.a),
                b: self.b.clamp(snapshot.coefficients.b),
                c: self.c.clamp(snapshot.coefficients.c),
            },
            flow_rate: self.flow_rate.clamp(snapshot.flow_rate),
        }
    }
}

/// 한 번의 입력 이벤트에서 캡처한 불변 값 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// 선택 유속 u
    pub flow_rate: f64,
    pub coefficients: Coefficients,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            coefficients: Coefficients::default(),
            flow_rate: 50.0,
        }
    }
}
