//! Van Deemter 식 계산 모듈 모음.

pub mod analysis;
pub mod curve;
pub mod equation;

pub use analysis::*;
pub use curve::*;
pub use equation::*;

use thiserror::Error;

/// 엔진 호출 시 전제 조건 위반을 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DeemterError {
    /// u <= 0 또는 유한하지 않은 유속
    #[error("flow rate must be a finite value greater than 0 (u = {u})")]
    Domain { u: f64 },
    /// 빈 곡선에서 최소값 탐색
    #[error("cannot find a minimum of an empty curve")]
    EmptyInput,
    /// 샘플링 구간 오류. 구간이 너무 좁아 샘플끼리 구분되지 않는 경우도 포함한다.
    #[error(
        "invalid sampling domain [{u_min}, {u_max}]: requires 0 < u_min < u_max wide enough for distinct samples"
    )]
    InvalidDomain { u_min: f64, u_max: f64 },
    /// 샘플 수 부족
    #[error("at least 2 samples are required (got {samples})")]
    TooFewSamples { samples: usize },
    /// 샘플 수 초과
    #[error("at most {max} samples are allowed (got {samples})")]
    TooManySamples { samples: usize, max: usize },
}
