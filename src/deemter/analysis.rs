use tracing::debug;

use super::curve::{find_minimum, sample_curve, Curve, SamplingDomain};
use super::equation::{analytic_minimum, evaluate_at, Coefficients, CurvePoint, SelectedPoint};
use super::DeemterError;
use crate::input::InputSnapshot;

/// 입력 스냅샷 하나에 대한 전체 재계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub coefficients: Coefficients,
    pub curve: Curve,
    /// 샘플 곡선상의 최소점
    pub optimum: CurvePoint,
    pub selected: SelectedPoint,
    /// B, C > 0 일 때의 해석적 최소점
    pub analytic: Option<CurvePoint>,
}

impl Analysis {
    /// 스냅샷으로부터 곡선, 최적점, 선택점을 새로 계산한다. 이전 결과는 재사용하지 않는다.
    pub fn compute(snapshot: &InputSnapshot, domain: &SamplingDomain) -> Result<Self, DeemterError> {
        let coefficients = snapshot.coefficients;
        let curve = sample_curve(domain, &coefficients)?;
        let optimum = find_minimum(&curve)?;
        let selected = evaluate_at(snapshot.flow_rate, &coefficients)?;
        let analytic = analytic_minimum(&coefficients);
        debug!(
            a = coefficients.a,
            b = coefficients.b,
            c = coefficients.c,
            u_opt = optimum.u,
            h_min = optimum.h,
            u_sel = selected.u(),
            "recomputed van deemter curve"
        );
        Ok(Self {
            coefficients,
            curve,
            optimum,
            selected,
            analytic,
        })
    }
}
