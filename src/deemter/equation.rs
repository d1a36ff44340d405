use serde::{Deserialize, Serialize};

use super::DeemterError;

/// Van Deemter 계수 (A, B, C).
///
/// 물리적으로는 모두 0 이상이지만 엔진은 음수를 거부하지 않는다.
/// 범위 제한은 입력 화면(슬라이더) 쪽 책임이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// 에디 확산 항
    pub a: f64,
    /// 종방향 확산 항
    pub b: f64,
    /// 물질 전달 항
    pub c: f64,
}

impl Coefficients {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            a: 0.5,
            b: 0.1,
            c: 0.01,
        }
    }
}

/// 곡선 위의 한 점 (u, H).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub u: f64,
    pub h: f64,
}

impl CurvePoint {
    /// 차트용 [x, y] 배열로 변환한다.
    pub fn as_xy(&self) -> [f64; 2] {
        [self.u, self.h]
    }
}

/// 사용자가 선택한 유속에서 계산한 점. 곡선 샘플과 일치할 필요는 없다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedPoint(pub CurvePoint);

impl SelectedPoint {
    pub fn u(&self) -> f64 {
        self.0.u
    }

    pub fn h(&self) -> f64 {
        self.0.h
    }
}

/// H를 구성하는 세 항. 합이 H가 된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermBreakdown {
    /// A
    pub eddy: f64,
    /// B/u
    pub longitudinal: f64,
    /// C·u
    pub mass_transfer: f64,
}

impl TermBreakdown {
    pub fn total(&self) -> f64 {
        self.eddy + self.longitudinal + self.mass_transfer
    }
}

fn check_flow_rate(u: f64) -> Result<(), DeemterError> {
    if u.is_finite() && u > 0.0 {
        Ok(())
    } else {
        Err(DeemterError::Domain { u })
    }
}

/// Van Deemter 식 H = A + B/u + C·u 를 계산한다.
pub fn evaluate(u: f64, coeffs: &Coefficients) -> Result<f64, DeemterError> {
    check_flow_rate(u)?;
    Ok(coeffs.a + coeffs.b / u + coeffs.c * u)
}

/// 여러 유속에 대해 H를 계산한다. 첫 번째 도메인 오류에서 중단한다.
pub fn evaluate_many(us: &[f64], coeffs: &Coefficients) -> Result<Vec<f64>, DeemterError> {
    us.iter().map(|&u| evaluate(u, coeffs)).collect()
}

/// 선택 유속에서의 점을 계산한다. 수치는 [`evaluate`]와 동일하다.
pub fn evaluate_at(u: f64, coeffs: &Coefficients) -> Result<SelectedPoint, DeemterError> {
    let h = evaluate(u, coeffs)?;
    Ok(SelectedPoint(CurvePoint { u, h }))
}

/// 유속 u에서 각 항의 기여도를 분해한다.
pub fn terms(u: f64, coeffs: &Coefficients) -> Result<TermBreakdown, DeemterError> {
    check_flow_rate(u)?;
    Ok(TermBreakdown {
        eddy: coeffs.a,
        longitudinal: coeffs.b / u,
        mass_transfer: coeffs.c * u,
    })
}

/// dH/du = -B/u² + C = 0 에서 얻는 해석적 최적점.
///
/// B > 0, C > 0 일 때만 양의 유속에서 유한한 최소값이 존재한다.
/// C = 0 이면 H가 단조 감소하고, B = 0 이면 하한이 u → 0 쪽에 있어 `None`을 반환한다.
pub fn analytic_minimum(coeffs: &Coefficients) -> Option<CurvePoint> {
    if coeffs.b > 0.0 && coeffs.c > 0.0 {
        let u = (coeffs.b / coeffs.c).sqrt();
        let h = coeffs.a + 2.0 * (coeffs.b * coeffs.c).sqrt();
        Some(CurvePoint { u, h })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn evaluate_reference_point() {
        let h = evaluate(50.0, &Coefficients::new(0.5, 0.1, 0.01)).unwrap();
        assert_relative_eq!(h, 1.002, epsilon = 1e-9);
    }

    #[test]
    fn zero_flow_rate_is_rejected() {
        let err = evaluate(0.0, &Coefficients::default()).unwrap_err();
        assert_eq!(err, DeemterError::Domain { u: 0.0 });
        assert!(evaluate(-1.0, &Coefficients::default()).is_err());
        assert!(evaluate(f64::NAN, &Coefficients::default()).is_err());
        assert!(evaluate(f64::INFINITY, &Coefficients::default()).is_err());
    }

    #[test]
    fn evaluate_many_stops_at_invalid_rate() {
        let coeffs = Coefficients::default();
        let hs = evaluate_many(&[1.0, 2.0, 4.0], &coeffs).unwrap();
        assert_eq!(hs.len(), 3);
        assert_relative_eq!(hs[1], 0.5 + 0.05 + 0.02, epsilon = 1e-12);
        let err = evaluate_many(&[1.0, 0.0, -2.0], &coeffs).unwrap_err();
        assert_eq!(err, DeemterError::Domain { u: 0.0 });
    }

    #[test]
    fn selected_point_matches_evaluate() {
        let coeffs = Coefficients::new(1.2, 0.4, 0.05);
        let p = evaluate_at(37.0, &coeffs).unwrap();
        assert_eq!(p.u(), 37.0);
        assert_eq!(p.h(), evaluate(37.0, &coeffs).unwrap());
    }

    #[test]
    fn terms_sum_to_plate_height() {
        let coeffs = Coefficients::new(0.5, 0.1, 0.01);
        let t = terms(10.0, &coeffs).unwrap();
        assert_relative_eq!(t.longitudinal, 0.01, epsilon = 1e-12);
        assert_relative_eq!(t.mass_transfer, 0.1, epsilon = 1e-12);
        assert_relative_eq!(t.total(), evaluate(10.0, &coeffs).unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn analytic_minimum_closed_form() {
        let opt = analytic_minimum(&Coefficients::new(0.5, 0.1, 0.01)).unwrap();
        assert_relative_eq!(opt.u, 10f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(opt.h, 0.5 + 2.0 * 0.001f64.sqrt(), epsilon = 1e-12);
        assert!(analytic_minimum(&Coefficients::new(0.5, 0.1, 0.0)).is_none());
        assert!(analytic_minimum(&Coefficients::new(0.5, 0.0, 0.01)).is_none());
    }
}
