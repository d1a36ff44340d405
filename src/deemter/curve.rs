use serde::{Deserialize, Serialize};

use super::equation::{evaluate, Coefficients, CurvePoint};
use super::DeemterError;

/// 곡선을 샘플링할 유속 구간과 샘플 수.
/// 한 곡선에 허용하는 최대 샘플 수.
pub const MAX_SAMPLES: usize = 100_000;

/// u_max 대비 최소 샘플 간격.
const MIN_RELATIVE_STEP: f64 = 8.0 * f64::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingDomain {
    pub u_min: f64,
    pub u_max: f64,
    pub samples: usize,
}

impl Default for SamplingDomain {
    fn default() -> Self {
        Self {
            u_min: 1.0,
            u_max: 200.0,
            samples: 400,
        }
    }
}

impl SamplingDomain {
    /// 구간을 검증한 뒤 생성한다.
    pub fn new(u_min: f64, u_max: f64, samples: usize) -> Result<Self, DeemterError> {
        let domain = Self {
            u_min,
            u_max,
            samples,
        };
        domain.validate()?;
        Ok(domain)
    }

    /// 0 < u_min < u_max, 2 <= samples <= MAX_SAMPLES 를 확인한다.
    /// 간격이 f64 로 구분되지 않을 만큼 좁은 구간도 거부한다.
    pub fn validate(&self) -> Result<(), DeemterError> {
        let invalid = DeemterError::InvalidDomain {
            u_min: self.u_min,
            u_max: self.u_max,
        };
        let finite = self.u_min.is_finite() && self.u_max.is_finite();
        if !finite || self.u_min <= 0.0 || self.u_max <= self.u_min {
            return Err(invalid);
        }
        if self.samples < 2 {
            return Err(DeemterError::TooFewSamples {
                samples: self.samples,
            });
        }
        if self.samples > MAX_SAMPLES {
            return Err(DeemterError::TooManySamples {
                samples: self.samples,
                max: MAX_SAMPLES,
            });
        }
        // u_min + i * step 의 반올림 오차는 샘플마다 ulp(u_max) 이내이므로
        // 간격이 그보다 충분히 커야 인접 샘플이 엄격히 증가한다.
        let step = self.step();
        let second_last = self.u_min + (self.samples - 2) as f64 * step;
        if self.u_min + step <= self.u_min
            || step < MIN_RELATIVE_STEP * self.u_max
            || second_last >= self.u_max
        {
            return Err(invalid);
        }
        Ok(())
    }

    /// 인접 샘플 간격.
    pub fn step(&self) -> f64 {
        (self.u_max - self.u_min) / (self.samples.saturating_sub(1).max(1)) as f64
    }

    /// 양 끝점을 포함하는 등간격 유속 목록. 마지막 값은 정확히 u_max 이다.
    pub fn flow_rates(&self) -> Vec<f64> {
        let step = self.step();
        let last = self.samples.saturating_sub(1);
        (0..self.samples)
            .map(|i| {
                if i == last {
                    self.u_max
                } else {
                    self.u_min + i as f64 * step
                }
            })
            .collect()
    }
}

/// u 오름차순으로 정렬된 (u, H) 샘플 목록.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    points: Vec<CurvePoint>,
}

impl Curve {
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurvePoint> {
        self.points.iter()
    }

    /// 차트 시리즈용 [x, y] 목록.
    pub fn to_xy(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(CurvePoint::as_xy).collect()
    }
}

impl From<Vec<CurvePoint>> for Curve {
    fn from(points: Vec<CurvePoint>) -> Self {
        Self { points }
    }
}

/// 구간 [u_min, u_max]에서 샘플 수만큼 등간격으로 H를 계산한다.
pub fn sample_curve(domain: &SamplingDomain, coeffs: &Coefficients) -> Result<Curve, DeemterError> {
    domain.validate()?;
    let points = domain
        .flow_rates()
        .into_iter()
        .map(|u| evaluate(u, coeffs).map(|h| CurvePoint { u, h }))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Curve { points })
}

/// 곡선에서 H가 가장 작은 샘플을 찾는다. 동률이면 먼저 나온(u가 작은) 점을 유지한다.
///
/// 샘플링 해상도 수준의 근사값이다. 정확한 값은 [`super::analytic_minimum`] 참고.
pub fn find_minimum(curve: &Curve) -> Result<CurvePoint, DeemterError> {
    let mut iter = curve.iter();
    let mut best = *iter.next().ok_or(DeemterError::EmptyInput)?;
    for p in iter {
        if p.h < best.h {
            best = *p;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_domain_endpoints() {
        let curve = sample_curve(&SamplingDomain::default(), &Coefficients::default()).unwrap();
        assert_eq!(curve.len(), 400);
        assert_eq!(curve.points()[0].u, 1.0);
        assert_eq!(curve.points()[399].u, 200.0);
    }

    #[test]
    fn invalid_domains_are_rejected() {
        assert!(matches!(
            SamplingDomain::new(0.0, 10.0, 10),
            Err(DeemterError::InvalidDomain { .. })
        ));
        assert!(matches!(
            SamplingDomain::new(5.0, 5.0, 10),
            Err(DeemterError::InvalidDomain { .. })
        ));
        assert_eq!(
            SamplingDomain::new(1.0, 10.0, 1),
            Err(DeemterError::TooFewSamples { samples: 1 })
        );
    }

    #[test]
    fn indistinguishable_samples_are_rejected() {
        assert!(matches!(
            SamplingDomain::new(1.0, 1.0 + 1e-15, 50),
            Err(DeemterError::InvalidDomain { .. })
        ));
        assert!(matches!(
            SamplingDomain::new(1e6, 1e6 + 1e-9, 3),
            Err(DeemterError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn narrow_domain_still_increases() {
        let domain = SamplingDomain::new(1.0, 1.0 + 1e-9, 1000).unwrap();
        let curve = sample_curve(&domain, &Coefficients::default()).unwrap();
        assert_eq!(curve.len(), 1000);
        assert!(curve.points().windows(2).all(|pair| pair[1].u > pair[0].u));
    }

    #[test]
    fn sample_count_is_capped() {
        assert!(SamplingDomain::new(1.0, 200.0, MAX_SAMPLES).is_ok());
        assert_eq!(
            SamplingDomain::new(1.0, 200.0, usize::MAX),
            Err(DeemterError::TooManySamples {
                samples: usize::MAX,
                max: MAX_SAMPLES,
            })
        );
    }

    #[test]
    fn two_samples_hit_both_ends() {
        let domain = SamplingDomain::new(2.0, 4.0, 2).unwrap();
        let curve = sample_curve(&domain, &Coefficients::new(0.0, 1.0, 1.0)).unwrap();
        assert_relative_eq!(curve.points()[0].h, 2.5, epsilon = 1e-12);
        assert_relative_eq!(curve.points()[1].h, 4.25, epsilon = 1e-12);
    }

    #[test]
    fn minimum_of_empty_curve_fails() {
        assert_eq!(find_minimum(&Curve::default()), Err(DeemterError::EmptyInput));
    }

    #[test]
    fn ties_keep_first_sample() {
        let curve = Curve::from(vec![
            CurvePoint { u: 1.0, h: 3.0 },
            CurvePoint { u: 2.0, h: 1.0 },
            CurvePoint { u: 3.0, h: 1.0 },
        ]);
        let best = find_minimum(&curve).unwrap();
        assert_eq!(best.u, 2.0);
    }

    #[test]
    fn flat_curve_minimum_is_first_sample() {
        let curve = sample_curve(&SamplingDomain::default(), &Coefficients::new(0.7, 0.0, 0.0))
            .unwrap();
        let best = find_minimum(&curve).unwrap();
        assert_eq!(best.u, 1.0);
        assert_eq!(best.h, 0.7);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn curve_is_strictly_increasing_and_uniform(
                u_min in 0.01_f64..50.0,
                width in 0.5_f64..500.0,
                samples in 2_usize..1000,
            ) {
                let domain = SamplingDomain::new(u_min, u_min + width, samples).unwrap();
                let curve = sample_curve(&domain, &Coefficients::default()).unwrap();
                prop_assert_eq!(curve.len(), samples);
                let step = domain.step();
                for pair in curve.points().windows(2) {
                    prop_assert!(pair[1].u > pair[0].u);
                    prop_assert!(((pair[1].u - pair[0].u) - step).abs() < 1e-9 * (1.0 + step));
                }
            }

            #[test]
            fn sampled_minimum_bounds_every_point(
                a in 0.0_f64..2.0,
                b in 0.0_f64..1.0,
                c in 0.0_f64..0.1,
            ) {
                let coeffs = Coefficients::new(a, b, c);
                let curve = sample_curve(&SamplingDomain::default(), &coeffs).unwrap();
                let best = find_minimum(&curve).unwrap();
                for p in curve.iter() {
                    prop_assert!(best.h <= p.h);
                }
            }
        }
    }
}
