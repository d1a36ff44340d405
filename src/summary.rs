//! 계산 결과를 사람이 읽을 수 있는 텍스트로 정리한다.

use crate::deemter::{Analysis, Coefficients};
use crate::i18n::{keys, Translator};

/// 차트 범례에 쓰는 식 라벨. 계수는 입력 그대로 표시한다.
pub fn equation_label(coeffs: &Coefficients) -> String {
    format!("H = {} + {}/u + {}*u", coeffs.a, coeffs.b, coeffs.c)
}

/// 최적점 범례 라벨.
pub fn optimal_label(analysis: &Analysis, tr: &Translator, precision: usize) -> String {
    tr.tf(
        keys::LEGEND_OPTIMAL,
        &[
            ("u", format!("{:.*}", precision, analysis.optimum.u)),
            ("h", format!("{:.*}", precision, analysis.optimum.h)),
        ],
    )
}

/// 선택점 범례 라벨.
pub fn selected_label(analysis: &Analysis, tr: &Translator, precision: usize) -> String {
    tr.tf(
        keys::LEGEND_SELECTED,
        &[
            ("u", format!("{:.*}", precision, analysis.selected.u())),
            ("h", format!("{:.*}", precision, analysis.selected.h())),
        ],
    )
}

/// 계수, 최적 유속/최소 단높이, 선택점을 묶은 요약을 만든다.
pub fn render(analysis: &Analysis, tr: &Translator, precision: usize) -> String {
    let c = &analysis.coefficients;
    let p = precision;
    let analytic = match analysis.analytic {
        Some(opt) => format!(
            "    - {} u={:.*}, H={:.*}",
            tr.t(keys::SUMMARY_ANALYTIC),
            p,
            opt.u,
            p,
            opt.h
        ),
        None => format!("    - {}", tr.t(keys::SUMMARY_ANALYTIC_NONE)),
    };
    let lines = [
        tr.t(keys::SUMMARY_HEADING).into_owned(),
        format!("- {}", tr.t(keys::SUMMARY_EQUATION)),
        format!("- {}", tr.t(keys::SUMMARY_PARAMS)),
        format!("    - {} {}", tr.t(keys::SUMMARY_EDDY), c.a),
        format!("    - {} {}", tr.t(keys::SUMMARY_LONGITUDINAL), c.b),
        format!("    - {} {}", tr.t(keys::SUMMARY_MASS_TRANSFER), c.c),
        format!("- {}", tr.t(keys::SUMMARY_OPTIMUM)),
        format!("    - {} {:.*}", tr.t(keys::SUMMARY_OPT_FLOW), p, analysis.optimum.u),
        format!("    - {} {:.*}", tr.t(keys::SUMMARY_MIN_H), p, analysis.optimum.h),
        analytic,
        format!("- {}", tr.t(keys::SUMMARY_SELECTED)),
        format!("    - {} {}", tr.t(keys::SUMMARY_SEL_FLOW), analysis.selected.u()),
        format!("    - {} {:.*}", tr.t(keys::SUMMARY_SEL_H), p, analysis.selected.h()),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deemter::SamplingDomain;
    use crate::input::InputSnapshot;

    fn default_analysis() -> Analysis {
        Analysis::compute(&InputSnapshot::default(), &SamplingDomain::default()).unwrap()
    }

    #[test]
    fn equation_label_uses_raw_coefficients() {
        assert_eq!(
            equation_label(&Coefficients::new(0.5, 0.1, 0.01)),
            "H = 0.5 + 0.1/u + 0.01*u"
        );
    }

    #[test]
    fn english_summary_lists_every_value() {
        let text = render(&default_analysis(), &Translator::new("en"), 2);
        assert!(text.starts_with("Key findings"));
        assert!(text.contains("Eddy diffusion (A): 0.5"));
        assert!(text.contains("Mass transfer (C): 0.01"));
        assert!(text.contains("Minimal plate height: 0.56"));
        assert!(text.contains("Analytic optimum u = √(B/C): u=3.16, H=0.56"));
        assert!(text.contains("Linear flow rate: 50"));
        assert!(text.contains("Calculated plate height: 1.00"));
    }

    #[test]
    fn german_legend_labels() {
        let analysis = default_analysis();
        let tr = Translator::new("de");
        assert_eq!(selected_label(&analysis, &tr, 2), "Ausgewählt: u=50.00, H=1.00");
        assert!(optimal_label(&analysis, &tr, 2).starts_with("Optimal: u=2.99"));
    }

    #[test]
    fn summary_layout_is_one_item_per_line() {
        let text = render(&default_analysis(), &Translator::new("en"), 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(!text.ends_with('\n'));
        assert_eq!(lines[1], "- Van Deemter equation: H = A + B/u + C·u");
        assert!(lines[12].starts_with("    - Calculated plate height"));
    }

    #[test]
    fn missing_analytic_optimum_is_reported() {
        let snapshot = InputSnapshot {
            coefficients: Coefficients::new(0.5, 0.1, 0.0),
            flow_rate: 10.0,
        };
        let analysis = Analysis::compute(&snapshot, &SamplingDomain::default()).unwrap();
        let text = render(&analysis, &Translator::new("en"), 2);
        assert!(text.contains("Analytic optimum: none"));
    }
}
