//! 샘플 곡선을 CSV로 내보낸다.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::deemter::{terms, Coefficients, Curve};

/// CSV 헤더. 항별 기여도 열을 함께 쓴다.
pub const CSV_HEADER: &str = "u,H,A,B/u,C*u";

/// 곡선을 `u,H,A,B/u,C*u` 형식으로 기록한다.
pub fn write_curve_csv<W: Write>(
    curve: &Curve,
    coeffs: &Coefficients,
    mut writer: W,
) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for p in curve.iter() {
        // 곡선 샘플은 이미 u > 0 으로 검증되어 있다
        let t = terms(p.u, coeffs).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        writeln!(
            writer,
            "{},{},{},{},{}",
            p.u, p.h, t.eddy, t.longitudinal, t.mass_transfer
        )?;
    }
    writer.flush()
}

/// 곡선을 파일로 저장한다.
pub fn save_curve_csv(path: &Path, curve: &Curve, coeffs: &Coefficients) -> io::Result<()> {
    let file = File::create(path)?;
    write_curve_csv(curve, coeffs, BufWriter::new(file))?;
    info!(path = %path.display(), rows = curve.len(), "curve exported");
    Ok(())
}
