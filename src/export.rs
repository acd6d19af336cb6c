use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::sampling::Curve;
use crate::Error;

/// Writes every sampled point as a `name,x,relative_error` row, header first.
pub fn write_csv<W: Write>(out: &mut W, curves: &[Curve]) -> Result<(), Error> {
    writeln!(out, "name,x,relative_error")?;
    for curve in curves {
        let name = curve.config().name();
        for (x, e) in curve.points() {
            writeln!(out, "{name},{x},{e}")?;
        }
    }
    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(path: P, curves: &[Curve]) -> Result<(), Error> {
    let mut file = BufWriter::new(File::create(path.as_ref())?);
    write_csv(&mut file, curves)?;
    file.flush()?;
    log::info!(
        "wrote {} curves to {}",
        curves.len(),
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::{QUAKE_ORIG, RR_BEST};
    use crate::sampling::Curve;

    #[test]
    fn test_write_csv() {
        let curves = vec![
            Curve::sample(QUAKE_ORIG, &[1.0, 2.0]).unwrap(),
            Curve::sample(RR_BEST, &[1.9316406]).unwrap(),
        ];
        let mut out = Vec::new();
        write_csv(&mut out, &curves).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "name,x,relative_error");
        assert!(lines[1].starts_with("quake_orig,1,0.00169283"));
        assert!(lines[3].starts_with("rr_best,1.9316406,0.00064999"));
    }

    #[test]
    fn test_write_csv_file() {
        let path = std::env::temp_dir().join(format!("invsqrt-error-{}.csv", std::process::id()));
        let curves = vec![Curve::sample(RR_BEST, &[1.0, 1.9316406]).unwrap()];
        write_csv_file(&path, &curves).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
