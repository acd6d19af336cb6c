use std::io::Write;

use colored::Colorize;

use crate::export::write_csv_file;
use crate::options::Options;
use crate::render::{color_of, render};
use crate::sampling::{sample_points, Curve, DOMAIN_MAX, DOMAIN_MIN};
use crate::summary::{ErrorSummary, SummaryRow, SUMMARY_HEADER};
use crate::Error;

/// Samples every selected approximation, draws the chart to `out` and, if asked,
/// the summary table and the CSV file. Approximations are handled one after the
/// other in the order given, which fixes their colors.
pub fn run<W: Write>(options: &Options, out: &mut W) -> Result<Vec<Curve>, Error> {
    let mut curves = Vec::with_capacity(options.approximations.len());
    for config in &options.approximations {
        let xs = sample_points(DOMAIN_MIN, DOMAIN_MAX, options.samples, config.reference_point());
        curves.push(Curve::sample(*config, &xs)?);
    }

    write!(out, "{}", render(&curves, &options.chart))?;

    if options.summary {
        writeln!(out)?;
        writeln!(out, "{}", SUMMARY_HEADER.bold())?;
        for (i, curve) in curves.iter().enumerate() {
            let row = SummaryRow {
                config: curve.config(),
                summary: ErrorSummary::of(curve),
            };
            let c = color_of(i);
            writeln!(out, "{}", row.to_string().truecolor(c.r, c.g, c.b))?;
        }
    }

    if let Some(path) = &options.csv {
        write_csv_file(path, &curves)?;
    }
    out.flush()?;
    Ok(curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::{MY_BEST1, QUAKE_ORIG};

    #[test]
    fn test_run_defaults() {
        let mut out = Vec::new();
        let curves = run(&Options::default(), &mut out).unwrap();
        assert_eq!(curves.len(), 3);
        for curve in &curves {
            assert_eq!(curve.points().len(), 513);
            let (x, _) = curve.reference();
            assert!(curve.points().iter().any(|p| p.0 == x));
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("rr_best @ x=1.9316406"));
        assert!(!text.contains("max_error"));
    }

    #[test]
    fn test_run_with_summary() {
        let options = Options {
            approximations: vec![QUAKE_ORIG, MY_BEST1],
            samples: 64,
            summary: true,
            ..Options::default()
        };
        let mut out = Vec::new();
        let curves = run(&options, &mut out).unwrap();
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].points().len(), 65);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("max_error"));
        assert!(text.contains("5f3759df"));
    }

    #[test]
    fn test_run_nothing_selected() {
        let options = Options {
            approximations: vec![],
            ..Options::default()
        };
        let mut out = Vec::new();
        assert!(run(&options, &mut out).unwrap().is_empty());
    }
}
