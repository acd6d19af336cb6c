//! Parsing Options.
//! `--approx {name}` or `-a`, repeatable, selects which approximations are plotted.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use itertools::Itertools;

use crate::approx::{preset, ApproximationConfig, DEFAULT_ENABLED, PRESETS, PRESET_NAMES};
use crate::render::ChartOptions;
use crate::sampling::DEFAULT_SAMPLES;
use crate::Error;

fn make_options_parser() -> Command {
    Command::new("invsqrt-error")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plots the relative error of fast inverse square root approximations over [1, 4]")
        .arg(
            Arg::new("approx")
                .short('a')
                .long("approx")
                .value_name("NAME")
                .help("Approximation to plot, may be repeated")
                .action(ArgAction::Append)
                .value_parser(PRESET_NAMES)
                .default_values(DEFAULT_ENABLED),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .help("Plot every known approximation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("samples")
                .short('n')
                .long("samples")
                .value_name("N")
                .help("Number of evenly spaced samples")
                .value_parser(value_parser!(u32).range(2..))
                .default_value("512"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .help("Chart width in braille dots")
                .value_parser(value_parser!(u32).range(32..))
                .default_value("180"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .help("Chart height in braille dots")
                .value_parser(value_parser!(u32).range(3..))
                .default_value("60"),
        )
        .arg(
            Arg::new("no-grid")
                .long("no-grid")
                .help("Do not draw grid lines")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("summary")
                .short('s')
                .long("summary")
                .help("Print max, mean and rms error of every curve")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .value_name("FILE")
                .help("Also write the sampled curves to a CSV file")
                .value_parser(value_parser!(PathBuf)),
        )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// In plotting order.
    pub approximations: Vec<ApproximationConfig>,
    pub samples: usize,
    pub chart: ChartOptions,
    pub summary: bool,
    pub csv: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            approximations: DEFAULT_ENABLED
                .iter()
                .filter_map(|name| preset(name).ok())
                .collect(),
            samples: DEFAULT_SAMPLES,
            chart: ChartOptions::default(),
            summary: false,
            csv: None,
        }
    }
}

impl Options {
    /// Parses command line arguments. The first item is the binary name.
    pub fn parse_from<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;

        let approximations = if matches.get_flag("all") {
            PRESETS.to_vec()
        } else {
            matches
                .get_many::<String>("approx")
                .into_iter()
                .flatten()
                .unique()
                .map(|name| preset(name))
                .collect::<Result<Vec<_>, Error>>()?
        };

        // Defaults are always present, so these lookups only fail if the parser changes.
        let samples = matches
            .get_one::<u32>("samples")
            .copied()
            .unwrap_or(DEFAULT_SAMPLES as u32);
        let defaults = ChartOptions::default();
        let chart = ChartOptions {
            width: matches.get_one::<u32>("width").copied().unwrap_or(defaults.width),
            height: matches.get_one::<u32>("height").copied().unwrap_or(defaults.height),
            grid: !matches.get_flag("no-grid"),
        };

        Ok(Options {
            approximations,
            samples: samples as usize,
            chart,
            summary: matches.get_flag("summary"),
            csv: matches.get_one::<PathBuf>("csv").cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::{MY_BEST1, QUAKE_ORIG, RR_BEST};

    #[test]
    fn test_parser_is_consistent() {
        make_options_parser().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let options = Options::parse_from(["invsqrt-error"]).unwrap();
        assert_eq!(options, Options::default());
        let names: Vec<&str> = options.approximations.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["rr_best", "my_best1", "my_best2"]);
        assert_eq!(options.samples, 512);
        assert!(options.chart.grid);
    }

    #[test]
    fn test_selection_keeps_order_and_drops_duplicates() {
        let options = Options::parse_from([
            "invsqrt-error",
            "-a",
            "quake_orig",
            "--approx",
            "rr_best",
            "-a",
            "quake_orig",
        ])
        .unwrap();
        assert_eq!(options.approximations, vec![QUAKE_ORIG, RR_BEST]);
    }

    #[test]
    fn test_all() {
        let options = Options::parse_from(["invsqrt-error", "--all"]).unwrap();
        assert_eq!(options.approximations, PRESETS.to_vec());
    }

    #[test]
    fn test_flags() {
        let options = Options::parse_from([
            "invsqrt-error",
            "-a",
            "my_best1",
            "-n",
            "64",
            "--width",
            "100",
            "--height",
            "40",
            "--no-grid",
            "-s",
            "--csv",
            "out.csv",
        ])
        .unwrap();
        assert_eq!(options.approximations, vec![MY_BEST1]);
        assert_eq!(options.samples, 64);
        assert_eq!(
            options.chart,
            ChartOptions {
                width: 100,
                height: 40,
                grid: false
            }
        );
        assert!(options.summary);
        assert_eq!(options.csv, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_rejects_bad_values() {
        for args in [
            vec!["invsqrt-error", "-a", "fast"],
            vec!["invsqrt-error", "-n", "1"],
            vec!["invsqrt-error", "--width", "10"],
        ] {
            assert!(matches!(Options::parse_from(args), Err(Error::Args(_))));
        }
    }
}
