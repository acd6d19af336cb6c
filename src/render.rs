//! Terminal rendering of error curves: a braille chart with a grid, one colored line
//! and reference marker per curve, and a frameless legend in the lower right.

use colored::Colorize;
use rgb::RGB8;
use textplots::{Chart, ColorPlot, Shape};

use crate::sampling::Curve;

/// Errors are plotted in these units so the axis labels stay readable.
pub const Y_SCALE: f64 = 1e4;

/// Line colors, assigned in plotting order (matplotlib's default cycle).
pub const PALETTE: [RGB8; 10] = [
    RGB8 { r: 0x1f, g: 0x77, b: 0xb4 },
    RGB8 { r: 0xff, g: 0x7f, b: 0x0e },
    RGB8 { r: 0x2c, g: 0xa0, b: 0x2c },
    RGB8 { r: 0xd6, g: 0x27, b: 0x28 },
    RGB8 { r: 0x94, g: 0x67, b: 0xbd },
    RGB8 { r: 0x8c, g: 0x56, b: 0x4b },
    RGB8 { r: 0xe3, g: 0x77, b: 0xc2 },
    RGB8 { r: 0x7f, g: 0x7f, b: 0x7f },
    RGB8 { r: 0xbc, g: 0xbd, b: 0x22 },
    RGB8 { r: 0x17, g: 0xbe, b: 0xcf },
];

const GRID_COLOR: RGB8 = RGB8 { r: 0x50, g: 0x50, b: 0x50 };
const GRID_DIVISIONS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartOptions {
    /// Width in braille dots, at least 32.
    pub width: u32,
    /// Height in braille dots, at least 3.
    pub height: u32,
    pub grid: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            width: 180,
            height: 60,
            grid: true,
        }
    }
}

pub fn color_of(index: usize) -> RGB8 {
    PALETTE[index % PALETTE.len()]
}

/// The x and y extents covering every curve, with some headroom above the largest error.
fn bounds(curves: &[Curve]) -> (f32, f32, f32, f32) {
    let xs = curves
        .iter()
        .flat_map(|c| c.points().iter().map(|p| p.0))
        .filter(|x| x.is_finite());
    let (xmin, xmax) = xs.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), x| {
        (lo.min(x), hi.max(x))
    });
    let ymax = curves
        .iter()
        .flat_map(|c| c.points().iter().map(|p| p.1))
        .filter(|y| y.is_finite())
        .fold(0.0, f64::max)
        * Y_SCALE;
    let ymax = ymax as f32;
    if xmin > xmax {
        return (0.0, 1.0, 0.0, 1.0);
    }
    let (xmin, xmax) = if xmin == xmax {
        (xmin - 0.5, xmax + 0.5)
    } else {
        (xmin, xmax)
    };
    let ymax = if ymax > 0.0 { 1.1 * ymax } else { 1.0 };
    (xmin, xmax, 0.0, ymax)
}

fn grid_lines(xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Vec<Vec<(f32, f32)>> {
    let mut lines = Vec::with_capacity(2 * (GRID_DIVISIONS + 1));
    for i in 0..=GRID_DIVISIONS {
        let t = i as f32 / GRID_DIVISIONS as f32;
        let x = xmin + t * (xmax - xmin);
        let y = ymin + t * (ymax - ymin);
        lines.push(vec![(x, ymin), (x, ymax)]);
        lines.push(vec![(xmin, y), (xmax, y)]);
    }
    lines
}

/// Draws the chart for `curves` and returns it as a string.
pub fn chart(curves: &[Curve], options: &ChartOptions) -> String {
    let (xmin, xmax, ymin, ymax) = bounds(curves);

    let grid = if options.grid {
        grid_lines(xmin, xmax, ymin, ymax)
    } else {
        vec![]
    };
    let lines: Vec<Vec<(f32, f32)>> = curves
        .iter()
        .map(|c| {
            c.points()
                .iter()
                .map(|&(x, e)| (x, (e * Y_SCALE) as f32))
                .collect()
        })
        .collect();
    let markers: Vec<[(f32, f32); 1]> = curves
        .iter()
        .map(|c| {
            let (x, e) = c.reference();
            [(x, (e * Y_SCALE) as f32)]
        })
        .collect();

    let mut shapes: Vec<(Shape, RGB8)> = grid
        .iter()
        .map(|l| (Shape::Lines(l), GRID_COLOR))
        .collect();
    for (i, (line, marker)) in lines.iter().zip(&markers).enumerate() {
        shapes.push((Shape::Lines(line), color_of(i)));
        shapes.push((Shape::Points(marker), color_of(i)));
    }

    let mut chart = Chart::new_with_y_range(options.width, options.height, xmin, xmax, ymin, ymax);
    let mut canvas = &mut chart;
    for (shape, color) in &shapes {
        canvas = canvas.linecolorplot(shape, *color);
    }
    canvas.axis();
    canvas.figures();
    format!("relative error (x{:e})\n{}", 1.0 / Y_SCALE, canvas)
}

/// The text annotating a curve at its reference point.
pub fn annotation(curve: &Curve) -> String {
    let (x, e) = curve.reference();
    format!("{} @ x={}: {}", curve.config().name(), x, e)
}

/// Legend entries, one per line, right aligned to `columns`.
pub fn legend(curves: &[Curve], columns: usize) -> String {
    let mut out = String::new();
    for (i, curve) in curves.iter().enumerate() {
        let text = format!("\u{2501}\u{2501} {}", annotation(curve));
        let pad = columns.saturating_sub(text.chars().count());
        let c = color_of(i);
        out.push_str(&" ".repeat(pad));
        out.push_str(&text.truecolor(c.r, c.g, c.b).to_string());
        out.push('\n');
    }
    out
}

/// The chart followed by its legend.
pub fn render(curves: &[Curve], options: &ChartOptions) -> String {
    let mut out = chart(curves, options);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    // braille characters hold two dots horizontally
    out.push_str(&legend(curves, options.width as usize / 2));
    out
}
