//! Bar chart of signed attributions, written as a standalone SVG file.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

const WIDTH: f64 = 720.0;
const LABEL_WIDTH: f64 = 220.0;
const ROW_HEIGHT: f64 = 34.0;
const MARGIN: f64 = 24.0;
const POSITIVE: &str = "#ff0051";
const NEGATIVE: &str = "#008bfb";

/// File-name-safe form of a role: spaces and anything that could act as a path
/// component become underscores.
pub fn safe_role(role: &str) -> String {
    role.trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '(' | ')') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Renders `bars` (label, signed value) top to bottom.
pub fn render_svg(title: &str, bars: &[(String, f64)]) -> String {
    let max_abs = bars
        .iter()
        .map(|(_, v)| v.abs())
        .fold(0.0_f64, f64::max)
        .max(f64::EPSILON);
    let plot_width = WIDTH - LABEL_WIDTH - 2.0 * MARGIN;
    let half = plot_width / 2.0;
    let axis_x = MARGIN + LABEL_WIDTH + half;
    let height = 2.0 * MARGIN + ROW_HEIGHT * (bars.len() as f64 + 1.0);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{height}" font-family="sans-serif" font-size="13">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{MARGIN}" y="{}" font-size="15" font-weight="bold">{}</text>"#,
        MARGIN + 4.0,
        escape(title)
    );

    for (i, (label, value)) in bars.iter().enumerate() {
        let y = MARGIN + ROW_HEIGHT * (i as f64 + 1.0);
        let length = value.abs() / max_abs * (half - 8.0);
        let (x, color) = if *value >= 0.0 {
            (axis_x, POSITIVE)
        } else {
            (axis_x - length, NEGATIVE)
        };
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{}" text-anchor="end">{}</text>"#,
            MARGIN + LABEL_WIDTH - 8.0,
            y + ROW_HEIGHT / 2.0 + 4.0,
            escape(label)
        );
        let _ = writeln!(
            svg,
            r#"<rect x="{x:.1}" y="{:.1}" width="{length:.1}" height="{:.1}" fill="{color}"/>"#,
            y + 6.0,
            ROW_HEIGHT - 12.0
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{}" fill="{color}">{value:+.3}</text>"#,
            if *value >= 0.0 { x + length + 4.0 } else { x - 48.0 },
            y + ROW_HEIGHT / 2.0 + 4.0
        );
    }

    let _ = writeln!(
        svg,
        r##"<line x1="{axis_x}" y1="{MARGIN}" x2="{axis_x}" y2="{}" stroke="#333" stroke-width="1"/>"##,
        height - MARGIN
    );
    svg.push_str("</svg>\n");
    svg
}

/// Writes the chart to `dir/file_name`, creating `dir` if needed.
pub fn write_chart(dir: &Path, file_name: &str, svg: &str) -> io::Result<()> {
    std::fs::create_dir_all(dir)?;
    std::fs::write(dir.join(file_name), svg)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
