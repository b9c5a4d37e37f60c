//! SVG charts: points distribution pie and contributions bar chart.

use crate::aggregate::ScoreBoard;
use crate::error::Result;
use crate::model::{ContributorRecord, OpenIssue};
use std::f64::consts::PI;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 500.0;
const START_ANGLE_DEG: f64 = 140.0;
const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// `<dir>/<stem><suffix>` for a CSV path.
pub fn chart_path(csv_path: &Path, suffix: &str) -> PathBuf {
    let stem = csv_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    csv_path.with_file_name(format!("{stem}{suffix}.svg"))
}

pub fn write_distribution_chart(path: &Path, board: &ScoreBoard, issues: &[OpenIssue]) -> Result<()> {
    std::fs::write(path, distribution_svg(board, issues))?;
    Ok(())
}

pub fn write_contributions_chart(path: &Path, contributors: &[ContributorRecord], repo: &str) -> Result<()> {
    std::fs::write(path, contributions_svg(contributors, repo))?;
    Ok(())
}

pub fn distribution_svg(board: &ScoreBoard, issues: &[OpenIssue]) -> String {
    let mut svg = open_document();
    text(&mut svg, 20.0, 30.0, 16.0, "start", "Contribution Points Distribution");

    let (cx, cy, r) = (WIDTH / 2.0, HEIGHT / 2.0 - 10.0, 150.0);
    let total = board.total_points();

    if total == 0 {
        text(&mut svg, cx, cy, 14.0, "middle", "No contribution points recorded");
    } else {
        let mut start = START_ANGLE_DEG;
        for (i, entry) in board.entries().iter().enumerate() {
            let share = entry.points as f64 / total as f64;
            let sweep = share * 360.0;
            let end = start + sweep;
            let color = PALETTE[i % PALETTE.len()];

            if entry.points == total {
                // a lone arc with equal endpoints draws nothing
                let _ = writeln!(svg, r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{color}"/>"#);
            } else {
                let (x1, y1) = polar(cx, cy, r, start);
                let (x2, y2) = polar(cx, cy, r, end);
                let large_arc = if sweep > 180.0 { 1 } else { 0 };
                // sweep-flag 0: counter-clockwise on screen
                let _ = writeln!(
                    svg,
                    r#"<path d="M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 0 {x2:.2} {y2:.2} Z" fill="{color}"/>"#
                );
            }

            let mid = start + sweep / 2.0;
            let (px, py) = polar(cx, cy, r * 0.6, mid);
            text(&mut svg, px, py, 11.0, "middle", &format!("{:.1}%", share * 100.0));

            let (lx, ly) = polar(cx, cy, r * 1.1, mid);
            let anchor = if lx >= cx { "start" } else { "end" };
            text(&mut svg, lx, ly, 11.0, anchor, &entry.label());

            start = end;
        }
    }

    issues_block(&mut svg, issues);
    svg.push_str("</svg>\n");
    svg
}

fn issues_block(svg: &mut String, issues: &[OpenIssue]) {
    let line_height = 11.0;
    let lines: Vec<String> = std::iter::once("Open Issues:".to_string())
        .chain(issues.iter().map(|i| format!("- {} (#{})", i.title, i.number)))
        .collect();

    let mut y = HEIGHT - 10.0 - line_height * (lines.len() as f64 - 1.0);
    for line in &lines {
        text(svg, 20.0, y, 9.0, "start", line);
        y += line_height;
    }
}

pub fn contributions_svg(contributors: &[ContributorRecord], repo: &str) -> String {
    let mut svg = open_document();
    text(&mut svg, WIDTH / 2.0, 30.0, 16.0, "middle", &format!("{repo} Contributors"));

    let (left, right, top, bottom) = (80.0, WIDTH - 30.0, 60.0, HEIGHT - 70.0);
    let plot_height = bottom - top;

    let _ = writeln!(
        svg,
        r#"<line x1="{left}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="black"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{left}" y1="{top}" x2="{left}" y2="{bottom}" stroke="black"/>"#
    );

    let max = contributors.iter().map(|c| c.contributions).max().unwrap_or(0);
    let scale_max = nice_ceiling(max);

    for tick in ticks(scale_max) {
        let y = bottom - plot_height * tick as f64 / scale_max as f64;
        let _ = writeln!(
            svg,
            r#"<line x1="{:.2}" y1="{y:.2}" x2="{left}" y2="{y:.2}" stroke="black"/>"#,
            left - 5.0
        );
        text(&mut svg, left - 8.0, y + 4.0, 10.0, "end", &tick.to_string());
    }

    if !contributors.is_empty() {
        let slot = (right - left) / contributors.len() as f64;
        let bar_width = slot * 0.8;
        for (i, contributor) in contributors.iter().enumerate() {
            let x = left + slot * i as f64 + (slot - bar_width) / 2.0;
            let h = plot_height * contributor.contributions as f64 / scale_max as f64;
            let y = bottom - h;
            let _ = writeln!(
                svg,
                r#"<rect x="{x:.2}" y="{y:.2}" width="{bar_width:.2}" height="{h:.2}" fill="{}"/>"#,
                PALETTE[0]
            );
            let center = x + bar_width / 2.0;
            text(&mut svg, center, y - 4.0, 11.0, "middle", &contributor.contributions.to_string());
            text(&mut svg, center, bottom + 16.0, 10.0, "middle", &contributor.login);
        }
    }

    text(&mut svg, (left + right) / 2.0, HEIGHT - 25.0, 12.0, "middle", "Contributors");
    let _ = writeln!(
        svg,
        r#"<text x="20" y="{:.2}" font-size="12" text-anchor="middle" transform="rotate(-90 20 {:.2})">Number of Contributions</text>"#,
        (top + bottom) / 2.0,
        (top + bottom) / 2.0
    );

    svg.push_str("</svg>\n");
    svg
}

fn open_document() -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    svg
}

fn text(svg: &mut String, x: f64, y: f64, size: f64, anchor: &str, content: &str) {
    let _ = writeln!(
        svg,
        r#"<text x="{x:.2}" y="{y:.2}" font-size="{size}" text-anchor="{anchor}">{}</text>"#,
        escape(content)
    );
}

/// Angles in degrees, counter-clockwise from the positive x axis.
fn polar(cx: f64, cy: f64, r: f64, degrees: f64) -> (f64, f64) {
    let rad = degrees * PI / 180.0;
    (cx + r * rad.cos(), cy - r * rad.sin())
}

fn nice_ceiling(max: u64) -> u64 {
    if max == 0 {
        return 1;
    }
    let step = tick_step(max);
    max.div_ceil(step).saturating_mul(step)
}

fn tick_step(max: u64) -> u64 {
    let mut magnitude = 1;
    loop {
        for factor in [1, 2, 5] {
            let step = magnitude * factor;
            if max / step <= 10 {
                return step;
            }
        }
        magnitude *= 10;
    }
}

fn ticks(scale_max: u64) -> Vec<u64> {
    let step = tick_step(scale_max);
    (0..=scale_max / step).map(|i| i * step).collect()
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
