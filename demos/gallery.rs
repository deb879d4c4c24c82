//! Print an SVG sheet with every side treatment and every named shape.
//!
//! ```text
//! RUST_LOG=featglyph=trace cargo run --example gallery --features tracing > gallery.svg
//! ```

use featglyph::{
    CompositeShapeSpec, GlyphConfig, NamedShape, ShapeRequest, SideTreatment, build_glyph,
};
use miette::IntoDiagnostic;
use std::fmt::Write;
use tracing_subscriber::EnvFilter;

const PPR: f64 = 10.0;
const HEIGHT: f64 = 16.0;
const LENGTH: u32 = 4;
const CELL_W: f64 = 70.0;
const CELL_H: f64 = 40.0;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = GlyphConfig::default();
    let mut cells = Vec::new();

    for shape in [
        NamedShape::Rectangle,
        NamedShape::TriangleUp,
        NamedShape::TriangleDown,
        NamedShape::TriangleLeft,
        NamedShape::TriangleRight,
    ] {
        let request = ShapeRequest::new(PPR, HEIGHT, LENGTH, shape.into())?;
        cells.push((shape.name().to_string(), build_glyph(&request, &config)));
    }

    for treatment in SideTreatment::ALL {
        let spec = CompositeShapeSpec::new(treatment, treatment, treatment, config.default_scaling_factor)?;
        let request = ShapeRequest::new(PPR, HEIGHT, LENGTH, spec.into())?;
        cells.push((format!("{treatment:?}"), build_glyph(&request, &config)));
    }

    let columns = 4;
    let rows = cells.len().div_ceil(columns);
    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        CELL_W * columns as f64,
        CELL_H * rows as f64
    )
    .into_diagnostic()?;
    for (i, (label, glyph)) in cells.iter().enumerate() {
        let x = CELL_W * (i % columns) as f64 + 10.0;
        let y = CELL_H * (i / columns) as f64 + 8.0;
        writeln!(svg, r#"  <g transform="translate({x} {y})">"#).into_diagnostic()?;
        writeln!(svg, r#"    <path d="{}" fill="steelblue" stroke="black"/>"#, glyph.outline).into_diagnostic()?;
        if let Some(connector) = &glyph.connector {
            writeln!(svg, r#"    <path d="{connector}" fill="none" stroke="black"/>"#).into_diagnostic()?;
        }
        writeln!(svg, r#"    <text y="{}" font-size="7">{label}</text>"#, HEIGHT + 12.0).into_diagnostic()?;
        writeln!(svg, "  </g>").into_diagnostic()?;
    }
    svg.push_str("</svg>\n");

    print!("{svg}");
    Ok(())
}
