//! Print an SVG diagram of a regular polygon.
//!
//! `cargo run --example regular_ngon --features tracing -- 7`
//! (set `RUST_LOG=debug` to see clamping and label fallbacks)

use ngon::{Figure, FigureOptions, build_regular_polygon, validate_polygon};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let sides = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(6);

    if let Err(e) = validate_polygon(sides, Some(100.0)) {
        tracing::warn!("{}", e);
    }

    let vertices = build_regular_polygon(sides, 100.0, 200.0, 150.0, 0.0);
    let figure = Figure::prepare(
        &vertices,
        &FigureOptions {
            show_diagonals: true,
            show_angles: true,
            ..FigureOptions::default()
        },
    );

    println!(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}">"#, figure.view_box);
    for d in &figure.diagonal_paths {
        println!(r#"  <path d="{}" fill="none" stroke="gray" stroke-dasharray="4"/>"#, d);
    }
    println!(r#"  <path d="{}" fill="none" stroke="black"/>"#, figure.path);
    for d in &figure.angle_arcs {
        println!(r#"  <path d="{}" fill="none" stroke="blue"/>"#, d);
    }
    for label in &figure.vertex_labels {
        if let Some(text) = &label.text {
            println!(
                r#"  <text x="{:.2}" y="{:.2}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
                label.position.x, label.position.y, text
            );
        }
    }
    println!("</svg>");

    eprintln!(
        "area {:.2}, perimeter {:.2}, {} diagonals",
        figure.metrics.area,
        figure.metrics.perimeter(),
        figure.metrics.diagonal_count
    );
}
