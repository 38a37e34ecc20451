//! Identify a jittered square sketch and print what was found.
//!
//! Usage:
//!   cargo run -p sketchid --example identify_square
//!   cargo run -p sketchid --example identify_square -- 0.5   # jitter amplitude

use nalgebra::Vector2;
use sketchid::api::{draw_polygon_strokes, identify, IdentifyCfg, JitterCfg, ReplayToken};

fn main() {
    let jitter = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.3);

    let corners = [
        Vector2::new(0.0, 0.0),
        Vector2::new(10.0, 0.0),
        Vector2::new(10.0, 10.0),
        Vector2::new(0.0, 10.0),
    ];
    let strokes = draw_polygon_strokes(
        &corners,
        JitterCfg {
            points_per_stroke: 40,
            jitter,
        },
        ReplayToken { seed: 11, index: 0 },
    );

    let result = identify(&strokes, 0.35, &IdentifyCfg::default());

    println!(
        "{} segments after intersection, {} closed shape(s)",
        result.segments.len(),
        result.shapes.len()
    );
    for (i, shape) in result.shapes.iter().enumerate() {
        println!(
            "shape {i}: anchor ({:.2}, {:.2}), {} edges",
            shape.anchor.x,
            shape.anchor.y,
            shape.segments.len()
        );
        for seg in &shape.segments {
            println!(
                "  ({:.2}, {:.2}) -> ({:.2}, {:.2})  kind {:?}",
                seg.begin.x, seg.begin.y, seg.end.x, seg.end.y, seg.kind
            );
        }
    }
}
