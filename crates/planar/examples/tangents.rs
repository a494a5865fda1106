//! Print tangent constructions and circle relations for a small scene.
//!
//! Usage:
//!   cargo run -p planar --example tangents
//!
//! Runs a few degenerate cases too (parallel lines, a parabola through a
//! repeated x) so the kernel's trace events show up in the log.

use planar::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::TRACE)
        .init();

    let circle = Circle::from_raw(1.0, 1.0, std::f64::consts::SQRT_2)?;
    for from in [Point::new(0.0, 0.0)?, Point::new(1.0, 0.0)?, Point::new(-1.0, -1.0)?] {
        let points = circle.tangent_points(&from);
        println!("tangents from ({}, {}): {} point(s)", from.x(), from.y(), points.len());
        for (i, line) in circle.tangent_lines(&from).iter().enumerate() {
            println!("  line {i}: {:.4}x + {:.4}y + {:.4} = 0", line.a(), line.b(), line.c());
        }
    }

    let big = Circle::from_raw(0.0, 0.0, 10.0)?;
    for other in [
        Circle::from_raw(5.0, 0.0, 4.0)?,
        Circle::from_raw(5.0, 0.0, 5.0)?,
        Circle::from_raw(10.0, 0.0, 3.0)?,
        Circle::from_raw(15.0, 0.0, 5.0)?,
        Circle::from_raw(20.0, 0.0, 4.0)?,
    ] {
        println!("relation to {:?}: {:?}", other, big.relation(&other));
    }

    let l1 = Line::new(1.0, -1.0, 1.0)?;
    let l2 = Line::new(1.0, -1.0, -1.0)?;
    println!("parallel intersection: {:?}", l1.intersect(&l2));
    let degenerate = Parabola::through_points(
        &Point::new(0.0, 0.0)?,
        &Point::new(0.0, 1.0)?,
        &Point::new(2.0, 2.0)?,
    );
    println!("parabola through repeated x: {degenerate:?}");
    Ok(())
}
