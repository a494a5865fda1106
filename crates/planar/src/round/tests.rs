use super::*;
use crate::sample::{draw_circle, Bounds2, ReplayToken};
use proptest::prelude::*;
use std::f64::consts::SQRT_2;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y).unwrap()
}

fn unit_diag() -> Circle {
    Circle::new(p(1.0, 1.0), SQRT_2).unwrap()
}

fn close(a: Point, x: f64, y: f64) -> bool {
    (a.x() - x).abs() < 1e-12 && (a.y() - y).abs() < 1e-12
}

#[test]
fn radius_must_be_positive() {
    assert_eq!(
        Circle::from_raw(0.0, 0.0, 0.0),
        Err(ConstructionError::NonPositiveRadius(0.0))
    );
    assert_eq!(
        Circle::from_raw(0.0, 0.0, -1.0),
        Err(ConstructionError::NonPositiveRadius(-1.0))
    );
    assert!(Circle::from_raw(0.0, 0.0, 1e-13).is_err());
    assert_eq!(
        Circle::from_raw(0.0, f64::NAN, 1.0),
        Err(ConstructionError::NotANumber)
    );
}

#[test]
fn line_through_center_gives_two_points() {
    let c = unit_diag();
    let hits = c.intersect_line(&Line::new(1.0, -1.0, 0.0).unwrap());
    match hits {
        Intersection::Two(a, b) => {
            assert!(close(a, 2.0, 2.0));
            assert!(close(b, 0.0, 0.0));
        }
        other => panic!("expected two points, got {other:?}"),
    }
    for q in hits {
        assert!(c.on_boundary(&q));
    }
}

#[test]
fn tangent_line_gives_the_foot() {
    let c = unit_diag();
    let hits = c.intersect_line(&Line::new(1.0, 1.0, 0.0).unwrap());
    assert_eq!(hits.len(), 1);
    assert!(close(hits.first().unwrap(), 0.0, 0.0));
    assert!(c
        .intersect_line(&Line::new(1.0, 1.0, 5.0).unwrap())
        .is_empty());
}

#[test]
fn secant_off_center() {
    let c = Circle::from_raw(0.0, 0.0, 2.0).unwrap();
    let hits = c.intersect_line(&Line::new(0.0, 1.0, -1.0).unwrap());
    assert_eq!(hits.len(), 2);
    let xs: Vec<f64> = hits.points().iter().map(|q| q.x()).collect();
    assert!(xs.iter().any(|x| (x - 3f64.sqrt()).abs() < 1e-12));
    assert!(xs.iter().any(|x| (x + 3f64.sqrt()).abs() < 1e-12));
    for q in hits {
        assert!((q.y() - 1.0).abs() < 1e-12);
        assert!(c.on_boundary(&q));
    }
}

#[test]
fn segment_keeps_spanned_hits() {
    let c = Circle::from_raw(0.0, 0.0, 2.0).unwrap();
    let s = Segment::new(p(0.0, 1.0), p(5.0, 1.0)).unwrap();
    let hits = c.intersect_segment(&s);
    assert_eq!(hits.len(), 1);
    assert!(close(hits.first().unwrap(), 3f64.sqrt(), 1.0));
}

#[test]
fn membership_predicates() {
    let c = unit_diag();
    assert!(c.on_boundary(&p(0.0, 0.0)));
    assert!(!c.contains(&p(0.0, 0.0)));
    assert!(c.contains(&p(1.0, 0.0)));
    assert!(!c.on_boundary(&p(1.0, 0.0)));
    assert!(!c.contains(&p(-1.0, -1.0)));
    assert!(!c.on_boundary(&p(-1.0, -1.0)));
    assert!((c.distance_to(&p(-1.0, -1.0)) - SQRT_2).abs() < 1e-12);
    assert!((c.distance_to(&p(1.0, 1.0)) - SQRT_2).abs() < 1e-12);
}

#[test]
fn tangent_points_by_position() {
    let c = unit_diag();
    let on = c.tangent_points(&p(0.0, 0.0));
    assert_eq!(on, Intersection::One(p(0.0, 0.0)));
    assert!(c.tangent_points(&p(1.0, 0.0)).is_empty());
    let out = p(1.0 - SQRT_2, 1.0 - SQRT_2);
    let ts = c.tangent_points(&out);
    assert_eq!(ts.len(), 2);
    for t in ts {
        assert!(c.on_boundary_eps(&t, Tolerance::new(1e-10)));
    }
}

#[test]
fn tangent_lines_touch_once() {
    let c = Circle::from_raw(0.0, 0.0, 1.0).unwrap();
    let lines = c.tangent_lines(&p(2.0, 0.0));
    assert_eq!(lines.len(), 2);
    for l in &lines {
        assert!((l.distance_to(&c.center()) - 1.0).abs() < 1e-12);
        assert!(l.contains(&p(2.0, 0.0)));
    }
    let on = c.tangent_lines(&p(0.0, 1.0));
    assert_eq!(on.len(), 1);
    assert!(on[0].coincide(&Line::new(0.0, 1.0, -1.0).unwrap()));
    assert!(c.tangent_lines(&p(0.5, 0.0)).is_empty());
}

#[test]
fn relation_classification() {
    let big = Circle::from_raw(0.0, 0.0, 10.0).unwrap();
    let coarse = Tolerance::new(1.0);
    let small = Circle::from_raw(5.0, 0.0, 4.0).unwrap();
    assert_eq!(big.relation(&small), CircleRelation::Contain);
    assert_eq!(big.relation_eps(&small, coarse), CircleRelation::Contain);
    let touching = Circle::from_raw(5.0, 0.0, 5.0).unwrap();
    assert_eq!(big.relation(&touching), CircleRelation::Internal);
    let outside = Circle::from_raw(15.0, 0.0, 5.0).unwrap();
    assert_eq!(big.relation_eps(&outside, coarse), CircleRelation::External);
    let apart = Circle::from_raw(15.0, 0.0, 4.0).unwrap();
    assert_eq!(big.relation_eps(&apart, coarse), CircleRelation::Separate);
    let crossing = Circle::from_raw(10.0, 0.0, 3.0).unwrap();
    assert_eq!(big.relation(&crossing), CircleRelation::Intersect);
    // Equal circles share every point: internally tangent at distance zero.
    assert_eq!(big.relation(&big), CircleRelation::Internal);
}

#[test]
fn transforms_move_the_center_only() {
    let c = unit_diag();
    let m = c.reflect(&Line::X_AXIS);
    assert!(close(m.center(), 1.0, -1.0));
    assert_eq!(m.radius(), c.radius());
    assert!(c.translate(-1.0, -1.0).coincide(&Circle::from_raw(0.0, 0.0, SQRT_2).unwrap()));
    assert!(c
        .rotate(&Point::origin(), std::f64::consts::PI)
        .coincide(&Circle::from_raw(-1.0, -1.0, SQRT_2).unwrap()));
    assert!(!c.coincide(&Circle::from_raw(1.0, 1.0, 1.0).unwrap()));
}

#[test]
fn sampled_relations_are_symmetric() {
    let bounds = Bounds2::default();
    for index in 0..200 {
        let mut rng = ReplayToken { seed: 7, index }.rng();
        let a = draw_circle(&mut rng, bounds, 0.1..5.0);
        let b = draw_circle(&mut rng, bounds, 0.1..5.0);
        assert_eq!(a.relation(&b), b.relation(&a));
    }
}

#[test]
fn coarse_tolerance_does_not_move_secant_points() {
    let c = Circle::from_raw(0.0, 0.0, 1.0).unwrap();
    let l = Line::new(0.0, 1.0, -0.3).unwrap();
    let hits = c.intersect_line_eps(&l, Tolerance::new(0.5));
    assert_eq!(hits.len(), 2);
    let half = (1.0f64 - 0.09).sqrt();
    let xs: Vec<f64> = hits.points().iter().map(|q| q.x()).collect();
    assert!(xs.iter().any(|x| (x - half).abs() < 1e-12));
    assert!(xs.iter().any(|x| (x + half).abs() < 1e-12));
    for q in hits {
        assert!((q.y() - 0.3).abs() < 1e-12);
        assert!(c.on_boundary(&q));
    }
}

proptest! {
    #[test]
    fn relation_is_symmetric(
        x1 in -10.0f64..10.0, y1 in -10.0f64..10.0, r1 in 0.01f64..10.0,
        x2 in -10.0f64..10.0, y2 in -10.0f64..10.0, r2 in 0.01f64..10.0,
        eps in 0.0f64..0.5,
    ) {
        let a = Circle::from_raw(x1, y1, r1).unwrap();
        let b = Circle::from_raw(x2, y2, r2).unwrap();
        let tol = Tolerance::new(eps);
        prop_assert_eq!(a.relation_eps(&b, tol), b.relation_eps(&a, tol));
    }

    #[test]
    fn tangent_points_are_perpendicular_to_the_radius(
        cx in -10.0f64..10.0, cy in -10.0f64..10.0, r in 0.1f64..5.0,
        angle in 0.0f64..std::f64::consts::TAU, extra in 0.1f64..20.0,
    ) {
        let c = Circle::from_raw(cx, cy, r).unwrap();
        let d = r + extra;
        let from = Point::new(cx + d * angle.cos(), cy + d * angle.sin()).unwrap();
        let ts = c.tangent_points(&from);
        prop_assert_eq!(ts.len(), 2);
        let tol = Tolerance::new(1e-9);
        for t in ts {
            prop_assert!(c.on_boundary_eps(&t, tol));
            let radius = t.to_vector() - c.center().to_vector();
            let towards = from.to_vector() - t.to_vector();
            prop_assert!(radius.dot(&towards).abs() < 1e-8 * (1.0 + d * d));
        }
    }

    #[test]
    fn line_hits_match_distance(
        cx in -5.0f64..5.0, cy in -5.0f64..5.0, r in 0.5f64..5.0,
        a in -3.0f64..3.0, b in -3.0f64..3.0, k in -10.0f64..10.0,
    ) {
        prop_assume!(a.hypot(b) > 0.1);
        let c = Circle::from_raw(cx, cy, r).unwrap();
        let line = Line::new(a, b, k).unwrap();
        let d = line.distance_to(&c.center());
        prop_assume!((d - r).abs() > 1e-6);
        let hits = c.intersect_line(&line);
        prop_assert_eq!(hits.len(), if d < r { 2 } else { 0 });
        let tol = Tolerance::new(1e-9);
        for q in hits {
            prop_assert!(c.on_boundary_eps(&q, tol));
            prop_assert!(line.contains_eps(&q, tol));
        }
    }
}
