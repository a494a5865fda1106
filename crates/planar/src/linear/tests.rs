use super::*;
use crate::error::ConstructionError;
use crate::point::Point;
use crate::tolerance::{Coincide, Tolerance};
use crate::transform::Transform;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y).unwrap()
}

fn line(a: f64, b: f64, c: f64) -> Line {
    Line::new(a, b, c).unwrap()
}

fn close(a: Point, x: f64, y: f64) -> bool {
    (a.x() - x).abs() < 1e-12 && (a.y() - y).abs() < 1e-12
}

#[test]
fn construction_rejects_degenerate_input() {
    assert!(matches!(
        Line::new(0.0, 1e-13, 4.0),
        Err(ConstructionError::DegenerateCoefficients(_))
    ));
    assert_eq!(Line::new(f64::NAN, 1.0, 0.0), Err(ConstructionError::NotANumber));
    let a = p(1.0, 1.0);
    let b = p(1.0 + 1e-13, 1.0);
    assert_eq!(Line::through(&a, &b), Err(ConstructionError::CoincidentPoints));
    // The strict variant only rejects exact equality.
    assert!(Line::through_strict(&a, &b).is_ok());
    assert_eq!(
        Line::through_strict(&a, &a),
        Err(ConstructionError::CoincidentPoints)
    );
    assert_eq!(Segment::new(a, b), Err(ConstructionError::CoincidentPoints));
    assert_eq!(Ray::new(a, a), Err(ConstructionError::CoincidentPoints));
}

#[test]
fn line_through_two_points_uses_general_form() {
    let l = Line::through(&p(0.0, 1.0), &p(1.0, 2.0)).unwrap();
    assert_eq!((l.a(), l.b(), l.c()), (1.0, -1.0, 1.0));
    assert!(l.contains(&p(-1.0, 0.0)));
}

#[test]
fn line_from_point_and_angle() {
    let l = Line::from_point_angle(&p(1.0, 0.0), FRAC_PI_4).unwrap();
    assert!(l.contains(&p(0.0, -1.0)));
    let v = Line::from_point_angle(&p(2.0, 5.0), -FRAC_PI_2).unwrap();
    assert_eq!((v.a(), v.b(), v.c()), (1.0, 0.0, -2.0));
    let v2 = Line::from_point_angle(&p(2.0, 5.0), 3.0 * FRAC_PI_2).unwrap();
    assert!(v2.coincide(&v));
    let h = Line::from_point_angle(&p(2.0, 5.0), PI).unwrap();
    assert_eq!((h.a(), h.b(), h.c()), (0.0, 1.0, -5.0));
    assert_eq!(
        Line::from_point_angle(&p(2.0, 5.0), f64::NEG_INFINITY),
        Err(ConstructionError::NonFiniteAngle(f64::NEG_INFINITY))
    );
}

#[test]
fn line_intersections() {
    let l1 = line(1.0, -1.0, 1.0);
    assert!(close(l1.intersect(&line(-1.0, -1.0, 1.0)).unwrap(), 0.0, 1.0));
    assert!(close(l1.intersect(&line(1.0, 1.0, -1.0)).unwrap(), 0.0, 1.0));
    assert!(l1.intersect(&line(1.0, -1.0, -1.0)).is_none());
    // Coincident lines have no unique intersection either.
    assert!(l1.intersect(&line(2.0, -2.0, 2.0)).is_none());
}

#[test]
fn distances_and_membership() {
    let l = line(1.0, -1.0, 1.0);
    assert!((l.distance_to(&Point::origin()) - 2f64.sqrt() / 2.0).abs() < 1e-12);
    let s = Segment::new(p(1.0, 0.0), p(-10.0, 0.0)).unwrap();
    assert!((s.distance_to(&p(1.0, 1.0)) - 1.0).abs() < 1e-12);
    assert!((s.distance_to(&p(3.0, 0.0)) - 2.0).abs() < 1e-12);
    assert!((s.distance_to(&p(-4.0, -3.0)) - 3.0).abs() < 1e-12);
    assert!(s.contains(&p(-4.0, 0.0)));
    assert!(s.contains(&p(1.0, 0.0)));
    assert!(!s.contains(&p(2.0, 0.0)));
}

#[test]
fn perpendicular_and_parallel_construction() {
    let l = line(1.0, -1.0, 1.0);
    let perp = l.perpendicular_through(&p(1.0, 0.0));
    assert_eq!((perp.a(), perp.b(), perp.c()), (-1.0, -1.0, 1.0));
    assert!(perp.is_perpendicular(&l));
    let par = l.parallel_through(&p(1.0, 0.0));
    assert_eq!((par.a(), par.b(), par.c()), (1.0, -1.0, -1.0));
    assert!(par.is_parallel(&l));
    assert!(!par.coincide(&l));
    assert!(close(l.foot_of_perpendicular(&p(1.0, 0.0)), 0.0, 1.0));
}

#[test]
fn slope_and_axis_evaluation() {
    let l = line(3.0, -7.0, 6.0);
    assert!((l.x_at(9.0 / 7.0) - 1.0).abs() < 1e-12);
    assert!((l.y_at(1.0) - 9.0 / 7.0).abs() < 1e-12);
    assert!((l.slope() - 3.0 / 7.0).abs() < 1e-12);
    assert!(Line::Y_AXIS.slope().is_nan());
    assert!(Line::Y_AXIS.y_at(0.0).is_nan());
    assert!(Line::X_AXIS.x_at(0.0).is_nan());
    assert_eq!(Line::Y_AXIS.inclination(), FRAC_PI_2);
    assert!((line(1.0, -1.0, 0.0).inclination() - FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn line_coincidence_is_scale_free() {
    let l = line(1.0, -1.0, 1.0);
    assert!(l.coincide(&line(-2.0, 2.0, -2.0)));
    assert!(!l.coincide(&line(1.0, -1.0, 2.0)));
    assert!(!l.coincide(&line(1.0, 1.0, 1.0)));
    assert!(Line::X_AXIS.coincide(&line(0.0, 3.0, 0.0)));
}

#[test]
fn line_transforms() {
    let moved = line(1.0, -1.0, 1.0).translate(1.0, -1.0);
    assert!(moved.contains(&p(1.0, 0.0)));
    assert!(moved.contains(&p(0.0, -1.0)));

    let turned = Line::X_AXIS.rotate(&Point::origin(), FRAC_PI_2);
    assert!(turned.coincide(&Line::Y_AXIS));
    let turned = line(0.0, 1.0, -1.0).rotate(&Point::origin(), FRAC_PI_2);
    assert!(turned.contains(&p(-1.0, 0.0)));
    assert!(turned.contains(&p(-1.0, 7.0)));
    let turned = line(1.0, -1.0, 0.0).rotate(&p(1.0, 0.0), FRAC_PI_4);
    assert!(turned.contains(&p(0.0, 0.0).rotate(&p(1.0, 0.0), FRAC_PI_4)));
    assert!(turned.contains(&p(2.0, 2.0).rotate(&p(1.0, 0.0), FRAC_PI_4)));

    let diag = line(1.0, -1.0, 0.0);
    let mirrored = line(0.0, 1.0, -2.0).reflect(&diag);
    assert!(mirrored.coincide(&line(1.0, 0.0, -2.0)));
}

#[test]
fn bounded_segment_intersections() {
    let s = Segment::new(p(1.0, 0.0), p(-10.0, 0.0)).unwrap();
    let l = line(1.0, -1.0, 1.0);
    assert!(close(s.intersect_line(&l, true).unwrap(), -1.0, 0.0));
    let short = Segment::new(p(1.0, 0.0), p(0.0, 0.0)).unwrap();
    assert!(short.intersect_line(&l, true).is_none());
    assert!(close(short.intersect_line(&l, false).unwrap(), -1.0, 0.0));

    let a = Segment::new(p(-1.0, -1.0), p(1.0, 1.0)).unwrap();
    let b = Segment::new(p(-1.0, 1.0), p(1.0, -1.0)).unwrap();
    assert!(close(a.intersect_segment(&b, true).unwrap(), 0.0, 0.0));
    let c = Segment::new(p(2.0, 0.0), p(3.0, -1.0)).unwrap();
    assert!(a.intersect_segment(&c, true).is_none());
    assert!(a.intersect_segment(&c, false).is_some());
}

#[test]
fn spans_is_a_bounding_range_check() {
    let diag = Segment::new(p(-1.0, -1.0), p(1.0, 1.0)).unwrap();
    // Inside the y-range, off the segment.
    assert!(diag.spans(&p(1.0, 0.0)));
    let horizontal = Segment::new(p(-1.0, 0.0), p(1.0, 0.0)).unwrap();
    assert!(horizontal.spans(&p(0.0, 1.0)));
    // At the x bound, and the y range is empty.
    assert!(!horizontal.spans(&p(1.0, 0.0)));
}

#[test]
fn crossing_counts_touching() {
    let a = Segment::new(p(0.0, 0.0), p(2.0, 0.0)).unwrap();
    assert!(a.crosses(&Segment::new(p(1.0, -1.0), p(1.0, 1.0)).unwrap()));
    assert!(a.crosses(&Segment::new(p(1.0, 0.0), p(1.0, 1.0)).unwrap()));
    assert!(a.crosses(&Segment::new(p(2.0, 0.0), p(3.0, 3.0)).unwrap()));
    assert!(a.crosses(&Segment::new(p(1.0, 0.0), p(3.0, 0.0)).unwrap()));
    assert!(!a.crosses(&Segment::new(p(3.0, 0.0), p(4.0, 0.0)).unwrap()));
    assert!(!a.crosses(&Segment::new(p(0.0, 1.0), p(2.0, 1.0)).unwrap()));
    assert!(!a.crosses(&Segment::new(p(3.0, -1.0), p(3.0, 1.0)).unwrap()));
}

#[test]
fn segment_coincidence_and_reflection() {
    let s = Segment::new(p(-2.0, 1.0), p(-1.0, 1.0)).unwrap();
    let diag = line(1.0, -1.0, 0.0);
    let r = s.reflect(&diag);
    assert!(close(r.p1(), 1.0, -2.0));
    assert!(close(r.p2(), 1.0, -1.0));
    let flipped = Segment::new(p(-1.0, 1.0), p(-2.0, 1.0)).unwrap();
    assert!(s.coincide(&flipped));
    assert!(flipped.coincide(&s));
    assert!(!s.coincide(&r));
    assert!((s.length() - 1.0).abs() < 1e-12);
    assert!(close(s.midpoint(), -1.5, 1.0));
}

#[test]
fn ray_axis_tags_and_membership() {
    let r = Ray::new(p(0.0, 0.0), p(2.0, 1.0)).unwrap();
    assert_eq!(r.axis(), RayAxis::PosX);
    assert!(r.contains(&p(4.0, 2.0)));
    assert!(r.contains(&p(0.0, 0.0)));
    assert!(!r.contains(&p(-4.0, -2.0)));
    assert!(r.on_line(&p(-4.0, -2.0)));
    assert!(!r.contains(&p(4.0, 3.0)));

    let down = Ray::new(p(1.0, 1.0), p(1.0, -5.0)).unwrap();
    assert_eq!(down.axis(), RayAxis::NegY);
    assert!(down.contains(&p(1.0, -100.0)));
    assert!(!down.contains(&p(1.0, 2.0)));
    let dir = down.direction();
    assert!(dir.x.abs() < 1e-12 && (dir.y + 1.0).abs() < 1e-12);

    // Diagonal ties resolve to the x axis.
    let tie = Ray::new(p(0.0, 0.0), p(-1.0, 1.0)).unwrap();
    assert_eq!(tie.axis(), RayAxis::NegX);

    let from_angle = Ray::from_angle(p(0.0, 0.0), FRAC_PI_2).unwrap();
    assert_eq!(from_angle.axis(), RayAxis::PosY);
    assert_eq!(
        Ray::from_angle(p(0.0, 0.0), f64::INFINITY),
        Err(ConstructionError::NonFiniteAngle(f64::INFINITY))
    );
    assert_eq!(
        Ray::from_angle(p(0.0, 0.0), f64::NAN),
        Err(ConstructionError::NotANumber)
    );
}

#[test]
fn ray_intersection_and_transforms() {
    let r = Ray::new(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
    assert!(close(r.intersect_line(&line(1.0, 0.0, -3.0)).unwrap(), 3.0, 0.0));
    assert!(r.intersect_line(&line(1.0, 0.0, 3.0)).is_none());

    let turned = r.rotate(&Point::origin(), PI);
    assert_eq!(turned.axis(), RayAxis::NegX);
    assert!(turned.contains(&p(-3.0, 0.0)));
    let mirrored = r.reflect(&Line::Y_AXIS);
    assert_eq!(mirrored.axis(), RayAxis::NegX);
    let moved = r.translate(0.0, 2.0);
    assert!(moved.contains(&p(5.0, 2.0)));
    assert!(moved.coincide(&Ray::new(p(0.0, 2.0), p(9.0, 2.0)).unwrap()));
}

proptest! {
    #[test]
    fn intersection_lies_on_both_lines(
        a1 in -10.0f64..10.0, b1 in -10.0f64..10.0, c1 in -10.0f64..10.0,
        a2 in -10.0f64..10.0, b2 in -10.0f64..10.0, c2 in -10.0f64..10.0,
    ) {
        prop_assume!(a1.hypot(b1) > 0.1 && a2.hypot(b2) > 0.1);
        prop_assume!((a1 * b2 - a2 * b1).abs() > 0.1);
        let l1 = Line::new(a1, b1, c1).unwrap();
        let l2 = Line::new(a2, b2, c2).unwrap();
        let x = l1.intersect(&l2).unwrap();
        let tol = Tolerance::new(1e-9);
        prop_assert!(l1.contains_eps(&x, tol));
        prop_assert!(l2.contains_eps(&x, tol));
        prop_assert_eq!(l2.intersect(&l1).map(|q| q.coincide_eps(&x, tol)), Some(true));
    }

    #[test]
    fn reflecting_a_line_twice_restores_it(
        a in -5.0f64..5.0, b in -5.0f64..5.0, c in -5.0f64..5.0,
        ax in -5.0f64..5.0, ay in -5.0f64..5.0, angle in 0.0f64..PI,
    ) {
        prop_assume!(a.hypot(b) > 0.1);
        let l = Line::new(a, b, c).unwrap();
        let axis = Line::from_point_angle(&Point::new(ax, ay).unwrap(), angle).unwrap();
        let back = l.reflect(&axis).reflect(&axis);
        let (q1, q2) = l.two_points();
        let tol = Tolerance::new(1e-8);
        prop_assert!(back.contains_eps(&q1, tol));
        prop_assert!(back.contains_eps(&q2, tol));
    }
}
