use decimal_geom::{Coordinate, Decimal};
use glam::{DVec2, Vec2};
use rust_decimal_macros::dec;

#[test]
fn distance_example() {
    assert_eq!(Coordinate::ZERO.distance_to(&Coordinate::new(3, 4)), dec!(5));
}

#[test]
fn angle_examples() {
    let origin = Coordinate::ZERO;
    assert_eq!(origin.angle_to(&Coordinate::new(1, 0)), dec!(0));
    assert_eq!(origin.angle_to(&Coordinate::new(0, 1)), dec!(90));
}

#[test]
fn angle_is_measured_from_origin() {
    let origin = Coordinate::new(dec!(10.5), dec!(-3));
    let east = Coordinate::new(dec!(11.5), dec!(-3));
    let west = Coordinate::new(dec!(9.5), dec!(-3));

    assert_eq!(origin.angle_to(&east), dec!(0));
    assert_eq!(origin.angle_to(&west), dec!(180));
    assert_eq!(east.angle_to(&origin), dec!(180));
}

#[test]
fn angle_stays_in_half_open_range() {
    let origin = Coordinate::ZERO;
    for (x, y) in [(1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)] {
        let angle = origin.angle_to(&Coordinate::new(x, y));
        assert!(angle > dec!(-180) && angle <= dec!(180), "angle {angle}");
    }
}

#[test]
fn coincident_points() {
    let a = Coordinate::new(dec!(0.1), dec!(0.2));
    assert_eq!(Coordinate::distance_between(&a, &a), Decimal::ZERO);
    assert_eq!(Coordinate::angle_between(&a, &a), Decimal::ZERO);
}

#[test]
fn distance_is_symmetric() {
    let pairs = [
        (Coordinate::new(1, 2), Coordinate::new(-7, 11)),
        (Coordinate::new(dec!(0.3), dec!(0.1)), Coordinate::new(dec!(-0.2), dec!(5))),
        (Coordinate::new(1000000, 0), Coordinate::new(0, -1000000)),
    ];
    for (a, b) in pairs {
        assert_eq!(
            Coordinate::distance_between(&a, &b),
            Coordinate::distance_between(&b, &a)
        );
    }
}

#[test]
fn text_round_trip_preserves_scale() {
    let c = Coordinate::new(dec!(1.50), dec!(-0.125));
    insta::assert_snapshot!(c.to_string(), @"1.50,-0.125");
    assert_eq!(c.to_string().parse::<Coordinate>().unwrap().to_string(), "1.50,-0.125");
}

#[test]
fn host_points() {
    let c = Coordinate::new(dec!(0.5), dec!(-2.25));
    assert_eq!(c.to_dvec2(), DVec2::new(0.5, -2.25));
    assert_eq!(c.to_point::<Vec2>(), Vec2::new(0.5, -2.25));
}

#[test]
fn extreme_coordinates_stay_total() {
    let cases = [
        (
            Coordinate::new(Decimal::MIN, 0),
            Coordinate::new(Decimal::MAX, 0),
            dec!(0),
        ),
        (
            Coordinate::new(0, Decimal::MIN),
            Coordinate::new(0, Decimal::MAX),
            dec!(90),
        ),
        (
            Coordinate::new(Decimal::MIN, Decimal::MIN),
            Coordinate::new(Decimal::MAX, Decimal::MAX),
            dec!(45),
        ),
    ];

    for (a, b, angle) in cases {
        assert_eq!(a.distance_to(&b), Decimal::MAX, "distance {a} -> {b}");
        assert_eq!(b.distance_to(&a), Decimal::MAX, "distance {b} -> {a}");
        assert_eq!(a.angle_to(&b), angle, "angle {a} -> {b}");
    }
}
