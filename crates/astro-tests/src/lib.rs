//! Integration tests for astro-rs crates.
//!
//! End-to-end checks that affine transforms built in astro-math behave
//! the same on every astro-core representation.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use astro_core::prelude::*;
    use astro_math::{AffineTransform, Mat4};
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    const EPS: f64 = 1e-9;

    fn assert_cartesian_eq(p: &Cartesian, expected: [f64; 3]) {
        let [x, y, z] = p.values();
        assert_abs_diff_eq!(x, expected[0], epsilon = EPS);
        assert_abs_diff_eq!(y, expected[1], epsilon = EPS);
        assert_abs_diff_eq!(z, expected[2], epsilon = EPS);
    }

    // ------------------------------------------------------------------
    // Cartesian
    // ------------------------------------------------------------------

    #[test]
    fn test_identity_is_noop() {
        let t = AffineTransform::new();

        let c = Cartesian::from_values(1.5, -2.0, 3.25, LengthUnit::Kilometer);
        assert_eq!(t.apply(&c).unwrap(), c);

        let s = Spherical::new(Angle::degrees(30.0), Angle::degrees(60.0), Length::parsecs(2.0));
        let out = t.apply(&s).unwrap();
        assert_abs_diff_eq!(out.azimuth().value(), 30.0, epsilon = EPS);
        assert_abs_diff_eq!(out.polar().value(), 60.0, epsilon = EPS);
        assert_abs_diff_eq!(out.distance().value(), 2.0, epsilon = EPS);

        let e = SphericalEquatorial::new(
            Angle::radians(1.0),
            Angle::radians(-0.5),
            Length::astronomical_units(4.0),
        );
        let out = t.apply(&e).unwrap();
        assert_abs_diff_eq!(out.lon().value(), 1.0, epsilon = EPS);
        assert_abs_diff_eq!(out.lat().value(), -0.5, epsilon = EPS);
        assert_abs_diff_eq!(out.distance().value(), 4.0, epsilon = EPS);
    }

    #[test]
    fn test_scale_single_axis() {
        let mut t = AffineTransform::new();
        t.scale(2.0, 1.0, 1.0);

        let p = Cartesian::from_values(1.0, 2.0, 3.0, LengthUnit::Meter);
        assert_cartesian_eq(&t.apply(&p).unwrap(), [2.0, 2.0, 3.0]);
    }

    #[test]
    fn test_rotate_z_quarter_turn() {
        let mut t = AffineTransform::new();
        t.rotate_z(Angle::radians(FRAC_PI_2));

        let p = Cartesian::from_values(1.0, 0.0, 0.0, LengthUnit::Meter);
        assert_cartesian_eq(&t.apply(&p).unwrap(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_composition_order() {
        let p = Cartesian::from_values(1.0, 0.0, 0.0, LengthUnit::Meter);

        let mut a = AffineTransform::new();
        a.translate(5.0, 0.0, 0.0).scale(2.0, 2.0, 2.0);
        assert_cartesian_eq(&a.apply(&p).unwrap(), [7.0, 0.0, 0.0]);

        let mut b = AffineTransform::new();
        b.scale(2.0, 2.0, 2.0).translate(5.0, 0.0, 0.0);
        assert_cartesian_eq(&b.apply(&p).unwrap(), [12.0, 0.0, 0.0]);
    }

    #[test]
    fn test_translate_rotate_not_commutative() {
        let origin = Cartesian::from_values(0.0, 0.0, 0.0, LengthUnit::Meter);

        let mut a = AffineTransform::new();
        a.translate(1.0, 0.0, 0.0).rotate_z(Angle::radians(FRAC_PI_2));
        let mut b = AffineTransform::new();
        b.rotate_z(Angle::radians(FRAC_PI_2)).translate(1.0, 0.0, 0.0);

        let pa = a.apply(&origin).unwrap();
        let pb = b.apply(&origin).unwrap();
        assert_cartesian_eq(&pa, [1.0, 0.0, 0.0]);
        assert_cartesian_eq(&pb, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_scale_round_trip_matrix() {
        let mut t = AffineTransform::new();
        t.scale(2.0, 2.0, 2.0).scale(0.5, 0.5, 0.5);
        assert!(t.matrix().abs_diff_eq(&Mat4::identity(), 1e-12));
    }

    #[test]
    fn test_scale_then_inverse_scale() {
        let mut t = AffineTransform::new();
        t.scale(2.0, 3.0, 4.0).scale(0.5, 1.0 / 3.0, 0.25);

        let p = Cartesian::from_values(1.0, -7.0, 0.125, LengthUnit::LightYear);
        assert_cartesian_eq(&t.apply(&p).unwrap(), [1.0, -7.0, 0.125]);
    }

    #[test]
    fn test_full_turns() {
        let mut t = AffineTransform::new();
        t.rotate_x(Angle::radians(TAU))
            .rotate_y(Angle::degrees(360.0))
            .rotate_z(Angle::radians(TAU));

        let p = Cartesian::from_values(0.3, -1.2, 2.5, LengthUnit::Meter);
        assert_cartesian_eq(&t.apply(&p).unwrap(), [0.3, -1.2, 2.5]);
    }

    #[test]
    fn test_cartesian_keeps_axis_units() {
        let mut t = AffineTransform::new();
        t.scale(2.0, 2.0, 2.0);

        let p = Cartesian::new(Length::kilometers(1.0), Length::meters(1.0), Length::parsecs(1.0));
        let out = t.apply(&p).unwrap();
        assert_eq!(
            out.axis_units(),
            [LengthUnit::Kilometer, LengthUnit::Meter, LengthUnit::Parsec]
        );
        assert_cartesian_eq(&out, [2.0, 2.0, 2.0]);
    }

    // ------------------------------------------------------------------
    // Spherical
    // ------------------------------------------------------------------

    #[test]
    fn test_translate_spherical() {
        let mut t = AffineTransform::new();
        t.translate(1.0, 0.0, 0.0);

        let p = Spherical::new(Angle::degrees(0.0), Angle::degrees(90.0), Length::meters(1.0));
        let out = t.apply(&p).unwrap();

        assert_eq!(out.azimuth().unit(), AngleUnit::Degree);
        assert_eq!(out.polar().unit(), AngleUnit::Degree);
        assert_eq!(out.distance().unit(), LengthUnit::Meter);
        assert_abs_diff_eq!(out.azimuth().value(), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(out.polar().value(), 90.0, epsilon = EPS);
        assert_abs_diff_eq!(out.distance().value(), 2.0, epsilon = EPS);
    }

    #[test]
    fn test_spherical_angle_ranges() {
        let p = Spherical::new(Angle::degrees(0.0), Angle::degrees(90.0), Length::meters(1.0));

        // (1, 0, 0) -> (0, -1, 0): azimuth wraps to the negative half.
        let mut t = AffineTransform::new();
        t.rotate_z(Angle::degrees(270.0));
        let out = t.apply(&p).unwrap();
        assert_abs_diff_eq!(out.azimuth().value(), -90.0, epsilon = EPS);

        // Flipping z maps polar 30 to 150.
        let q = Spherical::new(Angle::radians(0.0), Angle::radians(PI / 6.0), Length::meters(1.0));
        let mut t = AffineTransform::new();
        t.rotate_x(Angle::radians(PI));
        let out = t.apply(&q).unwrap();
        assert_abs_diff_eq!(out.polar().value(), 5.0 * PI / 6.0, epsilon = EPS);
        assert!(out.polar().value() >= 0.0 && out.polar().value() <= PI);
    }

    #[test]
    fn test_spherical_collapse_to_origin() {
        let mut t = AffineTransform::new();
        t.scale(0.0, 0.0, 0.0);

        let p = Spherical::new(Angle::degrees(45.0), Angle::degrees(45.0), Length::kilometers(3.0));
        let out = t.apply(&p).unwrap();
        assert_eq!(out.azimuth().value(), 0.0);
        assert_eq!(out.polar().value(), 0.0);
        assert_eq!(out.distance().value(), 0.0);
        assert_eq!(out.distance().unit(), LengthUnit::Kilometer);
    }

    // ------------------------------------------------------------------
    // Spherical equatorial
    // ------------------------------------------------------------------

    #[test]
    fn test_translate_equatorial() {
        let mut t = AffineTransform::new();
        t.translate(0.0, 0.0, 1.0);

        // (0, 1, 0) au -> (0, 1, 1) au
        let p = SphericalEquatorial::new(
            Angle::degrees(90.0),
            Angle::degrees(0.0),
            Length::astronomical_units(1.0),
        );
        let out = t.apply(&p).unwrap();

        assert_eq!(out.distance().unit(), LengthUnit::AstronomicalUnit);
        assert_abs_diff_eq!(out.lon().value(), 90.0, epsilon = EPS);
        assert_abs_diff_eq!(out.lat().value(), 45.0, epsilon = EPS);
        assert_abs_diff_eq!(out.distance().value(), 2f64.sqrt(), epsilon = EPS);
    }

    #[test]
    fn test_equatorial_latitude_range() {
        let mut t = AffineTransform::new();
        t.rotate_y(Angle::degrees(90.0));

        // (1, 0, 0) -> (0, 0, -1): the south pole.
        let p = SphericalEquatorial::new(Angle::degrees(0.0), Angle::degrees(0.0), Length::parsecs(1.0));
        let out = t.apply(&p).unwrap();
        assert_abs_diff_eq!(out.lat().value(), -90.0, epsilon = EPS);
        assert_abs_diff_eq!(out.distance().value(), 1.0, epsilon = EPS);
    }

    #[test]
    fn test_rotation_about_pole_shifts_longitude() {
        let mut t = AffineTransform::new();
        t.rotate_z(Angle::degrees(30.0));

        let p = SphericalEquatorial::new(Angle::degrees(10.0), Angle::degrees(20.0), Length::parsecs(5.0));
        let out = t.apply(&p).unwrap();
        assert_abs_diff_eq!(out.lon().value(), 40.0, epsilon = EPS);
        assert_abs_diff_eq!(out.lat().value(), 20.0, epsilon = EPS);
        assert_abs_diff_eq!(out.distance().value(), 5.0, epsilon = EPS);
    }

    // ------------------------------------------------------------------
    // NaN propagation
    // ------------------------------------------------------------------

    fn nan_translation() -> AffineTransform {
        let mut t = AffineTransform::new();
        t.translate(0.0, 0.0, f64::NAN);
        t
    }

    #[test]
    fn test_nan_propagates_cartesian() {
        let p = Cartesian::from_values(1.0, 2.0, 3.0, LengthUnit::Meter);
        let out = nan_translation().apply(&p).unwrap();
        assert!(out.z().value().is_nan());
        assert_eq!(out.axis_units(), [LengthUnit::Meter; 3]);
    }

    #[test]
    fn test_nan_propagates_spherical() {
        let p = Spherical::new(Angle::radians(0.0), Angle::radians(1.0), Length::meters(1.0));
        let out = nan_translation().apply(&p).unwrap();
        assert!(out.azimuth().value().is_nan());
        assert!(out.polar().value().is_nan());
        assert!(out.distance().value().is_nan());
    }

    #[test]
    fn test_nan_propagates_equatorial() {
        let p = SphericalEquatorial::new(
            Angle::degrees(10.0),
            Angle::degrees(20.0),
            Length::parsecs(1.0),
        );
        let out = nan_translation().apply(&p).unwrap();
        assert!(out.lon().value().is_nan());
        assert!(out.lat().value().is_nan());
        assert!(out.distance().value().is_nan());
    }

    // ------------------------------------------------------------------
    // Precision and sharing
    // ------------------------------------------------------------------

    #[test]
    fn test_single_precision() {
        let mut t = AffineTransform::<f32>::new();
        t.rotate_z(Angle::degrees(90.0));

        let p = Spherical::<f32>::new(Angle::degrees(0.0), Angle::degrees(90.0), Length::meters(1.0));
        let out = t.apply(&p).unwrap();
        assert_abs_diff_eq!(out.azimuth().value(), 90.0f32, epsilon = 1e-4);
        assert_abs_diff_eq!(out.distance().value(), 1.0f32, epsilon = 1e-6);
    }

    #[test]
    fn test_shared_across_threads() {
        let mut t = AffineTransform::new();
        t.translate(1.0, 2.0, 3.0).scale(2.0, 2.0, 2.0);
        let t = &t;

        let results: Vec<Cartesian> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    s.spawn(move || {
                        let p = Cartesian::from_values(i as f64, 0.0, 0.0, LengthUnit::Meter);
                        t.apply(&p).unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (i, out) in results.iter().enumerate() {
            assert_cartesian_eq(out, [2.0 * i as f64 + 1.0, 2.0, 3.0]);
        }
    }
}
