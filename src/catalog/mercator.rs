//! Mercator projection formulas
//!
//! Spherical (Web Mercator) and ellipsoidal (World Mercator) variants, both
//! converting to and from WGS84 longitude/latitude in degrees.

use std::f64::consts::PI;

use crate::coordinate::Point;
use super::math::{deg_to_rad, rad_to_deg};

/// WGS84 semi-major axis in meters, also the Web Mercator sphere radius
pub const SEMI_MAJOR_AXIS: f64 = 6378137.0;

/// WGS84 semi-minor axis in meters
pub const SEMI_MINOR_AXIS: f64 = 6356752.3142451793;

/// Step size below which the latitude iteration stops
pub const CONVERGENCE_TOLERANCE: f64 = 1e-9;

/// Upper bound on latitude iterations
pub const MAX_ITERATIONS: usize = 15;

/// First eccentricity of the WGS84 ellipsoid
pub fn eccentricity() -> f64 {
    let a = SEMI_MAJOR_AXIS;
    let b = SEMI_MINOR_AXIS;
    (1.0 - b * b / a / a).sqrt()
}

/// Convert Web Mercator meters to WGS84 degrees
pub fn web_mercator_to_wgs84(point: Point) -> Point {
    let r_lat = PI / 2.0 - 2.0 * f64::atan(f64::exp(-point.y / SEMI_MAJOR_AXIS));
    let r_lon = point.x / SEMI_MAJOR_AXIS;

    Point::new(rad_to_deg(r_lon), rad_to_deg(r_lat))
}

/// Convert WGS84 degrees to Web Mercator meters
pub fn wgs84_to_web_mercator(point: Point) -> Point {
    let r_lon = deg_to_rad(point.x);
    let r_lat = deg_to_rad(point.y);

    let x = SEMI_MAJOR_AXIS * r_lon;
    let y = SEMI_MAJOR_AXIS * f64::ln(f64::tan(PI / 4.0 + r_lat / 2.0));

    Point::new(x, y)
}

/// Outcome of the iterative latitude solution for World Mercator
#[derive(Debug, Clone, Copy)]
pub struct LatitudeSolution {
    /// Latitude in radians
    pub latitude: f64,
    /// Number of iterations performed
    pub iterations: usize,
    /// Size of the last correction applied
    pub last_step: f64,
}

/// Recover the latitude for a World Mercator northing by fixed-point iteration
pub fn solve_latitude(northing: f64) -> LatitudeSolution {
    let e = eccentricity();
    let half_e = e / 2.0;
    let ts = f64::exp(-northing / SEMI_MAJOR_AXIS);

    let mut phi = PI / 2.0 - 2.0 * f64::atan(ts);
    let mut dphi = 1.0_f64;
    let mut iterations = 0;

    while dphi.abs() > CONVERGENCE_TOLERANCE && iterations < MAX_ITERATIONS {
        iterations += 1;
        let con = e * phi.sin();
        dphi = PI / 2.0 - 2.0 * f64::atan(ts * ((1.0 - con) / (1.0 + con)).powf(half_e)) - phi;
        phi += dphi;
    }

    LatitudeSolution {
        latitude: phi,
        iterations,
        last_step: dphi,
    }
}

/// Convert World Mercator meters to WGS84 degrees
pub fn elliptical_mercator_to_wgs84(point: Point) -> Point {
    let r_lon = point.x / SEMI_MAJOR_AXIS;
    let r_lat = solve_latitude(point.y).latitude;

    Point::new(rad_to_deg(r_lon), rad_to_deg(r_lat))
}

/// Convert WGS84 degrees to World Mercator meters
pub fn wgs84_to_elliptical_mercator(point: Point) -> Point {
    let e = eccentricity();
    let r_lon = deg_to_rad(point.x);
    let r_lat = deg_to_rad(point.y);
    let e_sin = e * r_lat.sin();

    let x = SEMI_MAJOR_AXIS * r_lon;
    let y = SEMI_MAJOR_AXIS
        * f64::ln(f64::tan(PI / 4.0 + r_lat / 2.0) * ((1.0 - e_sin) / (1.0 + e_sin)).powf(e / 2.0));

    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_mercator_round_trip() {
        let moscow = Point::new(37.617673, 55.755831);
        let back = web_mercator_to_wgs84(wgs84_to_web_mercator(moscow));

        assert!(back.approx_eq(&moscow, 1e-9), "got {:?}", back);
    }

    #[test]
    fn test_web_mercator_known_values() {
        let projected = wgs84_to_web_mercator(Point::new(180.0, 0.0));
        assert!((projected.x - PI * SEMI_MAJOR_AXIS).abs() < 1e-6);
        assert!(projected.y.abs() < 1e-6);
    }

    #[test]
    fn test_elliptical_mercator_origin() {
        let origin = elliptical_mercator_to_wgs84(Point::new(0.0, 0.0));
        assert!(origin.approx_eq(&Point::new(0.0, 0.0), 1e-12), "got {:?}", origin);
    }

    #[test]
    fn test_latitude_iteration_converges() {
        for lat in (-85..=85).step_by(5) {
            let lat = lat as f64;
            let northing = wgs84_to_elliptical_mercator(Point::new(0.0, lat)).y;
            let solution = solve_latitude(northing);

            assert!(solution.iterations <= MAX_ITERATIONS);
            assert!(solution.last_step.abs() <= CONVERGENCE_TOLERANCE,
                    "latitude {} did not converge: {:?}", lat, solution);
            assert!((rad_to_deg(solution.latitude) - lat).abs() < 1e-7,
                    "latitude {} solved as {}", lat, rad_to_deg(solution.latitude));
        }
    }

    #[test]
    fn test_ellipsoid_differs_from_sphere() {
        let point = Point::new(30.0, 60.0);
        let spherical = wgs84_to_web_mercator(point);
        let ellipsoidal = wgs84_to_elliptical_mercator(point);

        assert!((spherical.x - ellipsoidal.x).abs() < 1e-6);
        assert!(ellipsoidal.y < spherical.y);
    }
}
