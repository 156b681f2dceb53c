//! Albers Equal-Area Conic projection family
//!
//! Each parameter set produces a new reference system wired to WGS84 in
//! both directions on a sphere of radius [`ALBERS_SPHERE_RADIUS`].

use crate::coordinate::Point;
use crate::crs::{Conversion, ReferenceSystem, SystemDescriptor};
use super::math::{deg_to_rad, rad_to_deg};

/// Sphere radius in meters used by the Albers formulas
pub const ALBERS_SPHERE_RADIUS: f64 = 6372795.0;

/// Defining parameters of an Albers projection, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlbersParameters {
    /// Latitude of origin
    pub lat0: f64,
    /// Longitude of origin
    pub lon0: f64,
    /// First standard parallel
    pub standard_parallel_1: f64,
    /// Second standard parallel
    pub standard_parallel_2: f64,
}

impl AlbersParameters {
    /// Create a new parameter set
    pub fn new(lat0: f64, lon0: f64, standard_parallel_1: f64, standard_parallel_2: f64) -> Self {
        AlbersParameters {
            lat0,
            lon0,
            standard_parallel_1,
            standard_parallel_2,
        }
    }

    /// Cone constant `n`; zero when the standard parallels cancel out
    pub fn cone_constant(&self) -> f64 {
        (deg_to_rad(self.standard_parallel_1).sin() + deg_to_rad(self.standard_parallel_2).sin()) / 2.0
    }

    /// Description used as the system's details
    pub fn details(&self) -> String {
        format!(
            "Albers Equal-Area Conic Projection: {},{},{},{}",
            self.lat0, self.lon0, self.standard_parallel_1, self.standard_parallel_2
        )
    }
}

/// Values derived once from the parameters
#[derive(Debug, Clone, Copy)]
struct AlbersConstants {
    lon0: f64,
    n: f64,
    c: f64,
    rho0: f64,
}

impl AlbersConstants {
    fn new(params: &AlbersParameters) -> Self {
        let lat0 = deg_to_rad(params.lat0);
        let st1 = deg_to_rad(params.standard_parallel_1);
        let n = params.cone_constant();
        let c = st1.cos().powi(2) + 2.0 * n * st1.sin();
        let rho0 = (c - 2.0 * n * lat0.sin()).sqrt() / n;

        AlbersConstants {
            lon0: deg_to_rad(params.lon0),
            n,
            c,
            rho0,
        }
    }

    /// Albers meters to WGS84 degrees
    fn unproject(&self, point: Point) -> Point {
        let x_rad = point.x / ALBERS_SPHERE_RADIUS;
        let y_rad = point.y / ALBERS_SPHERE_RADIUS;

        let theta = f64::atan(x_rad / (self.rho0 - y_rad));
        let rho = x_rad / theta.sin();
        let r_lat = f64::asin((self.c - rho * rho * self.n * self.n) / 2.0 / self.n);
        let r_lon = self.lon0 + theta / self.n;

        Point::new(rad_to_deg(r_lon), rad_to_deg(r_lat))
    }

    /// WGS84 degrees to Albers meters
    ///
    /// Latitude and longitude enter `theta` and `rho` in swapped roles
    /// compared to `unproject`, so the two are not exact inverses.
    // TODO: confirm this direction against an independent geodetic reference
    fn project(&self, point: Point) -> Point {
        let r_lon = deg_to_rad(point.x);
        let r_lat = deg_to_rad(point.y);

        let theta = self.n * (r_lat - self.lon0);
        let rho = (self.c - 2.0 * self.n * r_lon.sin()).sqrt() / self.n;
        let x = rho * theta.sin() * ALBERS_SPHERE_RADIUS;
        let y = self.rho0 - rho * theta.cos() * ALBERS_SPHERE_RADIUS;

        Point::new(x, y)
    }
}

/// Create an Albers Equal-Area system and wire it to `wgs84` both ways
///
/// # Arguments
/// * `wgs84` - The WGS84 system the new system converts through
/// * `params` - Projection parameters in degrees
///
/// # Returns
/// A new reference system, equal only to itself
pub fn albers_equal_area(wgs84: &ReferenceSystem, params: AlbersParameters) -> ReferenceSystem {
    let system = ReferenceSystem::new(SystemDescriptor::with_details(&params.details()));
    let constants = AlbersConstants::new(&params);

    system.register_conversion(wgs84, Conversion::new(move |point| constants.unproject(point)));
    wgs84.register_conversion(&system, Conversion::new(move |point| constants.project(point)));

    system
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wgs84() -> ReferenceSystem {
        ReferenceSystem::new(SystemDescriptor::with_id(84, "OCG"))
    }

    /// Standard spherical Albers projection of a geographic point
    fn textbook_projection(params: &AlbersParameters, lon: f64, lat: f64) -> Point {
        let k = AlbersConstants::new(params);
        let theta = k.n * (deg_to_rad(lon) - k.lon0);
        let rho = (k.c - 2.0 * k.n * deg_to_rad(lat).sin()).sqrt() / k.n;

        Point::new(
            rho * theta.sin() * ALBERS_SPHERE_RADIUS,
            (k.rho0 - rho * theta.cos()) * ALBERS_SPHERE_RADIUS,
        )
    }

    #[test]
    fn test_details_label() {
        let params = AlbersParameters::new(0.0, 180.0, 60.0, 50.0);
        assert_eq!(params.details(), "Albers Equal-Area Conic Projection: 0,180,60,50");
    }

    #[test]
    fn test_registers_both_directions() {
        let wgs84 = wgs84();
        let albers = albers_equal_area(&wgs84, AlbersParameters::new(0.0, 180.0, 60.0, 50.0));

        assert!(albers.has_cached_conversion(&wgs84));
        assert!(wgs84.has_cached_conversion(&albers));
        assert!(albers.can_convert_to(&wgs84));
        assert!(wgs84.can_convert_to(&albers));
    }

    #[test]
    fn test_to_wgs84_inverts_textbook_projection() {
        let params = AlbersParameters::new(0.0, 180.0, 60.0, 50.0);
        let wgs84 = wgs84();
        let albers = albers_equal_area(&wgs84, params);
        let to_wgs84 = albers.conversion_to(&wgs84);
        assert!(to_wgs84.is_some());
        let to_wgs84 = to_wgs84.unwrap();

        // Points off the central meridian, where the formula is defined
        for &(lon, lat) in &[(170.0, 55.0), (185.0, 40.0), (160.0, 10.0)] {
            let projected = textbook_projection(&params, lon, lat);
            let geographic = to_wgs84.apply(projected);

            assert!((geographic.x - lon).abs() < 1e-9, "lon {} became {}", lon, geographic.x);
            assert!((geographic.y - lat).abs() < 1e-9, "lat {} became {}", lat, geographic.y);
        }
    }

    #[test]
    fn test_from_wgs84_keeps_published_formula() {
        let params = AlbersParameters::new(0.0, 180.0, 60.0, 50.0);
        let k = AlbersConstants::new(&params);
        let (lon, lat) = (30.0_f64, 45.0_f64);

        let theta = k.n * (deg_to_rad(lat) - k.lon0);
        let rho = (k.c - 2.0 * k.n * deg_to_rad(lon).sin()).sqrt() / k.n;
        let expected = Point::new(
            rho * theta.sin() * ALBERS_SPHERE_RADIUS,
            k.rho0 - rho * theta.cos() * ALBERS_SPHERE_RADIUS,
        );

        let actual = k.project(Point::new(lon, lat));
        assert!(actual.approx_eq(&expected, 1e-6), "got {:?}, expected {:?}", actual, expected);
    }

    #[test]
    fn test_systems_with_same_parameters_are_distinct() {
        let wgs84 = wgs84();
        let params = AlbersParameters::new(10.0, 20.0, 30.0, 40.0);
        let first = albers_equal_area(&wgs84, params);
        let second = albers_equal_area(&wgs84, params);

        assert!(!first.equals(&second));
        assert_eq!(first.display_label(), second.display_label());
    }
}
