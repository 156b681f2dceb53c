//! Built-in reference systems
//!
//! The catalog wires a fixed set of systems around WGS84 as the hub:
//! Geographic, Web Mercator, World Mercator and every Albers system have
//! direct conversions to and from WGS84. All other pairs are reached through
//! discovery, if at all.

pub mod albers;
pub mod math;
pub mod mercator;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::{Conversion, ReferenceSystem, SystemDescriptor};

pub use self::albers::{albers_equal_area, AlbersParameters, ALBERS_SPHERE_RADIUS};

const WGS84_WKT: &str = "GEOGCS[\"GCS_WGS_1984\",DATUM[\"D_WGS_1984\",SPHEROID[\"WGS_1984\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],UNIT[\"Degree\",0.017453292519943295]]";

const WEB_MERCATOR_WKT: &str = "PROJCS[\"WGS 84 / Pseudo-Mercator\",GEOGCS[\"GCS_WGS_1984\",DATUM[\"D_WGS_1984\",SPHEROID[\"WGS_1984\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],UNIT[\"Degree\",0.017453292519943295]],PROJECTION[\"Mercator\"],PARAMETER[\"central_meridian\",0],PARAMETER[\"scale_factor\",1],PARAMETER[\"false_easting\",0],PARAMETER[\"false_northing\",0],UNIT[\"Meter\",1]]";

const WORLD_MERCATOR_WKT: &str = "PROJCS[\"WGS 84 / World Mercator\",GEOGCS[\"GCS_WGS_1984\",DATUM[\"D_WGS_1984\",SPHEROID[\"WGS_1984\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],UNIT[\"Degree\",0.017453292519943295]],PROJECTION[\"Mercator\"],PARAMETER[\"central_meridian\",0],PARAMETER[\"scale_factor\",1],PARAMETER[\"false_easting\",0],PARAMETER[\"false_northing\",0],UNIT[\"Meter\",1]]";

const MOSCOW_BESSEL_WKT: &str = "PROJCS[\"Moscow_bessel\",GEOGCS[\"GCS_Bessel_1841\",DATUM[\"D_Bessel_1841\",SPHEROID[\"Bessel_1841\",6377397.155,299.1528128]],PRIMEM[\"Greenwich\",0.0],UNIT[\"Degree\",0.0174532925199433]],PROJECTION[\"Transverse_Mercator\"],PARAMETER[\"False_Easting\",0.0],PARAMETER[\"False_Northing\",0.0],PARAMETER[\"Central_Meridian\",37.5],PARAMETER[\"Scale_Factor\",1.0],PARAMETER[\"Latitude_Of_Origin\",55.66666666666666],UNIT[\"Meter\",1.0]]";

lazy_static! {
    /// Process-wide catalog, built on first use
    pub static ref CATALOG: Catalog = Catalog::new();

    // "EPSG:3857", "epsg:3857" or a bare "3857"
    static ref CODE_SELECTOR: Regex = Regex::new(r"^(?:([A-Za-z]+):)?(\d+)$")
        .expect("code selector pattern is valid");
}

/// Owned bundle of the built-in reference systems
///
/// Each call to [`Catalog::new`] builds independent instances. Instances from
/// different bundles compare equal through their ids and WKT, but their
/// conversion tables are separate.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Euclidean coordinates with no conversions at all
    pub plain: ReferenceSystem,
    /// Geographic coordinates in latitude, longitude order
    pub geo: ReferenceSystem,
    /// WGS84 longitude, latitude in degrees
    pub wgs84: ReferenceSystem,
    /// Spherical Mercator (EPSG:3857)
    pub web_mercator: ReferenceSystem,
    /// Ellipsoidal Mercator (EPSG:3395)
    pub elliptical_mercator: ReferenceSystem,
    /// Local Transverse Mercator system on the Bessel 1841 ellipsoid
    pub moscow_bessel: ReferenceSystem,
    /// Albers instance with origin (0, 180) and standard parallels 60 and 50
    pub cylindrical_equal_area: ReferenceSystem,
}

impl Catalog {
    /// Build the catalog and wire its direct conversions
    pub fn new() -> Self {
        let plain = ReferenceSystem::new(SystemDescriptor::with_details(
            "Plain crs without any projection functions",
        ));

        let wgs84 = ReferenceSystem::new(SystemDescriptor::with_id(84, "OCG").wkt(WGS84_WKT));
        let geo = ReferenceSystem::new(SystemDescriptor::with_id(4326, "EPSG"));

        geo.register_conversion(&wgs84, Conversion::new(|point| point.swapped()));
        wgs84.register_conversion(&geo, Conversion::new(|point| point.swapped()));

        let web_mercator = ReferenceSystem::new(SystemDescriptor::with_id(3857, "EPSG").wkt(WEB_MERCATOR_WKT));
        web_mercator.register_conversion(&wgs84, Conversion::new(mercator::web_mercator_to_wgs84));
        wgs84.register_conversion(&web_mercator, Conversion::new(mercator::wgs84_to_web_mercator));

        let elliptical_mercator = ReferenceSystem::new(SystemDescriptor::with_id(3395, "EPSG").wkt(WORLD_MERCATOR_WKT));
        elliptical_mercator.register_conversion(&wgs84, Conversion::new(mercator::elliptical_mercator_to_wgs84));
        wgs84.register_conversion(&elliptical_mercator, Conversion::new(mercator::wgs84_to_elliptical_mercator));

        let moscow_bessel = ReferenceSystem::new(SystemDescriptor::with_wkt(MOSCOW_BESSEL_WKT));

        let cylindrical_equal_area = albers_equal_area(&wgs84, AlbersParameters::new(0.0, 180.0, 60.0, 50.0));

        debug!("Built reference system catalog");

        Catalog {
            plain,
            geo,
            wgs84,
            web_mercator,
            elliptical_mercator,
            moscow_bessel,
            cylindrical_equal_area,
        }
    }

    /// Create an Albers Equal-Area system wired to this catalog's WGS84
    ///
    /// # Arguments
    /// * `lat0` - Latitude of origin in degrees
    /// * `lon0` - Longitude of origin in degrees
    /// * `standard_parallel_1` - First standard parallel in degrees
    /// * `standard_parallel_2` - Second standard parallel in degrees
    pub fn albers_equal_area(
        &self,
        lat0: f64,
        lon0: f64,
        standard_parallel_1: f64,
        standard_parallel_2: f64,
    ) -> ReferenceSystem {
        albers_equal_area(
            &self.wgs84,
            AlbersParameters::new(lat0, lon0, standard_parallel_1, standard_parallel_2),
        )
    }

    /// All built-in systems with their catalog names, in catalog order
    pub fn systems(&self) -> Vec<(&'static str, &ReferenceSystem)> {
        vec![
            ("plain", &self.plain),
            ("geo", &self.geo),
            ("wgs84", &self.wgs84),
            ("web-mercator", &self.web_mercator),
            ("elliptical-mercator", &self.elliptical_mercator),
            ("moscow-bessel", &self.moscow_bessel),
            ("cylindrical-equal-area", &self.cylindrical_equal_area),
        ]
    }

    /// Resolve a selector to a built-in system
    ///
    /// Accepts an authority code ("EPSG:3857"), a bare id ("3857") or a
    /// catalog name ("web-mercator", case-insensitive, `_` or space may
    /// replace `-`).
    pub fn find(&self, selector: &str) -> CrsResult<ReferenceSystem> {
        let trimmed = selector.trim();

        if let Some(captures) = CODE_SELECTOR.captures(trimmed) {
            let authority = captures.get(1).map(|m| m.as_str());
            let id = captures[2]
                .parse::<u32>()
                .map_err(|_| CrsError::UnknownSystem(selector.to_string()))?;

            return self
                .systems()
                .into_iter()
                .map(|(_, system)| system)
                .find(|system| {
                    system.id() == Some(id)
                        && match (authority, system.authority()) {
                            (Some(wanted), Some(actual)) => wanted.eq_ignore_ascii_case(actual),
                            _ => true,
                        }
                })
                .cloned()
                .ok_or_else(|| CrsError::UnknownSystem(selector.to_string()));
        }

        let name = normalize_name(trimmed);
        self.systems()
            .into_iter()
            .find(|(system_name, _)| *system_name == name)
            .map(|(_, system)| system.clone())
            .ok_or_else(|| CrsError::UnknownSystem(selector.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}

/// Lower-case a system name and unify separators to `-`
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(|c: char| c == '_' || c == ' ', "-")
}
