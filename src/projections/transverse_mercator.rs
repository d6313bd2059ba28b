use crate::{
    constants::{E, E_P2, FOOTPOINT, K0, M1, M2, M3, M4, R},
    utility::GeoMath,
};

// ================================
// Transverse Mercator, Snyder/Krüger series truncated at the sixth power of
// the longitude offset. Good to well below a metre inside a zone.
// ================================

/// Transverse Mercator about a single central meridian with the UTM scale
/// factor. Coordinates are relative to the natural origin, i.e. without false
/// easting/northing.
pub(crate) struct TransverseMercator {
    /// Central meridian in radians
    lon0: f64,
}

impl TransverseMercator {
    /// Projection about the central meridian `lon0`, given in degrees.
    pub fn utm(lon0: f64) -> TransverseMercator {
        Self {
            lon0: lon0.to_radians(),
        }
    }

    /// Length of the meridian arc from the equator to `lat` (radians).
    fn meridian_arc(lat: f64) -> f64 {
        R * (M1 * lat
            - M2 * (2. * lat).sin()
            + M3 * (4. * lat).sin()
            - M4 * (6. * lat).sin())
    }

    /// Projects `lat`/`lon` in degrees, returning `(x, y)` in metres.
    #[allow(clippy::similar_names)]
    pub fn from_latlon(&self, lat: f64, lon: f64) -> (f64, f64) {
        let lat_rad = lat.to_radians();
        let lat_sin = lat_rad.sin();
        let lat_cos = lat_rad.cos();

        let lat_tan = lat_sin / lat_cos;
        let lat_tan2 = lat_tan * lat_tan;
        let lat_tan4 = lat_tan2 * lat_tan2;

        let n = R / (1. - E * lat_sin.powi(2)).sqrt();
        let c = E_P2 * lat_cos.powi(2);

        let a = lat_cos * (lon.to_radians() - self.lon0).mod_angle();
        let a2 = a * a;
        let a3 = a2 * a;
        let a4 = a3 * a;
        let a5 = a4 * a;
        let a6 = a5 * a;

        let m = Self::meridian_arc(lat_rad);

        let x = K0 * n * (a
            + a3 / 6. * (1. - lat_tan2 + c)
            + a5 / 120. * (5. - 18. * lat_tan2 + lat_tan4 + 72. * c - 58. * E_P2));

        let y = K0 * (m + n * lat_tan * (a2 / 2.
            + a4 / 24. * (5. - lat_tan2 + 9. * c + 4. * c.powi(2))
            + a6 / 720. * (61. - 58. * lat_tan2 + lat_tan4 + 600. * c - 330. * E_P2)));

        (x, y)
    }

    /// Inverts a projected `(x, y)` in metres, returning latitude/longitude in
    /// degrees. The longitude is wrapped into `[-180, 180)`.
    #[allow(clippy::similar_names)]
    pub fn to_latlon(&self, x: f64, y: f64) -> (f64, f64) {
        let m = y / K0;
        let mu = m / (R * M1);

        let fp = &*FOOTPOINT;
        let p_rad = mu
            + fp.p2 * (2. * mu).sin()
            + fp.p3 * (4. * mu).sin()
            + fp.p4 * (6. * mu).sin()
            + fp.p5 * (8. * mu).sin();

        let p_sin = p_rad.sin();
        let p_sin2 = p_sin * p_sin;
        let p_cos = p_rad.cos();

        let p_tan = p_sin / p_cos;
        let p_tan2 = p_tan * p_tan;
        let p_tan4 = p_tan2 * p_tan2;

        let ep_sin = 1. - E * p_sin2;
        let ep_sin_sqrt = ep_sin.sqrt();

        let n = R / ep_sin_sqrt;
        let r = (1. - E) / ep_sin;

        let c = E_P2 * p_cos.powi(2);
        let c2 = c * c;

        let d = x / (n * K0);
        let d2 = d * d;
        let d3 = d2 * d;
        let d4 = d3 * d;
        let d5 = d4 * d;
        let d6 = d5 * d;

        let lat = p_rad - (p_tan / r) * (d2 / 2.
            - d4 / 24. * (5. + 3. * p_tan2 + 10. * c - 4. * c2 - 9. * E_P2)
            + d6 / 720. * (61. + 90. * p_tan2 + 298. * c + 45. * p_tan4 - 252. * E_P2 - 3. * c2));

        let lon = (d
            - d3 / 6. * (1. + 2. * p_tan2 + c)
            + d5 / 120. * (5. - 2. * c + 28. * p_tan2 - 3. * c2 + 8. * E_P2 + 24. * p_tan4))
            / p_cos;

        let lon = (lon + self.lon0).mod_angle();

        (lat.to_degrees(), lon.to_degrees())
    }
}
