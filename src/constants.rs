use lazy_static::lazy_static;

// UTM central scale factor
pub(crate) const K0: f64 = 0.9996;

// Eccentricity squared of the WGS84 ellipsoid
pub(crate) const E: f64 = 0.006_694_38;
pub(crate) const E2: f64 = E * E;
pub(crate) const E3: f64 = E2 * E;
// Second eccentricity squared
pub(crate) const E_P2: f64 = E / (1. - E);

// Semi-major axis a
pub(crate) const R: f64 = 6_378_137.;

pub(crate) const FALSE_EASTING: f64 = 500_000.;
pub(crate) const FALSE_NORTHING: f64 = 10_000_000.;

// Meridian arc coefficients
pub(crate) const M1: f64 = 1. - E / 4. - 3. * E2 / 64. - 5. * E3 / 256.;
pub(crate) const M2: f64 = 3. * E / 8. + 3. * E2 / 32. + 45. * E3 / 1024.;
pub(crate) const M3: f64 = 15. * E2 / 256. + 45. * E3 / 1024.;
pub(crate) const M4: f64 = 35. * E3 / 3072.;

/// Coefficients of the footpoint latitude series, in powers of
/// `e1 = (1 - sqrt(1 - e²)) / (1 + sqrt(1 - e²))`.
pub(crate) struct Footpoint {
    pub p2: f64,
    pub p3: f64,
    pub p4: f64,
    pub p5: f64,
}

lazy_static! {
    pub(crate) static ref FOOTPOINT: Footpoint = {
        let sqrt_e = (1. - E).sqrt();
        let e1 = (1. - sqrt_e) / (1. + sqrt_e);
        let e2 = e1 * e1;
        let e3 = e2 * e1;
        let e4 = e3 * e1;
        let e5 = e4 * e1;

        Footpoint {
            p2: 3. / 2. * e1 - 27. / 32. * e3 + 269. / 512. * e5,
            p3: 21. / 16. * e2 - 55. / 32. * e4,
            p4: 151. / 96. * e3 - 417. / 128. * e5,
            p5: 1097. / 512. * e4,
        }
    };
}
