use std::f64::consts::PI;

pub(crate) mod dms {
    /// Degrees per half turn
    pub const HD: f64 = 180.;
    /// Degrees per turn
    pub const TD: f64 = 2. * HD;
}

pub(crate) trait GeoMath {
    fn mod_angle(&self) -> Self;
    fn ang_normalize(&self) -> Self;
    fn in_bounds(&self, lower: Self, upper: Self, upper_strict: bool) -> bool;
}

impl GeoMath for f64 {
    /// Angle in radians wrapped into `[-pi, pi)`
    fn mod_angle(&self) -> f64 {
        (*self + PI).rem_euclid(2. * PI) - PI
    }

    /// Angle in degrees wrapped into `[-180, 180)`
    fn ang_normalize(&self) -> f64 {
        (self.rem_euclid(dms::TD) + dms::TD + dms::HD).rem_euclid(dms::TD) - dms::HD
    }

    // NaN never lies in bounds
    fn in_bounds(&self, lower: f64, upper: f64, upper_strict: bool) -> bool {
        if upper_strict {
            lower <= *self && *self < upper
        } else {
            lower <= *self && *self <= upper
        }
    }
}

/// Smallest and largest value of a slice, `None` if empty or if any value is NaN.
pub(crate) fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;

    values
        .iter()
        .try_fold((first, first), |(lo, hi), &val| {
            (!val.is_nan()).then(|| (lo.min(val), hi.max(val)))
        })
}

/// Whether the slice holds both negative and non-negative values.
pub(crate) fn mixed_signs(values: &[f64]) -> bool {
    min_max(values).is_some_and(|(lo, hi)| lo < 0. && hi >= 0.)
}
