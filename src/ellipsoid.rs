// Copyright (c) 2025-2026 The egm96-geoid developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The ellipsoid module contains the WGS 84 constants and the conversion from
//! geodetic coordinates to the geocentric quantities that drive the harmonic
//! synthesis: geocentric latitude, geocentric radius and normal gravity.
//!
//! The conversion goes through the Cartesian position of the point on the
//! ellipsoid surface; normal gravity comes from Somigliana's closed formula.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

pub mod wgs84;

use crate::{GeoidError, Metres};
use angle_sc::{Angle, Degrees};
use unit_sphere::great_circle;

/// The geocentric quantities of a geodetic position, on the surface of the
/// WGS 84 ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeocentricMetrics {
    /// The geocentric latitude.
    latitude: Angle,
    /// The geocentric radius.
    radius: Metres,
    /// The normal gravity in metres per second squared.
    gravity: f64,
}

impl GeocentricMetrics {
    /// The geocentric latitude, measured from the Earth's centre.
    #[must_use]
    pub const fn latitude(&self) -> Angle {
        self.latitude
    }

    /// The geocentric radius of the position.
    #[must_use]
    pub const fn radius(&self) -> Metres {
        self.radius
    }

    /// The normal gravity at the position in metres per second squared.
    #[must_use]
    pub const fn gravity(&self) -> f64 {
        self.gravity
    }
}

/// Convert a geodetic latitude and longitude to geocentric metrics.
///
/// The position is taken on the surface of the WGS 84 ellipsoid: the prime
/// vertical radius of curvature gives the Cartesian position, from which the
/// geocentric radius and latitude follow. Normal gravity is evaluated with
/// Somigliana's formula and the WGS84(g873) constants.
///
/// * `latitude` - the geodetic latitude, within ±90°.
/// * `longitude` - the geodetic longitude; the geocentric longitude equals it.
///
/// # Errors
///
/// `GeoidError::Pole` if the cosine of `latitude` vanishes, i.e. at the
/// poles, where the geocentric latitude is undefined.
/// # Examples
/// ```
/// use egm96_geoid::ellipsoid::{calculate_geocentric_metrics, wgs84};
/// use egm96_geoid::{Angle, Degrees};
///
/// let metrics =
///     calculate_geocentric_metrics(Angle::from(Degrees(45.0)), Angle::default()).unwrap();
///
/// // the geocentric latitude lies equatorward of the geodetic latitude
/// assert!(Degrees::from(metrics.latitude()).0 < 45.0);
/// assert!(metrics.radius().0 < wgs84::A.0);
/// ```
pub fn calculate_geocentric_metrics(
    latitude: Angle,
    longitude: Angle,
) -> Result<GeocentricMetrics, GeoidError> {
    let sin_lat = latitude.sin().0;
    let cos_lat = latitude.cos().0;
    if cos_lat < great_circle::MIN_VALUE {
        return Err(GeoidError::Pole(Degrees::from(latitude)));
    }

    let sq_sin_lat = sin_lat * sin_lat;
    let w = libm::sqrt(1.0 - wgs84::SQ_ECCENTRICITY * sq_sin_lat);

    // Cartesian position on the ellipsoid surface
    let n = wgs84::A.0 / w;
    let p = n * cos_lat;
    let x = p * longitude.cos().0;
    let y = p * longitude.sin().0;
    let z = n * (1.0 - wgs84::SQ_ECCENTRICITY) * sin_lat;

    let sq_xy = x * x + y * y;
    let radius = Metres(libm::sqrt(sq_xy + z * z));
    let geocentric_latitude = Angle::from_y_x(z, libm::sqrt(sq_xy));
    let gravity = wgs84::EQUATORIAL_GRAVITY * (1.0 + wgs84::K * sq_sin_lat) / w;

    Ok(GeocentricMetrics {
        latitude: geocentric_latitude,
        radius,
        gravity,
    })
}
