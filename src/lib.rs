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

//! egm96-geoid
//!
//! [![crates.io](https://img.shields.io/crates/v/egm96-geoid.svg)](https://crates.io/crates/egm96-geoid)
//! [![docs.io](https://docs.rs/egm96-geoid/badge.svg)](https://docs.rs/egm96-geoid/)
//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! A library for calculating the geoid undulation of the
//! [EGM96](https://cddis.nasa.gov/926/egm96/egm96.html) potential model on the
//! [WGS 84](https://en.wikipedia.org/wiki/World_Geodetic_System) ellipsoid.
//!
//! The geoid is the equipotential surface of the Earth's gravity field that
//! best fits global mean sea level. Satellite navigation measures heights
//! above the WGS 84 reference ellipsoid, while charts and instruments report
//! heights above mean sea level; the geoid undulation N is the separation
//! between the two surfaces at a position, so an ellipsoidal height h
//! converts to an orthometric height H as:
//!
//! H = h - N
//!
//! The undulation ranges from roughly -107 m south of India to +85 m near
//! New Guinea.
//!
//! ## Design
//!
//! The library implements the spherical harmonic synthesis of the NGA
//! program distributed with the EGM96 model, complete to degree and order
//! 360, see Lemoine et al. (1998),
//! [NASA/TP-1998-206861](https://ntrs.nasa.gov/citations/19980218814):
//!
//! - the [ellipsoid](crate::ellipsoid) module converts a geodetic position
//!   into the geocentric latitude, geocentric radius and normal gravity of
//!   the WGS84(g873) system of constants;
//! - the [legendre](crate::legendre) module evaluates fully normalised
//!   associated Legendre functions with stable column-wise recurrences;
//! - the [synthesis](crate::synthesis) module generates the longitude
//!   trigonometric series and accumulates the truncated harmonic sum;
//! - the [potential](crate::potential) module defines the packed layout of
//!   the coefficient tables and the
//!   [CoefficientTable](crate::potential::CoefficientTable) trait through
//!   which a table is supplied.
//!
//! A [Geoid] owns a coefficient table and the square root tables that drive
//! the Legendre recurrences. The square root tables are built once, when the
//! model is constructed; every query then runs on immutable state with its
//! own working buffers, so a `Geoid` can be shared freely between threads.
//!
//! The published coefficient files are an external data resource and are not
//! embedded in the library: a
//! [CoefficientTable](crate::potential::CoefficientTable) implementation
//! supplies them, already prepared the way the NGA `F477` synthesis program
//! prepares them. The integration tests show the preparation from the raw
//! `EGM96` and `CORCOEF` files.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [icao-units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define
//!   `LatLong` and validate latitudes;
//! - [libm](https://crates.io/crates/libm) - to calculate square roots;
//! - [thiserror](https://crates.io/crates/thiserror) - to define the error
//!   type.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html),
//! although it requires an allocator for the per query coefficient buffer.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod ellipsoid;
pub mod legendre;
pub mod potential;
pub mod synthesis;

pub use angle_sc::{Angle, Degrees, Radians};
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use crate::legendre::RootTable;
use crate::potential::{coefficient_index, CoefficientTable, COEFFICIENT_COUNT, MAX_DEGREE};
use crate::synthesis::TrigSeries;

/// The errors that can occur when calculating a geoid undulation.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum GeoidError {
    /// The latitude is not within the valid range: -90.0..=90.0 degrees.
    #[error("latitude is not a valid latitude, value in degrees: {0:?}")]
    InvalidLatitude(Degrees),
    /// The position is at the North or South pole, where the geocentric
    /// latitude is undefined.
    #[error("position is at a pole, latitude in degrees: {0:?}")]
    Pole(Degrees),
}

/// A model of the EGM96 geoid on the WGS 84 ellipsoid.
///
/// A `Geoid` owns a potential coefficient table and the square root tables
/// that drive the Legendre recurrences. The square root tables are built
/// once, at construction; afterwards the model is immutable and each query
/// allocates its own working buffers, so a `Geoid` may be queried
/// concurrently.
#[derive(Clone, Debug, PartialEq)]
pub struct Geoid<T: CoefficientTable> {
    /// The coefficients of the potential model.
    coefficients: T,
    /// The square root tables for the Legendre recurrences.
    scales: RootTable,
}

impl<T: CoefficientTable> Geoid<T> {
    /// Construct a `Geoid` from a potential coefficient model.
    ///
    /// Builds the square root tables; the model performs no further set up
    /// and is never mutated by a query.
    ///
    /// * `coefficients` - the prepared coefficient table, see
    ///   [CoefficientTable](crate::potential::CoefficientTable).
    #[must_use]
    pub fn new(coefficients: T) -> Self {
        Self {
            coefficients,
            scales: RootTable::new(),
        }
    }

    /// The potential coefficient model.
    #[must_use]
    pub const fn coefficients(&self) -> &T {
        &self.coefficients
    }

    /// Calculate the geoid undulation at a geodetic latitude and longitude.
    ///
    /// The undulation is the height of the EGM96 geoid above the WGS 84
    /// ellipsoid at the position: positive where the geoid lies above the
    /// ellipsoid, negative where it lies below.
    ///
    /// The longitude is periodic: it may use the -180.0..=180.0 convention,
    /// the 0.0..=360.0 convention of the NGA tables, or lie any number of
    /// turns beyond either.
    ///
    /// * `latitude` - the geodetic latitude in degrees, -90.0..=90.0.
    /// * `longitude` - the geodetic longitude in degrees.
    ///
    /// # Errors
    ///
    /// * `GeoidError::InvalidLatitude` if `latitude` is outside
    ///   -90.0..=90.0;
    /// * `GeoidError::Pole` if `latitude` is at the North or South pole,
    ///   where the geocentric latitude is undefined.
    /// # Examples
    /// ```
    /// use egm96_geoid::potential::{Coefficients, COEFFICIENT_COUNT};
    /// use egm96_geoid::{Degrees, Geoid};
    ///
    /// // with an empty table the synthesis reduces to the datum offset
    /// let geoid = Geoid::new(vec![Coefficients::default(); COEFFICIENT_COUNT]);
    ///
    /// let undulation = geoid.undulation(Degrees(51.0), Degrees(-1.0)).unwrap();
    /// assert_eq!(-0.53, undulation.0);
    /// ```
    pub fn undulation(&self, latitude: Degrees, longitude: Degrees) -> Result<Metres, GeoidError> {
        if !unit_sphere::is_valid_latitude(latitude.0) {
            return Err(GeoidError::InvalidLatitude(latitude));
        }

        let lat = Angle::from(latitude);
        let lon = Angle::from(longitude);
        let metrics = ellipsoid::calculate_geocentric_metrics(lat, lon)?;

        // the colatitude of the geocentric latitude, by exact sin cos swap
        let colatitude = (-metrics.latitude()).quarter_turn_cw();

        // scatter the Legendre functions of each order into the packed buffer
        let mut p = alloc::vec![0.0; COEFFICIENT_COUNT];
        for order in 0..=MAX_DEGREE {
            let rleg = legendre::calculate_legendre_functions(order, colatitude, &self.scales);
            for degree in order..=MAX_DEGREE {
                p[coefficient_index(degree, order)] = rleg[degree + 1];
            }
        }

        let series = TrigSeries::new(lon);
        Ok(synthesis::calculate_undulation(
            &self.coefficients,
            &p,
            &series,
            metrics.gravity(),
            metrics.radius(),
        ))
    }

    /// Calculate the geoid undulation at a position.
    ///
    /// # Errors
    ///
    /// See [undulation](Self::undulation).
    /// # Examples
    /// ```
    /// use egm96_geoid::potential::{Coefficients, COEFFICIENT_COUNT};
    /// use egm96_geoid::{Degrees, Geoid, LatLong};
    ///
    /// let geoid = Geoid::new(vec![Coefficients::default(); COEFFICIENT_COUNT]);
    ///
    /// let everest = LatLong::new(Degrees(27.988), Degrees(86.925));
    /// let undulation = geoid.undulation_at(&everest).unwrap();
    /// assert_eq!(-0.53, undulation.0);
    /// ```
    pub fn undulation_at(&self, position: &LatLong) -> Result<Metres, GeoidError> {
        self.undulation(position.lat(), position.lon())
    }

    /// Convert an ellipsoidal height to an orthometric height.
    ///
    /// The orthometric height is the height above the geoid, i.e. above mean
    /// sea level: H = h - N, with h the height above the WGS 84 ellipsoid
    /// and N the geoid undulation at the position.
    ///
    /// * `latitude` - the geodetic latitude in degrees, -90.0..=90.0.
    /// * `longitude` - the geodetic longitude in degrees.
    /// * `ellipsoidal_height` - the height above the WGS 84 ellipsoid.
    ///
    /// # Errors
    ///
    /// See [undulation](Self::undulation).
    /// # Examples
    /// ```
    /// use egm96_geoid::potential::{Coefficients, COEFFICIENT_COUNT};
    /// use egm96_geoid::{Degrees, Geoid, Metres};
    ///
    /// let geoid = Geoid::new(vec![Coefficients::default(); COEFFICIENT_COUNT]);
    ///
    /// let height = geoid
    ///     .orthometric_height(Degrees(51.0), Degrees(-1.0), Metres(100.0))
    ///     .unwrap();
    /// assert_eq!(100.53, height.0);
    /// ```
    pub fn orthometric_height(
        &self,
        latitude: Degrees,
        longitude: Degrees,
        ellipsoidal_height: Metres,
    ) -> Result<Metres, GeoidError> {
        let undulation = self.undulation(latitude, longitude)?;
        Ok(Metres(ellipsoidal_height.0 - undulation.0))
    }
}
