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

//! The synthesis module contains the longitude recurrences and the truncated
//! harmonic summation that produce the geoid undulation.
//!
//! The summation follows Lemoine et al. (1998),
//! [NASA/TP-1998-206861](https://ntrs.nasa.gov/citations/19980218814),
//! Chapter 11: the height anomaly is synthesised from the potential
//! coefficients and converted to a geoid undulation by a degree 360
//! correction model, whose degree 0 and 1 terms are applied separately after
//! the main loop.

#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::wgs84;
use crate::potential::{coefficient_index, CoefficientTable, MAX_DEGREE};
use crate::Metres;
use angle_sc::Angle;

/// The length of the trigonometric series: one entry per order 0..=`MAX_DEGREE`.
pub const ORDER_COUNT: usize = MAX_DEGREE + 1;

/// Sines and cosines of integer multiples of a longitude.
///
/// `sin(m·λ)` and `cos(m·λ)` for m = 0..=`MAX_DEGREE`, built by the Chebyshev
/// style angle recurrence from sin λ and cos λ alone. Rebuilt for every
/// query longitude.
#[derive(Clone, Debug, PartialEq)]
pub struct TrigSeries {
    sin: [f64; ORDER_COUNT],
    cos: [f64; ORDER_COUNT],
}

impl TrigSeries {
    /// Construct a `TrigSeries` for the given longitude.
    #[must_use]
    pub fn new(longitude: Angle) -> Self {
        let sin_lon = longitude.sin().0;
        let cos_lon = longitude.cos().0;
        let two_cos = 2.0 * cos_lon;

        let mut sin = [0.0; ORDER_COUNT];
        let mut cos = [0.0; ORDER_COUNT];
        cos[0] = 1.0;
        sin[1] = sin_lon;
        cos[1] = cos_lon;
        sin[2] = two_cos * sin_lon;
        cos[2] = two_cos * cos_lon - 1.0;
        for m in 3..ORDER_COUNT {
            sin[m] = two_cos * sin[m - 1] - sin[m - 2];
            cos[m] = two_cos * cos[m - 1] - cos[m - 2];
        }

        Self { sin, cos }
    }

    /// The sine of `order` times the longitude.
    ///
    /// # Panics
    ///
    /// If `order` >= `ORDER_COUNT`.
    #[must_use]
    pub const fn sin(&self, order: usize) -> f64 {
        self.sin[order]
    }

    /// The cosine of `order` times the longitude.
    ///
    /// # Panics
    ///
    /// If `order` >= `ORDER_COUNT`.
    #[must_use]
    pub const fn cos(&self, order: usize) -> f64 {
        self.cos[order]
    }
}

/// Calculate the geoid undulation from the prepared per-query values.
///
/// Sums the potential coefficients weighted by the Legendre values in `p`
/// and the trigonometric series, degree by degree with an (a/re)ⁿ attenuation,
/// alongside the height anomaly correction sum. The degree 0 and 1 terms of
/// the correction model are added after the loop, then the height anomaly is
/// scaled to metres, the correction applied and the result re-referenced to
/// the WGS 84 ellipsoid.
///
/// * `coefficients` - the potential coefficient model.
/// * `p` - the Legendre values in packed index order.
/// * `series` - the trigonometric series of the query longitude.
/// * `gravity` - the normal gravity at the query position.
/// * `radius` - the geocentric radius of the query position.
///
/// # Panics
///
/// If `p` is shorter than `COEFFICIENT_COUNT`.
#[must_use]
pub fn calculate_undulation<T: CoefficientTable>(
    coefficients: &T,
    p: &[f64],
    series: &TrigSeries,
    gravity: f64,
    radius: Metres,
) -> Metres {
    let ar = wgs84::A.0 / radius.0;
    let mut arn = ar;

    let mut anomaly = 0.0;
    let mut correction = 0.0;
    for degree in 2..=MAX_DEGREE {
        arn *= ar;

        let k = coefficient_index(degree, 0);
        let entry = coefficients.coefficient(k);
        let mut sum = p[k] * entry.hc;
        let mut sum_correction = p[k] * entry.cc;

        for order in 1..=degree {
            let k = coefficient_index(degree, order);
            let entry = coefficients.coefficient(k);
            let temp = entry.hc * series.cos(order) + entry.hs * series.sin(order);
            let temp_correction = entry.cc * series.cos(order) + entry.cs * series.sin(order);
            sum += p[k] * temp;
            sum_correction += p[k] * temp_correction;
        }

        anomaly += sum * arn;
        correction += sum_correction;
    }

    // degree 0 and 1 terms of the correction model
    let zero = coefficients.coefficient(coefficient_index(0, 0));
    let zonal = coefficients.coefficient(coefficient_index(1, 0));
    let tesseral = coefficients.coefficient(coefficient_index(1, 1));
    correction += zero.cc
        + p[coefficient_index(1, 0)] * zonal.cc
        + p[coefficient_index(1, 1)] * (tesseral.cc * series.cos(1) + tesseral.cs * series.sin(1));

    Metres((anomaly * wgs84::GM) / (gravity * radius.0) + correction / 100.0 - 0.53)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::potential::{Coefficients, COEFFICIENT_COUNT};
    use angle_sc::{is_within_tolerance, Degrees, Radians};

    #[test]
    fn test_trig_series_zero_longitude() {
        let series = TrigSeries::new(Angle::default());
        for order in 0..ORDER_COUNT {
            assert_eq!(0.0, series.sin(order));
            assert_eq!(1.0, series.cos(order));
        }
    }

    #[test]
    fn test_trig_series_recurrence() {
        for longitude in [-179.5, -60.0, 0.125, 23.75, 145.0] {
            let lon = Angle::from(Degrees(longitude));
            let series = TrigSeries::new(lon);

            let lambda = Radians::from(lon).0;
            let mut angle = 0.0;
            for order in 1..ORDER_COUNT {
                angle += lambda;
                assert!(is_within_tolerance(libm::sin(angle), series.sin(order), 1e-9));
                assert!(is_within_tolerance(libm::cos(angle), series.cos(order), 1e-9));
            }
        }
    }

    #[test]
    fn test_reference_term_only() {
        // a lone degree 0 correction of 53 centimetres cancels the datum shift
        let mut table = vec![Coefficients::default(); COEFFICIENT_COUNT];
        table[coefficient_index(0, 0)] = Coefficients::new(0.0, 0.0, 53.0, 0.0);

        let p = vec![0.0; COEFFICIENT_COUNT];
        let series = TrigSeries::new(Angle::from(Degrees(9.0)));
        let undulation = calculate_undulation(&table, &p, &series, 9.8, wgs84::A);
        assert_eq!(0.0, undulation.0);
    }

    #[test]
    fn test_degree_two_zonal_term() {
        let mut table = vec![Coefficients::default(); COEFFICIENT_COUNT];
        table[coefficient_index(2, 0)] = Coefficients::new(1.0e-6, 0.0, 0.0, 0.0);

        let mut p = vec![0.0; COEFFICIENT_COUNT];
        p[coefficient_index(2, 0)] = 1.0;

        let series = TrigSeries::new(Angle::from(Degrees(40.0)));
        let undulation = calculate_undulation(&table, &p, &series, 10.0, wgs84::A);

        // at radius a the attenuation is unity, so the term passes through
        let expected = (1.0e-6 * wgs84::GM) / (10.0 * wgs84::A.0) - 0.53;
        assert_eq!(expected, undulation.0);
    }

    #[test]
    fn test_degree_two_sectoral_term() {
        let mut table = vec![Coefficients::default(); COEFFICIENT_COUNT];
        table[coefficient_index(2, 2)] = Coefficients::new(0.25, 0.75, 0.0, 0.0);

        let mut p = vec![0.0; COEFFICIENT_COUNT];
        p[coefficient_index(2, 2)] = 1.0;

        let series = TrigSeries::new(Angle::from(Degrees(40.0)));
        let undulation = calculate_undulation(&table, &p, &series, 10.0, wgs84::A);

        let temp = 0.25 * series.cos(2) + 0.75 * series.sin(2);
        let expected = (temp * wgs84::GM) / (10.0 * wgs84::A.0) - 0.53;
        assert_eq!(expected, undulation.0);
    }

    #[test]
    fn test_correction_coefficient_term() {
        let mut table = vec![Coefficients::default(); COEFFICIENT_COUNT];
        table[coefficient_index(2, 1)] = Coefficients::new(0.0, 0.0, 40.0, 20.0);

        let mut p = vec![0.0; COEFFICIENT_COUNT];
        p[coefficient_index(2, 1)] = 2.0;

        let series = TrigSeries::new(Angle::from(Degrees(40.0)));
        let undulation = calculate_undulation(&table, &p, &series, 10.0, wgs84::A);

        let temp = 40.0 * series.cos(1) + 20.0 * series.sin(1);
        let expected = (2.0 * temp) / 100.0 - 0.53;
        assert_eq!(expected, undulation.0);
    }

    #[test]
    fn test_attenuation_below_the_surface() {
        // a smaller geocentric radius amplifies high degrees: (a/re)ⁿ > 1
        let mut table = vec![Coefficients::default(); COEFFICIENT_COUNT];
        table[coefficient_index(3, 0)] = Coefficients::new(1.0e-6, 0.0, 0.0, 0.0);

        let mut p = vec![0.0; COEFFICIENT_COUNT];
        p[coefficient_index(3, 0)] = 1.0;

        let series = TrigSeries::new(Angle::default());
        let radius = Metres(wgs84::A.0 - 20_000.0);
        let undulation = calculate_undulation(&table, &p, &series, 10.0, radius);

        let ar = wgs84::A.0 / radius.0;
        let arn = (ar * ar) * ar;
        let expected = ((1.0e-6 * arn) * wgs84::GM) / (10.0 * radius.0) - 0.53;
        assert!(is_within_tolerance(expected, undulation.0, 1e-12));
    }
}
