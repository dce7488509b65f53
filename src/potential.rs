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

//! The potential module contains the types and the packed index scheme for the
//! [EGM96](https://cddis.nasa.gov/926/egm96/egm96.html) potential coefficient
//! model.
//!
//! EGM96 is a spherical harmonic expansion of the Earth's gravitational
//! potential, complete to degree and order 360, see Lemoine et al. (1998),
//! [NASA/TP-1998-206861](https://ntrs.nasa.gov/citations/19980218814).
//! Its coefficients are published as one record per (degree, order) pair.
//! This module packs those pairs into the linear index layout used by both
//! the coefficient tables and the Legendre value buffer.

use alloc::vec::Vec;

/// The maximum degree and order of the harmonic expansion.
pub const MAX_DEGREE: usize = 360;

/// The length of a packed coefficient table, including the unused entry at
/// index zero.
///
/// Valid packed indices run from 1 to `COEFFICIENT_COUNT - 1` inclusive,
/// one for each (degree, order) pair with degree <= `MAX_DEGREE`.
pub const COEFFICIENT_COUNT: usize = 1 + (MAX_DEGREE + 1) * (MAX_DEGREE + 2) / 2;

/// The packed index of the coefficients for harmonic degree n and order m.
///
/// Pairs are laid out degree by degree, orders ascending within a degree, so
/// a degree/order loop over the table reads consecutive entries.
/// Index 0 is never produced; indices 1 to 3 hold the degree 0 and 1
/// reference terms.
///
/// The caller must ensure `order <= degree <= MAX_DEGREE`.
/// # Examples
/// ```
/// use egm96_geoid::potential::{coefficient_index, COEFFICIENT_COUNT};
///
/// // the degree 2 zonal term follows the degree 0 and 1 reference terms
/// assert_eq!(4, coefficient_index(2, 0));
/// assert_eq!(COEFFICIENT_COUNT - 1, coefficient_index(360, 360));
/// ```
#[must_use]
pub const fn coefficient_index(degree: usize, order: usize) -> usize {
    (degree * (degree + 1)) / 2 + order + 1
}

/// The coefficients of a single harmonic term of the potential model.
///
/// `hc` and `hs` are the fully normalised potential coefficients; `cc` and
/// `cs` are the correction coefficients converting the height anomaly to a
/// geoid undulation. All four are dimensionless.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coefficients {
    /// The potential coefficient of the cosine term.
    pub hc: f64,
    /// The potential coefficient of the sine term.
    pub hs: f64,
    /// The correction coefficient of the cosine term.
    pub cc: f64,
    /// The correction coefficient of the sine term.
    pub cs: f64,
}

impl Coefficients {
    /// Construct `Coefficients` from the potential and correction pairs.
    #[must_use]
    pub const fn new(hc: f64, hs: f64, cc: f64, cs: f64) -> Self {
        Self { hc, hs, cc, cs }
    }
}

/// A read-only source of potential model coefficients.
///
/// The synthesis only ever reads single entries at packed indices produced
/// by [`coefficient_index`], so the table may live anywhere: a static array,
/// a heap allocation, or a memory mapped file. Implementations must provide
/// every index from 1 to `COEFFICIENT_COUNT - 1` and must already include
/// any preparation the published data requires, such as the reference
/// ellipsoid even zonal adjustments applied by the NGA `F477` synthesis
/// program.
pub trait CoefficientTable {
    /// The coefficients at the given packed index.
    fn coefficient(&self, index: usize) -> Coefficients;
}

/// A packed slice of coefficients, indexed directly.
///
/// The slice must be at least [`COEFFICIENT_COUNT`] long; entry 0 is unused.
impl CoefficientTable for &[Coefficients] {
    fn coefficient(&self, index: usize) -> Coefficients {
        self[index]
    }
}

/// A packed `Vec` of coefficients, indexed directly.
///
/// The `Vec` must be at least [`COEFFICIENT_COUNT`] long; entry 0 is unused.
impl CoefficientTable for Vec<Coefficients> {
    fn coefficient(&self, index: usize) -> Coefficients {
        self[index]
    }
}
