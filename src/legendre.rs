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

//! The legendre module contains functions for evaluating fully normalised
//! associated Legendre functions to degree and order 360.
//!
//! It uses the stable column-wise recurrences described by Colombo in
//! Numerical Methods for Harmonic Analysis on the Sphere (1981), Report 310,
//! Department of Geodetic Science, The Ohio State University: sectoral values
//! are seeded diagonally and each column of fixed order is then propagated
//! over ascending degree by a three term recurrence. The recurrence factors
//! are square roots of small integers, taken from a table built once and
//! shared by every evaluation, so no factorials are ever formed.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::suboptimal_flops)]

use crate::potential::MAX_DEGREE;
use angle_sc::Angle;

/// The length of the square root tables: roots of 1..=2 * `MAX_DEGREE` + 1
/// with an unused entry at index zero.
pub const ROOT_COUNT: usize = 2 * MAX_DEGREE + 2;

/// The length of a Legendre function buffer.
///
/// Values for degree n lie at index n + 1, so a buffer spans indices
/// 1..=`MAX_DEGREE` + 1 with an unused entry at index zero.
pub const FUNCTION_COUNT: usize = MAX_DEGREE + 2;

/// Square roots √n and reciprocals 1/√n for n = 1..=2 * `MAX_DEGREE` + 1.
///
/// The recurrence factors of every Legendre evaluation are ratios of these
/// values. The table is built once when the model is constructed and is
/// never mutated afterwards, so it may be read concurrently.
#[derive(Clone, Debug, PartialEq)]
pub struct RootTable {
    sqrt_n: [f64; ROOT_COUNT],
    recip_sqrt_n: [f64; ROOT_COUNT],
}

impl RootTable {
    /// Construct a `RootTable`, populating both tables for n = 1..=721.
    #[must_use]
    pub fn new() -> Self {
        let mut sqrt_n = [0.0; ROOT_COUNT];
        let mut recip_sqrt_n = [0.0; ROOT_COUNT];
        for n in 1..ROOT_COUNT {
            sqrt_n[n] = libm::sqrt(n as f64);
            recip_sqrt_n[n] = 1.0 / sqrt_n[n];
        }
        Self {
            sqrt_n,
            recip_sqrt_n,
        }
    }

    /// The square root of n.
    ///
    /// # Panics
    ///
    /// If n >= `ROOT_COUNT`.
    #[must_use]
    pub const fn sqrt(&self, n: usize) -> f64 {
        self.sqrt_n[n]
    }

    /// The reciprocal square root of n.
    ///
    /// # Panics
    ///
    /// If n >= `ROOT_COUNT`.
    #[must_use]
    pub const fn recip_sqrt(&self, n: usize) -> f64 {
        self.recip_sqrt_n[n]
    }
}

impl Default for RootTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculate fully normalised associated Legendre functions of the given
/// order for all degrees up to `MAX_DEGREE`.
///
/// Returns a buffer holding P̄(n, order) of the cosine of `colatitude` at
/// index n + 1 for each degree n = order..=`MAX_DEGREE`; other entries are
/// zero. The low degree terms where the three term recurrence would take the
/// square root of a negative integer are produced by the base cases and
/// skipped inside the loop, a boundary condition that must stay with the
/// recurrence.
///
/// * `order` - the harmonic order m, 0..=`MAX_DEGREE`.
/// * `colatitude` - the geocentric colatitude θ.
/// * `scales` - the square root tables.
///
/// # Panics
///
/// If `order` > `MAX_DEGREE`.
#[allow(clippy::similar_names)]
#[must_use]
pub fn calculate_legendre_functions(
    order: usize,
    colatitude: Angle,
    scales: &RootTable,
) -> [f64; FUNCTION_COUNT] {
    let sin_theta = colatitude.sin().0;
    let cos_theta = colatitude.cos().0;

    let m1 = order + 1;
    let m2 = order + 2;
    let m3 = order + 3;

    // sectoral values, seeded diagonally up to the requested order
    let mut rlnn = [0.0; FUNCTION_COUNT];
    rlnn[1] = 1.0;
    rlnn[2] = sin_theta * scales.sqrt(3);
    for n1 in 3..=m1 {
        let n2 = 2 * (n1 - 1);
        rlnn[n1] = scales.sqrt(n2 + 1) * scales.recip_sqrt(n2) * sin_theta * rlnn[n1 - 1];
    }

    let mut rleg = [0.0; FUNCTION_COUNT];
    match order {
        1 => {
            rleg[2] = rlnn[2];
            rleg[3] = scales.sqrt(5) * cos_theta * rleg[2];
        }
        0 => {
            rleg[1] = 1.0;
            rleg[2] = cos_theta * scales.sqrt(3);
        }
        _ => {}
    }
    rleg[m1] = rlnn[m1];

    if m2 <= MAX_DEGREE + 1 {
        rleg[m2] = scales.sqrt(2 * m1 + 1) * cos_theta * rleg[m1];

        if m3 <= MAX_DEGREE + 1 {
            for n1 in m3..=(MAX_DEGREE + 1) {
                let n = n1 - 1;
                if (order == 0 && n < 2) || (order == 1 && n < 3) {
                    continue;
                }
                let n2 = 2 * n;
                rleg[n1] = scales.sqrt(n2 + 1)
                    * scales.recip_sqrt(n + order)
                    * scales.recip_sqrt(n - order)
                    * (scales.sqrt(n2 - 1) * cos_theta * rleg[n1 - 1]
                        - scales.sqrt(n + order - 1)
                            * scales.sqrt(n - order - 1)
                            * scales.recip_sqrt(n2 - 3)
                            * rleg[n1 - 2]);
            }
        }
    }

    rleg
}
