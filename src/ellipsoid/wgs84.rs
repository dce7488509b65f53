// Copyright (c) 2025 The egm96-geoid developers

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

//! The wgs84 module contains the WGS 84 ellipsoid and normal gravity
//! parameters of the WGS84(g873) system of constants, the system in force
//! when EGM96 was produced.
//!
//! The undulation depends on these exact values: the published correction
//! coefficients re-reference the height anomaly against this normal field,
//! so the constants must not be replaced by later refinements of WGS 84.

use crate::ellipsoid::Metres;

/// The WGS 84 semimajor axis measured in metres.
/// This is the radius at the equator.
pub const A: Metres = Metres(6_378_137.0);

/// The squared first eccentricity of the WGS 84 ellipsoid, a ratio.
pub const SQ_ECCENTRICITY: f64 = 0.006_694_379_990_13;

/// The theoretical (normal) gravity at the equator in metres per second
/// squared, from Somigliana's formula.
pub const EQUATORIAL_GRAVITY: f64 = 9.780_325_335_9;

/// Somigliana's constant for the WGS 84 normal gravity formula, a ratio.
pub const K: f64 = 0.001_931_852_652_46;

/// The Earth's gravitational constant in cubic metres per second squared,
/// atmosphere included.
pub const GM: f64 = 0.398_600_441_8e15;
