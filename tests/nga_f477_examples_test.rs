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

extern crate egm96_geoid;

use csv;
use egm96_geoid::potential::{coefficient_index, Coefficients, COEFFICIENT_COUNT, MAX_DEGREE};
use egm96_geoid::{Degrees, Geoid};
use std::env;
use std::fs;
use std::path::Path;

/// The even degree zonal coefficients of the WGS84(g873) system of
/// constants, with their normalisations 2n + 1. They are the values used by
/// the NGA F477 synthesis program distributed with the EGM96 model.
const EVEN_ZONALS: [(usize, f64, f64); 5] = [
    (2, 0.108262982131e-2, 5.0),
    (4, -0.237091120053e-5, 9.0),
    (6, 0.608346498882e-8, 13.0),
    (8, -0.142681087920e-10, 17.0),
    (10, 0.121439275882e-13, 21.0),
];

/// Parse a coefficient field, accepting the Fortran D exponent form.
fn parse_field(field: &str) -> Result<f64, std::num::ParseFloatError> {
    field.replace(['D', 'd'], "E").parse()
}

/// Load a packed coefficient table from the raw NGA `EGM96` and `CORCOEF`
/// files in the given directory, prepared for synthesis the way the NGA
/// F477 program prepares it.
fn load_coefficients(dir: &Path) -> Result<Vec<Coefficients>, Box<dyn std::error::Error>> {
    let mut table = vec![Coefficients::default(); COEFFICIENT_COUNT];

    // the potential file, one record per (degree, order) pair from degree 2:
    // degree, order, the coefficient pair and their standard deviations
    let potential = fs::read_to_string(dir.join("EGM96"))?;
    for line in potential.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            continue;
        }
        let degree = fields[0].parse::<usize>()?;
        let order = fields[1].parse::<usize>()?;
        if MAX_DEGREE < degree {
            continue;
        }
        let entry = &mut table[coefficient_index(degree, order)];
        entry.hc = parse_field(fields[2])?;
        entry.hs = parse_field(fields[3])?;
    }

    // the correction file: degree, order and the correction coefficient pair
    let correction = fs::read_to_string(dir.join("CORCOEF"))?;
    for line in correction.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            continue;
        }
        let degree = fields[0].parse::<usize>()?;
        let order = fields[1].parse::<usize>()?;
        let entry = &mut table[coefficient_index(degree, order)];
        entry.cc = parse_field(fields[2])?;
        entry.cs = parse_field(fields[3])?;
    }

    // remove the even zonal harmonics of the reference ellipsoid, so that
    // the synthesis runs on the anomalous potential
    for (degree, zonal, normalisation) in EVEN_ZONALS {
        table[coefficient_index(degree, 0)].hc += zonal / libm::sqrt(normalisation);
    }

    Ok(table)
}

const FILENAME: &str = "data/egm96_control_points.csv";

type ControlPoint = (f64, f64, f64);

#[test]
#[ignore]
fn test_nga_f477_examples() -> Result<(), Box<dyn std::error::Error>> {
    // Read the coefficient files from EGM96_DATA_DIR and compare calculated
    // undulations with the values published with the model
    let dir_key = "EGM96_DATA_DIR";
    let p = env::var(dir_key).expect("Environment variable not found: EGM96_DATA_DIR");
    let table = load_coefficients(Path::new(&p))?;
    let geoid = Geoid::new(table);

    // the customary regression point on the Greenwich equator
    let undulation = geoid.undulation(Degrees(0.0), Degrees(0.0))?;
    let delta = libm::fabs(17.16 - undulation.0);
    if 0.01 < delta {
        panic!(
            "equator undulation, delta: {:?} calculated: {:?}",
            delta, undulation.0
        );
    }

    // the example points distributed with the F477 program, longitudes in
    // its 0..360 East convention
    let mut rdr = csv::Reader::from_path(FILENAME)?;
    let mut line_number = 1;
    for result in rdr.deserialize::<ControlPoint>() {
        let record = result?;

        let undulation = geoid.undulation(Degrees(record.0), Degrees(record.1))?;
        let delta = libm::fabs(record.2 - undulation.0);
        if 0.1 < delta {
            panic!(
                "undulation, line: {:?} delta: {:?} expected: {:?} calculated: {:?}",
                line_number, delta, record.2, undulation.0
            );
        }
        line_number += 1;
    }

    Ok(())
}
