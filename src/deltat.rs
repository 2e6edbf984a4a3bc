//! # ΔT — the difference TT − UT
//!
//! Piecewise model combining the Meeus biennial table (1620–1992), annual
//! observed values (1992–2025, IERS/USNO), and the Espenak–Meeus polynomial
//! expressions everywhere else.
//!
//! The rise/transit/set refiner consumes ΔT only through the dynamical-time
//! interpolation offset `n = m + ΔT/86400`, so sub-second table fidelity is
//! ample for sub-minute event times.

use itertools::Itertools;

use crate::constants::{JulianDay, Second, J2000};
use crate::numeric::interpolate;

/// Biennial ΔT values in seconds, 1620.0 to 1992.0 (Meeus ch. 10 table).
#[rustfmt::skip]
const BIENNIAL_DT: [f64; 187] = [
    124.0, 115.0, 106.0,  98.0,  91.0,  85.0,  79.0,  74.0,  70.0,  65.0,
     62.0,  58.0,  55.0,  53.0,  50.0,  48.0,  46.0,  44.0,  42.0,  40.0,
     37.0,  35.0,  33.0,  31.0,  28.0,  26.0,  24.0,  22.0,  20.0,  18.0,
     16.0,  14.0,  13.0,  12.0,  11.0,  10.0,   9.0,   9.0,   9.0,   9.0,
      9.0,   9.0,   9.0,   9.0,  10.0,  10.0,  10.0,  10.0,  10.0,  11.0,
     11.0,  11.0,  11.0,  11.0,  11.0,  11.0,  12.0,  12.0,  12.0,  12.0,
     12.0,  12.0,  13.0,  13.0,  13.0,  13.0,  14.0,  14.0,  14.0,  15.0,
     15.0,  15.0,  15.0,  16.0,  16.0,  16.0,  16.0,  16.0,  17.0,  17.0,
     17.0,  17.0,  17.0,  17.0,  17.0,  17.0,  16.0,  16.0,  15.0,  14.0,
     13.7,  13.1,  12.7,  12.5,  12.5,  12.5,  12.5,  12.5,  12.5,  12.3,
     12.0,  11.4,  10.6,   9.6,   8.6,   7.5,   6.6,   6.0,   5.7,   5.6,
      5.7,   5.9,   6.2,   6.5,   6.8,   7.1,   7.3,   7.5,   7.7,   7.8,
      7.9,   7.5,   6.4,   5.4,   2.9,   1.6,  -1.0,  -2.7,  -3.6,  -4.7,
     -5.4,  -5.2,  -5.5,  -5.6,  -5.8,  -5.9,  -6.2,  -6.4,  -6.1,  -4.7,
     -2.7,   0.0,   2.6,   5.4,   7.7,  10.5,  13.4,  16.0,  18.2,  20.2,
     21.2,  22.4,  23.5,  23.9,  24.3,  24.0,  23.9,  23.9,  23.7,  24.0,
     24.3,  25.3,  26.2,  27.3,  28.2,  29.1,  30.0,  30.7,  31.4,  32.2,
     33.1,  34.0,  35.0,  36.5,  38.3,  40.2,  42.2,  44.5,  46.5,  48.5,
     50.5,  52.2,  53.8,  54.9,  55.8,  56.9,  58.3,
];

const BIENNIAL_START_YEAR: f64 = 1620.0;

/// Annual observed ΔT values in seconds, 1992.0 to 2025.0
/// (IERS Bulletin A / USNO).
#[rustfmt::skip]
const OBSERVED_DT: [f64; 34] = [
    58.31, 59.12, 59.98, 60.78, 61.63, 62.30, 62.97, 63.47,
    63.83, 64.09, 64.30, 64.47, 64.57, 64.69, 64.85, 65.15,
    65.46, 65.78, 66.07, 66.32, 66.60, 66.91, 67.28, 67.64,
    68.10, 68.59, 68.97, 69.22, 69.36, 69.36, 69.29, 69.18,
    69.09, 69.36,
];

const OBSERVED_START_YEAR: f64 = 1992.0;
const OBSERVED_END_YEAR: f64 = OBSERVED_START_YEAR + (OBSERVED_DT.len() - 1) as f64;

/// ΔT = TT − UT at a given Julian Day, in seconds.
///
/// Table lookup with interpolation inside the observed range, the
/// Espenak–Meeus polynomial expressions outside it.
pub fn delta_t(jd: JulianDay) -> Second {
    let year = 2000.0 + (jd - J2000) / 365.25;

    if (BIENNIAL_START_YEAR..OBSERVED_START_YEAR).contains(&year) {
        biennial_table(year)
    } else if (OBSERVED_START_YEAR..=OBSERVED_END_YEAR).contains(&year) {
        observed_table(year)
    } else {
        polynomial(year)
    }
}

/// Bessel interpolation of the biennial table around the nearest entry.
fn biennial_table(year: f64) -> Second {
    let center = (((year - BIENNIAL_START_YEAR) / 2.0).round() as usize)
        .clamp(1, BIENNIAL_DT.len() - 2);
    let n = (year - (BIENNIAL_START_YEAR + 2.0 * center as f64)) / 2.0;
    interpolate(
        BIENNIAL_DT[center - 1],
        BIENNIAL_DT[center],
        BIENNIAL_DT[center + 1],
        n,
    )
}

/// Linear interpolation between annual observed values.
fn observed_table(year: f64) -> Second {
    let bracket = OBSERVED_DT
        .iter()
        .enumerate()
        .map(|(i, &v)| (OBSERVED_START_YEAR + i as f64, v))
        .tuple_windows()
        .find(|&((y0, _), (y1, _))| year >= y0 && year < y1);

    match bracket {
        Some(((y0, v0), (_, v1))) => v0 + (year - y0) * (v1 - v0),
        None => OBSERVED_DT[OBSERVED_DT.len() - 1],
    }
}

/// Espenak–Meeus polynomial expressions for ΔT outside the tabulated range.
fn polynomial(year: f64) -> Second {
    if year < -500.0 {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    } else if year < 500.0 {
        let u = year / 100.0;
        10583.6
            + u * (-1014.41
                + u * (33.783_11
                    + u * (-5.952_053
                        + u * (-0.179_845_2 + u * (0.022_174_192 + u * 0.009_031_652_1)))))
    } else if year < 1600.0 {
        let u = (year - 1000.0) / 100.0;
        1574.2
            + u * (-556.01
                + u * (71.234_72
                    + u * (0.319_781
                        + u * (-0.850_346_3 + u * (-0.005_050_998 + u * 0.008_357_207_3)))))
    } else if year < 1700.0 {
        let u = (year - 1600.0) / 100.0;
        120.0 + u * (-98.08 + u * (-153.2 + u / 0.007_129))
    } else if year < 1800.0 {
        let u = (year - 1700.0) / 100.0;
        8.83 + u * (16.03 + u * (-59.285 + u * (133.36 - u / 0.011_74)))
    } else if year < 1860.0 {
        let u = (year - 1800.0) / 100.0;
        13.72
            + u * (-33.2447
                + u * (68.612
                    + u * (4111.6
                        + u * (-37_436.0 + u * (121_272.0 + u * (-169_900.0 + u * 87_500.0))))))
    } else if year < 1900.0 {
        let u = (year - 1860.0) / 100.0;
        7.62 + u * (57.37 + u * (-2517.54 + u * (16_806.68 + u * (-44_736.24 + u / 0.000_023_317_4))))
    } else if year < 1920.0 {
        let u = (year - 1900.0) / 100.0;
        -2.79 + u * (149.4119 + u * (-598.939 + u * (6196.6 - u * 19_700.0)))
    } else if year < 1941.0 {
        let u = (year - 1920.0) / 100.0;
        21.20 + u * (84.493 + u * (-761.00 + u * 2093.6))
    } else if year < 1961.0 {
        let u = (year - 1950.0) / 100.0;
        29.07 + u * (40.7 + u * (-1.0 / 0.0233 + u / 0.002_547))
    } else if year < 1986.0 {
        let u = (year - 1975.0) / 100.0;
        45.45 + u * (106.7 + u * (-1.0 / 0.026 - u / 0.000_718))
    } else if year < 2005.0 {
        let u = (year - 2000.0) / 100.0;
        63.86 + u * (33.45 + u * (-603.74 + u * (1727.5 + u * (65_181.4 + u * 237_359.9))))
    } else if year < 2050.0 {
        let u = (year - 2000.0) / 100.0;
        62.92 + u * (32.217 + u * 55.89)
    } else if year < 2150.0 {
        let u = (year - 1820.0) / 100.0;
        -205.72 + u * (56.28 + u * 32.0)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

#[cfg(test)]
mod deltat_tests {
    use super::*;
    use crate::juliandays::julian_day;

    #[test]
    fn test_biennial_table_values() {
        // 1988 March 20 falls between the 55.8 (1988) and 56.9 (1990) entries
        let jd = julian_day(1988, 3, 20, 0, 0, 0).unwrap();
        let dt = delta_t(jd);
        assert!((dt - 55.9).abs() < 0.3, "dt = {dt}");

        // 1950.0 tabulated at 29.1
        let jd = julian_day(1950, 1, 1, 0, 0, 0).unwrap();
        assert!((delta_t(jd) - 29.1).abs() < 0.5);
    }

    #[test]
    fn test_observed_table_values() {
        let jd = julian_day(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((delta_t(jd) - 63.83).abs() < 0.2);
        let jd = julian_day(2010, 1, 1, 0, 0, 0).unwrap();
        assert!((delta_t(jd) - 66.07).abs() < 0.2);
    }

    #[test]
    fn test_polynomial_branches() {
        // AA Example 10.a: ΔT(1977.13) ≈ +47.6 s (table); polynomial branch
        // for the same epoch must agree within a couple of seconds
        assert!((polynomial(1977.13) - 47.6).abs() < 2.0);
        // far future parabola
        assert!((polynomial(2100.0) - 202.8).abs() < 1.0);
        // around the epoch of Ptolemy ΔT was of order 10^4 seconds
        assert!((polynomial(0.0) - 10_583.6).abs() < 1.0);
    }

    #[test]
    fn test_table_is_used_inside_range() {
        // the 1986-2005 polynomial and the observed table disagree by < 1 s
        let jd = julian_day(1995, 6, 1, 0, 0, 0).unwrap();
        let dt = delta_t(jd);
        assert!((dt - 61.0).abs() < 0.5, "dt = {dt}");
    }
}
