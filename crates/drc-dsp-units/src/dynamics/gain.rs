// SPDX-License-Identifier: LGPL-3.0-or-later

//! Static gain computation: hard and soft knee transfer curves.
//!
//! Maps a detected level in decibels through the compressor's transfer
//! curve and returns the linear gain multiplier for the sample. Pure
//! functions, no state.

use crate::consts::{GAIN_AMP_0_DB, SILENCE_FLOOR_DB};
use crate::units::db_to_gain;

/// Compute the linear gain multiplier for a detected level.
///
/// Levels at or below the −96 dB silence floor return unity gain.
///
/// With `soft_knee` unset the hard-knee line
/// `output = threshold + (detect − threshold) / ratio` is evaluated for
/// *all* detected levels, including those below threshold. This matches
/// the original curve this engine reproduces; it is not gated on
/// `detect_db > threshold`.
///
/// With `soft_knee` set, a quadratic blend spans the band of
/// `knee_db` decibels centered on the threshold, meeting the unity line
/// below the band and the hard-knee line above it with no
/// discontinuity. A knee width of zero degenerates to pass-through
/// below threshold and the hard-knee line above it.
#[inline]
pub fn knee_gain(detect_db: f32, threshold_db: f32, ratio: f32, knee_db: f32, soft_knee: bool) -> f32 {
    if detect_db <= SILENCE_FLOOR_DB {
        return GAIN_AMP_0_DB;
    }

    let output_db = if !soft_knee {
        threshold_db + (detect_db - threshold_db) / ratio
    } else {
        soft_knee_output_db(detect_db, threshold_db, ratio, knee_db)
    };

    db_to_gain(output_db - detect_db)
}

/// Soft-knee transfer curve output level in decibels.
#[inline]
fn soft_knee_output_db(detect_db: f32, threshold_db: f32, ratio: f32, knee_db: f32) -> f32 {
    let delta = detect_db - threshold_db;
    if 2.0 * delta < -knee_db {
        // Below the knee band: no change.
        detect_db
    } else if 2.0 * delta.abs() <= knee_db && knee_db > 0.0 {
        // Inside the band: quadratic blend from unity slope to 1/ratio.
        let half = knee_db / 2.0;
        detect_db + ((1.0 / ratio - 1.0) * (delta + half) * (delta + half)) / (2.0 * knee_db)
    } else {
        // Above the band: full compression.
        threshold_db + delta / ratio
    }
}
