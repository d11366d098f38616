// SPDX-License-Identifier: LGPL-3.0-or-later

//! Unit conversion functions.
//!
//! Conversions between decibels and linear gain, and between time and
//! sample counts, shared by the dynamics modules.

/// Convert decibels to linear gain (amplitude ratio).
///
/// # Arguments
/// * `db` - Level in decibels
///
/// # Returns
/// Linear gain (amplitude ratio)
#[inline]
pub fn db_to_gain(db: f32) -> f32 {
    (db * (std::f32::consts::LN_10 / 20.0)).exp()
}

/// Convert linear gain (amplitude ratio) to decibels.
///
/// # Arguments
/// * `gain` - Linear gain (amplitude ratio)
///
/// # Returns
/// Level in decibels
#[inline]
pub fn gain_to_db(gain: f32) -> f32 {
    20.0 * gain.log10()
}

/// Convert milliseconds to sample count.
///
/// # Arguments
/// * `sr` - Sample rate in Hz
/// * `time` - Time in milliseconds
///
/// # Returns
/// Number of samples
#[inline]
pub fn millis_to_samples(sr: f32, time: f32) -> f32 {
    time * sr / 1000.0
}

/// Convert sample count to milliseconds.
///
/// # Arguments
/// * `sr` - Sample rate in Hz
/// * `samples` - Number of samples
///
/// # Returns
/// Time in milliseconds
#[inline]
pub fn samples_to_millis(sr: f32, samples: f32) -> f32 {
    samples * 1000.0 / sr
}
