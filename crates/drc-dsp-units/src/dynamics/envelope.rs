// SPDX-License-Identifier: LGPL-3.0-or-later

//! Per-channel peak envelope follower.
//!
//! A standard asymmetric one-pole peak detector: the rectified input is
//! smoothed with the attack coefficient while rising and the release
//! coefficient while falling, producing the classic "fast attack, slow
//! release" compressor envelope. One scalar of state is kept per
//! channel and persists across block boundaries.

use crate::consts::{ENVELOPE_CEIL, SILENCE_FLOOR_DB};
use crate::units::gain_to_db;

/// Per-channel peak envelope detector.
///
/// Channel state is sized once by [`PeakEnvelope::prepare`]; the channel
/// count must remain stable between prepare and teardown. Processing
/// never allocates.
#[derive(Debug, Clone, Default)]
pub struct PeakEnvelope {
    last: Vec<f32>,
}

impl PeakEnvelope {
    /// Create a follower with no channels allocated.
    pub fn new() -> Self {
        Self { last: Vec::new() }
    }

    /// Size the per-channel state and zero it.
    pub fn prepare(&mut self, channels: usize) {
        self.last.clear();
        self.last.resize(channels, 0.0);
    }

    /// Drop all per-channel state.
    pub fn release(&mut self) {
        self.last = Vec::new();
    }

    /// Zero the envelope state without resizing.
    pub fn clear(&mut self) {
        self.last.fill(0.0);
    }

    /// Number of prepared channels.
    pub fn channels(&self) -> usize {
        self.last.len()
    }

    /// Current smoothed level of a channel.
    pub fn level(&self, channel: usize) -> f32 {
        self.last[channel]
    }

    /// Advance one channel's envelope by one sample and return the
    /// detected level in decibels.
    ///
    /// The smoothed level is clamped to [0, 1] before conversion;
    /// levels at or below zero report the −96 dB silence floor instead
    /// of running `log10` into a singularity.
    #[inline]
    pub fn detect_db(
        &mut self,
        x: f32,
        channel: usize,
        attack_coeff: f32,
        release_coeff: f32,
    ) -> f32 {
        let input = x.abs();
        let last = self.last[channel];

        let env = if input > last {
            attack_coeff * (last - input) + input
        } else {
            release_coeff * (last - input) + input
        };
        // The raw value is carried forward; clamping applies only to
        // the reported level.
        self.last[channel] = env;

        let env = env.clamp(0.0, ENVELOPE_CEIL);
        if env <= 0.0 {
            return SILENCE_FLOOR_DB;
        }
        gain_to_db(env)
    }
}
