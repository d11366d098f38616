// SPDX-License-Identifier: LGPL-3.0-or-later

//! Smoothing-coefficient calculation with last-value caching.
//!
//! Attack and release time constants are converted into one-pole
//! exponential coefficients once per block. Recomputing `exp()` per
//! sample is wasted work while the parameter sits still, so each
//! coefficient is cached against the time constant it was derived from
//! and only refreshed when that value changes. Coefficients are
//! therefore piecewise-constant for the duration of a block even under
//! continuous parameter modulation.

use crate::consts::RC_ENVELOPE_TC;

/// One-pole smoothing coefficient for a time constant τ in milliseconds.
///
/// `coeff = exp(-RC_ENVELOPE_TC / (sample_rate * τ * 1e-3))`
///
/// No clamping is applied: τ → 0 drives the coefficient to 0 (the
/// envelope snaps instantly), τ → ∞ drives it to 1 (the envelope
/// freezes). Callers must supply τ > 0.
#[inline]
pub fn smoothing_coeff(tau_ms: f32, sample_rate: f32) -> f32 {
    (-RC_ENVELOPE_TC / (sample_rate * tau_ms * 1e-3)).exp()
}

/// Cached attack/release coefficient pair.
///
/// [`CoeffCache::refresh`] is called once at the start of every block
/// with the block's parameter snapshot; a coefficient is recomputed only
/// when its time constant differs from the value used last time.
#[derive(Debug, Clone)]
pub struct CoeffCache {
    sample_rate: f32,
    attack_coeff: f32,
    release_coeff: f32,
    last_attack_ms: f32,
    last_release_ms: f32,
}

impl Default for CoeffCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CoeffCache {
    /// Create a cache with no valid entries.
    pub fn new() -> Self {
        Self {
            sample_rate: 48000.0,
            attack_coeff: 0.0,
            release_coeff: 0.0,
            last_attack_ms: 0.0,
            last_release_ms: 0.0,
        }
    }

    /// Set the sample rate and invalidate both cached coefficients.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        // A last-seen τ of zero never matches a valid τ > 0, forcing
        // recomputation on the next refresh.
        self.last_attack_ms = 0.0;
        self.last_release_ms = 0.0;
    }

    /// Sample rate the cached coefficients were derived for.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Refresh the coefficient pair from a block's parameter snapshot.
    ///
    /// Each exponential is recomputed only when its time constant has
    /// changed since the previous refresh.
    pub fn refresh(&mut self, attack_ms: f32, release_ms: f32) {
        if attack_ms != self.last_attack_ms {
            self.attack_coeff = smoothing_coeff(attack_ms, self.sample_rate);
            self.last_attack_ms = attack_ms;
        }
        if release_ms != self.last_release_ms {
            self.release_coeff = smoothing_coeff(release_ms, self.sample_rate);
            self.last_release_ms = release_ms;
        }
    }

    /// Current attack coefficient.
    pub fn attack(&self) -> f32 {
        self.attack_coeff
    }

    /// Current release coefficient.
    pub fn release(&self) -> f32 {
        self.release_coeff
    }

    /// Time constant the attack coefficient was derived from.
    pub fn last_attack_ms(&self) -> f32 {
        self.last_attack_ms
    }

    /// Time constant the release coefficient was derived from.
    pub fn last_release_ms(&self) -> f32 {
        self.last_release_ms
    }
}
