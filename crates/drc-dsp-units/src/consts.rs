// SPDX-License-Identifier: LGPL-3.0-or-later

//! Gain and detector constants.

/// 0 dB amplitude gain (1.0)
pub const GAIN_AMP_0_DB: f32 = 1.0;

/// -96 dB amplitude gain (~0.0000158)
pub const GAIN_AMP_M_96_DB: f32 = 1.584_893_2e-5;

/// Detector silence floor in dB. Envelope levels at or below this are
/// treated as silence and produce unity gain.
pub const SILENCE_FLOOR_DB: f32 = -96.0;

/// RC time-constant scale for the one-pole envelope smoother.
///
/// Chosen so a time constant of τ milliseconds approximates the
/// conventional time-to-63%-settle definition.
pub const RC_ENVELOPE_TC: f32 = 0.999_672_34;

/// Upper clamp for the detected envelope (normalized full scale).
pub const ENVELOPE_CEIL: f32 = 1.0;
