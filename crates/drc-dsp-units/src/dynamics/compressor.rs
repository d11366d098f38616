// SPDX-License-Identifier: LGPL-3.0-or-later

//! Block-processing compressor engine.
//!
//! [`Compressor`] owns all state carried between blocks (per-channel
//! envelopes, the coefficient cache, the side-chain router and the
//! channel-0 visualization taps) and orchestrates the components once
//! per audio block: resolve side-chain transitions, refresh the
//! smoothing coefficients from the block's parameter snapshot, then run
//! detection and gain computation channel-major, sample-minor.
//!
//! The engine is real-time safe after [`Compressor::prepare`]: no
//! allocation, locking, or blocking inside [`Compressor::process`].

use crate::dynamics::coeff::CoeffCache;
use crate::dynamics::envelope::PeakEnvelope;
use crate::dynamics::gain::knee_gain;
use crate::dynamics::sidechain::{BusNegotiator, SidechainRouter};
use crate::units::db_to_gain;

/// Read-once parameter snapshot for one block.
///
/// Owned by the external parameter store; the engine reads a snapshot
/// per block and writes back only `side_chain`, and only when a bus
/// negotiation is denied. Range enforcement (ratio ≥ 1, positive time
/// constants) is the store's responsibility, not the engine's.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressorParams {
    /// Compression threshold in dB, typically in [-60, 0].
    pub threshold_db: f32,
    /// Compression ratio, ≥ 1 (1 = no compression).
    pub ratio: f32,
    /// Attack time constant in milliseconds, > 0.
    pub attack_ms: f32,
    /// Release time constant in milliseconds, > 0.
    pub release_ms: f32,
    /// Soft-knee band width in dB, ≥ 0 (0 degenerates to hard knee).
    pub knee_width_db: f32,
    /// Select the soft-knee transfer curve.
    pub soft_knee: bool,
    /// Request detection from the auxiliary side-chain bus.
    pub side_chain: bool,
    /// Post-compression makeup gain in dB.
    pub makeup_db: f32,
}

impl Default for CompressorParams {
    fn default() -> Self {
        Self {
            threshold_db: -12.0,
            ratio: 4.0,
            attack_ms: 10.0,
            release_ms: 200.0,
            knee_width_db: 10.0,
            soft_knee: false,
            side_chain: false,
            makeup_db: 0.0,
        }
    }
}

/// Dynamic-range compressor engine.
///
/// Call [`Compressor::prepare`] before the first block and
/// [`Compressor::release`] when the processing graph is torn down; no
/// process call may happen outside that bracket. The channel count is
/// fixed between prepare and teardown.
///
/// # Examples
/// ```
/// use drc_dsp_units::dynamics::compressor::{Compressor, CompressorParams};
/// use drc_dsp_units::dynamics::sidechain::BusNegotiator;
///
/// struct NoBus;
/// impl BusNegotiator for NoBus {
///     fn request_add_input_bus(&mut self) -> bool { false }
///     fn request_remove_input_bus(&mut self) -> bool { false }
/// }
///
/// let mut comp = Compressor::new();
/// comp.prepare(48000.0, 512, 1);
///
/// let input = vec![0.5f32; 512];
/// let mut output = vec![0.0f32; 512];
/// let mut params = CompressorParams::default();
/// comp.process(
///     &mut [&mut output[..]],
///     &[&input[..]],
///     None,
///     &mut params,
///     &mut NoBus,
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Compressor {
    envelope: PeakEnvelope,
    coeffs: CoeffCache,
    router: SidechainRouter,
    sample_rate: f32,
    channels: usize,
    // Channel-0 taps for the external envelope display.
    tap_input: f32,
    tap_output: f32,
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor {
    /// Create an unprepared engine.
    pub fn new() -> Self {
        Self {
            envelope: PeakEnvelope::new(),
            coeffs: CoeffCache::new(),
            router: SidechainRouter::new(),
            sample_rate: 48000.0,
            channels: 0,
            tap_input: 0.0,
            tap_output: 0.0,
        }
    }

    /// Size and zero all per-channel state for a playback session.
    ///
    /// Must be called before the first [`Compressor::process`]; may be
    /// called again to re-enter with a new rate or channel count.
    pub fn prepare(&mut self, sample_rate: f32, _max_block: usize, channels: usize) {
        self.sample_rate = sample_rate;
        self.channels = channels;
        self.envelope.prepare(channels);
        self.coeffs.set_sample_rate(sample_rate);
        self.router.reset();
        self.tap_input = 0.0;
        self.tap_output = 0.0;
    }

    /// Free per-channel state when the processing graph is torn down.
    pub fn release(&mut self) {
        self.envelope.release();
        self.router.reset();
        self.channels = 0;
        self.tap_input = 0.0;
        self.tap_output = 0.0;
    }

    /// Zero the envelope state without resizing.
    pub fn clear(&mut self) {
        self.envelope.clear();
        self.tap_input = 0.0;
        self.tap_output = 0.0;
    }

    /// Sample rate set at prepare time.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Channel count set at prepare time.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Whether detection currently reads from the side-chain bus.
    pub fn sidechain_active(&self) -> bool {
        self.router.is_active()
    }

    /// Current smoothed level of a channel (linear).
    pub fn envelope_level(&self, channel: usize) -> f32 {
        self.envelope.level(channel)
    }

    /// Attack coefficient in use for the current block.
    pub fn attack_coeff(&self) -> f32 {
        self.coeffs.attack()
    }

    /// Release coefficient in use for the current block.
    pub fn release_coeff(&self) -> f32 {
        self.coeffs.release()
    }

    /// Last processed channel-0 input sample (visualization hook).
    pub fn last_input(&self) -> f32 {
        self.tap_input
    }

    /// Last processed channel-0 output sample (visualization hook).
    pub fn last_output(&self) -> f32 {
        self.tap_output
    }

    /// Process one audio block.
    ///
    /// `output` and `input` are per-channel sample slices of equal
    /// block length; `sidechain` carries the auxiliary bus when the
    /// host has granted it. Side-chain transitions requested through
    /// `params.side_chain` are negotiated with `host` first and the
    /// flag is rewritten if the host refuses (see
    /// [`SidechainRouter::resolve`]). Output channels beyond the input
    /// channel count are zero-filled.
    pub fn process(
        &mut self,
        output: &mut [&mut [f32]],
        input: &[&[f32]],
        sidechain: Option<&[&[f32]]>,
        params: &mut CompressorParams,
        host: &mut dyn BusNegotiator,
    ) {
        self.router.resolve(&mut params.side_chain, host);

        // Coefficients are block-granular: refreshed here from the
        // snapshot and held constant for every sample below.
        self.coeffs.refresh(params.attack_ms, params.release_ms);
        let attack = self.coeffs.attack();
        let release = self.coeffs.release();
        let makeup = db_to_gain(params.makeup_db);

        let detect_bus = if self.router.is_active() {
            sidechain.unwrap_or(input)
        } else {
            input
        };

        let channels = input.len().min(output.len()).min(self.envelope.channels());
        for ch in 0..channels {
            let main = input[ch];
            // A narrower side-chain bus drives the remaining channels
            // from its last channel.
            let detect = if detect_bus.is_empty() {
                main
            } else {
                detect_bus[ch.min(detect_bus.len() - 1)]
            };
            let out = &mut *output[ch];
            let frames = out.len().min(main.len()).min(detect.len());

            for i in 0..frames {
                let detect_db = self.envelope.detect_db(detect[i], ch, attack, release);
                let gain = knee_gain(
                    detect_db,
                    params.threshold_db,
                    params.ratio,
                    params.knee_width_db,
                    params.soft_knee,
                );
                out[i] = main[i] * gain * makeup;
            }

            if ch == 0 && frames > 0 {
                self.tap_input = main[frames - 1];
                self.tap_output = out[frames - 1];
            }
        }

        // Outputs with no matching input never carry garbage.
        for out in output.iter_mut().skip(channels) {
            out.fill(0.0);
        }
    }
}
