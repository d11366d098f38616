// SPDX-License-Identifier: LGPL-3.0-or-later

//! Dynamic-range compression: envelope detection, knee-shaped gain,
//! coefficient caching, and side-chain routing.
//!
//! [`compressor::Compressor`] is the block-processing entry point; the
//! other modules are the components it orchestrates once per block.

pub mod coeff;
pub mod compressor;
pub mod envelope;
pub mod gain;
pub mod sidechain;
