// SPDX-License-Identifier: LGPL-3.0-or-later

//! # drc-dsp-units
//!
//! Dynamic-range compressor engine for block-based real-time audio
//! processing.
//!
//! The crate provides the numeric core of a compressor plugin: peak
//! envelope detection with independent attack/release smoothing,
//! hard/soft-knee gain computation, cached coefficient calculation, and
//! main/side-chain detector routing. Host concerns (parameter storage,
//! bus topology, GUI) stay outside; they talk to the engine through
//! plain snapshots and the [`dynamics::sidechain::BusNegotiator`] trait.
//!
//! The engine never allocates or blocks inside a processing call: all
//! per-channel state is sized once in
//! [`dynamics::compressor::Compressor::prepare`].

pub mod consts;
pub mod units;

pub mod dynamics;
