// SPDX-License-Identifier: LGPL-3.0-or-later

//! Detector source routing and side-chain bus negotiation.
//!
//! Switching the detector to an auxiliary side-chain input is not a
//! private state change: the host owns the bus topology and may refuse
//! to add or remove the input bus. The router therefore runs a
//! request/response negotiation against a [`BusNegotiator`] and keeps
//! the requested parameter honest, reverting it whenever the host says
//! no. Negotiation completes synchronously within the block that
//! observes the transition.

/// Host-side bus topology operations.
///
/// Both requests are synchronous and may be denied; denial is a normal
/// host response, not an error.
pub trait BusNegotiator {
    /// Ask the host to add the auxiliary side-chain input bus.
    fn request_add_input_bus(&mut self) -> bool;

    /// Ask the host to remove the auxiliary side-chain input bus.
    fn request_remove_input_bus(&mut self) -> bool;
}

/// Detector input source selector.
///
/// While active, *all* channels are detected from the side-chain bus
/// and the derived gain is applied to the corresponding main-output
/// channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidechainRouter {
    active: bool,
}

impl SidechainRouter {
    /// Create a router with the side-chain inactive.
    pub fn new() -> Self {
        Self { active: false }
    }

    /// Whether detection currently reads from the side-chain bus.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Deactivate without touching the host (prepare/teardown path).
    pub fn reset(&mut self) {
        self.active = false;
    }

    /// Reconcile the requested side-chain flag with the host.
    ///
    /// On a disabled→enabled transition the bus is requested; if the
    /// host denies it the flag is reverted to `false` (the engine
    /// cannot force a bus the host refuses). On an enabled→disabled
    /// transition the removal is requested; if denied the flag is
    /// forced back to `true` and detection stays on the side-chain bus
    /// rather than silently dropping compression.
    ///
    /// This is the one place the engine writes a parameter.
    pub fn resolve(&mut self, requested: &mut bool, host: &mut dyn BusNegotiator) {
        if *requested && !self.active {
            if host.request_add_input_bus() {
                self.active = true;
            } else {
                *requested = false;
            }
        } else if !*requested && self.active {
            if host.request_remove_input_bus() {
                self.active = false;
            } else {
                *requested = true;
            }
        }
    }
}
