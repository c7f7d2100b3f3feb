// Ledger Assets Library: asset lifecycle transaction pipeline
// Written in 2020 by
//     Dr. Maxim Orlovsky <orlovsky@pandoracore.com>
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the MIT License
// along with this software.
// If not, see <https://opensource.org/licenses/MIT>.

//! Auxiliaries: cross-cutting services (authentication, authorization,
//! conformance, scrubbing, split bookkeeping) which transaction keepers
//! invoke as ordered steps of their pipelines.
//!
//! Each auxiliary module defines the request the auxiliary accepts, its
//! stable capability name and the trait object type under which it is
//! wired into keepers via [`Capability`].

pub mod authenticate;
mod capability;
pub mod conform;
pub mod maintain;
mod response;
pub mod scrub;
pub mod split;
pub mod supplement;
pub mod verify;

pub use capability::Capability;
pub(crate) use capability::Slot;
pub use response::AuxiliaryResponse;

use crate::ledger::Context;

/// Uniform contract of the auxiliary services
pub trait Auxiliary {
    type Request;
    type Payload;

    /// Processes the request against the current ledger context. Auxiliaries
    /// may read and write their own partitions of the ledger state but must
    /// not touch the asset store.
    fn help(&self, context: &mut Context<'_>, request: Self::Request)
        -> AuxiliaryResponse<Self::Payload>;
}
