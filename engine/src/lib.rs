//! Session controller for the quantum vault.
//!
//! The [`Session`] is the single writer over the [`vault_core::Inventory`]:
//! it resolves operator commands, invokes object operations, and owns the
//! failure-propagation contract. A [`vault_types::CollapseError`] out of any
//! operation latches the session into its terminal `Halted` phase; every
//! other failure is per-command and recoverable.
//!
//! The read-eval loop that feeds it lives in the `quantum-vault` binary; this
//! crate never reads input and never prints.

mod commands;
mod session;
mod variant_source;

pub use commands::{Command, CommandSpec, command_specs};
pub use session::{Session, SessionEvent, SessionPhase};
pub use variant_source::{RandomVariantSource, SequenceVariantSource, VariantSource};
