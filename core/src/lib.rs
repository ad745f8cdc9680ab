//! Object model for the quantum vault.
//!
//! The model is a small polymorphic hierarchy: every stored item implements
//! [`QuantumObject`] (identity, danger level, stability-eroding analysis),
//! and the critical variants additionally implement the [`Coolable`]
//! capability. The [`Inventory`] owns the boxed objects in insertion order.
//!
//! Nothing in this crate prints. Operations return report values and the
//! shell decides how to render them.

mod inventory;
mod object;
mod variants;

pub use inventory::Inventory;
pub use object::{AnalysisReport, Coolable, CoolingReport, QuantumObject};
pub use variants::{AntiMatter, DarkMatter, DataPacket, VariantKind};
