//! Injected randomness for variant selection.

use std::collections::VecDeque;

use rand::RngExt;

use vault_core::VariantKind;

/// Decides which kind the next added object will be.
///
/// Injected into the session so tests can substitute a deterministic
/// sequence for the production uniform draw.
pub trait VariantSource {
    fn next_variant(&mut self) -> VariantKind;
}

/// Production source: uniform over the three kinds.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomVariantSource;

impl VariantSource for RandomVariantSource {
    fn next_variant(&mut self) -> VariantKind {
        let index = rand::rng().random_range(0..VariantKind::ALL.len());
        VariantKind::ALL[index]
    }
}

/// Deterministic source yielding a scripted sequence.
///
/// Once the script runs out it keeps yielding [`VariantKind::DataPacket`],
/// the least dangerous kind.
#[derive(Debug, Clone)]
pub struct SequenceVariantSource {
    script: VecDeque<VariantKind>,
}

impl SequenceVariantSource {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = VariantKind>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl VariantSource for SequenceVariantSource {
    fn next_variant(&mut self) -> VariantKind {
        self.script.pop_front().unwrap_or(VariantKind::DataPacket)
    }
}
