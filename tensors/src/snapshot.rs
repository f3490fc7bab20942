//! Per-step tensor snapshots.
//!
//! DESIGN
//! ======
//! On the wire a snapshot is `{ "steps": { "<step>": <nested array> } }` with
//! string keys. Keys are parsed into integers and held in a `BTreeMap`, so the
//! minimum and maximum present steps are the first and last entries instead of
//! a lexical sort of the key strings.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::kernel::Kernel;

/// Bias snapshot: one flat vector per step.
pub type BiasSnapshot = TensorSnapshot<Vec<f64>>;

/// Kernel snapshot: one `row, col, input, output` tensor per step.
pub type KernelSnapshot = TensorSnapshot<Kernel>;

/// Mapping from training step to the tensor recorded at that step.
///
/// Steps are sparse in general; nothing guarantees a contiguous range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TensorSnapshot<T> {
    #[serde(default = "BTreeMap::new")]
    pub steps: BTreeMap<u64, T>,
}

impl<T> Default for TensorSnapshot<T> {
    fn default() -> Self {
        Self { steps: BTreeMap::new() }
    }
}

impl<T> TensorSnapshot<T> {
    /// Build a snapshot from `(step, tensor)` pairs. Later duplicates win.
    pub fn from_steps(steps: impl IntoIterator<Item = (u64, T)>) -> Self {
        Self { steps: steps.into_iter().collect() }
    }

    /// Tensor recorded at `step`, if that step is present.
    #[must_use]
    pub fn at(&self, step: u64) -> Option<&T> {
        self.steps.get(&step)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Present step keys in ascending order.
    pub fn step_keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.steps.keys().copied()
    }

    /// Numeric minimum and maximum of the present step keys.
    ///
    /// `None` for an empty snapshot.
    #[must_use]
    pub fn bounds(&self) -> Option<StepBounds> {
        let (&min, _) = self.steps.first_key_value()?;
        let (&max, _) = self.steps.last_key_value()?;
        Some(StepBounds { min, max })
    }
}

/// Inclusive step range covered by a snapshot's keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepBounds {
    pub min: u64,
    pub max: u64,
}

impl StepBounds {
    /// Pull `step` into `[min, max]`.
    #[must_use]
    pub fn clamp(self, step: u64) -> u64 {
        step.clamp(self.min, self.max)
    }
}
