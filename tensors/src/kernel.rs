//! 4-D kernel slicing.
//!
//! A kernel at one step is indexed `[row][col][input][output]`. The viewer
//! shows one `(input, output)` channel pair at a time, which reduces the
//! kernel to a `rows × cols` grid of scalars.
//!
//! Nested arrays from the endpoint are not guaranteed to be rectangular, so
//! every lookup is checked and a missing cell is `None` rather than a panic.

#[cfg(test)]
#[path = "kernel_test.rs"]
mod kernel_test;

use crate::snapshot::KernelSnapshot;

/// One step of a kernel: `row, col, input-channel, output-channel`.
pub type Kernel = Vec<Vec<Vec<Vec<f64>>>>;

/// Channel counts of a kernel, read from its first cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelBounds {
    pub inputs: usize,
    pub outputs: usize,
}

impl ChannelBounds {
    /// Channel counts taken from `kernel[0][0]` and `kernel[0][0][0]`.
    ///
    /// Degrades to zero at the first missing level.
    #[must_use]
    pub fn of(kernel: &Kernel) -> Self {
        let cell = kernel.first().and_then(|row| row.first());
        Self {
            inputs: cell.map_or(0, Vec::len),
            outputs: cell.and_then(|c| c.first()).map_or(0, Vec::len),
        }
    }

    /// Channel counts at `step`, zero when the step is absent.
    #[must_use]
    pub fn at_step(snapshot: &KernelSnapshot, step: u64) -> Self {
        snapshot.at(step).map(Self::of).unwrap_or_default()
    }

    /// Highest selectable input channel, `None` when there are no inputs.
    #[must_use]
    pub fn max_input(self) -> Option<usize> {
        self.inputs.checked_sub(1)
    }

    /// Highest selectable output channel, `None` when there are no outputs.
    #[must_use]
    pub fn max_output(self) -> Option<usize> {
        self.outputs.checked_sub(1)
    }

    /// Pull a channel pair into range. Empty axes collapse to zero.
    #[must_use]
    pub fn clamp(self, input: usize, output: usize) -> (usize, usize) {
        (
            self.max_input().map_or(0, |max| input.min(max)),
            self.max_output().map_or(0, |max| output.min(max)),
        )
    }
}

/// The `rows × cols` grid of `kernel[row][col][input][output]`.
///
/// Cells whose channel index is out of range for that cell are `None`.
#[must_use]
pub fn slice(kernel: &Kernel, input: usize, output: usize) -> Vec<Vec<Option<f64>>> {
    kernel
        .iter()
        .map(|row| {
            row.iter()
                .map(|col| col.get(input).and_then(|inputs| inputs.get(output)).copied())
                .collect()
        })
        .collect()
}

/// Slice the kernel recorded at `step`. An absent step yields an empty grid.
#[must_use]
pub fn grid_at(snapshot: &KernelSnapshot, step: u64, input: usize, output: usize) -> Vec<Vec<Option<f64>>> {
    snapshot
        .at(step)
        .map(|kernel| slice(kernel, input, output))
        .unwrap_or_default()
}
