//! Per-viewer selection and display state.
//!
//! DESIGN
//! ======
//! Each kernel/bias viewer owns one selection and one set of display settings.
//! A viewer is rebuilt for every page it shows, and its selection starts
//! clamped to the snapshot's first present step. Channels are clamped when the
//! step changes. Nothing is clamped while rendering, so reading a bound has no
//! side effects.
//!
//! Input handlers receive raw `<input>` values as strings; the setters here
//! parse them and ignore anything unparsable, leaving the previous value.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use tensors::format::{MAX_DECIMALS, Rounding};
use tensors::{BiasSnapshot, ChannelBounds, KernelSnapshot, StepBounds};

pub const FONT_SIZE_MIN: f64 = 0.1;
pub const FONT_SIZE_MAX: f64 = 2.0;
pub const FONT_SIZE_STEP: f64 = 0.05;
pub const DEFAULT_FONT_SIZE: f64 = 1.0;
pub const DEFAULT_DECIMALS: u32 = 2;

/// Font scale and rounding controls shared by both viewer kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplaySettings {
    /// Grid font size in `em`.
    pub font_size: f64,
    pub round: bool,
    pub decimals: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            round: false,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl DisplaySettings {
    #[must_use]
    pub fn rounding(&self) -> Rounding {
        Rounding::from_controls(self.round, self.decimals)
    }

    /// Inline style for the value container.
    #[must_use]
    pub fn container_style(&self) -> String {
        format!("font-size: {}em", tensors::format::to_js_string(self.font_size))
    }

    pub fn set_font_size(&mut self, raw: &str) {
        if let Ok(size) = raw.trim().parse::<f64>() {
            if size.is_finite() {
                self.font_size = size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
            }
        }
    }

    /// Empty input counts as zero decimals, which shows raw values.
    pub fn set_decimals(&mut self, raw: &str) {
        let raw = raw.trim();
        if raw.is_empty() {
            self.decimals = 0;
        } else if let Ok(decimals) = raw.parse::<u32>() {
            self.decimals = decimals.min(MAX_DECIMALS);
        }
    }
}

/// Step and channel pair selected in a kernel viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KernelSelection {
    pub step: u64,
    pub input: usize,
    pub output: usize,
}

impl KernelSelection {
    /// Initial selection for a freshly loaded snapshot: first present step,
    /// channel pair `(0, 0)`.
    #[must_use]
    pub fn for_snapshot(snapshot: &KernelSnapshot) -> Self {
        Self {
            step: snapshot.bounds().map_or(0, |b| b.min),
            input: 0,
            output: 0,
        }
    }

    /// Step range control bounds: `0..=max` present step.
    #[must_use]
    pub fn step_range(snapshot: &KernelSnapshot) -> (u64, u64) {
        (0, snapshot.bounds().map_or(0, |b| b.max))
    }

    pub fn set_step(&mut self, snapshot: &KernelSnapshot, raw: &str) {
        if let Ok(step) = raw.trim().parse::<u64>() {
            self.step = step;
            self.clamp_channels(snapshot);
        }
    }

    pub fn set_input(&mut self, raw: &str) {
        if let Ok(input) = raw.trim().parse::<usize>() {
            self.input = input;
        }
    }

    pub fn set_output(&mut self, raw: &str) {
        if let Ok(output) = raw.trim().parse::<usize>() {
            self.output = output;
        }
    }

    /// Channel counts at the selected step.
    #[must_use]
    pub fn channels(&self, snapshot: &KernelSnapshot) -> ChannelBounds {
        ChannelBounds::at_step(snapshot, self.step)
    }

    // Absent steps render blank; keep the channel pair so scrubbing across a
    // gap does not reset it.
    fn clamp_channels(&mut self, snapshot: &KernelSnapshot) {
        if snapshot.at(self.step).is_none() {
            return;
        }
        (self.input, self.output) = self.channels(snapshot).clamp(self.input, self.output);
    }
}

/// Step selected in a bias viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BiasSelection {
    pub step: u64,
}

impl BiasSelection {
    #[must_use]
    pub fn for_snapshot(snapshot: &BiasSnapshot) -> Self {
        Self { step: snapshot.bounds().map_or(0, |b| b.min) }
    }

    /// Step range control bounds: numeric min and max of present steps.
    #[must_use]
    pub fn step_range(snapshot: &BiasSnapshot) -> Option<StepBounds> {
        snapshot.bounds()
    }

    /// Steps outside the present key range are pulled back into it.
    pub fn set_step(&mut self, snapshot: &BiasSnapshot, raw: &str) {
        if let Ok(step) = raw.trim().parse::<u64>() {
            self.step = snapshot.bounds().map_or(step, |bounds| bounds.clamp(step));
        }
    }
}
