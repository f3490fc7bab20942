//! Weight-tensor model shared by the tensors panel.
//!
//! This crate owns the wire representation returned by the tensors endpoint
//! and every piece of logic that does not need a browser: step bounds, 4-D
//! kernel slicing, JavaScript-compatible number display, and page request
//! parameters. The `tensors-panel` crate only binds these to reactive views.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`snapshot`] | Per-step tensor snapshots and their step bounds |
//! | [`kernel`] | 2-D slices and channel bounds of 4-D kernels |
//! | [`format`] | Raw and fixed-decimal value display |
//! | [`page`] | Layer entries, page requests, page responses |

pub mod format;
pub mod kernel;
pub mod page;
pub mod snapshot;

pub use kernel::{ChannelBounds, Kernel};
pub use page::{LayerEntry, PageError, PageQuery, Skipped, SkippedPart, TensorPage};
pub use snapshot::{BiasSnapshot, KernelSnapshot, StepBounds, TensorSnapshot};
