//! Client-side state for the panel.
//!
//! DESIGN
//! ======
//! `panel` owns pagination and the fetched layer list; `viewer` owns the
//! per-viewer selections and display settings. Both are plain structs held in
//! `RwSignal`s by the views so the logic stays testable without a browser.

pub mod panel;
pub mod viewer;
