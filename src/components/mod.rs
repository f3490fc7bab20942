//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Viewers take their layer data as props from the panel and own only their
//! local selection and display state. Nothing is registered globally.

pub mod bias_view;
pub mod controls;
pub mod kernel_view;
