//! Networking for the tensors endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The endpoint belongs to the host application; `api` only builds requests
//! and decodes responses into `tensors` types.

pub mod api;
