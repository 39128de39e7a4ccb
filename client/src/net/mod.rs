//! Networking modules for the registry REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues authenticated requests, `error` types their failures, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
