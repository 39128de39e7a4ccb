//! Helpers shared by the member pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `format` turns optional member attributes into table cells with the
//! placeholder fallback; `session` reads the stored login token and role.

pub mod format;
pub mod session;
