//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render view chrome shared by the member pages and hold no
//! state of their own.

pub mod status_panel;
