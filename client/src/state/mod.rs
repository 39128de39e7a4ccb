//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split per view (`member_list`, `member_detail`) plus the shared
//! session (`auth`). Each view state is a plain value with pure transition
//! and render-model functions; pages wrap it in a signal.

pub mod auth;
pub mod member_detail;
pub mod member_list;
pub mod request;
