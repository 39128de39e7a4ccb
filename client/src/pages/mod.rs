//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetch orchestration and delegates rendering
//! rules to the pure models in `state`.

pub mod member_detail;
pub mod member_list;
