//! Route paths shared by pages and the router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME_ROUTE: &str = "/home";
pub const MEMBER_LIST_ROUTE: &str = "/members-list";

pub fn detail_route(id: &str) -> String {
    format!("/detail/{id}")
}

pub fn edit_route(id: &str) -> String {
    format!("/modifier/{id}")
}
