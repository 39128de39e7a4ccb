//! Display formatting shared by the member views.
//!
//! Every member attribute may be missing, so each helper returns the
//! `Non spécifié` placeholder instead of an empty cell.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::Date;
use time::macros::format_description;

use crate::net::types::{LinkType, LinkTypeCode, ParentRef};

pub const PLACEHOLDER: &str = "Non spécifié";

/// The value itself, or the placeholder when absent or blank.
pub fn or_placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => PLACEHOLDER.to_owned(),
    }
}

/// Format an API date as `DD/MM/YYYY`.
///
/// Accepts `YYYY-MM-DD` and timestamps starting with it (the time part is
/// dropped, no timezone shift). Anything else is returned unchanged.
pub fn format_birth_date(raw: &str) -> String {
    let raw = raw.trim();
    let date_part = raw.split(|c: char| c == 'T' || c == ' ').next().unwrap_or(raw);
    Date::parse(date_part, format_description!("[year]-[month]-[day]"))
        .ok()
        .and_then(|date| date.format(format_description!("[day]/[month]/[year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

pub fn birth_date_cell(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(text) if !text.is_empty() => format_birth_date(text),
        _ => PLACEHOLDER.to_owned(),
    }
}

/// `"<given> <family>"` for a parent, only when both the reference id and the
/// denormalized names are present.
pub fn parent_name(id: Option<&str>, parent: Option<&ParentRef>) -> String {
    let has_id = id.is_some_and(|id| !id.trim().is_empty());
    let Some(parent) = parent.filter(|_| has_id) else {
        return PLACEHOLDER.to_owned();
    };
    let name = [parent.given_name.as_deref(), parent.family_name.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if name.is_empty() { PLACEHOLDER.to_owned() } else { name }
}

/// Reverse lookup of a link-type code against the fetched set.
pub fn link_type_description(code: Option<&LinkTypeCode>, link_types: &[LinkType]) -> String {
    let Some(code) = code.filter(|c| !c.as_str().trim().is_empty()) else {
        return PLACEHOLDER.to_owned();
    };
    let description = link_types
        .iter()
        .find(|link| link.id == *code)
        .map(|link| link.description.as_str());
    or_placeholder(description)
}
