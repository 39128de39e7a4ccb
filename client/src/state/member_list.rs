//! Member list state and row model.
//!
//! DESIGN
//! ======
//! The page holds one `MemberListState` and a `SexFilter`. Everything the
//! table shows is derived from those two values plus the viewer's role by the
//! pure functions below, so rendering rules are testable without a DOM.

#[cfg(test)]
#[path = "member_list_test.rs"]
mod member_list_test;

use crate::net::error::ApiError;
use crate::net::types::Member;
use crate::routes::{detail_route, edit_route};
use crate::state::auth::Role;
use crate::util::format::{birth_date_cell, or_placeholder};

pub const LIST_ERROR_MESSAGE: &str = "Erreur lors de la récupération des membres.";
pub const LIST_EMPTY_MESSAGE: &str = "Aucun membre trouvé.";
/// Shown inside the table when the filter leaves no rows.
pub const NO_DATA_MESSAGE: &str = "Aucun membre trouvé";

pub const COLUMNS: [&str; 7] = [
    "Nom",
    "Prénom",
    "Date de naissance",
    "Profession",
    "Religion",
    "Conjoint",
    "Actions",
];

/// Terminal and in-flight states of the list fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum MemberListState {
    #[default]
    Loading,
    Error,
    Empty,
    Ready(Vec<Member>),
}

impl MemberListState {
    pub fn from_result(result: Result<Vec<Member>, ApiError>) -> Self {
        match result {
            Ok(members) if members.is_empty() => Self::Empty,
            Ok(members) => Self::Ready(members),
            Err(_) => Self::Error,
        }
    }

    /// User-facing message for the failure states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Error => Some(LIST_ERROR_MESSAGE),
            Self::Empty => Some(LIST_EMPTY_MESSAGE),
            Self::Loading | Self::Ready(_) => None,
        }
    }

    pub fn members(&self) -> &[Member] {
        match self {
            Self::Ready(members) => members,
            _ => &[],
        }
    }
}

/// Client-side sex filter over the fetched rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SexFilter {
    #[default]
    All,
    Male,
    Female,
}

impl SexFilter {
    pub const OPTIONS: [Self; 3] = [Self::All, Self::Male, Self::Female];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Tous",
            Self::Male => "Masculin",
            Self::Female => "Féminin",
        }
    }

    /// Form value of the `<select>` option.
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Male => "Masculin",
            Self::Female => "Féminin",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::OPTIONS
            .into_iter()
            .find(|filter| filter.value() == value)
            .unwrap_or_default()
    }

    pub fn matches(self, member: &Member) -> bool {
        match self {
            Self::All => true,
            Self::Male | Self::Female => member
                .sex
                .as_deref()
                .is_some_and(|sex| sex.trim().to_lowercase() == self.value().to_lowercase()),
        }
    }
}

/// Per-row navigation action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowAction {
    Detail,
    Edit,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Detail => "Détail",
            Self::Edit => "Modifier",
        }
    }

    pub fn route(self, member_id: &str) -> String {
        match self {
            Self::Detail => detail_route(member_id),
            Self::Edit => edit_route(member_id),
        }
    }
}

/// Actions offered on every row for a viewer with `role`.
pub fn row_actions(role: &Role) -> Vec<RowAction> {
    if role.is_admin() {
        vec![RowAction::Detail, RowAction::Edit]
    } else {
        vec![RowAction::Detail]
    }
}

/// One rendered table row: the six data cells plus actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberRow {
    pub id: String,
    pub cells: [String; 6],
    pub actions: Vec<RowAction>,
}

pub fn member_row(member: &Member, role: &Role) -> MemberRow {
    MemberRow {
        id: member.id.clone(),
        cells: [
            or_placeholder(member.family_name.as_deref()),
            or_placeholder(member.given_name.as_deref()),
            birth_date_cell(member.birth_date.as_deref()),
            or_placeholder(member.profession.as_deref()),
            or_placeholder(member.religion.as_deref()),
            or_placeholder(member.spouse.as_deref()),
        ],
        actions: row_actions(role),
    }
}

/// Rows shown for `state` after applying `filter`.
pub fn visible_rows(state: &MemberListState, filter: SexFilter, role: &Role) -> Vec<MemberRow> {
    state
        .members()
        .iter()
        .filter(|member| filter.matches(member))
        .map(|member| member_row(member, role))
        .collect()
}
