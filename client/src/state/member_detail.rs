//! Member detail state: two independent loads combined into one view.
//!
//! DESIGN
//! ======
//! The member record and the link-type set load concurrently with no ordering
//! between their completions. Each keeps its own tri-state; `view` combines
//! them with a fixed precedence so that exactly one panel renders.
//!
//! The member load is refetched when the route id or the viewer's role
//! changes. Each fetch takes a `RequestGeneration` ticket and completions
//! carrying an older ticket are dropped.

#[cfg(test)]
#[path = "member_detail_test.rs"]
mod member_detail_test;

use crate::net::error::ApiError;
use crate::net::types::{LinkType, Member};
use crate::state::request::RequestGeneration;
use crate::util::format::{birth_date_cell, link_type_description, or_placeholder, parent_name};

pub const DETAIL_ERROR_MESSAGE: &str = "Erreur lors de la récupération des détails du membre.";
pub const NOT_FOUND_MESSAGE: &str = "Membre non trouvé.";
pub const LINK_TYPES_ERROR_MESSAGE: &str = "Erreur lors de la récupération des types de lien.";
pub const MEMBER_LOADING_MESSAGE: &str = "Chargement des détails du membre...";
pub const LINK_TYPES_LOADING_MESSAGE: &str = "Chargement des types de lien...";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum MemberLoad {
    #[default]
    Loading,
    Failed,
    Loaded(Option<Member>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LinkTypesLoad {
    #[default]
    Loading,
    Failed,
    Loaded(Vec<LinkType>),
}

/// What became of a member fetch completion once the page tried to apply it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberCompletion {
    Applied,
    Stale,
    /// The page state was disposed before the result arrived.
    Unmounted,
}

impl MemberCompletion {
    /// Classify the return of `try_update(|s| s.apply_member_result(..))`.
    pub fn from_update(applied: Option<bool>) -> Self {
        match applied {
            Some(true) => Self::Applied,
            Some(false) => Self::Stale,
            None => Self::Unmounted,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberDetailState {
    pub member: MemberLoad,
    pub link_types: LinkTypesLoad,
    generation: RequestGeneration,
}

impl MemberDetailState {
    /// Start a member fetch. Returns the ticket its completion must carry.
    pub fn begin_member_fetch(&mut self) -> RequestGeneration {
        self.generation = self.generation.next();
        self.member = MemberLoad::Loading;
        self.generation
    }

    /// Apply a member fetch completion. Returns `false` and leaves the state
    /// untouched when `ticket` is stale.
    pub fn apply_member_result(
        &mut self,
        ticket: RequestGeneration,
        result: Result<Option<Member>, ApiError>,
    ) -> bool {
        if !ticket.is_current(self.generation) {
            return false;
        }
        self.member = match result {
            Ok(member) => MemberLoad::Loaded(member),
            Err(_) => MemberLoad::Failed,
        };
        true
    }

    pub fn apply_link_types_result(&mut self, result: Result<Vec<LinkType>, ApiError>) {
        self.link_types = match result {
            Ok(link_types) => LinkTypesLoad::Loaded(link_types),
            Err(_) => LinkTypesLoad::Failed,
        };
    }

    pub fn generation(&self) -> RequestGeneration {
        self.generation
    }

    pub fn view(&self) -> DetailView {
        match &self.member {
            MemberLoad::Loading => DetailView::LoadingMember,
            MemberLoad::Failed => DetailView::MemberError,
            MemberLoad::Loaded(None) => DetailView::NotFound,
            MemberLoad::Loaded(Some(member)) => match &self.link_types {
                LinkTypesLoad::Loading => DetailView::LoadingLinkTypes,
                LinkTypesLoad::Failed => DetailView::LinkTypesError,
                LinkTypesLoad::Loaded(link_types) => DetailView::Ready(field_rows(member, link_types)),
            },
        }
    }
}

/// What the detail page renders, in precedence order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailView {
    LoadingMember,
    MemberError,
    NotFound,
    LoadingLinkTypes,
    LinkTypesError,
    Ready(Vec<FieldRow>),
}

impl DetailView {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::LoadingMember => Some(MEMBER_LOADING_MESSAGE),
            Self::MemberError => Some(DETAIL_ERROR_MESSAGE),
            Self::NotFound => Some(NOT_FOUND_MESSAGE),
            Self::LoadingLinkTypes => Some(LINK_TYPES_LOADING_MESSAGE),
            Self::LinkTypesError => Some(LINK_TYPES_ERROR_MESSAGE),
            Self::Ready(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::LoadingMember | Self::LoadingLinkTypes)
    }

    /// Whether the panel offers the "back to list" escape hatch.
    pub fn offers_back_to_list(&self) -> bool {
        matches!(self, Self::MemberError | Self::NotFound)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRow {
    pub label: &'static str,
    pub value: String,
}

impl FieldRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// Labeled fields of the detail table, in display order.
pub fn field_rows(member: &Member, link_types: &[LinkType]) -> Vec<FieldRow> {
    vec![
        FieldRow::new("Nom", or_placeholder(member.family_name.as_deref())),
        FieldRow::new("Prénom", or_placeholder(member.given_name.as_deref())),
        FieldRow::new("Date de naissance", birth_date_cell(member.birth_date.as_deref())),
        FieldRow::new("Sexe", or_placeholder(member.sex.as_deref())),
        FieldRow::new("État matrimonial", or_placeholder(member.marital_status.as_deref())),
        FieldRow::new(
            "Type de lien",
            link_type_description(member.link_type.as_ref(), link_types),
        ),
        FieldRow::new(
            "Père",
            parent_name(member.father_id.as_deref(), member.father.as_ref()),
        ),
        FieldRow::new(
            "Mère",
            parent_name(member.mother_id.as_deref(), member.mother.as_ref()),
        ),
        FieldRow::new("Conjoint", or_placeholder(member.spouse.as_deref())),
        FieldRow::new("Profession", or_placeholder(member.profession.as_deref())),
        FieldRow::new("Religion", or_placeholder(member.religion.as_deref())),
    ]
}
