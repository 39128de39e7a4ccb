use super::*;

fn parent(given: Option<&str>, family: Option<&str>) -> ParentRef {
    ParentRef {
        given_name: given.map(str::to_owned),
        family_name: family.map(str::to_owned),
    }
}

fn link_types() -> Vec<LinkType> {
    vec![
        LinkType { id: LinkTypeCode::from(1), description: "Fils".to_owned() },
        LinkType { id: LinkTypeCode::from(2), description: "Fille".to_owned() },
        LinkType { id: LinkTypeCode::from("conjoint"), description: "Conjoint".to_owned() },
    ]
}

// =============================================================
// Placeholder
// =============================================================

#[test]
fn or_placeholder_keeps_value() {
    assert_eq!(or_placeholder(Some("Médecin")), "Médecin");
}

#[test]
fn or_placeholder_replaces_missing_and_blank() {
    assert_eq!(or_placeholder(None), PLACEHOLDER);
    assert_eq!(or_placeholder(Some("")), PLACEHOLDER);
    assert_eq!(or_placeholder(Some("   ")), PLACEHOLDER);
}

// =============================================================
// Birth dates
// =============================================================

#[test]
fn birth_date_formats_plain_date() {
    assert_eq!(format_birth_date("1990-05-12"), "12/05/1990");
}

#[test]
fn birth_date_formats_iso_timestamp() {
    assert_eq!(format_birth_date("1990-05-12T00:00:00.000Z"), "12/05/1990");
}

#[test]
fn birth_date_pads_single_digit_parts() {
    assert_eq!(format_birth_date("2001-01-03"), "03/01/2001");
}

#[test]
fn birth_date_returns_raw_when_unparseable() {
    assert_eq!(format_birth_date("vers 1950"), "vers 1950");
    assert_eq!(format_birth_date("1990-13-40"), "1990-13-40");
}

#[test]
fn birth_date_cell_uses_placeholder_for_null() {
    assert_eq!(birth_date_cell(None), PLACEHOLDER);
    assert_eq!(birth_date_cell(Some("")), PLACEHOLDER);
}

#[test]
fn birth_date_cell_formats_present_value() {
    assert_eq!(birth_date_cell(Some("1990-05-12")), "12/05/1990");
}

// =============================================================
// Parent names
// =============================================================

#[test]
fn parent_name_requires_id_and_names() {
    let father = parent(Some("Ibrahima"), Some("Diallo"));
    assert_eq!(parent_name(Some("p-1"), Some(&father)), "Ibrahima Diallo");
}

#[test]
fn parent_name_without_id_is_placeholder() {
    let father = parent(Some("Ibrahima"), Some("Diallo"));
    assert_eq!(parent_name(None, Some(&father)), PLACEHOLDER);
    assert_eq!(parent_name(Some(" "), Some(&father)), PLACEHOLDER);
}

#[test]
fn parent_name_without_names_is_placeholder() {
    assert_eq!(parent_name(Some("p-1"), None), PLACEHOLDER);
}

#[test]
fn parent_name_with_partial_names_uses_what_is_present() {
    let mother = parent(Some("Fatou"), None);
    assert_eq!(parent_name(Some("p-2"), Some(&mother)), "Fatou");
    let empty = parent(None, Some(""));
    assert_eq!(parent_name(Some("p-2"), Some(&empty)), PLACEHOLDER);
}

// =============================================================
// Link types
// =============================================================

#[test]
fn link_type_resolves_matching_code() {
    assert_eq!(link_type_description(Some(&LinkTypeCode::from(2)), &link_types()), "Fille");
}

#[test]
fn link_type_matches_numeric_string_code() {
    assert_eq!(link_type_description(Some(&LinkTypeCode::from("1")), &link_types()), "Fils");
}

#[test]
fn link_type_unmatched_code_is_placeholder() {
    assert_eq!(link_type_description(Some(&LinkTypeCode::from(99)), &link_types()), PLACEHOLDER);
}

#[test]
fn link_type_missing_code_is_placeholder() {
    assert_eq!(link_type_description(None, &link_types()), PLACEHOLDER);
}

#[test]
fn link_type_empty_set_is_placeholder() {
    assert_eq!(link_type_description(Some(&LinkTypeCode::from(1)), &[]), PLACEHOLDER);
}

#[test]
fn link_type_zero_code_is_looked_up() {
    let set = vec![LinkType { id: LinkTypeCode::from(0), description: "Chef de famille".to_owned() }];
    assert_eq!(link_type_description(Some(&LinkTypeCode::from(0)), &set), "Chef de famille");
    assert_eq!(link_type_description(Some(&LinkTypeCode::from(0)), &link_types()), PLACEHOLDER);
}
