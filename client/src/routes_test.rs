use super::*;

#[test]
fn detail_route_embeds_id() {
    assert_eq!(detail_route("64f1"), "/detail/64f1");
}

#[test]
fn edit_route_embeds_id() {
    assert_eq!(edit_route("64f1"), "/modifier/64f1");
}
