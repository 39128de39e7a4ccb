use super::*;
use crate::net::types::LinkTypeCode;

fn client(token: Option<&str>) -> ApiClient {
    ApiClient::new(
        ClientConfig::with_base("https://registry.example.com/api"),
        token.map(str::to_owned),
    )
}

// =============================================================
// Endpoint selection
// =============================================================

#[test]
fn detail_endpoint_for_admin_uses_admin_path() {
    assert_eq!(member_detail_endpoint("abc", &Role::Admin), "/admin/member/details/abc");
}

#[test]
fn detail_endpoint_for_user_uses_user_path() {
    assert_eq!(member_detail_endpoint("abc", &Role::User), "/user/member/details/abc");
}

#[test]
fn detail_endpoint_for_other_roles_uses_user_path() {
    assert_eq!(member_detail_endpoint("x1", &Role::Anonymous), "/user/member/details/x1");
    assert_eq!(
        member_detail_endpoint("x1", &Role::Other("EDITOR".to_owned())),
        "/user/member/details/x1"
    );
}

#[test]
fn list_endpoint_is_fixed() {
    assert_eq!(MEMBER_LIST_ENDPOINT, "/user/member/tous");
}

// =============================================================
// Client wiring
// =============================================================

#[test]
fn url_prefixes_base() {
    assert_eq!(
        client(None).url(MEMBER_LIST_ENDPOINT),
        "https://registry.example.com/api/user/member/tous"
    );
}

#[test]
fn authorization_uses_bearer_scheme() {
    assert_eq!(client(Some("jwt-1")).authorization().as_deref(), Some("Bearer jwt-1"));
}

#[test]
fn authorization_absent_without_token() {
    assert!(client(None).authorization().is_none());
}

#[test]
fn for_session_carries_session_token() {
    let auth = AuthState::new(Some("jwt-2".to_owned()), Role::User);
    assert_eq!(ApiClient::for_session(&auth).authorization().as_deref(), Some("Bearer jwt-2"));
}

#[test]
fn fetch_outside_browser_is_unavailable() {
    let result = futures::executor::block_on(client(None).fetch_members());
    assert_eq!(result, Err(ApiError::Unavailable));
}

// =============================================================
// Body decoding
// =============================================================

#[test]
fn decode_body_reads_member_list() {
    let members: Payload<Vec<Member>> =
        decode_body(r#"[{"_id":"1","nom":"Diallo"},{"_id":"2","nom":"Sow"}]"#).unwrap();
    assert_eq!(members.into_inner().len(), 2);
}

#[test]
fn decode_body_reads_detail_envelope() {
    let body: Envelope<Member> = decode_body(r#"{"data":{"_id":"1","type_de_lien":4}}"#).unwrap();
    assert_eq!(body.data.unwrap().link_type, Some(LinkTypeCode::from(4)));
}

#[test]
fn decode_body_reports_malformed_json() {
    let result = decode_body::<Payload<Vec<Member>>>("<html>");
    assert!(matches!(result, Err(ApiError::Decode(_))));
}
