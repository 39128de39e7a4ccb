use super::*;

#[test]
fn with_base_strips_trailing_slashes() {
    let config = ClientConfig::with_base("https://registry.example.com/api//");
    assert_eq!(config.api_base_url, "https://registry.example.com/api");
}

#[test]
fn url_joins_with_single_slash() {
    let config = ClientConfig::with_base("https://registry.example.com/api/");
    assert_eq!(
        config.url("/user/member/tous"),
        "https://registry.example.com/api/user/member/tous"
    );
    assert_eq!(
        config.url("user/member/tous"),
        "https://registry.example.com/api/user/member/tous"
    );
}

#[test]
fn empty_base_yields_root_relative_urls() {
    let config = ClientConfig::with_base("");
    assert_eq!(config.url("/user/member/tous"), "/user/member/tous");
}
