#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Deriving new URLs from existing ones.
///
/// This suite covers:
/// - Builder replace flows via `to_builder`
/// - The `encoded` flag on replacement values
/// - Parameter and query set/delete operations
/// - Value semantics: the source URL never changes
use imurl::{ParamMap, ParamValue, Url, UrlError};

#[test]
fn test_replace_scheme() {
    let url = Url::parse("http://example.com/path").unwrap();
    let secure = url.to_builder().scheme("https").build().unwrap();
    assert_eq!(secure.as_str(), "https://example.com/path");
    assert_eq!(url.as_str(), "http://example.com/path");
}

#[test]
fn test_replace_port_and_remove_port() {
    let url = Url::parse("https://example.com/").unwrap();
    let with_port = url.to_builder().port(8080).build().unwrap();
    assert_eq!(with_port.as_str(), "https://example.com:8080/");

    let without = with_port.to_builder().clear_port().build().unwrap();
    assert_eq!(without, url);
}

#[test]
fn test_replace_raw_path_is_encoded() {
    let url = Url::parse("https://example.com").unwrap();
    let searched = url.to_builder().path("/search something").build().unwrap();
    assert_eq!(searched.as_str(), "https://example.com/search%20something");
    assert_eq!(searched.path().as_deref(), Some("/search something"));
}

#[test]
fn test_replace_pre_encoded_path() {
    let url = Url::parse("https://example.com/path").unwrap();
    let replaced = url
        .to_builder()
        .encoded(true)
        .path("/a/path%20with%20spaces")
        .build()
        .unwrap();
    assert_eq!(replaced.path().as_deref(), Some("/a/path with spaces"));
    assert_eq!(replaced.as_str(), "https://example.com/a/path%20with%20spaces");
}

#[test]
fn test_replace_does_not_reencode_untouched_components() {
    // A stored byte form our encoder would not produce stays
    // byte-identical through an unrelated replace
    let url = Url::builder()
        .scheme("https")
        .host("example.com")
        .path("/a%2Fb")
        .encoded(true)
        .build()
        .unwrap();
    let replaced = url.to_builder().fragment("top").build().unwrap();
    assert_eq!(replaced.as_str(), "https://example.com/a%2Fb#top");
}

#[test]
fn test_replace_host_empty_vs_absent() {
    let url = Url::builder()
        .scheme("file")
        .path("/etc/motd")
        .build()
        .unwrap();
    assert_eq!(url.as_str(), "file:/etc/motd");

    let marked = url.to_builder().host("").build().unwrap();
    assert_eq!(marked.as_str(), "file:///etc/motd");
    assert_eq!(marked.host().as_deref(), Some(""));

    let cleared = marked.to_builder().clear_host().build().unwrap();
    assert_eq!(cleared, url);
}

#[test]
fn test_set_query_adds_and_replaces() {
    let url = Url::parse("https://example.com/").unwrap();
    let with_q = url.set_query("q", "first");
    assert_eq!(with_q.as_str(), "https://example.com/?q=first");

    let replaced = with_q.set_query("q", "second");
    assert_eq!(replaced.as_str(), "https://example.com/?q=second");

    // Replacement happens in place, preserving key order
    let ordered = Url::parse("https://example.com/?a=1&b=2&c=3").unwrap();
    let changed = ordered.set_query("b", "20");
    assert_eq!(changed.as_str(), "https://example.com/?a=1&b=20&c=3");
}

#[test]
fn test_set_query_encodes_raw_values() {
    let url = Url::parse("https://example.com/").unwrap();
    let searched = url.set_query("q", "a phrase");
    assert_eq!(searched.as_str(), "https://example.com/?q=a%20phrase");
}

#[test]
fn test_set_query_flag_and_list() {
    let url = Url::parse("https://example.com/").unwrap();
    let flagged = url.set_query("debug", ParamValue::Flag);
    assert_eq!(flagged.as_str(), "https://example.com/?debug");

    let listed = url.set_query("q", vec!["param", "another"]);
    assert_eq!(listed.as_str(), "https://example.com/?q=param&q=another");
}

#[test]
fn test_get_query_missing_key_fails() {
    let url = Url::parse("https://example.com/?a=1").unwrap();
    assert_eq!(
        url.get_query("missing").unwrap_err(),
        UrlError::KeyNotFound("missing".into())
    );
}

#[test]
fn test_delete_query() {
    let url = Url::parse("https://example.com/?a=1&b=2").unwrap();
    let trimmed = url.delete_query("a").unwrap();
    assert_eq!(trimmed.as_str(), "https://example.com/?b=2");
    assert!(!trimmed.has_query("a"));

    assert_eq!(
        trimmed.delete_query("a").unwrap_err(),
        UrlError::KeyNotFound("a".into())
    );
}

#[test]
fn test_delete_last_query_drops_the_question_mark() {
    let url = Url::parse("https://example.com/?a=1").unwrap();
    let bare = url.delete_query("a").unwrap();
    assert_eq!(bare.as_str(), "https://example.com/");
    assert_eq!(bare.query(), None);
}

#[test]
fn test_parameter_operations() {
    let url = Url::parse("https://example.com/doc").unwrap();
    let tagged = url.set_parameter("version", "1.2");
    assert_eq!(tagged.as_str(), "https://example.com/doc;version=1.2");
    assert!(tagged.has_parameter("version"));
    assert_eq!(
        tagged.get_parameter("version").unwrap(),
        ParamValue::from("1.2")
    );

    let untagged = tagged.delete_parameter("version").unwrap();
    assert_eq!(untagged, url);
}

#[test]
fn test_query_keys_with_spaces_roundtrip() {
    let url = Url::parse("https://example.com/").unwrap();
    let set = url.set_query("a key", "a value");
    assert_eq!(set.as_str(), "https://example.com/?a%20key=a%20value");
    assert!(set.has_query("a key"));
    assert_eq!(set.get_query("a key").unwrap().as_str(), Some("a value"));
}

#[test]
fn test_query_map_view_is_a_copy() {
    let url = Url::parse("https://example.com/?a=1").unwrap();
    let mut map = url.query_map();
    map.set("a", "changed");
    map.set("b", "2");
    // The URL is untouched by edits to the returned map
    assert_eq!(url.as_str(), "https://example.com/?a=1");
}

#[test]
fn test_edited_map_builds_a_new_url() {
    let url = Url::parse("https://example.com/?a=1").unwrap();
    let mut map = url.query_map();
    map.set("b", "2");
    let extended = url.to_builder().query(map).build().unwrap();
    assert_eq!(extended.as_str(), "https://example.com/?a=1&b=2");
}

#[test]
fn test_replace_whole_query_map() {
    let query: ParamMap = [("query", vec!["param", "another"])].into_iter().collect();
    let url = Url::parse("http://example.com/")
        .unwrap()
        .to_builder()
        .query(query)
        .build()
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://example.com/?query=param&query=another"
    );
}

#[test]
fn test_components_roundtrip_losslessly() {
    let url = Url::parse("https://u:p@example.com:44/x%20y;a=1?b=2#frag").unwrap();
    let rebuilt = Url::from_components(url.components().clone());
    assert_eq!(rebuilt, url);

    let consumed = Url::from_components(url.clone().into_components());
    assert_eq!(consumed, url);
}

#[test]
fn test_chained_derivations() {
    let url = Url::parse("http://example.com").unwrap();
    let derived = url
        .to_builder()
        .scheme("https")
        .path("/api/v2")
        .build()
        .unwrap()
        .set_query("page", "2")
        .set_query("sort", "desc");
    assert_eq!(
        derived.as_str(),
        "https://example.com/api/v2?page=2&sort=desc"
    );
    assert_eq!(url.as_str(), "http://example.com");
}
