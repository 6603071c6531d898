//! Tests for outline construction.

use super::{build_outline, OutlineBuilder, OutlineNode, ParameterEntry};

fn entry(name: &str, value: &str, is_url_value: bool) -> ParameterEntry {
    ParameterEntry {
        name: name.to_string(),
        value: value.to_string(),
        is_url_value,
        children: None,
        truncated: false,
    }
}

/// `https://level{n}.example/?next=<level n-1>`, bottoming out at `?leaf=1`.
fn nested_chain(levels: usize) -> String {
    let mut url = "https://level0.example/?leaf=1".to_string();
    for n in 1..=levels {
        let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
        url = format!("https://level{n}.example/?next={encoded}");
    }
    url
}

#[test]
fn host_path_and_parameters_in_order() {
    let node = build_outline("https://example.com/path?a=1&b=2").unwrap();
    assert_eq!(
        node,
        OutlineNode {
            host: Some("https://example.com".to_string()),
            host_and_path: Some("https://example.com/path".to_string()),
            parameters: vec![entry("a", "1", false), entry("b", "2", false)],
        }
    );
}

#[test]
fn url_value_gets_children() {
    let node = build_outline("https://example.com/redirect?url=https://evil.com/x?y=1").unwrap();
    let url = node.parameter("url").unwrap();
    assert!(url.is_url_value);
    assert_eq!(url.value, "https://evil.com/x?y=1");
    let children = url.children.as_ref().unwrap();
    assert_eq!(children.host.as_deref(), Some("https://evil.com"));
    assert_eq!(children.host_and_path.as_deref(), Some("https://evil.com/x"));
    assert_eq!(children.parameters, vec![entry("y", "1", false)]);
}

#[test]
fn url_value_with_query_right_after_host_is_flagged() {
    let node = build_outline("https://example.com/?next=https%3A%2F%2Finner.example%3Fa%3D1").unwrap();
    let next = node.parameter("next").unwrap();
    assert_eq!(next.value, "https://inner.example?a=1");
    assert!(next.is_url_value);
    let children = next.children.as_ref().unwrap();
    assert_eq!(children.host.as_deref(), Some("https://inner.example"));
    assert_eq!(children.host_and_path.as_deref(), Some("https://inner.example"));
    assert_eq!(children.parameters, vec![entry("a", "1", false)]);
}

#[test]
fn encoded_nested_url_is_decoded_before_recursing() {
    let node =
        build_outline("https://t.example/r?u=https%3A%2F%2Fshop.example%2Fitem%3Fid%3D7%26ref%3Dmail")
            .unwrap();
    let u = node.parameter("u").unwrap();
    assert_eq!(u.value, "https://shop.example/item?id=7&ref=mail");
    let children = u.children.as_ref().unwrap();
    let names: Vec<_> = children.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["id", "ref"]);
}

#[test]
fn opaque_uri_has_no_outline() {
    assert!(build_outline("mailto:test@example.com").is_none());
    assert!(build_outline("urn:isbn:0451450523").is_none());
}

#[test]
fn repeated_parameter_keeps_first_value() {
    let node = build_outline("https://example.com/?a=1&a=2").unwrap();
    assert_eq!(node.parameters, vec![entry("a", "1", false)]);
}

#[test]
fn no_query_means_no_parameters() {
    let node = build_outline("https://example.com").unwrap();
    assert_eq!(node.host.as_deref(), Some("https://example.com"));
    assert_eq!(node.host_and_path.as_deref(), Some("https://example.com"));
    assert!(!node.has_parameters());
}

#[test]
fn relative_input_has_no_host_lines() {
    let node = build_outline("search?q=rust").unwrap();
    assert!(node.host.is_none());
    assert!(node.host_and_path.is_none());
    assert_eq!(node.parameters, vec![entry("q", "rust", false)]);
}

#[test]
fn url_value_without_parameters_has_no_children() {
    let node = build_outline("https://example.com/?home=https://example.org/").unwrap();
    let home = node.parameter("home").unwrap();
    assert!(home.is_url_value);
    assert!(!home.has_children());
    assert!(!home.truncated);
}

#[test]
fn schemeless_link_value_is_flagged() {
    let node = build_outline("https://example.com/?site=www.example.org").unwrap();
    assert!(node.parameter("site").unwrap().is_url_value);
}

#[test]
fn non_url_value_with_query_still_expands() {
    let node = build_outline("https://example.com/?state=page?tab=2").unwrap();
    let state = node.parameter("state").unwrap();
    assert!(!state.is_url_value);
    let children = state.children.as_ref().unwrap();
    assert!(children.host.is_none());
    assert_eq!(children.parameters, vec![entry("tab", "2", false)]);
}

#[test]
fn opaque_value_is_not_expanded() {
    let node = build_outline("https://example.com/?to=mailto:a@example.com?subject=x").unwrap();
    let to = node.parameter("to").unwrap();
    assert!(!to.has_children());
    assert!(!to.truncated);
}

#[test]
fn deep_nesting_within_limit_is_fully_expanded() {
    let url = nested_chain(3);
    let root = OutlineBuilder::new(3).build(&url).unwrap();
    let mut node = &root;
    for level in (0..3).rev() {
        let next = node.parameter("next").unwrap();
        assert!(!next.truncated);
        node = next.children.as_ref().unwrap();
        assert_eq!(node.host.as_deref(), Some(format!("https://level{level}.example").as_str()));
    }
    assert_eq!(node.parameters, vec![entry("leaf", "1", false)]);
}

#[test]
fn nesting_past_limit_is_truncated() {
    let url = nested_chain(5);
    let root = OutlineBuilder::new(2).build(&url).unwrap();
    let first = root.parameter("next").unwrap().children.as_ref().unwrap();
    let second = first.parameter("next").unwrap().children.as_ref().unwrap();
    let cut = second.parameter("next").unwrap();
    assert!(cut.truncated);
    assert!(cut.children.is_none());
    assert!(cut.is_url_value);
}

#[test]
fn build_is_deterministic() {
    let url = "https://example.com/redirect?url=https://evil.com/x?y=1&z=3";
    assert_eq!(build_outline(url), build_outline(url));
}

#[test]
fn serialized_form_omits_empty_fields() {
    let node = build_outline("https://example.com/?a=1").unwrap();
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "host": "https://example.com",
            "host_and_path": "https://example.com/",
            "parameters": [
                { "name": "a", "value": "1", "is_url_value": false }
            ]
        })
    );
}
