//! Property-based tests using proptest.
//!
//! Covers the naming and encoding helpers that every block goes through:
//! titles and ids derived from operation names, URI encoding for SigV4, query
//! flattening for RDS, and XML parsing of untrusted responses.

use aws_blocks::blocks::operation::{humanize, lower_camel};
use aws_blocks::blocks::schema::{list_of, string};
use aws_blocks::client::protocol::{query, xml};
use aws_blocks::client::signing::uri_encode;
use percent_encoding::percent_decode_str;
use proptest::prelude::*;
use serde_json::Value;

// ============================================================================
// Strategies
// ============================================================================

/// AWS-style operation names: `DeleteAddon`, `CreateDBInstance`, `GetIPSet`
fn operation_name() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[A-Z][a-z]{1,10}",
            prop::sample::select(vec!["DB", "IP", "ACL", "XSS", "SQL"]).prop_map(String::from),
        ],
        1..6,
    )
    .prop_map(|words| words.concat())
}

// ============================================================================
// Naming
// ============================================================================

proptest! {
    #[test]
    fn humanize_only_inserts_spaces(name in operation_name()) {
        let title = humanize(&name);
        prop_assert_eq!(title.replace(' ', ""), name);
        prop_assert!(!title.starts_with(' '));
        prop_assert!(!title.contains("  "));
    }

    #[test]
    fn lower_camel_only_changes_case(name in operation_name()) {
        let id = lower_camel(&name);
        prop_assert!(id.eq_ignore_ascii_case(&name));
        prop_assert!(id.starts_with(|c: char| c.is_ascii_lowercase()));
    }
}

// ============================================================================
// Encoding
// ============================================================================

proptest! {
    #[test]
    fn uri_encode_is_reversible(input in "\\PC{0,64}") {
        let encoded = uri_encode(&input);
        prop_assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.~%".contains(c)));
        let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
        prop_assert_eq!(decoded, input);
    }

    #[test]
    fn query_lists_are_numbered_from_one(items in prop::collection::vec("[a-z0-9-]{1,12}", 1..10)) {
        let shape = list_of(string(), "VpcSecurityGroupId");
        let value = Value::from(items.clone());
        let mut out = Vec::new();
        query::flatten("VpcSecurityGroupIds", Some(&shape), &value, &mut out);

        prop_assert_eq!(out.len(), items.len());
        for (index, ((key, text), item)) in out.iter().zip(&items).enumerate() {
            prop_assert_eq!(key, &format!("VpcSecurityGroupIds.VpcSecurityGroupId.{}", index + 1));
            prop_assert_eq!(text, item);
        }
    }

    #[test]
    fn xml_parse_never_panics(input in "\\PC{0,256}") {
        let _ = xml::parse(&input);
    }

    #[test]
    fn xml_text_round_trips(text in "[a-zA-Z0-9 ._:/-]{1,40}") {
        let document = format!("<Root>\n  <Value>{}</Value>\n</Root>", text);
        let root = xml::parse(&document).unwrap();
        prop_assert_eq!(root.child_text("Value"), Some(text.as_str()));
        prop_assert_eq!(root.text.as_str(), "");
    }
}
