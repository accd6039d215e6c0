use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Opening and closing tag are literal; `(?s)` lets a block span lines.
static JSON_LD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<script type="application/ld\+json">(.*?)</script>"#).expect("valid regex")
});

/// Outcome of parsing one `application/ld+json` script block.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredDataResult {
    Valid { script_index: usize, data: Value },
    Invalid { script_index: usize, error: String },
}

impl StructuredDataResult {
    /// 1-based position of the block in document order.
    pub fn script_index(&self) -> usize {
        match self {
            Self::Valid { script_index, .. } | Self::Invalid { script_index, .. } => *script_index,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The parsed value's `@type`, if it is an object carrying that key.
    pub fn schema_type(&self) -> Option<&Value> {
        self.member("@type")
    }

    /// The parsed value's `name`, if it is an object carrying that key.
    pub fn name(&self) -> Option<&Value> {
        self.member("name")
    }

    // `Value::get` yields `None` for arrays, scalars and null, so a
    // non-object payload simply reports the key as absent.
    fn member(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Valid { data, .. } => data.get(key),
            Self::Invalid { .. } => None,
        }
    }
}

impl Serialize for StructuredDataResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("script_index", &self.script_index())?;
        map.serialize_entry("valid", &self.is_valid())?;
        match self {
            Self::Valid { data, .. } => map.serialize_entry("data", data)?,
            Self::Invalid { error, .. } => map.serialize_entry("error", error)?,
        }
        map.end()
    }
}

/// Parse one block with no nesting cap; `serde_stacker` grows the stack
/// on demand so deep documents neither fail nor overflow.
fn parse_block(text: &str) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Find every JSON-LD block in `html` and parse each one independently.
///
/// Results come back in document order, one per block; a block that fails
/// to parse is reported as [`StructuredDataResult::Invalid`] and does not
/// affect its neighbours.
pub fn extract_structured_data(html: &str) -> Vec<StructuredDataResult> {
    let results: Vec<StructuredDataResult> = JSON_LD_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .enumerate()
        .map(|(i, block)| {
            let script_index = i + 1;
            match parse_block(block.as_str().trim()) {
                Ok(data) => StructuredDataResult::Valid { script_index, data },
                Err(e) => {
                    tracing::warn!(script_index, error = %e, "invalid JSON-LD block");
                    StructuredDataResult::Invalid {
                        script_index,
                        error: e.to_string(),
                    }
                }
            }
        })
        .collect();

    tracing::debug!(blocks = results.len(), "extracted JSON-LD blocks");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_blocks_yields_empty() {
        let html = "<html><head><title>x</title></head></html>";
        assert!(extract_structured_data(html).is_empty());
    }

    #[test]
    fn valid_and_invalid_blocks_in_document_order() {
        let html = r#"<head>
<script type="application/ld+json">{"@type":"Product","name":"Widget"}</script>
<script type="application/ld+json">{"@type": }</script>
</head>"#;
        let results = extract_structured_data(html);
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].script_index(), 1);
        assert!(results[0].is_valid());
        assert_eq!(results[0].schema_type(), Some(&json!("Product")));
        assert_eq!(results[0].name(), Some(&json!("Widget")));

        assert_eq!(results[1].script_index(), 2);
        match &results[1] {
            StructuredDataResult::Invalid { error, .. } => {
                assert!(!error.is_empty());
                assert!(error.contains("line 1"), "error should locate the fault: {error}");
            }
            other => panic!("expected invalid block, got {other:?}"),
        }
    }

    #[test]
    fn blocks_span_lines_and_are_trimmed() {
        let html = "<script type=\"application/ld+json\">\n  {\n    \"@context\": \"https://schema.org\",\n    \"@type\": \"Organization\"\n  }\n</script>";
        let results = extract_structured_data(html);
        assert_eq!(
            results,
            vec![StructuredDataResult::Valid {
                script_index: 1,
                data: json!({"@context": "https://schema.org", "@type": "Organization"}),
            }]
        );
    }

    #[test]
    fn capture_stops_at_first_closing_tag() {
        let html = concat!(
            r#"<script type="application/ld+json">{"a":1}</script>"#,
            r#"<script>var x = 1;</script>"#,
            r#"<script type="application/ld+json">[1, 2]</script>"#,
        );
        let results = extract_structured_data(html);
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[1],
            StructuredDataResult::Valid {
                script_index: 2,
                data: json!([1, 2])
            }
        );
    }

    #[test]
    fn other_script_types_are_ignored() {
        let html = r#"<script type="application/json">{"a":1}</script>
<script type='application/ld+json'>{"a":1}</script>"#;
        assert!(extract_structured_data(html).is_empty());
    }

    #[test]
    fn non_object_payloads_report_members_absent() {
        let html = r#"<script type="application/ld+json">[{"@type":"Thing"}]</script>
<script type="application/ld+json">42</script>
<script type="application/ld+json">{"@context":"https://schema.org"}</script>"#;
        let results = extract_structured_data(html);
        assert!(results.iter().all(StructuredDataResult::is_valid));
        assert!(results.iter().all(|r| r.schema_type().is_none()));
        assert!(results.iter().all(|r| r.name().is_none()));
    }

    #[test]
    fn deeply_nested_blocks_stay_valid() {
        let depth = 200;
        let html = format!(
            r#"<script type="application/ld+json">{}{}</script>"#,
            "[".repeat(depth),
            "]".repeat(depth)
        );
        let results = extract_structured_data(&html);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_valid(), "{:?}", results[0]);

        let mut depth_seen = 0;
        let mut cur = match &results[0] {
            StructuredDataResult::Valid { data, .. } => data,
            other => panic!("expected valid block, got {other:?}"),
        };
        while let Some(inner) = cur.as_array().and_then(|a| a.first()) {
            depth_seen += 1;
            cur = inner;
        }
        assert_eq!(depth_seen, depth - 1);
    }

    #[test]
    fn trailing_content_is_invalid() {
        let html = r#"<script type="application/ld+json">{"a":1} {"b":2}</script>"#;
        let results = extract_structured_data(html);
        match &results[0] {
            StructuredDataResult::Invalid { error, .. } => {
                assert!(error.contains("trailing characters"), "{error}")
            }
            other => panic!("expected invalid block, got {other:?}"),
        }
    }

    #[test]
    fn empty_block_is_invalid() {
        let html = r#"<script type="application/ld+json">   </script>"#;
        let results = extract_structured_data(html);
        assert_eq!(results.len(), 1);
        assert!(!results[0].is_valid());
    }

    #[test]
    fn serializes_with_data_or_error() {
        let valid = StructuredDataResult::Valid {
            script_index: 1,
            data: json!({"name": "Widget"}),
        };
        let invalid = StructuredDataResult::Invalid {
            script_index: 2,
            error: "EOF while parsing".into(),
        };
        assert_eq!(
            serde_json::to_value(&valid).unwrap(),
            json!({"script_index": 1, "valid": true, "data": {"name": "Widget"}})
        );
        assert_eq!(
            serde_json::to_value(&invalid).unwrap(),
            json!({"script_index": 2, "valid": false, "error": "EOF while parsing"})
        );
    }
}
