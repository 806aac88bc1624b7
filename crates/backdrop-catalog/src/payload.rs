//! Catalog payload parsing and validation.
//!
//! A payload is a JSON object with one array field named after the catalog
//! kind (`{"patterns": [...]}` or `{"gradients": [...]}`). It is accepted
//! only as a whole: any structural problem rejects the entire payload.

use std::collections::HashSet;

use backdrop_common::CatalogError;
use serde_json::Value;

use crate::template::{CatalogKind, Template};

/// Parse and validate a catalog payload.
pub fn parse_payload(kind: CatalogKind, text: &str) -> Result<Vec<Template>, CatalogError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let field = kind.field_name();
    let object = value
        .as_object()
        .ok_or_else(|| CatalogError::Validation("payload is not a JSON object".into()))?;
    let entries = object
        .get(field)
        .ok_or_else(|| CatalogError::Validation(format!("missing `{field}` field")))?;
    if !entries.is_array() {
        return Err(CatalogError::Validation(format!("`{field}` is not an array")));
    }

    let templates: Vec<Template> = serde_json::from_value(entries.clone())
        .map_err(|e| CatalogError::Parse(format!("invalid template in `{field}`: {e}")))?;

    validate_templates(field, &templates)?;
    Ok(templates)
}

fn validate_templates(field: &str, templates: &[Template]) -> Result<(), CatalogError> {
    if templates.is_empty() {
        return Err(CatalogError::Validation(format!("empty `{field}` array")));
    }

    let mut seen = HashSet::with_capacity(templates.len());
    for template in templates {
        if template.id.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "template with empty id in `{field}`"
            )));
        }
        if template.base_pattern.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "template '{}' has an empty basePattern",
                template.id
            )));
        }
        if !seen.insert(template.id.as_str()) {
            return Err(CatalogError::Validation(format!(
                "duplicate template id '{}'",
                template.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r##"{
        "patterns": [
            {"id": "dots", "name": "Dots", "type": "radial-gradient", "description": "",
             "basePattern": "radial-gradient(circle, {fg} 2px, transparent 2px)"},
            {"id": "zigzag", "name": "Zigzag", "type": "linear-gradient", "description": "",
             "basePattern": "linear-gradient(135deg, {fg} 25%, transparent 25%)"}
        ]
    }"##;

    #[test]
    fn accepts_valid_payload() {
        let templates = parse_payload(CatalogKind::Patterns, VALID).unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[1].id, "zigzag");
    }

    #[test]
    fn rejects_wrong_field_for_kind() {
        let err = parse_payload(CatalogKind::Gradients, VALID).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(err.to_string().contains("missing `gradients`"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_payload(CatalogKind::Patterns, "{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn rejects_non_object_payload() {
        let err = parse_payload(CatalogKind::Patterns, "[]").unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn rejects_non_array_field() {
        let err = parse_payload(CatalogKind::Patterns, r#"{"patterns": {}}"#).unwrap_err();
        assert!(err.to_string().contains("not an array"));
    }

    #[test]
    fn rejects_empty_array() {
        let err = parse_payload(CatalogKind::Patterns, r#"{"patterns": []}"#).unwrap_err();
        assert!(err.to_string().contains("empty `patterns` array"));
    }

    #[test]
    fn rejects_empty_base_pattern() {
        let payload = r#"{"gradients": [{"id": "g", "name": "G", "type": "linear-gradient", "basePattern": "  "}]}"#;
        let err = parse_payload(CatalogKind::Gradients, payload).unwrap_err();
        assert!(err.to_string().contains("empty basePattern"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let payload = r#"{"gradients": [
            {"id": "g", "name": "G", "type": "linear-gradient", "basePattern": "a"},
            {"id": "g", "name": "H", "type": "radial-gradient", "basePattern": "b"}
        ]}"#;
        let err = parse_payload(CatalogKind::Gradients, payload).unwrap_err();
        assert!(err.to_string().contains("duplicate template id 'g'"));
    }

    #[test]
    fn rejects_entry_missing_base_pattern() {
        let payload = r#"{"gradients": [{"id": "g", "name": "G", "type": "linear-gradient"}]}"#;
        let err = parse_payload(CatalogKind::Gradients, payload).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
