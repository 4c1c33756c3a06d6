//! Output formatting.

use careerlog::MilestoneCatalog;
use serde::Serialize;
use serde_json::{json, Value};

/// Pretty-print any serializable value as JSON.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

/// The milestone catalog as an ordered JSON array.
pub fn catalog_json(catalog: &MilestoneCatalog) -> Value {
    Value::Array(
        catalog
            .iter()
            .map(|m| json!({ "key": m.key, "displayName": m.display_name }))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_json_keeps_order() {
        let value = catalog_json(MilestoneCatalog::builtin());
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 32);
        assert_eq!(rows[0]["key"], "first_KarmanUncrewed");
        assert_eq!(rows[0]["displayName"], "Karman Line");
    }

    #[test]
    fn test_format_json_is_pretty() {
        let text = format_json(&json!({"a": 1})).unwrap();
        assert!(text.contains('\n'));
    }
}
