//! 数据集加载
//!
//! Reads the dataset once at startup. Any failure here is fatal: the service
//! never starts over a missing, empty or partially valid catalog.

use std::path::Path;

use serde_json::Value;

use common::errors::CatalogLoadError;
use common::models::PriceRecord;

use crate::catalog::Catalog;

/// Loads and validates the catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&content, path)?;
    tracing::info!(path = %path.display(), records = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parses a container document into a catalog.
///
/// `path` is only used in error messages.
pub fn parse_catalog(content: &str, path: &Path) -> Result<Catalog, CatalogLoadError> {
    let malformed = |reason: String| CatalogLoadError::MalformedSource {
        path: path.to_path_buf(),
        reason,
    };

    let document: Value = serde_json::from_str(content).map_err(|e| malformed(e.to_string()))?;
    let Value::Object(mut container) = document else {
        return Err(malformed("expected a JSON object with a `data` field".to_string()));
    };
    // A missing `data` field is an empty dataset, not a malformed one.
    let entries = match container.remove("data") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(malformed("`data` must be an array of records".to_string())),
    };

    let records = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<PriceRecord>(entry).map_err(|e| CatalogLoadError::MalformedRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Catalog::new(records, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> Result<Catalog, CatalogLoadError> {
        parse_catalog(content, Path::new("materials.json"))
    }

    fn temp_file(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_valid_dataset() {
        let catalog = parse(
            r#"{"data": [
                {"region": "FM", "produit": "Olive", "variete": "Picholine", "annee": 2021, "prix": 12.5},
                {"region": "CS", "produit": "Tomate", "variete": "Ronde", "annee": "2022", "prix": 4}
            ]}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[1].annee, 2022);
    }

    #[test]
    fn test_empty_data_field_is_rejected() {
        let err = parse(r#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, CatalogLoadError::EmptyDataset { .. }));
    }

    #[test]
    fn test_missing_data_field_is_empty() {
        let err = parse(r#"{"records": [1, 2, 3]}"#).unwrap_err();
        assert!(matches!(err, CatalogLoadError::EmptyDataset { .. }));
    }

    #[test]
    fn test_invalid_json_is_malformed_source() {
        assert!(matches!(
            parse("{not json").unwrap_err(),
            CatalogLoadError::MalformedSource { .. }
        ));
        assert!(matches!(
            parse("[]").unwrap_err(),
            CatalogLoadError::MalformedSource { .. }
        ));
    }

    #[test]
    fn test_non_array_data_is_malformed_source() {
        assert!(matches!(
            parse(r#"{"data": "records"}"#).unwrap_err(),
            CatalogLoadError::MalformedSource { .. }
        ));
    }

    #[test]
    fn test_malformed_record_reports_index() {
        let err = parse(
            r#"{"data": [
                {"region": "FM", "produit": "Olive", "variete": "Picholine", "annee": 2021, "prix": 12.5},
                {"region": "CS", "produit": "Tomate", "annee": 2022, "prix": 4.5}
            ]}"#,
        )
        .unwrap_err();
        match err {
            CatalogLoadError::MalformedRecord { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("variete"), "{reason}");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_year_is_malformed_record() {
        let err = parse(
            r#"{"data": [{"region": "FM", "produit": "Olive", "variete": "Picholine", "annee": "n/a", "prix": 12.5}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogLoadError::MalformedRecord { index: 0, .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_file(
            r#"{"data": [{"region": "FM", "produit": "Olive", "variete": "Picholine", "annee": 2021, "prix": 12.5}]}"#,
        );
        let catalog = load_catalog(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(catalog.records()[0].variete, "Picholine");
    }

    #[test]
    fn test_missing_file_is_source_not_found() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, CatalogLoadError::SourceNotFound { .. }));
    }
}
