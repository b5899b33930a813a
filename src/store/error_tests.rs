//! Unit tests for store error types

#[cfg(test)]
mod tests {
    use crate::store::error::StoreError;
    use crate::store::types::TipField;
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_missing_error_display() {
        let error = StoreError::Missing(PathBuf::from("/data/tips.json"));
        assert_eq!(error.to_string(), "Tips file not found: /data/tips.json");
    }

    #[test]
    fn test_validation_error_names_field() {
        assert_eq!(StoreError::Validation(TipField::Title).to_string(), "Title cannot be empty");
        assert_eq!(StoreError::Validation(TipField::Content).to_string(), "Content cannot be empty");
        assert_eq!(StoreError::Validation(TipField::Category).to_string(), "Category cannot be empty");
    }

    #[test]
    fn test_malformed_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let error: StoreError = json_err.into();
        assert!(matches!(error, StoreError::Malformed(_)));
        assert!(error.to_string().starts_with("Invalid tips file"));
    }

    #[test]
    fn test_absent_record_classification() {
        assert!(StoreError::Missing(PathBuf::from("x")).is_absent());
        assert!(StoreError::Empty(PathBuf::from("x")).is_absent());
        assert!(!StoreError::Malformed("bad".into()).is_absent());
        assert!(!StoreError::Io(std::io::Error::other("denied")).is_absent());
        assert!(!StoreError::SaveFailed("disk full".into()).is_absent());
    }

    #[test]
    fn test_ids_exhausted_display() {
        let error = StoreError::IdsExhausted(u64::MAX);
        assert_eq!(error.to_string(), format!("No tip id left after #{}", u64::MAX));
        assert!(!error.is_absent());
    }

    #[test]
    fn test_error_source() {
        let error = StoreError::TipNotFound(9);
        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "Tip #9 not found");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreError>();
    }
}
