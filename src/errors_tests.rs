//! Unit tests for error handling
//!
//! Tests error types, conversions, and error message formatting.

#[cfg(test)]
mod tests {
    use std::io;

    use crate::errors::FaqBotError;

    // ====== Error Type Tests ======

    #[test]
    fn test_custom_error() {
        let error = FaqBotError::Custom("Test error message".to_string());
        assert_eq!(format!("{}", error), "Test error message");
    }

    #[test]
    fn test_config_error() {
        let error = FaqBotError::Config("threshold must be within [0, 1]".to_string());
        assert!(matches!(error, FaqBotError::Config(_)));
        assert!(format!("{}", error).starts_with("Configuration error"));
    }

    #[test]
    fn test_knowledge_error() {
        let error = FaqBotError::Knowledge("no entries".to_string());
        assert_eq!(format!("{}", error), "Knowledge base error: no entries");
    }

    // ====== Error Conversion Tests ======

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: FaqBotError = io_err.into();

        assert!(matches!(err, FaqBotError::Io(_)));
        assert!(format!("{}", err).contains("File not found"));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("key = ").unwrap_err();
        let err: FaqBotError = toml_err.into();

        assert!(matches!(err, FaqBotError::TomlParsing(_)));
    }

    #[test]
    fn test_error_from_sqlx() {
        let err: FaqBotError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, FaqBotError::Database(_)));
    }

    // ====== Result Type Tests ======

    #[test]
    fn test_result_propagation() {
        fn inner() -> crate::Result<u32> {
            let parsed: toml::Value = toml::from_str("port = 5000")?;
            parsed
                .get("port")
                .and_then(toml::Value::as_integer)
                .map(|p| p as u32)
                .ok_or_else(|| FaqBotError::Custom("missing port".to_string()))
        }

        assert_eq!(inner().unwrap(), 5000);
    }
}
