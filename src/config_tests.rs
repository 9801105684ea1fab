//! Unit tests for configuration module
//!
//! These tests validate configuration parsing, defaults, and validation.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::config::*;
    use crate::FaqBotError;

    // ====== Default Value Tests ======

    #[test]
    fn test_default_server() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert!(!config.enable_cors);
    }

    #[test]
    fn test_default_database() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "sqlite://chat_logs.db");
        assert_eq!(config.max_connections, 5);
        assert!(config.enabled);
    }

    #[test]
    fn test_default_threshold() {
        assert!((default_threshold() - 0.3).abs() < f64::EPSILON);
        assert!((AppConfig::default().threshold() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_knowledge_path_is_none() {
        assert!(AppConfig::default().knowledge_path().is_none());
    }

    // ====== Parsing Tests ======

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.logging.level, "info");
        assert!(config.conversation_log_enabled());
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [server]
            port = 8080

            [matcher]
            threshold = 0.5

            [database]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!((config.threshold() - 0.5).abs() < f64::EPSILON);
        assert!(!config.conversation_log_enabled());
        assert_eq!(config.database_url(), "sqlite://chat_logs.db");
    }

    #[test]
    fn test_knowledge_path() {
        let config = AppConfig::from_toml_str(
            r#"
            [knowledge]
            path = "faq.toml"
            "#,
        )
        .unwrap();
        assert_eq!(config.knowledge_path(), Some("faq.toml"));
    }

    #[test]
    fn test_invalid_toml() {
        let result = AppConfig::from_toml_str("[server\nport = 1");
        assert!(matches!(result, Err(FaqBotError::TomlParsing(_))));
    }

    // ====== Validation Tests ======

    #[test]
    fn test_threshold_out_of_range() {
        let result = AppConfig::from_toml_str("[matcher]\nthreshold = 1.5");
        assert!(matches!(result, Err(FaqBotError::Config(_))));

        let result = AppConfig::from_toml_str("[matcher]\nthreshold = -0.1");
        assert!(matches!(result, Err(FaqBotError::Config(_))));
    }

    #[test]
    fn test_zero_max_connections() {
        let result = AppConfig::from_toml_str("[database]\nmax_connections = 0");
        assert!(matches!(result, Err(FaqBotError::Config(_))));
    }

    // ====== File Loading Tests ======

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_missing_file() {
        let result = AppConfig::from_file("/nonexistent/faqbot/config.toml");
        assert!(matches!(result, Err(FaqBotError::Io(_))));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed = AppConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.database.url, config.database.url);
    }
}
