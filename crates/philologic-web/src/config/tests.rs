#[cfg(test)]
mod tests {
    use super::super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.server.session_idle_minutes, 60);
        assert_eq!(config.catalog.source, CatalogKind::Builtin);
        assert_eq!(config.generation.backend, GenerationKind::Mock);
        assert_eq!(config.generation.mock_delay_ms, 2000);
        assert_eq!(config.generation.flashcard_delay_ms, 3000);
        assert!(!config.generation.answer_flashcards);
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml(r#"
            [catalog]
            source = "remote"
            base_url = "http://catalog.local:5001"

            [generation]
            backend = "http"
            mock_delay_ms = 0

            [generation.http]
            model = "mistral"
        "#).unwrap();
        assert_eq!(config.catalog.source, CatalogKind::Remote);
        assert_eq!(config.generation.backend, GenerationKind::Http);
        assert_eq!(config.generation.mock_delay_ms, 0);
        let http = config.generation.http.unwrap();
        assert_eq!(http.model, "mistral");
        assert_eq!(http.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_remote_catalog_requires_base_url() {
        let config = Config::from_toml("[catalog]\nsource = \"remote\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[
                ("PHILOLOGIC_HOST", "0.0.0.0"),
                ("PHILOLOGIC_PORT", "8080"),
                ("PHILOLOGIC_API_KEY", "sk-test"),
            ]))
            .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.generation.http.unwrap().api_key, "sk-test");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_env_overrides(env(&[("PHILOLOGIC_PORT", "not-a-port")]))
            .unwrap_err();
        assert!(err.to_string().contains("PHILOLOGIC_PORT"));
    }
}
