//! Unit tests for URL decomposition and pattern compilation
//!
//! Covers which components a pattern constrains and which patterns are
//! rejected as invalid.

#[cfg(test)]
mod component_tests {
    use url_template_matcher::{Component, ComponentTemplates, MatcherError, UriParts, UrlMatcher};

    fn constrained(pattern: &str) -> Vec<Component> {
        ComponentTemplates::compile(pattern)
            .unwrap()
            .iter()
            .map(|(component, _)| component)
            .collect()
    }

    #[test]
    fn test_every_component_can_be_constrained() {
        assert_eq!(
            constrained("https://{user}:{pass}@{host}:8080/{path}?{q}#{frag}"),
            Component::ALL.to_vec()
        );
    }

    #[test]
    fn test_host_only_pattern() {
        assert_eq!(
            constrained("//{sub}.example.com"),
            vec![Component::Host]
        );
    }

    #[test]
    fn test_query_only_pattern() {
        assert_eq!(constrained("{?id}"), vec![Component::Query]);
    }

    #[test]
    fn test_template_sources_are_restored() {
        let templates =
            ComponentTemplates::compile("https://{user}@{sub}.example.com/a/{b}{?c}{#d}").unwrap();
        let source = |c| templates.get(c).map(|t| t.source().to_string());

        assert_eq!(source(Component::Scheme).as_deref(), Some("https"));
        assert_eq!(source(Component::User).as_deref(), Some("{user}"));
        assert_eq!(source(Component::Password), None);
        assert_eq!(source(Component::Host).as_deref(), Some("{sub}.example.com"));
        assert_eq!(source(Component::Port), None);
        assert_eq!(source(Component::Path).as_deref(), Some("/a/{b}"));
        assert_eq!(source(Component::Query).as_deref(), Some("{?c}"));
        assert_eq!(source(Component::Fragment).as_deref(), Some("{#d}"));
    }

    #[test]
    fn test_compilation_is_reproducible() {
        let pattern = "https://{sub}.example.com/users/{id}{?tab}";
        let first: Vec<String> = ComponentTemplates::compile(pattern)
            .unwrap()
            .iter()
            .map(|(_, t)| t.source().to_string())
            .collect();
        let second: Vec<String> = ComponentTemplates::compile(pattern)
            .unwrap()
            .iter()
            .map(|(_, t)| t.source().to_string())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_patterns() {
        for pattern in [
            "http://localhost:{port}/",
            "1ttp://example.com/{id}",
            "http://exa mple.com/{id}",
            "http://{}.example.com/",
        ] {
            let err = UrlMatcher::new(pattern).matches("http://example.com/").unwrap_err();
            let MatcherError::InvalidPattern { pattern: reported, .. } = err;
            assert_eq!(reported, pattern);
        }
    }

    #[test]
    fn test_decomposition_is_lenient() {
        let parts = UriParts::parse("example.com/users/7").unwrap();
        assert!(parts.host.is_empty());
        assert_eq!(parts.path, "example.com/users/7");

        let parts = UriParts::parse("//example.com").unwrap();
        assert_eq!(parts.host, "example.com");
        assert!(parts.path.is_empty());
    }
}
