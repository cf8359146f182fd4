use std::path::Path;

/// How a schema source is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaFormat {
    /// GraphQL schema definition language
    Sdl,
    /// An introspection query result, with or without the `data` wrapper
    Introspection,
}

impl SchemaFormat {
    /// Format implied by a file extension, if the extension is a known one.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Introspection),
            "graphql" | "graphqls" | "gql" | "sdl" => Some(Self::Sdl),
            _ => None,
        }
    }

    /// Guess the format from the content: JSON documents start with `{`, SDL never does.
    #[must_use]
    pub fn sniff(source: &str) -> Self {
        if source.trim_start().starts_with('{') {
            Self::Introspection
        } else {
            Self::Sdl
        }
    }

    /// The extension decides when it is known; otherwise the content does.
    #[must_use]
    pub fn detect(path: &Path, source: &str) -> Self {
        Self::from_path(path).unwrap_or_else(|| Self::sniff(source))
    }
}

impl std::fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sdl => f.write_str("SDL"),
            Self::Introspection => f.write_str("introspection JSON"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            SchemaFormat::from_path(Path::new("schema.json")),
            Some(SchemaFormat::Introspection)
        );
        assert_eq!(
            SchemaFormat::from_path(Path::new("api/schema.GraphQL")),
            Some(SchemaFormat::Sdl)
        );
        assert_eq!(
            SchemaFormat::from_path(Path::new("schema.gql")),
            Some(SchemaFormat::Sdl)
        );
        assert_eq!(SchemaFormat::from_path(Path::new("schema.txt")), None);
        assert_eq!(SchemaFormat::from_path(Path::new("schema")), None);
    }

    #[test]
    fn test_sniff() {
        assert_eq!(
            SchemaFormat::sniff("\n  {\"__schema\": {}}"),
            SchemaFormat::Introspection
        );
        assert_eq!(SchemaFormat::sniff("type Query { a: Int }"), SchemaFormat::Sdl);
        assert_eq!(SchemaFormat::sniff("\"\"\"doc\"\"\" type A"), SchemaFormat::Sdl);
    }

    #[test]
    fn test_detect_prefers_extension() {
        assert_eq!(
            SchemaFormat::detect(Path::new("schema.graphql"), "{"),
            SchemaFormat::Sdl
        );
        assert_eq!(
            SchemaFormat::detect(Path::new("schema.out"), "{ \"data\": {} }"),
            SchemaFormat::Introspection
        );
    }
}
