//! Registry abstraction: URL layout for npm-style registries.

/// The public npm registry.
pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// A package registry addressed by its base URL.
#[derive(Debug, Clone)]
pub struct Registry {
    pub url: String,
}

impl Registry {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
        }
    }

    /// The default public npm registry.
    pub fn npm() -> Self {
        Self::new(NPM_REGISTRY_URL)
    }

    /// URL of the packument (the full version listing) for a package.
    ///
    /// Scoped names keep their `@` but the inner slash is percent-encoded:
    /// `@types/node` becomes `@types%2Fnode`, matching the registry's routes.
    pub fn packument_url(&self, name: &str) -> String {
        format!("{}/{}", self.url, name.replace('/', "%2F"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packument_url_format() {
        let registry = Registry::npm();
        assert_eq!(
            registry.packument_url("left-pad"),
            "https://registry.npmjs.org/left-pad"
        );
    }

    #[test]
    fn packument_url_encodes_scoped_names() {
        let registry = Registry::npm();
        assert_eq!(
            registry.packument_url("@types/node"),
            "https://registry.npmjs.org/@types%2Fnode"
        );
    }

    #[test]
    fn new_trims_trailing_slash() {
        let registry = Registry::new("https://registry.example.com/");
        assert_eq!(registry.url, "https://registry.example.com");
        assert_eq!(
            registry.packument_url("pkg"),
            "https://registry.example.com/pkg"
        );
    }
}
