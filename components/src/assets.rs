//! Asset token resolution.
//!
//! Content refers to images through opaque tokens (`benefits/icon-1.svg`).
//! Components hand every token to an [`AssetResolver`] and use the result as
//! the `src`; they never interpret tokens themselves.

use serde::{Deserialize, Serialize};

/// Maps asset tokens to displayable URLs.
///
/// ```rust
/// use brainwave_leptos::AssetResolver;
///
/// let assets = AssetResolver::new("https://cdn.example.com/assets/");
/// assert_eq!(assets.resolve("./hero.png"), "https://cdn.example.com/assets/hero.png");
/// assert_eq!(assets.resolve("/favicon.ico"), "/favicon.ico");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetResolver {
    base: String,
}

impl AssetResolver {
    /// Resolver that prefixes relative tokens with `base`.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// The configured base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolve `token` to a URL.
    ///
    /// Absolute URLs, protocol-relative URLs, `data:` URIs and root-relative
    /// paths pass through unchanged, as does everything when no base is set.
    pub fn resolve(&self, token: &str) -> String {
        let token = token.trim();
        if self.base.is_empty() || is_absolute(token) {
            return token.to_string();
        }
        let relative = token.trim_start_matches("./");
        format!("{}/{}", self.base.trim_end_matches('/'), relative)
    }
}

fn is_absolute(token: &str) -> bool {
    token.starts_with("http://")
        || token.starts_with("https://")
        || token.starts_with("data:")
        || token.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_passes_tokens_through() {
        let assets = AssetResolver::default();
        assert_eq!(assets.resolve("benefits/icon-1.svg"), "benefits/icon-1.svg");
    }

    #[test]
    fn relative_tokens_join_base() {
        let assets = AssetResolver::new("/static");
        assert_eq!(assets.resolve("benefits/icon-1.svg"), "/static/benefits/icon-1.svg");
        assert_eq!(assets.resolve("./play.svg"), "/static/play.svg");
    }

    #[test]
    fn absolute_tokens_are_untouched() {
        let assets = AssetResolver::new("/static");
        for token in [
            "https://cdn.example.com/a.png",
            "http://example.com/b.png",
            "//cdn.example.com/c.png",
            "data:image/svg+xml;base64,AAAA",
            "/root.png",
        ] {
            assert_eq!(assets.resolve(token), token);
        }
    }
}
