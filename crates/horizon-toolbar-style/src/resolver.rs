//! Color token resolution.
//!
//! The toolbar never interprets color tokens itself. It hands them to a
//! [`ColorResolver`], which must be deterministic: the same token always
//! resolves to the same [`Color`].
//!
//! [`PaletteResolver`] is the default implementation. It resolves, in order:
//!
//! 1. literals (`#ff0000`, `rgb(...)`, `rgba(...)`)
//! 2. custom swatches registered with [`PaletteResolver::with_swatch`]
//! 3. Material swatches by exact name, then by hue name (`paperBlue` is `paperBlue500`)
//! 4. basic CSS color names
//!
//! Anything else resolves to `paperGrey500` and logs a warning.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::color::{is_literal, named_color, parse_css_color, Color};
use crate::logging::targets;
use crate::palette::MaterialPalette;

/// Maps a color token to a final drawable color.
pub trait ColorResolver: Send + Sync {
    /// Resolve a token. Must be pure and deterministic.
    fn resolve(&self, token: &str) -> Color;
}

impl<F> ColorResolver for F
where
    F: Fn(&str) -> Color + Send + Sync,
{
    fn resolve(&self, token: &str) -> Color {
        self(token)
    }
}

/// Resolver backed by the Material palette.
#[derive(Debug, Clone, Default)]
pub struct PaletteResolver {
    custom: HashMap<String, Color>,
}

impl PaletteResolver {
    /// Create a resolver over the built-in palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an application-specific swatch.
    ///
    /// Custom swatches take precedence over Material swatches of the same name.
    pub fn with_swatch(mut self, name: impl Into<String>, color: Color) -> Self {
        self.custom.insert(name.into(), color);
        self
    }

    fn lookup_name(&self, name: &str) -> Option<Color> {
        self.custom
            .get(name)
            .copied()
            .or_else(|| MaterialPalette::lookup(name))
            .or_else(|| named_color(name))
    }
}

impl ColorResolver for PaletteResolver {
    fn resolve(&self, token: &str) -> Color {
        let token = token.trim();

        if is_literal(token) {
            return match parse_css_color(token) {
                Ok(color) => color,
                Err(err) => {
                    tracing::warn!(
                        target: targets::RESOLVER,
                        %err,
                        "unparseable color literal, using fallback swatch"
                    );
                    MaterialPalette::fallback()
                }
            };
        }

        match self.lookup_name(token) {
            Some(color) => color,
            None => {
                tracing::warn!(
                    target: targets::RESOLVER,
                    token,
                    "unknown color token, using fallback swatch"
                );
                MaterialPalette::fallback()
            }
        }
    }
}

/// Memoizing wrapper around another resolver.
///
/// Results are identical to the wrapped resolver; only repeated parsing and
/// lookups are avoided. When the cache fills up, half of it is evicted.
pub struct CachedResolver<R> {
    inner: R,
    cache: RwLock<HashMap<String, Color>>,
    max_size: usize,
}

impl<R: ColorResolver> CachedResolver<R> {
    /// Wrap a resolver with the default capacity.
    pub fn new(inner: R) -> Self {
        Self::with_capacity(inner, 256)
    }

    /// Wrap a resolver with a specific capacity.
    pub fn with_capacity(inner: R, max_size: usize) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::with_capacity(max_size)),
            max_size: max_size.max(1),
        }
    }

    /// Get the number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Drop all cached entries.
    pub fn clear(&self) {
        self.cache.write().clear();
    }

    /// Access the wrapped resolver.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: ColorResolver> ColorResolver for CachedResolver<R> {
    fn resolve(&self, token: &str) -> Color {
        if let Some(color) = self.cache.read().get(token) {
            return *color;
        }

        let color = self.inner.resolve(token);
        let mut cache = self.cache.write();
        if cache.len() >= self.max_size {
            // Simple eviction: drop half when full, at least one entry
            let evict = (cache.len() / 2).max(1);
            let keys: Vec<_> = cache.keys().take(evict).cloned().collect();
            for key in keys {
                cache.remove(&key);
            }
        }
        cache.insert(token.to_string(), color);
        color
    }
}

impl<R: std::fmt::Debug> std::fmt::Debug for CachedResolver<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedResolver")
            .field("inner", &self.inner)
            .field("len", &self.cache.read().len())
            .field("max_size", &self.max_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn literals_pass_through() {
        let resolver = PaletteResolver::new();
        assert_eq!(resolver.resolve("#ff0000"), Color::RED);
        assert_eq!(resolver.resolve("#FFFFFF"), Color::WHITE);
        assert_eq!(
            resolver.resolve("rgba(0,0,0,.87)"),
            parse_css_color("rgba(0,0,0,.87)").unwrap()
        );
    }

    #[test]
    fn palette_names() {
        let resolver = PaletteResolver::new();
        assert_eq!(resolver.resolve("paperBlue").to_hex(), "#2196F3");
        assert_eq!(resolver.resolve("paperBlue500").to_hex(), "#2196F3");
        assert_eq!(resolver.resolve("paperRed700").to_hex(), "#D32F2F");
        assert_eq!(resolver.resolve("googleBlue").to_hex(), "#4285F4");
    }

    #[test]
    fn css_names_after_palette() {
        let resolver = PaletteResolver::new();
        assert_eq!(resolver.resolve("blue"), Color::BLUE);
        assert_eq!(resolver.resolve("white"), Color::WHITE);
    }

    #[test]
    fn unknown_tokens_fall_back_to_grey() {
        let resolver = PaletteResolver::new();
        assert_eq!(resolver.resolve("chartreuse-ish"), MaterialPalette::fallback());
        assert_eq!(resolver.resolve(""), MaterialPalette::fallback());
        assert_eq!(resolver.resolve("#zzzzzz"), MaterialPalette::fallback());
    }

    #[test]
    fn custom_swatch_shadows_material() {
        let brand = Color::from_rgb8(1, 2, 3);
        let resolver = PaletteResolver::new().with_swatch("paperBlue", brand);
        assert_eq!(resolver.resolve("paperBlue"), brand);
        assert_eq!(resolver.resolve("paperBlue500").to_hex(), "#2196F3");
    }

    #[test]
    fn closures_are_resolvers() {
        let resolver = |_: &str| Color::MAGENTA;
        assert_eq!(resolver.resolve("anything"), Color::MAGENTA);
    }

    #[test]
    fn cache_matches_inner_and_memoizes() {
        let calls = AtomicUsize::new(0);
        let counting = |token: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            PaletteResolver::new().resolve(token)
        };
        let cached = CachedResolver::new(counting);

        assert_eq!(cached.resolve("paperTeal"), PaletteResolver::new().resolve("paperTeal"));
        assert_eq!(cached.resolve("paperTeal"), PaletteResolver::new().resolve("paperTeal"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cached.len(), 1);

        cached.clear();
        assert!(cached.is_empty());
    }

    #[test]
    fn cache_evicts_when_full() {
        let cached = CachedResolver::with_capacity(PaletteResolver::new(), 4);
        for name in ["paperRed", "paperPink", "paperPurple", "paperIndigo", "paperBlue"] {
            cached.resolve(name);
        }
        assert!(cached.len() <= 4);
    }

    #[test]
    fn single_entry_cache_stays_bounded() {
        let cached = CachedResolver::with_capacity(PaletteResolver::new(), 1);
        assert_eq!(cached.resolve("paperRed").to_hex(), "#F44336");
        assert_eq!(cached.resolve("paperBlue").to_hex(), "#2196F3");
        assert_eq!(cached.len(), 1);
        assert_eq!(cached.resolve("paperRed").to_hex(), "#F44336");
        assert_eq!(cached.len(), 1);
    }
}
