//! Theme resolution
//!
//! Resolves the effective background color, font, and visibility for a named
//! UI component through a layered lookup: the component's own entry first,
//! the document-global value second, nothing third. The caller applies its
//! own platform default when resolution yields `None`.

use csscolorparser::Color;

use super::schema::{ComponentTheme, FontSpec, ThemeDocument};

/// Reserved color token meaning "fully transparent".
pub const CLEAR_TOKEN: &str = "clear";

/// Well-known themable components.
///
/// Resolution itself is keyed by name, so documents may carry entries beyond
/// this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Global,
    NavigationBar,
    TabBar,
    ToolBar,
    BarButtonItem,
    Detail,
    View,
}

impl Component {
    /// Wire name used as the document key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Global => "Global",
            Component::NavigationBar => "NavigationBar",
            Component::TabBar => "TabBar",
            Component::ToolBar => "ToolBar",
            Component::BarButtonItem => "BarButtonItem",
            Component::Detail => "Detail",
            Component::View => "View",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved color value.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeColor {
    /// The transparent sentinel, resolved before any hex parsing.
    Clear,
    Solid(Color),
}

/// Theme errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ThemeError {
    /// A color token that is neither the clear sentinel nor parseable hex.
    /// Surfaced rather than defaulted: it indicates an authoring bug in the
    /// theme document.
    #[error("malformed color token '{token}' for component '{component}': {reason}")]
    MalformedColorToken {
        component: String,
        token: String,
        reason: String,
    },
}

/// Theme resolver
pub struct ThemeResolver;

impl ThemeResolver {
    /// Resolve the effective background color for a component.
    ///
    /// Returns `Ok(None)` when neither the component entry nor the global
    /// document carries a color; returns an error only for a malformed
    /// non-sentinel token.
    pub fn resolve_color(
        doc: &ThemeDocument,
        component: &str,
    ) -> Result<Option<ThemeColor>, ThemeError> {
        let Some(token) = Self::find_color_token(doc, component) else {
            tracing::debug!("No background color set for '{}'", component);
            return Ok(None);
        };

        Self::parse_token(token, component).map(Some)
    }

    /// Resolve the effective font for a component, with the same precedence
    /// as [`resolve_color`](Self::resolve_color).
    pub fn resolve_font(doc: &ThemeDocument, component: &str) -> Option<FontSpec> {
        doc.component(component)
            .and_then(|entry| entry.font.as_ref())
            .or(doc.font.as_ref())
            .cloned()
    }

    /// Resolve whether a component is hidden; `None` when the document does
    /// not say.
    pub fn resolve_hidden(doc: &ThemeDocument, component: &str) -> Option<bool> {
        doc.component(component).and_then(|entry| entry.is_hidden)
    }

    /// True for the tokens reserved to mean "fully transparent".
    pub fn is_clear(token: &str) -> bool {
        token.is_empty() || token.eq_ignore_ascii_case(CLEAR_TOKEN)
    }

    fn find_color_token<'a>(doc: &'a ThemeDocument, component: &str) -> Option<&'a str> {
        doc.component(component)
            .and_then(ComponentTheme::color_token)
            .or(doc.background_color.as_deref())
    }

    fn parse_token(token: &str, component: &str) -> Result<ThemeColor, ThemeError> {
        if Self::is_clear(token) {
            return Ok(ThemeColor::Clear);
        }

        token
            .parse::<Color>()
            .map(ThemeColor::Solid)
            .map_err(|e| ThemeError::MalformedColorToken {
                component: component.to_string(),
                token: token.to_string(),
                reason: e.to_string(),
            })
    }
}

impl ComponentTheme {
    fn color_token(&self) -> Option<&str> {
        self.background_color.as_deref()
    }
}
