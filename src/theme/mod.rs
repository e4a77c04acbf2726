//! Design-variant registry.
//!
//! Three site-wide design directions share one component tree on the frontend;
//! the backend owns the canonical palette/typography tokens for each and the
//! currently active direction. Lookup is total: every key has exactly one
//! descriptor by construction.

mod context;

pub use context::ThemeContext;

use serde::{Deserialize, Serialize};

/// Closed set of design-direction keys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VariantKey {
    A,
    B,
    C,
}

/// All variant keys, in display order.
pub const ALL_VARIANTS: [VariantKey; 3] = [VariantKey::A, VariantKey::B, VariantKey::C];

impl VariantKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKey::A => "A",
            VariantKey::B => "B",
            VariantKey::C => "C",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "A" => Some(VariantKey::A),
            "B" => Some(VariantKey::B),
            "C" => Some(VariantKey::C),
            _ => None,
        }
    }
}

/// Color tokens for one variant.
#[derive(Debug, Clone, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
}

/// Font-family pair for one variant.
#[derive(Debug, Clone, Serialize)]
pub struct FontPair {
    pub heading: &'static str,
    pub body: &'static str,
}

/// The full visual token set for one design direction.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeDescriptor {
    pub key: VariantKey,
    pub name: &'static str,
    pub description: &'static str,
    pub colors: Palette,
    pub fonts: FontPair,
}

const VARIANT_A: ThemeDescriptor = ThemeDescriptor {
    key: VariantKey::A,
    name: "Premium Classical",
    description: "Timeless, confident, high-prestige",
    colors: Palette {
        primary: "#1A3A52",
        accent: "#8B3A3A",
        background: "#F5F7FA",
        text: "#1A1A1A",
        muted: "#6B7280",
    },
    fonts: FontPair {
        heading: "'Playfair Display', serif",
        body: "'Inter', sans-serif",
    },
};

const VARIANT_B: ThemeDescriptor = ThemeDescriptor {
    key: VariantKey::B,
    name: "Modern Professional",
    description: "Contemporary, balanced, approachable",
    colors: Palette {
        primary: "#2C3E50",
        accent: "#4A6B5E",
        background: "#ECF0F1",
        text: "#1A1A1A",
        muted: "#6B7280",
    },
    fonts: FontPair {
        heading: "'EB Garamond', serif",
        body: "'Open Sans', sans-serif",
    },
};

const VARIANT_C: ThemeDescriptor = ThemeDescriptor {
    key: VariantKey::C,
    name: "Sophisticated Warm",
    description: "Modern-bold, warm, distinctive",
    colors: Palette {
        primary: "#1F2937",
        accent: "#9B7653",
        background: "#F9F8F6",
        text: "#1A1A1A",
        muted: "#6B7280",
    },
    fonts: FontPair {
        heading: "'Syne', sans-serif",
        body: "'Roboto', sans-serif",
    },
};

/// Get the full descriptor for a variant. Total over `VariantKey`.
pub fn resolve(key: VariantKey) -> &'static ThemeDescriptor {
    match key {
        VariantKey::A => &VARIANT_A,
        VariantKey::B => &VARIANT_B,
        VariantKey::C => &VARIANT_C,
    }
}

/// Project a descriptor into CSS custom properties for the frontend root.
///
/// Pure, order-independent mapping of the token set.
pub fn css_vars(theme: &ThemeDescriptor) -> Vec<(&'static str, &'static str)> {
    vec![
        ("--color-primary", theme.colors.primary),
        ("--color-accent", theme.colors.accent),
        ("--color-background", theme.colors.background),
        ("--color-text", theme.colors.text),
        ("--color-muted", theme.colors.muted),
        ("--font-heading", theme.fonts.heading),
        ("--font-body", theme.fonts.body),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_fully_populated() {
        for key in ALL_VARIANTS {
            let theme = resolve(key);
            assert_eq!(theme.key, key);
            assert!(!theme.name.is_empty());
            assert!(!theme.description.is_empty());
            assert!(!theme.colors.primary.is_empty());
            assert!(!theme.colors.accent.is_empty());
            assert!(!theme.colors.background.is_empty());
            assert!(!theme.colors.text.is_empty());
            assert!(!theme.colors.muted.is_empty());
            assert!(!theme.fonts.heading.is_empty());
            assert!(!theme.fonts.body.is_empty());
        }
    }

    #[test]
    fn test_css_vars_cover_all_tokens() {
        let vars = css_vars(resolve(VariantKey::A));
        assert_eq!(vars.len(), 7);
        assert!(vars.contains(&("--color-primary", "#1A3A52")));
        assert!(vars.contains(&("--font-heading", "'Playfair Display', serif")));
    }

    #[test]
    fn test_key_round_trip() {
        for key in ALL_VARIANTS {
            assert_eq!(VariantKey::from_str(key.as_str()), Some(key));
        }
        assert_eq!(VariantKey::from_str("D"), None);
        assert_eq!(VariantKey::from_str("a"), None);
    }
}
