//! Category color assignment.
//!
//! Lookups never fail: a category without an assigned color falls back to a
//! neutral fill, so a partially customized palette cannot abort a render.

use indexmap::IndexMap;

use crate::core::DisasterCategory;
use crate::render::Color;

/// Muted legend label color for unselected categories.
pub const LABEL_MUTED: Color = Color::rgb(0.5, 0.5, 0.5);
/// High-contrast legend label color for selected categories.
pub const LABEL_EMPHASIS: Color = Color::rgb(0.0, 0.0, 0.0);
/// Annotation text color for the costliest-per-year labels.
pub const ANNOTATION_GREY: Color = Color::rgb(0.5, 0.5, 0.5);

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPalette {
    colors: IndexMap<DisasterCategory, Color>,
    fallback: Color,
}

impl Default for CategoryPalette {
    fn default() -> Self {
        let mut colors = IndexMap::new();
        colors.insert(
            DisasterCategory::WinterStormFreeze,
            Color::from_rgb8(0xcc, 0xcc, 0xcc),
        );
        colors.insert(
            DisasterCategory::DroughtWildfire,
            Color::from_rgb8(0xff, 0xff, 0xd9),
        );
        colors.insert(
            DisasterCategory::Flooding,
            Color::from_rgb8(0x41, 0xb6, 0xc4),
        );
        colors.insert(
            DisasterCategory::TropicalCyclone,
            Color::from_rgb8(0x08, 0x1d, 0x58),
        );
        colors.insert(
            DisasterCategory::SevereStorm,
            Color::from_rgb8(0xc7, 0xe9, 0xb4),
        );

        Self {
            colors,
            fallback: Color::rgb(0.6, 0.6, 0.6),
        }
    }
}

impl CategoryPalette {
    /// Palette with no per-category assignments; everything renders in the
    /// neutral fallback until colors are set.
    #[must_use]
    pub fn empty(fallback: Color) -> Self {
        Self {
            colors: IndexMap::new(),
            fallback,
        }
    }

    pub fn set_color(&mut self, category: DisasterCategory, color: Color) {
        self.colors.insert(category, color);
    }

    /// Fill color for `category`, falling back to neutral when unassigned.
    #[must_use]
    pub fn color_for(&self, category: DisasterCategory) -> Color {
        self.colors.get(&category).copied().unwrap_or(self.fallback)
    }

    #[must_use]
    pub fn fallback(&self) -> Color {
        self.fallback
    }
}
