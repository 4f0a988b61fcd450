use smallvec::SmallVec;

use crate::core::DisasterCategory;

/// Multi-select category filter, owned and exclusively mutated by the engine.
///
/// The empty set means "no filter selected" and matches every category; it is
/// never interpreted as "show nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selected: SmallVec<[DisasterCategory; 5]>,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> &[DisasterCategory] {
        &self.selected
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[must_use]
    pub fn is_selected(&self, category: DisasterCategory) -> bool {
        self.selected.contains(&category)
    }

    /// True when `category` passes the filter. Every category passes while the
    /// selection is empty.
    #[must_use]
    pub fn matches(&self, category: DisasterCategory) -> bool {
        self.selected.is_empty() || self.selected.contains(&category)
    }

    /// Pure set-membership toggle. Returns whether `category` is selected
    /// after the call.
    pub fn toggle(&mut self, category: DisasterCategory) -> bool {
        match self.selected.iter().position(|&c| c == category) {
            Some(index) => {
                self.selected.remove(index);
                false
            }
            None => {
                self.selected.push(category);
                true
            }
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

/// Payload the host UI needs to display a hover tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRequest {
    pub name: String,
    /// Cost in billions.
    pub magnitude: f64,
}
