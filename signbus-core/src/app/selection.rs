//! Selected route per category

use crate::catalog::{RouteCategory, RouteKey};

/// Remembers the last route picked for each category
///
/// Bus and tram selections are independent; picking a tram route leaves the
/// bus selection untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    bus: Option<RouteKey>,
    tram: Option<RouteKey>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a route, replacing any earlier pick in its category
    pub fn select(&mut self, key: RouteKey) {
        let category = key.category;
        *self.slot_mut(category) = Some(key);
    }

    pub fn selected(&self, category: RouteCategory) -> Option<&RouteKey> {
        match category {
            RouteCategory::Bus => self.bus.as_ref(),
            RouteCategory::Tram => self.tram.as_ref(),
        }
    }

    pub fn clear(&mut self, category: RouteCategory) {
        *self.slot_mut(category) = None;
    }

    fn slot_mut(&mut self, category: RouteCategory) -> &mut Option<RouteKey> {
        match category {
            RouteCategory::Bus => &mut self.bus,
            RouteCategory::Tram => &mut self.tram,
        }
    }
}
