//! Page Configuration
//!
//! Compile-time constants for the page, grouped so state code takes them as one value.

/// Scroll offset past which the scroll-to-top button shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThreshold(pub f64);

impl ScrollThreshold {
    /// Single-page layout (hero + sections only)
    pub const SINGLE_PAGE: ScrollThreshold = ScrollThreshold(240.0);
    /// Layout with the expandable project gallery
    pub const EXPANDED: ScrollThreshold = ScrollThreshold(740.0);

    /// Strictly greater than: sitting exactly on the threshold keeps the button hidden
    pub fn is_exceeded_by(self, offset: f64) -> bool {
        offset > self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// localStorage key holding "light" / "dark"
    pub storage_key: &'static str,
    /// Class toggled on <html> for Tailwind's `darkMode: 'class'`
    pub dark_marker: &'static str,
    pub scroll_threshold: ScrollThreshold,
    /// Sticky header height plus breathing room
    pub header_offset_px: f64,
    /// Projects shown before "view all"
    pub summary_project_count: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme",
            dark_marker: "dark",
            scroll_threshold: ScrollThreshold::EXPANDED,
            header_offset_px: 72.0,
            summary_project_count: 4,
        }
    }
}
