//! Bar Chart Layout
//!
//! Maps proficiency entries onto a fixed 0..=100 horizontal scale.

use crate::models::ProficiencyEntry;

pub const SCALE_MAX: u8 = 100;

/// One laid-out bar
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: u8,
    /// Bar length as a fraction of the full track, 0.0..=1.0
    pub fraction: f64,
}

impl ChartBar {
    pub fn width_style(&self) -> String {
        format!("width: {:.1}%", self.fraction * 100.0)
    }

    pub fn tooltip(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

pub fn layout_bars(entries: &[ProficiencyEntry]) -> Vec<ChartBar> {
    entries
        .iter()
        .map(|entry| {
            let value = entry.score.min(SCALE_MAX);
            ChartBar {
                label: entry.category,
                value,
                fraction: f64::from(value) / f64::from(SCALE_MAX),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &'static str, score: u8) -> ProficiencyEntry {
        ProficiencyEntry { category, score }
    }

    #[test]
    fn test_bars_are_proportional_and_ordered() {
        let bars = layout_bars(&[entry("Backend", 85), entry("Frontend", 70), entry("DevOps", 0)]);
        assert_eq!(bars.iter().map(|b| b.label).collect::<Vec<_>>(), vec!["Backend", "Frontend", "DevOps"]);
        assert!((bars[0].fraction - 0.85).abs() < 1e-9);
        assert!((bars[1].fraction - 0.70).abs() < 1e-9);
        assert_eq!(bars[2].fraction, 0.0);
    }

    #[test]
    fn test_scores_above_scale_are_clamped() {
        let bars = layout_bars(&[entry("Overflow", 140), entry("Full", 100)]);
        assert_eq!(bars[0].value, 100);
        assert_eq!(bars[0].fraction, 1.0);
        assert_eq!(bars[1].fraction, 1.0);
    }

    #[test]
    fn test_tooltip_and_width() {
        let bar = &layout_bars(&[entry("Mobile", 60)])[0];
        assert_eq!(bar.tooltip(), "Mobile: 60");
        assert_eq!(bar.width_style(), "width: 60.0%");
    }
}
