//! Adaptive split of clip rows between the top-level menu and a "More" submenu
use serde::{Deserialize, Serialize};

/// Estimates used to decide how many clip rows fit at the top level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuMetrics {
    /// Share of the display's visible height the top-level menu may use
    pub screen_fraction: f64,
    /// Estimated height of one menu row in points
    pub row_height: f64,
    /// Estimated number of non-clip rows at the top level
    pub fixed_row_count: usize,
    /// Estimated menu chrome (top and bottom insets) in points
    pub vertical_padding: f64,
}

impl Default for MenuMetrics {
    fn default() -> Self {
        Self {
            screen_fraction: 0.75,
            row_height: 22.0,
            fixed_row_count: 8,
            vertical_padding: 44.0,
        }
    }
}

impl MenuMetrics {
    /// Number of clip rows that fit at the top level, never less than one
    pub fn top_level_budget(&self, usable_height: f64) -> usize {
        if !(self.row_height > 0.0) {
            return 1;
        }

        let max_menu_height = usable_height * self.screen_fraction;
        let fixed_height = self.fixed_row_count as f64 * self.row_height + self.vertical_padding;
        let available = (max_menu_height - fixed_height).max(0.0);
        let rows = (available / self.row_height).floor() as usize;
        rows.max(1)
    }
}

/// Clip rows split into top-level rows and overflow rows, both in store order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSections<'a, T> {
    pub primary: &'a [T],
    pub overflow: &'a [T],
}

/// Split `items` for a menu whose top level holds `budget` clip rows
///
/// When everything does not fit, one top-level slot is given up for the
/// overflow submenu itself.
pub fn partition<T>(items: &[T], budget: usize) -> MenuSections<'_, T> {
    if items.len() <= budget {
        return MenuSections {
            primary: items,
            overflow: &[],
        };
    }

    let primary_count = budget.saturating_sub(1);
    let (primary, overflow) = items.split_at(primary_count);
    MenuSections { primary, overflow }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_on_900pt_display() {
        let metrics = MenuMetrics::default();
        // floor((675 - (8 * 22 + 44)) / 22) = floor(455 / 22) = 20
        assert_eq!(metrics.top_level_budget(900.0), 20);
    }

    #[test]
    fn test_budget_is_at_least_one() {
        let metrics = MenuMetrics::default();
        assert_eq!(metrics.top_level_budget(0.0), 1);
        assert_eq!(metrics.top_level_budget(200.0), 1);
    }

    #[test]
    fn test_budget_with_degenerate_row_height() {
        let metrics = MenuMetrics {
            row_height: 0.0,
            ..MenuMetrics::default()
        };
        assert_eq!(metrics.top_level_budget(900.0), 1);
    }

    #[test]
    fn test_partition_overflows_with_reserved_slot() {
        let clips: Vec<usize> = (0..50).collect();
        let sections = partition(&clips, 20);
        assert_eq!(sections.primary.len(), 19);
        assert_eq!(sections.overflow.len(), 31);
        assert_eq!(sections.primary.first(), Some(&0));
        assert_eq!(sections.overflow.first(), Some(&19));
        assert_eq!(sections.overflow.last(), Some(&49));
    }

    #[test]
    fn test_partition_everything_fits() {
        let clips: Vec<usize> = (0..20).collect();
        let sections = partition(&clips, 20);
        assert_eq!(sections.primary.len(), 20);
        assert!(sections.overflow.is_empty());
    }

    #[test]
    fn test_partition_budget_of_one_moves_all_to_submenu() {
        let clips = vec!["a", "b"];
        let sections = partition(&clips, 1);
        assert!(sections.primary.is_empty());
        assert_eq!(sections.overflow, &["a", "b"][..]);
    }

    #[test]
    fn test_partition_empty() {
        let clips: Vec<u8> = Vec::new();
        let sections = partition(&clips, 5);
        assert!(sections.primary.is_empty());
        assert!(sections.overflow.is_empty());
    }
}
