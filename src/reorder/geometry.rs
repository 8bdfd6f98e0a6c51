// reorder/geometry.rs

use bevy::prelude::Resource;

/// Layout facts about the list viewport, in logical pixels.
///
/// Written by the list's measurement systems, read-only for the reorder
/// engine. `row_height` is sampled from the most recently laid-out row and is
/// assumed to hold for every row; with variable-height rows the index mapping
/// is only approximate.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportGeometry {
    /// Vertical scroll offset of the list content
    pub scroll_offset: f32,
    /// Window y of the viewport's top edge
    pub viewport_top: f32,
    /// Visible height of the viewport
    pub viewport_height: f32,
    /// Height of one row (0.0 until a row has been measured)
    pub row_height: f32,
}

/// Which edge of the viewport the pointer is pressing against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeZone {
    Top,
    Bottom,
}

impl ViewportGeometry {
    /// Window y of the viewport's bottom edge
    pub fn viewport_bottom(&self) -> f32 {
        self.viewport_top + self.viewport_height
    }

    /// Has a row been measured yet?
    pub fn has_row_height(&self) -> bool {
        self.row_height.is_finite() && self.row_height > 0.0
    }

    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.viewport_top && y <= self.viewport_bottom()
    }

    /// Map an absolute pointer y to a list index in `[0, len - 1]`.
    ///
    /// Returns `None` for an empty list or when no row height is known, so
    /// callers skip reordering instead of working with a meaningless index.
    pub fn y_to_index(&self, y: f32, len: usize) -> Option<usize> {
        if len == 0 || !self.has_row_height() {
            return None;
        }

        let value = ((self.scroll_offset + y - self.viewport_top) / self.row_height).floor();
        if value.is_nan() {
            return None;
        }

        let last = len - 1;
        if value <= 0.0 {
            Some(0)
        } else if value >= last as f32 {
            Some(last)
        } else {
            Some(value as usize)
        }
    }

    /// Edge check for auto-scroll. The bottom edge is tested first, so it wins
    /// when the viewport is too short for the two margins to be disjoint.
    pub fn edge_zone(&self, y: f32, margin: f32) -> Option<EdgeZone> {
        if y + margin > self.viewport_bottom() {
            Some(EdgeZone::Bottom)
        } else if y < self.viewport_top + margin {
            Some(EdgeZone::Top)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> ViewportGeometry {
        ViewportGeometry {
            scroll_offset: 0.0,
            viewport_top: 50.0,
            viewport_height: 500.0,
            row_height: 40.0,
        }
    }

    #[test]
    fn test_y_to_index_basic() {
        let g = geometry();
        assert_eq!(g.y_to_index(50.0, 10), Some(0));
        assert_eq!(g.y_to_index(89.9, 10), Some(0));
        assert_eq!(g.y_to_index(90.0, 10), Some(1));
        assert_eq!(g.y_to_index(170.0, 10), Some(3));
    }

    #[test]
    fn test_y_to_index_accounts_for_scroll() {
        let g = ViewportGeometry {
            scroll_offset: 400.0,
            ..geometry()
        };
        assert_eq!(g.y_to_index(50.0, 100), Some(10));
    }

    #[test]
    fn test_y_to_index_clamps() {
        let g = geometry();
        assert_eq!(g.y_to_index(-1000.0, 10), Some(0));
        assert_eq!(g.y_to_index(10_000.0, 10), Some(9));
        assert_eq!(g.y_to_index(10_000.0, 1), Some(0));
    }

    #[test]
    fn test_y_to_index_empty_list() {
        assert_eq!(geometry().y_to_index(100.0, 0), None);
    }

    #[test]
    fn test_y_to_index_without_row_height() {
        let g = ViewportGeometry {
            row_height: 0.0,
            ..geometry()
        };
        assert_eq!(g.y_to_index(100.0, 10), None);

        let g = ViewportGeometry {
            row_height: f32::NAN,
            ..geometry()
        };
        assert_eq!(g.y_to_index(100.0, 10), None);
    }

    #[test]
    fn test_y_to_index_monotonic() {
        let g = ViewportGeometry {
            scroll_offset: 123.0,
            ..geometry()
        };
        let mut previous = 0;
        let mut y = -200.0;
        while y < 2000.0 {
            let index = g.y_to_index(y, 25).unwrap();
            assert!(index >= previous, "index went backwards at y={}", y);
            assert!(index < 25);
            previous = index;
            y += 3.7;
        }
        assert_eq!(previous, 24);
    }

    #[test]
    fn test_edge_zone() {
        let g = geometry();
        assert_eq!(g.edge_zone(300.0, 100.0), None);
        assert_eq!(g.edge_zone(460.0, 100.0), Some(EdgeZone::Bottom));
        assert_eq!(g.edge_zone(140.0, 100.0), Some(EdgeZone::Top));
    }

    #[test]
    fn test_edge_zone_bottom_wins_on_short_viewport() {
        let g = ViewportGeometry {
            viewport_height: 150.0,
            ..geometry()
        };
        // 100 is inside both margins
        assert_eq!(g.edge_zone(100.0, 100.0), Some(EdgeZone::Bottom));
    }
}
