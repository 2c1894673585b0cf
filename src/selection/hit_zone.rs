//! Touch hit testing for the panel list.
//!
//! The list is a vertical stack of equally sized rectangles sharing one
//! horizontal origin. Zone `k` starts `k * stride` rows below the first, so
//! a stride larger than the height leaves a gap row between zones.

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitZones {
    pub origin: Position,
    pub width: u16,
    pub height: u16,
    pub stride: u16,
    pub count: usize,
}

impl HitZones {
    /// Same geometry with a different number of zones.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Rectangle of zone `index`.
    pub fn zone(&self, index: usize) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y + self.stride * index as u16,
            self.width,
            self.height,
        )
    }

    pub fn zones(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.count).map(|index| self.zone(index))
    }

    /// Index of the zone containing `point`, if any.
    pub fn hit(&self, point: Position) -> Option<usize> {
        self.zones().position(|zone| zone.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONES: HitZones = HitZones {
        origin: Position { x: 2, y: 2 },
        width: 26,
        height: 1,
        stride: 2,
        count: 9,
    };

    #[test]
    fn test_zone_geometry() {
        assert_eq!(ZONES.zone(0), Rect::new(2, 2, 26, 1));
        assert_eq!(ZONES.zone(8), Rect::new(2, 18, 26, 1));
        assert_eq!(ZONES.zones().count(), 9);
    }

    #[test]
    fn test_hit_inside_each_zone() {
        for k in 0..9 {
            let zone = ZONES.zone(k);
            assert_eq!(ZONES.hit(Position::new(zone.x, zone.y)), Some(k));
            assert_eq!(ZONES.hit(Position::new(zone.right() - 1, zone.y)), Some(k));
        }
    }

    #[test]
    fn test_gap_rows_and_outside_miss() {
        assert_eq!(ZONES.hit(Position::new(10, 3)), None, "gap between 0 and 1");
        assert_eq!(ZONES.hit(Position::new(1, 2)), None, "left of zones");
        assert_eq!(ZONES.hit(Position::new(28, 2)), None, "right edge is exclusive");
        assert_eq!(ZONES.hit(Position::new(10, 20)), None, "below the last zone");
    }

    #[test]
    fn test_with_count_limits_zones() {
        let zones = ZONES.with_count(3);
        assert_eq!(zones.hit(Position::new(10, 6)), Some(2));
        assert_eq!(zones.hit(Position::new(10, 8)), None);
    }
}
