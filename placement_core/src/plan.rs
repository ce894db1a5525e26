//! Grid placement planning
//!
//! Requests are laid out in order. Within a request, tokens fill a row left to
//! right and wrap after `per_row` of them. Every request then starts on a
//! fresh row one step below the last one used, leaving a visual gap between
//! groups (a request that exactly fills its last row gets a double gap).

use crate::config::LayoutConfig;
use crate::request::PlacementRequest;
use crate::ConfigurationError;
use serde::Serialize;

/// Where one instance of a template goes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub template_id: String,
    pub instance_label: String,
    pub x: f64,
    pub y: f64,
}

/// Ordered placements for a batch of requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementPlan {
    placements: Vec<Placement>,
    next_origin: (f64, f64),
}

impl PlacementPlan {
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Cursor position a following group would start at
    pub fn next_origin(&self) -> (f64, f64) {
        self.next_origin
    }
}

impl IntoIterator for PlacementPlan {
    type Item = Placement;
    type IntoIter = std::vec::IntoIter<Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.into_iter()
    }
}

/// Row cursor over the layout grid
struct GridCursor<'a> {
    layout: &'a LayoutConfig,
    x: f64,
    y: f64,
}

impl<'a> GridCursor<'a> {
    fn new(layout: &'a LayoutConfig) -> Self {
        GridCursor {
            layout,
            x: layout.origin_x,
            y: layout.origin_y,
        }
    }

    /// Step past the `placed`-th token of the current group (1-based)
    fn advance(&mut self, placed: u32) {
        self.x += self.layout.spacing;
        if placed % self.layout.per_row == 0 {
            self.x = self.layout.origin_x;
            self.y += self.layout.spacing;
        }
    }

    fn next_group(&mut self) {
        self.x = self.layout.origin_x;
        self.y += self.layout.spacing;
    }
}

/// Plan placements for `requests` on `layout`
pub fn plan(
    requests: &[PlacementRequest],
    layout: &LayoutConfig,
) -> Result<PlacementPlan, ConfigurationError> {
    layout.validate()?;

    let mut cursor = GridCursor::new(layout);
    let mut placements = Vec::new();

    for request in requests {
        let count = request.instance_count();
        let name = request.name.trim();

        for index in 1..=count {
            let instance_label = if count > 1 {
                format!("{} {}", name, index)
            } else {
                name.to_string()
            };

            placements.push(Placement {
                template_id: request.template_id.clone(),
                instance_label,
                x: cursor.x,
                y: cursor.y,
            });
            cursor.advance(index);
        }

        cursor.next_group();
    }

    Ok(PlacementPlan {
        placements,
        next_origin: (cursor.x, cursor.y),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(plan: &PlacementPlan) -> Vec<(f64, f64)> {
        plan.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_wrap_after_row() {
        let layout = LayoutConfig::new(1000.0, 1000.0, 150.0, 5);
        let plan = plan(&[PlacementRequest::new("a", 7)], &layout).unwrap();

        assert_eq!(
            coords(&plan),
            vec![
                (1000.0, 1000.0),
                (1150.0, 1000.0),
                (1300.0, 1000.0),
                (1450.0, 1000.0),
                (1600.0, 1000.0),
                (1000.0, 1150.0),
                (1150.0, 1150.0),
            ]
        );
        assert_eq!(plan.next_origin(), (1000.0, 1300.0));
    }

    #[test]
    fn test_full_row_gets_double_gap() {
        let layout = LayoutConfig::default();
        let plan = plan(&[PlacementRequest::new("a", 5)], &layout).unwrap();
        assert_eq!(plan.next_origin(), (1000.0, 1300.0));
    }

    #[test]
    fn test_groups_start_on_new_row() {
        let layout = LayoutConfig::default();
        let requests = vec![
            PlacementRequest::new("wolf", 2).with_name("Wolf"),
            PlacementRequest::new("ogre", 1).with_name("Ogre"),
        ];
        let plan = plan(&requests, &layout).unwrap();

        assert_eq!(
            coords(&plan),
            vec![(1000.0, 1000.0), (1150.0, 1000.0), (1000.0, 1150.0)]
        );
        assert_eq!(plan.placements()[2].template_id, "ogre");
        assert_eq!(plan.next_origin(), (1000.0, 1300.0));
    }

    #[test]
    fn test_labels() {
        let layout = LayoutConfig::default();
        let requests = vec![
            PlacementRequest::new("ogre", 1).with_name("Ogre"),
            PlacementRequest::new("rat", 3).with_name("Rat"),
        ];
        let plan = plan(&requests, &layout).unwrap();

        let labels: Vec<&str> = plan.iter().map(|p| p.instance_label.as_str()).collect();
        assert_eq!(labels, vec!["Ogre", "Rat 1", "Rat 2", "Rat 3"]);
    }

    #[test]
    fn test_zero_count_places_one() {
        let plan = plan(&[PlacementRequest::new("imp", 0)], &LayoutConfig::default()).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.placements()[0].instance_label, "imp");
    }

    #[test]
    fn test_huge_count_is_capped() {
        let plan = plan(&[PlacementRequest::new("rat", u32::MAX)], &LayoutConfig::default()).unwrap();
        assert_eq!(plan.len(), bestiary_core::MAX_COUNT as usize);
        assert_eq!(plan.placements()[0].instance_label, "rat 1");
    }

    #[test]
    fn test_empty_requests() {
        let plan = plan(&[], &LayoutConfig::default()).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.next_origin(), (1000.0, 1000.0));
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let requests = [PlacementRequest::new("a", 2)];
        assert_eq!(
            plan(&requests, &LayoutConfig::new(0.0, 0.0, 0.0, 5)),
            Err(ConfigurationError::NonPositiveSpacing(0.0))
        );
        assert_eq!(
            plan(&requests, &LayoutConfig::new(0.0, 0.0, 50.0, 0)),
            Err(ConfigurationError::ZeroPerRow)
        );
    }

    #[test]
    fn test_plan_is_deterministic() {
        let requests = vec![
            PlacementRequest::new("a", 6),
            PlacementRequest::new("b", 4),
        ];
        let layout = LayoutConfig::new(0.0, 0.0, 100.0, 3);
        assert_eq!(plan(&requests, &layout), plan(&requests, &layout));
    }
}
