use bestiary_core::{EntitySource, MAX_COUNT};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Request to place `count` copies of one template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRequest {
    pub template_id: String,
    /// Display name used for instance labels
    pub name: String,
    pub count: u32,
}

impl PlacementRequest {
    /// Create a request labelled with the template id
    pub fn new(template_id: impl Into<String>, count: u32) -> Self {
        let template_id = template_id.into();
        PlacementRequest {
            name: template_id.clone(),
            template_id,
            count,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Number of instances to place; zero reads as one, and the count is
    /// capped at [`MAX_COUNT`]
    pub fn instance_count(&self) -> u32 {
        self.count.clamp(1, MAX_COUNT)
    }
}

/// Resolve a selection of (template id, count) pairs into requests
///
/// Unknown templates are dropped here rather than at deploy time so that they
/// take up no room on the grid. Selection order is kept.
pub fn prepare_requests<S, I, T>(selection: I, source: &S) -> Vec<PlacementRequest>
where
    S: EntitySource + ?Sized,
    I: IntoIterator<Item = (T, u32)>,
    T: AsRef<str>,
{
    selection
        .into_iter()
        .filter_map(|(id, count)| {
            let id = id.as_ref();
            match source.entity(id) {
                Some(record) => Some(PlacementRequest::new(id, count).with_name(record.name.clone())),
                None => {
                    warn!(template_id = %id, "unknown template, skipping");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestiary_core::{Bestiary, EntityRecord};

    fn bestiary() -> Bestiary {
        vec![
            EntityRecord::monster("wolf", "Wolf", 12.0),
            EntityRecord::monster("ogre", "Ogre", 40.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_instance_count_floor() {
        assert_eq!(PlacementRequest::new("wolf", 0).instance_count(), 1);
        assert_eq!(PlacementRequest::new("wolf", 3).instance_count(), 3);
    }

    #[test]
    fn test_instance_count_cap() {
        assert_eq!(PlacementRequest::new("wolf", u32::MAX).instance_count(), MAX_COUNT);
    }

    #[test]
    fn test_default_name_is_id() {
        let request = PlacementRequest::new("wolf", 2);
        assert_eq!(request.name, "wolf");
    }

    #[test]
    fn test_prepare_requests() {
        let requests = prepare_requests([("ogre", 1), ("ghost", 2), ("wolf", 3)], &bestiary());
        assert_eq!(
            requests,
            vec![
                PlacementRequest::new("ogre", 1).with_name("Ogre"),
                PlacementRequest::new("wolf", 3).with_name("Wolf"),
            ]
        );
    }

    #[test]
    fn test_prepare_requests_owned_ids() {
        let selection = vec![("wolf".to_string(), 2)];
        let requests = prepare_requests(selection, &bestiary());
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].name, "Wolf");
    }
}
