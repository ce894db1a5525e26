use crate::record::EntityRecord;

/// Anything that can resolve an entity id to its record
///
/// The host application owns the actual documents; balance evaluation and
/// token placement only ever see resolved records through this trait.
pub trait EntitySource {
    /// Look up an entity by id
    fn entity(&self, id: &str) -> Option<&EntityRecord>;

    /// Check if an entity exists
    fn has_entity(&self, id: &str) -> bool {
        self.entity(id).is_some()
    }
}

impl<S: EntitySource + ?Sized> EntitySource for &S {
    fn entity(&self, id: &str) -> Option<&EntityRecord> {
        (**self).entity(id)
    }
}
