use dto::club::Club;

use crate::registry::Result;
use crate::registry::club_registry::ClubRegistry;
use crate::registry::error::RegistryError;

/// A single-pass cursor over the clubs of a [ClubRegistry].
///
/// The cursor walks the storage slots in order and expects every slot below
/// the live count to be occupied. Mutating the registry between `next` calls
/// voids that expectation; the cursor is not restartable.
pub struct ClubCursor<'a> {
    registry: &'a ClubRegistry,
    position: usize,
}

impl<'a> ClubCursor<'a> {
    pub(crate) fn new(registry: &'a ClubRegistry) -> Self {
        Self {
            registry,
            position: 0,
        }
    }

    /// Whether `next` would return a club rather than an error.
    pub fn has_next(&self) -> bool {
        self.position < self.registry.size()
    }

    /// Returns the club at the current storage slot and advances.
    pub fn next(&mut self) -> Result<&'a Club> {
        if !self.has_next() {
            return Err(RegistryError::CursorExhausted);
        }

        let club = self
            .registry
            .get(self.position)
            .ok_or(RegistryError::CursorExhausted)?;
        self.position += 1;
        Ok(club)
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::club_registry::ClubRegistry;
    use crate::registry::error::RegistryError;
    use dto::club::Club;

    #[test]
    fn should_walk_every_club_in_storage_order() {
        let mut registry = ClubRegistry::new(3);
        registry.add(Club::new_test("Cooking club", 12)).unwrap();
        registry.add(Club::new_test("Computer Club", 3)).unwrap();

        let mut cursor = registry.iter();

        assert!(cursor.has_next());
        assert_eq!("Cooking club", cursor.next().unwrap().name());
        assert!(cursor.has_next());
        assert_eq!("Computer Club", cursor.next().unwrap().name());
        assert!(!cursor.has_next());
    }

    #[test]
    fn should_fail_once_exhausted() {
        let mut registry = ClubRegistry::new(2);
        registry.add(Club::new_test("Cooking club", 12)).unwrap();

        let mut cursor = registry.iter();
        cursor.next().unwrap();

        assert_eq!(Err(RegistryError::CursorExhausted), cursor.next());
    }

    #[test]
    fn should_fail_on_empty_registry() {
        let registry = ClubRegistry::new(2);

        let mut cursor = registry.iter();

        assert!(!cursor.has_next());
        assert_eq!(Err(RegistryError::CursorExhausted), cursor.next());
    }

    #[test]
    fn should_fail_on_hole_left_by_removal() {
        let mut registry = ClubRegistry::new(3);
        registry.add(Club::new_test("Cooking club", 12)).unwrap();
        registry.add(Club::new_test("Computer Club", 3)).unwrap();
        assert!(registry.remove(&Club::new_test("Cooking club", 12)));

        let mut cursor = registry.iter();

        // One live club remains, but it sits behind the hole in slot 0.
        assert!(cursor.has_next());
        assert_eq!(Err(RegistryError::CursorExhausted), cursor.next());
    }
}
