use std::fmt;

use dto::club::Club;
use dto::club_president::ClubPresident;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::registry::Result;
use crate::registry::cursor::ClubCursor;
use crate::registry::error::RegistryError;
use crate::registry::ordering;
use crate::tools::normalize;

/// A bounded, name-deduplicated store of clubs.
///
/// The backing storage has a fixed number of slots, set once at construction.
/// A removal leaves its slot empty; clubs never shift to fill a hole, and the
/// name lookups stop at the first empty slot they meet. A club stored behind
/// a hole is therefore unreachable by name until the store is sorted or
/// cleared.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClubRegistry {
    slots: Vec<Option<Club>>,
    count: usize,
}

impl ClubRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            count: 0,
        }
    }

    /// The number of slots, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of clubs currently stored.
    pub fn size(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the first club whose name matches after trimming and
    /// case-folding. The scan does not see past the first empty slot.
    pub fn find(&self, name: &str) -> Option<&Club> {
        if self.count == 0 {
            return None;
        }

        let wanted = normalize(name);
        for slot in &self.slots {
            match slot {
                None => return None,
                Some(club) if normalize(club.name()) == wanted => return Some(club),
                Some(_) => {}
            }
        }

        None
    }

    pub fn exists(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Whether the named club exists and is chaired by the given president.
    /// A club without a president never matches.
    pub fn president_matches(&self, name: &str, president: &ClubPresident) -> bool {
        self.find(name)
            .is_some_and(|club| club.president().as_ref() == Some(president))
    }

    /// Stores the club in the next logical slot.
    /// Returns `Ok(false)` without storing anything when a club with the same
    /// name is already registered.
    pub fn add(&mut self, club: Club) -> Result<bool> {
        if self.find(club.name()).is_some() {
            return Ok(false);
        }
        if self.count == self.capacity() {
            return Err(RegistryError::CapacityExhausted {
                capacity: self.capacity(),
            });
        }

        debug!("Storing the {} club in slot {}.", club.name(), self.count);
        self.slots[self.count] = Some(club);
        self.count += 1;
        Ok(true)
    }

    /// Clears the slot holding the club registered under the given record's
    /// name. The slot stays empty afterwards; later clubs are not shifted.
    pub fn remove(&mut self, club: &Club) -> bool {
        let index = self
            .find(club.name())
            .and_then(|found| self.find_index(found));

        match index {
            Some(index) => {
                debug!("Clearing slot {index}.");
                self.slots[index] = None;
                self.count -= 1;
                true
            }
            None => false,
        }
    }

    /// Locates the slot holding a record equal to the given one, scanning the
    /// whole storage. Empty slots are skipped, not dereferenced.
    fn find_index(&self, club: &Club) -> Option<usize> {
        self.slots.iter().position(|slot| slot.as_ref() == Some(club))
    }

    pub fn contains(&self, club: &Club) -> bool {
        self.exists(club.name())
    }

    pub fn contains_all<'a, I>(&self, clubs: I) -> bool
    where
        I: IntoIterator<Item = &'a Club>,
    {
        clubs.into_iter().all(|club| self.exists(club.name()))
    }

    /// Returns the club stored in the given slot, if any.
    pub fn get(&self, index: usize) -> Option<&Club> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// A read-only view of the whole storage, holes included.
    pub fn slots(&self) -> &[Option<Club>] {
        &self.slots
    }

    /// Reorders the whole storage, ascending by member count.
    /// Empty slots end up after every club.
    pub fn sort_by_member_count(&mut self) {
        self.slots.sort_by(ordering::by_member_count);
    }

    /// Reorders the whole storage, descending by stored club name.
    pub fn sort_by_name(&mut self) {
        self.slots.sort_by(ordering::by_name);
    }

    /// Reorders the whole storage, descending by president display form.
    /// Clubs without a president end up after those with one.
    pub fn sort_by_president(&mut self) {
        self.slots.sort_by(ordering::by_president);
    }

    pub fn add_all<I>(&mut self, _clubs: I) -> Result<bool>
    where
        I: IntoIterator<Item = Club>,
    {
        Err(RegistryError::Unsupported {
            operation: "add_all",
        })
    }

    pub fn remove_all<'a, I>(&mut self, _clubs: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a Club>,
    {
        Err(RegistryError::Unsupported {
            operation: "remove_all",
        })
    }

    pub fn retain_all<'a, I>(&mut self, _clubs: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a Club>,
    {
        Err(RegistryError::Unsupported {
            operation: "retain_all",
        })
    }

    /// Reserved for a storage-backed version.
    pub fn close(&mut self) -> Result<()> {
        Err(RegistryError::Unsupported { operation: "close" })
    }

    /// Discards every stored club, keeping the capacity.
    pub fn clear(&mut self) {
        debug!("Clearing all {} slots.", self.capacity());
        self.count = 0;
        self.slots = vec![None; self.capacity()];
    }

    pub fn iter(&self) -> ClubCursor<'_> {
        ClubCursor::new(self)
    }
}

impl fmt::Display for ClubRegistry {
    /// Renders slot 0 unconditionally (an empty first slot renders as an
    /// empty segment), then every following slot up to, and excluding, the
    /// last one, stopping at the first empty slot. The last slot never
    /// renders.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.slots.first() else {
            return Ok(());
        };
        if let Some(club) = first {
            write!(f, "{club}")?;
        }
        if self.capacity() < 2 {
            return Ok(());
        }

        for slot in &self.slots[1..self.capacity() - 1] {
            match slot {
                Some(club) => write!(f, "\n{club}")?,
                None => break,
            }
        }

        Ok(())
    }
}
