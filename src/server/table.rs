//! Fixed-capacity registry of active client connections.

/// Slot registry with a hard capacity.
///
/// Inserts take the lowest free slot; a slot is reused only after `remove`
/// hands its occupant back. Slot indices carry no meaning beyond being
/// free-list keys. Iteration is in ascending slot order, which keeps the
/// readiness polling deterministic.
#[derive(Debug)]
pub struct ConnectionTable<T> {
    slots: Vec<Option<T>>,
}

impl<T> ConnectionTable<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    /// Inserts into the lowest free slot.
    ///
    /// At capacity the handle comes back to the caller untouched and no
    /// existing slot is disturbed.
    pub fn insert(&mut self, handle: T) -> Result<usize, T> {
        match self.slots.iter().position(|slot| slot.is_none()) {
            Some(index) => {
                self.slots[index] = Some(handle);
                Ok(index)
            }
            None => Err(handle),
        }
    }

    pub fn get(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    /// Frees the slot, returning its occupant.
    pub fn remove(&mut self, slot: usize) -> Option<T> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Occupied slots in ascending order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|handle| (index, handle)))
    }

    /// Number of occupied slots; never exceeds `capacity`.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
