use std::borrow::Cow;
use std::vec;

use crate::raw_map::ByteMap;
use crate::raw_map::slot::Slot;

/// Restartable cursor over the entries of a [`ByteMap`].
///
/// The cursor is either not started or positioned at a filled slot.
/// [`advance`](Iter::advance) walks the arena in slot order, which is
/// neither insertion order nor stable across a resize. Exhausting the
/// arena puts the cursor back in the not-started state, so a later
/// `advance` starts over; [`reset`](Iter::reset) rewinds explicitly.
///
/// The cursor holds a shared borrow of the map for its whole lifetime,
/// so the table cannot be mutated mid-iteration.
pub struct Iter<'m, 'k, V, S> {
    map: &'m ByteMap<'k, V, S>,
    pos: Option<usize>,
}

impl<'m, 'k, V, S> Iter<'m, 'k, V, S> {
    pub(crate) fn new(map: &'m ByteMap<'k, V, S>) -> Self {
        Self { map, pos: None }
    }

    /// Rewind the cursor to the not-started state.
    pub fn reset(&mut self) {
        self.pos = None;
    }

    /// Step to the next filled slot, yielding its key span and value.
    ///
    /// Returns `None` once the walk falls off the end of the arena; the
    /// cursor is then not started again.
    pub fn advance(&mut self) -> Option<(&'m [u8], &'m V)> {
        let mut index = match self.pos {
            Some(pos) => pos + 1,
            None => 0,
        };

        while index < self.map.capacity() {
            if let Some(slot) = self.map.slot_at(index) {
                self.pos = Some(index);
                return Some((slot.key.as_ref(), &slot.value));
            }
            index += 1;
        }

        self.pos = None;
        None
    }
}

impl<'m, V, S> Iterator for Iter<'m, '_, V, S> {
    type Item = (&'m [u8], &'m V);

    // Deliberately not fused: after `None` the cursor has reset and a
    // further `next` restarts the walk.
    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

/// Iterator over the key spans of a [`ByteMap`].
pub struct Keys<'m, 'k, V, S> {
    inner: Iter<'m, 'k, V, S>,
}

impl<'m, 'k, V, S> Keys<'m, 'k, V, S> {
    pub(crate) fn new(map: &'m ByteMap<'k, V, S>) -> Self {
        Self {
            inner: Iter::new(map),
        }
    }
}

impl<'m, V, S> Iterator for Keys<'m, '_, V, S> {
    type Item = &'m [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.advance().map(|(key, _)| key)
    }
}

/// Iterator over the values of a [`ByteMap`].
pub struct Values<'m, 'k, V, S> {
    inner: Iter<'m, 'k, V, S>,
}

impl<'m, 'k, V, S> Values<'m, 'k, V, S> {
    pub(crate) fn new(map: &'m ByteMap<'k, V, S>) -> Self {
        Self {
            inner: Iter::new(map),
        }
    }
}

impl<'m, V, S> Iterator for Values<'m, '_, V, S> {
    type Item = &'m V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.advance().map(|(_, value)| value)
    }
}

/// Consuming iterator that hands every entry's key and value back to the
/// caller instead of dropping them with the table.
pub struct IntoIter<'k, V> {
    inner: vec::IntoIter<Option<Slot<'k, V>>>,
}

impl<'k, V> IntoIter<'k, V> {
    pub(crate) fn new(slots: Vec<Option<Slot<'k, V>>>) -> Self {
        Self {
            inner: slots.into_iter(),
        }
    }
}

impl<'k, V> Iterator for IntoIter<'k, V> {
    type Item = (Cow<'k, [u8]>, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .find_map(|slot| slot.map(|slot| (slot.key, slot.value)))
    }
}
