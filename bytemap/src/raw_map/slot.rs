use std::borrow::Cow;

/// A filled slot in the table arena.
///
/// `key` is either a private copy of the caller's key span or a borrow of
/// it, decided once at map construction; dropping the slot releases exactly
/// the owned variant. `desired` is the index the occupant's hash maps to on
/// an empty table of the current capacity. It exists only to keep
/// backward-shift deletion correct and is rewritten whenever the occupant
/// changes, always against the capacity of the arena being written.
pub(crate) struct Slot<'k, V> {
    pub(crate) desired: usize,
    pub(crate) hash: u64,
    pub(crate) key: Cow<'k, [u8]>,
    pub(crate) value: V,
}
