use std::hash::{BuildHasher, Hasher};

cfg_if::cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        type HashWord = u64;
        const FNV_PRIME: HashWord = 0x0000_0100_0000_01b3;
        const FNV_BASIS: HashWord = 0xcbf2_9ce4_8422_2325;
    } else {
        type HashWord = u32;
        const FNV_PRIME: HashWord = 0x0100_0193;
        const FNV_BASIS: HashWord = 0x811c_9dc5;
    }
}

/// Fowler-Noll-Vo (FNV-1a) hasher over raw bytes.
///
/// The accumulator is pointer-width: 64-bit on 64-bit targets, 32-bit
/// otherwise, widened to `u64` by [`finish`](Hasher::finish).
#[derive(Debug, Copy, Clone)]
pub struct FnvHasher {
    hash: HashWord,
}

impl FnvHasher {
    /// Creates a new [`FnvHasher`], initialized with the FNV offset basis.
    pub fn new() -> Self {
        Self { hash: FNV_BASIS }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.hash as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.hash ^= *byte as HashWord;
            self.hash = self.hash.wrapping_mul(FNV_PRIME);
        }
    }
}

/// Builder for [`FnvHasher`]
#[derive(Debug, Copy, Clone, Default)]
pub struct FnvBuildHasher;

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FnvHasher::new()
    }
}
