mod hasher;
mod iter;
mod key;
pub mod raw_map;

pub use hasher::{FnvBuildHasher, FnvHasher};
pub use iter::{IntoIter, Iter, Keys, Values};
pub use key::KeyMode;
pub use raw_map::ByteMap;
