//! Identifier newtypes.
//!
//! Passenger ids are dense (`0..n`), so every per-passenger array in the
//! workspace is indexed directly with [`PassengerId::index`].

use std::fmt;

macro_rules! dense_id {
    ($(#[$attr:meta])* $name:ident, $prefix:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Id for position `i` of a dense array.
            #[inline]
            pub fn from_index(i: usize) -> Self {
                $name(i as u32)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

dense_id! {
    /// A passenger: position in the manifest and in the passenger store.
    PassengerId, "P"
}

dense_id! {
    /// A run inside a batch: position in the batch's config list.
    RunId, "run#"
}
