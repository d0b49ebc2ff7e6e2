//! Strongly typed identifier wrappers.
//!
//! Both ids are `Copy + Ord + Hash` so they work as map keys and sort keys
//! without ceremony.  Passenger ids start at 1 and are handed out in creation
//! order; trip numbers start at 1 for the first trip.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Raw integer value.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }

            /// The id that follows `self`.
            #[inline]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }

        impl From<$name> for u64 {
            #[inline(always)]
            fn from(id: $name) -> u64 {
                id.0 as u64
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// A passenger, numbered from 1 in creation order.
    pub struct PassengerId(u32) => "passenger";
}

typed_id! {
    /// A trip of the vehicle, numbered from 1.
    pub struct TripId(u32) => "trip";
}

impl PassengerId {
    /// The first id handed out.
    pub const FIRST: PassengerId = PassengerId(1);
}

impl TripId {
    /// The first trip.
    pub const FIRST: TripId = TripId(1);
}
