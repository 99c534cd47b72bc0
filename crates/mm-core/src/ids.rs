use core::fmt;
use core::num::NonZeroU32;

macro_rules! handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(NonZeroU32);

        impl $name {
            /// Handle for the 0-based position `index`.
            pub fn from_index(index: u32) -> Self {
                Self(NonZeroU32::MIN.saturating_add(index))
            }

            pub fn index(self) -> u32 {
                self.0.get() - 1
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.index())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.index())
            }
        }
    };
}

handle! {
    /// Position of an item definition inside a catalog. Two weapons of the
    /// same type share one `ItemId` no matter where they are mounted.
    ItemId
}

handle! {
    /// One equipped occurrence of an item on a loadout. Two weapons of the
    /// same type in different mounts have distinct `EquippedId`s.
    EquippedId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_survives_the_offset() {
        assert_eq!(ItemId::from_index(0).index(), 0);
        assert_eq!(EquippedId::from_index(41).index(), 41);
    }

    #[test]
    fn option_is_free() {
        assert_eq!(
            core::mem::size_of::<Option<EquippedId>>(),
            core::mem::size_of::<EquippedId>()
        );
    }

    #[test]
    fn ordered_and_printable() {
        assert!(EquippedId::from_index(3) < EquippedId::from_index(7));
        assert_eq!(ItemId::from_index(5).to_string(), "5");
        assert_eq!(format!("{:?}", EquippedId::from_index(2)), "EquippedId(2)");
    }
}
