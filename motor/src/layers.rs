//! Collision layers used by the ground check (and anything else that filters
//! colliders by category).
//!
//! Layers are plain bit indices; a [`LayerMask`] is a set of them. The Rapier
//! backend stores a collider's layer set in its `user_data` so filters never
//! need engine-specific group types.

use num_traits::{One, PrimInt};

/// Trait implemented by layer enums.
///
/// The enum's discriminant (via `#[repr(u8)]`) determines the bit index.
pub trait FlagBitmask {
    type Storage: PrimInt;

    fn bit_index(&self) -> u8;

    fn mask(&self) -> Self::Storage {
        // NOTE: `bit_index()` must be < number of bits in `Storage`.
        Self::Storage::one() << (self.bit_index() as usize)
    }
}

/// A set of flags stored in a primitive integer.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitmaskFlags<T: PrimInt> {
    pub bits: T,
}

impl<T: PrimInt> BitmaskFlags<T> {
    pub fn new(bits: T) -> Self {
        Self { bits }
    }

    pub fn empty() -> Self {
        Self { bits: T::zero() }
    }

    pub fn all() -> Self {
        Self { bits: !T::zero() }
    }

    pub fn add<U: FlagBitmask<Storage = T>>(&mut self, flag: U) {
        self.bits = self.bits | flag.mask();
    }

    pub fn remove<U: FlagBitmask<Storage = T>>(&mut self, flag: U) {
        self.bits = self.bits & !flag.mask();
    }

    pub fn has<U: FlagBitmask<Storage = T>>(&self, flag: U) -> bool {
        (self.bits & flag.mask()) != T::zero()
    }

    /// Builder-style [`add`](Self::add).
    pub fn with<U: FlagBitmask<Storage = T>>(mut self, flag: U) -> Self {
        self.add(flag);
        self
    }

    pub fn from_flags<U: FlagBitmask<Storage = T> + Copy>(flags: &[U]) -> Self {
        Self {
            bits: flags.iter().fold(T::zero(), |acc, f| acc | f.mask()),
        }
    }

    /// Do the two sets share at least one flag?
    pub fn intersects(&self, other: Self) -> bool {
        (self.bits & other.bits) != T::zero()
    }

    pub fn is_empty(&self) -> bool {
        self.bits == T::zero()
    }
}

/// Declare a bitmask-backed enum and implement `FlagBitmask` for it.
#[macro_export]
macro_rules! define_bitmask_flags {
    ($name:ident, $storage:ty, { $($variant:ident),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($variant),*
        }

        impl $crate::layers::FlagBitmask for $name {
            type Storage = $storage;

            fn bit_index(&self) -> u8 {
                *self as u8
            }
        }
    };
}

define_bitmask_flags!(Layer, u32, {
    Ground,
    Wall,
    Player,
    Prop,
});

/// Set of [`Layer`]s.
pub type LayerMask = BitmaskFlags<u32>;

impl LayerMask {
    /// Encode for a collider's `user_data` slot.
    #[inline]
    pub fn to_user_data(self) -> u128 {
        self.bits as u128
    }

    /// Decode from a collider's `user_data` slot (upper bits are ignored).
    #[inline]
    pub fn from_user_data(data: u128) -> Self {
        Self::new((data & u32::MAX as u128) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_map_to_distinct_bits() {
        assert_eq!(Layer::Ground.mask(), 0b0001);
        assert_eq!(Layer::Wall.mask(), 0b0010);
        assert_eq!(Layer::Player.mask(), 0b0100);
    }

    #[test]
    fn masks_intersect_only_on_shared_layers() {
        let ground = LayerMask::empty().with(Layer::Ground);
        let level = LayerMask::from_flags(&[Layer::Ground, Layer::Wall]);
        let player = LayerMask::empty().with(Layer::Player);

        assert!(level.intersects(ground));
        assert!(!player.intersects(ground));
        assert!(LayerMask::all().intersects(player));
        assert!(!LayerMask::empty().intersects(LayerMask::all()));
    }

    #[test]
    fn user_data_keeps_layer_bits() {
        let mask = LayerMask::from_flags(&[Layer::Wall, Layer::Prop]);
        assert_eq!(LayerMask::from_user_data(mask.to_user_data()), mask);
        // Bits above the 32-bit mask are not layer bits.
        assert_eq!(LayerMask::from_user_data(1u128 << 40), LayerMask::empty());
    }

    #[test]
    fn remove_clears_only_that_layer() {
        let mut mask = LayerMask::from_flags(&[Layer::Ground, Layer::Wall]);
        mask.remove(Layer::Ground);
        assert!(!mask.has(Layer::Ground));
        assert!(mask.has(Layer::Wall));
    }
}
