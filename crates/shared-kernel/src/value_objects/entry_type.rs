// crates/shared-kernel/src/value_objects/entry_type.rs
use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
};

use serde::{Deserialize, Serialize};

/// Type classification flags of a directory entry.
///
/// The numeric values are the contract with the store: they are what crosses
/// the boundary, so the bit positions must never change. The set is a bitmask,
/// not an exclusive enum. A value may carry both `FILE` and `DIRECTORY`, or
/// neither (`UNKNOWN`), and bits this crate does not name are kept as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[repr(transparent)]
#[serde(transparent)]
pub struct EntryType(u32);

impl EntryType {
    pub const UNKNOWN: Self = Self(0);
    pub const FILE: Self = Self(0x1);
    pub const DIRECTORY: Self = Self(0x2);

    const KNOWN_BITS: u32 = Self::FILE.0 | Self::DIRECTORY.0;

    /// Wraps a raw value received from the store without dropping any bits.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when every bit of `other` is set in `self`. `UNKNOWN` is contained in everything.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_file(self) -> bool {
        self.0 & Self::FILE.0 != 0
    }

    #[inline]
    pub const fn is_directory(self) -> bool {
        self.0 & Self::DIRECTORY.0 != 0
    }

    /// Bits set by the store that carry no name in this crate.
    #[inline]
    pub const fn unnamed_bits(self) -> u32 {
        self.0 & !Self::KNOWN_BITS
    }
}

impl BitOr for EntryType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for EntryType {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<u32> for EntryType {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<EntryType> for u32 {
    fn from(entry_type: EntryType) -> Self {
        entry_type.bits()
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return write!(f, "unknown");
        }

        let mut names = Vec::with_capacity(3);
        if self.is_file() {
            names.push("file".to_string());
        }
        if self.is_directory() {
            names.push("directory".to_string());
        }
        if self.unnamed_bits() != 0 {
            names.push(format!("{:#x}", self.unnamed_bits()));
        }
        write!(f, "{}", names.join("|"))
    }
}
