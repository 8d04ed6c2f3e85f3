//! Permission bitmask for file-listing entries
//!
//! The server reports permissions as an integer bitmask. The known bits are
//! exposed as constants; unknown bits are carried through untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// Permission bitmask of a file or folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(u32);

impl Permission {
    /// No permissions
    pub const NONE: Self = Self(0);
    /// Entry can be read
    pub const READ: Self = Self(1);
    /// Entry can be modified
    pub const UPDATE: Self = Self(2);
    /// Children can be created (folders only)
    pub const CREATE: Self = Self(4);
    /// Entry can be deleted
    pub const DELETE: Self = Self(8);
    /// Entry can be shared
    pub const SHARE: Self = Self(16);
    /// All known permissions
    pub const ALL: Self = Self(31);

    /// Creates a permission mask from raw bits, keeping unknown bits
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Returns true if every bit of `other` is set in `self`
    pub const fn contains(&self, other: Permission) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of both masks
    pub const fn union(self, other: Permission) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true if no bit is set
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Permission {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl From<u32> for Permission {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl fmt::Display for Permission {
    /// Renders the known bits as `RUDCS`, with `-` for unset bits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (Self::READ, 'R'),
            (Self::UPDATE, 'U'),
            (Self::DELETE, 'D'),
            (Self::CREATE, 'C'),
            (Self::SHARE, 'S'),
        ];
        for (flag, ch) in flags {
            if self.contains(flag) {
                write!(f, "{}", ch)?;
            } else {
                write!(f, "-")?;
            }
        }
        Ok(())
    }
}
