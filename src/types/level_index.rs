// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Preset level index.

use std::fmt;

use crate::error::ValueError;

/// Index of one of the fan's preset airflow levels (1-4).
///
/// # Examples
///
/// ```
/// use qstream_lib::types::LevelIndex;
///
/// let idx = LevelIndex::new(2).unwrap();
/// assert_eq!(idx.value(), 2);
///
/// assert!(LevelIndex::new(0).is_err());
/// assert!(LevelIndex::new(5).is_err());
/// assert_eq!(LevelIndex::all().count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LevelIndex(u8);

impl LevelIndex {
    /// Lowest preset index.
    pub const MIN: u8 = 1;

    /// Highest preset index.
    pub const MAX: u8 = 4;

    /// Creates a new level index.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if index is not within 1-4.
    pub fn new(index: u8) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&index) {
            return Err(ValueError::OutOfRange {
                min: u16::from(Self::MIN),
                max: u16::from(Self::MAX),
                actual: u16::from(index),
            });
        }
        Ok(Self(index))
    }

    /// Iterates over every preset index in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    /// Returns the numeric value of the index.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for LevelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for LevelIndex {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
