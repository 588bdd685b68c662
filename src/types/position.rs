// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover position type.
//!
//! This module provides a type-safe representation of cover positions,
//! ensuring values are always within the valid range of 0-100%.

use std::fmt;

use crate::error::ValueError;

/// Cover position as a percentage (0 = fully closed, 100 = fully open).
///
/// Positions are only meaningful on calibrated covers.
///
/// # Examples
///
/// ```
/// use shelly_rpc::types::CoverPosition;
///
/// let half = CoverPosition::new(50).unwrap();
/// assert_eq!(half.value(), 50);
///
/// assert_eq!(CoverPosition::default(), CoverPosition::OPEN);
/// assert!(CoverPosition::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoverPosition(u8);

impl CoverPosition {
    /// Fully closed (0%).
    pub const CLOSED: Self = Self(0);

    /// Fully open (100%).
    pub const OPEN: Self = Self(100);

    /// Creates a new cover position.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a position, clamping values above 100 to 100.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the position percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for CoverPosition {
    fn default() -> Self {
        Self::OPEN
    }
}

impl fmt::Display for CoverPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for CoverPosition {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
