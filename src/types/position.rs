// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover position and motion types.

use std::fmt;

use crate::error::ValueError;

/// Cover position as a percentage (0-100).
///
/// 0 is fully closed, 100 is fully open. The controller reports `255` when
/// it does not know the position; [`Position::from_raw`] maps that sentinel
/// to `None`.
///
/// # Examples
///
/// ```
/// use nice_blinds::types::Position;
///
/// let pos = Position::new(40).unwrap();
/// assert_eq!(pos.value(), 40);
///
/// assert_eq!(Position::from_raw("100"), Some(Position::OPEN));
/// assert_eq!(Position::from_raw("255"), None);
///
/// assert!(Position::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    /// Fully closed (0%).
    pub const CLOSED: Self = Self(0);

    /// Fully open (100%).
    pub const OPEN: Self = Self(100);

    /// Value the controller reports for an unknown position.
    pub const UNKNOWN_SENTINEL: u8 = 255;

    /// Creates a new position.
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

    /// Creates a position, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Parses the `pos` attribute of the device list.
    ///
    /// Returns `None` for the unknown sentinel, non-numeric text, or any
    /// value above 100.
    #[must_use]
    pub fn from_raw(raw: &str) -> Option<Self> {
        let value = raw.trim().parse::<u8>().ok()?;
        if value == Self::UNKNOWN_SENTINEL {
            return None;
        }
        Self::new(value).ok()
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Motor motion as reported by the controller's `sta` code.
///
/// Codes are compared as exact strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionState {
    /// Not moving, or moving in a way the status code does not describe.
    #[default]
    Idle,
    /// Opening (`sta="02"`).
    Opening,
    /// Closing (`sta="03"`).
    Closing,
}

impl MotionState {
    /// Maps a controller status code to a motion state.
    ///
    /// # Examples
    ///
    /// ```
    /// use nice_blinds::types::MotionState;
    ///
    /// assert_eq!(MotionState::from_status_code("02"), MotionState::Opening);
    /// assert_eq!(MotionState::from_status_code("03"), MotionState::Closing);
    /// assert_eq!(MotionState::from_status_code("2"), MotionState::Idle);
    /// ```
    #[must_use]
    pub fn from_status_code(code: &str) -> Self {
        match code {
            "02" => Self::Opening,
            "03" => Self::Closing,
            _ => Self::Idle,
        }
    }

    /// Returns true while opening.
    #[must_use]
    pub const fn is_opening(&self) -> bool {
        matches!(self, Self::Opening)
    }

    /// Returns true while closing.
    #[must_use]
    pub const fn is_closing(&self) -> bool {
        matches!(self, Self::Closing)
    }
}
