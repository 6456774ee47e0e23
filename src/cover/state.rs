// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover state tracking.

use crate::types::{MotionState, Position};

/// Last known state of a cover.
///
/// The position is `None` until the controller reports one or a position
/// command completes.
///
/// # Examples
///
/// ```
/// use nice_blinds::cover::CoverState;
/// use nice_blinds::types::{MotionState, Position};
///
/// let state = CoverState::new(Some(Position::CLOSED), MotionState::Idle);
/// assert!(state.is_closed());
/// assert!(!CoverState::default().is_closed());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverState {
    position: Option<Position>,
    motion: MotionState,
}

impl CoverState {
    /// Creates a state.
    #[must_use]
    pub const fn new(position: Option<Position>, motion: MotionState) -> Self {
        Self { position, motion }
    }

    /// Returns the last known position.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    /// Returns the current motion.
    #[must_use]
    pub const fn motion(&self) -> MotionState {
        self.motion
    }

    /// Returns true while opening.
    #[must_use]
    pub const fn is_opening(&self) -> bool {
        self.motion.is_opening()
    }

    /// Returns true while closing.
    #[must_use]
    pub const fn is_closing(&self) -> bool {
        self.motion.is_closing()
    }

    /// Returns true if the position is known to be 0.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.position == Some(Position::CLOSED)
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    pub(crate) fn set_motion(&mut self, motion: MotionState) {
        self.motion = motion;
    }
}
