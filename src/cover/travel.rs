// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Open-loop travel time estimation.

use std::time::Duration;

use crate::types::{Action, Position};

/// How to move a cover from one position to another.
///
/// The motor runs at a constant speed, so the time needed is the travelled
/// share of the full-travel duration:
/// `|target - current| / 100 * full_travel`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use nice_blinds::cover::TravelPlan;
/// use nice_blinds::types::{Action, Position};
///
/// let plan = TravelPlan::between(
///     Position::new(40).unwrap(),
///     Position::OPEN,
///     Duration::from_secs(30),
/// );
/// assert_eq!(plan.action(), Some(Action::Open));
/// assert_eq!(plan.wait(), Duration::from_secs(18));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelPlan {
    action: Option<Action>,
    wait: Duration,
}

impl TravelPlan {
    /// Plans the move from `current` to `target`.
    ///
    /// The wait saturates at `Duration::MAX` for absurd travel times.
    #[must_use]
    pub fn between(current: Position, target: Position, full_travel: Duration) -> Self {
        let action = match target.cmp(&current) {
            std::cmp::Ordering::Greater => Some(Action::Open),
            std::cmp::Ordering::Less => Some(Action::Close),
            std::cmp::Ordering::Equal => None,
        };
        let distance = u32::from(target.value().abs_diff(current.value()));

        let wait = full_travel
            .checked_mul(distance)
            .map_or(Duration::MAX, |scaled| scaled / 100);

        Self { action, wait }
    }

    /// Returns the pulse that starts the move, or `None` if already there.
    #[must_use]
    pub const fn action(&self) -> Option<Action> {
        self.action
    }

    /// Returns how long the motor must run before the stop pulse.
    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }
}
