// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A single motorised cover.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::controller::Controller;
use crate::cover::{CoverState, TravelPlan};
use crate::error::Result;
use crate::types::{Action, DeviceId, MotionState, Position};

/// One blind or shutter driven through a [`Controller`].
///
/// State changes are published on a watch channel, see
/// [`subscribe`](Self::subscribe).
#[derive(Debug)]
pub struct Cover {
    controller: Arc<Controller>,
    id: DeviceId,
    name: String,
    unique_id: String,
    full_travel: Duration,
    state_tx: watch::Sender<CoverState>,
}

impl Cover {
    /// Default time for a full open or close run.
    pub const DEFAULT_FULL_TRAVEL: Duration = Duration::from_secs(30);

    /// Creates a cover for device `id`.
    ///
    /// The unique id defaults to the device id.
    #[must_use]
    pub fn new(controller: Arc<Controller>, id: DeviceId, name: impl Into<String>) -> Self {
        let (state_tx, _) = watch::channel(CoverState::default());
        Self {
            controller,
            unique_id: id.to_string(),
            id,
            name: name.into(),
            full_travel: Self::DEFAULT_FULL_TRAVEL,
            state_tx,
        }
    }

    /// Sets the time a full open or close run takes.
    #[must_use]
    pub fn with_full_travel(mut self, full_travel: Duration) -> Self {
        self.full_travel = full_travel;
        self
    }

    /// Sets the unique id reported to the host.
    #[must_use]
    pub fn with_unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = unique_id.into();
        self
    }

    /// Returns the device id.
    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unique id.
    #[must_use]
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    /// Returns the configured full-travel time.
    #[must_use]
    pub fn full_travel(&self) -> Duration {
        self.full_travel
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> CoverState {
        *self.state_tx.borrow()
    }

    /// Creates a watch receiver for state updates.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CoverState> {
        self.state_tx.subscribe()
    }

    /// Starts opening the cover.
    ///
    /// # Errors
    ///
    /// Returns the controller error; the motion state is reset to idle.
    pub async fn open(&self) -> Result<()> {
        self.pulse(Action::Open, MotionState::Opening).await
    }

    /// Starts closing the cover.
    ///
    /// # Errors
    ///
    /// Returns the controller error; the motion state is reset to idle.
    pub async fn close(&self) -> Result<()> {
        self.pulse(Action::Close, MotionState::Closing).await
    }

    /// Stops the cover.
    ///
    /// # Errors
    ///
    /// Returns the controller error. The motion state is idle either way.
    pub async fn stop(&self) -> Result<()> {
        let result = self.controller.send(&self.id, Action::Stop).await;
        self.set_motion(MotionState::Idle);
        if let Err(err) = &result {
            tracing::error!(device = %self.id, error = %err, "Error stopping blinds");
        }
        result.map(|_| ())
    }

    /// Moves the cover to `target` by timing the motor.
    ///
    /// An unknown current position is treated as closed. Sends the move
    /// pulse (none when already at `target`), waits the estimated travel
    /// time, then always sends stop. On success `target` becomes the cached
    /// position until the next poll reports a real one.
    ///
    /// # Errors
    ///
    /// Returns the first controller error; the motion state is reset to idle.
    pub async fn set_position(&self, target: Position) -> Result<()> {
        let current = self.state().position().unwrap_or(Position::CLOSED);
        let plan = TravelPlan::between(current, target, self.full_travel);

        tracing::info!(
            device = %self.id,
            current = current.value(),
            target = target.value(),
            wait_ms = u64::try_from(plan.wait().as_millis()).unwrap_or(u64::MAX),
            "Moving blinds to position"
        );

        let motion = if target > current {
            MotionState::Opening
        } else {
            MotionState::Closing
        };
        self.set_motion(motion);

        let result = self.run_plan(plan).await;
        self.state_tx.send_modify(|state| {
            if result.is_ok() {
                state.set_position(target);
            }
            state.set_motion(MotionState::Idle);
        });

        result.inspect_err(|err| {
            tracing::error!(device = %self.id, error = %err, "Error setting blinds position");
        })
    }

    /// Refreshes the state from the controller.
    ///
    /// A reported position replaces the cached one; an unknown position
    /// leaves it untouched. Failures are logged by the controller and
    /// otherwise ignored.
    pub async fn update(&self) {
        let Some(status) = self.controller.device_status(&self.id).await else {
            tracing::debug!(device = %self.id, "No status available");
            return;
        };

        self.state_tx.send_modify(|state| {
            if let Some(position) = status.position() {
                state.set_position(position);
            }
            state.set_motion(status.motion());
        });
    }

    async fn pulse(&self, action: Action, motion: MotionState) -> Result<()> {
        self.set_motion(motion);
        if let Err(err) = self.controller.send(&self.id, action).await {
            tracing::error!(device = %self.id, command = %action, error = %err, "Error moving blinds");
            self.set_motion(MotionState::Idle);
            return Err(err);
        }
        Ok(())
    }

    async fn run_plan(&self, plan: TravelPlan) -> Result<()> {
        if let Some(action) = plan.action() {
            self.controller.send(&self.id, action).await?;
        }
        tokio::time::sleep(plan.wait()).await;
        self.controller.send(&self.id, Action::Stop).await?;
        Ok(())
    }

    fn set_motion(&self, motion: MotionState) {
        self.state_tx.send_modify(|state| state.set_motion(motion));
    }

    #[cfg(test)]
    pub(crate) fn state_tx_for_test(&self) -> &watch::Sender<CoverState> {
        &self.state_tx
    }
}
