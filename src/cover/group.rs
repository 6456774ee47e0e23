// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User-defined groups of covers.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::cover::Cover;
use crate::error::Result;
use crate::types::{DeviceId, Position};

/// Pause after each member command.
pub const MEMBER_PAUSE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy)]
enum GroupOp {
    Open,
    Close,
    Stop,
    SetPosition(Position),
}

impl GroupOp {
    async fn apply(self, cover: &Cover) -> Result<()> {
        match self {
            Self::Open => cover.open().await,
            Self::Close => cover.close().await,
            Self::Stop => cover.stop().await,
            Self::SetPosition(target) => cover.set_position(target).await,
        }
    }
}

impl fmt::Display for GroupOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Close => f.write_str("close"),
            Self::Stop => f.write_str("stop"),
            Self::SetPosition(target) => write!(f, "set position {target}"),
        }
    }
}

/// A named set of covers driven together.
///
/// Members are commanded one after the other, never concurrently, with
/// [`MEMBER_PAUSE`] after each. A failing member does not abort the
/// sequence; the ids of failed members are returned instead. A position
/// command therefore takes the sum of every member's travel time.
#[derive(Debug)]
pub struct CoverGroup {
    name: String,
    unique_id: String,
    members: Vec<Arc<Cover>>,
}

impl CoverGroup {
    /// Creates a group.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        unique_id: impl Into<String>,
        members: Vec<Arc<Cover>>,
    ) -> Self {
        Self {
            name: name.into(),
            unique_id: unique_id.into(),
            members,
        }
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

    /// Returns the member covers.
    #[must_use]
    pub fn members(&self) -> &[Arc<Cover>] {
        &self.members
    }

    /// Opens every member.
    pub async fn open(&self) -> Vec<DeviceId> {
        self.run(GroupOp::Open).await
    }

    /// Closes every member.
    pub async fn close(&self) -> Vec<DeviceId> {
        self.run(GroupOp::Close).await
    }

    /// Stops every member.
    pub async fn stop(&self) -> Vec<DeviceId> {
        self.run(GroupOp::Stop).await
    }

    /// Moves every member to `target`.
    pub async fn set_position(&self, target: Position) -> Vec<DeviceId> {
        self.run(GroupOp::SetPosition(target)).await
    }

    /// Refreshes every member from the controller.
    pub async fn update(&self) {
        for member in &self.members {
            member.update().await;
        }
    }

    /// Mean of the known member positions, truncated.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        let known: Vec<u32> = self
            .members
            .iter()
            .filter_map(|member| member.state().position())
            .map(|position| u32::from(position.value()))
            .collect();

        let count = u32::try_from(known.len()).ok().filter(|&count| count > 0)?;
        let mean = known.iter().sum::<u32>() / count;
        u8::try_from(mean).ok().map(Position::clamped)
    }

    /// Returns true if any member is opening.
    #[must_use]
    pub fn is_opening(&self) -> bool {
        self.members.iter().any(|member| member.state().is_opening())
    }

    /// Returns true if any member is closing.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.members.iter().any(|member| member.state().is_closing())
    }

    /// Returns true if every member with a known position is closed.
    ///
    /// False when no member position is known.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let mut known = self
            .members
            .iter()
            .map(|member| member.state())
            .filter(|state| state.position().is_some())
            .peekable();

        known.peek().is_some() && known.all(|state| state.is_closed())
    }

    async fn run(&self, op: GroupOp) -> Vec<DeviceId> {
        tracing::info!(group = %self.name, members = self.members.len(), op = %op, "Group command");

        let mut failed = Vec::new();
        for member in &self.members {
            if let Err(err) = op.apply(member).await {
                tracing::error!(
                    group = %self.name,
                    device = %member.id(),
                    op = %op,
                    error = %err,
                    "Group member failed"
                );
                failed.push(member.id().clone());
            }
            tokio::time::sleep(MEMBER_PAUSE).await;
        }
        failed
    }
}
