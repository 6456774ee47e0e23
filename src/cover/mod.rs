// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover entities built on top of a [`Controller`](crate::Controller).
//!
//! The controller has no "move to position" command and reports no live
//! position while a motor runs. A [`Cover`] therefore estimates
//! intermediate positions from elapsed time: it starts the motor, waits the
//! share of the configured full-travel duration that corresponds to the
//! requested distance, then stops the motor. There is no feedback loop, so
//! errors accumulate until a full open or close cycle.
//!
//! [`CoverGroup`] fans a command out to several covers one after the other,
//! pausing briefly between members so the controller is not flooded.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use nice_blinds::cover::Cover;
//! use nice_blinds::types::Position;
//! use nice_blinds::{Controller, HttpConfig};
//!
//! # async fn example() -> nice_blinds::Result<()> {
//! let controller = Arc::new(Controller::new(HttpConfig::new("http://192.168.1.20")));
//! let cover = Cover::new(controller, "1,0F".parse()?, "Kitchen")
//!     .with_full_travel(Duration::from_secs(25));
//!
//! cover.update().await;
//! cover.set_position(Position::new(60)?).await?;
//! # Ok(())
//! # }
//! ```

mod entity;
mod group;
mod state;
mod travel;

pub use entity::Cover;
pub use group::{CoverGroup, MEMBER_PAUSE};
pub use state::CoverState;
pub use travel::TravelPlan;
