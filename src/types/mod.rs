// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Nice controller communication.
//!
//! Each type validates its value at construction time so malformed input is
//! rejected before any request reaches the controller.
//!
//! # Types
//!
//! - [`Action`] - Open/Close/Stop and their wire codes
//! - [`DeviceId`] - `address,endpoint` pair identifying a blind motor
//! - [`Endpoint`] - Uppercase hexadecimal endpoint
//! - [`GroupNumber`] - Controller-defined group number
//! - [`Position`] - Cover position (0 closed, 100 open)
//! - [`MotionState`] - Motor motion derived from the status code

mod action;
mod device_id;
mod group;
mod position;

pub use action::Action;
pub use device_id::{DeviceId, Endpoint};
pub use group::GroupNumber;
pub use position::{MotionState, Position};
