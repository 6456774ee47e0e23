// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `nice_blinds` - A Rust library to control Nice motorised blinds.
//!
//! This library talks to a Nice controller box (IT4WiFi / MyNice) through
//! its HTTP/XML API and exposes the attached motors as covers.
//!
//! # Supported Features
//!
//! - **Discovery**: Installed devices and enabled controller groups
//! - **Motor control**: Open, close and stop single devices or controller groups
//! - **Status**: Per-device position and motion from the device list
//! - **Positioning**: Open-loop "move to N%" by timing the motor
//! - **Groups**: User-defined cover groups driven sequentially
//! - **Host integration**: Entry configuration, setup validation and error codes
//!
//! # Quick Start
//!
//! ```no_run
//! use nice_blinds::{Controller, HttpConfig};
//! use nice_blinds::types::Action;
//!
//! #[tokio::main]
//! async fn main() -> nice_blinds::Result<()> {
//!     let controller = Controller::new(
//!         HttpConfig::new("http://192.168.1.20").with_credentials("admin", "password"),
//!     );
//!
//!     let devices = controller.discover_devices().await?;
//!     for device in &devices {
//!         println!("{} [{}] {}", device.id(), device.module_label(), device.name());
//!     }
//!
//!     if let Some(first) = devices.first() {
//!         controller.send(first.id(), Action::Open).await?;
//!     }
//!
//!     controller.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Covers
//!
//! ```no_run
//! use std::sync::Arc;
//! use nice_blinds::cover::Cover;
//! use nice_blinds::types::Position;
//! use nice_blinds::{Controller, HttpConfig};
//!
//! #[tokio::main]
//! async fn main() -> nice_blinds::Result<()> {
//!     let controller = Arc::new(Controller::new(HttpConfig::new("http://192.168.1.20")));
//!     let cover = Cover::new(controller, "15,01".parse()?, "Kitchen");
//!
//!     let mut changes = cover.subscribe();
//!     tokio::spawn(async move {
//!         while changes.changed().await.is_ok() {
//!             println!("{:?}", *changes.borrow());
//!         }
//!     });
//!
//!     cover.set_position(Position::new(50)?).await?;
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod controller;
pub mod cover;
pub mod error;
pub mod manager;
pub mod protocol;
pub mod response;
pub mod types;

pub use command::{Command, DeviceCommand, DeviceListQuery, GroupCommand, GroupListQuery};
pub use controller::Controller;
pub use cover::{Cover, CoverGroup, CoverState};
pub use error::{DeviceError, Error, ErrorKind, ParseError, ProtocolError, Result, ValueError};
pub use manager::{EntryConfig, Integration};
pub use protocol::{HttpClient, HttpConfig, HttpResponse};
pub use response::{DeviceRecord, DeviceStatus, GroupCommandResponse, GroupRecord};
pub use types::{Action, DeviceId, GroupNumber, MotionState, Position};
