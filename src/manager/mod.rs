// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host integration for one controller.
//!
//! A home automation host creates an entry in two steps: [`setup::connect`]
//! validates the connection and discovers devices, then the user's choices
//! are recorded in an [`EntryConfig`] that the host persists as JSON. When
//! the entry is loaded, [`Integration::from_entry`] builds one [`Cover`]
//! per selected device and one [`CoverGroup`] per user group, all sharing a
//! single [`Controller`].
//!
//! ```no_run
//! use nice_blinds::manager::{EntryConfig, Integration, setup};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut entry = EntryConfig::new("http://192.168.1.20").with_credentials("admin", "pw");
//! let discovery = setup::connect(&entry.http_config()).await?;
//!
//! let all: Vec<_> = discovery.devices.iter().map(|d| d.id().clone()).collect();
//! entry.select_devices(&discovery, &all)?;
//!
//! let integration = Integration::from_entry("entry1", &entry);
//! integration.update_all().await;
//! # Ok(())
//! # }
//! ```
//!
//! [`Cover`]: crate::cover::Cover
//! [`CoverGroup`]: crate::cover::CoverGroup
//! [`Controller`]: crate::Controller

mod entry;
mod integration;
pub mod setup;

pub use entry::{EntryConfig, GroupConfig};
pub use integration::Integration;
pub use setup::{Discovery, SetupError};
