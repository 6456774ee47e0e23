// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level API for one Nice controller box.
//!
//! A [`Controller`] owns the HTTP session to the controller and exposes the
//! operations the controller supports: device and group discovery, motor
//! commands and status reads.
//!
//! # Session Lifecycle
//!
//! The HTTP session is opened lazily by the first request and released by
//! [`Controller::close`]. Closing is idempotent, and a closed controller
//! transparently reopens its session when used again.
//!
//! ```no_run
//! use nice_blinds::{Controller, HttpConfig};
//! use nice_blinds::types::Action;
//!
//! # async fn example() -> nice_blinds::Result<()> {
//! let controller = Controller::new(
//!     HttpConfig::new("http://192.168.1.20").with_credentials("admin", "password"),
//! );
//!
//! for device in controller.discover_devices().await? {
//!     println!("{} ({})", device.name(), device.id());
//! }
//!
//! controller.send_command("1,0F", Action::Open).await?;
//! controller.close();
//! # Ok(())
//! # }
//! ```

mod session;

use session::Session;

use crate::command::{DeviceCommand, DeviceListQuery, GroupCommand, GroupListQuery};
use crate::error::{Error, Result};
use crate::protocol::{HttpConfig, HttpResponse};
use crate::response::{
    DeviceRecord, DeviceStatus, GroupCommandResponse, GroupRecord, find_device_status,
    parse_device_list, parse_group_list,
};
use crate::types::{Action, DeviceId, GroupNumber};

/// A Nice HTTP controller.
#[derive(Debug)]
pub struct Controller {
    session: Session,
}

impl Controller {
    /// Creates a controller. No request is made until first use.
    #[must_use]
    pub fn new(config: HttpConfig) -> Self {
        tracing::debug!(base_url = %config.base_url(), "Controller created");
        Self {
            session: Session::new(config),
        }
    }

    /// Returns the connection configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        self.session.config()
    }

    /// Returns whether the HTTP session is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    /// Releases the HTTP session.
    ///
    /// Safe to call any number of times.
    pub fn close(&self) {
        if self.session.close() {
            tracing::info!(base_url = %self.config().base_url(), "Controller session closed");
        } else {
            tracing::debug!("Controller session already closed");
        }
    }

    // ========== Discovery ==========

    /// Lists the installed devices known to the controller.
    ///
    /// # Errors
    ///
    /// Returns error on any HTTP failure, when the controller serves a login
    /// page instead of XML, or when the XML cannot be parsed. Nothing is
    /// retried.
    pub async fn discover_devices(&self) -> Result<Vec<DeviceRecord>> {
        tracing::debug!("Starting device discovery");
        if self.config().credentials().is_none() {
            tracing::warn!("No authentication configured");
        }

        let client = self.session.client()?;
        let response = client.fetch_xml(&DeviceListQuery).await.inspect_err(|err| {
            tracing::error!(error = %err, "HTTP error during device discovery");
        })?;

        let devices = parse_device_list(response.body()).inspect_err(|err| {
            tracing::error!(error = %err, "Failed to parse device list");
        })?;

        for device in &devices {
            tracing::info!(name = device.name(), id = %device.id(), "Added device");
        }
        tracing::info!(
            count = devices.len(),
            "Device discovery complete: found installed devices"
        );
        Ok(devices)
    }

    /// Lists the enabled groups defined on the controller.
    ///
    /// # Errors
    ///
    /// Same failure policy as [`discover_devices`](Self::discover_devices).
    pub async fn discover_groups(&self) -> Result<Vec<GroupRecord>> {
        tracing::debug!("Starting group discovery");

        let client = self.session.client()?;
        let response = client.fetch_xml(&GroupListQuery).await.inspect_err(|err| {
            tracing::error!(error = %err, "HTTP error during group discovery");
        })?;

        let groups = parse_group_list(response.body()).inspect_err(|err| {
            tracing::error!(error = %err, "Failed to parse group list");
        })?;

        for group in &groups {
            tracing::info!(name = group.name(), num = %group.number(), "Added group");
        }
        tracing::info!(
            count = groups.len(),
            "Group discovery complete: found enabled groups"
        );
        Ok(groups)
    }

    // ========== Commands ==========

    /// Sends an action to the device identified by `"adr,ept"`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidDeviceId` without touching the network if
    /// `device_id` is malformed, or the HTTP error otherwise.
    pub async fn send_command(&self, device_id: &str, action: Action) -> Result<HttpResponse> {
        let id = device_id.parse::<DeviceId>().inspect_err(|err| {
            tracing::error!(error = %err, "Rejected command");
        })?;
        self.send(&id, action).await
    }

    /// Sends a named command (`open`, `close` or `stop`) to a device.
    ///
    /// Both arguments are validated before any request is made.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownCommand` or `ValueError::InvalidDeviceId`
    /// for invalid input, or the HTTP error otherwise.
    pub async fn send_raw(&self, device_id: &str, command: &str) -> Result<HttpResponse> {
        let action = command.parse::<Action>().inspect_err(|err| {
            tracing::error!(error = %err, "Rejected command");
        })?;
        self.send_command(device_id, action).await
    }

    /// Sends an action to a device.
    ///
    /// # Errors
    ///
    /// Returns the HTTP error if the request fails.
    pub async fn send(&self, id: &DeviceId, action: Action) -> Result<HttpResponse> {
        tracing::info!(command = %action, device = %id, "Sending command");

        let client = self.session.client()?;
        let response = client
            .send(&DeviceCommand::new(id.clone(), action))
            .await
            .inspect_err(|err| {
                tracing::error!(command = %action, error = %err, "HTTP request failed");
            })?;

        tracing::info!(
            command = %action,
            device = %id,
            status = %response.status_line(),
            "Command sent successfully"
        );
        Ok(response)
    }

    /// Sends an action to a controller-defined group.
    ///
    /// A non-zero `result` in the response is logged as a warning and
    /// returned, not raised; use
    /// [`GroupCommandResponse::ensure_success`] to treat it as an error.
    ///
    /// # Errors
    ///
    /// Returns the HTTP error if the request fails.
    pub async fn send_group_command(
        &self,
        group: &GroupNumber,
        action: Action,
    ) -> Result<GroupCommandResponse> {
        tracing::info!(command = %action, group = %group, "Sending group command");

        let client = self.session.client()?;
        let response = client
            .send(&GroupCommand::new(group.clone(), action))
            .await
            .inspect_err(|err| {
                tracing::error!(
                    command = %action,
                    error = %err,
                    "HTTP request failed for group command"
                );
            })?;

        let parsed = GroupCommandResponse::parse(response.body());
        match parsed.result() {
            Some(_) if parsed.is_success() => {
                tracing::info!(command = %action, group = %group, "Group command sent successfully");
            }
            Some(result) => {
                tracing::warn!(group = %group, result, "Group command returned non-zero result");
            }
            None => tracing::warn!(group = %group, "Could not parse group command response"),
        }
        Ok(parsed)
    }

    // ========== Status ==========

    /// Reads the current status of one device.
    ///
    /// The controller has no per-device status endpoint, so this fetches the
    /// whole device list. Returns `None` if the device is not listed or the
    /// request fails; failures are logged. Unlike discovery, the body is not
    /// checked for a login page, so device descriptions are free text.
    pub async fn device_status(&self, id: &DeviceId) -> Option<DeviceStatus> {
        match self.fetch_status(id).await {
            Ok(status) => status,
            Err(err) => {
                tracing::error!(device = %id, error = %err, "Error getting device status");
                None
            }
        }
    }

    async fn fetch_status(&self, id: &DeviceId) -> Result<Option<DeviceStatus>> {
        let client = self.session.client()?;
        let response = client.send(&DeviceListQuery).await?;
        find_device_status(response.body(), id).map_err(Error::Parse)
    }

    /// Checks whether the controller answers at its base URL.
    pub async fn test_connection(&self) -> bool {
        match self.session.client() {
            Ok(client) => client.probe().await,
            Err(err) => {
                tracing::error!(error = %err, "Connection test failed");
                false
            }
        }
    }
}
