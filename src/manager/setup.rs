// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection check and discovery run when an entry is created.

use thiserror::Error;

use crate::controller::Controller;
use crate::error::{Error, ProtocolError};
use crate::protocol::HttpConfig;
use crate::response::{DeviceRecord, GroupRecord};
use crate::types::DeviceId;

/// What the controller reported during setup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Installed devices.
    pub devices: Vec<DeviceRecord>,
    /// Enabled controller groups. Empty if group discovery failed.
    pub groups: Vec<GroupRecord>,
}

impl Discovery {
    /// Returns `(id, "name (module)")` pairs for a device picker.
    #[must_use]
    pub fn device_options(&self) -> Vec<(DeviceId, String)> {
        self.devices
            .iter()
            .map(|device| {
                let label = format!("{} ({})", device.name(), device.module_label());
                (device.id().clone(), label)
            })
            .collect()
    }
}

/// Setup failures, each mapped to a user-facing code.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The base URL does not start with `http://` or `https://`.
    #[error("invalid controller URL: {0}")]
    InvalidUrl(String),

    /// The controller rejected the credentials or served its login page.
    #[error("authentication failed")]
    InvalidAuth,

    /// The controller could not be reached or answered with an error status.
    #[error("cannot connect: {0}")]
    CannotConnect(#[source] Error),

    /// The controller lists no installed device.
    #[error("no devices found")]
    NoDevicesFound,

    /// No device was selected.
    #[error("select at least one device")]
    NoDeviceSelected,

    /// Anything else, such as an unparsable device list.
    #[error("unexpected error: {0}")]
    Unknown(#[source] Error),
}

impl SetupError {
    /// Returns the code the host shows to the user.
    ///
    /// # Examples
    ///
    /// ```
    /// use nice_blinds::manager::SetupError;
    ///
    /// assert_eq!(SetupError::InvalidAuth.code(), "invalid_auth");
    /// assert_eq!(SetupError::NoDevicesFound.field(), "base");
    /// ```
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "invalid_url",
            Self::InvalidAuth => "invalid_auth",
            Self::CannotConnect(_) => "cannot_connect",
            Self::NoDevicesFound => "no_devices_found",
            Self::NoDeviceSelected => "select_at_least_one",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Returns the form field the error belongs to, `"base"` for the form
    /// as a whole.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "http_base_url",
            Self::NoDeviceSelected => "devices",
            _ => "base",
        }
    }
}

impl From<Error> for SetupError {
    fn from(err: Error) -> Self {
        match err {
            Error::Protocol(ProtocolError::InvalidAddress(url)) => Self::InvalidUrl(url),
            Error::Protocol(ProtocolError::AuthenticationFailed) => Self::InvalidAuth,
            Error::Protocol(_) => Self::CannotConnect(err),
            _ => Self::Unknown(err),
        }
    }
}

/// Connects to the controller and discovers its devices and groups.
///
/// Device discovery must succeed and return at least one device. A group
/// discovery failure only logs a warning. The temporary session is closed
/// before returning.
///
/// # Errors
///
/// Returns the [`SetupError`] matching the first failure.
pub async fn connect(config: &HttpConfig) -> Result<Discovery, SetupError> {
    tracing::debug!(url = %config.base_url(), "Validating controller URL");
    config.validate().map_err(Error::from)?;

    let controller = Controller::new(config.clone());
    let result = discover(&controller).await;
    controller.close();

    if let Err(err) = &result {
        tracing::error!(code = err.code(), error = %err, "Controller setup failed");
    }
    result
}

async fn discover(controller: &Controller) -> Result<Discovery, SetupError> {
    let devices = controller.discover_devices().await?;
    if devices.is_empty() {
        tracing::warn!("No devices found on controller");
        return Err(SetupError::NoDevicesFound);
    }

    let groups = controller
        .discover_groups()
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Could not discover groups");
            Vec::new()
        });

    tracing::info!(
        devices = devices.len(),
        groups = groups.len(),
        "Discovered controller"
    );
    Ok(Discovery { devices, groups })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn codes() {
        assert_eq!(SetupError::InvalidUrl("x".into()).code(), "invalid_url");
        assert_eq!(SetupError::NoDeviceSelected.code(), "select_at_least_one");
        assert_eq!(SetupError::NoDeviceSelected.field(), "devices");
        assert_eq!(SetupError::InvalidUrl("x".into()).field(), "http_base_url");
    }

    #[test]
    fn from_library_error() {
        let err = SetupError::from(Error::from(ProtocolError::AuthenticationFailed));
        assert_eq!(err.code(), "invalid_auth");

        let err = SetupError::from(Error::from(ProtocolError::ConnectionFailed(
            "HTTP 500 - Internal Server Error".into(),
        )));
        assert_eq!(err.code(), "cannot_connect");

        let err = SetupError::from(Error::from(ParseError::Malformed("no root".into())));
        assert_eq!(err.code(), "unknown");
    }

    #[tokio::test]
    async fn connect_rejects_url_without_scheme() {
        let err = connect(&HttpConfig::new("192.168.1.20")).await.unwrap_err();
        assert_eq!(err.code(), "invalid_url");
    }

    #[test]
    fn device_options() {
        let discovery = Discovery {
            devices: vec![DeviceRecord::new("15,01".parse().unwrap(), "Kitchen", "Era Roll")],
            groups: Vec::new(),
        };
        let options = discovery.device_options();
        assert_eq!(options[0].1, "Kitchen (Era Roll (15,1))");
    }
}
