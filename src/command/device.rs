// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-device motor command.

use crate::command::Command;
use crate::types::{Action, DeviceId};

/// Command for one blind motor, sent to `/cgi/devcmd.xml`.
///
/// # Examples
///
/// ```
/// use nice_blinds::command::{Command, DeviceCommand};
/// use nice_blinds::types::{Action, DeviceId};
///
/// let id = DeviceId::from_hex("0F", "01").unwrap();
/// let cmd = DeviceCommand::new(id, Action::Close);
/// assert_eq!(cmd.path(), "/cgi/devcmd.xml");
/// assert_eq!(
///     cmd.query(),
///     vec![("adr", "15".to_string()), ("ept", "01".to_string()), ("cmd", "04".to_string())]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCommand {
    id: DeviceId,
    action: Action,
}

impl DeviceCommand {
    /// Creates a command for the given device.
    #[must_use]
    pub fn new(id: DeviceId, action: Action) -> Self {
        Self { id, action }
    }

    /// Returns the target device.
    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    /// Returns the action.
    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }
}

impl Command for DeviceCommand {
    fn path(&self) -> &'static str {
        "/cgi/devcmd.xml"
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("adr", self.id.address().to_string()),
            ("ept", self.id.endpoint().to_string()),
            ("cmd", self.action.device_code().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_url() {
        let cmd = DeviceCommand::new("1,0F".parse().unwrap(), Action::Open);
        assert_eq!(
            cmd.to_url("http://10.0.0.2"),
            "http://10.0.0.2/cgi/devcmd.xml?adr=1&ept=0F&cmd=03"
        );
    }

    #[test]
    fn stop_url() {
        let cmd = DeviceCommand::new("12,0A".parse().unwrap(), Action::Stop);
        assert_eq!(
            cmd.to_url("http://10.0.0.2"),
            "http://10.0.0.2/cgi/devcmd.xml?adr=12&ept=0A&cmd=02"
        );
    }
}
