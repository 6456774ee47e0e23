// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Persisted configuration of one controller entry.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::manager::setup::{Discovery, SetupError};
use crate::protocol::HttpConfig;
use crate::response::DeviceRecord;
use crate::types::DeviceId;

const fn default_timeout() -> u64 {
    10
}

const fn default_move_time() -> u64 {
    30
}

/// Configuration stored by the host for one controller.
///
/// The JSON shape is the host's entry data; unknown keys are ignored and
/// missing optional keys take their defaults.
///
/// # Examples
///
/// ```
/// use nice_blinds::manager::EntryConfig;
///
/// let entry = EntryConfig::from_json(r#"{
///     "http_base_url": "http://192.168.1.20",
///     "http_username": "admin",
///     "http_password": "secret",
///     "devices": [{"id": "15,01", "name": "Kitchen", "module": "Era Roll (15,1)"}],
///     "groups": [{"name": "Ground floor", "devices": ["15,01"]}]
/// }"#).unwrap();
///
/// assert_eq!(entry.http_timeout, 10);
/// assert_eq!(entry.move_time, 30);
/// assert_eq!(entry.http_config().credentials(), Some(("admin", "secret")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryConfig {
    /// Controller base URL.
    pub http_base_url: String,
    /// Basic auth user name.
    #[serde(default)]
    pub http_username: Option<String>,
    /// Basic auth password.
    #[serde(default)]
    pub http_password: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub http_timeout: u64,
    /// Seconds for a full open or close run.
    #[serde(default = "default_move_time")]
    pub move_time: u64,
    /// Devices exposed as covers.
    #[serde(default)]
    pub devices: Vec<DeviceRecord>,
    /// User-defined cover groups.
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

/// A user-defined group of covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Display name.
    pub name: String,
    /// Member device ids.
    pub devices: Vec<DeviceId>,
}

impl EntryConfig {
    /// Creates an entry with defaults and no devices.
    #[must_use]
    pub fn new(http_base_url: impl Into<String>) -> Self {
        Self {
            http_base_url: http_base_url.into(),
            http_username: None,
            http_password: None,
            http_timeout: default_timeout(),
            move_time: default_move_time(),
            devices: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Sets the basic auth credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.http_username = Some(username.into());
        self.http_password = Some(password.into());
        self
    }

    /// Sets the request timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.http_timeout = seconds;
        self
    }

    /// Sets the full-travel time in seconds.
    #[must_use]
    pub fn with_move_time(mut self, seconds: u64) -> Self {
        self.move_time = seconds;
        self
    }

    /// Parses entry data.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the data is not valid entry JSON.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(ParseError::Json)
    }

    /// Serializes the entry data.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, ParseError> {
        serde_json::to_string(self).map_err(ParseError::Json)
    }

    /// Builds the HTTP configuration for this entry.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::new(&self.http_base_url)
            .with_credentials(
                self.http_username.as_deref().unwrap_or_default(),
                self.http_password.as_deref().unwrap_or_default(),
            )
            .with_timeout(Duration::from_secs(self.http_timeout))
    }

    /// Returns the full-travel time.
    #[must_use]
    pub fn full_travel(&self) -> Duration {
        Duration::from_secs(self.move_time)
    }

    /// Returns the id that keeps one entry per controller.
    #[must_use]
    pub fn unique_id(&self) -> String {
        format!("nice_controller_{}", self.http_base_url)
    }

    /// Returns the entry title shown by the host.
    #[must_use]
    pub fn title(&self) -> String {
        let groups = if self.groups.is_empty() {
            String::new()
        } else {
            format!(", {} groups", self.groups.len())
        };
        format!("Nice Controller ({} devices{groups})", self.devices.len())
    }

    /// Stores the discovered devices whose ids are in `selected`.
    ///
    /// Ids not present in `discovery` are ignored.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::NoDeviceSelected` if `selected` is empty.
    pub fn select_devices(
        &mut self,
        discovery: &Discovery,
        selected: &[DeviceId],
    ) -> Result<(), SetupError> {
        if selected.is_empty() {
            return Err(SetupError::NoDeviceSelected);
        }

        self.devices = selected
            .iter()
            .filter_map(|id| discovery.devices.iter().find(|device| device.id() == id))
            .cloned()
            .collect();
        tracing::debug!(count = self.devices.len(), "Selected devices");
        Ok(())
    }

    /// Adds a user group.
    ///
    /// The name is trimmed. Returns false and adds nothing if the name or
    /// the member list is empty.
    pub fn add_group(&mut self, name: &str, devices: Vec<DeviceId>) -> bool {
        let name = name.trim();
        if name.is_empty() || devices.is_empty() {
            return false;
        }
        self.groups.push(GroupConfig {
            name: name.to_string(),
            devices,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::GroupRecord;

    fn id(s: &str) -> DeviceId {
        s.parse().unwrap()
    }

    fn record(s: &str, name: &str) -> DeviceRecord {
        DeviceRecord::new(id(s), name, "Era Roll")
    }

    #[test]
    fn defaults_when_keys_missing() {
        let entry = EntryConfig::from_json(r#"{"http_base_url": "http://nice.local"}"#).unwrap();
        assert_eq!(entry, EntryConfig::new("http://nice.local"));
        assert!(entry.http_config().credentials().is_none());
        assert_eq!(entry.http_config().timeout(), Duration::from_secs(10));
        assert_eq!(entry.full_travel(), Duration::from_secs(30));
    }

    #[test]
    fn null_credentials() {
        let entry = EntryConfig::from_json(
            r#"{"http_base_url": "http://nice.local", "http_username": null, "http_password": null}"#,
        )
        .unwrap();
        assert!(entry.http_config().credentials().is_none());
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            EntryConfig::from_json("{\"devices\": []}"),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn json_shape_survives() {
        let mut entry = EntryConfig::new("http://nice.local")
            .with_credentials("admin", "pw")
            .with_timeout(5)
            .with_move_time(20);
        entry.devices.push(record("15,01", "Kitchen"));
        entry.add_group("Ground floor", vec![id("15,01")]);

        let json = entry.to_json().unwrap();
        assert!(json.contains(r#""module":"Era Roll (15,1)""#));
        assert!(json.contains(r#""devices":["15,01"]"#));
        assert_eq!(EntryConfig::from_json(&json).unwrap(), entry);
    }

    #[test]
    fn title_and_unique_id() {
        let mut entry = EntryConfig::new("http://nice.local");
        entry.devices.push(record("1,01", "A"));
        entry.devices.push(record("2,01", "B"));
        assert_eq!(entry.title(), "Nice Controller (2 devices)");
        assert_eq!(entry.unique_id(), "nice_controller_http://nice.local");

        entry.add_group("All", vec![id("1,01")]);
        assert_eq!(entry.title(), "Nice Controller (2 devices, 1 groups)");
    }

    #[test]
    fn select_devices() {
        let discovery = Discovery {
            devices: vec![record("1,01", "A"), record("2,01", "B")],
            groups: Vec::<GroupRecord>::new(),
        };
        let mut entry = EntryConfig::new("http://nice.local");

        assert!(matches!(
            entry.select_devices(&discovery, &[]),
            Err(SetupError::NoDeviceSelected)
        ));

        entry
            .select_devices(&discovery, &[id("2,01"), id("9,01")])
            .unwrap();
        assert_eq!(entry.devices.len(), 1);
        assert_eq!(entry.devices[0].name(), "B");
    }

    #[test]
    fn add_group_requires_name_and_members() {
        let mut entry = EntryConfig::new("http://nice.local");
        assert!(!entry.add_group("   ", vec![id("1,01")]));
        assert!(!entry.add_group("Empty", Vec::new()));
        assert!(entry.add_group("  Upstairs ", vec![id("1,01")]));
        assert_eq!(entry.groups[0].name, "Upstairs");
    }
}
