// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device list parsing.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::response::xml::{XmlElement, collect_elements};
use crate::types::{DeviceId, Endpoint, MotionState, Position};

/// A blind motor discovered on the controller.
///
/// Serializes to the shape hosts store in their entry data:
/// `{"id": "15,01", "name": "...", "module": "..."}`.
///
/// # Examples
///
/// ```
/// use nice_blinds::response::parse_device_list;
///
/// let xml = r#"<devlst>
///     <device installed="1" adr="0F" ept="01" productName="Era Roll" desc="Kitchen"/>
///     <device installed="0" adr="10" ept="01" productName="Era Roll"/>
/// </devlst>"#;
///
/// let devices = parse_device_list(xml).unwrap();
/// assert_eq!(devices.len(), 1);
/// assert_eq!(devices[0].id().to_string(), "15,01");
/// assert_eq!(devices[0].name(), "Kitchen");
/// assert_eq!(devices[0].module_label(), "Era Roll (15,1)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    id: DeviceId,
    name: String,
    #[serde(rename = "module")]
    module_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mac: Option<String>,
}

impl DeviceRecord {
    /// Fallback when neither `desc` nor `productName` is present.
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    /// Creates a record, deriving the module label from the product name.
    #[must_use]
    pub fn new(id: DeviceId, name: impl Into<String>, product_name: &str) -> Self {
        let module_label = format!(
            "{product_name} ({},{})",
            id.address(),
            id.endpoint().value()
        );
        Self {
            id,
            name: name.into(),
            module_label,
            mac: None,
        }
    }

    /// Sets the MAC address reported by the controller.
    #[must_use]
    pub fn with_mac(mut self, mac: impl Into<String>) -> Self {
        self.mac = Some(mac.into());
        self
    }

    /// Returns the device identifier.
    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the module label, `"<product> (<adr>,<ept>)"` in decimal.
    #[must_use]
    pub fn module_label(&self) -> &str {
        &self.module_label
    }

    /// Returns the decimal address.
    #[must_use]
    pub fn address(&self) -> u32 {
        self.id.address()
    }

    /// Returns the hexadecimal endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        self.id.endpoint()
    }

    /// Returns the MAC address, if reported.
    #[must_use]
    pub fn mac(&self) -> Option<&str> {
        self.mac.as_deref()
    }

    fn from_element(element: &XmlElement) -> Result<Self, ParseError> {
        let adr = element.attr_or("adr", "0");
        let ept = element.attr_or("ept", "0");
        let id = DeviceId::from_hex(adr, ept).map_err(|err| ParseError::InvalidValue {
            field: "device".to_string(),
            message: err.to_string(),
        })?;

        let product_name = element
            .attr("productName")
            .filter(|p| !p.is_empty())
            .unwrap_or(Self::UNKNOWN_NAME);
        let name = element
            .attr("desc")
            .filter(|d| !d.is_empty())
            .unwrap_or(product_name);

        let record = Self::new(id, name, product_name);
        Ok(match element.attr("mac").filter(|m| !m.is_empty()) {
            Some(mac) => record.with_mac(mac),
            None => record,
        })
    }
}

/// Parses `/cgi/devlst.xml` into installed device records.
///
/// Elements without `installed="1"` are skipped, whatever else they carry.
///
/// # Errors
///
/// Returns `ParseError` if the document is malformed or an installed device
/// has a non-hexadecimal `adr` or `ept`.
pub fn parse_device_list(xml: &str) -> Result<Vec<DeviceRecord>, ParseError> {
    let elements = collect_elements(xml, "device")?;
    tracing::debug!(count = elements.len(), "Found device elements");

    let mut devices = Vec::new();
    for (idx, element) in elements.iter().enumerate() {
        let installed = element.attr_or("installed", "0");
        tracing::debug!(
            idx = idx + 1,
            adr = element.attr_or("adr", ""),
            ept = element.attr_or("ept", ""),
            installed,
            "Device element"
        );
        if installed != "1" {
            continue;
        }
        devices.push(DeviceRecord::from_element(element)?);
    }
    Ok(devices)
}

/// Live status of one device, read from the device list.
///
/// Fetched fresh on every poll; never cached by this library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceStatus {
    status_code: String,
    position: Option<Position>,
    input: String,
    installed: bool,
}

impl DeviceStatus {
    fn from_element(element: &XmlElement) -> Self {
        Self {
            status_code: element.attr_or("sta", "00").to_string(),
            position: Position::from_raw(element.attr_or("pos", "255")),
            input: element.attr_or("inp", "0").to_string(),
            installed: element.attr_or("installed", "0") == "1",
        }
    }

    /// Returns the raw two-digit status code (`sta`).
    #[must_use]
    pub fn status_code(&self) -> &str {
        &self.status_code
    }

    /// Returns the position, or `None` when the controller reports 255.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Returns the raw input flag (`inp`).
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns whether the device is marked installed.
    #[must_use]
    pub fn installed(&self) -> bool {
        self.installed
    }

    /// Returns the motion derived from the status code.
    #[must_use]
    pub fn motion(&self) -> MotionState {
        MotionState::from_status_code(&self.status_code)
    }
}

/// Scans `/cgi/devlst.xml` for the status of one device.
///
/// Addresses are compared in decimal after hex conversion, endpoints
/// case-insensitively. Elements whose address is not hexadecimal are
/// skipped.
///
/// # Errors
///
/// Returns `ParseError` if the document is malformed.
///
/// # Examples
///
/// ```
/// use nice_blinds::response::find_device_status;
/// use nice_blinds::types::MotionState;
///
/// let xml = r#"<devlst><device adr="0F" ept="0e" sta="03" pos="40" installed="1"/></devlst>"#;
/// let status = find_device_status(xml, &"15,0E".parse().unwrap()).unwrap().unwrap();
/// assert_eq!(status.position().unwrap().value(), 40);
/// assert_eq!(status.motion(), MotionState::Closing);
/// ```
pub fn find_device_status(xml: &str, id: &DeviceId) -> Result<Option<DeviceStatus>, ParseError> {
    let elements = collect_elements(xml, "device")?;

    let found = elements.iter().find(|element| {
        let Ok(address) = u32::from_str_radix(element.attr_or("adr", "0"), 16) else {
            return false;
        };
        address == id.address()
            && element
                .attr_or("ept", "0")
                .eq_ignore_ascii_case(id.endpoint().as_str())
    });

    Ok(found.map(DeviceStatus::from_element))
}
