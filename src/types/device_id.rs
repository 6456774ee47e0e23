// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identifier type.
//!
//! The controller reports addresses in hexadecimal in its device list but
//! expects them in decimal in command URLs. Endpoints stay hexadecimal in
//! both places. [`DeviceId`] stores the address already converted to
//! decimal and the endpoint as uppercase hex, so it can be rendered directly
//! into a command URL.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Hexadecimal endpoint of a device, stored uppercase.
///
/// The digits are kept verbatim apart from case, so `"0f"` becomes `"0F"`
/// and never `"F"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Endpoint(String);

impl Endpoint {
    /// Creates an endpoint from hexadecimal digits.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHex` if the value is empty or contains a
    /// non-hexadecimal character.
    pub fn new(hex: &str) -> Result<Self, ValueError> {
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValueError::InvalidHex {
                field: "ept",
                value: hex.to_string(),
            });
        }
        Ok(Self(hex.to_ascii_uppercase()))
    }

    /// Returns the uppercase hexadecimal form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric value of the endpoint.
    ///
    /// Saturates at `u32::MAX` for endpoints longer than eight digits.
    #[must_use]
    pub fn value(&self) -> u32 {
        u32::from_str_radix(&self.0, 16).unwrap_or(u32::MAX)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a single blind motor: `"<address>,<endpoint>"`.
///
/// # Examples
///
/// ```
/// use nice_blinds::types::DeviceId;
///
/// let id: DeviceId = "1,0F".parse().unwrap();
/// assert_eq!(id.address(), 1);
/// assert_eq!(id.endpoint().as_str(), "0F");
///
/// // Discovery data carries the address in hex
/// let id = DeviceId::from_hex("0F", "01").unwrap();
/// assert_eq!(id.to_string(), "15,01");
///
/// assert!("1;0F".parse::<DeviceId>().is_err());
/// assert!("1,0F,2".parse::<DeviceId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceId {
    address: u32,
    endpoint: Endpoint,
}

impl DeviceId {
    /// Creates an identifier from a decimal address and an endpoint.
    #[must_use]
    pub fn new(address: u32, endpoint: Endpoint) -> Self {
        Self { address, endpoint }
    }

    /// Creates an identifier from the hexadecimal `adr` and `ept` attributes
    /// of the device list.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHex` if either value is not hexadecimal.
    pub fn from_hex(adr: &str, ept: &str) -> Result<Self, ValueError> {
        let address = u32::from_str_radix(adr, 16).map_err(|_| ValueError::InvalidHex {
            field: "adr",
            value: adr.to_string(),
        })?;
        Ok(Self {
            address,
            endpoint: Endpoint::new(ept)?,
        })
    }

    /// Returns the decimal device address.
    #[must_use]
    pub fn address(&self) -> u32 {
        self.address
    }

    /// Returns the hexadecimal endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.address, self.endpoint)
    }
}

impl FromStr for DeviceId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidDeviceId(s.to_string());

        let mut parts = s.split(',');
        let (Some(adr), Some(ept), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let address = adr.parse::<u32>().map_err(|_| invalid())?;
        let endpoint = Endpoint::new(ept).map_err(|_| invalid())?;
        Ok(Self { address, endpoint })
    }
}

impl TryFrom<String> for DeviceId {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DeviceId> for String {
    fn from(id: DeviceId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_address_converts_to_decimal() {
        assert_eq!(DeviceId::from_hex("1", "01").unwrap().address(), 1);
        assert_eq!(DeviceId::from_hex("0F", "01").unwrap().address(), 15);
        assert_eq!(DeviceId::from_hex("ff", "01").unwrap().address(), 255);
    }

    #[test]
    fn endpoint_is_uppercased_but_not_trimmed() {
        let id = DeviceId::from_hex("2", "0e").unwrap();
        assert_eq!(id.endpoint().as_str(), "0E");
        assert_eq!(id.endpoint().value(), 14);
        assert_eq!(id.to_string(), "2,0E");
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(matches!(
            DeviceId::from_hex("zz", "01"),
            Err(ValueError::InvalidHex { field: "adr", .. })
        ));
        assert!(matches!(
            DeviceId::from_hex("1", "g1"),
            Err(ValueError::InvalidHex { field: "ept", .. })
        ));
    }

    #[test]
    fn parse_requires_exactly_one_comma() {
        assert!("10F".parse::<DeviceId>().is_err());
        assert!("1,0F,3".parse::<DeviceId>().is_err());
        assert!(",".parse::<DeviceId>().is_err());
        assert!("".parse::<DeviceId>().is_err());
    }

    #[test]
    fn parse_rejects_hex_address() {
        // Command identifiers carry the decimal address
        assert_eq!(
            "0F,01".parse::<DeviceId>().unwrap_err(),
            ValueError::InvalidDeviceId("0F,01".to_string())
        );
    }

    #[test]
    fn parse_lowercase_endpoint() {
        let id: DeviceId = "3,0a".parse().unwrap();
        assert_eq!(id.endpoint().as_str(), "0A");
    }

    #[test]
    fn serde_uses_textual_form() {
        let id: DeviceId = "1,0F".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1,0F\"");

        let back: DeviceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<DeviceId>("\"nope\"").is_err());
    }
}
