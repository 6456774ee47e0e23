// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Motor actions and their protocol codes.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// A motor action understood by the Nice controller.
///
/// Single devices take a two-digit `cmd` code, groups take an eight-digit
/// `dat` payload whose first byte is the same code.
///
/// # Examples
///
/// ```
/// use nice_blinds::types::Action;
///
/// assert_eq!(Action::Open.device_code(), "03");
/// assert_eq!(Action::Close.group_payload(), "04000000");
///
/// let stop: Action = "stop".parse().unwrap();
/// assert_eq!(stop, Action::Stop);
/// assert!("raise".parse::<Action>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Drive the blind towards fully open.
    Open,
    /// Drive the blind towards fully closed.
    Close,
    /// Stop the motor.
    Stop,
}

impl Action {
    /// Returns the lowercase action name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Stop => "stop",
        }
    }

    /// Returns the `cmd` code for `/cgi/devcmd.xml`.
    #[must_use]
    pub const fn device_code(&self) -> &'static str {
        match self {
            Self::Stop => "02",
            Self::Open => "03",
            Self::Close => "04",
        }
    }

    /// Returns the `dat` payload for `/cgi/grpcmd.xml`.
    #[must_use]
    pub const fn group_payload(&self) -> &'static str {
        match self {
            Self::Stop => "02000000",
            Self::Open => "03000000",
            Self::Close => "04000000",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "close" => Ok(Self::Close),
            "stop" => Ok(Self::Stop),
            _ => Err(ValueError::UnknownCommand(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_codes() {
        assert_eq!(Action::Stop.device_code(), "02");
        assert_eq!(Action::Open.device_code(), "03");
        assert_eq!(Action::Close.device_code(), "04");
    }

    #[test]
    fn group_payloads() {
        assert_eq!(Action::Stop.group_payload(), "02000000");
        assert_eq!(Action::Open.group_payload(), "03000000");
        assert_eq!(Action::Close.group_payload(), "04000000");
    }

    #[test]
    fn group_payload_starts_with_device_code() {
        for action in [Action::Open, Action::Close, Action::Stop] {
            assert!(action.group_payload().starts_with(action.device_code()));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("OPEN".parse::<Action>().unwrap(), Action::Open);
        assert_eq!("Close".parse::<Action>().unwrap(), Action::Close);
    }

    #[test]
    fn parse_unknown() {
        let err = "toggle".parse::<Action>().unwrap_err();
        assert_eq!(err, ValueError::UnknownCommand("toggle".to_string()));
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        assert_eq!(Action::Stop.to_string(), "stop");
        assert_eq!(Action::Stop.to_string().parse::<Action>().unwrap(), Action::Stop);
    }
}
