// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Nice controller request definitions.
//!
//! The controller exposes four fixed CGI endpoints, all reached with a plain
//! GET request:
//!
//! | Request Type | Path | Query |
//! |-------------|------|-------|
//! | [`DeviceCommand`] | `/cgi/devcmd.xml` | `adr`, `ept`, `cmd` |
//! | [`GroupCommand`] | `/cgi/grpcmd.xml` | `req=R`, `num`, `dat` |
//! | [`DeviceListQuery`] | `/cgi/devlst.xml` | none |
//! | [`GroupListQuery`] | `/cgi/grplst.xml` | none |
//!
//! # Examples
//!
//! ```
//! use nice_blinds::command::{Command, DeviceCommand};
//! use nice_blinds::types::Action;
//!
//! let cmd = DeviceCommand::new("1,0F".parse().unwrap(), Action::Open);
//! assert_eq!(
//!     cmd.to_url("http://192.168.1.10"),
//!     "http://192.168.1.10/cgi/devcmd.xml?adr=1&ept=0F&cmd=03"
//! );
//! ```

mod device;
mod group;
mod list;

pub use device::DeviceCommand;
pub use group::GroupCommand;
pub use list::{DeviceListQuery, GroupListQuery};

/// A request that can be sent to the Nice controller.
pub trait Command {
    /// Returns the path relative to the controller base URL.
    fn path(&self) -> &'static str;

    /// Returns the query parameters, in wire order.
    fn query(&self) -> Vec<(&'static str, String)>;

    /// Returns the full request URL for the given base URL.
    ///
    /// Values are percent-encoded; the base URL is used as is.
    fn to_url(&self, base_url: &str) -> String {
        let query = self.query();
        if query.is_empty() {
            return format!("{base_url}{}", self.path());
        }

        let query = query
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{base_url}{}?{query}", self.path())
    }
}
