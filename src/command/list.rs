// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device and group list queries.

use crate::command::Command;

/// Fetches the full device list (`/cgi/devlst.xml`).
///
/// This is also the only way to read a device's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceListQuery;

impl Command for DeviceListQuery {
    fn path(&self) -> &'static str {
        "/cgi/devlst.xml"
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Fetches the group list (`/cgi/grplst.xml`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupListQuery;

impl Command for GroupListQuery {
    fn path(&self) -> &'static str {
        "/cgi/grplst.xml"
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}
