// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller group command.

use crate::command::Command;
use crate::types::{Action, GroupNumber};

/// Command for a controller-defined group, sent to `/cgi/grpcmd.xml`.
///
/// # Examples
///
/// ```
/// use nice_blinds::command::{Command, GroupCommand};
/// use nice_blinds::types::{Action, GroupNumber};
///
/// let cmd = GroupCommand::new(GroupNumber::new("1").unwrap(), Action::Open);
/// assert_eq!(
///     cmd.to_url("http://nice.local"),
///     "http://nice.local/cgi/grpcmd.xml?req=R&num=1&dat=03000000"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCommand {
    group: GroupNumber,
    action: Action,
}

impl GroupCommand {
    /// Creates a command for the given group.
    #[must_use]
    pub fn new(group: GroupNumber, action: Action) -> Self {
        Self { group, action }
    }

    /// Returns the target group.
    #[must_use]
    pub fn group(&self) -> &GroupNumber {
        &self.group
    }

    /// Returns the action.
    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }
}

impl Command for GroupCommand {
    fn path(&self) -> &'static str {
        "/cgi/grpcmd.xml"
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("req", "R".to_string()),
            ("num", self.group.to_string()),
            ("dat", self.action.group_payload().to_string()),
        ]
    }
}
