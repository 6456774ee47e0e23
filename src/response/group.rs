// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group list and group command response parsing.

use serde::{Deserialize, Serialize};

use crate::error::{DeviceError, ParseError};
use crate::response::xml::collect_elements;
use crate::types::GroupNumber;

/// A group defined on the controller.
///
/// # Examples
///
/// ```
/// use nice_blinds::response::parse_group_list;
///
/// let xml = r#"<grplst>
///     <group num="1" enabled="1" desc="Ground floor"/>
///     <group num="2" enabled="1"/>
///     <group num="3" enabled="0" desc="Unused"/>
/// </grplst>"#;
///
/// let groups = parse_group_list(xml).unwrap();
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].name(), "Ground floor");
/// assert_eq!(groups[1].name(), "Group 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    #[serde(rename = "num")]
    number: GroupNumber,
    name: String,
    enabled: bool,
}

impl GroupRecord {
    /// Returns the group number.
    #[must_use]
    pub fn number(&self) -> &GroupNumber {
        &self.number
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the group is enabled. Always true for parsed records.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

/// Parses `/cgi/grplst.xml` into enabled group records.
///
/// Elements without `enabled="1"` are skipped. The name defaults to
/// `"Group {num}"` when `desc` is absent.
///
/// # Errors
///
/// Returns `ParseError` if the document is malformed or an enabled group has
/// an empty `num`.
pub fn parse_group_list(xml: &str) -> Result<Vec<GroupRecord>, ParseError> {
    let elements = collect_elements(xml, "group")?;
    tracing::debug!(count = elements.len(), "Found group elements");

    let mut groups = Vec::new();
    for element in &elements {
        if element.attr_or("enabled", "0") != "1" {
            continue;
        }

        let num = element.attr_or("num", "0");
        let number = GroupNumber::new(num).map_err(|err| ParseError::InvalidValue {
            field: "num".to_string(),
            message: err.to_string(),
        })?;
        let name = element
            .attr("desc")
            .map_or_else(|| format!("Group {num}"), str::to_string);

        groups.push(GroupRecord {
            number,
            name,
            enabled: true,
        });
    }
    Ok(groups)
}

/// Response of `/cgi/grpcmd.xml`.
///
/// The controller reports `<result>0</result>` on success. A missing
/// `result` element counts as success; a document that cannot be parsed
/// leaves the result unknown.
///
/// # Examples
///
/// ```
/// use nice_blinds::response::GroupCommandResponse;
///
/// assert!(GroupCommandResponse::parse("<rsp><result>0</result></rsp>").is_success());
/// assert!(!GroupCommandResponse::parse("<rsp><result>3</result></rsp>").is_success());
/// assert!(GroupCommandResponse::parse("<rsp/>").is_success());
/// assert_eq!(GroupCommandResponse::parse("not xml").result(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCommandResponse {
    result: Option<String>,
}

impl GroupCommandResponse {
    /// Result value when the response carries no `result` element.
    pub const DEFAULT_RESULT: &'static str = "0";

    /// Parses a group command response body.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let result = collect_elements(body, "result").ok().map(|results| {
            results
                .first()
                .map_or_else(|| Self::DEFAULT_RESULT.to_string(), |r| r.text().to_string())
        });
        Self { result }
    }

    /// Returns the result value, or `None` if the body was unparsable.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Returns true when the controller reported result `0`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.as_deref() == Some(Self::DEFAULT_RESULT)
    }

    /// Converts a non-zero result into an error.
    ///
    /// An unparsable response is not treated as a rejection.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::CommandRejected` when the result is not `0`.
    pub fn ensure_success(&self, group: &GroupNumber) -> Result<(), DeviceError> {
        match self.result.as_deref() {
            Some(result) if result != Self::DEFAULT_RESULT => Err(DeviceError::CommandRejected {
                group: group.to_string(),
                result: result.to_string(),
            }),
            _ => Ok(()),
        }
    }
}
