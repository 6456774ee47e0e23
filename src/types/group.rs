// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller group number.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Number of a group defined on the controller.
///
/// The raw `num` attribute from the group list is kept verbatim and sent
/// back unchanged in group commands.
///
/// # Examples
///
/// ```
/// use nice_blinds::types::GroupNumber;
///
/// let group = GroupNumber::new("3").unwrap();
/// assert_eq!(group.as_str(), "3");
/// assert!(GroupNumber::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupNumber(String);

impl GroupNumber {
    /// Creates a group number.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyGroupNumber` if the value is empty.
    pub fn new(num: impl Into<String>) -> Result<Self, ValueError> {
        let num = num.into();
        if num.is_empty() {
            return Err(ValueError::EmptyGroupNumber);
        }
        Ok(Self(num))
    }

    /// Returns the raw group number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for GroupNumber {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GroupNumber> for String {
    fn from(group: GroupNumber) -> Self {
        group.0
    }
}
