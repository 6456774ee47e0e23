// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for Nice controller XML documents.
//!
//! The controller answers with small XML documents whose interesting data
//! lives in element attributes:
//!
//! - `/cgi/devlst.xml`: `<device installed="1" adr="0F" ept="01" .../>`
//! - `/cgi/grplst.xml`: `<group num="1" enabled="1" desc="..."/>`
//! - `/cgi/grpcmd.xml`: `<result>0</result>`
//!
//! Elements are matched by name wherever they appear in the document, so
//! the exact nesting of the root element does not matter.

mod device;
mod group;
mod xml;

pub use device::{DeviceRecord, DeviceStatus, find_device_status, parse_device_list};
pub use group::{GroupCommandResponse, GroupRecord, parse_group_list};
pub use xml::{XmlElement, collect_elements};
