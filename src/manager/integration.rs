// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Runtime objects built from an entry.

use std::sync::Arc;

use crate::controller::Controller;
use crate::cover::{Cover, CoverGroup};
use crate::manager::EntryConfig;
use crate::types::DeviceId;

/// The covers and groups of one loaded entry, sharing one controller.
///
/// # Examples
///
/// ```no_run
/// use nice_blinds::manager::{EntryConfig, Integration};
///
/// # async fn example() -> nice_blinds::Result<()> {
/// let entry = EntryConfig::from_json(r#"{"http_base_url": "http://192.168.1.20"}"#)?;
/// let integration = Integration::from_entry("entry1", &entry);
///
/// integration.update_all().await;
/// for cover in integration.covers() {
///     println!("{}: {:?}", cover.name(), cover.state().position());
/// }
/// integration.unload();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Integration {
    entry_id: String,
    controller: Arc<Controller>,
    covers: Vec<Arc<Cover>>,
    groups: Vec<CoverGroup>,
}

impl Integration {
    /// Builds covers and groups for `entry`.
    ///
    /// Group members that are not configured devices are dropped; a group
    /// left without members is skipped.
    #[must_use]
    pub fn from_entry(entry_id: impl Into<String>, entry: &EntryConfig) -> Self {
        let entry_id = entry_id.into();
        let controller = Arc::new(Controller::new(entry.http_config()));

        let covers: Vec<Arc<Cover>> = entry
            .devices
            .iter()
            .map(|device| {
                Arc::new(
                    Cover::new(Arc::clone(&controller), device.id().clone(), device.name())
                        .with_unique_id(format!("{entry_id}_{}", device.id()))
                        .with_full_travel(entry.full_travel()),
                )
            })
            .collect();

        let mut groups = Vec::new();
        for group in &entry.groups {
            let members: Vec<Arc<Cover>> = group
                .devices
                .iter()
                .filter_map(|id| covers.iter().find(|cover| cover.id() == id))
                .cloned()
                .collect();

            if members.is_empty() {
                tracing::warn!(group = %group.name, "Skipping group without known members");
                continue;
            }

            let unique_id = format!("{entry_id}_group_{}", group_slug(&group.name));
            groups.push(CoverGroup::new(&group.name, unique_id, members));
        }

        tracing::info!(
            entry = %entry_id,
            covers = covers.len(),
            groups = groups.len(),
            "Entry loaded"
        );

        Self {
            entry_id,
            controller,
            covers,
            groups,
        }
    }

    /// Returns the entry id.
    #[must_use]
    pub fn entry_id(&self) -> &str {
        &self.entry_id
    }

    /// Returns the shared controller.
    #[must_use]
    pub fn controller(&self) -> &Arc<Controller> {
        &self.controller
    }

    /// Returns all covers.
    #[must_use]
    pub fn covers(&self) -> &[Arc<Cover>] {
        &self.covers
    }

    /// Returns all groups.
    #[must_use]
    pub fn groups(&self) -> &[CoverGroup] {
        &self.groups
    }

    /// Finds a cover by device id.
    #[must_use]
    pub fn cover(&self, id: &DeviceId) -> Option<&Arc<Cover>> {
        self.covers.iter().find(|cover| cover.id() == id)
    }

    /// Finds a group by name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&CoverGroup> {
        self.groups.iter().find(|group| group.name() == name)
    }

    /// Polls the controller once for every cover.
    pub async fn update_all(&self) {
        for cover in &self.covers {
            cover.update().await;
        }
    }

    /// Releases the shared controller session.
    pub fn unload(&self) {
        tracing::info!(entry = %self.entry_id, "Unloading entry");
        self.controller.close();
    }
}

fn group_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> EntryConfig {
        EntryConfig::from_json(
            r#"{
                "http_base_url": "http://127.0.0.1:9",
                "move_time": 12,
                "devices": [
                    {"id": "1,01", "name": "Kitchen", "module": "Era Roll (1,1)"},
                    {"id": "2,01", "name": "Office", "module": "Era Roll (2,1)"}
                ],
                "groups": [
                    {"name": "Ground Floor", "devices": ["1,01", "2,01", "9,01"]},
                    {"name": "Ghosts", "devices": ["9,01"]}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn builds_covers_with_unique_ids() {
        let integration = Integration::from_entry("abc", &entry());
        assert_eq!(integration.covers().len(), 2);

        let kitchen = integration.cover(&"1,01".parse().unwrap()).unwrap();
        assert_eq!(kitchen.unique_id(), "abc_1,01");
        assert_eq!(kitchen.full_travel().as_secs(), 12);
    }

    #[test]
    fn builds_groups_from_known_members() {
        let integration = Integration::from_entry("abc", &entry());
        assert_eq!(integration.groups().len(), 1);

        let group = integration.group("Ground Floor").unwrap();
        assert_eq!(group.unique_id(), "abc_group_ground_floor");
        assert_eq!(group.members().len(), 2);
        assert!(integration.group("Ghosts").is_none());
    }

    #[test]
    fn covers_share_one_controller() {
        let integration = Integration::from_entry("abc", &entry());
        assert_eq!(Arc::strong_count(integration.controller()), 3);
    }

    #[test]
    fn unload_is_idempotent() {
        let integration = Integration::from_entry("abc", &entry());
        integration.unload();
        integration.unload();
        assert!(!integration.controller().is_open());
    }
}
