// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lazily opened HTTP session owned by a controller.

use parking_lot::Mutex;

use crate::error::ProtocolError;
use crate::protocol::{HttpClient, HttpConfig};

/// The HTTP connection pool of one controller.
///
/// Opened on first use, released by [`close`](Self::close). A closed
/// session reopens on the next request.
#[derive(Debug)]
pub(crate) struct Session {
    config: HttpConfig,
    client: Mutex<Option<HttpClient>>,
}

impl Session {
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self {
            config,
            client: Mutex::new(None),
        }
    }

    pub(crate) fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Returns the open client, opening it if needed.
    pub(crate) fn client(&self) -> Result<HttpClient, ProtocolError> {
        let mut guard = self.client.lock();
        if let Some(client) = guard.as_ref() {
            return Ok(client.clone());
        }

        let client = self.config.clone().into_client().inspect_err(|err| {
            tracing::error!(error = %err, "Failed to initialize HTTP session");
        })?;
        tracing::debug!(
            base_url = %self.config.base_url(),
            timeout_secs = self.config.timeout().as_secs(),
            "HTTP session initialized"
        );
        *guard = Some(client.clone());
        Ok(client)
    }

    pub(crate) fn is_open(&self) -> bool {
        self.client.lock().is_some()
    }

    /// Releases the client. Returns false if it was already closed.
    ///
    /// In-flight requests keep their clone of the client and finish normally.
    pub(crate) fn close(&self) -> bool {
        self.client.lock().take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_lazily_and_closes_idempotently() {
        let session = Session::new(HttpConfig::new("http://nice.local"));
        assert!(!session.is_open());

        session.client().unwrap();
        assert!(session.is_open());

        assert!(session.close());
        assert!(!session.close());
        assert!(!session.is_open());

        // Reopens on demand
        session.client().unwrap();
        assert!(session.is_open());
    }

    #[test]
    fn invalid_url_does_not_open() {
        let session = Session::new(HttpConfig::new("nice.local"));
        assert!(matches!(
            session.client(),
            Err(ProtocolError::InvalidAddress(_))
        ));
        assert!(!session.is_open());
    }
}
