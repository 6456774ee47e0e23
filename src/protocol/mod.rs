// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the Nice controller.
//!
//! The controller speaks plain HTTP GET with optional basic authentication.
//! [`HttpConfig`] holds the connection parameters and [`HttpClient`] issues
//! the requests. Every call is attempted exactly once.

mod http;

pub use http::{HttpClient, HttpConfig, HttpResponse, looks_like_login_page};
