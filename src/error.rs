// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `nice_blinds` library.
//!
//! Failures fall into four families: value validation (malformed device
//! identifiers, unknown commands), protocol communication (HTTP transport,
//! authentication), XML parsing, and device-level rejections. Use
//! [`Error::kind`] to classify any error into the coarse [`ErrorKind`]
//! taxonomy that host applications map to user-facing messages.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a controller response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error reported for a specific device or group.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The controller could not be reached (timeout, refused, HTTP error status).
    Connectivity,
    /// The controller rejected the credentials or served a login page.
    Authentication,
    /// The controller answered with something that is not the expected XML.
    Protocol,
    /// The request was invalid before reaching the network.
    Logical,
}

impl Error {
    /// Classifies this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use nice_blinds::error::{Error, ErrorKind, ProtocolError, ValueError};
    ///
    /// let err: Error = ProtocolError::AuthenticationFailed.into();
    /// assert_eq!(err.kind(), ErrorKind::Authentication);
    ///
    /// let err: Error = ValueError::UnknownCommand("raise".into()).into();
    /// assert_eq!(err.kind(), ErrorKind::Logical);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Value(_) => ErrorKind::Logical,
            Self::Protocol(ProtocolError::AuthenticationFailed) => ErrorKind::Authentication,
            Self::Protocol(ProtocolError::InvalidAddress(_)) => ErrorKind::Logical,
            Self::Protocol(_) => ErrorKind::Connectivity,
            Self::Parse(_) => ErrorKind::Protocol,
            Self::Device(DeviceError::NotFound(_)) => ErrorKind::Logical,
            Self::Device(DeviceError::CommandRejected { .. }) => ErrorKind::Protocol,
        }
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A device identifier does not have the `address,endpoint` shape.
    #[error("invalid device id {0:?}, expected 'adr,ept'")]
    InvalidDeviceId(String),

    /// A command name is not one of open, close or stop.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A hexadecimal field could not be parsed.
    #[error("invalid hex value for {field}: {value:?}")]
    InvalidHex {
        /// The field being parsed.
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// A group number is empty.
    #[error("group number must not be empty")]
    EmptyGroupNumber,
}

/// Errors related to HTTP communication with the controller.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The controller answered with a non-success status.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid controller URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,
}

/// Errors related to parsing controller XML.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The XML reader rejected the document.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Stored entry data is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not well-formed in a way the reader does not report.
    #[error("malformed XML: {0}")]
    Malformed(String),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors related to a specific device or group.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// No device with this identifier is known.
    #[error("device not found: {0}")]
    NotFound(String),

    /// The controller refused a group command.
    #[error("group {group} rejected command with result {result}")]
    CommandRejected {
        /// The group number.
        group: String,
        /// The result code returned by the controller.
        result: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
