// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors surfaced while talking to the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never reached the backend or the connection dropped.
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the request and supplied a display message.
    ///
    /// The message is carried verbatim so the operator sees exactly what the
    /// backend said.
    #[error("{message}")]
    ServerValidation {
        /// The backend's message, unaltered.
        message: String,
    },

    /// The request exceeded the configured deadline.
    #[error("request timed out after {seconds} seconds")]
    Timeout {
        /// The deadline that was exceeded.
        seconds: u64,
    },

    /// A client-side precondition failed before any request was sent.
    #[error("{message}")]
    Precondition {
        /// Description of the failed precondition.
        message: String,
    },

    /// The backend's response could not be decoded.
    #[error("response decode error: {0}")]
    Decode(String),

    /// Writing an artifact to disk failed.
    #[error("file error: {0}")]
    Io(String),
}
