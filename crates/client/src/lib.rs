// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod artifact;
mod debounce;
mod error;
mod executor;
mod transport;

#[cfg(test)]
mod tests;

pub use artifact::ExportArtifact;
pub use debounce::{DEBOUNCE_DELAY, Debouncer};
pub use error::ClientError;
pub use executor::BulkExecutor;
pub use transport::{BinaryResponse, DEFAULT_TIMEOUT_SECS, HttpTransport, Transport};
