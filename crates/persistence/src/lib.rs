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

mod error;
mod filter_store;
mod memory;
mod sqlite;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use filter_store::{AWARDS_FILTERS_KEY, AWARDS_SEARCH_KEY, FilterStore};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::KeyValueStore;
