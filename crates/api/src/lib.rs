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
mod export;
mod params;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use export::{Sheet, Workbook, column_widths};
pub use params::{EXPORT_PAGE_SIZE, ParamSet, QueryParamBuilder};
pub use request_response::{
    ActionMessage, ApprovePaymentRequest, BulkActionRequest, ListPage, MarkAsPaidRequest,
    PrintArchiveRequest, ResponseKind,
};
