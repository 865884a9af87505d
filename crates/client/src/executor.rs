// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::artifact::ExportArtifact;
use crate::error::ClientError;
use crate::transport::{BinaryResponse, Transport};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use vas_api::{
    ActionMessage, ApprovePaymentRequest, BulkActionRequest, ListPage, MarkAsPaidRequest,
    ParamSet, PrintArchiveRequest, ResponseKind,
};

/// Runs bulk actions against the backend, one at a time.
///
/// A single request is allowed in flight; re-entrant submission fails with a
/// [`ClientError::Precondition`] so the caller can disable the triggering
/// control instead of queueing duplicate work. There are no automatic
/// retries, and an in-flight request cannot be cancelled.
pub struct BulkExecutor<T: Transport> {
    transport: T,
    in_flight: AtomicBool,
}

/// Releases the in-flight flag when the guarded request completes.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl<T: Transport> BulkExecutor<T> {
    /// Wraps a transport.
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            in_flight: AtomicBool::new(false),
        }
    }

    /// The wrapped transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    fn acquire(&self) -> Result<InFlightGuard<'_>, ClientError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(ClientError::Precondition {
                message: String::from("a bulk action is already running"),
            });
        }
        Ok(InFlightGuard {
            flag: &self.in_flight,
        })
    }

    fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ClientError> {
        serde_json::to_value(body).map_err(|err| ClientError::Decode(err.to_string()))
    }

    /// Runs a bulk action that produces a downloadable document.
    ///
    /// # Arguments
    ///
    /// * `path` - The endpoint to POST to
    /// * `request` - The record scope
    /// * `kind` - The payload type the endpoint produces
    /// * `operation` - Short name used in synthesized file names
    /// * `batch_index` - 1-based batch number, absent for unbatched runs
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Precondition`] when another bulk action is in
    /// flight, or any transport error from the request itself.
    pub async fn execute(
        &self,
        path: &str,
        request: &BulkActionRequest,
        kind: ResponseKind,
        operation: &str,
        batch_index: Option<u32>,
    ) -> Result<ExportArtifact, ClientError> {
        let _guard: InFlightGuard<'_> = self.acquire()?;
        tracing::info!(path, operation, ?batch_index, "starting bulk action");
        let response: BinaryResponse = self
            .transport
            .post_binary(path, Self::encode(request)?)
            .await?;
        Ok(ExportArtifact::from_response(
            response,
            operation,
            batch_index,
            kind,
        ))
    }

    /// Runs the print/archive action, which returns a ZIP of documents.
    ///
    /// A reprint without a recorded reason is rejected here, before any
    /// request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Precondition`] for a reason-less reprint or a
    /// re-entrant submission, or any transport error.
    pub async fn print_archive(
        &self,
        path: &str,
        request: &PrintArchiveRequest,
        batch_index: Option<u32>,
    ) -> Result<ExportArtifact, ClientError> {
        if request.is_reprint && request.reason_id.is_none() {
            return Err(ClientError::Precondition {
                message: String::from("a reprint requires a recorded reason"),
            });
        }
        let _guard: InFlightGuard<'_> = self.acquire()?;
        tracing::info!(path, reprint = request.is_reprint, ?batch_index, "starting print run");
        let response: BinaryResponse = self
            .transport
            .post_binary(path, Self::encode(request)?)
            .await?;
        Ok(ExportArtifact::from_response(
            response,
            "print",
            batch_index,
            ResponseKind::Zip,
        ))
    }

    /// Marks the given fees as paid.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Precondition`] on re-entrant submission, or
    /// any transport error.
    ///
    /// # Returns
    ///
    /// The backend's composed acknowledgement message, untouched.
    pub async fn mark_as_paid(
        &self,
        path: &str,
        request: &MarkAsPaidRequest,
    ) -> Result<String, ClientError> {
        self.post_for_message(path, Self::encode(request)?).await
    }

    /// Approves payment for the given fees.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Precondition`] on re-entrant submission, or
    /// any transport error.
    ///
    /// # Returns
    ///
    /// The backend's composed acknowledgement message, untouched.
    pub async fn approve_payment(
        &self,
        path: &str,
        request: &ApprovePaymentRequest,
    ) -> Result<String, ClientError> {
        self.post_for_message(path, Self::encode(request)?).await
    }

    async fn post_for_message(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<String, ClientError> {
        let _guard: InFlightGuard<'_> = self.acquire()?;
        let value: serde_json::Value = self.transport.post_json(path, body).await?;
        let message: ActionMessage = serde_json::from_value(value)
            .map_err(|err| ClientError::Decode(err.to_string()))?;
        Ok(message.message)
    }

    /// Fetches one page of a list.
    ///
    /// Callers re-fetch after every successful bulk action so printed and
    /// paid flags reflect server state.
    ///
    /// # Errors
    ///
    /// Returns any transport error, or [`ClientError::Decode`] when the page
    /// shape is unexpected.
    pub async fn fetch_page(
        &self,
        path: &str,
        params: &ParamSet,
    ) -> Result<ListPage<serde_json::Value>, ClientError> {
        let value: serde_json::Value = self.transport.get_json(path, params).await?;
        serde_json::from_value(value).map_err(|err| ClientError::Decode(err.to_string()))
    }

    /// Fetches every record matching the export parameter set.
    ///
    /// The backend treats a zero `page_size` as unpaginated, so this returns
    /// the full filtered set in one response.
    ///
    /// # Errors
    ///
    /// Returns any transport error, or [`ClientError::Decode`] when the page
    /// shape is unexpected.
    pub async fn fetch_all(
        &self,
        path: &str,
        export_params: &ParamSet,
    ) -> Result<Vec<serde_json::Value>, ClientError> {
        let page: ListPage<serde_json::Value> = self.fetch_page(path, export_params).await?;
        Ok(page.results)
    }
}
