// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ClientError;
use crate::transport::BinaryResponse;
use std::path::{Path, PathBuf};
use vas_api::ResponseKind;

/// A downloaded document, named and ready to write to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// The file name the artifact saves under.
    pub file_name: String,
    /// The `Content-Type` the backend labelled the payload with.
    pub content_type: Option<String>,
    /// The payload.
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Builds an artifact from a binary response.
    ///
    /// The file name comes from the `Content-Disposition` header when the
    /// backend sent one. Otherwise a name is synthesized from the operation,
    /// the batch index, and today's date, e.g. `print-batch2-2026-08-29.pdf`.
    ///
    /// # Arguments
    ///
    /// * `response` - The binary response to wrap
    /// * `operation` - Short operation name used in synthesized file names
    /// * `batch_index` - 1-based batch number, absent for unbatched runs
    /// * `kind` - Payload kind, used for the synthesized extension
    #[must_use]
    pub fn from_response(
        response: BinaryResponse,
        operation: &str,
        batch_index: Option<u32>,
        kind: ResponseKind,
    ) -> Self {
        let file_name: String = response
            .content_disposition
            .as_deref()
            .and_then(parse_disposition_filename)
            .unwrap_or_else(|| synthesize_name(operation, batch_index, kind));
        Self {
            file_name,
            content_type: response.content_type,
            bytes: response.bytes,
        }
    }

    /// Writes the artifact under `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] when the directory or file cannot be
    /// written.
    ///
    /// # Returns
    ///
    /// The full path of the written file.
    pub async fn save(&self, dir: &Path) -> Result<PathBuf, ClientError> {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|err| ClientError::Io(err.to_string()))?;
        let path: PathBuf = dir.join(&self.file_name);
        tokio::fs::write(&path, &self.bytes)
            .await
            .map_err(|err| ClientError::Io(err.to_string()))?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "saved artifact");
        Ok(path)
    }
}

/// Extracts the file name from a `Content-Disposition` header.
///
/// Handles both the quoted and bare forms of the `filename` parameter. Any
/// path components in the value are stripped so a hostile header cannot
/// direct the write outside the target directory.
fn parse_disposition_filename(header: &str) -> Option<String> {
    let raw: &str = header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))?;
    let unquoted: &str = raw.trim_matches('"');
    let name: &str = unquoted
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(unquoted);
    if name.is_empty() {
        None
    } else {
        Some(name.to_owned())
    }
}

fn synthesize_name(operation: &str, batch_index: Option<u32>, kind: ResponseKind) -> String {
    let today: time::Date = time::OffsetDateTime::now_utc().date();
    let extension: &str = kind.extension();
    batch_index.map_or_else(
        || format!("{operation}-{today}.{extension}"),
        |index| format!("{operation}-batch{index}-{today}.{extension}"),
    )
}
