// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::artifact::ExportArtifact;
use crate::transport::BinaryResponse;
use std::path::PathBuf;
use vas_api::ResponseKind;

fn response_with_disposition(header: Option<&str>) -> BinaryResponse {
    BinaryResponse {
        bytes: b"payload".to_vec(),
        content_disposition: header.map(str::to_owned),
        content_type: Some(String::from("application/zip")),
    }
}

#[test]
fn test_quoted_disposition_filename_is_used() {
    let artifact: ExportArtifact = ExportArtifact::from_response(
        response_with_disposition(Some("attachment; filename=\"transcripts.zip\"")),
        "print",
        Some(1),
        ResponseKind::Zip,
    );
    assert_eq!(artifact.file_name, "transcripts.zip");
}

#[test]
fn test_bare_disposition_filename_is_used() {
    let artifact: ExportArtifact = ExportArtifact::from_response(
        response_with_disposition(Some("attachment; filename=transcripts.zip")),
        "print",
        None,
        ResponseKind::Zip,
    );
    assert_eq!(artifact.file_name, "transcripts.zip");
}

#[test]
fn test_disposition_path_components_are_stripped() {
    let artifact: ExportArtifact = ExportArtifact::from_response(
        response_with_disposition(Some("attachment; filename=\"../../etc/cron.zip\"")),
        "print",
        None,
        ResponseKind::Zip,
    );
    assert_eq!(artifact.file_name, "cron.zip");
}

#[test]
fn test_missing_disposition_synthesizes_batch_name() {
    let artifact: ExportArtifact = ExportArtifact::from_response(
        response_with_disposition(None),
        "print",
        Some(3),
        ResponseKind::Zip,
    );
    assert!(artifact.file_name.starts_with("print-batch3-"));
    assert!(artifact.file_name.ends_with(".zip"));
}

#[test]
fn test_unbatched_synthesized_name_omits_batch_index() {
    let artifact: ExportArtifact = ExportArtifact::from_response(
        response_with_disposition(None),
        "export",
        None,
        ResponseKind::Xlsx,
    );
    assert!(artifact.file_name.starts_with("export-"));
    assert!(!artifact.file_name.contains("batch"));
    assert!(artifact.file_name.ends_with(".xlsx"));
}

#[tokio::test]
async fn test_save_writes_bytes_under_directory() {
    let dir: PathBuf = std::env::temp_dir().join("vas-client-artifact-test");
    let artifact: ExportArtifact = ExportArtifact {
        file_name: String::from("receipts.pdf"),
        content_type: None,
        bytes: b"pdf bytes".to_vec(),
    };

    let path: PathBuf = artifact.save(&dir).await.unwrap();

    assert_eq!(path, dir.join("receipts.pdf"));
    let written: Vec<u8> = tokio::fs::read(&path).await.unwrap();
    assert_eq!(written, b"pdf bytes");
    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
