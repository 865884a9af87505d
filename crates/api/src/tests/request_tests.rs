// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::params::ParamSet;
use crate::request_response::{
    ActionMessage, BulkActionRequest, ListPage, PrintArchiveRequest, ResponseKind,
};
use vas_bulk::BatchDirective;
use vas_domain::{RecordId, Selection};

fn explicit_selection(ids: &[i64]) -> Selection {
    let mut selection: Selection = Selection::new();
    for id in ids {
        selection.toggle(RecordId::new(*id));
    }
    selection
}

#[test]
fn test_explicit_selection_serializes_id_list() {
    let selection: Selection = explicit_selection(&[3, 1, 2]);
    let request: BulkActionRequest =
        BulkActionRequest::from_selection(&selection, ParamSet::new(), &BatchDirective::default())
            .unwrap();

    let json: serde_json::Value = serde_json::to_value(&request).unwrap();
    assert_eq!(json["kind"], "explicit_ids");
    assert_eq!(json["ids"], serde_json::json!([1, 2, 3]));
}

#[test]
fn test_select_all_serializes_filters_and_window() {
    let mut selection: Selection = Selection::new();
    selection.select_all_matching(500);
    let mut filters: ParamSet = ParamSet::new();
    filters.insert(String::from("fee_status"), String::from("pending"));
    let directive: BatchDirective = BatchDirective {
        offset: Some(200),
        limit: Some(200),
    };

    let request: BulkActionRequest =
        BulkActionRequest::from_selection(&selection, filters, &directive).unwrap();

    let json: serde_json::Value = serde_json::to_value(&request).unwrap();
    assert_eq!(json["kind"], "select_all");
    assert_eq!(json["filters"]["fee_status"], "pending");
    assert_eq!(json["offset"], 200);
    assert_eq!(json["limit"], 200);
}

#[test]
fn test_select_all_unbatched_omits_window_keys() {
    let mut selection: Selection = Selection::new();
    selection.select_all_matching(40);

    let request: BulkActionRequest =
        BulkActionRequest::from_selection(&selection, ParamSet::new(), &BatchDirective::default())
            .unwrap();

    let json: serde_json::Value = serde_json::to_value(&request).unwrap();
    assert!(json.get("offset").is_none());
    assert!(json.get("limit").is_none());
}

#[test]
fn test_empty_selection_is_rejected() {
    let selection: Selection = Selection::new();
    let result: Result<BulkActionRequest, ApiError> =
        BulkActionRequest::from_selection(&selection, ParamSet::new(), &BatchDirective::default());

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput {
            field: "selection",
            ..
        })
    ));
}

#[test]
fn test_explicit_ids_are_windowed_client_side() {
    let selection: Selection = explicit_selection(&[1, 2, 3, 4, 5]);
    let directive: BatchDirective = BatchDirective {
        offset: Some(2),
        limit: Some(2),
    };

    let request: BulkActionRequest =
        BulkActionRequest::from_selection(&selection, ParamSet::new(), &directive).unwrap();

    assert!(matches!(
        request,
        BulkActionRequest::ExplicitIds { ref ids } if *ids == vec![RecordId::new(3), RecordId::new(4)]
    ));
}

#[test]
fn test_print_request_flattens_scope() {
    let selection: Selection = explicit_selection(&[7]);
    let scope: BulkActionRequest =
        BulkActionRequest::from_selection(&selection, ParamSet::new(), &BatchDirective::default())
            .unwrap();
    let request: PrintArchiveRequest = PrintArchiveRequest {
        scope,
        is_reprint: true,
        reason_id: Some(4),
    };

    let json: serde_json::Value = serde_json::to_value(&request).unwrap();
    assert_eq!(json["kind"], "explicit_ids");
    assert_eq!(json["is_reprint"], true);
    assert_eq!(json["reason_id"], 4);
}

#[test]
fn test_list_page_deserializes() {
    let raw: &str = r#"{"results":[1,2,3],"count":120,"num_pages":5,"current_page":2}"#;
    let page: ListPage<i64> = serde_json::from_str(raw).unwrap();

    assert_eq!(page.results, vec![1, 2, 3]);
    assert_eq!(page.count, 120);
    assert_eq!(page.num_pages, 5);
    assert_eq!(page.current_page, 2);
}

#[test]
fn test_action_message_round_trips() {
    let raw: &str = r#"{"message":"12 fees marked as paid"}"#;
    let message: ActionMessage = serde_json::from_str(raw).unwrap();
    assert_eq!(message.message, "12 fees marked as paid");
}

#[test]
fn test_response_kind_metadata() {
    assert_eq!(ResponseKind::Pdf.mime(), "application/pdf");
    assert_eq!(ResponseKind::Zip.extension(), "zip");
    assert_eq!(ResponseKind::Xlsx.extension(), "xlsx");
}
