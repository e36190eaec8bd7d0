use super::*;
use crate::state::test_helpers::{sample_map_json, seed_map, test_app_state};

fn query(name: Option<&str>, page: Option<&str>, column_and_order: Option<&str>) -> Query<ListMapsQuery> {
    Query(ListMapsQuery {
        name: name.map(str::to_owned),
        page: page.map(str::to_owned),
        column_and_order: column_and_order.map(str::to_owned),
    })
}

#[test]
fn map_error_to_status_maps_not_found() {
    assert_eq!(map_error_to_status(maps::MapError::NotFound(7)), StatusCode::NOT_FOUND);
}

#[test]
fn map_error_to_status_maps_database_errors() {
    let err = maps::MapError::Database(sqlx::Error::RowNotFound);
    assert_eq!(map_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn parse_map_id_accepts_integral_numbers() {
    assert_eq!(parse_map_id("12"), Some(12));
    assert_eq!(parse_map_id(" 3 "), Some(3));
    assert_eq!(parse_map_id("1.0"), Some(1));
    assert_eq!(parse_map_id("1e0"), Some(1));
    assert_eq!(parse_map_id("Infinity"), None);
    assert_eq!(parse_map_id("abc"), None);
    assert_eq!(parse_map_id("1.5"), None);
    assert_eq!(parse_map_id(""), None);
}

#[test]
fn list_query_deserializes_camel_case_sort_key() {
    let parsed: ListMapsQuery =
        serde_json::from_value(serde_json::json!({ "columnAndOrder": "height-desc", "page": "2" })).unwrap();
    assert_eq!(parsed.column_and_order.as_deref(), Some("height-desc"));
    assert_eq!(parsed.page.as_deref(), Some("2"));
    assert!(parsed.name.is_none());
}

#[tokio::test]
async fn list_maps_returns_sorted_page() {
    let state = test_app_state().await;
    seed_map(&state, "Alpha", 100, 100, "[]").await;
    seed_map(&state, "Beta", 200, 50, "[]").await;

    let Json(listing) = list_maps(State(state), query(None, Some("9"), Some("width-desc"))).await.unwrap();
    assert_eq!(listing.page, 1);
    assert_eq!(listing.number_of_pages, 1);
    assert_eq!(listing.rows[0].name, "Beta");
    assert!((listing.rows[0].height_by_width - 0.25).abs() < f64::EPSILON);
}

#[tokio::test]
async fn list_maps_serializes_for_table() {
    let state = test_app_state().await;
    seed_map(&state, "Alpha", 3, 1, "[]").await;

    let Json(listing) = list_maps(State(state), query(Some("alp"), None, None)).await.unwrap();
    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["column"], "name");
    assert_eq!(json["order"], "asc");
    assert_eq!(json["rows"][0]["height_by_width"], 0.333);
    assert!(json["links"]["next"].is_null());
    assert_eq!(json["headers"][0]["active"], "asc");
    assert_eq!(json["headers"][0]["next_sort_key"], "name-desc");
}

#[tokio::test]
async fn get_map_returns_ready_viewer() {
    let state = test_app_state().await;
    let id = seed_map(&state, "Farewell", 400, 200, &sample_map_json()).await;

    let Json(detail) = get_map(State(state), Path(id.to_string())).await.unwrap();
    assert_eq!(detail.name, "Farewell");
    assert!((detail.height_by_width - 0.5).abs() < f64::EPSILON);
    assert!(matches!(detail.viewer, ViewerPayload::Ready { .. }));
}

#[tokio::test]
async fn get_map_with_bad_payload_is_still_ok() {
    let state = test_app_state().await;
    let id = seed_map(&state, "Broken", 10, 10, "[{\"x\":1}]").await;

    let Json(detail) = get_map(State(state), Path(id.to_string())).await.unwrap();
    assert!(matches!(detail.viewer, ViewerPayload::Unavailable { .. }));
}

#[tokio::test]
async fn get_map_unknown_or_non_numeric_is_404() {
    let state = test_app_state().await;
    let missing = get_map(State(state.clone()), Path("999".to_owned())).await;
    assert_eq!(missing.err(), Some(StatusCode::NOT_FOUND));
    let garbage = get_map(State(state), Path("farewell".to_owned())).await;
    assert_eq!(garbage.err(), Some(StatusCode::NOT_FOUND));
}
