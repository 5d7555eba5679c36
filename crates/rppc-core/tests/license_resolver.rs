mod common;

use chrono::Datelike;
use common::*;
use httpmock::prelude::*;
use rppc_core::{Error, LicenseCatalog};

#[tokio::test]
async fn test_resolve_fills_year_and_author() {
    let server = MockServer::start_async().await;
    let catalog_mock = mock_catalog(&server).await;
    let detail_mock = mock_mit_detail(&server).await;
    let client = client_for(&server);

    let catalog = LicenseCatalog::fetch(&client).await.unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.position("apache-2.0").unwrap(), 1);

    let detail = catalog.resolve(&client, 0, "Ada Lovelace").await.unwrap();
    let year = chrono::Local::now().year().to_string();

    assert!(!detail.body.contains("[year]"));
    assert!(!detail.body.contains("[fullname]"));
    assert!(detail.body.contains(&format!("Copyright (c) {year} Ada Lovelace")));
    assert_eq!(detail.body.matches("Ada Lovelace").count(), 2);
    assert_eq!(detail.identifier(), "MIT");

    catalog_mock.assert_async().await;
    detail_mock.assert_async().await;
}

#[tokio::test]
async fn test_out_of_range_selection_makes_no_request() {
    let server = MockServer::start_async().await;
    mock_catalog(&server).await;
    let detail_mock = mock_mit_detail(&server).await;
    let client = client_for(&server);

    let catalog = LicenseCatalog::fetch(&client).await.unwrap();
    let err = catalog.resolve(&client, 2, "A").await.unwrap_err();

    assert!(matches!(err, Error::LicenseOutOfRange { index: 2, len: 2 }));
    detail_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_catalog_failure_is_a_status_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/licenses");
            then.status(503).body("unavailable");
        })
        .await;

    let err = LicenseCatalog::fetch(&client_for(&server)).await.unwrap_err();
    match err {
        Error::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_malformed_catalog_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/licenses");
            then.status(200).body("not json");
        })
        .await;

    let err = LicenseCatalog::fetch(&client_for(&server)).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}
