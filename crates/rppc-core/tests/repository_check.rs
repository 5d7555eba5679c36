mod common;

use common::*;
use httpmock::prelude::*;
use rppc_core::remote::{create_repository, find_repository};
use rppc_core::{CreateOutcome, Credentials, Error, RepoLookup};
use serde_json::json;

#[tokio::test]
async fn test_match_on_second_page_stops_scan() {
    let server = MockServer::start_async().await;
    let profile = mock_profile(&server, 150).await;
    let page1 = mock_page(&server, 1, repo_page(1, 100)).await;

    // Entry 137 of 150 is the package
    let mut second = repo_page(101, 50);
    second[36] = json!({
        "full_name": format!("{USER}/foo"),
        "clone_url": format!("https://github.com/{USER}/foo.git"),
    });
    let page2 = mock_page(&server, 2, second).await;
    let page3 = mock_page(&server, 3, vec![]).await;

    let lookup = find_repository(&client_for(&server), USER, "foo")
        .await
        .unwrap();

    match lookup {
        RepoLookup::Found(repo) => assert_eq!(repo.full_name, "octocat/foo"),
        other => panic!("expected a match, got {other:?}"),
    }
    profile.assert_hits_async(1).await;
    page1.assert_hits_async(1).await;
    page2.assert_hits_async(1).await;
    page3.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_early_match_skips_remaining_pages() {
    let server = MockServer::start_async().await;
    mock_profile(&server, 250).await;
    let mut first = repo_page(1, 100);
    first[0] = json!({ "full_name": format!("{USER}/foo"), "clone_url": "" });
    let page1 = mock_page(&server, 1, first).await;
    let page2 = mock_page(&server, 2, repo_page(101, 100)).await;
    let page3 = mock_page(&server, 3, repo_page(201, 50)).await;

    let lookup = find_repository(&client_for(&server), USER, "foo")
        .await
        .unwrap();

    assert!(matches!(lookup, RepoLookup::Found(_)));
    page1.assert_hits_async(1).await;
    page2.assert_hits_async(0).await;
    page3.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_no_match_scans_every_page_once() {
    let server = MockServer::start_async().await;
    mock_profile(&server, 250).await;
    let page1 = mock_page(&server, 1, repo_page(1, 100)).await;
    let page2 = mock_page(&server, 2, repo_page(101, 100)).await;
    let page3 = mock_page(&server, 3, repo_page(201, 50)).await;

    let lookup = find_repository(&client_for(&server), USER, "foo")
        .await
        .unwrap();

    assert_eq!(lookup, RepoLookup::NotFound { pages_scanned: 3 });
    page1.assert_hits_async(1).await;
    page2.assert_hits_async(1).await;
    page3.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_match_is_case_sensitive() {
    let server = MockServer::start_async().await;
    mock_profile(&server, 1).await;
    mock_page(
        &server,
        1,
        vec![json!({ "full_name": format!("{USER}/Foo"), "clone_url": "" })],
    )
    .await;

    let lookup = find_repository(&client_for(&server), USER, "foo")
        .await
        .unwrap();

    assert_eq!(lookup, RepoLookup::NotFound { pages_scanned: 1 });
}

#[tokio::test]
async fn test_failed_page_is_an_error_not_a_miss() {
    let server = MockServer::start_async().await;
    mock_profile(&server, 150).await;
    mock_page(&server, 1, repo_page(1, 100)).await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/users/{USER}/repos"))
                .query_param("page", "2");
            then.status(500).body("boom");
        })
        .await;

    let err = find_repository(&client_for(&server), USER, "foo")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Status { .. }));
}

#[tokio::test]
async fn test_failed_profile_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/users/{USER}"));
            then.status(404).json_body(json!({ "message": "Not Found" }));
        })
        .await;

    let err = find_repository(&client_for(&server), USER, "foo")
        .await
        .unwrap_err();

    match err {
        Error::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert!(body.contains("Not Found"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_existing_repository_is_not_created() {
    let server = MockServer::start_async().await;
    mock_profile(&server, 1).await;
    mock_page(
        &server,
        1,
        vec![json!({
            "full_name": format!("{USER}/foo"),
            "clone_url": format!("https://github.com/{USER}/foo.git"),
        })],
    )
    .await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/user/repos");
            then.status(201);
        })
        .await;

    let creds = Credentials::new(USER, "tok").unwrap();
    let outcome = create_repository(&client_for(&server), "foo", "bar", &creds)
        .await
        .unwrap();

    assert!(matches!(outcome, CreateOutcome::AlreadyExists(_)));
    assert_eq!(outcome.record().full_name, "octocat/foo");
    create.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_missing_repository_is_created() {
    let server = MockServer::start_async().await;
    mock_profile(&server, 0).await;
    mock_page(&server, 1, vec![]).await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/user/repos")
                .header("authorization", "Bearer tok")
                .json_body(json!({
                    "name": "foo",
                    "description": "bar",
                    "homepage": "https://octocat.github.io/foo",
                    "private": false,
                    "has_issues": true,
                    "has_projects": true,
                    "has_wiki": true,
                }));
            then.status(201).json_body(json!({
                "full_name": "octocat/foo",
                "clone_url": "https://github.com/octocat/foo.git",
            }));
        })
        .await;

    let creds = Credentials::new(USER, "tok").unwrap();
    let outcome = create_repository(&client_for(&server), "foo", "bar", &creds)
        .await
        .unwrap();

    match outcome {
        CreateOutcome::Created(repo) => {
            assert_eq!(repo.clone_url, "https://github.com/octocat/foo.git")
        }
        other => panic!("expected creation, got {other:?}"),
    }
    create.assert_async().await;
}

#[tokio::test]
async fn test_rejected_creation_carries_response_body() {
    let server = MockServer::start_async().await;
    mock_profile(&server, 0).await;
    mock_page(&server, 1, vec![]).await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/user/repos");
            then.status(422)
                .json_body(json!({ "message": "Repository creation failed." }));
        })
        .await;

    let creds = Credentials::new(USER, "tok").unwrap();
    let err = create_repository(&client_for(&server), "foo", "bar", &creds)
        .await
        .unwrap_err();

    match err {
        Error::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 422);
            assert!(body.contains("Repository creation failed."));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_creation_answer_without_clone_url_is_a_decode_error() {
    let server = MockServer::start_async().await;
    mock_profile(&server, 0).await;
    mock_page(&server, 1, vec![]).await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/user/repos");
            then.status(201).json_body(json!({ "full_name": "octocat/foo" }));
        })
        .await;

    let creds = Credentials::new(USER, "tok").unwrap();
    let err = create_repository(&client_for(&server), "foo", "bar", &creds)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }), "unexpected error: {err}");
}

#[tokio::test]
async fn test_creation_accepts_only_ok_or_created() {
    let server = MockServer::start_async().await;
    mock_profile(&server, 0).await;
    mock_page(&server, 1, vec![]).await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/user/repos");
            then.status(202).json_body(json!({
                "full_name": "octocat/foo",
                "clone_url": "https://github.com/octocat/foo.git",
            }));
        })
        .await;

    let creds = Credentials::new(USER, "tok").unwrap();
    let err = create_repository(&client_for(&server), "foo", "bar", &creds)
        .await
        .unwrap_err();

    match err {
        Error::Status { status, .. } => assert_eq!(status.as_u16(), 202),
        other => panic!("unexpected error: {other}"),
    }
}
