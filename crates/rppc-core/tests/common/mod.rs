#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use rppc_core::scaffold::Reporter;
use rppc_core::GitHubClient;
use serde_json::{json, Value};
use std::cell::RefCell;
use url::Url;

pub const USER: &str = "octocat";

pub fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::new(Url::parse(&server.base_url()).unwrap(), "rppc-test")
}

pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

/// `count` repositories named `{USER}/repo-{n}`, starting at `first`
pub fn repo_page(first: usize, count: usize) -> Vec<Value> {
    (first..first + count)
        .map(|n| {
            json!({
                "full_name": format!("{USER}/repo-{n}"),
                "clone_url": format!("https://github.com/{USER}/repo-{n}.git"),
            })
        })
        .collect()
}

pub async fn mock_profile<'a>(server: &'a MockServer, public_repos: u64) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/users/{USER}"));
            then.status(200)
                .json_body(json!({ "login": USER, "public_repos": public_repos }));
        })
        .await
}

pub async fn mock_page<'a>(server: &'a MockServer, page: u64, repos: Vec<Value>) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/users/{USER}/repos"))
                .query_param("per_page", "100")
                .query_param("page", page.to_string());
            then.status(200).json_body(Value::Array(repos));
        })
        .await
}

/// Catalog with `mit` and `apache-2.0`, both detail URLs served by `server`
pub async fn mock_catalog<'a>(server: &'a MockServer) -> Mock<'a> {
    let catalog = json!([
        {
            "key": "mit",
            "name": "MIT License",
            "spdx_id": "MIT",
            "url": server.url("/licenses/mit"),
        },
        {
            "key": "apache-2.0",
            "name": "Apache License 2.0",
            "spdx_id": "Apache-2.0",
            "url": server.url("/licenses/apache-2.0"),
        },
    ]);
    server
        .mock_async(|when, then| {
            when.method(GET).path("/licenses");
            then.status(200).json_body(catalog);
        })
        .await
}

pub async fn mock_mit_detail<'a>(server: &'a MockServer) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/licenses/mit");
            then.status(200).json_body(json!({
                "key": "mit",
                "name": "MIT License",
                "spdx_id": "MIT",
                "body": "MIT License\n\nCopyright (c) [year] [fullname]\n\n\
                         Permission is hereby granted, free of charge, to [fullname] ...\n",
            }));
        })
        .await
}

pub async fn mock_gitignore<'a>(server: &'a MockServer) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/gitignore/templates/Python");
            then.status(200).json_body(json!({
                "name": "Python",
                "source": "__pycache__/\n*.py[cod]\n",
            }));
        })
        .await
}

/// Reporter keeping every message for later assertions
#[derive(Default)]
pub struct RecordingReporter {
    pub steps: RefCell<Vec<String>>,
    pub warnings: RefCell<Vec<String>>,
}

impl Reporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.steps.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}
