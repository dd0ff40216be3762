//! Tests for `appcenter-fetch apps`

use super::common::{valid_apps_response, TestContext};
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn test_apps_lists_labels() {
    let ctx = TestContext::new();
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0.1/apps"))
        .and(header("X-API-Token", "1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(valid_apps_response()))
        .mount(&mock_server)
        .await;

    ctx.appcenter_fetch()
        .args(["apps", "--api-token", "1234", "--api-url", &mock_server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("owner-name/App-Name (My App Name)"))
        .stdout(predicate::str::contains("acme/Other-App (Other App)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_apps_filter() {
    let ctx = TestContext::new();
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0.1/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(valid_apps_response()))
        .mount(&mock_server)
        .await;

    ctx.appcenter_fetch()
        .args(["apps", "--api-token", "1234", "--filter", "acme other"])
        .args(["--api-url", &mock_server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme/Other-App"))
        .stdout(predicate::str::contains("App-Name").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_apps_non_ok_is_empty_not_error() {
    let ctx = TestContext::new();
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0.1/apps"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    ctx.appcenter_fetch()
        .args(["apps", "--api-token", "1234", "--json", "--api-url", &mock_server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_apps_requires_token() {
    let ctx = TestContext::new();

    ctx.appcenter_fetch()
        .args(["apps", "--api-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API token for App Center given"));
}
