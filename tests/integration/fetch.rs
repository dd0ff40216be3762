//! Tests for `appcenter-fetch fetch`

use super::common::{
    forbidden_response, not_found_response, valid_release_response, TestContext,
};
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LATEST_PATH: &str = "/v0.1/apps/owner-name/App-Name/releases/latest";

async fn stub_latest(status: u16, body: serde_json::Value) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LATEST_PATH))
        .and(header("X-API-Token", "1234"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_api_token_makes_no_request() {
    let ctx = TestContext::new();
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(valid_release_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    ctx.appcenter_fetch()
        .args(["fetch", "--owner-name", "owner-name", "--app-name", "App-Name"])
        .args(["--api-url", &mock_server.uri()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No API token for App Center given, pass using `api_token: 'token'`",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_forbidden_reports_no_versions() {
    let ctx = TestContext::new();
    let mock_server = stub_latest(403, forbidden_response()).await;

    ctx.appcenter_fetch()
        .args(["fetch", "--api-token", "1234"])
        .args(["--owner-name", "owner-name", "--app-name", "App-Name"])
        .args(["--api-url", &mock_server.uri()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No versions found for 'App-Name' owned by owner-name",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_reports_no_versions() {
    let ctx = TestContext::new();
    let mock_server = stub_latest(404, not_found_response()).await;

    ctx.appcenter_fetch()
        .args(["fetch", "--api-token", "1234"])
        .args(["--owner-name", "owner-name", "--app-name", "App-Name"])
        .args(["--api-url", &mock_server.uri()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No versions found for 'App-Name' owned by owner-name",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_success_json_output() {
    let ctx = TestContext::new();
    let mock_server = stub_latest(200, valid_release_response()).await;

    let output = ctx
        .appcenter_fetch()
        .args(["fetch", "--api-token", "1234", "--json"])
        .args(["--owner-name", "owner-name", "--app-name", "App-Name"])
        .args(["--api-url", &mock_server.uri()])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["id"], 7);
    assert_eq!(result["version"], "1.0.4");
    assert_eq!(result["build_number"], "1.0.4.105");
    assert_eq!(result["release_notes"], "note 7");
    assert_eq!(
        result["release_url"],
        "https://appcenter.ms/users/owner-name/apps/App-Name/distribute/releases/7"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_success_text_output_from_env() {
    let ctx = TestContext::new();
    let mock_server = stub_latest(200, valid_release_response()).await;

    ctx.appcenter_fetch()
        .arg("fetch")
        .env("APPCENTER_API_TOKEN", "1234")
        .env("APPCENTER_OWNER_NAME", "owner-name")
        .env("APPCENTER_APP_NAME", "App-Name")
        .env("APPCENTER_API_URL", mock_server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("version: 1.0.4\n"))
        .stdout(predicate::str::contains("build_number: 1.0.4.105"))
        .stdout(predicate::str::contains("release_notes: note 7"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_organization_release_url() {
    let ctx = TestContext::new();
    let mock_server = stub_latest(200, valid_release_response()).await;

    ctx.appcenter_fetch()
        .args(["fetch", "--api-token", "1234", "--owner-type", "organization"])
        .args(["--owner-name", "owner-name", "--app-name", "App-Name"])
        .args(["--api-url", &mock_server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "release_url: https://appcenter.ms/orgs/owner-name/apps/App-Name/distribute/releases/7",
        ));
}

#[test]
fn test_invalid_owner_type() {
    let ctx = TestContext::new();

    ctx.appcenter_fetch()
        .args(["fetch", "--api-token", "1234", "--owner-type", "team"])
        .args(["--owner-name", "owner-name", "--app-name", "App-Name"])
        .args(["--api-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Only \"user\" and \"organization\" types are allowed, you provided \"team\"",
        ));
}

#[test]
fn test_missing_app_name() {
    let ctx = TestContext::new();

    ctx.appcenter_fetch()
        .args(["fetch", "--api-token", "1234", "--owner-name", "owner-name"])
        .args(["--api-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No app name for App Center given, pass using `app_name: 'app name'`",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_version_does_not_change_lookup() {
    let ctx = TestContext::new();
    let mock_server = stub_latest(200, valid_release_response()).await;
    Mock::given(method("GET"))
        .and(path("/v0.1/apps/owner-name/App-Name/releases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let output = ctx
        .appcenter_fetch()
        .args(["fetch", "--api-token", "1234", "--json"])
        .args(["--owner-name", "owner-name", "--app-name", "App-Name"])
        .args(["--api-url", &mock_server.uri()])
        .env("APPCENTER_APP_VERSION", "0.9.0")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["id"], 7);
    assert_eq!(result["version"], "1.0.4");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_interactive_single_org_app() {
    let ctx = TestContext::new();
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0.1/apps"))
        .and(header("X-API-Token", "1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "display_name": "Other App",
                "name": "Other-App",
                "owner": { "display_name": "Acme", "name": "acme", "type": "org" }
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v0.1/apps/acme/Other-App/releases/latest"))
        .and(header("X-API-Token", "1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(valid_release_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    ctx.appcenter_fetch()
        .args(["fetch", "--api-token", "1234", "--interactive"])
        .args(["--api-url", &mock_server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "release_url: https://appcenter.ms/orgs/acme/apps/Other-App/distribute/releases/7",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_interactive_without_apps() {
    let ctx = TestContext::new();
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0.1/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    ctx.appcenter_fetch()
        .args(["fetch", "--api-token", "1234", "--interactive"])
        .args(["--api-url", &mock_server.uri()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No apps found for the provided API token"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unsendable_token_makes_no_request() {
    let ctx = TestContext::new();
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(valid_release_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    ctx.appcenter_fetch()
        .args(["fetch", "--api-token", "bad\ntoken"])
        .args(["--owner-name", "owner-name", "--app-name", "App-Name"])
        .args(["--api-url", &mock_server.uri()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid API token"));
}

#[test]
fn test_filter_requires_interactive() {
    let ctx = TestContext::new();

    ctx.appcenter_fetch()
        .args(["fetch", "--filter", "weather"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--interactive"));
}
