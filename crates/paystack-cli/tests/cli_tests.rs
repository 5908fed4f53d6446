/*
[INPUT]:  Mock HTTP responses and parsed CLI commands
[OUTPUT]: Test results for command dispatch
[POS]:    Integration tests - CLI against a mock Paystack API
[UPDATE]: When subcommands or their endpoints change
*/

use clap::Parser;
use paystack_cli::{Cli, CliConfig, run};
use paystack_adapter::PaystackClient;
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PaystackClient {
    let config = CliConfig {
        secret_key: Some("sk_test_cli".to_string()),
        base_url: Some(server.uri()),
        timeout_secs: Some(5),
    };
    let secret_key = config.secret_key().expect("secret key");
    PaystackClient::with_config(secret_key, config.client_config()).expect("client init")
}

#[tokio::test]
async fn test_accounts_list_command() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dedicated_account"))
        .and(query_param("active", "true"))
        .and(query_param("currency", "NGN"))
        .and(query_param("perPage", "3"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Managed accounts successfully retrieved",
            "data": [{"id": 5, "account_number": "9930000005", "currency": "NGN", "active": true}],
            "meta": {"total": 1, "skipped": 0, "perPage": 3, "page": 1, "pageCount": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cli = Cli::try_parse_from(["paystack", "accounts", "list", "--count", "3", "--offset", "1"])
        .expect("parse");
    let output = assert_ok!(run(&client_for(&server), cli.command).await);

    assert_eq!(output["meta"]["perPage"], 3);
    assert_eq!(output["data"][0]["account_number"], "9930000005");
}

#[tokio::test]
async fn test_refund_command() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/refund"))
        .and(body_json(json!({
            "transaction": "T685312322670591",
            "amount": 2500,
            "customer_note": "Sorry"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Refund has been queued for processing",
            "data": {"status": "pending", "amount": 2500}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cli = Cli::try_parse_from([
        "paystack",
        "refund",
        "--transaction",
        "T685312322670591",
        "--amount",
        "2500",
        "--customer-note",
        "Sorry",
    ])
    .expect("parse");
    let output = assert_ok!(run(&client_for(&server), cli.command).await);

    assert_eq!(output["data"]["status"], "pending");
    assert_eq!(output["data"]["amount"], 2500);
}

#[tokio::test]
async fn test_command_surfaces_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dedicated_account/NOPE"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": false,
            "message": "Invalid dedicated account id"
        })))
        .mount(&server)
        .await;

    let cli = Cli::try_parse_from(["paystack", "accounts", "get", "NOPE"]).expect("parse");
    let err = run(&client_for(&server), cli.command)
        .await
        .expect_err("400 should fail");

    let rendered = format!("{err:#}");
    assert!(rendered.contains("fetch dedicated account"));
    assert!(rendered.contains("Invalid dedicated account id"));
}
