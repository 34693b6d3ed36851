mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::process::Command;

fn quote_args(cmd: &mut Command) {
    cmd.args([
        "quote",
        "--vehicle",
        "A",
        "--color",
        "BLK",
        "--upholstery",
        "LEATHER",
        "--option",
        "O1",
        "--first-name",
        "Erika",
        "--last-name",
        "Muster",
        "--email",
        "erika@example.com",
    ]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_lists_catalog() {
    let server = common::catalog_server().await;

    let mut cmd = Command::new(cargo_bin!("vehicle-configurator"));
    cmd.env_remove("CONFIGURATOR_BACKEND_URL")
        .arg("--backend-url")
        .arg(server.uri())
        .arg("catalog");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Vehicles"))
        .stdout(predicate::str::contains("Truck B"))
        .stdout(predicate::str::contains("45.990,50 €"))
        .stdout(predicate::str::contains("Factory options"))
        .stdout(predicate::str::contains("Floor mats"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_quote_end_to_end() {
    let server = common::catalog_server().await;
    common::mount_offers(&server, 201, json!({"offer_id": 4711, "total_price": 170})).await;

    let mut cmd = Command::new(cargo_bin!("vehicle-configurator"));
    cmd.env("CONFIGURATOR_BACKEND_URL", server.uri());
    quote_args(&mut cmd);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[6 Customer details]"))
        .stdout(predicate::str::contains("Tow bar"))
        .stdout(predicate::str::contains("170,00 €"))
        .stdout(predicate::str::contains("Offer created. ID: 4711"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_dry_run_prints_payload() {
    let server = common::catalog_server().await;

    let mut cmd = Command::new(cargo_bin!("vehicle-configurator"));
    cmd.arg("--backend-url").arg(server.uri());
    quote_args(&mut cmd);
    cmd.args(["--special-agreement", "Delivery before June", "--dry-run"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"total_price\": 170.0"))
        .stdout(predicate::str::contains("\"special_agreement\": \"Delivery before June\""))
        .stdout(predicate::str::contains("Offer created").not());

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.iter().all(|r| r.method.as_str() == "GET"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_reports_rejection() {
    let server = common::catalog_server().await;
    common::mount_offers(&server, 400, json!({"detail": "invalid email"})).await;

    let mut cmd = Command::new(cargo_bin!("vehicle-configurator"));
    cmd.arg("--backend-url").arg(server.uri());
    quote_args(&mut cmd);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Submission failed: 400 invalid email"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_rejects_unknown_vehicle() {
    let server = common::catalog_server().await;

    let mut cmd = Command::new(cargo_bin!("vehicle-configurator"));
    cmd.arg("--backend-url").arg(server.uri()).args([
        "quote",
        "--vehicle",
        "NOPE",
        "--color",
        "BLK",
        "--upholstery",
        "LEATHER",
        "--first-name",
        "Erika",
        "--last-name",
        "Muster",
        "--email",
        "erika@example.com",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown vehicle 'NOPE'"));
}
