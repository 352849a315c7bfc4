use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("quote-engine"));
    cmd.args([
        "--package",
        "package_basic",
        "--addon",
        "addon_doctor_lookup",
        "--hosting",
        "hosting_5gb",
        "--domain",
        "domain_com",
        "--discount",
        "FI10PT",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("item,amount"))
        .stdout(predicate::str::contains("package,7500000"))
        .stdout(predicate::str::contains("addons,2000000"))
        .stdout(predicate::str::contains("discount,950000"))
        .stdout(predicate::str::contains("hosting,5261760"))
        .stdout(predicate::str::contains("domain,366120"))
        .stdout(predicate::str::contains("total,14177880"))
        .stdout(predicate::str::contains("installment_1,4275000"))
        .stdout(predicate::str::contains("installment_2,5627880"))
        .stdout(predicate::str::contains("installment_3,4275000"))
        .stderr(predicate::str::contains("Applied a 10% discount."));

    Ok(())
}

#[test]
fn test_cli_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(cargo_bin!("quote-engine"))
        .args(["--package", "package_full", "--format", "json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["package"], "package_full");
    assert_eq!(value["total_cost"], "13500000");
    assert_eq!(value["installments"][0], "6750000");
    assert_eq!(value["installments"][1], "0");
    Ok(())
}

#[test]
fn test_cli_without_package_fails_after_printing_breakdown() {
    let mut cmd = Command::new(cargo_bin!("quote-engine"));
    cmd.args(["--hosting", "hosting_5gb"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("hosting,5261760"))
        .stdout(predicate::str::contains("installment_1").not())
        .stderr(predicate::str::contains("no package selected"));
}

#[test]
fn test_cli_invalid_discount_code_is_not_fatal() {
    let mut cmd = Command::new(cargo_bin!("quote-engine"));
    cmd.args(["--package", "package_basic", "--discount", "RANDOM"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Invalid code."))
        .stdout(predicate::str::contains("discount,0"))
        .stdout(predicate::str::contains("total,7500000"));
}

#[test]
fn test_cli_custom_price_table() {
    let mut cmd = Command::new(cargo_bin!("quote-engine"));
    cmd.args([
        "--prices",
        "tests/fixtures/prices.csv",
        "--package",
        "package_starter",
        "--addon",
        "addon_blog",
        "--hosting",
        "hosting_1gb",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("total,1790000"))
        .stdout(predicate::str::contains("installment_1,625000"))
        .stdout(predicate::str::contains("installment_2,540000"));
}

#[test]
fn test_cli_price_table_from_env() {
    let mut cmd = Command::new(cargo_bin!("quote-engine"));
    cmd.env("QUOTE_PRICE_TABLE", "tests/fixtures/prices.csv")
        .env("QUOTE_OUTPUT_FORMAT", "json")
        .args(["--package", "package_starter"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"total_cost\": \"1000000\""));
}

#[test]
fn test_cli_list_prices() {
    let mut cmd = Command::new(cargo_bin!("quote-engine"));
    cmd.arg("--list");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("key,label,price"))
        .stdout(predicate::str::contains("package_basic,Basic package,7500000"))
        .stdout(predicate::str::contains("domain_com_vn,.com.vn domain,639815"))
        .stdout(predicate::str::is_match("(?s)package_full.*addon_.*hosting_.*domain_").unwrap());
}

#[test]
fn test_cli_list_one_kind() {
    let mut cmd = Command::new(cargo_bin!("quote-engine"));
    cmd.args(["--list", "--kind", "domain"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("domain_vn"))
        .stdout(predicate::str::contains("hosting_").not())
        .stdout(predicate::str::contains("package_").not());
}

#[test]
fn test_cli_kind_requires_list() {
    let mut cmd = Command::new(cargo_bin!("quote-engine"));
    cmd.args(["--kind", "hosting", "--package", "package_basic"]);

    cmd.assert().failure();
}

#[test]
fn test_cli_unknown_industry_rejected() {
    let mut cmd = Command::new(cargo_bin!("quote-engine"));
    cmd.args(["--industry", "mining", "--package", "package_basic"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown industry"));
}

#[test]
fn test_cli_submits_request_to_outbox() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let outbox = dir.path().join("outbox.jsonl");

    let mut cmd = Command::new(cargo_bin!("quote-engine"));
    cmd.args([
        "--industry",
        "retail",
        "--package",
        "package_multiple_interface",
        "--addon",
        "addon_ecommerce",
        "--name",
        "Lan",
        "--phone",
        "0912345678",
        "--outbox",
    ])
    .arg(&outbox);
    cmd.assert().success();

    let content = std::fs::read_to_string(&outbox)?;
    let request: serde_json::Value = serde_json::from_str(content.trim())?;
    assert_eq!(request["name"], "Lan");
    assert_eq!(request["phone"], "0912345678");
    let note = request["note"].as_str().unwrap_or_default();
    assert!(note.contains("Industry: retail"));
    assert!(note.contains("Total (VAT included): 18.500.000"));
    Ok(())
}

#[test]
fn test_cli_name_requires_outbox() {
    let mut cmd = Command::new(cargo_bin!("quote-engine"));
    cmd.args(["--package", "package_basic", "--name", "Lan", "--phone", "0912345678"]);

    cmd.assert().failure();
}
