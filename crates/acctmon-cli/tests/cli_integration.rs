use acctmon_testing::TestWorld;
use acctmon_testing::assertions::{assert_flag, assert_label};
use predicates::prelude::*;

#[test]
fn status_renders_fallback_labels() {
    let world = TestWorld::new().with_config("google", "sandbox.example.net");
    let mut cmd = world.command().unwrap();
    cmd.arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No Token"))
        .stdout(predicate::str::contains("Setup Not Started"))
        .stdout(predicate::str::contains("sandbox.example.net"))
        .stdout(predicate::str::contains("[google sign-in widget]"));
}

#[test]
fn bare_invocation_behaves_like_status() {
    let world = TestWorld::new().with_config("google", "sandbox.example.net");
    let mut cmd = world.command().unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No Token"));
}

#[test]
fn status_json_is_machine_readable() {
    let world = TestWorld::new().with_config("azure-ad", "corp.example.net");
    let mut cmd = world.command().unwrap();
    let output = cmd.arg("status").arg("--format").arg("json").output().unwrap();
    assert!(output.status.success());

    let vm: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_label(&vm, "token_label", "No Token").unwrap();
    assert_label(&vm, "setup_label", "Setup Not Started").unwrap();
    assert_label(&vm, "domain_label", "corp.example.net").unwrap();
    assert_flag(&vm, "sign_in_visible", true).unwrap();
    assert_flag(&vm, "sign_out_visible", false).unwrap();
}

#[test]
fn azure_config_selects_labeled_button() {
    let world = TestWorld::new().with_config("azure-ad", "corp.example.net");
    let mut cmd = world.command().unwrap();
    cmd.arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Azure AD Sign In]"));
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let world = TestWorld::new();
    let mut cmd = world.command().unwrap();
    cmd.arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("sandbox.acctmon.example"));
}

#[test]
fn malformed_config_fails_with_context() {
    let world = TestWorld::new();
    std::fs::write(world.config_path(), "provider = \"unknown-idp\"\n").unwrap();
    let mut cmd = world.command().unwrap();
    cmd.arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsing config"));
}

#[test]
fn provider_list_names_both_providers() {
    let world = TestWorld::new().with_config("google", "sandbox.example.net");
    let mut cmd = world.command().unwrap();
    cmd.arg("provider")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("google"))
        .stdout(predicate::str::contains("azure-ad"))
        .stdout(predicate::str::contains("Azure Active Directory"));
}

#[test]
fn provider_list_json_round_trips() {
    let world = TestWorld::new().with_config("google", "sandbox.example.net");
    let mut cmd = world.command().unwrap();
    let output = cmd
        .arg("provider")
        .arg("list")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let providers: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let providers = providers.as_array().unwrap();
    assert_eq!(providers.len(), 2);
    assert_eq!(providers[0]["kind"], "google");
}

#[test]
fn demo_walks_the_full_lifecycle() {
    let world = TestWorld::new().with_config("google", "sandbox.example.net");
    let mut cmd = world.command().unwrap();
    cmd.arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("signed in, provisioning ongoing"))
        .stdout(predicate::str::contains("Connected"))
        .stdout(predicate::str::contains("device-switch-pending"))
        .stdout(predicate::str::contains("fully-provisioned"))
        .stdout(predicate::str::contains("42"))
        .stdout(predicate::str::contains("signed out"));
}

#[test]
fn demo_json_emits_one_record_per_step() {
    let world = TestWorld::new().with_config("google", "sandbox.example.net");
    let mut cmd = world.command().unwrap();
    let output = cmd
        .arg("demo")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 7);
    assert_label(&records[0]["status"], "token_label", "No Token").unwrap();

    let signed_out = records.last().unwrap();
    assert_eq!(signed_out["step"], "signed out");
    assert_label(&signed_out["status"], "token_label", "No Token").unwrap();
    assert_flag(&signed_out["status"], "sign_in_visible", true).unwrap();
}

#[test]
fn watch_json_emits_one_frame_per_change() {
    let world = TestWorld::new().with_config("google", "sandbox.example.net");
    let mut cmd = world.command().unwrap();
    let output = cmd
        .arg("watch")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let frames: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    // Initial sync frame first, then one frame per transition.
    assert_label(&frames[0], "token_label", "No Token").unwrap();
    assert!(frames.iter().any(|f| f["connectivity_label"] == "Connected"));
    assert!(frames.iter().any(|f| f["setup_label"] == "device-switch-pending"));
    assert!(frames.iter().any(|f| f["setup_label"] == "fully-provisioned"));
    assert_label(frames.last().unwrap(), "token_label", "No Token").unwrap();
}

#[test]
fn watch_ends_with_signed_out_screen() {
    let world = TestWorld::new().with_config("google", "sandbox.example.net");
    let mut cmd = world.command().unwrap();
    cmd.arg("watch")
        .assert()
        .success()
        .stdout(predicate::str::contains("No Token"));
}
