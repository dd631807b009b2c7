//! End-to-end runs of the CLI runner against temporary output files.

use clap::Parser;
use nscgen::cli::{Args, Runner};
use nscgen::constants::prompts;
use nscgen::error::{Error, Result};
use nscgen::prompt::automatic_impl::AutomaticPrompter;
use nscgen::prompt::{ConfirmationConfig, ConfirmationPrompter, TextPromptConfig, TextPrompter};
use std::fs;
use test_log::test;

const POLICY_JSON: &str = r#"{
    "cleartext_traffic_permitted": false,
    "domain_configs": [
        {
            "cleartext_traffic_permitted": true,
            "domains": [{ "name": "example.com", "include_subdomains": false }]
        }
    ]
}"#;

const POLICY_XML: &str = "\
<?xml version='1.0' encoding='utf-8'?>
<network-security-config>
\t<domain-config cleartextTrafficPermitted=\"true\">
\t\t<domain includeSubdomains=\"false\">example.com</domain>
\t</domain-config>
</network-security-config>
";

fn args(extra: &[&str]) -> Args {
    let mut argv = vec!["nscgen"];
    argv.extend_from_slice(extra);
    Args::parse_from(argv)
}

/// Fails every prompt the way a Ctrl-C does.
struct InterruptingPrompter;

impl TextPrompter for InterruptingPrompter {
    fn prompt_text(&self, _config: &TextPromptConfig) -> Result<String> {
        Err(Error::Interrupted)
    }
}

impl ConfirmationPrompter for InterruptingPrompter {
    fn prompt_confirmation(&self, _config: &ConfirmationConfig) -> Result<bool> {
        Err(Error::Interrupted)
    }
}

#[test]
fn writes_policy_from_inline_answers() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("res/xml/network_security_config.xml");
    let output_arg = output.to_str().unwrap();

    Runner::new(args(&[output_arg, "--answers", POLICY_JSON, "--non-interactive"]))
        .run_with(AutomaticPrompter::new())
        .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), POLICY_XML);
}

#[test]
fn writes_policy_from_yaml_answers_file_with_space_indent() {
    let dir = tempfile::tempdir().unwrap();
    let policy = dir.path().join("policy.yaml");
    fs::write(
        &policy,
        "base_config:\n  cleartext_traffic_permitted: true\n  trust_anchors:\n    certificates:\n      - src: system\n        override_pins: true\n",
    )
    .unwrap();
    let output = dir.path().join("config.xml");

    Runner::new(args(&[
        output.to_str().unwrap(),
        "--answers-file",
        policy.to_str().unwrap(),
        "--indent",
        "2",
    ]))
    .run_with(AutomaticPrompter::new())
    .unwrap();

    let expected = "\
<?xml version='1.0' encoding='utf-8'?>
<network-security-config>
  <base-config cleartextTrafficPermitted=\"true\">
    <trust-anchors>
      <certificates src=\"system\" overridePins=\"true\"/>
    </trust-anchors>
  </base-config>
</network-security-config>
";
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn asks_for_output_path_until_given() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("asked.xml");

    let provider = AutomaticPrompter::new()
        .with_text_response(prompts::OUTPUT_PATH, "")
        .with_text_response(prompts::OUTPUT_PATH_RETRY, output.to_str().unwrap());

    Runner::new(args(&["--answers", POLICY_JSON])).run_with(provider).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), POLICY_XML);
}

#[test]
fn interactive_session_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("wizard.xml");

    let provider = AutomaticPrompter::new()
        .with_confirmation_response(prompts::ADD_BASE_CONFIG, false)
        .with_confirmation_response(prompts::DOMAIN_CLEARTEXT, true)
        .with_text_response(prompts::DOMAIN_NAME, "example.com")
        .with_confirmation_response(prompts::INCLUDE_SUBDOMAINS, false)
        .with_confirmation_response(prompts::ADD_TRUST_ANCHORS, false)
        .with_confirmation_response(prompts::ADD_PIN_SET, false)
        .with_confirmation_response(prompts::ANOTHER_DOMAIN_CONFIG, false)
        .with_confirmation_response(prompts::ADD_DEBUG_OVERRIDES, false)
        .with_text_response(prompts::OUTPUT_PATH, output.to_str().unwrap());

    Runner::new(args(&[])).run_with(provider).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), POLICY_XML);
}

#[test]
fn existing_file_is_kept_when_overwrite_declined() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("config.xml");
    fs::write(&output, "original").unwrap();
    let output_arg = output.to_str().unwrap();

    let provider = AutomaticPrompter::new()
        .with_confirmation_response(&format!("Overwrite {}?", output.display()), false);
    let result = Runner::new(args(&[output_arg, "--answers", POLICY_JSON])).run_with(provider);

    assert!(matches!(result, Err(Error::OutputFileExistsError { .. })));
    assert_eq!(fs::read_to_string(&output).unwrap(), "original");
}

#[test]
fn existing_file_is_replaced_when_overwrite_confirmed() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("config.xml");
    fs::write(&output, "original").unwrap();
    let output_arg = output.to_str().unwrap();

    let provider = AutomaticPrompter::new()
        .with_confirmation_response(&format!("Overwrite {}?", output.display()), true);
    Runner::new(args(&[output_arg, "--answers", POLICY_JSON])).run_with(provider).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), POLICY_XML);
}

#[test]
fn force_overwrites_without_asking() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("config.xml");
    fs::write(&output, "original").unwrap();
    let output_arg = output.to_str().unwrap();

    Runner::new(args(&[output_arg, "--force", "--non-interactive", "--answers", POLICY_JSON]))
        .run_with(InterruptingPrompter)
        .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), POLICY_XML);
}

#[test]
fn force_skips_overwrite_question_in_interactive_mode() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("config.xml");
    fs::write(&output, "original").unwrap();

    // A queued "no" would reject the overwrite if the question were asked.
    let provider = AutomaticPrompter::new()
        .with_confirmation_response(&format!("Overwrite {}?", output.display()), false);

    let runner =
        Runner::new(args(&[output.to_str().unwrap(), "--force", "--answers", POLICY_JSON]));
    runner.run_with(provider).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), POLICY_XML);
}

#[test]
fn non_interactive_refuses_existing_file_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("config.xml");
    fs::write(&output, "original").unwrap();

    let result = Runner::new(args(&[
        output.to_str().unwrap(),
        "--non-interactive",
        "--answers",
        POLICY_JSON,
    ]))
    .run_with(InterruptingPrompter);

    assert!(matches!(result, Err(Error::OutputFileExistsError { .. })));
    assert_eq!(fs::read_to_string(&output).unwrap(), "original");
}

#[test]
fn non_interactive_requires_answers_and_output() {
    let result = Runner::new(args(&["--non-interactive", "config.xml"]))
        .run_with(InterruptingPrompter);
    assert!(matches!(result, Err(Error::MissingAnswers)));

    let result = Runner::new(args(&["--non-interactive", "--answers", POLICY_JSON]))
        .run_with(InterruptingPrompter);
    assert!(matches!(result, Err(Error::MissingOutputPath)));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("config.xml");

    Runner::new(args(&[output.to_str().unwrap(), "--dry-run", "--answers", POLICY_JSON]))
        .run_with(InterruptingPrompter)
        .unwrap();

    assert!(!output.exists());
}

#[test]
fn interrupt_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("config.xml");

    let result = Runner::new(args(&[output.to_str().unwrap()])).run_with(InterruptingPrompter);

    assert!(matches!(result, Err(Error::Interrupted)));
    assert!(!output.exists());
}
