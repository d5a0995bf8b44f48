use crate::common::command::{banner, compare_device, configs_dir, write_configs};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

const OLD: &str = "interface Gi0/1\n description a\n\n shutdown\n";
const NEW: &str = "interface Gi0/1\n description a\n\n no shutdown\n";

#[rstest]
fn banner_names_device_by_address(configs_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_configs(configs_dir.path(), "10.0.0.254", OLD, NEW);

    let actual_output = compare_device(configs_dir.path(), "10.0.0.254", &[])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    assert!(actual_output.starts_with(&banner("10.0.0.254")));

    Ok(())
}

#[rstest]
#[case(&[], " interface Gi0/1\n  description a\n- shutdown\n+ no shutdown\n")]
#[case(&["--boundary", "b"], "- shutdown\n+ no shutdown\n")]
#[case(&["--boundary", "c"], " interface Gi0/1\n  description a\n- shutdown\n+ no shutdown\n")]
fn boundary_option_controls_section_extent(
    configs_dir: TempDir,
    #[case] options: &[&str],
    #[case] expected_output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_configs(configs_dir.path(), "sw1", OLD, NEW);
    let mut args = vec!["-n"];
    args.extend_from_slice(options);

    let actual_output = compare_device(configs_dir.path(), "sw1", &args)
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn color_always_highlights_changes(configs_dir: TempDir) {
    write_configs(configs_dir.path(), "sw1", OLD, NEW);

    compare_device(configs_dir.path(), "sw1", &["-n", "--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[31m- shutdown"))
        .stdout(predicate::str::contains("\u{1b}[32m+ no shutdown"));
}

#[rstest]
fn color_never_prints_plain_text(configs_dir: TempDir) {
    write_configs(configs_dir.path(), "sw1", OLD, NEW);

    compare_device(configs_dir.path(), "sw1", &["-n", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}
