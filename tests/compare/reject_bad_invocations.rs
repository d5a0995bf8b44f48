use crate::common::command::{DEVICE, compare_device, configs_dir, run_cfgdiff_command, saved_config, write_configs};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_when_input_is_missing(configs_dir: TempDir) {
    run_cfgdiff_command(configs_dir.path(), &["old/absent", "new/absent"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cfgdiff:"))
        .stderr(predicate::str::contains("old/absent"));
}

#[rstest]
#[case(&[])]
#[case(&["only-one"])]
#[case(&["--color", "sometimes", "a", "b"])]
fn fail_on_usage_errors(configs_dir: TempDir, #[case] args: &[&str]) {
    run_cfgdiff_command(configs_dir.path(), args)
        .assert()
        .code(1);
}

#[rstest]
fn fail_on_unknown_boundary(configs_dir: TempDir, saved_config: String) {
    write_configs(configs_dir.path(), DEVICE, &saved_config, &saved_config);

    compare_device(configs_dir.path(), DEVICE, &["--boundary", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid boundary"));
}

#[rstest]
#[case("--help", "USAGE:")]
#[case("--version", "0.1.0")]
fn succeed_on_help_and_version(
    configs_dir: TempDir,
    #[case] flag: &str,
    #[case] expected: &str,
) {
    run_cfgdiff_command(configs_dir.path(), &[flag])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}
