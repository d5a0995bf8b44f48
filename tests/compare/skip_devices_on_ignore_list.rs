use crate::common::command::{DEVICE, compare_device, configs_dir, saved_config, write_configs};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn skip_device_on_ignore_list(configs_dir: TempDir, saved_config: String) {
    let changed = saved_config.replace("hostname edge-rtr1\n", "hostname edge-rtr2\n");
    write_configs(configs_dir.path(), DEVICE, &saved_config, &changed);
    write_file(FileSpec::new(
        configs_dir.path().join("ignore"),
        format!("# decommissioned\n{DEVICE}\n"),
    ));

    compare_device(configs_dir.path(), DEVICE, &[])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[rstest]
fn report_device_missing_from_ignore_list(configs_dir: TempDir, saved_config: String) {
    let changed = saved_config.replace("hostname edge-rtr1\n", "hostname edge-rtr2\n");
    write_configs(configs_dir.path(), DEVICE, &saved_config, &changed);
    write_file(FileSpec::new(
        configs_dir.path().join("ignore"),
        "core-sw1\n".to_string(),
    ));

    compare_device(configs_dir.path(), DEVICE, &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("+hostname edge-rtr2"));
}
