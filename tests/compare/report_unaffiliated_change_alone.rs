use crate::common::command::{DEVICE, compare_device, configs_dir, saved_config, write_configs};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_unaffiliated_change_alone(
    configs_dir: TempDir,
    saved_config: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let changed = saved_config.replace("hostname edge-rtr1\n", "hostname edge-rtr2\n");
    write_configs(configs_dir.path(), DEVICE, &saved_config, &changed);

    let expected_output = "-hostname edge-rtr1\n+hostname edge-rtr2\n".to_string();
    let actual_output = compare_device(configs_dir.path(), DEVICE, &["-n"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
