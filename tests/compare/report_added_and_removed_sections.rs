use crate::common::command::{DEVICE, compare_device, configs_dir, saved_config, write_configs};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_added_section(
    configs_dir: TempDir,
    saved_config: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let changed = saved_config.replace(
        "ip access-list standard MGMT\n",
        "interface GigabitEthernet0/3\n no shutdown\n!\nip access-list standard MGMT\n",
    );
    write_configs(configs_dir.path(), DEVICE, &saved_config, &changed);

    let expected_output = "+interface GigabitEthernet0/3\n+ no shutdown\n".to_string();
    let actual_output = compare_device(configs_dir.path(), DEVICE, &["-n"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn report_removed_section(
    configs_dir: TempDir,
    saved_config: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let changed = saved_config.replace(
        "interface GigabitEthernet0/2\n description spare\n shutdown\n!\n",
        "",
    );
    write_configs(configs_dir.path(), DEVICE, &saved_config, &changed);

    let expected_output =
        "-interface GigabitEthernet0/2\n- description spare\n- shutdown\n".to_string();
    let actual_output = compare_device(configs_dir.path(), DEVICE, &["-n"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
