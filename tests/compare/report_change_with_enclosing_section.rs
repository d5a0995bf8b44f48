use crate::common::command::{DEVICE, banner, compare_device, configs_dir, saved_config, write_configs};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_change_with_enclosing_section(
    configs_dir: TempDir,
    saved_config: String,
) -> Result<(), Box<dyn std::error::Error>> {
    // rewrite the uplink description only
    let changed = saved_config.replace(" description uplink\n", " description uplink to isp\n");
    write_configs(configs_dir.path(), DEVICE, &saved_config, &changed);

    let expected_output = format!(
        "{} interface GigabitEthernet0/1\n- description uplink\n+ description uplink to isp\n  ip address 192.0.2.1 255.255.255.252\n  no shutdown\n",
        banner(DEVICE)
    );
    let actual_output = compare_device(configs_dir.path(), DEVICE, &[])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
