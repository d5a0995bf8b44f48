use crate::common::command::{DEVICE, compare_device, configs_dir, saved_config, write_configs};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_separate_hunks_for_distant_changes(
    configs_dir: TempDir,
    saved_config: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let changed = saved_config
        .replace(" description uplink\n", " description core uplink\n")
        .replace(" permit 10.1.2.0 0.0.0.255\n", " permit 10.1.3.0 0.0.0.255\n");
    write_configs(configs_dir.path(), DEVICE, &saved_config, &changed);

    let expected_output = [
        " interface GigabitEthernet0/1",
        "- description uplink",
        "+ description core uplink",
        "  ip address 192.0.2.1 255.255.255.252",
        "  no shutdown",
        "",
        " ip access-list standard MGMT",
        "  permit 10.1.1.0 0.0.0.255",
        "- permit 10.1.2.0 0.0.0.255",
        "+ permit 10.1.3.0 0.0.0.255",
        "",
    ]
    .join("\n");
    let actual_output = compare_device(configs_dir.path(), DEVICE, &["-n"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
