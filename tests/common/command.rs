use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const DEVICE: &str = "edge-rtr1";

#[fixture]
pub fn configs_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn saved_config() -> String {
    r#"!
! Last configuration change at 10:02:11 UTC
!
hostname edge-rtr1
!
interface GigabitEthernet0/1
 description uplink
 ip address 192.0.2.1 255.255.255.252
 no shutdown
!
interface GigabitEthernet0/2
 description spare
 shutdown
!
ip access-list standard MGMT
 permit 10.1.1.0 0.0.0.255
 permit 10.1.2.0 0.0.0.255
!
ntp server 10.0.0.1
ntp server 10.0.0.2
!
end
"#
    .to_string()
}

/// Write both sides as `old/<device>` and `new/<device>` under `dir`
pub fn write_configs(dir: &Path, device: &str, old: &str, new: &str) {
    write_file(FileSpec::new(
        dir.join("old").join(device),
        old.to_string(),
    ));
    write_file(FileSpec::new(
        dir.join("new").join(device),
        new.to_string(),
    ));
}

pub fn run_cfgdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("cfgdiff").expect("Failed to find cfgdiff binary");
    cmd.env("CFGDIFF_IGNORE_FILE", dir.join("ignore"));
    cmd.env_remove("CFGDIFF_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Compare `old/<device>` against `new/<device>` without touching DNS
pub fn compare_device(dir: &Path, device: &str, extra: &[&str]) -> Command {
    let old = format!("old/{device}");
    let new = format!("new/{device}");
    let mut args = vec!["--no-resolve", old.as_str(), new.as_str()];
    args.extend_from_slice(extra);

    run_cfgdiff_command(dir, &args)
}

pub fn banner(device: &str) -> String {
    format!("Configuration differences for {device}\n{}\n", "=".repeat(60))
}
