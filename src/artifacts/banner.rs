//! Report banner naming the target device
//!
//! The device is named after the right-hand file. When that name embeds a
//! network address, the address is resolved to a hostname with a reverse DNS
//! lookup; a failed lookup keeps the literal address.

use derive_new::new;
use std::io::Write;
use std::net::IpAddr;
use std::path::Path;

pub const SEPARATOR_WIDTH: usize = 60;

const IPV4_REGEX: &str = r"\b(?:\d{1,3}\.){3}\d{1,3}\b";
const IPV6_REGEX: &str = r"[0-9A-Fa-f]{0,4}(?::[0-9A-Fa-f]{0,4}){2,7}";

/// First IPv4 or IPv6 address embedded in `name`
pub fn find_address(name: &str) -> anyhow::Result<Option<IpAddr>> {
    for pattern in [IPV4_REGEX, IPV6_REGEX] {
        let address = regex::Regex::new(pattern)?
            .find_iter(name)
            .find_map(|candidate| candidate.as_str().parse::<IpAddr>().ok());

        if address.is_some() {
            return Ok(address);
        }
    }

    Ok(None)
}

fn reverse_lookup(address: &IpAddr) -> Option<String> {
    match dns_lookup::lookup_addr(address) {
        Ok(hostname) if hostname != address.to_string() => Some(hostname),
        Ok(_) => None,
        Err(error) => {
            tracing::warn!(%address, %error, "reverse lookup failed");
            None
        }
    }
}

/// Display name of the device a configuration file belongs to
pub fn device_name(target: &Path, resolve: bool) -> anyhow::Result<String> {
    let name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.display().to_string());

    if !resolve {
        return Ok(name);
    }

    let Some(address) = find_address(&name)? else {
        return Ok(name);
    };

    Ok(reverse_lookup(&address).unwrap_or_else(|| address.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Banner {
    device: String,
}

impl Banner {
    pub fn title(&self) -> String {
        format!("Configuration differences for {}", self.device)
    }

    pub fn separator(&self) -> String {
        "=".repeat(SEPARATOR_WIDTH)
    }

    pub fn write(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "{}", self.title())?;
        writeln!(writer, "{}", self.separator())
    }
}
