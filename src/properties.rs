//! # Host properties
//!
//! Read-only facts about the machine and the toolchain the binary was built with.

use log::{debug, warn};

/// Printed in place of a property the host cannot answer.
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    RuntimeVersion,
    RuntimeVendor,
    OsName,
    OsVersion,
    UserName,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::RuntimeVersion,
        Property::RuntimeVendor,
        Property::OsName,
        Property::OsVersion,
        Property::UserName,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Property::RuntimeVersion => "Java Version",
            Property::RuntimeVendor => "Java Vendor",
            Property::OsName => "OS Name",
            Property::OsVersion => "OS Version",
            Property::UserName => "User Name",
        }
    }
}

pub trait PropertySource {
    fn property(&self, property: Property) -> Option<String>;
}

/// Queries the running host on every call.
#[derive(Debug, Default)]
pub struct HostProperties;

impl PropertySource for HostProperties {
    fn property(&self, property: Property) -> Option<String> {
        match property {
            Property::RuntimeVersion => option_env!("GREETER_RUSTC_VERSION").map(str::to_string),
            Property::RuntimeVendor => option_env!("GREETER_TARGET_VENDOR").map(str::to_string),
            Property::OsName => sys_info::os_type().ok(),
            Property::OsVersion => sys_info::os_release().ok(),
            Property::UserName => whoami::fallible::username().ok(),
        }
    }
}

/// Looks up every property in display order.
///
/// Missing or empty values are reported as [`UNKNOWN`].
pub fn report(source: &impl PropertySource) -> Vec<(&'static str, String)> {
    Property::ALL
        .iter()
        .map(|property| {
            let value = match source.property(*property) {
                Some(value) if !value.trim().is_empty() => {
                    debug!("Property {:?}: {}", property, value);
                    value
                }
                _ => {
                    warn!("Property {:?} is not available on this host.", property);
                    UNKNOWN.to_string()
                }
            };
            (property.label(), value)
        })
        .collect()
}
