//! Version and build metadata
//!
//! `build.rs` bumps a counter on every recompile and stamps the time; both
//! arrive here through environment variables read at compile time.

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// 0 when the crate was built without `build.rs` running
pub const BUILD_NUMBER: u64 = decimal_or_zero(option_env!("FURLOGIC_BUILD_NUMBER"));

/// RFC 3339 time of the build, or "unknown"
pub const BUILD_TIMESTAMP: &str = match option_env!("FURLOGIC_BUILD_TIMESTAMP") {
    Some(stamp) => stamp,
    None => "unknown",
};

// `str::parse` is not const, so digits are folded by hand
const fn decimal_or_zero(raw: Option<&str>) -> u64 {
    let digits = match raw {
        Some(raw) => raw.as_bytes(),
        None => return 0,
    };
    if digits.is_empty() {
        return 0;
    }
    let mut value: u64 = 0;
    let mut index = 0;
    while index < digits.len() {
        let digit = digits[index];
        if !digit.is_ascii_digit() {
            return 0;
        }
        value = value * 10 + (digit - b'0') as u64;
        index += 1;
    }
    value
}

/// Metadata reported by the status tool
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
        }
    }

    /// e.g. "furlogic 1.0.1 (build 12, 2026-10-16T08:00:00Z)"
    pub fn label(&self) -> String {
        format!(
            "{} {} (build {}, {})",
            self.name, self.version, self.build_number, self.build_timestamp
        )
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Stdout belongs to the MCP transport, so the banner goes to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("FurLogic - pet nutrition planner");
    eprintln!("{}", info.label());
}
