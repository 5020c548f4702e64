//! Host platform families the Java launch knows how to address

use crate::errors::{Error, Result};

/// Platform family, deciding path and classpath separators and the
/// executable suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformFamily {
    Linux,
    Windows,
}

impl PlatformFamily {
    /// Detect the family of the running host.
    ///
    /// Hosts other than Linux and Windows are rejected instead of guessed.
    pub fn current() -> Result<Self> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an operating system name (as reported by `std::env::consts::OS`)
    /// to a supported family
    pub fn from_os_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "linux" => Ok(Self::Linux),
            "windows" => Ok(Self::Windows),
            other => Err(Error::unsupported(
                other,
                "only Linux and Windows hosts are supported",
            )),
        }
    }

    /// Separator between classpath entries
    pub const fn classpath_separator(&self) -> char {
        match self {
            Self::Linux => ':',
            Self::Windows => ';',
        }
    }

    /// Separator between path segments
    pub const fn path_separator(&self) -> char {
        match self {
            Self::Linux => '/',
            Self::Windows => '\\',
        }
    }

    /// Suffix appended to executable file names
    pub const fn executable_suffix(&self) -> &'static str {
        match self {
            Self::Linux => "",
            Self::Windows => ".exe",
        }
    }

    /// Join path segments onto `base` using this family's separator.
    ///
    /// Works on strings rather than `Path` so the result does not depend on
    /// the host the code happens to run on.
    pub fn join_path(&self, base: &str, segments: &[&str]) -> String {
        let separator = self.path_separator();
        let mut joined = base.trim_end_matches(separator).to_string();
        for segment in segments {
            joined.push(separator);
            joined.push_str(segment);
        }
        joined
    }
}
