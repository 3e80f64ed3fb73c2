//! Canonical cross-compilation targets and toolchain parameter derivation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TargetError};

/// A canonical cross-compilation target: the five components of a target
/// triple.
///
/// Every derivation below is a pure function of these fields. The dpkg and
/// compiler-prefix tables accept both the canonical architecture names and
/// their common aliases so a descriptor built from either spelling derives
/// the same parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Target {
    /// Canonical CPU architecture name (e.g., "aarch64").
    pub arch: String,
    /// Sub-architecture suffix appended directly after `arch` (e.g., "v7").
    pub sub: Option<String>,
    /// Triple vendor field; "unknown" for every supported target.
    pub vendor: String,
    /// Target operating system (e.g., "linux").
    pub sys: String,
    /// ABI identifier (e.g., "gnu", "gnueabi"); present for every entry in
    /// the supported table.
    pub abi: Option<String>,
}

impl Target {
    /// The full target triple: `{arch}{sub}-{vendor}-{sys}-{abi}`.
    ///
    /// The sub-architecture is appended with no separator; the ABI segment is
    /// omitted entirely when absent.
    pub fn triple(&self) -> String {
        let sub = self.sub.as_deref().unwrap_or("");
        let mut triple = format!("{}{}-{}-{}", self.arch, sub, self.vendor, self.sys);
        if let Some(abi) = &self.abi {
            triple.push('-');
            triple.push_str(abi);
        }
        triple
    }

    /// The architecture name a Debian-style package manager uses to register
    /// foreign-architecture packages.
    pub fn dpkg_arch(&self) -> Result<&'static str> {
        match self.arch.as_str() {
            "arm64" | "arm" | "aarch64" => Ok("arm64"),
            "amd64" | "x86_64" => Ok("amd64"),
            "i386" | "i686" => Ok("i386"),
            "ppc64le" | "powerpc64le" => Ok("ppc64el"),
            "s390x" => Ok("s390x"),
            "mips64le" | "mips64el" => Ok("mips64el"),
            _ => Err(self.unmapped_arch()),
        }
    }

    /// The cross-compiler executable prefix (e.g., `aarch64-linux-gnu` for
    /// `aarch64-linux-gnu-gcc`).
    pub fn cc_prefix(&self) -> Result<&'static str> {
        match self.arch.as_str() {
            "x86_64" | "amd64" | "i386" | "i686" => Ok("x86_64-linux-gnu"),
            "arm64" | "arm" | "aarch64" => Ok("aarch64-linux-gnu"),
            "ppc64le" | "powerpc64le" => Ok("powerpc64le-linux-gnu"),
            "s390x" => Ok("s390x-linux-gnu"),
            "mips64le" | "mips64el" => Ok("mips64el-linux-gnuabi64"),
            _ => Err(self.unmapped_arch()),
        }
    }

    /// The triple rendered as an environment-variable name prefix: every `-`
    /// replaced with `_`, upper-cased.
    pub fn env_prefix(&self) -> String {
        self.triple().replace('-', "_").to_uppercase()
    }

    fn unmapped_arch(&self) -> TargetError {
        TargetError::UnmappedArch {
            arch: self.arch.clone(),
        }
    }
}
