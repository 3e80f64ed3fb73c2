//! The supported-platform table.
//!
//! An exhaustive enumeration of every build platform crossdock can prepare a
//! cross-compilation environment for. The mapping is pure and never changes
//! at runtime; each supported platform resolves to exactly one target.

use crate::error::{Result, TargetError};
use crate::platform::BuildPlatform;
use crate::target::Target;

fn target(arch: &str, sub: Option<&str>, abi: &str) -> Target {
    Target {
        arch: arch.into(),
        sub: sub.map(Into::into),
        vendor: "unknown".into(),
        sys: "linux".into(),
        abi: Some(abi.into()),
    }
}

/// Resolve a build platform to its canonical cross-compilation target.
///
/// Fails with [`TargetError::UnsupportedPlatform`] for any platform outside
/// the table.
pub fn resolve(platform: &BuildPlatform) -> Result<Target> {
    let target = match (platform.os(), platform.arch(), platform.variant()) {
        ("linux", "386", None) => target("i686", None, "gnu"),
        ("linux", "amd64", None) => target("x86_64", None, "gnu"),
        ("linux", "arm64", None) => target("aarch64", None, "gnu"),
        // Bare "arm" with no variant deliberately gets the 64-bit target;
        // only the v6/v7 variants select 32-bit ARM.
        ("linux", "arm", None) => target("aarch64", None, "gnu"),
        ("linux", "arm", Some("v6")) => target("arm", None, "gnueabi"),
        ("linux", "arm", Some("v7")) => target("arm", Some("v7"), "gnueabi"),
        ("linux", "ppc64le", None) => target("powerpc64le", None, "gnu"),
        ("linux", "mips64le", None) => target("mips64el", None, "gnuabi64"),
        ("linux", "s390x", None) => target("s390x", None, "gnu"),
        _ => {
            return Err(TargetError::UnsupportedPlatform {
                platform: platform.to_string(),
            })
        }
    };
    Ok(target)
}

/// Every platform the table supports, in table order.
pub fn supported_platforms() -> Vec<BuildPlatform> {
    const ROWS: &[(&str, &str, Option<&str>)] = &[
        ("linux", "386", None),
        ("linux", "amd64", None),
        ("linux", "arm64", None),
        ("linux", "arm", None),
        ("linux", "arm", Some("v6")),
        ("linux", "arm", Some("v7")),
        ("linux", "ppc64le", None),
        ("linux", "mips64le", None),
        ("linux", "s390x", None),
    ];
    ROWS.iter()
        .map(|(os, arch, variant)| BuildPlatform::new(*os, *arch, *variant))
        .collect()
}
