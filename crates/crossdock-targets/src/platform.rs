//! Build-platform identifiers as supplied by the calling build system.

use std::fmt;

/// A build platform as the calling build system names it: operating system,
/// CPU architecture, and an optional sub-architecture variant.
///
/// Structural equality covers all three fields; a platform with no variant is
/// distinct from the same platform with any variant. Usable as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildPlatform {
    os: String,
    arch: String,
    variant: Option<String>,
}

impl BuildPlatform {
    /// Construct a platform identifier. An empty-string variant is
    /// normalized to "no variant" so lookups never see it.
    pub fn new(os: impl Into<String>, arch: impl Into<String>, variant: Option<&str>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
            variant: variant.filter(|v| !v.is_empty()).map(str::to_owned),
        }
    }

    /// Operating system identifier (e.g., "linux").
    pub fn os(&self) -> &str {
        &self.os
    }

    /// CPU architecture identifier (e.g., "amd64", "arm").
    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// Sub-architecture variant (e.g., "v7"), if any.
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }
}

impl fmt::Display for BuildPlatform {
    /// Renders as `os/arch`, with `/variant` appended when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)?;
        if let Some(variant) = &self.variant {
            write!(f, "/{variant}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn display_without_variant() {
        let p = BuildPlatform::new("linux", "amd64", None);
        assert_eq!(p.to_string(), "linux/amd64");
    }

    #[test]
    fn display_with_variant() {
        let p = BuildPlatform::new("linux", "arm", Some("v7"));
        assert_eq!(p.to_string(), "linux/arm/v7");
    }

    #[test]
    fn empty_variant_normalized_to_none() {
        let explicit = BuildPlatform::new("linux", "arm", Some(""));
        let absent = BuildPlatform::new("linux", "arm", None);
        assert_eq!(explicit, absent);
        assert!(explicit.variant().is_none());
    }

    #[test]
    fn variant_distinguishes_platforms() {
        let bare = BuildPlatform::new("linux", "arm", None);
        let v7 = BuildPlatform::new("linux", "arm", Some("v7"));
        assert_ne!(bare, v7);
    }

    #[test]
    fn usable_as_map_key() {
        let mut table = HashMap::new();
        table.insert(BuildPlatform::new("linux", "arm", Some("v6")), "32-bit");
        table.insert(BuildPlatform::new("linux", "arm", None), "64-bit");
        assert_eq!(
            table.get(&BuildPlatform::new("linux", "arm", Some("v6"))),
            Some(&"32-bit")
        );
        assert_eq!(
            table.get(&BuildPlatform::new("linux", "arm", Some(""))),
            Some(&"64-bit")
        );
    }
}
