//! Error types for platform resolution and parameter derivation.

/// Errors that can occur while resolving a build platform or deriving
/// toolchain parameters from a target.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// The requested (os, arch, variant) combination has no entry in the
    /// platform table.
    #[error("unsupported platform '{platform}'")]
    UnsupportedPlatform {
        /// Normalized `os/arch[/variant]` rendering of the request.
        platform: String,
    },

    /// A target's architecture has no entry in one of the derivation tables.
    /// This indicates an inconsistency between the platform table and the
    /// derivation tables, not bad user input.
    #[error("unexpected architecture '{arch}'")]
    UnmappedArch {
        /// The architecture that failed to map.
        arch: String,
    },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
