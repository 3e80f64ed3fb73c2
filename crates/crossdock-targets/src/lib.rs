//! Build-platform resolution and target modeling for crossdock.
//!
//! Maps a build platform as named by the calling build system (the
//! `os/arch[/variant]` components of a Docker `TARGETPLATFORM` value) onto a
//! canonical cross-compilation [`Target`], and derives the toolchain
//! parameters (target triple, dpkg architecture, cross-compiler prefix) a
//! cross build needs from it.

pub mod error;
pub mod platform;
pub mod resolve;
pub mod target;

pub use error::{Result, TargetError};
pub use platform::BuildPlatform;
pub use resolve::{resolve, supported_platforms};
pub use target::Target;
