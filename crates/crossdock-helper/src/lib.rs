//! Helper-script generation for crossdock.
//!
//! Renders the shell helper a container build sources to prepare a
//! cross-compilation environment for a resolved [`Target`]: registering the
//! foreign dpkg architecture, installing the cross toolchain, adding the
//! rustup target, emitting the cargo configuration, and extracting the built
//! binary.
//!
//! [`Target`]: crossdock_targets::Target

pub mod script;

pub use script::generate;
