//! Shell helper-script rendering.

use crossdock_targets::{Result, Target};

/// Render the helper script for a resolved target.
///
/// The script exposes five functions behind a positional-argument dispatcher:
/// `dpkg_add_architecture`, `install_apt_deps`, `add_target`, `print_config`,
/// and `extract_binary` (which takes the build's base directory as a second
/// argument). Any other first argument exits non-zero.
///
/// All toolchain parameters are derived before any text is produced, so a
/// derivation failure yields an error and no partial script. Output is
/// deterministic for a given target.
pub fn generate(target: &Target) -> Result<String> {
    let triple = target.triple();
    let dpkg_arch = target.dpkg_arch()?;
    let cc = target.cc_prefix()?;
    let env_prefix = target.env_prefix();

    let script = format!(
        r#"
function dpkg_add_architecture() {{
    dpkg --add-architecture {dpkg_arch}
}}

function install_apt_deps() {{
    apt-get -qq update
    apt-get -qq install --no-install-recommends \
        crossbuild-essential-{dpkg_arch} libssl-dev:{dpkg_arch}
}}

function add_target() {{
    rustup target add {triple}
}}

function print_config() {{
cat << 'EOF'
[build]
target = "{triple}"
[env]
{env_prefix}_OPENSSL_LIB_DIR = "/usr/lib/{cc}"
{env_prefix}_OPENSSL_INCLUDE_DIR = "/usr/include/{cc}"
TARGET_CC = "{cc}-gcc"
TARGET_CXX = "{cc}-g++"
[target.{triple}]
linker = "{cc}-gcc"
EOF
}}

function extract_binary() {{
    cat "${{1}}/{triple}/release/main"
}}

case "${{1}}" in
    "dpkg_add_architecture" ) dpkg_add_architecture ;;
    "install_apt_deps" ) install_apt_deps ;;
    "add_target" ) add_target ;;
    "print_config" ) print_config ;;
    "extract_binary" ) extract_binary "${{2}}" ;;
    * ) exit 1 ;;
esac
"#
    );
    Ok(script.trim().to_string())
}
