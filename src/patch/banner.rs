//! Literal patch fragments.
//!
//! The patch is a byte-exact substring substitution; nothing here (or
//! anywhere else) parses the target JavaScript. Both fragments are
//! assembled from the one banner literal so an upstream banner change is
//! a single-constant update.

use std::sync::LazyLock;

/// Environment variable the patched banner code checks at runtime.
///
/// Doubles as the guard marker: the name appears nowhere in an unpatched
/// file, so finding it means the file was already patched.
pub const GUARD_VAR: &str = "CLUSTERIO_SUPPRESS_DEV_WARNING";

/// The development-branch warning banner as shipped in the Clusterio
/// bundled entry points.
pub const ASCII_BANNER: &str = "+==========================================================+\n\
                                I WARNING:  This is the development branch for the 2.0     I\n\
                                I           version of clusterio.  Expect things to break. I\n\
                                +==========================================================+";

/// Unpatched form: the bare `console.warn` call, indentation and trailing
/// newline included. Must match the installed file verbatim.
pub static ORIGINAL_FRAGMENT: LazyLock<String> =
    LazyLock::new(|| format!("    console.warn(`\n{ASCII_BANNER}\n`);\n"));

/// Patched form: the same call wrapped in a check on [`GUARD_VAR`].
pub static WRAPPED_FRAGMENT: LazyLock<String> = LazyLock::new(|| {
    format!("    if (!process.env.{GUARD_VAR}) {{\n        console.warn(`\n{ASCII_BANNER}\n`);\n    }}\n")
});
