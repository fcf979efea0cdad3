//! Color support detection

use std::env;
use std::io::IsTerminal;

/// Whether styled output should go to stdout
pub fn should_use_colors() -> bool {
    colors_enabled(
        |name| env::var(name).ok(),
        std::io::stdout().is_terminal(),
    )
}

/// Decide on colors from the NO_COLOR / CLICOLOR conventions.
///
/// NO_COLOR wins over everything, CLICOLOR_FORCE (non-zero) enables colors
/// when piped, CLICOLOR=0 disables them, otherwise follow the TTY.
fn colors_enabled(var: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    if var("NO_COLOR").is_some() {
        return false;
    }

    if var("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
        return true;
    }

    if var("CLICOLOR").is_some_and(|v| v == "0") {
        return false;
    }

    is_tty
}
