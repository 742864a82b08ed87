//! Help specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("render")
        .stdout_has("check");
}

#[test]
fn no_command_fails() {
    cli().args(&[]).fails().stderr_has("Usage");
}
