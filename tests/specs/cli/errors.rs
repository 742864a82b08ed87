//! Error specs
//!
//! Invalid job files exit non-zero with a message on stderr.

use crate::prelude::*;

#[test]
fn missing_file() {
    let temp = Project::empty();
    temp.mapred()
        .args(&["render", "nope.toml"])
        .fails()
        .stderr_has("nope.toml");
}

#[test]
fn unknown_phase_type() {
    let temp = Project::empty();
    temp.file("job.toml", "[[phase]]\ntype = \"foo\"\nfunction = \"f\"\n");

    temp.mapred()
        .args(&["render", "job.toml"])
        .fails()
        .stderr_has("phase[0]: invalid phase type: \"foo\"");
}

#[test]
fn walk_spec_in_map_phase() {
    let temp = Project::empty();
    temp.file(
        "job.toml",
        "[[phase]]\ntype = \"map\"\nfunction = \"f\"\nbucket = \"people\"\n",
    );

    temp.mapred()
        .args(&["check", "job.toml"])
        .fails()
        .stderr_has("bucket/tag are only valid in link phases");
}

#[test]
fn bad_module_function_pair() {
    let temp = Project::empty();
    temp.file(
        "job.toml",
        "[[phase]]\ntype = \"reduce\"\nfunction = [\"a\", \"b\", \"c\"]\n",
    );

    let run = temp.mapred().args(&["render", "job.toml"]).fails();
    assert!(run.stdout().is_empty());
    assert!(run
        .stderr()
        .contains("module/function reference must have exactly 2 elements, got 3"));
}

#[test]
fn toml_syntax_error() {
    let temp = Project::empty();
    temp.file("job.toml", "inputs = \n");

    temp.mapred()
        .args(&["check", "job.toml"])
        .fails()
        .stderr_has("TOML syntax error");
}
