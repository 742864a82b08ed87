//! Check specs
//!
//! Verify job file validation output.

use crate::prelude::*;

#[test]
fn check_valid_job() {
    let temp = Project::empty();
    temp.file("job.toml", PIPELINE_JOB);

    temp.mapred()
        .args(&["check", "job.toml"])
        .passes()
        .stdout_eq("ok: 3 phase(s) (link -> map -> reduce), inputs: scalar\n");
}

#[test]
fn check_empty_job() {
    let temp = Project::empty();
    temp.file("job.toml", "");

    temp.mapred()
        .args(&["check", "job.toml"])
        .passes()
        .stdout_eq("ok: 0 phase(s), inputs: none\n");
}

#[test]
fn check_json_output() {
    let temp = Project::empty();
    temp.file(
        "job.toml",
        r#"
[[input]]
bucket = "people"
key = "alice"

[[phase]]
type = "map"
function = "function(v) { return [v]; }"
"#,
    );

    let run = temp
        .mapred()
        .args(&["check", "job.toml", "--output", "json"])
        .passes();
    assert_eq!(
        run.stdout_json(),
        json!({"inputs": "keys", "keys": 1, "phases": ["map"]})
    );
}
