//! Render specs
//!
//! Verify the JSON request body printed for job files.

use crate::prelude::*;

#[test]
fn render_pipeline_job() {
    let temp = Project::empty();
    let job = temp.file("jobs/friends.toml", PIPELINE_JOB);

    let run = temp
        .mapred()
        .args(&["render", job.to_str().unwrap()])
        .passes();

    assert_eq!(
        run.stdout_json(),
        json!({
            "inputs": "people",
            "query": [
                {"link": {"bucket": "people", "tag": "friend", "keep": false}},
                {"map": {
                    "language": "erlang",
                    "keep": false,
                    "module": "riak_kv_mapreduce",
                    "function": "map_object_value"
                }},
                {"reduce": {
                    "language": "javascript",
                    "keep": true,
                    "source": "function(v) { return v; }"
                }}
            ]
        })
    );
}

#[test]
fn render_is_single_line_by_default() {
    let temp = Project::empty();
    let job = temp.file("job.toml", PIPELINE_JOB);

    let run = temp.mapred().args(&["render", "job.toml"]).passes();
    assert_eq!(run.stdout().lines().count(), 1);
    assert!(job.exists());
}

#[test]
fn render_pretty() {
    let temp = Project::empty();
    temp.file("job.toml", PIPELINE_JOB);

    let run = temp
        .mapred()
        .args(&["render", "job.toml", "--pretty"])
        .passes();
    assert!(run.stdout().lines().count() > 1);
    assert_eq!(run.stdout_json()["inputs"], json!("people"));
}

#[test]
fn render_key_inputs() {
    let temp = Project::empty();
    temp.file(
        "job.toml",
        r#"
[[input]]
bucket = "people"
key = "alice"

[[input]]
bucket = "people"
key = "bob"
keydata = "extra"

[[phase]]
type = "map"
function = { bucket = "fns", key = "name" }
"#,
    );

    let run = temp.mapred().args(&["render", "job.toml"]).passes();
    assert_eq!(
        run.stdout_json(),
        json!({
            "inputs": [["people", "alice"], ["people", "bob", "extra"]],
            "query": [
                {"map": {"language": "javascript", "keep": false, "bucket": "fns", "key": "name"}}
            ]
        })
    );
}

#[test]
fn render_from_stdin() {
    cli()
        .args(&["render", "-"])
        .stdin("inputs = \"albums\"\n")
        .passes()
        .stdout_eq("{\"inputs\":\"albums\",\"query\":[]}\n");
}

#[test]
fn render_logs_go_to_stderr() {
    let temp = Project::empty();
    temp.file("job.toml", "inputs = \"people\"\n");

    let run = temp
        .mapred()
        .env("RUST_LOG", "info")
        .args(&["render", "job.toml"])
        .passes()
        .stderr_has("rendering job");
    assert_eq!(run.stdout_json()["inputs"], json!("people"));
}
