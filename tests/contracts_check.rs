mod common;

use common::{run_json, run_json_failure, run_json_stdin};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn check_output_matches_contract() {
    for age in ["15", "25", "130"] {
        let out = run_json(&["check", "--name", "Alice", "--age", age]);
        validate("outcome.schema.json", &out);
    }
}

#[test]
fn demo_output_matches_contract() {
    let out = run_json(&["demo", "--name", "Dana", "--age", "-7"]);
    validate("outcome_list.schema.json", &out);
}

#[test]
fn batch_output_matches_contract() {
    let out = run_json_stdin(&["batch"], "[]");
    validate("outcome_list.schema.json", &out);

    let out = run_json_stdin(&["batch"], r#"[{"name":"Eve","age":120}]"#);
    validate("outcome_list.schema.json", &out);
}

#[test]
fn error_output_matches_contract() {
    let err = run_json_failure(&["batch"], "{oops");
    validate("error.schema.json", &err);
}
