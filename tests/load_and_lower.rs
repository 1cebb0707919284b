//! JSON file in, constrained JSON out: the path the CLI takes.
use std::io::Write;

use ident_constrain::model::load_models_from_file;
use ident_constrain::{lower_all, ConstrainerSet, Error, NamingConvention};
use pretty_assertions::assert_eq;
use serde_json::json;

const MODELS: &str = r#"[
    {
        "kind": "object",
        "name": "order line",
        "properties": {
            "1st item": { "type": "string", "required": true },
            "class": { "type": "integer" },
            "value": {},
            "Value": {}
        }
    },
    {
        "kind": "enum",
        "name": "status",
        "values": [
            { "key": "ok", "value": "ok" },
            { "key": "Ok", "value": 200 },
            { "key": "", "value": null }
        ]
    }
]"#;

fn write_models(source: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file
}

#[test]
fn constrains_models_from_file() {
    let file = write_models(MODELS);
    let models = load_models_from_file(file.path()).unwrap();
    let constrained = lower_all(&models, &ConstrainerSet::default());
    let output = serde_json::to_value(&constrained).unwrap();

    assert_eq!(output[0]["kind"], json!("object"));
    assert_eq!(output[0]["name"], json!("OrderLine"));
    let keys: Vec<&String> = output[0]["properties"].as_object().unwrap().keys().collect();
    assert_eq!(keys, ["Number_1stItem", "Reserved_class", "Value", "Reserved_Value"]);
    assert_eq!(output[0]["properties"]["Number_1stItem"]["required"], json!(true));
    assert_eq!(output[0]["properties"]["Number_1stItem"]["schema"]["type"], json!("string"));
    assert_eq!(output[0]["properties"]["Reserved_class"]["original_name"], json!("class"));

    assert_eq!(output[1]["kind"], json!("enum"));
    assert_eq!(output[1]["name"], json!("Status"));
    assert_eq!(
        output[1]["values"],
        json!([
            { "key": "Ok", "original_key": "ok", "value": "\"ok\"", "raw_value": "ok" },
            { "key": "Reserved_Ok", "original_key": "Ok", "value": "200", "raw_value": 200 },
            { "key": "Empty", "original_key": "", "value": "null", "raw_value": null }
        ])
    );
}

#[test]
fn naming_conventions_apply_per_kind() {
    let file = write_models(MODELS);
    let models = load_models_from_file(file.path()).unwrap();
    let constrainers = ConstrainerSet::default()
        .with_property_naming(NamingConvention::Snake)
        .with_enum_naming(NamingConvention::Constant);
    let constrained = lower_all(&models, &constrainers);

    assert_eq!(constrained[0].keys(), ["number_1st_item", "reserved_class", "value", "reserved_value"]);
    assert_eq!(constrained[1].keys(), ["OK", "RESERVED_OK", "EMPTY"]);
}

#[test]
fn missing_file_and_bad_json_are_reported() {
    let error = load_models_from_file(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(error, Error::Read { .. }), "{error:?}");

    let file = write_models(r#"{ "kind": "shape", "name": "x" }"#);
    let error = load_models_from_file(file.path()).unwrap_err();
    let Error::InFile { source, .. } = &error else {
        panic!("expected InFile, got {error:?}");
    };
    assert!(matches!(**source, Error::Json { .. }), "{source:?}");
    assert!(error.to_string().contains("shape"), "{error}");
}
