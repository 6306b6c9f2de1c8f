use swagen_core::normalize::{self, Dialect};
use swagen_core::parse;

const PETSTORE_V2: &str = include_str!("fixtures/petstore-swagger2.json");
const ORDERS_V3: &str = include_str!("fixtures/orders-openapi3.json");
const WIDGETS_V1: &str = include_str!("fixtures/widgets-swagger1.json");

#[test]
fn json_fixtures_parse_and_detect() {
    let cases = [
        (PETSTORE_V2, Dialect::Swagger2),
        (ORDERS_V3, Dialect::OpenApi3),
        (WIDGETS_V1, Dialect::Swagger1),
    ];
    for (input, expected) in cases {
        let value = parse::from_json(input).expect("fixture should parse");
        assert_eq!(normalize::detect_dialect(&value).unwrap(), expected);
    }
}

#[test]
fn yaml_input_is_accepted() {
    let yaml = r#"
openapi: "3.0.1"
info:
  title: Minimal
  version: "1.0"
paths:
  /ping:
    get:
      responses:
        "200":
          description: ok
"#;
    let value = parse::from_yaml(yaml).unwrap();
    assert_eq!(normalize::detect_dialect(&value).unwrap(), Dialect::OpenApi3);
    let doc = normalize::normalize(&value).unwrap();
    assert_eq!(doc.operations.len(), 1);
    assert_eq!(doc.operations[0].method_name, "getPing");
}

#[test]
fn invalid_json_is_an_error() {
    assert!(parse::from_json("{ not json").is_err());
}

#[test]
fn missing_info_block_is_a_schema_error() {
    let value = parse::from_json(r#"{ "swagger": "2.0", "paths": {} }"#).unwrap();
    let err = normalize::normalize(&value).unwrap_err();
    assert!(err.to_string().contains("Swagger 2.0"));
}
