use community_connect::ai::ResponseSchema;
use serde_json::json;

fn search_schema() -> ResponseSchema {
    ResponseSchema::object([
        ("answer", ResponseSchema::string()),
        (
            "relevantThreadIds",
            ResponseSchema::array_of(ResponseSchema::string()),
        ),
        (
            "relevantVendorIds",
            ResponseSchema::array_of(ResponseSchema::string()),
        ),
    ])
}

#[test]
fn test_schema_serializes_with_uppercase_type_names() {
    let value = serde_json::to_value(search_schema()).unwrap();

    assert_eq!(value["type"], "OBJECT");
    assert_eq!(value["properties"]["answer"]["type"], "STRING");
    assert_eq!(value["properties"]["relevantThreadIds"]["type"], "ARRAY");
    assert_eq!(
        value["properties"]["relevantThreadIds"]["items"]["type"],
        "STRING"
    );
}

#[test]
fn test_schema_marks_every_property_required() {
    let value = serde_json::to_value(search_schema()).unwrap();
    let required = value["required"].as_array().unwrap();

    assert_eq!(required.len(), 3);
    for field in ["answer", "relevantThreadIds", "relevantVendorIds"] {
        assert!(required.iter().any(|r| r == field), "{field} not required");
    }
}

#[test]
fn test_validate_accepts_conforming_reply() {
    let reply = json!({
        "answer": "Reliable Plumbers Co. is the best rated plumber.",
        "relevantThreadIds": ["1", "2"],
        "relevantVendorIds": []
    });
    assert!(search_schema().validate(&reply).is_ok());
}

#[test]
fn test_validate_tolerates_extra_fields() {
    let reply = json!({
        "answer": "ok",
        "relevantThreadIds": [],
        "relevantVendorIds": [],
        "confidence": 0.9
    });
    assert!(search_schema().validate(&reply).is_ok());
}

#[test]
fn test_validate_rejects_missing_required_field() {
    let reply = json!({ "answer": "ok", "relevantThreadIds": [] });
    let err = search_schema().validate(&reply).unwrap_err();
    assert!(err.contains("relevantVendorIds"));
}

#[test]
fn test_validate_rejects_type_mismatches() {
    let wrong_field_type = json!({
        "answer": "ok",
        "relevantThreadIds": "1",
        "relevantVendorIds": []
    });
    assert!(search_schema().validate(&wrong_field_type).is_err());

    let wrong_element_type = json!({
        "answer": "ok",
        "relevantThreadIds": [1, 2],
        "relevantVendorIds": []
    });
    assert!(search_schema().validate(&wrong_element_type).is_err());

    let not_an_object = json!(["1", "2"]);
    assert!(search_schema().validate(&not_an_object).is_err());
}

#[test]
fn test_validate_reports_the_offending_field() {
    let reply = json!({
        "answer": 42,
        "relevantThreadIds": [],
        "relevantVendorIds": []
    });
    let err = search_schema().validate(&reply).unwrap_err();
    assert!(err.contains("answer"));
}
