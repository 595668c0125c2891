//! End-to-end behaviour of the derived record and union contracts.

use model_record::{
    AdditionalProperties, Field, ModelError, ModelRecord, ModelUnion, WireValue, wire_literal,
};
use serde_json::{Value, json};

wire_literal! {
    pub struct TextKind = "text";
}

wire_literal! {
    pub struct ImageKind = "image";
}

wire_literal! {
    pub struct SolidKind = "solid";
}

wire_literal! {
    pub struct GradientKind = "gradient";
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct SolidFill {
    pub kind: SolidKind,
    pub color: String,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct GradientFill {
    pub kind: GradientKind,
    pub stops: Vec<String>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, ModelUnion)]
#[model(discriminator = "kind")]
pub enum Fill {
    #[model(tag = "solid")]
    Solid(SolidFill),
    #[model(tag = "gradient")]
    Gradient(GradientFill),
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
#[model(name = "ShapeRecord")]
pub struct Shape {
    pub label: String,
    pub points: Vec<Point>,
    pub origin: Point,
    #[model(rename = "type")]
    pub kind: String,
    pub note: Field<Option<String>>,
    pub weight: Field<f64>,
    pub fill: Field<Fill>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct TextPart {
    #[model(rename = "type")]
    pub kind: TextKind,
    pub text: String,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct ImagePart {
    #[model(rename = "type")]
    pub kind: ImageKind,
    pub url: String,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, ModelUnion)]
pub enum Part {
    Text(TextPart),
    Image(ImagePart),
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct Post {
    pub parts: Vec<Part>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

fn point(x: f64, y: f64) -> Point {
    Point {
        x,
        y,
        additional_properties: AdditionalProperties::new(),
    }
}

fn full_shape() -> Shape {
    let mut extra = AdditionalProperties::new();
    extra.insert("layer", json!(3));
    extra.insert("meta", json!({"author": "kim", "tags": ["a", "b"]}));

    Shape {
        label: "triangle".to_string(),
        points: vec![point(0.0, 0.0), point(1.5, 0.0), point(0.75, 1.25)],
        origin: point(0.0, 0.0),
        kind: "polygon".to_string(),
        note: Field::Set(None),
        weight: Field::Set(2.5),
        fill: Field::Set(Fill::Gradient(GradientFill {
            kind: GradientKind,
            stops: vec!["#fff".to_string(), "#000".to_string()],
            additional_properties: AdditionalProperties::new(),
        })),
        additional_properties: extra,
    }
}

fn minimal_shape_document() -> Value {
    json!({
        "label": "dot",
        "points": [],
        "origin": {"x": 0, "y": 0},
        "type": "point"
    })
}

#[test]
fn round_trip_preserves_every_field_and_extra() {
    let shape = full_shape();
    let parsed = Shape::from_document(shape.to_document()).unwrap();
    assert_eq!(parsed, shape);
}

#[test]
fn document_round_trip_is_exact_for_minimal_input() {
    let document = minimal_shape_document();
    let shape = Shape::from_value(document.clone()).unwrap();
    assert_eq!(shape.to_value(), document);
}

#[test]
fn unset_optionals_are_omitted() {
    let shape = Shape::from_value(minimal_shape_document()).unwrap();
    assert!(shape.note.is_unset());
    assert!(shape.weight.is_unset());
    assert!(shape.fill.is_unset());

    let out = shape.to_document();
    assert!(!out.contains_key("note"));
    assert!(!out.contains_key("weight"));
    assert!(!out.contains_key("fill"));
}

#[test]
fn explicit_null_is_distinct_from_unset() {
    let mut document = minimal_shape_document();
    document["note"] = Value::Null;

    let shape = Shape::from_value(document).unwrap();
    assert!(shape.note.is_null());
    assert_eq!(shape.to_document()["note"], Value::Null);
}

#[test]
fn declared_fields_win_over_same_named_extras() {
    let mut shape = Shape::from_value(minimal_shape_document()).unwrap();
    shape.set_additional("label", "stale");
    shape.set_additional("type", "stale");

    let out = shape.to_document();
    assert_eq!(out["label"], json!("dot"));
    assert_eq!(out["type"], json!("point"));
}

#[test]
fn output_order_is_extras_then_required_then_optional() {
    let mut document = minimal_shape_document();
    document["weight"] = json!(1.5);
    document["zz_extra"] = json!(true);

    let shape = Shape::from_value(document).unwrap();
    let keys: Vec<_> = shape.to_document().keys().cloned().collect();
    assert_eq!(
        keys,
        vec!["zz_extra", "label", "points", "origin", "type", "weight"]
    );
}

#[test]
fn missing_required_field_names_record_and_path() {
    let mut document = minimal_shape_document();
    document.as_object_mut().unwrap().remove("origin");

    match Shape::from_value(document).unwrap_err() {
        ModelError::MissingField { record, path } => {
            assert_eq!(record, "ShapeRecord");
            assert_eq!(path.to_string(), "$.origin");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn nested_missing_field_is_rooted_at_the_outer_record() {
    let mut document = minimal_shape_document();
    document["points"] = json!([{"x": 1, "y": 2}, {"x": 3}]);

    match Shape::from_value(document).unwrap_err() {
        ModelError::MissingField { record, path } => {
            assert_eq!(record, "Point");
            assert_eq!(path.to_string(), "$.points[1].y");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn scalar_in_place_of_record_is_a_type_mismatch() {
    let mut document = minimal_shape_document();
    document["origin"] = json!(5);

    let err = Shape::from_value(document).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(
        err.to_string(),
        "type mismatch at `$.origin`: expected object, found number"
    );
}

#[test]
fn non_object_document_is_rejected() {
    let err = Shape::from_value(json!(["not", "an", "object"])).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn unknown_keys_are_kept_and_readable_by_key() {
    let mut document = minimal_shape_document();
    document["extra_flag"] = json!(true);
    document["another"] = json!({"nested": [1, 2]});

    let mut shape = Shape::from_value(document).unwrap();
    assert_eq!(shape.additional_keys(), vec!["extra_flag", "another"]);
    assert_eq!(shape["extra_flag"], json!(true));
    assert!(shape.contains_additional("another"));

    assert_eq!(shape.remove_additional("another"), Some(json!({"nested": [1, 2]})));
    assert!(!shape.contains_additional("another"));
    assert_eq!(shape.get_additional("another"), None);
}

#[test]
fn integral_numbers_survive_document_round_trip() {
    let mut document = minimal_shape_document();
    document["weight"] = json!(2);

    let shape = Shape::from_value(document.clone()).unwrap();
    assert_eq!(shape.weight, Field::Set(2.0));
    assert_eq!(shape.to_value(), document);
}

#[test]
fn trial_union_resolves_each_part() {
    let document = json!({
        "parts": [
            {"type": "text", "text": "hello"},
            {"type": "image", "url": "https://example.com/a.png", "alt": "a"}
        ]
    });

    let post = Post::from_value(document.clone()).unwrap();
    assert!(matches!(post.parts[0], Part::Text(_)));
    match &post.parts[1] {
        Part::Image(image) => assert_eq!(image["alt"], json!("a")),
        other => panic!("unexpected part: {other:?}"),
    }
    assert_eq!(post.parts[1].variant_name(), "Image");
    assert_eq!(post.to_value(), document);
}

#[test]
fn trial_union_failure_reports_every_attempt() {
    let document = json!({"parts": [{"type": "video", "url": "x"}]});

    match Post::from_value(document).unwrap_err() {
        ModelError::UnresolvedVariant {
            union,
            path,
            attempts,
            ..
        } => {
            assert_eq!(union, "Part");
            assert_eq!(path.to_string(), "$.parts[0]");
            let names: Vec<_> = attempts.iter().map(|a| a.variant).collect();
            assert_eq!(names, vec!["Text", "Image"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn discriminated_union_dispatches_on_tag() {
    let mut document = minimal_shape_document();
    document["fill"] = json!({"kind": "solid", "color": "red"});

    let shape = Shape::from_value(document).unwrap();
    match shape.fill.as_option() {
        Some(Fill::Solid(solid)) => assert_eq!(solid.color, "red"),
        other => panic!("unexpected fill: {other:?}"),
    }
}

#[test]
fn discriminated_union_unknown_tag_is_unresolved() {
    let mut document = minimal_shape_document();
    document["fill"] = json!({"kind": "pattern"});

    let err = Shape::from_value(document).unwrap_err();
    assert!(err.is_unresolved_variant());
    assert_eq!(err.path().unwrap().to_string(), "$.fill");
}

#[test]
fn union_from_impls_wrap_alternatives() {
    let fill: Fill = SolidFill {
        kind: SolidKind,
        color: "blue".to_string(),
        additional_properties: AdditionalProperties::new(),
    }
    .into();
    assert_eq!(fill.variant_name(), "solid");
    assert_eq!(fill.to_wire(), json!({"kind": "solid", "color": "blue"}));
}

#[test]
fn serde_impls_follow_the_document_contract() {
    let shape = full_shape();

    let via_serde = serde_json::to_value(&shape).unwrap();
    assert_eq!(via_serde, shape.to_value());

    let back: Shape = serde_json::from_value(via_serde).unwrap();
    assert_eq!(back, shape);

    let err = serde_json::from_value::<Shape>(json!({"label": "x"})).unwrap_err();
    assert!(err.to_string().contains("missing required field"));
}

#[test]
fn json_text_helpers_round_trip() {
    let text = r#"{"x":1,"y":2,"z":3}"#;
    let parsed = Point::from_json_str(text).unwrap();
    assert_eq!(parsed["z"], json!(3));
    assert_eq!(Point::from_json_str(&parsed.to_json_string()).unwrap(), parsed);

    assert!(matches!(
        Point::from_json_str("{not json").unwrap_err(),
        ModelError::Json(_)
    ));
}
