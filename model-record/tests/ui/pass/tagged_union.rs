use model_record::{AdditionalProperties, ModelRecord, ModelUnion, WireValue, wire_literal};

wire_literal! {
    pub struct StartedTag = "STARTED";
}

wire_literal! {
    pub struct FinishedTag = "FINISHED";
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct Started {
    #[model(rename = "type")]
    pub kind: StartedTag,
    pub timestamp: f64,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct Finished {
    #[model(rename = "type")]
    pub kind: FinishedTag,
    pub status: String,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, ModelUnion)]
#[model(name = "RunEvent", discriminator = "type")]
pub enum Event {
    #[model(tag = "STARTED")]
    Started(Started),
    #[model(tag = "FINISHED")]
    Finished(Finished),
}

#[derive(Debug, Clone, PartialEq, ModelUnion)]
pub enum Content {
    Text(String),
    Parts(Vec<String>),
}

fn main() {
    let event: Event = Started {
        kind: StartedTag,
        timestamp: 1.0,
        additional_properties: AdditionalProperties::new(),
    }
    .into();
    assert_eq!(event.variant_name(), "STARTED");

    let content = Content::from_wire(serde_json::json!(["a", "b"])).unwrap();
    assert_eq!(content.variant_name(), "Parts");
}
