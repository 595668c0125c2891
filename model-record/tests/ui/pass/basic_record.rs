use model_record::{AdditionalProperties, Field, ModelRecord};

#[derive(Debug, Clone, PartialEq, ModelRecord)]
#[model(name = "FunctionCallRecord")]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
    #[model(rename = "callId")]
    pub call_id: Field<Option<String>>,
    #[model(extra)]
    pub additional_properties: AdditionalProperties,
}

fn main() {
    let call = FunctionCall {
        name: "lookup".to_string(),
        arguments: "{}".to_string(),
        call_id: Field::Unset,
        additional_properties: AdditionalProperties::new(),
    };
    let document = call.to_document();
    assert_eq!(document.len(), 2);
    assert_eq!(FunctionCall::NAME, "FunctionCallRecord");
}
