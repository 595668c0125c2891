use model_record::{AdditionalProperties, Field, ModelRecord};

#[derive(Debug, Clone, PartialEq, ModelRecord)]
pub struct Column {
    pub name: String,
    pub r#type: String,
    #[model(optional)]
    pub hint: Field<String>,
    #[model(extra)]
    pub extra: AdditionalProperties,
}

fn main() {
    let column = Column::from_json_str(r#"{"name":"input","type":"str"}"#).unwrap();
    assert_eq!(column.r#type, "str");
    assert!(column.hint.is_unset());
}
