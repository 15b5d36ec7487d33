//! PMML data dictionary
//!
//! Declared field types decide how predicate reference values are typed.

use crate::xml_parser::Element;
use std::collections::HashMap;

/// Reference value type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Numeric,
    Text,
}

impl FieldType {
    /// Map a PMML `dataType` attribute
    pub fn from_data_type(data_type: &str) -> Self {
        match data_type {
            "double" | "float" | "integer" => FieldType::Numeric,
            _ => FieldType::Text,
        }
    }
}

/// Field name to declared type mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataDictionary {
    fields: HashMap<String, FieldType>,
}

impl DataDictionary {
    /// Collect `DataDictionary > DataField` declarations under a `PMML` element
    pub fn from_document(document: &Element) -> Self {
        let mut fields = HashMap::new();
        if let Some(dictionary) = document.child("DataDictionary") {
            for field in dictionary.children_named("DataField") {
                let name = field.attr("name");
                let data_type = field.attr("dataType");
                if let (Some(name), Some(data_type)) = (name, data_type) {
                    fields.insert(name.to_string(), FieldType::from_data_type(data_type));
                }
            }
        }
        Self { fields }
    }

    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.fields.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
