//! Grove Parser - PMML decoding for the Grove random forest scorer
//!
//! This crate converts PMML documents holding tree ensembles
//! (`MiningModel > Segmentation > Segment > TreeModel`) or a single
//! `TreeModel` into [`grove_core::RandomForest`] values.

mod array;
pub mod dictionary;
pub mod error;
pub mod pmml_parser;
pub mod xml_parser;

// Re-export main parser types
pub use dictionary::{DataDictionary, FieldType};
pub use error::{ParseError, Result};
pub use pmml_parser::PmmlParser;
pub use xml_parser::{Element, XmlParser};
