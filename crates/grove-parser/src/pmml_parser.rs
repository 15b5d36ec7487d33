//! PMML parser
//!
//! Decodes PMML tree ensembles into a [`RandomForest`].

use crate::array::split_array;
use crate::dictionary::{DataDictionary, FieldType};
use crate::error::{ParseError, Result};
use crate::xml_parser::{Element, XmlParser};
use grove_core::{
    BooleanOperator, ComparisonOperator, MissingValueStrategy, NoTrueChildStrategy, Node,
    Predicate, RandomForest, SetOperator, Tree, Value,
};
use std::path::Path;

const PREDICATE_ELEMENTS: [&str; 5] = [
    "SimplePredicate",
    "SimpleSetPredicate",
    "CompoundPredicate",
    "True",
    "False",
];

/// PMML parser
pub struct PmmlParser;

impl PmmlParser {
    /// Parse a forest from a PMML string
    pub fn parse(xml_str: &str) -> Result<RandomForest> {
        let document = XmlParser::parse(xml_str)?;
        Self::parse_from_element(&document)
    }

    /// Read and parse a PMML file
    pub fn parse_file(path: impl AsRef<Path>) -> Result<RandomForest> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a forest from an already decoded `PMML` element
    pub fn parse_from_element(document: &Element) -> Result<RandomForest> {
        if document.name != "PMML" {
            return Err(ParseError::MissingElement("PMML".to_string()));
        }

        let decoder = Decoder {
            dictionary: DataDictionary::from_document(document),
        };

        let models = Self::tree_models(document)?;
        let trees = models
            .into_iter()
            .enumerate()
            .map(|(index, (id, model))| decoder.decode_tree(index, id, model))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Decoded {} trees ({} dictionary fields)",
            trees.len(),
            decoder.dictionary.len()
        );

        Ok(RandomForest::new(trees))
    }

    /// Locate every `TreeModel` with the id of its enclosing segment
    fn tree_models(document: &Element) -> Result<Vec<(Option<String>, &Element)>> {
        if let Some(mining_model) = document.child("MiningModel") {
            let segmentation = mining_model.required_child("Segmentation")?;
            return segmentation
                .children_named("Segment")
                .map(|segment| {
                    let model = segment.child("TreeModel").ok_or_else(|| {
                        ParseError::Unsupported(format!(
                            "segment {} does not hold a TreeModel",
                            segment.attr("id").unwrap_or("?")
                        ))
                    })?;
                    Ok::<_, ParseError>((segment.attr("id").map(str::to_string), model))
                })
                .collect();
        }

        if let Some(model) = document.child("TreeModel") {
            return Ok(vec![(None, model)]);
        }

        Err(ParseError::MissingElement(
            "MiningModel or TreeModel in <PMML>".to_string(),
        ))
    }
}

struct Decoder {
    dictionary: DataDictionary,
}

impl Decoder {
    fn decode_tree(&self, index: usize, id: Option<String>, model: &Element) -> Result<Tree> {
        let root = self.decode_node(model.required_child("Node")?)?;
        let mut tree = Tree::new(index, root);
        tree.id = id;

        if let Some(strategy) = model.attr("missingValueStrategy") {
            tree.missing_value_strategy = strategy
                .parse::<MissingValueStrategy>()
                .map_err(|_| {
                    ParseError::Unsupported(format!("missingValueStrategy '{}'", strategy))
                })?;
        }
        if let Some(strategy) = model.attr("noTrueChildStrategy") {
            tree.no_true_child_strategy = strategy
                .parse::<NoTrueChildStrategy>()
                .map_err(|_| {
                    ParseError::Unsupported(format!("noTrueChildStrategy '{}'", strategy))
                })?;
        }

        Ok(tree)
    }

    fn decode_node(&self, element: &Element) -> Result<Node> {
        let mut node = Node {
            id: element.attr("id").map(str::to_string),
            score: element.attr("score").map(parse_score).transpose()?,
            default_child: element.attr("defaultChild").map(str::to_string),
            ..Node::default()
        };

        for child in &element.children {
            if child.name == "Node" {
                node.children.push(self.decode_node(child)?);
            } else if node.predicate.is_none() && is_predicate(child) {
                node.predicate = Some(self.decode_predicate(child)?);
            }
        }

        Ok(node)
    }

    fn decode_predicate(&self, element: &Element) -> Result<Predicate> {
        match element.name.as_str() {
            "True" => Ok(Predicate::True),
            "False" => Ok(Predicate::False),
            "SimplePredicate" => self.decode_simple(element),
            "SimpleSetPredicate" => self.decode_simple_set(element),
            "CompoundPredicate" => {
                let operator: BooleanOperator = element.required_attr("booleanOperator")?.parse()?;
                let predicates = element
                    .children
                    .iter()
                    .filter(|child| is_predicate(child))
                    .map(|child| self.decode_predicate(child))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Predicate::compound(operator, predicates))
            }
            other => Err(ParseError::Unsupported(format!("predicate <{}>", other))),
        }
    }

    fn decode_simple(&self, element: &Element) -> Result<Predicate> {
        let field = element.required_attr("field")?;
        match element.required_attr("operator")? {
            "isMissing" => Ok(Predicate::is_missing(field)),
            "isNotMissing" => Ok(Predicate::is_not_missing(field)),
            operator => {
                let operator: ComparisonOperator = operator.parse()?;
                let literal = element.required_attr("value")?;
                let value = self.reference_value(field, literal, None)?;
                Ok(Predicate::simple(field, operator, value))
            }
        }
    }

    fn decode_simple_set(&self, element: &Element) -> Result<Predicate> {
        let field = element.required_attr("field")?;
        let operator: SetOperator = element.required_attr("booleanOperator")?.parse()?;
        let array = element.required_child("Array")?;

        let array_type = match array.attr("type") {
            Some("int") | Some("real") => Some(FieldType::Numeric),
            Some("string") => Some(FieldType::Text),
            _ => None,
        };

        let values = split_array(&array.text)
            .iter()
            .map(|token| self.reference_value(field, token, array_type))
            .collect::<Result<Vec<_>>>()?;

        if let Some(expected) = array.attr("n").and_then(|n| n.parse::<usize>().ok()) {
            if expected != values.len() {
                log::warn!(
                    "Array for field '{}' declares {} values but holds {}",
                    field,
                    expected,
                    values.len()
                );
            }
        }

        Ok(Predicate::set(field, operator, values))
    }

    /// Type a reference literal by the declared field type, then the fallback
    /// type, then by what the literal looks like
    fn reference_value(
        &self,
        field: &str,
        literal: &str,
        fallback: Option<FieldType>,
    ) -> Result<Value> {
        match self.dictionary.field_type(field).or(fallback) {
            Some(FieldType::Numeric) => match literal.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(Value::Number(n)),
                _ => Err(ParseError::InvalidValue {
                    field: field.to_string(),
                    message: format!("'{}' is not a finite number", literal),
                }),
            },
            Some(FieldType::Text) => Ok(Value::text(literal)),
            None => Ok(match literal.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Value::Number(n),
                _ => Value::text(literal),
            }),
        }
    }
}

fn is_predicate(element: &Element) -> bool {
    PREDICATE_ELEMENTS.contains(&element.name.as_str())
}

fn parse_score(score: &str) -> Result<f64> {
    match score.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ParseError::InvalidValue {
            field: "score".to_string(),
            message: format!("'{}' is not a finite number", score),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_model(body: &str) -> String {
        format!(
            r#"<PMML version="4.2"><TreeModel functionName="classification">{}</TreeModel></PMML>"#,
            body
        )
    }

    #[test]
    fn test_parse_single_tree_model() {
        let forest = PmmlParser::parse(&tree_model(r#"<Node score="1"><True/></Node>"#)).unwrap();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest.trees()[0].root.score, Some(1.0));
        assert_eq!(forest.trees()[0].root.predicate, Some(Predicate::True));
    }

    #[test]
    fn test_simple_predicate_inferred_types() {
        let forest = PmmlParser::parse(&tree_model(
            r#"<Node><True/>
                 <Node score="1"><SimplePredicate field="x" operator="lessOrEqual" value="2.5"/></Node>
                 <Node score="0"><SimplePredicate field="c" operator="equal" value="red"/></Node>
               </Node>"#,
        ))
        .unwrap();

        let root = &forest.trees()[0].root;
        assert_eq!(
            root.children[0].predicate,
            Some(Predicate::simple("x", ComparisonOperator::LessOrEqual, 2.5))
        );
        assert_eq!(
            root.children[1].predicate,
            Some(Predicate::simple("c", ComparisonOperator::Equal, "red"))
        );
    }

    #[test]
    fn test_dictionary_types_reference_values() {
        let xml = r#"<PMML>
  <DataDictionary>
    <DataField name="zip" optype="categorical" dataType="string"/>
  </DataDictionary>
  <TreeModel>
    <Node><True/>
      <Node score="1"><SimplePredicate field="zip" operator="equal" value="02134"/></Node>
    </Node>
  </TreeModel>
</PMML>"#;

        let forest = PmmlParser::parse(xml).unwrap();
        assert_eq!(
            forest.trees()[0].root.children[0].predicate,
            Some(Predicate::simple("zip", ComparisonOperator::Equal, "02134"))
        );
    }

    #[test]
    fn test_missing_value_operators() {
        let forest = PmmlParser::parse(&tree_model(
            r#"<Node><True/>
                 <Node score="1"><SimplePredicate field="x" operator="isMissing"/></Node>
                 <Node score="0"><SimplePredicate field="x" operator="isNotMissing"/></Node>
               </Node>"#,
        ))
        .unwrap();

        let root = &forest.trees()[0].root;
        assert_eq!(root.children[0].predicate, Some(Predicate::is_missing("x")));
        assert_eq!(root.children[1].predicate, Some(Predicate::is_not_missing("x")));
    }

    #[test]
    fn test_compound_and_set_predicates() {
        let forest = PmmlParser::parse(&tree_model(
            r#"<Node><True/>
                 <Node score="1">
                   <CompoundPredicate booleanOperator="surrogate">
                     <SimplePredicate field="x" operator="greaterThan" value="1"/>
                     <SimpleSetPredicate field="city" booleanOperator="isIn">
                       <Array n="2" type="string">"New York" Boston</Array>
                     </SimpleSetPredicate>
                     <False/>
                   </CompoundPredicate>
                 </Node>
               </Node>"#,
        ))
        .unwrap();

        let expected = Predicate::compound(
            BooleanOperator::Surrogate,
            vec![
                Predicate::simple("x", ComparisonOperator::GreaterThan, 1.0),
                Predicate::set(
                    "city",
                    SetOperator::IsIn,
                    vec![Value::text("New York"), Value::text("Boston")],
                ),
                Predicate::False,
            ],
        );
        assert_eq!(
            forest.trees()[0].root.children[0].predicate,
            Some(expected)
        );
    }

    #[test]
    fn test_numeric_array() {
        let forest = PmmlParser::parse(&tree_model(
            r#"<Node><True/>
                 <Node score="1">
                   <SimpleSetPredicate field="n" booleanOperator="isNotIn">
                     <Array n="3" type="int">1 2 3</Array>
                   </SimpleSetPredicate>
                 </Node>
               </Node>"#,
        ))
        .unwrap();

        assert_eq!(
            forest.trees()[0].root.children[0].predicate,
            Some(Predicate::set(
                "n",
                SetOperator::IsNotIn,
                vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)],
            ))
        );
    }

    #[test]
    fn test_array_split_by_comment() {
        let forest = PmmlParser::parse(&tree_model(
            r#"<Node><True/>
                 <Node score="1">
                   <SimpleSetPredicate field="c" booleanOperator="isIn">
                     <Array type="string">a <!-- x --> b<![CDATA[ c]]></Array>
                   </SimpleSetPredicate>
                 </Node>
               </Node>"#,
        ))
        .unwrap();

        assert_eq!(
            forest.trees()[0].root.children[0].predicate,
            Some(Predicate::set(
                "c",
                SetOperator::IsIn,
                vec![Value::text("a"), Value::text("b"), Value::text("c")],
            ))
        );
    }

    #[test]
    fn test_non_finite_numeric_reference() {
        for literal in ["NaN", "inf", "-infinity"] {
            let xml = format!(
                r#"<PMML>
  <DataDictionary><DataField name="x" dataType="double"/></DataDictionary>
  <TreeModel>
    <Node><True/>
      <Node score="1"><SimplePredicate field="x" operator="lessThan" value="{}"/></Node>
    </Node>
  </TreeModel>
</PMML>"#,
                literal
            );

            let err = PmmlParser::parse(&xml).unwrap_err();
            assert!(matches!(err, ParseError::InvalidValue { ref field, .. } if field == "x"));
        }
    }

    #[test]
    fn test_tree_strategies() {
        let xml = r#"<PMML><TreeModel missingValueStrategy="defaultChild" noTrueChildStrategy="returnLastPrediction">
            <Node score="0" defaultChild="2"><True/><Node id="2" score="1"><True/></Node></Node>
        </TreeModel></PMML>"#;

        let forest = PmmlParser::parse(xml).unwrap();
        let tree = &forest.trees()[0];
        assert_eq!(tree.missing_value_strategy, MissingValueStrategy::DefaultChild);
        assert_eq!(
            tree.no_true_child_strategy,
            NoTrueChildStrategy::ReturnLastPrediction
        );
        assert_eq!(tree.root.default_child.as_deref(), Some("2"));
    }

    #[test]
    fn test_unsupported_strategy() {
        let xml = r#"<PMML><TreeModel missingValueStrategy="aggregateNodes"><Node score="1"><True/></Node></TreeModel></PMML>"#;
        let err = PmmlParser::parse(xml).unwrap_err();
        assert!(matches!(err, ParseError::Unsupported(_)));
    }

    #[test]
    fn test_invalid_score() {
        let err =
            PmmlParser::parse(&tree_model(r#"<Node score="yes"><True/></Node>"#)).unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { ref field, .. } if field == "score"));
    }

    #[test]
    fn test_invalid_operator() {
        let err = PmmlParser::parse(&tree_model(
            r#"<Node><True/><Node score="1"><SimplePredicate field="x" operator="between" value="1"/></Node></Node>"#,
        ))
        .unwrap_err();
        assert!(matches!(err, ParseError::CoreError(_)));
    }

    #[test]
    fn test_comparison_requires_value() {
        let err = PmmlParser::parse(&tree_model(
            r#"<Node><True/><Node score="1"><SimplePredicate field="x" operator="equal"/></Node></Node>"#,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingAttribute { ref attribute, .. } if attribute == "value"
        ));
    }

    #[test]
    fn test_not_pmml() {
        let err = PmmlParser::parse("<Model/>").unwrap_err();
        assert!(matches!(err, ParseError::MissingElement(_)));
    }
}
