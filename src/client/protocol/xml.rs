//! XML response decoding for the query protocol.
//!
//! The document is read into a small element tree with quick-xml, then turned
//! into JSON. Where the operation declares an output shape the shape decides
//! whether an element is a list, a number or a boolean; undeclared elements
//! are converted by looking at their structure.

use crate::blocks::Shape;
use crate::error::Result;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde_json::{Map, Number, Value};

/// An XML element with its text content and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// First child with the given local name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first child with the given local name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.as_str())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Parses a document and returns its root element.
///
/// Namespace prefixes are dropped. Text of leaf elements is kept verbatim;
/// whitespace between child elements is discarded. An empty document yields
/// an unnamed empty element.
pub fn parse(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = vec![Element::default()];
    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                stack.push(Element::new(name));
            }
            Event::Empty(empty) => {
                let name = String::from_utf8_lossy(empty.local_name().as_ref()).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Element::new(name));
                }
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current
                        .text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(_) => {
                if stack.len() > 1 {
                    if let Some(done) = stack.pop() {
                        if let Some(parent) = stack.last_mut() {
                            parent.children.push(close(done));
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    // Unclosed elements are folded into their parents.
    while stack.len() > 1 {
        if let Some(done) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                parent.children.push(close(done));
            }
        }
    }

    let document = stack.pop().unwrap_or_default();
    Ok(document.children.into_iter().next().unwrap_or_default())
}

fn close(mut element: Element) -> Element {
    if !element.children.is_empty() && element.text.trim().is_empty() {
        element.text.clear();
    }
    element
}

/// Converts an element to JSON using `shape` where one is known.
pub fn to_json(element: &Element, shape: Option<&Shape>) -> Value {
    match shape {
        Some(Shape::Structure(members)) => {
            let mut object = Map::new();
            for child in &element.children {
                let member = members.iter().find(|m| m.name == child.name);
                let value = to_json(child, member.map(|m| &m.shape));
                insert_repeated(&mut object, &child.name, value);
            }
            Value::Object(object)
        }
        Some(Shape::List { item, .. }) => Value::Array(
            element
                .children
                .iter()
                .map(|c| to_json(c, Some(item)))
                .collect(),
        ),
        Some(Shape::Map(value_shape)) => {
            let mut object = Map::new();
            for entry in &element.children {
                if let Some(key) = entry.child_text("key") {
                    let value = entry
                        .child("value")
                        .map(|v| to_json(v, Some(value_shape)))
                        .unwrap_or(Value::Null);
                    object.insert(key.to_string(), value);
                }
            }
            Value::Object(object)
        }
        Some(Shape::Integer) => element
            .text
            .trim()
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .unwrap_or_else(|_| Value::String(element.text.clone())),
        Some(Shape::Number) => element
            .text
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(element.text.clone())),
        Some(Shape::Boolean) => match element.text.trim() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(element.text.clone()),
        },
        Some(Shape::String | Shape::Enum(_) | Shape::Timestamp) => {
            Value::String(element.text.clone())
        }
        Some(Shape::Any) | None => infer(element),
    }
}

/// Converts an element without a declared shape.
///
/// An element is read as a list when all of its children share one name and
/// either there is more than one of them, the name is `member`, or the
/// parent's name starts with it (`<Tags><Tag/></Tags>`).
pub fn infer(element: &Element) -> Value {
    if element.is_leaf() {
        return Value::String(element.text.clone());
    }

    let first = &element.children[0].name;
    let uniform = element.children.iter().all(|c| &c.name == first);
    let looks_like_list = uniform
        && (element.children.len() > 1
            || first == "member"
            || element.name.starts_with(first.as_str()));

    if looks_like_list {
        return Value::Array(element.children.iter().map(infer).collect());
    }

    let mut object = Map::new();
    for child in &element.children {
        insert_repeated(&mut object, &child.name, infer(child));
    }
    Value::Object(object)
}

/// Inserts `value`, turning repeated keys into an array.
fn insert_repeated(object: &mut Map<String, Value>, key: &str, value: Value) {
    match object.get_mut(key) {
        None => {
            object.insert(key.to_string(), value);
        }
        Some(Value::Array(existing)) => existing.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::schema::{
        boolean, integer, list_of, optional, string, string_map, structure,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_tree() {
        let root = parse(
            r#"<?xml version="1.0"?>
            <DescribeResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
              <Result><Name>a &amp; b</Name><Empty/></Result>
            </DescribeResponse>"#,
        )
        .unwrap();
        assert_eq!(root.name, "DescribeResponse");
        let result = root.child("Result").unwrap();
        assert_eq!(result.child_text("Name"), Some("a & b"));
        assert!(result.child("Empty").unwrap().is_leaf());
    }

    #[test]
    fn test_leaf_text_is_verbatim() {
        let root = parse(
            "<Result>\n  <Description>  padded value \n</Description>\n  <Blank>   </Blank>\n</Result>",
        )
        .unwrap();
        assert_eq!(root.text, "");
        assert_eq!(root.child_text("Description"), Some("  padded value \n"));
        assert_eq!(root.child_text("Blank"), Some("   "));
        assert_eq!(
            to_json(&root, None),
            json!({ "Description": "  padded value \n", "Blank": "   " })
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse("").unwrap(), Element::default());
    }

    #[test]
    fn test_shape_guided_single_item_list() {
        let shape = structure([
            optional(
                "DBInstances",
                list_of(
                    structure([
                        optional("DBInstanceIdentifier", string()),
                        optional("AllocatedStorage", integer()),
                        optional("MultiAZ", boolean()),
                    ]),
                    "DBInstance",
                ),
            ),
            optional("Marker", string()),
        ]);
        let root = parse(
            "<R><DBInstances><DBInstance>\
             <DBInstanceIdentifier>db1</DBInstanceIdentifier>\
             <AllocatedStorage>20</AllocatedStorage>\
             <MultiAZ>false</MultiAZ>\
             <Engine>postgres</Engine>\
             </DBInstance></DBInstances></R>",
        )
        .unwrap();

        assert_eq!(
            to_json(&root, Some(&shape)),
            json!({
                "DBInstances": [{
                    "DBInstanceIdentifier": "db1",
                    "AllocatedStorage": 20,
                    "MultiAZ": false,
                    "Engine": "postgres",
                }],
            })
        );
    }

    #[test]
    fn test_map_entries() {
        let root = parse(
            "<Attrs><entry><key>a</key><value>1</value></entry>\
             <entry><key>b</key><value>2</value></entry></Attrs>",
        )
        .unwrap();
        assert_eq!(
            to_json(&root, Some(&string_map())),
            json!({ "a": "1", "b": "2" })
        );
    }

    #[test]
    fn test_infer_lists_and_objects() {
        let tags = parse("<TagList><Tag><Key>env</Key><Value>prod</Value></Tag></TagList>").unwrap();
        assert_eq!(infer(&tags), json!([{ "Key": "env", "Value": "prod" }]));

        let members = parse("<Ids><member>a</member></Ids>").unwrap();
        assert_eq!(infer(&members), json!(["a"]));

        let object = parse("<Endpoint><Address>h</Address><Port>5432</Port></Endpoint>").unwrap();
        assert_eq!(infer(&object), json!({ "Address": "h", "Port": "5432" }));
    }

    #[test]
    fn test_repeated_keys_collect_into_array() {
        let root = parse("<X><A>1</A><B>x</B><A>2</A></X>").unwrap();
        assert_eq!(infer(&root), json!({ "A": ["1", "2"], "B": "x" }));
    }
}
