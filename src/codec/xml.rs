//! Generic XML codec: tags to mappings and back.
//!
//! Element attributes are ignored, repeated sibling tags collapse into
//! arrays, and empty elements decode to null. Encoding walks a mapping and
//! emits one element per key with 4-space indentation; array values repeat
//! the element name once per item.

use super::scalar_text;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde_json::{Map, Value};

pub fn decode(input: &str) -> Result<Value, String> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    // Open elements: (tag name, children so far, accumulated text).
    let mut stack: Vec<(String, Map<String, Value>, String)> = Vec::new();
    let mut root = Map::new();

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(start) => {
                let name = tag_name(&start)?;
                stack.push((name, Map::new(), String::new()));
            }
            Event::Empty(start) => {
                let name = tag_name(&start)?;
                let target = match stack.last_mut() {
                    Some((_, children, _)) => children,
                    None => &mut root,
                };
                attach(target, name, Value::Null);
            }
            Event::Text(text) => {
                let content = text.unescape().map_err(|e| e.to_string())?;
                match stack.last_mut() {
                    Some((_, _, accumulated)) => accumulated.push_str(&content),
                    None => return Err("text content outside of any element".to_string()),
                }
            }
            Event::CData(data) => {
                let content = String::from_utf8(data.into_inner().into_owned())
                    .map_err(|e| e.to_string())?;
                match stack.last_mut() {
                    Some((_, _, accumulated)) => accumulated.push_str(&content),
                    None => return Err("text content outside of any element".to_string()),
                }
            }
            Event::End(_) => {
                let (name, children, text) = stack.pop().ok_or("unexpected closing tag")?;
                let value = if !children.is_empty() {
                    Value::Object(children)
                } else if !text.is_empty() {
                    Value::String(text)
                } else {
                    Value::Null
                };
                let target = match stack.last_mut() {
                    Some((_, siblings, _)) => siblings,
                    None => &mut root,
                };
                attach(target, name, value);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some((name, _, _)) = stack.last() {
        return Err(format!("unclosed element '{name}'"));
    }
    Ok(Value::Object(root))
}

fn tag_name(start: &BytesStart<'_>) -> Result<String, String> {
    String::from_utf8(start.name().as_ref().to_vec()).map_err(|e| e.to_string())
}

/// Insert a child, collapsing repeated sibling tags into an array.
fn attach(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

pub fn encode(value: &Value) -> Result<String, String> {
    let Value::Object(map) = value else {
        return Err("xml documents must be a mapping of tags to values".to_string());
    };

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    for (name, child) in map {
        write_element(&mut writer, name, child)?;
    }

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    value: &Value,
) -> Result<(), String> {
    match value {
        Value::Object(children) => {
            writer
                .write_event(Event::Start(BytesStart::new(name)))
                .map_err(|e| e.to_string())?;
            for (child_name, child) in children {
                write_element(writer, child_name, child)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(|e| e.to_string())
        }
        Value::Array(items) => {
            for item in items {
                write_element(writer, name, item)?;
            }
            Ok(())
        }
        Value::Null => writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(|e| e.to_string()),
        scalar => {
            let text = scalar_text(scalar).unwrap_or_default();
            writer
                .write_event(Event::Start(BytesStart::new(name)))
                .map_err(|e| e.to_string())?;
            writer
                .write_event(Event::Text(BytesText::new(&text)))
                .map_err(|e| e.to_string())?;
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(|e| e.to_string())
        }
    }
}
