use anyhow::{Result, bail};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::{Map, Value};

/// Element collected while reading
#[derive(Debug, Default)]
struct Frame {
    name: String,
    text: String,
    children: Vec<(String, Value)>,
}

impl Frame {
    fn new(start: &BytesStart<'_>) -> Self {
        Self {
            name: local_name(start),
            ..Self::default()
        }
    }

    /// Leaf text becomes a string, `member` lists become arrays,
    /// `entry`/`key`/`value` maps become objects, anything else an object
    /// where repeated element names collapse into arrays.
    fn into_value(self) -> Value {
        // Text between child elements is layout; only a leaf keeps its text verbatim
        if self.children.is_empty() {
            return Value::String(self.text);
        }

        if self.children.iter().all(|(name, _)| name == "member") {
            return Value::Array(self.children.into_iter().map(|(_, v)| v).collect());
        }

        if let Some(map) = entries_as_map(&self.children) {
            return Value::Object(map);
        }

        let mut grouped: Vec<(String, Vec<Value>)> = Vec::new();
        for (name, value) in self.children {
            match grouped.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, values)) => values.push(value),
                None => grouped.push((name, vec![value])),
            }
        }

        let object = grouped
            .into_iter()
            .map(|(name, mut values)| {
                let value = if values.len() == 1 {
                    values.remove(0)
                } else {
                    Value::Array(values)
                };
                (name, value)
            })
            .collect();
        Value::Object(object)
    }
}

fn entries_as_map(children: &[(String, Value)]) -> Option<Map<String, Value>> {
    children
        .iter()
        .map(|(name, entry)| {
            if name != "entry" {
                return None;
            }
            let key = entry.get("key")?.as_str()?.to_string();
            let value = entry.get("value").cloned().unwrap_or(Value::Null);
            Some((key, value))
        })
        .collect()
}

fn local_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

/// Parse an XML document into `(root element name, value)`
pub fn parse(bytes: &[u8]) -> Result<(String, Value)> {
    let mut reader = Reader::from_reader(bytes);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => stack.push(Frame::new(e)),
            Ok(Event::Empty(ref e)) => {
                let element = (local_name(e), Value::String(String::new()));
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&e.unescape()?);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::End(_)) => {
                let Some(frame) = stack.pop() else {
                    bail!("Unbalanced closing tag in XML document");
                };
                let element = (frame.name.clone(), frame.into_value());
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => bail!("Error parsing XML response: {}", e),
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        bail!("XML document ended inside <{}>", open.name);
    }

    match root {
        Some(root) => Ok(root),
        None => bail!("XML document has no root element"),
    }
}
