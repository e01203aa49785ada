//! Defines the flat parse event stream the converter consumes.

use std::fmt;

/// A single HTML parse event.
///
/// Tag names and attribute names are lowercase. Text never contains character
/// references; those arrive as their own events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlEvent {
    StartTag {
        name: String,
        attrs: Vec<(String, String)>,
    },
    EndTag {
        name: String,
    },
    Text(String),
    /// `&name;`, holding `name`
    EntityRef(String),
    /// `&#body;`, holding `body` (`169`, `xA9`)
    CharRef(String),
}

impl HtmlEvent {
    /// Start tag without attributes.
    pub fn start(name: &str) -> Self {
        HtmlEvent::StartTag {
            name: name.to_string(),
            attrs: Vec::new(),
        }
    }

    /// Start tag with attributes.
    pub fn start_with(name: &str, attrs: &[(&str, &str)]) -> Self {
        HtmlEvent::StartTag {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn end(name: &str) -> Self {
        HtmlEvent::EndTag {
            name: name.to_string(),
        }
    }

    pub fn text(text: &str) -> Self {
        HtmlEvent::Text(text.to_string())
    }

    /// Value of an attribute on a start tag.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            HtmlEvent::StartTag { attrs, .. } => attrs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for HtmlEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlEvent::StartTag { name, attrs } => {
                write!(f, "start <{name}")?;
                for (key, value) in attrs {
                    write!(f, " {key}={value:?}")?;
                }
                write!(f, ">")
            }
            HtmlEvent::EndTag { name } => write!(f, "end </{name}>"),
            HtmlEvent::Text(text) => write!(f, "text {text:?}"),
            HtmlEvent::EntityRef(name) => write!(f, "entity &{name};"),
            HtmlEvent::CharRef(body) => write!(f, "charref &#{body};"),
        }
    }
}
