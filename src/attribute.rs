use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use ahash::HashSet;

use crate::entity::serialize_attribute;
use crate::error::Error;

const SPACE: &str = " ";

/// Attributes whose presence, not their value, carries meaning.
const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "disabled",
    "readonly",
    "multiple",
    "checked",
    "autobuffer",
    "autoplay",
    "controls",
    "loop",
    "selected",
    "hidden",
    "scoped",
    "async",
    "defer",
    "reversed",
    "ismap",
    "seamless",
    "muted",
    "required",
    "autofocus",
    "novalidate",
    "formnovalidate",
    "open",
    "pubdate",
    "itemscope",
    "allowfullscreen",
    "default",
    "inert",
    "sortable",
    "truespeed",
    "typemustmatch",
];

fn boolean_attributes() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| BOOLEAN_ATTRIBUTES.iter().copied().collect())
}

/// Whether `name` is one of the HTML boolean attributes, like `disabled`.
///
/// The lookup is case-insensitive.
pub fn is_boolean_attribute(name: &str) -> bool {
    boolean_attributes().contains(name.to_ascii_lowercase().as_str())
}

// Names must not be able to break out of the tag they are written into.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
        })
}

/// A raw option value, before it is normalized into attribute tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum AttributeValue {
    /// No value. Produces no tokens.
    #[default]
    Null,
    /// A boolean. Boolean attributes treat `true` as presence; any other
    /// attribute gets the literal `"true"` or `"false"`.
    Bool(bool),
    /// An integer, written in decimal.
    Integer(i64),
    /// Text; split on whitespace into tokens.
    Text(String),
    /// A sequence of values, normalized one by one.
    List(Vec<AttributeValue>),
}

impl AttributeValue {
    /// The value as a string slice, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Whether this value produces no tokens for a non-boolean attribute.
    pub fn is_blank(&self) -> bool {
        match self {
            AttributeValue::Null => true,
            AttributeValue::Bool(_) | AttributeValue::Integer(_) => false,
            AttributeValue::Text(text) => text.trim().is_empty(),
            AttributeValue::List(values) => values.iter().all(|v| v.is_blank()),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        AttributeValue::Text(value.clone())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Integer(value.into())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::Null, Into::into)
    }
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
    fn from(values: Vec<T>) -> Self {
        AttributeValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// A single HTML attribute: a name and an ordered set of tokens.
///
/// Tokens are unique; when the same token occurs more than once only the
/// first occurrence is kept.
///
/// ```rust
/// use boothelp::HtmlAttribute;
///
/// let class = HtmlAttribute::new("class", "btn btn-primary btn")?;
/// assert_eq!(class.tokens(), ["btn", "btn-primary"]);
/// assert_eq!(class.to_string(), r#"class="btn btn-primary""#);
///
/// let disabled = HtmlAttribute::new("disabled", true)?;
/// assert_eq!(disabled.to_string(), "disabled");
/// # Ok::<(), boothelp::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlAttribute {
    name: String,
    tokens: Vec<String>,
}

impl HtmlAttribute {
    /// Create an attribute from a name and a raw value.
    ///
    /// Returns [`Error::InvalidAttributeName`] if the name cannot be
    /// written into a tag.
    pub fn new(name: impl Into<String>, value: impl Into<AttributeValue>) -> Result<Self, Error> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(Error::InvalidAttributeName(name));
        }
        let mut attribute = HtmlAttribute {
            name,
            tokens: Vec::new(),
        };
        attribute.set_value(value);
        Ok(attribute)
    }

    /// The attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized tokens, in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The tokens joined by single spaces.
    pub fn value(&self) -> String {
        self.tokens.join(SPACE)
    }

    /// Replace the value of this attribute.
    pub fn set_value(&mut self, value: impl Into<AttributeValue>) {
        let mut tokens = Vec::new();
        self.normalize(&value.into(), &mut tokens);
        let mut seen = HashSet::default();
        tokens.retain(|token| seen.insert(token.clone()));
        self.tokens = tokens;
    }

    /// Whether the attribute produces no output.
    pub fn is_blank(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether all the space-separated tokens in `value` are present.
    ///
    /// ```rust
    /// use boothelp::HtmlAttribute;
    ///
    /// let class = HtmlAttribute::new("class", "btn btn-lg btn-block")?;
    /// assert!(class.has_value("btn-lg"));
    /// assert!(class.has_value("btn-block btn"));
    /// assert!(!class.has_value("btn btn-xs"));
    /// # Ok::<(), boothelp::Error>(())
    /// ```
    pub fn has_value(&self, value: &str) -> bool {
        self.has_values(value.split_whitespace())
    }

    /// Whether all the given tokens are present.
    pub fn has_values<I, S>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .all(|needle| self.tokens.iter().any(|token| token == needle.as_ref()))
    }

    fn is_boolean(&self) -> bool {
        is_boolean_attribute(&self.name)
    }

    fn normalize(&self, value: &AttributeValue, tokens: &mut Vec<String>) {
        match value {
            AttributeValue::Null => {}
            AttributeValue::Bool(flag) => {
                if self.is_boolean() {
                    if *flag {
                        tokens.push(self.name.clone());
                    }
                } else {
                    tokens.push(flag.to_string());
                }
            }
            AttributeValue::Integer(number) => tokens.push(number.to_string()),
            AttributeValue::Text(text) => {
                tokens.extend(text.split_whitespace().map(|token| token.to_string()))
            }
            AttributeValue::List(values) => {
                for value in values {
                    self.normalize(value, tokens);
                }
            }
        }
    }

    // a boolean attribute that is switched on renders as its bare name
    fn is_bare(&self) -> bool {
        self.is_boolean()
            && self.tokens.len() == 1
            && self.tokens[0].eq_ignore_ascii_case(&self.name)
    }
}

impl fmt::Display for HtmlAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            return Ok(());
        }
        if self.is_bare() {
            return write!(f, "{}", self.name);
        }
        let value = self.value();
        write!(
            f,
            "{}=\"{}\"",
            self.name,
            serialize_attribute(Cow::Borrowed(value.as_str()))
        )
    }
}
