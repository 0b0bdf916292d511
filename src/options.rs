use crate::attribute::{AttributeValue, HtmlAttribute};
use crate::error::Error;

/// An ordered dictionary of helper options.
///
/// Behaves like a map from option key to [`AttributeValue`], but insertion
/// order is preserved: that is the order in which the remaining options are
/// rendered as attributes. Replacing the value of an existing key keeps its
/// position. Access is linear time.
///
/// ```rust
/// use boothelp::Options;
///
/// let options = Options::new()
///     .with("id", "save")
///     .with("context", "primary")
///     .with("disabled", true);
/// assert_eq!(options.len(), 3);
/// assert_eq!(options.get("context").and_then(|v| v.as_str()), Some("primary"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    entries: Vec<(String, AttributeValue)>,
}

impl Options {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set an option. Returns the previous value if the key was present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        let key = key.into();
        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(existing, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Fill in defaults for keys that are not present.
    ///
    /// Keys that are already set keep their value and position; missing keys
    /// are appended in the order given.
    pub fn set_defaults<I, K, V>(&mut self, defaults: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        for (key, value) in defaults {
            let key = key.into();
            if !self.contains_key(&key) {
                self.entries.push((key, value.into()));
            }
        }
    }

    /// Append a class after any class already present.
    ///
    /// ```rust
    /// use boothelp::Options;
    ///
    /// let mut options = Options::new().with("class", "pull-right");
    /// options.append_class("btn");
    /// let class = options.to_attribute("class")?.unwrap();
    /// assert_eq!(class.value(), "pull-right btn");
    /// # Ok::<(), boothelp::Error>(())
    /// ```
    pub fn append_class(&mut self, class: &str) {
        self.append("class", class)
    }

    /// Append tokens to an option, keeping what is already there.
    pub fn append(&mut self, key: &str, value: impl Into<AttributeValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => match std::mem::take(existing) {
                AttributeValue::Null => *existing = value,
                AttributeValue::List(mut values) => {
                    values.push(value);
                    *existing = AttributeValue::List(values);
                }
                previous => *existing = AttributeValue::List(vec![previous, value]),
            },
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Normalize a single option into an attribute, if present.
    pub fn to_attribute(&self, key: &str) -> Result<Option<HtmlAttribute>, Error> {
        self.get(key)
            .map(|value| HtmlAttribute::new(key, value.clone()))
            .transpose()
    }

    /// Normalize all options into attributes, in order.
    pub fn into_attributes(self) -> Result<Vec<HtmlAttribute>, Error> {
        self.entries
            .into_iter()
            .map(|(key, value)| HtmlAttribute::new(key, value))
            .collect()
    }

    /// Iterate over the options in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

impl From<Vec<(String, AttributeValue)>> for Options {
    fn from(entries: Vec<(String, AttributeValue)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Options> for Vec<(String, AttributeValue)> {
    fn from(options: Options) -> Self {
        options.entries
    }
}

// Options (de)serialize as a map; entry order follows the input.
#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Options;
    use crate::attribute::AttributeValue;

    impl Serialize for Options {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }

    struct OptionsVisitor;

    impl<'de> Visitor<'de> for OptionsVisitor {
        type Value = Options;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of options")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Options, A::Error> {
            let mut options = Options::new();
            while let Some((key, value)) = access.next_entry::<String, AttributeValue>()? {
                options.insert(key, value);
            }
            Ok(options)
        }
    }

    impl<'de> Deserialize<'de> for Options {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(OptionsVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_position() {
        let mut options = Options::new().with("a", "A").with("b", "B");
        let previous = options.insert("a", "A2");
        assert_eq!(previous, Some(AttributeValue::from("A")));
        assert_eq!(options.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(options.get("a"), Some(&AttributeValue::from("A2")));
    }

    #[test]
    fn test_remove() {
        let mut options = Options::new().with("a", "A").with("b", "B");
        assert_eq!(options.remove("a"), Some(AttributeValue::from("A")));
        assert_eq!(options.remove("a"), None);
        assert_eq!(options.keys().collect::<Vec<_>>(), ["b"]);
    }

    #[test]
    fn test_set_defaults() {
        let mut options = Options::new().with("size", "lg");
        options.set_defaults([
            ("context", AttributeValue::Null),
            ("size", AttributeValue::from("")),
            ("layout", AttributeValue::Null),
        ]);
        assert_eq!(
            options.keys().collect::<Vec<_>>(),
            ["size", "context", "layout"]
        );
        assert_eq!(options.get("size").and_then(|v| v.as_str()), Some("lg"));
    }

    #[test]
    fn test_append_class_missing() {
        let mut options = Options::new().with("id", "x");
        options.append_class("btn btn-default");
        assert_eq!(options.keys().collect::<Vec<_>>(), ["id", "class"]);
        let class = options.to_attribute("class").unwrap().unwrap();
        assert_eq!(class.value(), "btn btn-default");
    }

    #[test]
    fn test_append_class_existing_list() {
        let mut options = Options::new().with("class", vec!["a", "b"]);
        options.append_class("c");
        options.append_class("a");
        let class = options.to_attribute("class").unwrap().unwrap();
        assert_eq!(class.value(), "a b c");
    }

    #[test]
    fn test_append_to_null() {
        let mut options = Options::new().with("class", AttributeValue::Null);
        options.append_class("c");
        assert_eq!(options.get("class"), Some(&AttributeValue::from("c")));
    }

    #[test]
    fn test_into_attributes_in_order() {
        let options = Options::new()
            .with("type", "button")
            .with("disabled", true)
            .with("class", "btn");
        let attributes = options.into_attributes().unwrap();
        let rendered = attributes
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>();
        assert_eq!(rendered, [r#"type="button""#, "disabled", r#"class="btn""#]);
    }

    #[test]
    fn test_into_attributes_invalid_name() {
        let options = Options::new().with("bad name", "x");
        assert!(matches!(
            options.into_attributes(),
            Err(Error::InvalidAttributeName(_))
        ));
    }

    #[test]
    fn test_from_iter() {
        let options: Options = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
        assert_eq!(options.len(), 2);
        assert_eq!(options.get("a").and_then(|v| v.as_str()), Some("3"));
    }
}
