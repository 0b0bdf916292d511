//! Typed values for the Bootstrap options `context`, `size` and `layout`.
//!
//! Helpers read these options as strings from [`Options`](crate::Options);
//! the enums here accept the same strings and convert into option values, so
//! either form can be used.
use crate::attribute::AttributeValue;

/// The context used when none, or an invalid one, is given.
pub const DEFAULT_CONTEXT: &str = "default";

/// Check `context` against `valid`, falling back to
/// [`DEFAULT_CONTEXT`].
///
/// ```rust
/// use boothelp::context_for;
///
/// let valid = ["primary", "danger"];
/// assert_eq!(context_for(Some("danger"), &valid), "danger");
/// assert_eq!(context_for(Some("purple"), &valid), "default");
/// assert_eq!(context_for(None, &valid), "default");
/// ```
pub fn context_for<'a>(context: Option<&'a str>, valid: &[&str]) -> &'a str {
    match context {
        Some(context) if valid.iter().any(|v| *v == context) => context,
        Some(context) => {
            tracing::debug!(context, "unknown context, using {}", DEFAULT_CONTEXT);
            DEFAULT_CONTEXT
        }
        None => DEFAULT_CONTEXT,
    }
}

/// A Bootstrap contextual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Context {
    #[default]
    Default,
    Primary,
    Success,
    Info,
    Warning,
    Danger,
    Link,
}

impl Context {
    pub fn parse(value: &str) -> Option<Context> {
        match value {
            "default" => Some(Context::Default),
            "primary" => Some(Context::Primary),
            "success" => Some(Context::Success),
            "info" => Some(Context::Info),
            "warning" => Some(Context::Warning),
            "danger" => Some(Context::Danger),
            "link" => Some(Context::Link),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Context::Default => "default",
            Context::Primary => "primary",
            Context::Success => "success",
            Context::Info => "info",
            Context::Warning => "warning",
            Context::Danger => "danger",
            Context::Link => "link",
        }
    }
}

/// Component size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    /// `lg` or `large`
    Large,
    /// `sm` or `small`
    Small,
    /// `xs` or `extra_small`
    ExtraSmall,
}

impl Size {
    pub fn parse(value: &str) -> Option<Size> {
        match value {
            "lg" | "large" => Some(Size::Large),
            "sm" | "small" => Some(Size::Small),
            "xs" | "extra_small" => Some(Size::ExtraSmall),
            _ => None,
        }
    }

    /// The short form used in class names, like `lg` in `btn-lg`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Large => "lg",
            Size::Small => "sm",
            Size::ExtraSmall => "xs",
        }
    }
}

/// Component layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Span the full width of the parent.
    Block,
}

impl Layout {
    pub fn parse(value: &str) -> Option<Layout> {
        match value {
            "block" => Some(Layout::Block),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Block => "block",
        }
    }
}

impl From<Context> for AttributeValue {
    fn from(context: Context) -> Self {
        AttributeValue::from(context.as_str())
    }
}

impl From<Size> for AttributeValue {
    fn from(size: Size) -> Self {
        AttributeValue::from(size.as_str())
    }
}

impl From<Layout> for AttributeValue {
    fn from(layout: Layout) -> Self {
        AttributeValue::from(layout.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("lg", Some(Size::Large))]
    #[case("large", Some(Size::Large))]
    #[case("sm", Some(Size::Small))]
    #[case("small", Some(Size::Small))]
    #[case("xs", Some(Size::ExtraSmall))]
    #[case("extra_small", Some(Size::ExtraSmall))]
    #[case("md", None)]
    #[case("", None)]
    #[case("LG", None)]
    fn test_size_parse(#[case] value: &str, #[case] expected: Option<Size>) {
        assert_eq!(Size::parse(value), expected);
    }

    #[test]
    fn test_context_roundtrip() {
        for context in [
            Context::Default,
            Context::Primary,
            Context::Success,
            Context::Info,
            Context::Warning,
            Context::Danger,
            Context::Link,
        ] {
            assert_eq!(Context::parse(context.as_str()), Some(context));
        }
    }

    #[test]
    fn test_context_for_empty_string() {
        assert_eq!(context_for(Some(""), &["primary"]), DEFAULT_CONTEXT);
    }

    #[test]
    fn test_into_attribute_value() {
        assert_eq!(AttributeValue::from(Size::ExtraSmall), AttributeValue::from("xs"));
        assert_eq!(AttributeValue::from(Layout::Block), AttributeValue::from("block"));
    }
}
