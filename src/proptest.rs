//! Proptest support for boothelp
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module lets you generate arbitrary option
//! dictionaries, as passed to the helpers.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! boothelp = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use proptest::prelude::*;

use crate::attribute::AttributeValue;
use crate::options::Options;

/// Contexts a helper may be given, valid and invalid.
pub const CONTEXTS: &[&str] = &[
    "default", "primary", "success", "info", "warning", "danger", "link", "alert", "muted", "",
];
/// Sizes a helper may be given, valid and invalid.
pub const SIZES: &[&str] = &["lg", "large", "sm", "small", "xs", "extra_small", "md", ""];
/// Layouts a helper may be given, valid and invalid.
pub const LAYOUTS: &[&str] = &["block", "inline", ""];

const ATTRIBUTE_NAMES: &[&str] = &["id", "title", "data-toggle", "disabled", "type"];
const TOKEN: &str = "[a-z][a-z0-9-]{0,8}";

/// An arbitrary attribute value.
pub fn arb_attribute_value() -> impl Strategy<Value = AttributeValue> {
    let leaf = prop_oneof![
        Just(AttributeValue::Null),
        any::<bool>().prop_map(AttributeValue::Bool),
        any::<i64>().prop_map(AttributeValue::Integer),
        prop::collection::vec(TOKEN, 0..4).prop_map(|tokens| AttributeValue::Text(tokens.join(" "))),
    ];
    leaf.prop_recursive(2, 8, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(AttributeValue::List)
    })
}

/// Arbitrary helper options: maybe a context, size and layout, followed by
/// plain attributes.
pub fn arb_options() -> impl Strategy<Value = Options> {
    (
        prop::option::of(prop::sample::select(CONTEXTS)),
        prop::option::of(prop::sample::select(SIZES)),
        prop::option::of(prop::sample::select(LAYOUTS)),
        prop::collection::vec(
            (prop::sample::select(ATTRIBUTE_NAMES), arb_attribute_value()),
            0..4,
        ),
    )
        .prop_map(|(context, size, layout, attributes)| {
            let mut options = Options::new();
            if let Some(context) = context {
                options.insert("context", context);
            }
            if let Some(size) = size {
                options.insert("size", size);
            }
            if let Some(layout) = layout {
                options.insert("layout", layout);
            }
            for (name, value) in attributes {
                options.insert(name, value);
            }
            options
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{button, Scope};

    proptest! {
        #[test]
        fn test_arb_options_render(options in arb_options()) {
            let tag = button(&Scope::new(), "x", options).unwrap();
            let html = tag.to_html();
            prop_assert!(html.is_ok(), "Cannot render: {:?}", tag);
        }
    }

    proptest! {
        #[test]
        fn test_arb_options_leave_no_recognized_keys(options in arb_options()) {
            let tag = button(&Scope::new(), "x", options).unwrap();
            for key in ["context", "size", "layout"] {
                prop_assert!(tag.attribute(key).is_none());
            }
        }
    }
}
