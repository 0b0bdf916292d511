//! Buttons.
//!
//! See <http://getbootstrap.com/css/#buttons>.
//!
//! Recognized options:
//!
//! - `context`: one of `primary`, `success`, `info`, `warning`, `danger` or
//!   `link`. Anything else gives the `default` style.
//! - `size`: `lg`/`large`, `sm`/`small` or `xs`/`extra_small`.
//! - `layout`: `block` makes the button span its parent.
//!
//! These are removed from the options; everything else is rendered as an
//! attribute of the `<button>`.
//!
//! ```rust
//! use boothelp::{button, Options, Scope};
//!
//! let scope = Scope::new();
//! let tag = button(&scope, "Save", Options::new().with("context", "primary"))?;
//! assert_eq!(tag.to_html()?, r#"<button class="btn btn-primary">Save</button>"#);
//! # Ok::<(), boothelp::Error>(())
//! ```
use crate::content_tag::{Content, ContentTag};
use crate::context::{context_for, Layout, Size};
use crate::error::Error;
use crate::options::Options;
use crate::scope::Scope;

const VALID_CONTEXTS: [&str; 6] = ["primary", "success", "info", "warning", "danger", "link"];

/// A button with static content.
pub fn button(
    scope: &Scope,
    content: impl Into<Content>,
    options: Options,
) -> Result<ContentTag, Error> {
    build_button(scope, content.into(), options)
}

/// A button whose content is produced by `block`.
///
/// ```rust
/// use boothelp::{button_with, Content, ContentTag, Options, Scope};
///
/// let scope = Scope::new();
/// let tag = button_with(&scope, Options::new().with("size", "sm"), || {
///     let icon = ContentTag::new(
///         "span",
///         Content::default(),
///         Options::new().with("class", "glyphicon glyphicon-star"),
///     )?;
///     Ok(vec![Content::from(icon), Content::text(" Star")])
/// })?;
/// assert_eq!(
///     tag.to_html()?,
///     r#"<button class="btn btn-default btn-sm"><span class="glyphicon glyphicon-star"></span> Star</button>"#
/// );
/// # Ok::<(), boothelp::Error>(())
/// ```
pub fn button_with<F, C>(scope: &Scope, options: Options, block: F) -> Result<ContentTag, Error>
where
    F: FnOnce() -> Result<C, Error>,
    C: Into<Content>,
{
    build_button(scope, block()?.into(), options)
}

fn build_button(scope: &Scope, content: Content, mut options: Options) -> Result<ContentTag, Error> {
    let class = btn_class(scope, &mut options);
    options.append_class(&class);
    let button = ContentTag::new("button", content, options)?;

    if scope.justified_button_group() {
        return ContentTag::new(
            "div",
            button,
            Options::new().with("class", "btn-group").with("role", "group"),
        );
    }
    Ok(button)
}

fn btn_class(scope: &Scope, options: &mut Options) -> String {
    let context = options.remove("context");
    let size = options.remove("size");
    let layout = options.remove("layout");

    let context = context_for(context.as_ref().and_then(|v| v.as_str()), &VALID_CONTEXTS);
    let size = size
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(Size::parse)
        .map(|size| format!("btn-{}", size.as_str()));
    let layout = layout
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(Layout::parse)
        .map(|_| "btn-block".to_string());
    let navbar_btn = scope.navbar_id().map(|_| "navbar-btn".to_string());

    let mut classes = vec!["btn".to_string(), format!("btn-{}", context)];
    classes.extend(size);
    classes.extend(layout);
    classes.extend(navbar_btn);
    classes.join(" ")
}
