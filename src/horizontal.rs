//! The collapsible part of a navbar.
//!
//! Everything inside it is hidden behind the navbar toggle on small screens.
//! The panel takes its `id` from the enclosing navbar, so the toggle can
//! refer to it.
use crate::content_tag::{Content, ContentTag};
use crate::error::Error;
use crate::options::Options;
use crate::scope::Scope;

/// A navbar collapse panel with static content.
///
/// ```rust
/// use boothelp::{horizontal, Options, Scope};
///
/// let scope = Scope::new().in_navbar("navbar-main");
/// let tag = horizontal(&scope, "Links", Options::new())?;
/// assert_eq!(
///     tag.to_html()?,
///     r#"<div class="collapse navbar-collapse" id="navbar-main">Links</div>"#
/// );
/// # Ok::<(), boothelp::Error>(())
/// ```
pub fn horizontal(
    scope: &Scope,
    content: impl Into<Content>,
    options: Options,
) -> Result<ContentTag, Error> {
    ContentTag::new("div", content, horizontal_options(scope, options))
}

/// A navbar collapse panel whose content is produced by `block`.
pub fn horizontal_with<F, C>(scope: &Scope, options: Options, block: F) -> Result<ContentTag, Error>
where
    F: FnOnce() -> Result<C, Error>,
    C: Into<Content>,
{
    ContentTag::with_block("div", horizontal_options(scope, options), block)
}

fn horizontal_options(scope: &Scope, mut options: Options) -> Options {
    options.append_class("collapse navbar-collapse");
    options.insert("id", scope.navbar_id().unwrap_or_default());
    options
}
