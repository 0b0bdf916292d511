#![forbid(unsafe_code)]

//! Helpers that generate HTML markup following Bootstrap conventions.
//!
//! Each helper takes [`Options`], some content and the [`Scope`] it is used
//! in, and produces a [`ContentTag`] that renders to HTML.
//!
//! ```rust
//! use boothelp::{button, horizontal, Options, Scope};
//!
//! let scope = Scope::new().in_navbar("navbar");
//! let save = button(&scope, "Save", Options::new().with("context", "success"))?;
//! let panel = horizontal(&scope, save, Options::new())?;
//! assert_eq!(
//!     panel.to_html()?,
//!     concat!(
//!         r#"<div class="collapse navbar-collapse" id="navbar">"#,
//!         r#"<button class="btn btn-success navbar-btn">Save</button>"#,
//!         "</div>"
//!     )
//! );
//! # Ok::<(), boothelp::Error>(())
//! ```

mod attribute;
mod button;
mod content_tag;
mod context;
mod entity;
mod error;
mod horizontal;
mod markup;
mod options;
mod output;
#[cfg(feature = "proptest")]
pub mod proptest;
mod scope;

pub use attribute::{is_boolean_attribute, AttributeValue, HtmlAttribute};
pub use button::{button, button_with};
pub use content_tag::{Content, ContentTag};
pub use context::{context_for, Context, Layout, Size, DEFAULT_CONTEXT};
pub use error::Error;
pub use horizontal::{horizontal, horizontal_with};
pub use options::Options;
pub use scope::Scope;
