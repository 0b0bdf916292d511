//! Building and rendering HTML elements.
//!
//! A [`ContentTag`] is a tag name, a content value and a list of
//! attributes. The helpers in this crate all produce one.
//!
//! ```rust
//! use boothelp::{Content, ContentTag, Options};
//!
//! let tag = ContentTag::new(
//!     "p",
//!     vec![Content::text("Hello "), Content::html("<em>world</em>")],
//!     Options::new().with("class", "lead"),
//! )?;
//! assert_eq!(tag.to_html()?, r#"<p class="lead">Hello <em>world</em></p>"#);
//! # Ok::<(), boothelp::Error>(())
//! ```
use std::io;

use crate::attribute::{is_valid_name, HtmlAttribute};
use crate::error::Error;
use crate::markup::{Markup, Node};
use crate::options::Options;
use crate::output::{gen_outputs, is_void_element, HtmlSerializer};

/// The content of a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Text; `&`, `<` and `>` are escaped when rendered.
    Text(String),
    /// Markup that is rendered as-is.
    Html(String),
    /// A nested tag.
    Tag(Box<ContentTag>),
    /// A sequence of content.
    List(Vec<Content>),
}

impl Content {
    /// Text content.
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    /// Raw markup. It is not escaped, so never pass untrusted input here.
    pub fn html(html: impl Into<String>) -> Self {
        Content::Html(html.into())
    }

    /// Whether there is nothing to render.
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(text) | Content::Html(text) => text.is_empty(),
            Content::Tag(_) => false,
            Content::List(contents) => contents.iter().all(Content::is_empty),
        }
    }

    fn treeify(&self, markup: &mut Markup) -> Node {
        match self {
            Content::Text(text) => markup.new_text(text),
            Content::Html(html) => markup.new_html(html),
            Content::Tag(tag) => tag.treeify(markup),
            Content::List(contents) => {
                let fragment = markup.new_fragment();
                for content in contents {
                    let child = content.treeify(markup);
                    markup.append(fragment, child);
                }
                fragment
            }
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::List(Vec::new())
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<ContentTag> for Content {
    fn from(tag: ContentTag) -> Self {
        Content::Tag(Box::new(tag))
    }
}

impl<T: Into<Content>> From<Vec<T>> for Content {
    fn from(contents: Vec<T>) -> Self {
        Content::List(contents.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(content: Option<T>) -> Self {
        content.map(Into::into).unwrap_or_default()
    }
}

/// An HTML element with its content and attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTag {
    name: String,
    content: Content,
    attributes: Vec<HtmlAttribute>,
}

impl ContentTag {
    /// Create a tag with static content. Every option becomes an attribute,
    /// in order.
    ///
    /// Void elements like `input` or `br` only accept empty content.
    pub fn new(
        name: impl Into<String>,
        content: impl Into<Content>,
        options: Options,
    ) -> Result<Self, Error> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(Error::InvalidTagName(name));
        }
        let mut tag = ContentTag {
            name,
            content: Content::default(),
            attributes: options.into_attributes()?,
        };
        tag.set_content(content.into())?;
        Ok(tag)
    }

    /// Create a tag whose content is produced by `block`.
    ///
    /// The block is called once, after the tag name and options are checked.
    /// An error from the block is passed on.
    pub fn with_block<F, C>(name: impl Into<String>, options: Options, block: F) -> Result<Self, Error>
    where
        F: FnOnce() -> Result<C, Error>,
        C: Into<Content>,
    {
        let mut tag = ContentTag::new(name, Content::default(), options)?;
        tag.set_content(block()?.into())?;
        Ok(tag)
    }

    fn set_content(&mut self, content: Content) -> Result<(), Error> {
        if !content.is_empty() && is_void_element(&self.name) {
            return Err(Error::VoidElementContent(self.name.clone()));
        }
        self.content = content;
        Ok(())
    }

    /// The tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The content of this tag.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// All attributes, in rendering order. Blank attributes are included
    /// here but are not rendered.
    pub fn attributes(&self) -> &[HtmlAttribute] {
        &self.attributes
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&HtmlAttribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name() == name)
    }

    fn treeify(&self, markup: &mut Markup) -> Node {
        let element = markup.new_element(&self.name, self.attributes.clone());
        if !self.content.is_empty() {
            let child = self.content.treeify(markup);
            markup.append(element, child);
        }
        element
    }

    /// Write the rendered HTML to a writer.
    pub fn render<W: io::Write>(&self, w: &mut W) -> Result<(), Error> {
        tracing::trace!(tag = %self.name, "rendering content tag");
        let mut markup = Markup::new();
        let node = self.treeify(&mut markup);
        let mut serializer = HtmlSerializer::new();
        serializer.serialize(w, gen_outputs(&markup, node))
    }

    /// Render to a string.
    pub fn to_html(&self) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.render(&mut buf)?;
        String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}
