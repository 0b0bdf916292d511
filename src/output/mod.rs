//! Serialization of markup trees into HTML.
mod html_serializer;
mod serializer;

pub(crate) use html_serializer::{is_void_element, HtmlSerializer};
pub(crate) use serializer::gen_outputs;
pub(crate) use serializer::{Output, OutputToken};
