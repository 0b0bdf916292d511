use genawaiter::rc::gen;
use genawaiter::yield_;

use crate::attribute::HtmlAttribute;
use crate::markup::{Element, Markup, Node, NodeEdge, Value};

/// Output of serialization
///
/// Each output represents one piece of the markup tree, in document order.
#[derive(Debug, PartialEq)]
pub(crate) enum Output<'a> {
    /// Start tag open, i.e `<button`
    StartTagOpen(&'a Element),
    /// Start tag close, `>`
    StartTagClose,
    /// End tag, i.e. `</button>`
    EndTag(&'a Element),
    /// Attribute, i.e. `class="btn"`
    Attribute(&'a HtmlAttribute),
    /// Text, i.e. `Save`
    Text(&'a str),
    /// Markup that is passed through unchanged
    Html(&'a str),
}

pub(crate) fn gen_outputs(
    markup: &Markup,
    node: Node,
) -> impl Iterator<Item = (Node, Output<'_>)> + '_ {
    gen!({
        for edge in markup.traverse(node) {
            match edge {
                NodeEdge::Start(current_node) => {
                    let gen = gen_edge_start(markup, current_node);
                    for output in gen {
                        yield_!((current_node, output));
                    }
                }
                NodeEdge::End(current_node) => {
                    let gen = gen_edge_end(markup, current_node);
                    for output in gen {
                        yield_!((current_node, output));
                    }
                }
            }
        }
    })
    .into_iter()
}

fn gen_edge_start(markup: &Markup, node: Node) -> impl Iterator<Item = Output<'_>> + '_ {
    gen!({
        match markup.value(node) {
            Value::Fragment => {}
            Value::Element(element) => {
                yield_!(Output::StartTagOpen(element));
                for attribute in &element.attributes {
                    yield_!(Output::Attribute(attribute));
                }
                yield_!(Output::StartTagClose);
            }
            Value::Text(text) => {
                yield_!(Output::Text(text));
            }
            Value::Html(html) => {
                yield_!(Output::Html(html));
            }
        }
    })
    .into_iter()
}

fn gen_edge_end(markup: &Markup, node: Node) -> impl Iterator<Item = Output<'_>> + '_ {
    gen!({
        if let Value::Element(element) = markup.value(node) {
            yield_!(Output::EndTag(element));
        }
    })
    .into_iter()
}

/// Output token
///
/// This represents an [`Output`] as a rendered output token.
pub(crate) struct OutputToken {
    /// Whether the token is prefixed by a space character.
    pub(crate) space: bool,
    /// The token.
    ///
    /// This is a fragment of HTML like `<div` or `class="btn"` or `>`, etc.
    pub(crate) text: String,
}
