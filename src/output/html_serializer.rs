use std::borrow::Cow;
use std::io;
use std::sync::OnceLock;

use ahash::HashSet;

use crate::entity::serialize_text;
use crate::error::Error;
use crate::markup::Node;

use super::{Output, OutputToken};

#[derive(Debug)]
struct HtmlNames {
    names: HashSet<&'static str>,
}

impl HtmlNames {
    fn new(names: &[&'static str]) -> Self {
        Self {
            names: names.iter().copied().collect(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        // if we match as written, we're done right away
        if self.names.contains(name) {
            return true;
        }
        // otherwise, we do a case-insensitive lookup
        self.names.contains(name.to_ascii_lowercase().as_str())
    }
}

fn void_names() -> &'static HtmlNames {
    static VOID_NAMES: OnceLock<HtmlNames> = OnceLock::new();
    VOID_NAMES.get_or_init(|| {
        HtmlNames::new(&[
            "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta",
            "param", "source", "track", "wbr",
            // extra elements not in the HTML5 spec but null in HTML 4
            "basefont", "frame", "isindex",
        ])
    })
}

/// Whether `name` is a void element, which has no content and no end tag.
pub(crate) fn is_void_element(name: &str) -> bool {
    void_names().matches(name)
}

pub(crate) struct HtmlSerializer {
    void_names: &'static HtmlNames,
}

impl HtmlSerializer {
    pub(crate) fn new() -> Self {
        Self {
            void_names: void_names(),
        }
    }

    pub(crate) fn serialize<'a, W: io::Write>(
        &mut self,
        w: &mut W,
        outputs: impl Iterator<Item = (Node, Output<'a>)>,
    ) -> Result<(), Error> {
        for (_, output) in outputs {
            self.serialize_output(w, output)?;
        }
        Ok(())
    }

    pub(crate) fn serialize_output<W: io::Write>(
        &mut self,
        w: &mut W,
        output: Output<'_>,
    ) -> Result<(), Error> {
        let data = self.render_output(&output);
        if data.text.is_empty() {
            return Ok(());
        }
        if data.space {
            w.write_all(b" ")?;
        }
        w.write_all(data.text.as_bytes())?;
        Ok(())
    }

    pub(crate) fn render_output(&self, output: &Output<'_>) -> OutputToken {
        use Output::*;
        match output {
            StartTagOpen(element) => OutputToken {
                space: false,
                text: format!("<{}", element.name()),
            },
            StartTagClose => OutputToken {
                space: false,
                text: ">".to_string(),
            },
            EndTag(element) => {
                if self.void_names.matches(element.name()) {
                    // void elements don't get their end tag, so we just emit an
                    // empty string
                    OutputToken {
                        space: false,
                        text: "".to_string(),
                    }
                } else {
                    OutputToken {
                        space: false,
                        text: format!("</{}>", element.name()),
                    }
                }
            }
            // blank attributes render as the empty string and are skipped
            Attribute(attribute) => OutputToken {
                space: true,
                text: attribute.to_string(),
            },
            // text is escaped everywhere, script and style included
            Text(text) => OutputToken {
                space: false,
                text: serialize_text(Cow::Borrowed(*text)).into_owned(),
            },
            Html(html) => OutputToken {
                space: false,
                text: html.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::HtmlAttribute;
    use crate::markup::Markup;
    use crate::output::gen_outputs;

    fn serialize(markup: &Markup, node: Node) -> String {
        let mut buf = Vec::new();
        let mut serializer = HtmlSerializer::new();
        serializer
            .serialize(&mut buf, gen_outputs(markup, node))
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_void_element() {
        let mut markup = Markup::new();
        let attributes = vec![HtmlAttribute::new("type", "text").unwrap()];
        let input = markup.new_element("input", attributes);
        assert_eq!(serialize(&markup, input), r#"<input type="text">"#);
    }

    #[test]
    fn test_void_element_uppercase() {
        let mut markup = Markup::new();
        let br = markup.new_element("BR", vec![]);
        assert_eq!(serialize(&markup, br), "<BR>");
    }

    #[test]
    fn test_blank_attribute_skipped() {
        let mut markup = Markup::new();
        let attributes = vec![
            HtmlAttribute::new("id", "").unwrap(),
            HtmlAttribute::new("disabled", false).unwrap(),
            HtmlAttribute::new("class", "x").unwrap(),
        ];
        let div = markup.new_element("div", attributes);
        assert_eq!(serialize(&markup, div), r#"<div class="x"></div>"#);
    }

    #[test]
    fn test_text_escaped() {
        let mut markup = Markup::new();
        let p = markup.new_element("p", vec![]);
        let text = markup.new_text("1 < 2 & 3");
        markup.append(p, text);
        assert_eq!(serialize(&markup, p), "<p>1 &lt; 2 &amp; 3</p>");
    }

    #[test]
    fn test_script_text_escaped() {
        let mut markup = Markup::new();
        let script = markup.new_element("script", vec![]);
        let text = markup.new_text("</script><img src=x>");
        markup.append(script, text);
        assert_eq!(
            serialize(&markup, script),
            "<script>&lt;/script&gt;&lt;img src=x&gt;</script>"
        );
    }

    #[test]
    fn test_script_html_passthrough() {
        let mut markup = Markup::new();
        let script = markup.new_element("SCRIPT", vec![]);
        let html = markup.new_html("if (a < b) {}");
        markup.append(script, html);
        assert_eq!(
            serialize(&markup, script),
            "<SCRIPT>if (a < b) {}</SCRIPT>"
        );
    }

    #[test]
    fn test_is_void_element() {
        assert!(is_void_element("img"));
        assert!(is_void_element("Input"));
        assert!(!is_void_element("div"));
    }

    #[test]
    fn test_html_passthrough() {
        let mut markup = Markup::new();
        let span = markup.new_element("span", vec![]);
        let html = markup.new_html("<b>bold</b>");
        markup.append(span, html);
        assert_eq!(serialize(&markup, span), "<span><b>bold</b></span>");
    }
}
