use boothelp::{button, horizontal, HtmlAttribute, Options, Scope};
use proptest::prelude::*;

const VALID_CONTEXTS: &[&str] = &["primary", "success", "info", "warning", "danger", "link"];

fn context_tokens(class: &HtmlAttribute) -> Vec<String> {
    let mut tokens = Vec::new();
    for token in class.tokens() {
        if let Some(rest) = token.strip_prefix("btn-") {
            if VALID_CONTEXTS.contains(&rest) || rest == "default" {
                tokens.push(token.clone());
            }
        }
    }
    tokens
}

proptest! {
    #[test]
    fn test_valid_context_appears_once(context in prop::sample::select(VALID_CONTEXTS)) {
        let tag = button(&Scope::new(), "x", Options::new().with("context", context)).unwrap();
        let class = tag.attribute("class").unwrap();
        prop_assert_eq!(context_tokens(class), vec![format!("btn-{}", context)]);
    }
}

proptest! {
    #[test]
    fn test_invalid_context_is_default(context in "[a-z_]{0,12}") {
        prop_assume!(!VALID_CONTEXTS.contains(&context.as_str()));
        let tag = button(&Scope::new(), "x", Options::new().with("context", context)).unwrap();
        let class = tag.attribute("class").unwrap();
        prop_assert_eq!(context_tokens(class), vec!["btn-default".to_string()]);
    }
}

proptest! {
    #[test]
    fn test_block_class_only_for_block_layout(layout in "[a-z]{0,8}") {
        let tag = button(&Scope::new(), "x", Options::new().with("layout", layout.as_str())).unwrap();
        let class = tag.attribute("class").unwrap();
        prop_assert_eq!(class.has_value("btn-block"), layout == "block");
    }
}

proptest! {
    #[test]
    fn test_horizontal_id_is_navbar_id(navbar_id in "[a-z][a-z0-9-]{0,15}") {
        let scope = Scope::new().in_navbar(navbar_id.clone());
        let tag = horizontal(&scope, "x", Options::new()).unwrap();
        let html = tag.to_html().unwrap();
        let expected_id = format!(r#"id="{}""#, navbar_id);
        prop_assert!(html.contains(r#"class="collapse navbar-collapse""#));
        prop_assert!(html.contains(&expected_id));
    }
}
