/// Ambient settings that an enclosing component passes down to helpers.
///
/// A navbar sets its id so that buttons inside it get the `navbar-btn`
/// class and its collapsible panel gets the matching `id`; a justified button
/// group asks each button to wrap itself in its own group. Nested scopes are
/// derived values, so leaving a component needs no cleanup.
///
/// ```rust
/// use boothelp::Scope;
///
/// let scope = Scope::new().in_navbar("navbar-main");
/// assert_eq!(scope.navbar_id(), Some("navbar-main"));
/// assert!(!scope.justified_button_group());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Scope {
    navbar_id: Option<String>,
    justified_button_group: bool,
}

impl Scope {
    /// The top-level scope: no navbar, no button group.
    pub fn new() -> Self {
        Self::default()
    }

    /// A scope inside the navbar with the given id.
    pub fn in_navbar(&self, navbar_id: impl Into<String>) -> Self {
        Scope {
            navbar_id: Some(navbar_id.into()),
            ..self.clone()
        }
    }

    /// A scope inside a justified button group.
    pub fn in_justified_button_group(&self) -> Self {
        Scope {
            justified_button_group: true,
            ..self.clone()
        }
    }

    /// The id of the enclosing navbar. An empty id counts as no navbar.
    pub fn navbar_id(&self) -> Option<&str> {
        self.navbar_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn justified_button_group(&self) -> bool {
        self.justified_button_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scope() {
        let scope = Scope::new();
        assert_eq!(scope.navbar_id(), None);
        assert!(!scope.justified_button_group());
    }

    #[test]
    fn test_nested_scope_keeps_outer() {
        let outer = Scope::new().in_navbar("nav");
        let inner = outer.in_justified_button_group();
        assert_eq!(inner.navbar_id(), Some("nav"));
        assert!(inner.justified_button_group());
        // the outer scope is unchanged
        assert!(!outer.justified_button_group());
    }

    #[test]
    fn test_empty_navbar_id() {
        let scope = Scope::new().in_navbar("");
        assert_eq!(scope.navbar_id(), None);
    }
}
