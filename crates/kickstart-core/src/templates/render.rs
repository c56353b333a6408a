//! Placeholder substitution for template paths and bodies
//!
//! Templates use `{{ name }}` tokens. Only tokens whose name is a known
//! context key are replaced; everything else passes through untouched. That
//! matters because generated Django HTML carries Django's own `{{ }}` and
//! `{% %}` syntax, which must survive rendering verbatim.

use std::collections::BTreeMap;

/// Placeholder name to value mapping for one invocation
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    values: BTreeMap<&'static str, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Substitute every known `{{ key }}` token in `template`
pub fn render(template: &str, ctx: &RenderContext) -> String {
    let mut out = template.to_string();
    for (key, value) in ctx.iter() {
        let token = format!("{{{{ {key} }}}}");
        if out.contains(&token) {
            out = out.replace(&token, value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        let mut ctx = RenderContext::new();
        ctx.insert("project_name", "demo");
        ctx.insert("app_name", "core");
        ctx
    }

    #[test]
    fn test_known_tokens_replaced() {
        let out = render("cd {{ project_name }} && ls {{ app_name }}", &ctx());
        assert_eq!(out, "cd demo && ls core");
    }

    #[test]
    fn test_repeated_token_replaced_everywhere() {
        let out = render("{{ app_name }}/templates/{{ app_name }}/home.html", &ctx());
        assert_eq!(out, "core/templates/core/home.html");
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        // Django template syntax in generated HTML must survive rendering
        let body = "{% block title %}{{ item.name }}{% endblock %} in {{ project_name }}";
        let out = render(body, &ctx());
        assert_eq!(out, "{% block title %}{{ item.name }}{% endblock %} in demo");
    }

    #[test]
    fn test_plain_text_untouched() {
        let body = "no placeholders here";
        assert_eq!(render(body, &ctx()), body);
    }
}
