use anyhow::Context;
use handlebars::Handlebars;
use serde::Serialize;

const TEMPLATES: [(&str, &str); 4] = [
    ("index", include_str!("../templates/index.hbs")),
    ("form", include_str!("../templates/form.hbs")),
    ("result", include_str!("../templates/result.hbs")),
    ("error", include_str!("../templates/error.hbs")),
];

const PARTIALS: [(&str, &str); 2] = [
    ("head", include_str!("../templates/partials/head.hbs")),
    ("footer", include_str!("../templates/partials/footer.hbs")),
];

/// Compiled page templates. Built once at startup and shared read-only.
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> anyhow::Result<Self> {
        let mut registry = Handlebars::new();
        for (name, source) in PARTIALS {
            registry
                .register_partial(name, source)
                .with_context(|| format!("failed to register partial {name}"))?;
        }
        for (name, source) in TEMPLATES {
            registry
                .register_template_string(name, source)
                .with_context(|| format!("failed to compile template {name}"))?;
        }
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> anyhow::Result<String> {
        self.registry
            .render(name, context)
            .with_context(|| format!("failed to render template {name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_templates_compile() {
        let renderer = Renderer::new().unwrap();
        for (name, _) in TEMPLATES {
            assert!(renderer.registry.has_template(name), "{name}");
        }
    }

    #[test]
    fn values_are_html_escaped() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render(
                "error",
                &json!({
                    "lang": "en",
                    "title": "t",
                    "lead": "l",
                    "messages": ["<script>alert(1)</script>"],
                    "back_href": "/form?lang=en",
                    "back_label": "back",
                }),
            )
            .unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }
}
