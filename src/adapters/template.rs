use minijinja::{Environment, UndefinedBehavior};
use std::sync::OnceLock;

use crate::domain::{AppError, PromptContext, TemplateRenderer};

/// Template renderer using Minijinja.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &str,
        context: &PromptContext,
        template_name: &str,
    ) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        env.render_str(template, &context.variables)
            .map_err(|err| template_render_error(template_name, err))
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::PromptRender { template: template_name.to_string(), reason: err.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_variables() {
        let renderer = MinijinjaTemplateRenderer::new();
        let context = PromptContext::new().with_var("name", "world");

        let out = renderer.render("hello {{ name }}", &context, "greeting").unwrap();
        assert_eq!(out, "hello world");
    }

    #[test]
    fn undefined_variable_is_an_error() {
        let renderer = MinijinjaTemplateRenderer::new();

        let err = renderer.render("hello {{ missing }}", &PromptContext::new(), "greeting");
        match err {
            Err(AppError::PromptRender { template, .. }) => assert_eq!(template, "greeting"),
            other => panic!("expected render error, got {:?}", other),
        }
    }

    #[test]
    fn values_are_not_reinterpreted_as_template_syntax() {
        let renderer = MinijinjaTemplateRenderer::new();
        let context = PromptContext::new().with_var("topic", "{{ secret }} <b>&</b>");

        let out = renderer.render("Topic: {{ topic }}", &context, "t").unwrap();
        assert_eq!(out, "Topic: {{ secret }} <b>&</b>");
    }
}
