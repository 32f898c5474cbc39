//! Template compilation and execution.

use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext as HbRenderContext,
    RenderErrorReason,
    template::{HelperTemplate, Parameter, Template, TemplateElement},
};
use serde_json::Value;

use crate::{Args, BindingOptions, Error, Helpers, LanguageBinding, RenderContext};

/// Helpers every Handlebars registry provides.
const BUILTIN_HELPERS: &[&str] = &[
    "if", "unless", "each", "with", "lookup", "raw", "log", "eq", "ne", "gt", "gte", "lt", "lte",
    "and", "or", "not", "len",
];

/// One compiled template with a binding's helpers registered.
///
/// Strict mode is on, so a reference to a missing field fails the render
/// instead of producing an empty string. HTML escaping is off. A call to a
/// helper that is neither built in nor bound fails compilation.
pub struct TemplateRenderer {
    name: String,
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Compile `text` under `name` with the helpers of `binding`.
    pub fn compile(
        name: &str,
        text: &str,
        binding: &dyn LanguageBinding,
        options: &BindingOptions,
    ) -> Result<Self, Error> {
        Self::with_helpers(name, text, binding.helpers(options))
    }

    /// Compile `text` with an explicit helper set.
    pub fn with_helpers(name: &str, text: &str, helpers: Helpers) -> Result<Self, Error> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        register_helpers(&mut registry, &helpers);

        registry
            .register_template_string(name, text)
            .map_err(|source| Error::Compile {
                template: name.to_string(),
                source: Box::new(source),
            })?;

        let unknown = registry
            .get_template(name)
            .and_then(|template| unknown_helper(template, &helpers));
        if let Some(helper) = unknown {
            return Err(Error::UnknownHelper {
                template: name.to_string(),
                helper,
            });
        }

        Ok(Self {
            name: name.to_string(),
            registry,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Execute the template against `context`.
    pub fn render(&self, context: &RenderContext<'_>) -> Result<String, Error> {
        self.registry
            .render(&self.name, context)
            .map_err(|source| Error::Render {
                template: self.name.clone(),
                source: Box::new(source),
            })
    }
}

fn register_helpers(registry: &mut Handlebars<'static>, helpers: &Helpers) {
    for (name, helper) in helpers.iter() {
        let helper = helper.clone();
        registry.register_helper(
            name,
            Box::new(
                move |h: &Helper,
                      _: &Handlebars,
                      _: &Context,
                      _: &mut HbRenderContext,
                      out: &mut dyn Output|
                      -> HelperResult {
                    let values: Vec<&Value> = h.params().iter().map(|p| p.value()).collect();
                    let args = Args::new(h.name(), values);
                    let rendered = helper(&args).map_err(|e| {
                        RenderErrorReason::Other(format!("helper '{}': {}", h.name(), e))
                    })?;
                    out.write(&rendered)?;
                    Ok(())
                },
            ),
        );
    }
}

/// First helper called in `template` that is not registered.
fn unknown_helper(template: &Template, helpers: &Helpers) -> Option<String> {
    template
        .elements
        .iter()
        .find_map(|element| unknown_in_element(element, helpers))
}

fn unknown_in_element(element: &TemplateElement, helpers: &Helpers) -> Option<String> {
    match element {
        TemplateElement::Expression(call)
        | TemplateElement::HtmlExpression(call)
        | TemplateElement::HelperBlock(call) => unknown_in_call(call, helpers),
        _ => None,
    }
}

fn unknown_in_call(call: &HelperTemplate, helpers: &Helpers) -> Option<String> {
    // `{{name}}` without arguments is a field lookup.
    let is_call = call.block || !call.params.is_empty() || !call.hash.is_empty();
    let unregistered = call
        .name
        .as_name()
        .filter(|name| is_call && !BUILTIN_HELPERS.contains(name) && !helpers.contains(name));
    if let Some(name) = unregistered {
        return Some(name.to_string());
    }

    call.params
        .iter()
        .chain(call.hash.values())
        .find_map(|param| match param {
            Parameter::Subexpression(sub) => unknown_in_element(sub.as_element(), helpers),
            _ => None,
        })
        .or_else(|| call.template.as_ref().and_then(|t| unknown_helper(t, helpers)))
        .or_else(|| call.inverse.as_ref().and_then(|t| unknown_helper(t, helpers)))
}

#[cfg(test)]
mod tests {
    use revgen_schema::{Column, Table};

    use super::*;
    use crate::{ImportMap, testing::StubBinding};

    fn render(text: &str, tables: &[&Table]) -> Result<String, Error> {
        let renderer =
            TemplateRenderer::compile("test.tpl", text, &StubBinding, &BindingOptions::default())?;
        let context = RenderContext::new(tables, "", ImportMap::new(), "model");
        renderer.render(&context)
    }

    #[test]
    fn test_render_with_helpers() {
        let users = Table::new("user_accounts").with_column(Column::new("id", "bigint"));
        let out = render(
            "package {{model}}\n{{#each tables}}type {{pascal name}} struct{}{{/each}}",
            &[&users],
        )
        .unwrap();
        assert_eq!(out, "package model\ntype UserAccounts struct{}");
    }

    #[test]
    fn test_no_html_escaping() {
        let users = Table::new("a<b>");
        let out = render("{{#each tables}}{{name}}{{/each}}", &[&users]).unwrap();
        assert_eq!(out, "a<b>");
    }

    #[test]
    fn test_parse_error_names_template() {
        let err = render("{{#each tables}}", &[]).unwrap_err();
        match err {
            Error::Compile { template, .. } => assert_eq!(template, "test.tpl"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_is_render_error() {
        let err = render("{{nope}}", &[]).unwrap_err();
        assert!(matches!(err, Error::Render { .. }));
    }

    fn compile(text: &str) -> Result<TemplateRenderer, Error> {
        TemplateRenderer::compile("test.tpl", text, &StubBinding, &BindingOptions::default())
    }

    fn unknown(text: &str) -> Option<String> {
        match compile(text) {
            Err(Error::UnknownHelper { template, helper }) => {
                assert_eq!(template, "test.tpl");
                Some(helper)
            }
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => None,
        }
    }

    #[test]
    fn test_unknown_helper_fails_compilation() {
        assert_eq!(unknown("{{frobnicate model}}").as_deref(), Some("frobnicate"));
    }

    #[test]
    fn test_unknown_helper_in_unexecuted_block_fails_compilation() {
        let text = "{{#each tables}}{{frobnicate name}}{{/each}}";
        assert_eq!(unknown(text).as_deref(), Some("frobnicate"));
    }

    #[test]
    fn test_unknown_helper_found_in_nested_positions() {
        assert_eq!(unknown("{{pascal (frob model)}}").as_deref(), Some("frob"));
        assert_eq!(
            unknown("{{#if model}}ok{{else}}{{nope model}}{{/if}}").as_deref(),
            Some("nope")
        );
        assert_eq!(unknown("{{#frob model}}x{{/frob}}").as_deref(), Some("frob"));
        assert_eq!(unknown("{{{frob model}}}").as_deref(), Some("frob"));
    }

    #[test]
    fn test_known_helpers_and_lookups_compile() {
        assert_eq!(unknown("{{model}} {{pascal model}} {{shout model}}"), None);
        assert_eq!(
            unknown("{{#each tables}}{{#if (eq name model)}}{{lookup this \"name\"}}{{/if}}{{/each}}"),
            None
        );
        assert_eq!(unknown("{{#unless model}}{{len tables}}{{/unless}}"), None);
    }

    #[test]
    fn test_helper_error_is_render_error() {
        let err = render("{{pascal 42}}", &[]).unwrap_err();
        assert!(err.chain().contains("'pascal' expects a string"));
    }

    #[test]
    fn test_failing_helper_names_itself() {
        let err = render("{{fail model}}", &[]).unwrap_err();
        assert!(err.chain().contains("helper 'fail': always fails"));
    }
}
