// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Synthesis Prompt Engine
//!
//! Handlebars bank of questions that push a reader to connect two domains.
//!
//! # Placeholders
//!
//! - `{{anchor}}` - display name of the familiar domain
//! - `{{distant}}` - display name of the far domain
//!
//! Names are inserted verbatim; no HTML escaping is applied.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Built-in question bank.
pub const DEFAULT_SYNTHESIS_TEMPLATES: [&str; 15] = [
    "What mechanism from {{anchor}} could explain an unsolved problem in {{distant}}?",
    "What would a {{anchor}} expert find most confusing about {{distant}}?",
    "If {{distant}} practitioners used {{anchor}}'s methods, what would they discover?",
    "What assumption in {{distant}} would {{anchor}} challenge first?",
    "How would you explain {{anchor}}'s core insight using only {{distant}}'s vocabulary?",
    "What would break if you applied {{anchor}}'s logic to {{distant}}'s domain?",
    "Where is the hidden isomorphism between {{anchor}} and {{distant}}?",
    "What does {{anchor}} measure that {{distant}} ignores?",
    "If {{anchor}} and {{distant}} merged, what new field would emerge?",
    "What would {{anchor}} practitioners do differently if they knew {{distant}}?",
    "What blind spot does {{anchor}} have that {{distant}} could illuminate?",
    "What controversy in {{distant}} would {{anchor}} resolve trivially?",
    "What tool from {{anchor}} would be revolutionary in {{distant}}?",
    "Where does {{anchor}}'s framework fail when applied to {{distant}}?",
    "What would a textbook written from both perspectives look like?",
];

#[derive(Debug, Clone, Serialize)]
struct PairContext<'a> {
    anchor: &'a str,
    distant: &'a str,
}

pub struct SynthesisPromptEngine {
    handlebars: Handlebars<'static>,
    templates: Vec<String>,
}

impl SynthesisPromptEngine {
    /// Engine over [`DEFAULT_SYNTHESIS_TEMPLATES`].
    pub fn new() -> Self {
        Self {
            handlebars: Self::configured_handlebars(),
            templates: DEFAULT_SYNTHESIS_TEMPLATES.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Engine over a caller-supplied bank. Every template must compile and
    /// the bank must not be empty.
    pub fn with_templates<I, S>(templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates: Vec<String> = templates.into_iter().map(Into::into).collect();
        if templates.is_empty() {
            anyhow::bail!("Synthesis template bank is empty");
        }

        let engine = Self {
            handlebars: Self::configured_handlebars(),
            templates,
        };
        for template in &engine.templates {
            engine.validate_template(template)?;
        }
        Ok(engine)
    }

    fn configured_handlebars() -> Handlebars<'static> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render one template with the two domain names.
    pub fn render(&self, template: &str, anchor: &str, distant: &str) -> Result<String> {
        self.handlebars
            .render_template(template, &PairContext { anchor, distant })
            .context("Failed to render synthesis template")
    }

    /// Render the template at `index` in the bank.
    pub fn render_at(&self, index: usize, anchor: &str, distant: &str) -> Result<String> {
        let template = self
            .templates
            .get(index)
            .with_context(|| format!("No synthesis template at index {}", index))?;
        self.render(template, anchor, distant)
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        handlebars::template::Template::compile(template)
            .map(|_| ())
            .context("Invalid Handlebars template syntax")
    }
}

impl Default for SynthesisPromptEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_default_template_renders() {
        let engine = SynthesisPromptEngine::new();
        assert_eq!(engine.len(), 15);

        for index in 0..engine.len() {
            let rendered = engine.render_at(index, "Physics", "Theology").unwrap();
            assert!(!rendered.contains("{{"), "unrendered placeholder in {}", rendered);
        }
    }

    #[test]
    fn test_names_are_not_html_escaped() {
        let engine = SynthesisPromptEngine::new();
        let rendered = engine
            .render("Where is the hidden isomorphism between {{anchor}} and {{distant}}?", "Law & Policy", "Arts <Design>")
            .unwrap();
        assert_eq!(
            rendered,
            "Where is the hidden isomorphism between Law & Policy and Arts <Design>?"
        );
    }

    #[test]
    fn test_possessive_templates() {
        let engine = SynthesisPromptEngine::new();
        let rendered = engine.render_at(2, "Ecology", "Economics").unwrap();
        assert_eq!(
            rendered,
            "If Economics practitioners used Ecology's methods, what would they discover?"
        );
    }

    #[test]
    fn test_custom_bank_validation() {
        assert!(SynthesisPromptEngine::with_templates(Vec::<String>::new()).is_err());
        assert!(SynthesisPromptEngine::with_templates(["Broken {{#if anchor}} block"]).is_err());

        let engine = SynthesisPromptEngine::with_templates(["{{anchor}} meets {{distant}}"]).unwrap();
        assert_eq!(engine.render_at(0, "A", "B").unwrap(), "A meets B");
        assert!(engine.render_at(1, "A", "B").is_err());
    }
}
