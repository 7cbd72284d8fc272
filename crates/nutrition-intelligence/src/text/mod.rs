// ABOUTME: Narrative text collaborator: injectable translator, template renderer, seeded phrase selection
// ABOUTME: Built-in English templates back every key so analytics never depend on a global catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

//! # Text Rendering
//!
//! Every user-visible sentence produced by the engines is addressed by a stable
//! key such as `insight.temporal.weekend_shift`. A [`Translator`] supplies the
//! template for a key; keys it does not know fall back to the built-in English
//! [`BuiltinCatalog`]. Templates use `{name}` placeholders.
//!
//! [`PhraseSelector`] replaces ad-hoc random phrase choice with a seeded source
//! so narrative output is reproducible under test.

mod catalog;

pub use catalog::BuiltinCatalog;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::sync::Arc;

/// Source of localized templates
pub trait Translator: Send + Sync {
    /// Template for `key`, `None` when this translator has no entry
    fn translate(&self, key: &str) -> Option<String>;
}

/// Renders keyed templates through an injected translator
#[derive(Clone)]
pub struct TextRenderer {
    translator: Arc<dyn Translator>,
}

impl fmt::Debug for TextRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextRenderer").finish_non_exhaustive()
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::english()
    }
}

impl TextRenderer {
    /// Renderer backed by `translator`, falling back to English
    #[must_use]
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Renderer using only the built-in English templates
    #[must_use]
    pub fn english() -> Self {
        Self::new(Arc::new(BuiltinCatalog))
    }

    /// Template for `key`: translator first, then English, then the key itself
    #[must_use]
    pub fn template(&self, key: &str) -> String {
        self.translator
            .translate(key)
            .or_else(|| BuiltinCatalog.translate(key))
            .unwrap_or_else(|| key.to_owned())
    }

    /// Render `key` with `{name}` placeholders replaced from `args`
    #[must_use]
    pub fn render(&self, key: &str, args: &[(&str, String)]) -> String {
        args.iter()
            .fold(self.template(key), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }

    /// Render a key without placeholders
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.template(key)
    }
}

/// Format a `[0, 1]` fraction as a whole percentage
#[must_use]
pub fn percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Deterministic phrase chooser over a seeded `ChaCha8` stream
#[derive(Debug, Clone)]
pub struct PhraseSelector {
    rng: ChaCha8Rng,
}

impl PhraseSelector {
    /// Selector with a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Selector from an existing generator
    #[must_use]
    pub const fn from_rng(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }

    /// Choose one of `options`, `None` when empty
    pub fn pick<'a>(&mut self, options: &[&'a str]) -> Option<&'a str> {
        options.choose(&mut self.rng).copied()
    }
}

impl Default for PhraseSelector {
    fn default() -> Self {
        Self::seeded(0)
    }
}
