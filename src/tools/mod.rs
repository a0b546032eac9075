// src/tools/mod.rs
//! Registry of the coaching tools. Each tool is plain data fed to the shared
//! analysis pipeline.

pub mod deescalator;
pub mod dm_helper;
pub mod ghosting_recovery;
pub mod profile_roast;
pub mod schema;
pub mod tone_analyzer;

use serde_json::Value;

/// Where the request body carries its images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageField {
    /// `image: string`
    Single,
    /// `images: string[]`
    Array,
}

impl ImageField {
    pub fn key(self) -> &'static str {
        match self {
            ImageField::Single => "image",
            ImageField::Array => "images",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OptionLabel {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: &'static str,
    pub options: &'static [OptionLabel],
}

impl ParamSpec {
    /// Human readable label for `value`, or the raw value when it is not one
    /// of the known options.
    pub fn label_for<'a>(&self, value: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
            .unwrap_or(value)
    }
}

pub struct ToolSpec {
    pub slug: &'static str,
    pub schema_name: &'static str,
    pub image_field: ImageField,
    pub max_images: usize,
    pub params: &'static [ParamSpec],
    pub template: &'static str,
    pub schema: fn() -> Value,
}

impl std::fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSpec")
            .field("slug", &self.slug)
            .field("image_field", &self.image_field)
            .field("max_images", &self.max_images)
            .finish()
    }
}

pub static TOOLS: [&ToolSpec; 5] = [
    &dm_helper::TOOL,
    &tone_analyzer::TOOL,
    &ghosting_recovery::TOOL,
    &profile_roast::TOOL,
    &deescalator::TOOL,
];

pub fn find(slug: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().copied().find(|tool| tool.slug == slug)
}
