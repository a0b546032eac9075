// src/tools/deescalator.rs
use super::schema::{array_of, integer, object, one_of, string, string_array, tool_result};
use super::{ImageField, ToolSpec};
use serde_json::Value;

const STRATEGIES: &[&str] = &["validate", "apologize", "clarify", "pause", "boundary"];

pub static TOOL: ToolSpec = ToolSpec {
    slug: "deescalator-help",
    schema_name: "deescalation_help",
    image_field: ImageField::Array,
    max_images: 3,
    params: &[],
    template: TEMPLATE,
    schema,
};

const TEMPLATE: &str = r#"You are a conflict-resolution coach helping the user calm down a tense conversation with someone they are dating.

You have been given {image_count} image(s). First, check that every image is a screenshot of a text or chat conversation. If they are not, respond with exactly this JSON and set "error" to a short explanation of what was wrong:
{empty_result}

Otherwise, read the argument, treating the images as consecutive parts of the same chat in the order given.
- Notes from the user: {notes}

Summarize what the conflict is actually about, rate the tension from 0 to 100, and explain how the other person probably sees it. Write exactly three replies that lower the temperature without the user giving up what matters to them, and list what to avoid saying.

Respond strictly with JSON matching the provided schema. Do not add any other text."#;

pub fn schema() -> Value {
    tool_result(vec![
        ("conflictSummary", string()),
        ("tensionLevel", integer(0, 100)),
        ("theirPerspective", string()),
        (
            "responses",
            array_of(
                object(vec![("message", string()), ("strategy", one_of(STRATEGIES))]),
                3,
                3,
            ),
        ),
        ("avoid", string_array(1, 3)),
    ])
}
