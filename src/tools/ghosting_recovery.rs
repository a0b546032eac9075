// src/tools/ghosting_recovery.rs
use super::schema::{array_of, integer, object, one_of, string, string_array, tool_result};
use super::{ImageField, OptionLabel, ParamSpec, ToolSpec};
use serde_json::Value;

const INTENTS: &[OptionLabel] = &[
    OptionLabel { value: "revive", label: "Revive the conversation" },
    OptionLabel { value: "why_ghosted", label: "Understand why they went quiet" },
    OptionLabel { value: "closure", label: "Get closure gracefully" },
];

const PERSPECTIVES: &[OptionLabel] = &[
    OptionLabel { value: "playful", label: "Light and playful" },
    OptionLabel { value: "direct", label: "Direct and confident" },
    OptionLabel { value: "sincere", label: "Sincere and low-pressure" },
];

const APPROACHES: &[&str] = &["callback", "playful", "direct", "sincere", "closure"];

pub static TOOL: ToolSpec = ToolSpec {
    slug: "ghosting-recovery",
    schema_name: "ghosting_recovery",
    image_field: ImageField::Array,
    max_images: 3,
    params: &[
        ParamSpec { name: "analysisIntent", default: "revive", options: INTENTS },
        ParamSpec { name: "perspective", default: "playful", options: PERSPECTIVES },
    ],
    template: TEMPLATE,
    schema,
};

const TEMPLATE: &str = r#"You are a calm, emotionally intelligent dating coach. The user has been ghosted or left on read.

You have been given {image_count} image(s). First, check that every image is a screenshot of a text or chat conversation. If they are not, respond with exactly this JSON and set "error" to a short explanation of what was wrong:
{empty_result}

Otherwise, read the conversation up to the point it went quiet, treating the images as consecutive parts of the same chat in the order given.
- What the user wants: {analysisIntent}
- Style of message the user is comfortable sending: {perspective}
- Notes from the user: {notes}

Estimate from 0 to 100 how likely it is that the silence is intentional, give the most plausible reasons based on what was actually said, and write exactly three follow-up messages the user could send. Add a short list of things the user should not send, and advice on timing.

Respond strictly with JSON matching the provided schema. Do not add any other text."#;

pub fn schema() -> Value {
    tool_result(vec![
        ("ghostingLikelihood", integer(0, 100)),
        ("likelyReasons", string_array(1, 3)),
        (
            "recoveryMessages",
            array_of(
                object(vec![("message", string()), ("approach", one_of(APPROACHES))]),
                3,
                3,
            ),
        ),
        ("doNotSend", string_array(1, 3)),
        ("timingAdvice", string()),
    ])
}
