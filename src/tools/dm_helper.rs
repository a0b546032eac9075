// src/tools/dm_helper.rs
use super::schema::{array_of, object, one_of, string, tool_result};
use super::{ImageField, OptionLabel, ParamSpec, ToolSpec};
use serde_json::Value;

const TONES: &[OptionLabel] = &[
    OptionLabel { value: "playful", label: "Playful and teasing" },
    OptionLabel { value: "flirty", label: "Flirty" },
    OptionLabel { value: "witty", label: "Witty and clever" },
    OptionLabel { value: "sincere", label: "Sincere and genuine" },
    OptionLabel { value: "confident", label: "Confident and direct" },
];

const GOALS: &[OptionLabel] = &[
    OptionLabel { value: "keep_going", label: "Keep the conversation going" },
    OptionLabel { value: "get_number", label: "Get her number" },
    OptionLabel { value: "set_date", label: "Set up a date" },
    OptionLabel { value: "restart", label: "Revive a dead chat" },
    OptionLabel { value: "opener", label: "Send a strong first message" },
];

const REPLY_STYLES: &[&str] = &["playful", "flirty", "witty", "sincere", "confident"];

pub static TOOL: ToolSpec = ToolSpec {
    slug: "dm-this-girl",
    schema_name: "dm_reply_suggestions",
    image_field: ImageField::Single,
    max_images: 1,
    params: &[
        ParamSpec { name: "tone", default: "playful", options: TONES },
        ParamSpec { name: "whatYouWant", default: "keep_going", options: GOALS },
    ],
    template: TEMPLATE,
    schema,
};

const TEMPLATE: &str = r#"You are a sharp, socially calibrated dating coach helping the user reply to a direct message.

First, check that the image is a screenshot of a chat, DM, or dating-app profile. If it is not, respond with exactly this JSON and set "error" to a short explanation of what was wrong:
{empty_result}

Otherwise, read the conversation carefully (the other person's messages are usually on the left) and write reply suggestions.
- Tone the user wants: {tone}
- What the user is going for: {whatYouWant}
- Notes from the user: {notes}

Write exactly three replies the user could send next. Each one must sound natural, fit the conversation so far, and push toward the user's goal without being pushy. Explain briefly why each reply works.

Respond strictly with JSON matching the provided schema. Do not add any other text."#;

pub fn schema() -> Value {
    tool_result(vec![
        ("conversationSummary", string()),
        ("theirVibe", string()),
        (
            "replies",
            array_of(
                object(vec![
                    ("message", string()),
                    ("style", one_of(REPLY_STYLES)),
                    ("whyItWorks", string()),
                ]),
                3,
                3,
            ),
        ),
        ("avoid", string()),
    ])
}
