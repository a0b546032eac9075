// src/tools/tone_analyzer.rs
use super::schema::{array_of, integer, object, string, string_array, tool_result};
use super::{ImageField, OptionLabel, ParamSpec, ToolSpec};
use serde_json::Value;

const INTENTS: &[OptionLabel] = &[
    OptionLabel { value: "interest_level", label: "Are they actually into me?" },
    OptionLabel { value: "vibe_check", label: "Overall vibe check" },
    OptionLabel { value: "red_flags", label: "Spot red flags" },
    OptionLabel { value: "next_move", label: "What should I say next?" },
];

const PERSPECTIVES: &[OptionLabel] = &[
    OptionLabel { value: "balanced", label: "Balanced and fair" },
    OptionLabel { value: "brutally_honest", label: "Brutally honest best friend" },
    OptionLabel { value: "supportive", label: "Supportive hype-man" },
    OptionLabel { value: "their_side", label: "From the other person's point of view" },
];

pub static TOOL: ToolSpec = ToolSpec {
    slug: "tone-analyzer",
    schema_name: "tone_analysis",
    image_field: ImageField::Array,
    max_images: 3,
    params: &[
        ParamSpec { name: "analysisIntent", default: "interest_level", options: INTENTS },
        ParamSpec { name: "perspective", default: "balanced", options: PERSPECTIVES },
    ],
    template: TEMPLATE,
    schema,
};

const TEMPLATE: &str = r#"You are an expert in reading texting dynamics between people who are dating or talking.

You have been given {image_count} image(s). First, check that every image is a screenshot of a text or chat conversation. If they are not, respond with exactly this JSON and set "error" to a short explanation of what was wrong:
{empty_result}

Otherwise, analyze the tone of the conversation as a whole, treating the images as consecutive parts of the same chat in the order given.
- What the user wants to know: {analysisIntent}
- Perspective to answer from: {perspective}
- Notes from the user: {notes}

Score how interested the other person seems from 0 to 100, break the overall tone into a few labeled parts that add up to 100 percent, list concrete red and green flags you can point to in the messages, and finish with a specific next move.

Respond strictly with JSON matching the provided schema. Do not add any other text."#;

pub fn schema() -> Value {
    tool_result(vec![
        ("overallTone", string()),
        ("interestLevel", integer(0, 100)),
        (
            "toneBreakdown",
            array_of(
                object(vec![("label", string()), ("percentage", integer(0, 100))]),
                1,
                5,
            ),
        ),
        ("redFlags", string_array(0, 5)),
        ("greenFlags", string_array(0, 5)),
        ("summary", string()),
        ("suggestedNextMove", string()),
    ])
}
