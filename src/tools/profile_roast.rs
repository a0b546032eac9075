// src/tools/profile_roast.rs
use super::schema::{array_of, integer, object, one_of, string, string_array, tool_result};
use super::{ImageField, OptionLabel, ParamSpec, ToolSpec};
use serde_json::Value;

const INTENTS: &[OptionLabel] = &[
    OptionLabel { value: "brutal_but_helpful", label: "Brutal but helpful" },
    OptionLabel { value: "gentle", label: "Gentle and encouraging" },
    OptionLabel { value: "savage", label: "Full savage mode" },
];

const FOCUS_AREAS: &[OptionLabel] = &[
    OptionLabel { value: "all", label: "The whole profile" },
    OptionLabel { value: "photos", label: "Photos" },
    OptionLabel { value: "bio", label: "Bio and prompts" },
    OptionLabel { value: "first_impression", label: "First impression" },
];

const TARGETS: &[&str] = &["photos", "bio", "prompts", "overall"];

pub static TOOL: ToolSpec = ToolSpec {
    slug: "profile-roast",
    schema_name: "profile_roast",
    image_field: ImageField::Array,
    max_images: 1,
    params: &[
        ParamSpec { name: "roastIntent", default: "brutal_but_helpful", options: INTENTS },
        ParamSpec { name: "focusArea", default: "all", options: FOCUS_AREAS },
    ],
    template: TEMPLATE,
    schema,
};

const TEMPLATE: &str = r#"You are a witty dating-profile reviewer who roasts profiles so people can fix them.

First, check that the image is a screenshot of a dating-app profile. If it is not, respond with exactly this JSON and set "error" to a short explanation of what was wrong:
{empty_result}

Otherwise, review the profile.
- Roast style: {roastIntent}
- Focus on: {focusArea}
- Notes from the user: {notes}

Give the profile a score from 0 to 100. Write between three and five roasts, each aimed at something specific you can see, and pair every roast with a concrete fix. Name up to three genuine strengths, and say which single fix matters most. Keep it funny, never cruel about things people cannot change.

Respond strictly with JSON matching the provided schema. Do not add any other text."#;

pub fn schema() -> Value {
    tool_result(vec![
        ("profileScore", integer(0, 100)),
        ("roastSummary", string()),
        (
            "roasts",
            array_of(
                object(vec![
                    ("target", one_of(TARGETS)),
                    ("roast", string()),
                    ("fix", string()),
                ]),
                3,
                5,
            ),
        ),
        ("strengths", string_array(1, 3)),
        ("topPriorityFix", string()),
    ])
}
