// src/services/prompt_builder.rs
use crate::tools::ToolSpec;
use crate::tools::schema::empty_instance;
use std::collections::{BTreeMap, HashMap};

/// Renders `template`, replacing `{name}` tokens with values from `vars`.
///
/// Single pass: substituted text is never rescanned and unknown tokens are
/// kept verbatim.
pub fn render(template: &str, vars: &HashMap<&str, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let token = after
            .find('}')
            .map(|close| &after[..close])
            .filter(|name| is_placeholder_name(name));

        match token.and_then(|name| vars.get(name).map(|value| (name, value))) {
            Some((name, value)) => {
                out.push_str(value);
                rest = &after[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Builds the instruction text for one request to `tool`.
///
/// Each parameter is resolved to its option label (the raw value when no
/// option matches, the tool default when absent). Notes go in verbatim.
pub fn build_prompt(
    tool: &ToolSpec,
    params: &BTreeMap<String, String>,
    notes: &str,
    image_count: usize,
) -> String {
    let mut vars: HashMap<&str, String> = HashMap::new();

    for param in tool.params {
        let value = params
            .get(param.name)
            .map(String::as_str)
            .unwrap_or(param.default);
        vars.insert(param.name, param.label_for(value).to_string());
    }

    vars.insert("notes", notes.to_string());
    vars.insert("image_count", image_count.to_string());
    vars.insert("empty_result", empty_instance(&(tool.schema)()).to_string());

    render(tool.template, &vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{profile_roast, tone_analyzer};

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn render_substitutes_known_tokens_only() {
        let mut vars = HashMap::new();
        vars.insert("name", "Sam".to_string());
        assert_eq!(
            render("hi {name}, {unknown} {not a token} {", &vars),
            "hi Sam, {unknown} {not a token} {"
        );
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let mut vars = HashMap::new();
        vars.insert("notes", "literally {tone}".to_string());
        vars.insert("tone", "flirty".to_string());
        assert_eq!(render("{notes} / {tone}", &vars), "literally {tone} / flirty");
    }

    #[test]
    fn build_is_deterministic() {
        let p = params(&[("analysisIntent", "red_flags"), ("perspective", "supportive")]);
        let first = build_prompt(&tone_analyzer::TOOL, &p, "she replies slowly", 2);
        let second = build_prompt(&tone_analyzer::TOOL, &p, "she replies slowly", 2);
        assert_eq!(first, second);
    }

    #[test]
    fn labels_notes_and_schema_are_embedded() {
        let p = params(&[("analysisIntent", "red_flags"), ("perspective", "supportive")]);
        let prompt = build_prompt(&tone_analyzer::TOOL, &p, "she replies slowly", 2);

        assert!(prompt.contains("Spot red flags"));
        assert!(prompt.contains("Supportive hype-man"));
        assert!(prompt.contains("she replies slowly"));
        assert!(prompt.contains("2 image(s)"));
        assert!(prompt.contains(r#""interestLevel":0"#));
        assert!(!prompt.contains("{analysisIntent}"));
        assert!(!prompt.contains("{empty_result}"));
    }

    #[test]
    fn empty_result_carries_the_error_field() {
        for tool in crate::tools::TOOLS {
            let prompt = build_prompt(tool, &BTreeMap::new(), "notes", 1);
            assert!(prompt.contains(r#""error":"""#), "{}", tool.slug);
        }
    }

    #[test]
    fn unknown_value_falls_back_to_raw_string() {
        let p = params(&[("analysisIntent", "astrology_compatibility")]);
        let prompt = build_prompt(&tone_analyzer::TOOL, &p, "notes", 1);
        assert!(prompt.contains("astrology_compatibility"));
    }

    #[test]
    fn missing_params_use_defaults() {
        let prompt = build_prompt(&profile_roast::TOOL, &BTreeMap::new(), "be honest", 1);
        assert!(prompt.contains("Brutal but helpful"));
        assert!(prompt.contains("The whole profile"));
    }
}
