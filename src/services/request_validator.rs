// src/services/request_validator.rs
use crate::errors::WingmanError;
use crate::models::AnalysisRequest;
use crate::tools::{ImageField, ToolSpec};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Checks a raw request body against `tool`'s contract.
///
/// Rules run in order and stop at the first failure: JSON syntax, required
/// fields, image ceiling, then at least one usable image. Parameter values are
/// not checked against the option tables.
pub fn validate(tool: &ToolSpec, body: &[u8]) -> Result<AnalysisRequest, WingmanError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| WingmanError::InvalidJson(e.to_string()))?;
    let fields = value.as_object().cloned().unwrap_or_default();

    let notes = fields
        .get("prompt")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty());

    let raw_images = match tool.image_field {
        ImageField::Single => fields
            .get("image")
            .filter(|v| v.as_str().is_some_and(|s| !s.is_empty()))
            .map(|v| vec![v.clone()]),
        ImageField::Array => fields
            .get("images")
            .and_then(Value::as_array)
            .filter(|a| !a.is_empty())
            .cloned(),
    };

    let (notes, raw_images) = match (notes, raw_images) {
        (Some(notes), Some(images)) => (notes.to_string(), images),
        _ => {
            return Err(WingmanError::MissingFields(format!(
                "prompt and {}",
                tool.image_field.key()
            )));
        }
    };

    if raw_images.len() > tool.max_images {
        return Err(WingmanError::TooManyImages {
            max: tool.max_images,
        });
    }

    let images: Vec<String> = raw_images
        .iter()
        .filter_map(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .collect();

    if images.is_empty() {
        return Err(WingmanError::NoValidImages);
    }

    Ok(AnalysisRequest {
        notes,
        params: collect_params(tool, &fields),
        images,
    })
}

fn collect_params(tool: &ToolSpec, fields: &Map<String, Value>) -> BTreeMap<String, String> {
    tool.params
        .iter()
        .filter_map(|param| {
            fields
                .get(param.name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(|value| (param.name.to_string(), value.to_string()))
        })
        .collect()
}
