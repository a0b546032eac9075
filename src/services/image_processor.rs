// src/services/image_processor.rs
use crate::errors::WingmanError;
use base64::{Engine as _, engine::general_purpose};
use image::ImageFormat as ImgFormat;
use log::{debug, warn};

pub const DEFAULT_MIME: &str = "image/jpeg";

// Enough base64 to cover every magic number `image` knows about.
const SNIFF_CHARS: usize = 64;

pub struct ImageProcessor;

impl ImageProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Turns a client-supplied base64 image into a `data:` URI.
    ///
    /// An existing `data:image/...;base64,` prefix is dropped and all
    /// whitespace removed before the prefix for `mime_type` is added back, so
    /// normalizing an already-normalized URI is a no-op. Payloads outside the
    /// base64 alphabet only produce a warning.
    pub fn normalize(
        &self,
        raw_image: Option<&str>,
        mime_type: &str,
    ) -> Result<String, WingmanError> {
        let raw = raw_image
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| WingmanError::Input("No image data provided".to_string()))?;

        let payload = clean_payload(raw);

        if payload.is_empty() {
            return Err(WingmanError::Input("Image payload is empty".to_string()));
        }

        if is_base64_alphabet(&payload) {
            match sniff_mime(&payload) {
                Some(sniffed) if sniffed != mime_type => warn!(
                    "Image declared as {} but payload looks like {}",
                    mime_type, sniffed
                ),
                _ => {}
            }
        } else {
            warn!(
                "Image payload ({} chars) contains characters outside the base64 alphabet; forwarding as-is",
                payload.len()
            );
        }

        Ok(format!("data:{};base64,{}", mime_type, payload))
    }

    /// `normalize` with the MIME type read from the payload's magic bytes,
    /// falling back to `DEFAULT_MIME` when the format is not recognized.
    pub fn normalize_detected(&self, raw_image: Option<&str>) -> Result<String, WingmanError> {
        let mime_type = raw_image
            .map(clean_payload)
            .filter(|payload| is_base64_alphabet(payload))
            .and_then(|payload| sniff_mime(&payload))
            .unwrap_or(DEFAULT_MIME);

        self.normalize(raw_image, mime_type)
    }
}

impl Default for ImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn clean_payload(raw: &str) -> String {
    strip_data_uri_prefix(raw.trim_start())
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn sniff_mime(payload: &str) -> Option<&'static str> {
    let head_len = payload.len().min(SNIFF_CHARS) / 4 * 4;
    let head = match general_purpose::STANDARD.decode(&payload[..head_len]) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Could not decode image header for sniffing: {}", e);
            return None;
        }
    };

    match image::guess_format(&head) {
        Ok(format) => mime_for(format),
        Err(_) => {
            debug!("Image format not recognized from header");
            None
        }
    }
}

/// Removes one leading `data:image/<subtype>;base64,` prefix if present.
pub fn strip_data_uri_prefix(input: &str) -> &str {
    let Some(rest) = input.strip_prefix("data:image/") else {
        return input;
    };
    let Some(end) = rest.find(";base64,") else {
        return input;
    };

    let subtype = &rest[..end];
    let valid_subtype = !subtype.is_empty()
        && subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if valid_subtype {
        &rest[end + ";base64,".len()..]
    } else {
        input
    }
}

/// `[A-Za-z0-9+/]*={0,2}`
pub fn is_base64_alphabet(payload: &str) -> bool {
    let body = payload.trim_end_matches('=');
    let padding = payload.len() - body.len();

    padding <= 2
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}

fn mime_for(format: ImgFormat) -> Option<&'static str> {
    match format {
        ImgFormat::Png => Some("image/png"),
        ImgFormat::Jpeg => Some("image/jpeg"),
        ImgFormat::Gif => Some("image/gif"),
        ImgFormat::WebP => Some("image/webp"),
        ImgFormat::Bmp => Some("image/bmp"),
        ImgFormat::Tiff => Some("image/tiff"),
        _ => None,
    }
}
