//! Base64 PNG payload validation.

use crate::constants::PNG_DATA_URI_PREFIX;
use crate::error::{ServiceError, ServiceResult};
use crate::types::ImageRef;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;

/// Decode a base64 PNG, check it really is one, and wrap it as a
/// displayable `data:` URI with its pixel dimensions.
pub fn decode_png(encoded: &str) -> ServiceResult<ImageRef> {
    let encoded = encoded.trim();
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| ServiceError::InvalidImage(format!("base64: {e}")))?;
    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
        .map_err(|e| ServiceError::InvalidImage(e.to_string()))?;

    Ok(ImageRef {
        uri: format!("{PNG_DATA_URI_PREFIX}{encoded}"),
        width: decoded.width(),
        height: decoded.height(),
    })
}
