//! Wire format and payload tests for the content services

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use embodi_canvas::error::ServiceError;
use embodi_canvas::services::{PromptRequest, decode_png, parse_generate_response};
use image::{ImageBuffer, ImageFormat, Rgba};
use std::io::Cursor;

fn tiny_png() -> String {
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_pixel(5, 4, Rgba([0, 128, 255, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
    STANDARD.encode(bytes)
}

#[test]
fn test_prompt_request_body() {
    let body = serde_json::to_value(PromptRequest { prompt: "a cat on a skateboard" }).unwrap();
    insta::assert_json_snapshot!(body, @r###"
    {
      "prompt": "a cat on a skateboard"
    }
    "###);
}

#[test]
fn test_generate_response_to_data_uri() {
    let encoded = tiny_png();
    let json = serde_json::json!({ "image_base64": encoded }).to_string();
    let image = parse_generate_response(&json).unwrap();
    assert_eq!((image.width, image.height), (5, 4));
    assert_eq!(image.uri, format!("data:image/png;base64,{encoded}"));
}

#[test]
fn test_surrounding_whitespace_tolerated() {
    let encoded = format!("\n{}  ", tiny_png());
    assert!(decode_png(&encoded).is_ok());
}

#[test]
fn test_jpeg_like_bytes_rejected() {
    let fake = STANDARD.encode([0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]);
    assert!(matches!(decode_png(&fake), Err(ServiceError::InvalidImage(_))));
}
