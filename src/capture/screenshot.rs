//! Full-screen capture using the `xcap` crate.
//!
//! This is the infrastructure layer — it talks to the OS.
//! The settle delay and window hide/show choreography live in the
//! controller; this file only grabs pixels and encodes them.

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use xcap::Monitor;

use super::CapturedFrame;

/// Captures the primary monitor and returns it as an in-memory PNG.
///
/// Prefers the monitor that reports itself as primary; if none does,
/// falls back to the first enumerated monitor.
pub fn capture_primary_png() -> Result<CapturedFrame, CaptureError> {
    let monitors = Monitor::all().map_err(|e| CaptureError::MonitorEnumeration(e.to_string()))?;

    if monitors.is_empty() {
        return Err(CaptureError::NoSourceAvailable);
    }

    let primary = monitors
        .into_iter()
        .find(|m| m.is_primary().unwrap_or(false))
        .or_else(|| {
            // Fallback: if no monitor reports as primary, use the first one
            let all = Monitor::all().ok()?;
            all.into_iter().next()
        })
        .ok_or(CaptureError::NoSourceAvailable)?;

    let image = primary
        .capture_image()
        .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;

    encode_png(&DynamicImage::ImageRgba8(image))
}

/// Encodes an image as PNG bytes in memory.
pub(crate) fn encode_png(image: &DynamicImage) -> Result<CapturedFrame, CaptureError> {
    let mut png_bytes: Vec<u8> = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| CaptureError::EncodingFailed(e.to_string()))?;

    Ok(CapturedFrame::from_png(png_bytes))
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Failed to enumerate monitors: {0}")]
    MonitorEnumeration(String),

    #[error("No capturable screen source found")]
    NoSourceAvailable,

    #[error("Screen capture failed: {0}")]
    CaptureFailed(String),

    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}
