//! Screen capture domain — public API.
//!
//! This module owns all screen capture functionality.
//! External code should only use the types and functions exported here.

mod screenshot;

pub use screenshot::{capture_primary_png, CaptureError};

use crate::controller::FrameSource;

/// One still image of the display, PNG-encoded.
///
/// Immutable once created. Owned by the session after append; cloned
/// (a handful of frames at most) when a snapshot is taken for submission.
#[derive(Clone, PartialEq, Eq)]
pub struct CapturedFrame(Vec<u8>);

impl CapturedFrame {
    pub fn from_png(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for CapturedFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CapturedFrame")
            .field(&format_args!("{} bytes", self.0.len()))
            .finish()
    }
}

/// Production frame source: grabs the primary monitor via xcap.
///
/// The grab is blocking, so it runs on the runtime's blocking pool.
pub struct PrimaryMonitorSource;

impl FrameSource for PrimaryMonitorSource {
    async fn capture(&self) -> Result<CapturedFrame, CaptureError> {
        tauri::async_runtime::spawn_blocking(capture_primary_png)
            .await
            .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?
    }
}
