//! Session accumulator — frames gathered for one interaction cycle.
//!
//! A session is bounded by reset events: frames accumulate in capture
//! order until the user finalizes or resets. Exactly one session exists,
//! owned by the controller.

use crate::capture::CapturedFrame;

#[derive(Debug, Default)]
pub struct Session {
    frames: Vec<CapturedFrame>,
    multi_frame: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a frame to the end of the sequence.
    ///
    /// Insertion order is submission order. No upper bound — a session
    /// is short-lived and holds a handful of frames at most.
    pub fn append(&mut self, frame: CapturedFrame) {
        self.frames.push(frame);
    }

    /// Clears the frames and the mode flag. Idempotent.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.multi_frame = false;
    }

    /// Multi-frame mode stays set until the next reset.
    pub fn set_multi_frame(&mut self) {
        self.multi_frame = true;
    }

    pub fn is_multi_frame(&self) -> bool {
        self.multi_frame
    }

    pub fn frames(&self) -> &[CapturedFrame] {
        &self.frames
    }

    /// Clones the accumulated frames for submission, so no lock needs
    /// to be held across the network round trip.
    pub fn snapshot(&self) -> Vec<CapturedFrame> {
        self.frames.clone()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
