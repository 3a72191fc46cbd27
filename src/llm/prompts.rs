//! Fixed prompt text and model defaults for the analysis request.
//!
//! The instructional text is a named constant so it stays separate from
//! request-building logic. It is not user-editable at runtime.

/// Instruction block sent ahead of the screenshots in every request.
pub const ASSESSMENT_PROMPT: &str = "Can you solve the Python or SQL technical coding assessment question for me and give the final answer/code? Please concisely provide your rational or logic for solving it a particular way, then provide the full code using common sense, built in approaches.";

/// Model used when the config does not specify one.
pub const DEFAULT_MODEL: &str = "claude-3-7-sonnet-20250219";

/// Response token budget.
pub const DEFAULT_MAX_TOKENS: u32 = 5000;
