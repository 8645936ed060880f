//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use chadcn::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("install", "no");
//!
//! let answer = ui
//!     .prompt(&Prompt::confirm("install", "Install dependencies now?", true))
//!     .unwrap();
//! assert_eq!(answer.as_bool(), Some(false));
//!
//! ui.success("Done!");
//! assert!(ui.has_success("Done!"));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;

use super::{OutputMode, Prompt, PromptResult, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Supports both single responses (via `set_prompt_response`) and queued
/// responses (via `queue_prompt_responses`) for keys asked more than once.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    spinners: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
    default_prompt_response: Option<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or defaults.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Set a default response for any prompt key not explicitly configured.
    pub fn set_default_prompt_response(&mut self, response: &str) {
        self.default_prompt_response = Some(response.to_string());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get the keys of all prompts that were shown.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if any message contains the text.
    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.contains(text))
    }

    /// Check if any success message contains the text.
    pub fn has_success(&self, text: &str) -> bool {
        self.successes.iter().any(|m| m.contains(text))
    }

    /// Check if any warning contains the text.
    pub fn has_warning(&self, text: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(text))
    }

    /// Check if any error contains the text.
    pub fn has_error(&self, text: &str) -> bool {
        self.errors.iter().any(|m| m.contains(text))
    }

    /// Check if any hint contains the text.
    pub fn has_hint(&self, text: &str) -> bool {
        self.hints.iter().any(|m| m.contains(text))
    }

    /// Check if a prompt with the key was shown.
    pub fn was_prompted(&self, key: &str) -> bool {
        self.prompts_shown.iter().any(|k| k == key)
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
        self.hints.clear();
        self.spinners.clear();
        self.prompts_shown.clear();
    }

    fn next_response(&mut self, prompt: &Prompt) -> String {
        if let Some(queue) = self.prompt_queues.get_mut(&prompt.key) {
            if let Some(response) = queue.pop_front() {
                return response;
            }
        }
        self.prompt_responses
            .get(&prompt.key)
            .cloned()
            .or_else(|| self.default_prompt_response.clone())
            .or_else(|| prompt.default.clone())
            .unwrap_or_default()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());
        let response = self.next_response(prompt);
        Ok(PromptResult::from_answer(&prompt.prompt_type, &response))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Final state of a [`MockSpinner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Still running.
    Running,
    /// Finished successfully.
    Success(String),
    /// Finished with an error.
    Error(String),
}

/// Spinner used by [`MockUI`].
#[derive(Debug)]
pub struct MockSpinner {
    /// Current message.
    pub message: String,
    /// Current status.
    pub status: SpinnerStatus,
}

impl MockSpinner {
    /// Create a running spinner.
    pub fn new() -> Self {
        Self {
            message: String::new(),
            status: SpinnerStatus::Running,
        }
    }
}

impl Default for MockSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.message = msg.to_string();
    }

    fn finish_success(&mut self, msg: &str) {
        self.status = SpinnerStatus::Success(msg.to_string());
    }

    fn finish_error(&mut self, msg: &str) {
        self.status = SpinnerStatus::Error(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{PromptOption, PromptType};

    #[test]
    fn captures_output() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.success("done");
        ui.warning("careful");
        ui.error("broken");
        ui.show_hint("try --overwrite");
        ui.show_header("chadcn");

        assert!(ui.has_message("hello"));
        assert!(ui.has_success("done"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("broken"));
        assert!(ui.has_hint("--overwrite"));
        assert_eq!(ui.headers(), &["chadcn".to_string()]);
    }

    #[test]
    fn prompt_uses_configured_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("css", "app/globals.css");
        let result = ui
            .prompt(&Prompt::input("css", "CSS file?", "src/index.css"))
            .unwrap();
        assert_eq!(result.as_string(), "app/globals.css");
        assert!(ui.was_prompted("css"));
    }

    #[test]
    fn prompt_falls_back_to_prompt_default() {
        let mut ui = MockUI::new();
        let result = ui
            .prompt(&Prompt::confirm("proceed", "Continue?", true))
            .unwrap();
        assert_eq!(result, PromptResult::Bool(true));
    }

    #[test]
    fn queued_responses_are_used_in_order() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("alias", vec!["first", "second"]);
        ui.set_prompt_response("alias", "fallback");
        let prompt = Prompt::input("alias", "Alias?", "");

        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "first");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "second");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "fallback");
    }

    #[test]
    fn default_prompt_response_applies_to_unknown_keys() {
        let mut ui = MockUI::new();
        ui.set_default_prompt_response("no");
        let result = ui
            .prompt(&Prompt::confirm("anything", "Sure?", true))
            .unwrap();
        assert_eq!(result.as_bool(), Some(false));
    }

    #[test]
    fn multiselect_response_is_split() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("components", "button, input");
        let prompt = Prompt {
            key: "components".to_string(),
            question: "Which components?".to_string(),
            prompt_type: PromptType::MultiSelect {
                options: vec![PromptOption {
                    label: "button".to_string(),
                    value: "button".to_string(),
                }],
            },
            default: None,
        };
        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(
            result,
            PromptResult::Strings(vec!["button".into(), "input".into()])
        );
    }

    #[test]
    fn spinner_is_recorded() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Installing...");
        spinner.finish_success("Installed");
        assert_eq!(ui.spinners(), &["Installing...".to_string()]);
    }

    #[test]
    fn mock_spinner_tracks_status() {
        let mut spinner = MockSpinner::new();
        assert_eq!(spinner.status, SpinnerStatus::Running);
        spinner.finish_error("nope");
        assert_eq!(spinner.status, SpinnerStatus::Error("nope".into()));
    }

    #[test]
    fn clear_resets_captures() {
        let mut ui = MockUI::new();
        ui.message("x");
        ui.clear();
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn interactive_flag_defaults_off() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}
