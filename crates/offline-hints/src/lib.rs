//! WASM module for offline study mode.
//!
//! Exposes answer expansion, answer checking and one-step hints to the browser.
//! Every export returns a JSON string; failures come back as `{"error": ...}`.

use wasm_bindgen::prelude::*;

use answer_matcher::{matching, AnswerChecker, MatchingSettings};

#[cfg(feature = "console_error_panic_hook")]
pub use console_error_panic_hook::set_once as set_panic_hook;

fn settings(case_insensitive: bool, lang: &str) -> MatchingSettings {
    MatchingSettings {
        lang: lang.to_string(),
        case_insensitive,
        ..MatchingSettings::default()
    }
}

fn error_json(message: String) -> String {
    serde_json::json!({ "error": message }).to_string()
}

fn parse_list(json: &str, what: &str) -> Result<Vec<String>, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse {}: {}", what, e))
}

// ============================================================================
// WASM Exports
// ============================================================================

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();
}

/// Expand a canonical answer into every accepted form. Alternatives too
/// large to expand are split on their stop characters instead.
///
/// Returns a JSON array of strings.
#[wasm_bindgen]
pub fn expand_answers(canonical: &str, case_insensitive: bool, lang: &str) -> String {
    let checker = AnswerChecker::new(canonical, &settings(case_insensitive, lang));
    serde_json::json!(checker.accepted()).to_string()
}

/// Move the user's input one edit toward the nearest target.
///
/// targets_json: JSON array of accepted answers
/// prefixes_json: JSON array of prefixes counted as a single edit
///
/// Returns JSON: {"hint": "..."}
#[wasm_bindgen]
pub fn get_minimal_change(
    user_input: &str,
    targets_json: &str,
    case_insensitive: bool,
    prefixes_json: &str,
) -> String {
    let targets = match parse_list(targets_json, "targets") {
        Ok(targets) => targets,
        Err(e) => return error_json(e),
    };
    let prefixes = match parse_list(prefixes_json, "prefixes") {
        Ok(prefixes) => prefixes,
        Err(e) => return error_json(e),
    };

    let hint = matching::get_minimal_change(user_input, &targets, case_insensitive, &prefixes);
    serde_json::json!({ "hint": hint }).to_string()
}

/// Check a typed answer against a canonical answer.
///
/// Returns JSON: {"result": "Correct"|"CloseEnough"|"Incorrect", "is_correct": bool, "hint": "..."}
#[wasm_bindgen]
pub fn check_answer(user_input: &str, canonical: &str, case_insensitive: bool, lang: &str) -> String {
    let checker = AnswerChecker::new(canonical, &settings(case_insensitive, lang));
    let result = checker.check(user_input);

    serde_json::json!({
        "result": result,
        "is_correct": result.is_correct(),
        "hint": checker.hint(user_input),
    })
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
