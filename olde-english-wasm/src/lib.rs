//! WASM bindings for olde-english — lets a JavaScript bot call the engine.

use wasm_bindgen::prelude::*;

use olde_english::core::decoration::FixedOpener;
use olde_english::core::engine::{to_olde_english, OldeEngine};
use olde_english::core::pipeline::Pipeline;
use olde_english::core::reply::{message_reply, MESSAGE_CHAR_LIMIT};
use olde_english::schema::request::{Style, TransformOptions};

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct ReplyOutput<'a> {
    text: &'a str,
    private: bool,
}

#[derive(serde::Serialize)]
struct StyleInfo {
    name: &'static str,
    description: &'static str,
}

fn options(style: &str) -> TransformOptions {
    TransformOptions::with_style(Style::parse(style))
}

// ---------------------------------------------------------------------------
// Exports
// ---------------------------------------------------------------------------

/// Transform `text`. Unknown style names fall back to plain.
#[wasm_bindgen]
pub fn olde_ify(text: &str, style: &str) -> String {
    to_olde_english(text, &options(style))
}

/// Transform with reproducible opener selection.
#[wasm_bindgen]
pub fn olde_ify_seeded(text: &str, style: &str, seed: u64) -> String {
    let mut engine = OldeEngine::builder().seed(seed).build();
    engine.transform(text, &options(style))
}

/// Transform with a fixed opener index (modulo the opener count).
#[wasm_bindgen]
pub fn olde_ify_with_opener(text: &str, style: &str, opener: usize) -> String {
    let mut engine = OldeEngine::builder()
        .opener_source(FixedOpener(opener))
        .build();
    engine.transform(text, &options(style))
}

/// JSON array of `{stage, output}` for every stage.
#[wasm_bindgen]
pub fn trace_stages(text: &str) -> String {
    let traces = Pipeline::standard().trace(text);
    serde_json::to_string(&traces).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
}

/// JSON `{text, private}` reply for a "transform that message" action.
/// Empty content yields the private notice.
#[wasm_bindgen]
pub fn reply_for_message(content: &str) -> String {
    // Message replies are always plain, so no opener is ever drawn.
    let mut engine = OldeEngine::builder()
        .opener_source(FixedOpener(0))
        .build();
    let reply = message_reply(&mut engine, Some(content), MESSAGE_CHAR_LIMIT);
    let output = ReplyOutput {
        text: reply.text(),
        private: reply.is_private(),
    };
    serde_json::to_string(&output).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
}

/// JSON list of the accepted style names.
#[wasm_bindgen]
pub fn styles() -> String {
    let styles = [
        StyleInfo {
            name: Style::Plain.as_str(),
            description: "Archaic pronouns, verbs and greetings",
        },
        StyleInfo {
            name: Style::Bardic.as_str(),
            description: "Plain, prefixed with Prithee/Forsooth/Verily/Hark/Lo",
        },
    ];
    serde_json::to_string(&styles).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn olde_ify_plain() {
        assert_eq!(olde_ify("Are you happy?", "plain"), "art thou happy?");
        assert_eq!(olde_ify("Are you happy?", "nonsense"), "art thou happy?");
    }

    #[test]
    fn seeded_is_reproducible() {
        assert_eq!(
            olde_ify_seeded("hello", "bardic", 11),
            olde_ify_seeded("hello", "bardic", 11)
        );
    }

    #[test]
    fn fixed_opener() {
        assert_eq!(olde_ify_with_opener("hello", "bardic", 0), "Prithee, hail");
    }

    #[test]
    fn trace_is_json_array() {
        let json = trace_stages("your book");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let steps = value.as_array().unwrap();
        assert_eq!(steps.len(), 8);
        assert_eq!(steps[2]["stage"], "possessives");
        assert_eq!(steps[2]["output"], "thy book");
    }

    #[test]
    fn reply_for_empty_message() {
        let value: serde_json::Value = serde_json::from_str(&reply_for_message("")).unwrap();
        assert_eq!(value["private"], true);
        assert_eq!(value["text"], "That message hath no plain text to transform.");
    }

    #[test]
    fn reply_for_message_is_plain_and_public() {
        let json = reply_for_message("Hello friend, are you well?");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["private"], false);
        assert_eq!(value["text"], "hail good sir, art thou well?");
    }

    #[test]
    fn styles_lists_both() {
        let value: serde_json::Value = serde_json::from_str(&styles()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }
}
