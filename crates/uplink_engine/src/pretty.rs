/// Renders an entry's JSON value the way the content viewer displays it:
/// stable 2-space indentation. Parsing the result yields a value deep-equal
/// to the input.
pub fn render_entry(data: &serde_json::Value) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
}

#[cfg(test)]
mod tests {
    use super::render_entry;
    use serde_json::json;

    #[test]
    fn renders_with_two_space_indent() {
        assert_eq!(render_entry(&json!({"x": 1})), "{\n  \"x\": 1\n}");
    }

    #[test]
    fn rendered_text_parses_back_to_the_same_value() {
        let value = json!({
            "document_id": "abc",
            "chunks": [{"chunk_id": "abc-0", "page_content": "hello"}],
            "total_chunks": 1,
        });
        let parsed: serde_json::Value =
            serde_json::from_str(&render_entry(&value)).expect("round trip");
        assert_eq!(parsed, value);
    }
}
