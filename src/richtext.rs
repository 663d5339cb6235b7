//! Rich-Text Document Handling
//!
//! Work-log and task descriptions are stored either as plain text or as a
//! serialized block document (JSON). The editor writes markdown; storage
//! wraps it block-per-line so older plain-text rows and new rich rows read
//! through the same path. Rendering goes through pulldown-cmark.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

fn unstyled() -> String {
    "unstyled".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichBlock {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default = "unstyled")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RichDocument {
    #[serde(default)]
    pub blocks: Vec<RichBlock>,
}

impl RichDocument {
    pub fn from_markdown(markdown: &str) -> Self {
        RichDocument {
            blocks: markdown
                .lines()
                .map(|line| RichBlock { text: line.to_string(), kind: unstyled() })
                .collect(),
        }
    }

    pub fn to_markdown(&self) -> String {
        self.blocks
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Parse a stored description. Anything that looks like a JSON document must
/// parse as one; everything else is treated as a single plain-text block.
pub fn parse(stored: &str) -> Result<RichDocument, ApiError> {
    let trimmed = stored.trim_start();
    if trimmed.starts_with('{') {
        serde_json::from_str(trimmed).map_err(|e| ApiError::Validation(e.to_string()))
    } else {
        Ok(RichDocument::from_markdown(stored))
    }
}

/// Serialize editor markdown into the stored document form.
pub fn serialize_markdown(markdown: &str) -> String {
    serde_json::to_string(&RichDocument::from_markdown(markdown)).unwrap_or_default()
}

/// Render a stored description to HTML for preview panes.
pub fn render_html(stored: &str) -> Result<String, ApiError> {
    let markdown = parse(stored)?.to_markdown();
    Ok(markdown_to_html(&markdown))
}

/// Markdown to HTML via pulldown-cmark.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = pulldown_cmark::Parser::new(markdown);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// One-line plain-text summary for board cards. Malformed documents fall
/// back to the raw stored string rather than failing the whole card.
pub fn summary(stored: &str) -> String {
    match parse(stored) {
        Ok(doc) => doc
            .blocks
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        Err(_) => stored.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_parses_as_single_style_blocks() {
        let doc = parse("도면 검토\n결과 정리").unwrap();
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[0].text, "도면 검토");
        assert_eq!(doc.blocks[0].kind, "unstyled");
    }

    #[test]
    fn serialized_document_round_trips() {
        let stored = serialize_markdown("# 점검 항목\n- 전원부");
        let doc = parse(&stored).unwrap();
        assert_eq!(doc.to_markdown(), "# 점검 항목\n- 전원부");
    }

    #[test]
    fn stored_json_with_extra_fields_still_parses() {
        // draft-js style payloads carry keys and an entityMap we ignore
        let stored = r#"{"blocks":[{"key":"abc","text":"공수 내용","type":"unstyled"}],"entityMap":{}}"#;
        let doc = parse(stored).unwrap();
        assert_eq!(doc.to_markdown(), "공수 내용");
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        let err = parse(r#"{"blocks": ["#).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn rendering_goes_through_markdown() {
        let stored = serialize_markdown("# 제목");
        let html = render_html(&stored).unwrap();
        assert!(html.contains("<h1>"), "{html}");
    }

    #[test]
    fn summary_flattens_blocks_and_survives_bad_input() {
        let stored = serialize_markdown("첫 줄\n둘째 줄");
        assert_eq!(summary(&stored), "첫 줄 둘째 줄");
        assert_eq!(summary("{broken"), "{broken");
    }
}
