//! Generated-document models and best-effort parsing of model replies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const MAX_DERIVED_TITLE_CHARS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Document families the generator can produce.
pub enum DocumentKind {
    /// Paginated report rendered in the PDF viewer.
    Pdf,
    /// Slide deck rendered in the presentation viewer.
    Ppt,
    /// Tabular data rendered in the spreadsheet editor.
    Sheet,
}

impl DocumentKind {
    /// Every kind, in picker order.
    pub const ALL: [Self; 3] = [Self::Pdf, Self::Ppt, Self::Sheet];

    /// Returns the stable wire token (`pdf`, `ppt`, `sheet`).
    pub const fn token(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Ppt => "ppt",
            Self::Sheet => "sheet",
        }
    }

    /// Returns the picker label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF report",
            Self::Ppt => "Presentation",
            Self::Sheet => "Spreadsheet",
        }
    }

    pub(crate) const fn reply_schema(self) -> &'static str {
        match self {
            Self::Pdf => {
                r#"{"title": string, "sections": [{"heading": string, "body": string}]}"#
            }
            Self::Ppt => {
                r#"{"title": string, "slides": [{"title": string, "bullets": [string]}]}"#
            }
            Self::Sheet => r#"{"title": string, "columns": [string], "rows": [[string]]}"#,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One headed block of a generated report.
pub struct DocumentSection {
    /// Section heading.
    pub heading: String,
    /// Section body text.
    #[serde(alias = "content", alias = "text")]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One generated slide.
pub struct Slide {
    /// Slide title.
    pub title: String,
    /// Bullet points.
    #[serde(default, alias = "points", alias = "content")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
/// Structured body of a generated document.
pub enum StructuredContent {
    /// Report sections.
    Pdf {
        /// Ordered sections.
        sections: Vec<DocumentSection>,
    },
    /// Slide deck.
    Ppt {
        /// Ordered slides.
        slides: Vec<Slide>,
    },
    /// Table.
    Sheet {
        /// Header row.
        columns: Vec<String>,
        /// Data rows, each as wide as the header or narrower.
        rows: Vec<Vec<String>>,
    },
}

impl StructuredContent {
    /// Returns the kind this content renders as.
    pub const fn kind(&self) -> DocumentKind {
        match self {
            Self::Pdf { .. } => DocumentKind::Pdf,
            Self::Ppt { .. } => DocumentKind::Ppt,
            Self::Sheet { .. } => DocumentKind::Sheet,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Result of one successful generation call.
pub struct GeneratedDocument {
    /// Document title.
    pub title: String,
    /// Structured body.
    pub content: StructuredContent,
}

#[derive(Deserialize)]
struct PdfReply {
    title: Option<String>,
    #[serde(default)]
    sections: Vec<DocumentSection>,
}

#[derive(Deserialize)]
struct PptReply {
    title: Option<String>,
    #[serde(default)]
    slides: Vec<Slide>,
}

#[derive(Deserialize)]
struct SheetReply {
    title: Option<String>,
    #[serde(default, alias = "headers")]
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

/// Parses a model reply into a [`GeneratedDocument`] of `kind`.
///
/// Replies are accepted as bare JSON, JSON inside a fenced code block, or JSON surrounded by
/// prose. Anything that does not yield a non-empty structure degrades to a single block holding
/// the raw reply text, titled from `prompt`.
pub fn parse_generated_document(
    kind: DocumentKind,
    prompt: &str,
    reply: &str,
) -> GeneratedDocument {
    json_candidates(reply)
        .into_iter()
        .find_map(|candidate| parse_structured(kind, candidate))
        .map(|(title, content)| GeneratedDocument {
            title: title
                .map(|title| title.trim().to_string())
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| derive_title(prompt)),
            content,
        })
        .unwrap_or_else(|| fallback_document(kind, prompt, reply))
}

fn json_candidates(reply: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    if let Some(fenced) = fenced_block(reply) {
        candidates.push(fenced);
    }
    candidates.push(reply.trim());
    if let (Some(start), Some(end)) = (reply.find('{'), reply.rfind('}')) {
        if start < end {
            candidates.push(&reply[start..=end]);
        }
    }
    candidates
}

fn fenced_block(reply: &str) -> Option<&str> {
    let open = reply.find("```")?;
    let after_fence = &reply[open + 3..];
    // Skip an optional language tag on the fence line.
    let body_start = after_fence.find('\n').map(|idx| idx + 1)?;
    let body = &after_fence[body_start..];
    let close = body.find("```")?;
    Some(body[..close].trim())
}

fn parse_structured(
    kind: DocumentKind,
    candidate: &str,
) -> Option<(Option<String>, StructuredContent)> {
    match kind {
        DocumentKind::Pdf => {
            let reply: PdfReply = serde_json::from_str(candidate).ok()?;
            (!reply.sections.is_empty()).then(|| {
                (
                    reply.title,
                    StructuredContent::Pdf {
                        sections: reply.sections,
                    },
                )
            })
        }
        DocumentKind::Ppt => {
            let reply: PptReply = serde_json::from_str(candidate).ok()?;
            (!reply.slides.is_empty()).then(|| {
                (
                    reply.title,
                    StructuredContent::Ppt {
                        slides: reply.slides,
                    },
                )
            })
        }
        DocumentKind::Sheet => {
            let reply: SheetReply = serde_json::from_str(candidate).ok()?;
            if reply.columns.is_empty() && reply.rows.is_empty() {
                return None;
            }
            let rows = reply
                .rows
                .into_iter()
                .map(|row| row.into_iter().map(cell_text).collect())
                .collect();
            Some((
                reply.title,
                StructuredContent::Sheet {
                    columns: reply.columns,
                    rows,
                },
            ))
        }
    }
}

fn cell_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn derive_title(prompt: &str) -> String {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return "Untitled document".to_string();
    }
    let mut title: String = prompt.chars().take(MAX_DERIVED_TITLE_CHARS).collect();
    if prompt.chars().count() > MAX_DERIVED_TITLE_CHARS {
        title.push('…');
    }
    title
}

fn fallback_document(kind: DocumentKind, prompt: &str, reply: &str) -> GeneratedDocument {
    let title = derive_title(prompt);
    let text = reply.trim().to_string();
    let content = match kind {
        DocumentKind::Pdf => StructuredContent::Pdf {
            sections: vec![DocumentSection {
                heading: title.clone(),
                body: text,
            }],
        },
        DocumentKind::Ppt => StructuredContent::Ppt {
            slides: vec![Slide {
                title: title.clone(),
                bullets: text
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect(),
            }],
        },
        DocumentKind::Sheet => StructuredContent::Sheet {
            columns: vec!["Content".to_string()],
            rows: text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| vec![line.to_string()])
                .collect(),
        },
    };
    GeneratedDocument { title, content }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_fenced_slide_deck() {
        let reply = "Here you go:\n```json\n{\"title\": \"Q3 Review\", \"slides\": [{\"title\": \"Wins\", \"points\": [\"Revenue up\"]}]}\n```";
        let doc = parse_generated_document(DocumentKind::Ppt, "quarterly review", reply);
        assert_eq!(doc.title, "Q3 Review");
        assert_eq!(
            doc.content,
            StructuredContent::Ppt {
                slides: vec![Slide {
                    title: "Wins".to_string(),
                    bullets: vec!["Revenue up".to_string()],
                }],
            }
        );
    }

    #[test]
    fn sheet_cells_are_stringified() {
        let reply = r#"Sure! {"title": "Budget", "headers": ["Item", "Cost"], "rows": [["Rent", 1200], ["Misc", null]]}"#;
        let doc = parse_generated_document(DocumentKind::Sheet, "budget", reply);
        assert_eq!(doc.title, "Budget");
        assert_eq!(
            doc.content,
            StructuredContent::Sheet {
                columns: vec!["Item".to_string(), "Cost".to_string()],
                rows: vec![
                    vec!["Rent".to_string(), "1200".to_string()],
                    vec!["Misc".to_string(), String::new()],
                ],
            }
        );
    }

    #[test]
    fn unparsable_reply_falls_back_to_single_section() {
        let doc = parse_generated_document(
            DocumentKind::Pdf,
            "  Water cycle overview ",
            "The water cycle moves water around.",
        );
        assert_eq!(doc.title, "Water cycle overview");
        assert_eq!(
            doc.content,
            StructuredContent::Pdf {
                sections: vec![DocumentSection {
                    heading: "Water cycle overview".to_string(),
                    body: "The water cycle moves water around.".to_string(),
                }],
            }
        );
    }

    #[test]
    fn empty_structure_falls_back_and_blank_title_uses_prompt() {
        let doc = parse_generated_document(
            DocumentKind::Ppt,
            "",
            r#"{"title": " ", "slides": []}"#,
        );
        assert_eq!(doc.title, "Untitled document");
        assert_eq!(doc.content.kind(), DocumentKind::Ppt);
    }

    #[test]
    fn long_prompts_are_shortened_for_titles() {
        let prompt = "x".repeat(80);
        let doc = parse_generated_document(DocumentKind::Sheet, &prompt, "a\nb");
        assert_eq!(doc.title.chars().count(), MAX_DERIVED_TITLE_CHARS + 1);
        assert_eq!(
            doc.content,
            StructuredContent::Sheet {
                columns: vec!["Content".to_string()],
                rows: vec![vec!["a".to_string()], vec!["b".to_string()]],
            }
        );
    }
}
