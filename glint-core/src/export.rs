use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::highlighter::Highlighter;
use crate::model::{Annotation, StyleAttribute};
use crate::target::Target;

/// Snapshot of a highlighter's targets, ready for JSON export
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub keyword: Option<String>,
    pub exported_at: DateTime<Utc>,
    pub targets: Vec<ExportTarget>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTarget {
    pub id: String,
    pub text: String,
    pub annotations: Vec<ExportAnnotation>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportAnnotation {
    pub kind: String,
    pub value: Option<String>,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl From<&Annotation> for ExportAnnotation {
    fn from(ann: &Annotation) -> Self {
        Self {
            kind: ann.attribute.kind().as_str().to_string(),
            value: match ann.attribute {
                StyleAttribute::Foreground(color) | StyleAttribute::Background(color) => {
                    Some(color.to_string())
                }
                StyleAttribute::Typeface(typeface) => Some(typeface.as_str().to_string()),
                StyleAttribute::Underline | StyleAttribute::Strikethrough => None,
            },
            start_offset: ann.range.start_offset,
            end_offset: ann.range.end_offset,
        }
    }
}

impl ExportTarget {
    pub fn from_target<T: Target>(target: &T) -> Self {
        let content = target.content();
        Self {
            id: target.id().to_string(),
            text: content.text().to_string(),
            annotations: content.annotations().iter().map(ExportAnnotation::from).collect(),
        }
    }
}

impl<T: Target> From<&Highlighter<T>> for ExportDocument {
    fn from(highlighter: &Highlighter<T>) -> Self {
        Self {
            keyword: highlighter.last_keyword().map(String::from),
            exported_at: Utc::now(),
            targets: highlighter
                .targets()
                .iter()
                .map(ExportTarget::from_target)
                .collect(),
        }
    }
}

/// Serialize every target of `highlighter` as pretty JSON
pub fn to_json<T: Target>(highlighter: &Highlighter<T>) -> Result<String> {
    let export_doc = ExportDocument::from(highlighter);
    Ok(serde_json::to_string_pretty(&export_doc)?)
}
