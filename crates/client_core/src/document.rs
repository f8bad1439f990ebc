//! Self-contained HTML documents built from a generated artifact.

use shared::domain::GeneratedArtifact;

pub const EXPORT_TITLE: &str = "FlexiUI Generated Component";
pub const HTML_MIME_TYPE: &str = "text/html";

/// Minimal reset applied to the preview surface only.
pub const PREVIEW_RESET_CSS: &str =
    "body { margin: 0; padding: 20px; font-family: system-ui, -apple-system, sans-serif; }";

/// Document assigned to the isolated preview surface.
pub fn preview_document(artifact: &GeneratedArtifact) -> String {
    assemble(artifact, None, Some(PREVIEW_RESET_CSS))
}

/// Standalone document offered as a download.
pub fn export_document(artifact: &GeneratedArtifact) -> String {
    assemble(artifact, Some(EXPORT_TITLE), None)
}

// Fragments are inserted verbatim; nothing is escaped or filtered.
fn assemble(artifact: &GeneratedArtifact, title: Option<&str>, reset: Option<&str>) -> String {
    let mut out = String::with_capacity(
        256 + artifact.markup.len() + artifact.style.len() + artifact.script.len(),
    );
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    if let Some(title) = title {
        out.push_str("    <title>");
        out.push_str(title);
        out.push_str("</title>\n");
    }
    out.push_str("    <style>\n");
    if let Some(reset) = reset {
        out.push_str(reset);
        out.push('\n');
    }
    out.push_str(&artifact.style);
    out.push_str("\n    </style>\n</head>\n<body>\n");
    out.push_str(&artifact.markup);
    out.push_str("\n    <script>\n");
    out.push_str(&artifact.script);
    out.push_str("\n    </script>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;
