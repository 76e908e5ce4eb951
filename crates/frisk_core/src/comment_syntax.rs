//! Language-aware comment detection.
//!
//! Comments depress the context score (documentation and fixtures are
//! the main false-positive source) and carry the inline `frisk:ignore`
//! suppression marker.

use std::path::Path;

/// The marker text that indicates a line should never be reported.
pub const IGNORE_MARKER: &str = "frisk:ignore";

/// Comment syntax used by a programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSyntax {
    /// Single-line comment with a prefix (e.g. `//`, `#`, `--`).
    Line(&'static str),
    /// Block comment with start and end delimiters (e.g. `/*` … `*/`).
    Block(&'static str, &'static str),
}

impl CommentSyntax {
    /// Returns `true` if a trimmed line starts with this comment syntax.
    #[must_use]
    pub fn starts_comment(&self, line: &str) -> bool {
        let trimmed = line.trim_start();
        match self {
            Self::Line(prefix) => trimmed.starts_with(prefix),
            Self::Block(start, _) => trimmed.starts_with(start),
        }
    }
}

/// Returns the comment syntax for a file path, derived from its extension.
#[must_use]
pub fn for_path(path: &Path) -> Option<CommentSyntax> {
    let ext = path.extension()?.to_str()?;
    for_extension(ext)
}

/// Returns the comment syntax for a file extension (e.g. `"rs"`, `"py"`).
#[must_use]
pub fn for_extension(ext: &str) -> Option<CommentSyntax> {
    match ext.to_lowercase().as_str() {
        // C-style line comments
        "c" | "h" | "cpp" | "cc" | "hpp" | "cs" | "go" | "java" | "js" | "mjs" | "cjs" | "jsx" | "kt" | "php"
        | "rs" | "scala" | "swift" | "ts" | "mts" | "tsx" | "zig" | "dart" | "proto" => Some(CommentSyntax::Line("//")),

        // Hash comments
        "py" | "pyw" | "pyi" | "rb" | "rake" | "gemspec" | "sh" | "bash" | "zsh" | "pl" | "pm" | "ps1" | "r"
        | "ex" | "exs" | "jl" | "nim" | "tcl" | "toml" | "yaml" | "yml" | "env" | "tf" | "dockerfile" => {
            Some(CommentSyntax::Line("#"))
        }

        // Double-dash comments
        "hs" | "lua" | "sql" | "elm" => Some(CommentSyntax::Line("--")),

        // Semicolon comments
        "clj" | "cljs" | "el" | "lisp" | "scm" | "ini" | "properties" => Some(CommentSyntax::Line(";")),

        // Block comments only (no single-line syntax)
        "css" | "scss" | "less" => Some(CommentSyntax::Block("/*", "*/")),
        "html" | "xml" | "svg" | "vue" | "svelte" | "md" | "markdown" => Some(CommentSyntax::Block("<!--", "-->")),

        _ => None,
    }
}

/// Returns `true` if a line reads as a comment in any common syntax.
///
/// Used when the file's language is unknown; over-matching here is
/// acceptable because comments only depress context scores.
#[must_use]
pub fn looks_like_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    ["//", "#", "--", ";", "/*", "*", "<!--"]
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}
