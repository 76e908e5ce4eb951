//! File collection for scanning.
//!
//! Handles walking directories with gitignore support, applying exclude
//! patterns, and filtering out binary and oversized files. Content is
//! read by the scan orchestrator, not here.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

/// File extensions that are always treated as binary, regardless of content.
const BINARY_EXTENSIONS: &[&str] = &[
    "o", "obj", "a", "so", "dylib", "dll", "exe", "pyc", "pyo", "class", "rlib", "rmeta", // Compiled code
    "png", "jpg", "jpeg", "gif", "ico", "webp", "bmp", "tiff", "tif", "heic", "heif", "avif", // Images
    "mp3", "mp4", "wav", "avi", "mov", "flac", "ogg", "webm", "mkv", "m4a", // Audio/Video
    "zip", "tar", "gz", "bz2", "xz", "7z", "rar", "zst", // Archives
    "ttf", "otf", "woff", "woff2", "eot", // Fonts
    "wasm", "bin", "dat", "pak", "bundle", // Other binary
];

/// Returns `true` if the file extension is in the known binary list.
///
/// The check is case-insensitive.
#[must_use]
pub fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Walks the given paths, collecting scannable text files while honouring
/// exclude globs, gitignore rules, binary-extension filtering, and the
/// maximum file size.
#[must_use]
pub fn collect_files(
    paths: &[PathBuf],
    excludes: &[String],
    respect_gitignore: bool,
    max_file_size: Option<u64>,
) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if !has_binary_extension(path) && within_size_limit(path, max_file_size) {
                files.push(path.clone());
            }
            continue;
        }

        let overrides = build_overrides(path, excludes);
        let walker = build_walker(path, overrides, respect_gitignore);

        let (tx, rx) = std::sync::mpsc::channel();
        walker.run(|| {
            let tx = tx.clone();
            Box::new(move |result| {
                if let Ok(entry) = result
                    && is_scannable_file(&entry, max_file_size)
                {
                    let _ = tx.send(entry.into_path());
                }
                ignore::WalkState::Continue
            })
        });
        drop(tx);
        files.extend(rx);
    }

    files.sort();
    files
}

fn is_scannable_file(entry: &ignore::DirEntry, max_file_size: Option<u64>) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_file())
        && !has_binary_extension(entry.path())
        && within_size_limit(entry.path(), max_file_size)
}

fn within_size_limit(path: &Path, max_file_size: Option<u64>) -> bool {
    let Some(max) = max_file_size else {
        return true;
    };
    std::fs::metadata(path).is_ok_and(|m| m.len() <= max)
}

#[expect(
    clippy::expect_used,
    reason = "pattern format is validated by caller; programmer error if invalid"
)]
fn build_overrides(path: &Path, excludes: &[String]) -> ignore::overrides::Override {
    let mut builder = OverrideBuilder::new(path);

    for pattern in excludes {
        builder.add(&format!("!{pattern}")).expect("invalid exclude pattern");
    }

    builder.build().expect("failed to build overrides")
}

fn build_walker(
    path: &Path,
    overrides: ignore::overrides::Override,
    respect_gitignore: bool,
) -> ignore::WalkParallel {
    WalkBuilder::new(path)
        .hidden(false)
        .git_ignore(respect_gitignore)
        .git_global(respect_gitignore)
        .git_exclude(respect_gitignore)
        .overrides(overrides)
        .build_parallel()
}
