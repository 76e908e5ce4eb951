//! Include/exclude gating for scan candidates.
//!
//! The orchestrator accepts whatever file list the host supplies; the
//! policy is how that host intent is carried into the watch path, where
//! events arrive for arbitrary paths rather than a pre-filtered list.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiled include/exclude globs deciding which paths are scannable.
///
/// An empty include list admits every path not explicitly excluded.
/// Excludes always win over includes.
#[derive(Debug, Clone, Default)]
pub struct ScanPolicy {
    include: Option<GlobSet>,
    exclude: GlobSet,
}

impl ScanPolicy {
    /// Compiles a policy from glob pattern lists.
    ///
    /// Returns [`PolicyError::InvalidGlob`] naming the first pattern
    /// that fails to compile.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, PolicyError> {
        let include = if include.is_empty() {
            None
        } else {
            Some(compile_set(include)?)
        };

        Ok(Self {
            include,
            exclude: compile_set(exclude)?,
        })
    }

    /// A policy that admits everything.
    #[must_use]
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Returns `true` when `path` should be scanned.
    #[must_use]
    pub fn admits(&self, path: &Path) -> bool {
        if self.exclude.is_match(path) {
            return false;
        }
        match &self.include {
            Some(include) => include.is_match(path),
            None => true,
        }
    }
}

fn compile_set(patterns: &[String]) -> Result<GlobSet, PolicyError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| PolicyError::InvalidGlob {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| PolicyError::InvalidGlob {
        pattern: String::new(),
        source,
    })
}

/// Errors from compiling scan policy globs.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// A glob pattern failed to compile.
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        /// The offending pattern as written.
        pattern: String,
        /// The underlying glob compilation error.
        #[source]
        source: globset::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(patterns: &[&str]) -> Vec<String> {
        patterns.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn permissive_policy_admits_everything() {
        let policy = ScanPolicy::permissive();
        assert!(policy.admits(Path::new("src/main.rs")));
        assert!(policy.admits(Path::new("/absolute/anything.py")));
    }

    #[test]
    fn excludes_reject_matching_paths() {
        let policy = ScanPolicy::new(&[], &strings(&["**/node_modules/**", "*.lock"])).unwrap();
        assert!(!policy.admits(Path::new("web/node_modules/pkg/index.js")));
        assert!(!policy.admits(Path::new("Cargo.lock")));
        assert!(policy.admits(Path::new("src/lib.rs")));
    }

    #[test]
    fn includes_restrict_to_matching_paths() {
        let policy = ScanPolicy::new(&strings(&["src/**/*.rs"]), &[]).unwrap();
        assert!(policy.admits(Path::new("src/deep/module.rs")));
        assert!(!policy.admits(Path::new("docs/guide.md")));
    }

    #[test]
    fn excludes_win_over_includes() {
        let policy =
            ScanPolicy::new(&strings(&["src/**"]), &strings(&["src/generated/**"])).unwrap();
        assert!(policy.admits(Path::new("src/main.rs")));
        assert!(!policy.admits(Path::new("src/generated/schema.rs")));
    }

    #[test]
    fn invalid_glob_is_rejected_with_the_pattern() {
        let error = ScanPolicy::new(&[], &strings(&["[unclosed"])).unwrap_err();
        assert!(error.to_string().contains("[unclosed"));
    }
}
