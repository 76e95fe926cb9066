use crate::shared::error::DtrackError;
use crate::shared::Result;
use regex::Regex;

/// Versions of permanent branches and tagged releases; never deleted.
pub const DEFAULT_LONG_LIVED_VERSIONS: &[&str] = &["master", "main", "develop", r"\d+\.\d+\.\d+"];

/// Versions of pull-request builds and pre-release snapshots; eligible for deletion.
pub const DEFAULT_SHORT_LIVED_VERSIONS: &[&str] = &[
    r"PR-\d+",
    r".+-SNAPSHOT",
    r"\d+\.\d+\.\d+-(?:alpha|beta|rc|RC|M)[.-]?\d*",
];

/// Name filter that accepts every project
pub const MATCH_ANY: &str = ".*";

/// Maximum length of a single pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// Outcome of classifying one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchDecision {
    /// The project has no version at all
    RetainUnversioned,
    /// The project name does not match the operator's filter
    RetainFiltered,
    /// Trunk, integration branch or release
    RetainLongLived,
    /// Pull-request build or snapshot
    Delete,
    /// The version matches no known scheme and needs an operator's look
    RetainUnknown,
}

/// BranchClassifier policy deciding which project versions are disposable
///
/// Every pattern is matched against the whole string: `develop` does not
/// match `develop-old`. Rules are evaluated in a fixed order:
/// 1. no version -> retain (unversioned)
/// 2. name outside the filter -> retain (filtered)
/// 3. long-lived version -> retain
/// 4. short-lived version -> delete
/// 5. anything else -> retain (unknown)
#[derive(Debug, Clone)]
pub struct BranchClassifier {
    name_filter: Regex,
    long_lived: Vec<Regex>,
    short_lived: Vec<Regex>,
}

impl BranchClassifier {
    /// Compiles the classifier.
    ///
    /// # Errors
    /// Returns a configuration error when a pattern is too long or is not a
    /// valid regular expression.
    pub fn new<S: AsRef<str>>(
        name_filter: &str,
        long_lived: &[S],
        short_lived: &[S],
    ) -> Result<Self> {
        Ok(Self {
            name_filter: compile_full_match(name_filter, "project filter")?,
            long_lived: long_lived
                .iter()
                .map(|p| compile_full_match(p.as_ref(), "long-lived version"))
                .collect::<Result<_>>()?,
            short_lived: short_lived
                .iter()
                .map(|p| compile_full_match(p.as_ref(), "short-lived version"))
                .collect::<Result<_>>()?,
        })
    }

    /// Classifier with the built-in gitflow patterns.
    pub fn with_default_patterns(name_filter: &str) -> Result<Self> {
        Self::new(
            name_filter,
            DEFAULT_LONG_LIVED_VERSIONS,
            DEFAULT_SHORT_LIVED_VERSIONS,
        )
    }

    pub fn classify(&self, name: &str, version: Option<&str>) -> BranchDecision {
        let Some(version) = version else {
            return BranchDecision::RetainUnversioned;
        };

        if !self.name_filter.is_match(name) {
            return BranchDecision::RetainFiltered;
        }

        if self.long_lived.iter().any(|re| re.is_match(version)) {
            return BranchDecision::RetainLongLived;
        }

        if self.short_lived.iter().any(|re| re.is_match(version)) {
            return BranchDecision::Delete;
        }

        BranchDecision::RetainUnknown
    }
}

/// Validates a pattern and anchors it so it only matches the whole input.
pub fn compile_full_match(pattern: &str, description: &str) -> Result<Regex> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(DtrackError::configuration(format!(
            "{} pattern is too long ({} bytes). Maximum allowed: {} bytes",
            description,
            pattern.len(),
            MAX_PATTERN_LENGTH
        ))
        .into());
    }

    Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
        DtrackError::configuration(format!(
            "invalid {} pattern '{}': {}",
            description, pattern, e
        ))
        .into()
    })
}
