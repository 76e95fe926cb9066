pub mod branch_classifier;

pub use branch_classifier::{
    BranchClassifier, BranchDecision, DEFAULT_LONG_LIVED_VERSIONS, DEFAULT_SHORT_LIVED_VERSIONS,
    MATCH_ANY,
};
