// Rust guideline compliant 2026-10-16

//! Protected branch checks.

/// Result of checking the current branch against the protected set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardVerdict {
    /// Committing on this branch is fine.
    Allowed,
    /// The branch is protected.
    Rejected {
        /// Name of the protected branch.
        branch: String,
    },
}

impl GuardVerdict {
    /// Returns whether the commit should be refused.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, GuardVerdict::Rejected { .. })
    }

    /// Returns the refusal message, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            GuardVerdict::Allowed => None,
            GuardVerdict::Rejected { branch } => {
                Some(format!("Direct commits to \"{}\" are not allowed.", branch))
            }
        }
    }
}

/// Checks `branch` against `protected` using exact name matching.
#[must_use]
pub fn check_branch(branch: &str, protected: &[String]) -> GuardVerdict {
    if protected.iter().any(|name| name == branch) {
        GuardVerdict::Rejected {
            branch: branch.to_string(),
        }
    } else {
        GuardVerdict::Allowed
    }
}
