//! Result of a deploy routine that did not fail

/// What a successful deploy routine hands back to the orchestrator.
///
/// A routine that failed returns no outcome at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// The platform's deploy command succeeded.
    ///
    /// `url` is `None` when the live URL could not be recovered.
    Live { url: Option<String> },

    /// The operator has to finish the deployment in the platform dashboard.
    ManualFollowUp { instructions: String },
}

impl DeployOutcome {
    pub fn live(url: impl Into<String>) -> Self {
        DeployOutcome::Live {
            url: Some(url.into()),
        }
    }

    pub fn manual(instructions: impl Into<String>) -> Self {
        DeployOutcome::ManualFollowUp {
            instructions: instructions.into(),
        }
    }

    /// The live URL, if this outcome has one
    pub fn url(&self) -> Option<&str> {
        match self {
            DeployOutcome::Live { url } => url.as_deref(),
            DeployOutcome::ManualFollowUp { .. } => None,
        }
    }
}
