//! Deploy Result

use crate::domain::entities::DeployOutcome;
use crate::domain::value_objects::Platform;

/// How a deployment run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployReport {
    /// The name did not match any platform; nothing ran
    Unsupported,
    /// The routine reported a failure
    Failed { platform: Platform },
    /// The routine ran to the end
    Finished {
        platform: Platform,
        outcome: DeployOutcome,
    },
}

impl DeployReport {
    pub fn platform(&self) -> Option<Platform> {
        match self {
            DeployReport::Unsupported => None,
            DeployReport::Failed { platform } | DeployReport::Finished { platform, .. } => {
                Some(*platform)
            }
        }
    }

    /// The live URL, when the deployment produced one
    pub fn url(&self) -> Option<&str> {
        match self {
            DeployReport::Finished { outcome, .. } => outcome.url(),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DeployReport::Finished { .. })
    }
}
