use serde::{Deserialize, Serialize};

/// One unit of remote work: a request name and the dataset it runs over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    /// Request name, also used as the CRAB project directory suffix
    pub name: String,
    /// Dataset locator, e.g. `/TT_TuneCUETP8M2T4_13TeV-powheg-pythia8/.../MINIAODSIM`
    pub dataset: String,
    /// Disabled entries stay listed but are never submitted
    #[serde(default = "TaskEntry::default_enabled")]
    pub enabled: bool,
}

/// Lifecycle of a task inside one batch run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TaskState {
    #[default]
    Pending,
    Submitting,
    Done,
}

impl TaskEntry {
    pub fn new(name: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dataset: dataset.into(),
            enabled: true,
        }
    }

    pub fn default_enabled() -> bool {
        true
    }
}

impl TaskState {
    /// Next state, `Done` is terminal
    pub fn advance(self) -> Self {
        match self {
            Self::Pending => Self::Submitting,
            Self::Submitting | Self::Done => Self::Done,
        }
    }
}
