use std::fmt;

/// Convenience result type used across Aleph.
pub type AlephResult<T> = Result<T, AlephError>;

/// Top-level error taxonomy used by builder, layout and playback APIs.
#[derive(thiserror::Error, Debug)]
pub enum AlephError {
    /// A step violated the create/transform/remove lifecycle of scene entries.
    #[error("authoring error: {0}")]
    Authoring(AuthoringError),

    /// A layout computation received invalid numeric input.
    #[error("layout error: {0}")]
    Layout(String),

    /// The timeline was used outside of its `Building -> Playing -> Done` order.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Invalid scene configuration values.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AlephError {
    /// Build an [`AlephError::Authoring`] value without step context.
    pub fn authoring(fault: LifecycleFault, id: Option<&str>) -> Self {
        Self::Authoring(AuthoringError {
            step: None,
            id: id.map(str::to_owned),
            fault,
        })
    }

    /// Build an [`AlephError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build an [`AlephError::Timeline`] value.
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build an [`AlephError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`AlephError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Attach the index of the offending step to an authoring error.
    ///
    /// Other variants pass through unchanged, and an index that is already set is kept.
    pub fn at_step(self, index: usize) -> Self {
        match self {
            Self::Authoring(mut e) => {
                e.step.get_or_insert(index);
                Self::Authoring(e)
            }
            other => other,
        }
    }

    /// Borrow the authoring details, if this is an authoring error.
    pub fn as_authoring(&self) -> Option<&AuthoringError> {
        match self {
            Self::Authoring(e) => Some(e),
            _ => None,
        }
    }
}

/// A lifecycle violation, located by step index and entry id when known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthoringError {
    /// Index of the offending step in append order.
    pub step: Option<usize>,
    /// Entry id the fault refers to.
    pub id: Option<String>,
    /// What went wrong.
    pub fault: LifecycleFault,
}

impl fmt::Display for AuthoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(step) = self.step {
            write!(f, "step {step}: ")?;
        }
        match &self.id {
            Some(id) => write!(f, "{} (id '{id}')", self.fault),
            None => write!(f, "{}", self.fault),
        }
    }
}

impl std::error::Error for AuthoringError {}

/// Kinds of lifecycle violations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LifecycleFault {
    /// `create` on an id that is already live.
    AlreadyLive,
    /// An operation other than `create` on an id that is not live.
    NotLive {
        /// Operation name (`transform`, `remove`, `continuous`).
        op: &'static str,
    },
    /// The same id appears in more than one operation of a single step.
    RepeatedInStep,
    /// A duration, wait or lag ratio is negative or not finite.
    InvalidTiming {
        /// Offending step field.
        field: &'static str,
    },
}

impl fmt::Display for LifecycleFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyLive => f.write_str("create of an id that is already live"),
            Self::NotLive { op } => write!(f, "{op} of an id that is not live"),
            Self::RepeatedInStep => f.write_str("id appears more than once in one step"),
            Self::InvalidTiming { field } => write!(f, "invalid step timing for '{field}'"),
        }
    }
}

impl From<serde_json::Error> for AlephError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
