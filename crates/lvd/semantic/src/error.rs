use crate::policy::Boundary;

/// Errors raised at checked boundaries of a semantic value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("is_valid returned false for semantic type {type_name} at {boundary}")]
    Invalid {
        type_name: &'static str,
        boundary: Boundary,
    },
    #[error("{boundary} is prohibited for semantic type {type_name}")]
    Prohibited {
        type_name: &'static str,
        boundary: Boundary,
    },
}

impl ValidationError {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Invalid { type_name, .. } | Self::Prohibited { type_name, .. } => type_name,
        }
    }

    pub fn boundary(&self) -> Boundary {
        match self {
            Self::Invalid { boundary, .. } | Self::Prohibited { boundary, .. } => *boundary,
        }
    }
}
