//! Sort order for list endpoints

/// Sort order accepted by list endpoints that order on creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sort {
    /// Oldest first
    CreatedAtAsc,
    /// Newest first
    CreatedAtDesc,
}

impl Sort {
    /// The wire value for the `sort` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAtAsc => "createdAt",
            Self::CreatedAtDesc => "-createdAt",
        }
    }
}
