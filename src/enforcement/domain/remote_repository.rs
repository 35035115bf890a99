use std::fmt;

/// A remote repository location, handed through to the resolver capability
/// and never interpreted by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    id: String,
    url: String,
}

impl RemoteRepository {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for RemoteRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.url)
    }
}
