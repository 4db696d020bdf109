use thiserror::Error;

/// Raised when a write would shadow a name reserved by the mapping interface.
///
/// [`DotMap`](crate::DotMap) exposes its keys through accessor methods as well
/// as through plain key lookup. Allowing a key like `"keys"` or `"update"`
/// into the store would make the two access forms disagree, so such writes are
/// rejected up front.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("key '{key}' is reserved by the mapping interface and cannot be set")]
pub struct ReservedKeyError {
    /// The offending key.
    pub key: String,
}

impl ReservedKeyError {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        ReservedKeyError { key: key.into() }
    }
}

pub type Result<T> = std::result::Result<T, ReservedKeyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_key() {
        let err = ReservedKeyError::new("items");
        assert_eq!(
            err.to_string(),
            "key 'items' is reserved by the mapping interface and cannot be set"
        );
    }
}
