use thiserror::Error;

/// Errors raised by the checked entry points in [`query`](crate::query)
/// and by [`to_dictionary()`](crate::sequence::Sequence::to_dictionary).
///
/// Panics raised inside caller-supplied closures are never caught or wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required argument (source, selector, predicate or key selector) was absent.
    #[error("required argument `{name}` is missing")]
    MissingArgument { name: &'static str },

    /// Two elements produced the same dictionary key.
    /// `index` is the position of the second occurrence in the drained sequence.
    #[error("an element with the same key has already been added (element #{index})")]
    DuplicateKey { index: usize },
}

impl Error {
    pub(crate) fn missing(name: &'static str) -> Self {
        tracing::debug!(argument = name, "rejecting missing argument");
        Error::MissingArgument { name }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
