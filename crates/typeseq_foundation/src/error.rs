//! Error types for typeseq.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every failure falls into one of two kinds: an invalid argument or an
//! index out of range.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// The main error type for typeseq operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid argument error with the given reason.
    #[must_use]
    pub fn invalid(reason: InvalidArgument) -> Self {
        Self::new(ErrorKind::InvalidArgument(reason))
    }

    /// Creates a type mismatch error for a single value.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::invalid(InvalidArgument::TypeMismatch {
            expected,
            actual,
            position: None,
        })
    }

    /// Creates a type mismatch error for the value at `position` in a batch.
    #[must_use]
    pub fn type_mismatch_at(expected: Type, actual: Type, position: usize) -> Self {
        Self::invalid(InvalidArgument::TypeMismatch {
            expected,
            actual,
            position: Some(position),
        })
    }

    /// Creates an unknown type name error.
    #[must_use]
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::invalid(InvalidArgument::UnknownType(name.into()))
    }

    /// Creates a negative index error.
    #[must_use]
    pub fn negative_index(index: i64) -> Self {
        Self::invalid(InvalidArgument::NegativeIndex(index))
    }

    /// Creates a malformed slice bounds error.
    #[must_use]
    pub fn slice_bounds(start: i64, end: i64, length: usize) -> Self {
        Self::invalid(InvalidArgument::SliceBounds { start, end, length })
    }

    /// Creates an error for a merge source that is not a sequence.
    #[must_use]
    pub fn not_a_sequence(actual: Type) -> Self {
        Self::invalid(InvalidArgument::NotASequence(actual))
    }

    /// Creates an error for inserting into an untyped collection.
    #[must_use]
    pub fn untyped() -> Self {
        Self::invalid(InvalidArgument::Untyped)
    }

    /// Creates an error for declaring a type name twice.
    #[must_use]
    pub fn duplicate_type(name: impl Into<String>) -> Self {
        Self::invalid(InvalidArgument::DuplicateType(name.into()))
    }

    /// Creates an error for extending or implementing an undeclared type.
    #[must_use]
    pub fn unknown_supertype(name: impl Into<String>) -> Self {
        Self::invalid(InvalidArgument::UnknownSupertype(name.into()))
    }

    /// Creates an index out of range error.
    #[must_use]
    pub fn out_of_range(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::OutOfRange { index, length })
    }

    /// Returns true if this is an invalid argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument(_))
    }

    /// Returns true if this is an index out of range error.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self.kind, ErrorKind::OutOfRange { .. })
    }

    /// Returns the reason, if this is an invalid argument error.
    #[must_use]
    pub const fn invalid_argument(&self) -> Option<&InvalidArgument> {
        match &self.kind {
            ErrorKind::InvalidArgument(reason) => Some(reason),
            ErrorKind::OutOfRange { .. } => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An argument was malformed or violated the collection's type.
    #[error("invalid argument: {0}")]
    InvalidArgument(InvalidArgument),

    /// A well-formed index was past the end of the collection.
    #[error("index out of range: {index} (length {length})")]
    OutOfRange {
        /// The index that was accessed.
        index: usize,
        /// The actual length of the collection.
        length: usize,
    },
}

/// Reasons an argument can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A type name matched no scalar kind, class, or interface.
    UnknownType(String),
    /// A value does not conform to the required type.
    TypeMismatch {
        /// The required type.
        expected: Type,
        /// The runtime type of the rejected value.
        actual: Type,
        /// Position of the value within a batch, if validated as part of one.
        position: Option<usize>,
    },
    /// An index was negative.
    NegativeIndex(i64),
    /// Slice bounds were negative, inverted, or past the end.
    SliceBounds {
        /// Requested start (inclusive).
        start: i64,
        /// Requested end (inclusive).
        end: i64,
        /// Length of the collection being sliced.
        length: usize,
    },
    /// A merge source was neither a collection nor an array.
    NotASequence(Type),
    /// The collection has no element type, so nothing can be inserted.
    Untyped,
    /// A class or interface name was declared twice.
    DuplicateType(String),
    /// A class or interface extends or implements an undeclared name.
    UnknownSupertype(String),
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType(name) => write!(f, "unknown type: {name}"),
            Self::TypeMismatch {
                expected,
                actual,
                position,
            } => {
                write!(f, "type mismatch: expected {expected}, got {actual}")?;
                if let Some(position) = position {
                    write!(f, " at position {position}")?;
                }
                Ok(())
            }
            Self::NegativeIndex(index) => write!(f, "negative index: {index}"),
            Self::SliceBounds { start, end, length } => {
                write!(f, "invalid slice bounds {start}..={end} (length {length})")
            }
            Self::NotASequence(actual) => write!(f, "expected a sequence, got {actual}"),
            Self::Untyped => write!(f, "collection has no element type"),
            Self::DuplicateType(name) => write!(f, "type already declared: {name}"),
            Self::UnknownSupertype(name) => write!(f, "undeclared supertype: {name}"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The collection operation that failed.
    pub operation: Option<&'static str>,
    /// The declared element type of the collection involved.
    pub element_type: Option<Type>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Sets the collection's element type.
    #[must_use]
    pub fn with_element_type(mut self, ty: Type) -> Self {
        self.element_type = Some(ty);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = self.operation {
            write!(f, "in {operation}")?;
        }
        if let Some(ty) = &self.element_type {
            if self.operation.is_some() {
                write!(f, " ")?;
            }
            write!(f, "on collection<{ty}>")?;
        }
        Ok(())
    }
}
