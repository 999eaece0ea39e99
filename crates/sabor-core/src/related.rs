//! Fields that arrive either as a bare identifier or as an embedded record.
//!
//! The backend populates relations on some endpoints and not on others: a
//! producto's `productor` is `"665f..."` in one list and a full object in the
//! next. Decoding happens once at the DTO boundary; past that point callers
//! only ever see this enum.

use serde::{Deserialize, Serialize};

/// Something the backend identifies by id and may or may not have populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Related<T> {
    /// Only the identifier was sent.
    Reference(String),
    /// The full record was embedded.
    Embedded(T),
}

/// Records that can be referred to by id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl<T: Identified> Related<T> {
    /// Identifier of the related record, whichever form it arrived in.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Reference(id) => id,
            Self::Embedded(record) => record.id(),
        }
    }
}

impl<T> Related<T> {
    /// The embedded record, if the backend populated it.
    #[must_use]
    pub const fn embedded(&self) -> Option<&T> {
        match self {
            Self::Reference(_) => None,
            Self::Embedded(record) => Some(record),
        }
    }

    /// Convert the embedded record, keeping references as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Related<U> {
        match self {
            Self::Reference(id) => Related::Reference(id),
            Self::Embedded(record) => Related::Embedded(f(record)),
        }
    }
}
