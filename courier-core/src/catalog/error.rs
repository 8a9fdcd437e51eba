use thiserror::Error;

use crate::{CoordinateError, SpecialtyError};

/// Errors raised while building a [`crate::Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The JSON payload could not be decoded.
    #[error("failed to parse catalogue JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A specialty record failed validation.
    #[error(transparent)]
    InvalidSpecialty(#[from] SpecialtyError),
    /// Two specialty records share a name.
    #[error("specialty {name} is defined more than once")]
    DuplicateSpecialty {
        /// Repeated name.
        name: String,
    },
    /// An order or restaurant references a specialty that was never defined.
    #[error("{owner} references unknown specialty {specialty}")]
    UnknownSpecialty {
        /// The referencing record, e.g. `order 7`.
        owner: String,
        /// Unresolved specialty name.
        specialty: String,
    },
    /// Two orders share an identifier.
    #[error("order id {id} is used more than once")]
    DuplicateOrderId {
        /// Repeated identifier.
        id: u64,
    },
    /// A record carries an invalid coordinate.
    #[error("{owner} has an invalid coordinate: {source}")]
    InvalidCoordinate {
        /// The offending record, e.g. `restaurant Mueta`.
        owner: String,
        /// Underlying validation failure.
        #[source]
        source: CoordinateError,
    },
}
