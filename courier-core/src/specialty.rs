//! Food specialties and their urgency/mass attributes.

use std::hash::{Hash, Hasher};

use thiserror::Error;

/// Marker colour used when a specialty does not name one.
pub const DEFAULT_MARKER_COLOUR: &str = "gray";

/// A category of food with an urgency score and a per-order mass.
///
/// Identity is the name: two specialties compare equal when their names do,
/// whatever their weights. Specialties are created once from the catalogue and
/// shared behind `Arc` by every order and restaurant that references them.
///
/// # Examples
/// ```
/// use courier_core::Specialty;
///
/// # fn main() -> Result<(), courier_core::SpecialtyError> {
/// let catalana = Specialty::new("Catalana", 15.0, 400)?;
/// assert_eq!(catalana.name(), "Catalana");
/// assert_eq!(catalana.unit_weight(), 400);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Specialty {
    pub(crate) name: String,
    pub(crate) commitment_weight: f64,
    pub(crate) unit_weight: u32,
    pub(crate) marker_colour: String,
}

/// Errors returned by [`Specialty::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecialtyError {
    /// The specialty name was empty or whitespace.
    #[error("specialty name must not be empty")]
    EmptyName,
    /// The commitment weight was negative, NaN or infinite.
    #[error("specialty {name} has invalid commitment weight {value}")]
    InvalidCommitmentWeight {
        /// Specialty name.
        name: String,
        /// Rejected value.
        value: f64,
    },
    /// Orders of this specialty would weigh nothing.
    #[error("specialty {name} must have a positive unit weight")]
    ZeroUnitWeight {
        /// Specialty name.
        name: String,
    },
}

impl Specialty {
    /// Validate and construct a specialty with the default marker colour.
    ///
    /// # Errors
    ///
    /// Returns [`SpecialtyError`] for an empty name, a commitment weight that
    /// is not a finite non-negative number, or a zero unit weight.
    pub fn new(
        name: impl Into<String>,
        commitment_weight: f64,
        unit_weight: u32,
    ) -> Result<Self, SpecialtyError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SpecialtyError::EmptyName);
        }
        if !commitment_weight.is_finite() || commitment_weight < 0.0 {
            return Err(SpecialtyError::InvalidCommitmentWeight {
                name,
                value: commitment_weight,
            });
        }
        if unit_weight == 0 {
            return Err(SpecialtyError::ZeroUnitWeight { name });
        }
        Ok(Self {
            name,
            commitment_weight,
            unit_weight,
            marker_colour: DEFAULT_MARKER_COLOUR.to_owned(),
        })
    }

    /// Replace the map marker colour.
    #[must_use]
    pub fn with_marker_colour(mut self, colour: impl Into<String>) -> Self {
        self.marker_colour = colour.into();
        self
    }

    /// Identity of the specialty.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Urgency score; lower values are served first.
    #[must_use]
    pub const fn commitment_weight(&self) -> f64 {
        self.commitment_weight
    }

    /// Mass contributed to the bag by one order.
    #[must_use]
    pub const fn unit_weight(&self) -> u32 {
        self.unit_weight
    }

    /// Colour used by the map renderer for this specialty's markers.
    #[must_use]
    pub fn marker_colour(&self) -> &str {
        &self.marker_colour
    }
}

impl PartialEq for Specialty {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Specialty {}

impl Hash for Specialty {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn equality_ignores_weights() {
        let urgent = Specialty::new("Hindú", 12.0, 410).expect("valid specialty");
        let relaxed = Specialty::new("Hindú", 40.0, 100).expect("valid specialty");
        assert_eq!(urgent, relaxed);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank_names(#[case] name: &str) {
        let err = Specialty::new(name, 1.0, 1).expect_err("blank name");
        assert_eq!(err, SpecialtyError::EmptyName);
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_commitment(#[case] weight: f64) {
        let err = Specialty::new("Xinesa", weight, 350).expect_err("bad weight");
        assert!(matches!(err, SpecialtyError::InvalidCommitmentWeight { .. }));
    }

    #[rstest]
    fn rejects_weightless_orders() {
        let err = Specialty::new("Xinesa", 32.0, 0).expect_err("zero mass");
        assert_eq!(
            err,
            SpecialtyError::ZeroUnitWeight {
                name: "Xinesa".to_owned()
            }
        );
    }

    #[rstest]
    fn marker_colour_defaults_to_gray() {
        let specialty = Specialty::new("Peruana", 16.0, 405).expect("valid specialty");
        assert_eq!(specialty.marker_colour(), DEFAULT_MARKER_COLOUR);
        let coloured = specialty.with_marker_colour("purple");
        assert_eq!(coloured.marker_colour(), "purple");
    }
}
