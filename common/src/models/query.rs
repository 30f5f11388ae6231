//! Query-string parameter models.

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Earliest year accepted by price lookups.
pub const YEAR_MIN: i32 = 2000;

/// Latest year accepted by price lookups.
pub const YEAR_MAX: i32 = 2035;

/// Returns true when `annee` lies within the accepted lookup range.
pub fn year_in_range(annee: i32) -> bool {
    (YEAR_MIN..=YEAR_MAX).contains(&annee)
}

/// Parameters for listing the varieties of a product.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VarietesQuery {
    /// Product name (matched case-insensitively).
    pub produit: String,
}

/// Parameters for an exact price lookup.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PredictQuery {
    /// Region (matched case-insensitively).
    pub region: String,

    /// Product name (matched case-insensitively).
    pub produit: String,

    /// Product variety (matched case-insensitively).
    pub variete: String,

    /// Year of the observation.
    #[validate(range(min = YEAR_MIN, max = YEAR_MAX, message = "annee must be between 2000 and 2035"))]
    #[param(minimum = 2000, maximum = 2035)]
    pub annee: i32,
}
