//! 价格目录及查询操作
//!
//! The catalog is built once at startup and never mutated afterwards, so all
//! queries take `&self` and run concurrently without locking.

use std::collections::BTreeSet;
use std::path::PathBuf;

use common::errors::{AppError, AppResult, CatalogLoadError};
use common::models::price::eq_ignore_case;
use common::models::query::{year_in_range, YEAR_MAX, YEAR_MIN};
use common::models::PriceRecord;

/// Immutable, load-ordered collection of price records.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<PriceRecord>,
}

impl Catalog {
    /// Wraps a non-empty sequence of records.
    ///
    /// `source` names where the records came from and is only used in errors.
    pub fn new(
        records: Vec<PriceRecord>,
        source: impl Into<PathBuf>,
    ) -> Result<Self, CatalogLoadError> {
        if records.is_empty() {
            return Err(CatalogLoadError::EmptyDataset {
                path: source.into(),
            });
        }
        Ok(Self { records })
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Every record, in load order.
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    /// Distinct regions, sorted. Dedup is by exact value, so casing variants
    /// are listed separately.
    pub fn regions(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.region.as_str()))
    }

    /// Distinct products, sorted. Same dedup rule as [`Catalog::regions`].
    pub fn products(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.produit.as_str()))
    }

    /// Distinct varieties of `produit`, matched case-insensitively.
    ///
    /// Unknown products yield an empty list.
    pub fn varieties(&self, produit: &str) -> Vec<String> {
        distinct(
            self.records
                .iter()
                .filter(|r| eq_ignore_case(&r.produit, produit))
                .map(|r| r.variete.as_str()),
        )
    }

    /// First record, in load order, matching the combination exactly.
    ///
    /// # Errors
    /// `InvalidParameter` if `annee` is outside the accepted range (checked
    /// before scanning), `RecordNotFound` if nothing matches.
    pub fn find_exact(
        &self,
        region: &str,
        produit: &str,
        variete: &str,
        annee: i32,
    ) -> AppResult<&PriceRecord> {
        if !year_in_range(annee) {
            return Err(AppError::InvalidParameter(format!(
                "annee must be between {YEAR_MIN} and {YEAR_MAX}, got {annee}"
            )));
        }

        self.records
            .iter()
            .find(|r| r.matches(region, produit, variete, annee))
            .ok_or_else(|| AppError::RecordNotFound {
                region: region.to_string(),
                produit: produit.to_string(),
                variete: variete.to_string(),
                annee,
            })
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
