use crate::catalog::types::{AvailabilityEntry, Base, InterceptorType};
use crate::prelude::{EngineError, EngineResult};

/// Read-only bundle of reference data the selection engine works against.
///
/// Always passed explicitly; the engine holds no ambient catalog state, so a
/// snapshot taken at lookup time stays coherent for the whole computation no
/// matter what the backing store does afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    bases: Vec<Base>,
    interceptors: Vec<InterceptorType>,
    availability: Vec<AvailabilityEntry>,
}

impl CatalogSnapshot {
    pub fn new(
        bases: Vec<Base>,
        interceptors: Vec<InterceptorType>,
        availability: Vec<AvailabilityEntry>,
    ) -> Self {
        Self {
            bases,
            interceptors,
            availability,
        }
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    pub fn interceptors(&self) -> &[InterceptorType] {
        &self.interceptors
    }

    /// Resolves the availability relation into concrete (base, interceptor)
    /// pairs, sorted by base name then interceptor name so that downstream
    /// cost ties break deterministically.
    ///
    /// An entry naming an unknown base or interceptor is a data-integrity
    /// fault in the catalog and fails the whole resolution; the engine never
    /// guesses or silently skips.
    pub fn options(&self) -> EngineResult<Vec<(&Base, &InterceptorType)>> {
        let mut pairs = Vec::with_capacity(self.availability.len());
        for entry in &self.availability {
            let base = self
                .bases
                .iter()
                .find(|b| b.name == entry.base)
                .ok_or_else(|| {
                    EngineError::ReferenceData(format!(
                        "availability references unknown base '{}'",
                        entry.base
                    ))
                })?;
            let interceptor = self
                .interceptors
                .iter()
                .find(|i| i.name == entry.interceptor)
                .ok_or_else(|| {
                    EngineError::ReferenceData(format!(
                        "availability references unknown interceptor '{}'",
                        entry.interceptor
                    ))
                })?;
            pairs.push((base, interceptor));
        }
        pairs.sort_by(|a, b| {
            (a.0.name.as_str(), a.1.name.as_str()).cmp(&(b.0.name.as_str(), b.1.name.as_str()))
        });
        Ok(pairs)
    }
}
