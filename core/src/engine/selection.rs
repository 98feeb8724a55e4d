use crate::catalog::snapshot::CatalogSnapshot;
use crate::catalog::types::ThreatReport;
use crate::engine::classify::{classify, ThreatLevel};
use crate::engine::intercept;
use crate::engine::pricing::price_eur;
use crate::geo::projection::LocalFrame;
use crate::prelude::EngineResult;
use serde::Serialize;

/// A feasible (base, interceptor) engagement, fully priced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterceptCandidate {
    pub base_name: String,
    pub base_latitude: f64,
    pub base_longitude: f64,
    pub interceptor_name: String,
    pub interceptor_speed_ms: f64,
    pub intercept_latitude: f64,
    pub intercept_longitude: f64,
    pub time_to_intercept_s: f64,
    pub distance_m: f64,
    pub cost_eur: f64,
}

impl InterceptCandidate {
    /// Interceptor position `elapsed_s` seconds after launch, flying the
    /// straight base-to-intercept leg and holding at the intercept point once
    /// it arrives. The intercept point itself is static; only this fly-out
    /// position moves between radar ticks.
    pub fn interceptor_position(&self, elapsed_s: f64) -> (f64, f64) {
        let base = (self.base_latitude, self.base_longitude);
        let target = (self.intercept_latitude, self.intercept_longitude);
        let frame = LocalFrame::at(self.base_latitude);
        let (dx, dy) = frame.to_local(base, target);
        let leg_m = (dx * dx + dy * dy).sqrt();

        let travelled = (self.interceptor_speed_ms * elapsed_s).max(0.0);
        if travelled >= leg_m || leg_m == 0.0 {
            return target;
        }
        let fraction = travelled / leg_m;
        frame.from_local(base, (dx * fraction, dy * fraction))
    }
}

/// Outcome of a selection run. `NoFeasibleInterceptor` means no stocked
/// interceptor reaches the target inside its envelope — a terminal result the
/// caller must handle, not a failure. `NotEngaged` means the engagement
/// policy never opened the catalog (threat level below THREAT).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Decision {
    Engage(InterceptCandidate),
    NoFeasibleInterceptor,
    NotEngaged,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionResult {
    pub threat_level: ThreatLevel,
    pub decision: Decision,
}

/// Full decision path for one radar report: validate, classify, and — for
/// THREAT-level tracks only — search the catalog for the cheapest feasible
/// engagement. Pure over (report, snapshot): identical inputs give
/// bit-identical results.
pub fn select(report: &ThreatReport, catalog: &CatalogSnapshot) -> EngineResult<SelectionResult> {
    report.validate()?;
    let threat_level = classify(report.speed_ms, report.altitude_m);

    if threat_level != ThreatLevel::Threat {
        return Ok(SelectionResult {
            threat_level,
            decision: Decision::NotEngaged,
        });
    }

    let decision = match cheapest_candidate(report, catalog)? {
        Some(candidate) => Decision::Engage(candidate),
        None => Decision::NoFeasibleInterceptor,
    };

    Ok(SelectionResult {
        threat_level,
        decision,
    })
}

/// Policy-free candidate search: every stocked (base, interceptor) pair gets
/// a geometry solution, the envelope filter, and a price. Returned in
/// evaluation order — sorted by (base name, interceptor name) — so callers
/// inherit the same deterministic ordering the tie-break relies on.
pub fn evaluate_candidates(
    report: &ThreatReport,
    catalog: &CatalogSnapshot,
) -> EngineResult<Vec<InterceptCandidate>> {
    let mut candidates = Vec::new();

    for (base, interceptor) in catalog.options()? {
        if interceptor.speed_ms <= 0.0 {
            continue;
        }
        if report.altitude_m > interceptor.max_altitude_m {
            continue;
        }

        let Some(solution) = intercept::solve(
            report.latitude,
            report.longitude,
            report.speed_ms,
            report.heading_deg,
            base.latitude,
            base.longitude,
            interceptor.speed_ms,
        ) else {
            continue;
        };

        if solution.distance_m > interceptor.range_m {
            continue;
        }

        let cost_eur = price_eur(
            interceptor.price_model,
            interceptor.price_value_eur,
            solution.time_to_intercept_s,
        );

        candidates.push(InterceptCandidate {
            base_name: base.name.clone(),
            base_latitude: base.latitude,
            base_longitude: base.longitude,
            interceptor_name: interceptor.name.clone(),
            interceptor_speed_ms: interceptor.speed_ms,
            intercept_latitude: solution.latitude,
            intercept_longitude: solution.longitude,
            time_to_intercept_s: solution.time_to_intercept_s,
            distance_m: solution.distance_m,
            cost_eur,
        });
    }

    Ok(candidates)
}

/// Least-cost feasible candidate. Only a strictly cheaper candidate replaces
/// the incumbent, so exact cost ties resolve to the first pair in (base name,
/// interceptor name) order.
fn cheapest_candidate(
    report: &ThreatReport,
    catalog: &CatalogSnapshot,
) -> EngineResult<Option<InterceptCandidate>> {
    let mut best: Option<InterceptCandidate> = None;
    for candidate in evaluate_candidates(report, catalog)? {
        match &best {
            Some(current) if candidate.cost_eur >= current.cost_eur => {}
            _ => best = Some(candidate),
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{AvailabilityEntry, Base, InterceptorType, PriceModel};
    use crate::prelude::EngineError;

    fn report(speed_ms: f64, altitude_m: f64, heading_deg: f64, lat: f64, lon: f64) -> ThreatReport {
        ThreatReport {
            speed_ms,
            altitude_m,
            heading_deg,
            latitude: lat,
            longitude: lon,
            report_time: 0.0,
        }
    }

    fn sam(name: &str, price_value_eur: f64) -> InterceptorType {
        InterceptorType {
            name: name.to_string(),
            speed_ms: 900.0,
            range_m: 20_000.0,
            max_altitude_m: 10_000.0,
            price_model: PriceModel::Flat,
            price_value_eur,
        }
    }

    fn catalog_with(
        bases: Vec<Base>,
        interceptors: Vec<InterceptorType>,
        availability: Vec<(&str, &str)>,
    ) -> CatalogSnapshot {
        let availability = availability
            .into_iter()
            .map(|(b, i)| AvailabilityEntry {
                base: b.to_string(),
                interceptor: i.to_string(),
            })
            .collect();
        CatalogSnapshot::new(bases, interceptors, availability)
    }

    fn single_base_catalog() -> CatalogSnapshot {
        catalog_with(
            vec![Base {
                name: "Riga".to_string(),
                latitude: 56.95,
                longitude: 24.1,
            }],
            vec![sam("SAM", 1000.0)],
            vec![("Riga", "SAM")],
        )
    }

    // Target ~1 km north of Riga flying south at 100 m/s: trivially feasible.
    fn inbound_report() -> ThreatReport {
        report(100.0, 500.0, 180.0, 56.95 + 1000.0 / 111_320.0, 24.1)
    }

    #[test]
    fn threat_track_engages_the_only_option() {
        let result = select(&inbound_report(), &single_base_catalog()).unwrap();
        assert_eq!(result.threat_level, ThreatLevel::Threat);
        let Decision::Engage(candidate) = result.decision else {
            panic!("expected engagement, got {:?}", result.decision);
        };
        assert_eq!(candidate.base_name, "Riga");
        assert_eq!(candidate.interceptor_name, "SAM");
        assert_eq!(candidate.cost_eur, 1000.0);
        // Closure 1000 m/s over 1000 m.
        assert!((candidate.time_to_intercept_s - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sub_threat_levels_never_open_the_catalog() {
        // A dangling availability entry would error if the search ran.
        let broken = catalog_with(
            vec![],
            vec![],
            vec![("Nowhere", "Nothing")],
        );
        let mut r = inbound_report();
        r.speed_ms = 30.0; // CAUTION
        let result = select(&r, &broken).unwrap();
        assert_eq!(result.threat_level, ThreatLevel::Caution);
        assert_eq!(result.decision, Decision::NotEngaged);
    }

    #[test]
    fn out_of_envelope_target_is_a_valid_no_feasible_outcome() {
        let mut r = inbound_report();
        r.altitude_m = 50_000.0; // above the SAM ceiling, still THREAT
        let result = select(&r, &single_base_catalog()).unwrap();
        assert_eq!(result.threat_level, ThreatLevel::Threat);
        assert_eq!(result.decision, Decision::NoFeasibleInterceptor);
    }

    #[test]
    fn nan_report_is_rejected_before_classification() {
        let mut r = inbound_report();
        r.heading_deg = f64::NAN;
        assert!(matches!(
            select(&r, &single_base_catalog()),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn dangling_availability_propagates_as_reference_error() {
        let broken = catalog_with(
            vec![Base {
                name: "Riga".to_string(),
                latitude: 56.95,
                longitude: 24.1,
            }],
            vec![sam("SAM", 1000.0)],
            vec![("Riga", "SAM"), ("Riga", "Ghost")],
        );
        assert!(matches!(
            select(&inbound_report(), &broken),
            Err(EngineError::ReferenceData(_))
        ));
    }

    #[test]
    fn cost_ties_break_on_base_then_interceptor_name() {
        // Two bases at the same spot stocking identically priced
        // interceptors: every candidate costs the same, so the
        // lexicographically first (base, interceptor) pair must win.
        let catalog = catalog_with(
            vec![
                Base {
                    name: "Bravo".to_string(),
                    latitude: 56.95,
                    longitude: 24.1,
                },
                Base {
                    name: "Alpha".to_string(),
                    latitude: 56.95,
                    longitude: 24.1,
                },
            ],
            vec![sam("Zulu", 500.0), sam("Mike", 500.0)],
            vec![
                ("Bravo", "Zulu"),
                ("Bravo", "Mike"),
                ("Alpha", "Zulu"),
                ("Alpha", "Mike"),
            ],
        );
        let result = select(&inbound_report(), &catalog).unwrap();
        let Decision::Engage(candidate) = result.decision else {
            panic!("expected engagement");
        };
        assert_eq!(candidate.base_name, "Alpha");
        assert_eq!(candidate.interceptor_name, "Mike");
    }

    #[test]
    fn repeated_selection_is_bit_identical() {
        let catalog = single_base_catalog();
        let r = inbound_report();
        let first = select(&r, &catalog).unwrap();
        let second = select(&r, &catalog).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn cheaper_per_shot_beats_flat_when_both_feasible() {
        let mut cheap = sam("Gun", 0.0);
        cheap.price_model = PriceModel::PerShot;
        cheap.price_value_eur = 1.0;
        let catalog = catalog_with(
            vec![Base {
                name: "Riga".to_string(),
                latitude: 56.95,
                longitude: 24.1,
            }],
            vec![sam("SAM", 1000.0), cheap],
            vec![("Riga", "SAM"), ("Riga", "Gun")],
        );
        let result = select(&inbound_report(), &catalog).unwrap();
        let Decision::Engage(candidate) = result.decision else {
            panic!("expected engagement");
        };
        assert_eq!(candidate.interceptor_name, "Gun");
        assert_eq!(candidate.cost_eur, 1.0);
    }

    #[test]
    fn interceptor_position_tracks_the_fly_out_and_clamps() {
        let result = select(&inbound_report(), &single_base_catalog()).unwrap();
        let Decision::Engage(candidate) = result.decision else {
            panic!("expected engagement");
        };
        // Still at the base before launch.
        let (lat0, lon0) = candidate.interceptor_position(0.0);
        assert!((lat0 - candidate.base_latitude).abs() < 1e-9);
        assert!((lon0 - candidate.base_longitude).abs() < 1e-9);
        // Halfway through the leg it sits between base and intercept point.
        let (lat_half, _) = candidate.interceptor_position(candidate.time_to_intercept_s / 2.0);
        assert!(lat_half > candidate.base_latitude);
        assert!(lat_half < candidate.intercept_latitude);
        // Long after arrival it holds at the intercept point.
        let (lat_end, lon_end) = candidate.interceptor_position(3600.0);
        assert!((lat_end - candidate.intercept_latitude).abs() < 1e-9);
        assert!((lon_end - candidate.intercept_longitude).abs() < 1e-9);
    }
}
