use crate::catalog::types::PriceModel;

/// Cost of one engagement under the given billing rule.
///
/// Per-minute billing charges whole minutes with a minimum of one, so even a
/// point-blank shot pays for its first minute. Flat and per-shot prices are
/// time-invariant.
pub fn price_eur(model: PriceModel, price_value_eur: f64, time_to_intercept_s: f64) -> f64 {
    match model {
        PriceModel::Flat | PriceModel::PerShot => price_value_eur,
        PriceModel::PerMinute => {
            let minutes = (time_to_intercept_s / 60.0).ceil().max(1.0);
            minutes * price_value_eur
        }
    }
}
