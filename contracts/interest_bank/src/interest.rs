use crate::storage::BASIS_POINTS;

pub struct InterestCalculator;

impl InterestCalculator {
    /// Interest owed on `principal` after `elapsed_units` whole time units
    ///
    /// Formula: per_unit = floor(principal × rate_bps / 10,000); interest = per_unit × elapsed_units
    ///
    /// Truncation happens once, on the per-unit amount. Multiplying by the
    /// elapsed units first and dividing last gives a different (larger) result
    /// whenever the per-unit division leaves a remainder.
    ///
    /// Example:
    /// - principal: 1e18, rate: 100 bps (1% per unit), elapsed: 5 units
    /// - per_unit: 1e16
    /// - interest: 5e16
    pub fn accrue(principal: i128, rate_bps: u32, elapsed_units: u64) -> Option<i128> {
        let per_unit = principal
            .checked_mul(rate_bps as i128)?
            .checked_div(BASIS_POINTS)?;

        per_unit.checked_mul(elapsed_units as i128)
    }

    /// Whole time units between `created_at` and `now`; partial units are dropped
    pub fn elapsed_units(created_at: u64, now: u64, time_unit: u64) -> u64 {
        now.saturating_sub(created_at)
            .checked_div(time_unit)
            .unwrap_or(0)
    }
}
