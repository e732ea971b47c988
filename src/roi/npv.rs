/// Horizon of the net present value projection, in years.
pub const NPV_YEARS: u32 = 3;
/// Fixed annual discount rate.
pub const DISCOUNT_RATE: f64 = 0.08;

/// Net present value of a constant yearly benefit after an upfront
/// investment: `-investment + sum(benefit / (1 + rate)^y, y = 1..=years)`.
pub fn net_present_value(annual_benefit: f64, investment: f64, years: u32, rate: f64) -> f64 {
    (1..=years).fold(-investment, |npv, year| {
        npv + annual_benefit / (1.0 + rate).powi(year as i32)
    })
}
