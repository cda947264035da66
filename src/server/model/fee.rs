//! Platform fee arithmetic.

/// Percentage charged when no platform settings row is active.
pub const DEFAULT_FEE_PERCENTAGE: f64 = 5.0;
/// Defaults written by `initialize_settings`, in cents.
pub const DEFAULT_MINIMUM_FEE: i64 = 100;
pub const DEFAULT_MAXIMUM_FEE: i64 = 5_000;

/// Fee rule derived from the active platform settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeeSchedule {
    /// No settings: a flat percentage without bounds.
    Default,
    Configured {
        percentage: f64,
        minimum: i64,
        maximum: Option<i64>,
    },
}

impl FeeSchedule {
    pub fn from_settings(settings: Option<&entity::platform_settings::Model>) -> Self {
        match settings {
            Some(settings) => Self::Configured {
                percentage: settings.platform_fee_percentage,
                minimum: settings.minimum_platform_fee,
                maximum: settings.maximum_platform_fee,
            },
            None => Self::Default,
        }
    }

    /// Fee in cents for a charge of `amount` cents.
    ///
    /// The configured minimum wins over the maximum when the two cross. The fee never
    /// exceeds the charge itself.
    pub fn fee_for(&self, amount: i64) -> i64 {
        let fee = match *self {
            Self::Default => percent_of(amount, DEFAULT_FEE_PERCENTAGE),
            Self::Configured {
                percentage,
                minimum,
                maximum,
            } => {
                let calculated = percent_of(amount, percentage);
                let capped = maximum.map_or(calculated, |max| calculated.min(max));
                capped.max(minimum)
            }
        };
        fee.min(amount)
    }

    /// `(platform_fee, owner_amount)` for a charge of `amount` cents.
    pub fn split(&self, amount: i64) -> (i64, i64) {
        let fee = self.fee_for(amount);
        (fee, amount - fee)
    }
}

fn percent_of(amount: i64, percentage: f64) -> i64 {
    (amount as f64 * percentage / 100.0).round() as i64
}
