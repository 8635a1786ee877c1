//! Subscription tiers and their price points

/// Billing interval for a recurring price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Month,
    Year,
}

impl Interval {
    /// Value the billing API expects for `recurring[interval]`
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Month => "month",
            Interval::Year => "year",
        }
    }

    /// Suffix used in the reported env var names
    pub fn env_suffix(&self) -> &'static str {
        match self {
            Interval::Month => "MONTHLY",
            Interval::Year => "YEARLY",
        }
    }
}

/// One recurring price of a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePoint {
    /// Amount in the smallest currency unit (cents)
    pub unit_amount: u64,
    pub interval: Interval,
}

/// A product tier with a monthly and a yearly price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    /// Upper-case id used in env var names (`PRO`, `ENTERPRISE`)
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub monthly: PricePoint,
    pub yearly: PricePoint,
}

impl Tier {
    /// Price points in creation order: monthly first
    pub fn price_points(&self) -> [PricePoint; 2] {
        [self.monthly, self.yearly]
    }

    /// Env var that will carry the price id, e.g. `STRIPE_PRO_MONTHLY`
    pub fn env_var(&self, interval: Interval) -> String {
        format!("STRIPE_{}_{}", self.id, interval.env_suffix())
    }
}

/// The full catalogue created by billing setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingPlan {
    pub currency: String,
    pub tiers: Vec<Tier>,
}

impl BillingPlan {
    /// OptionScope's Pro and Enterprise tiers
    pub fn optionscope(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            tiers: vec![
                Tier {
                    id: "PRO",
                    name: "OptionScope Pro",
                    description: "Advanced options trading analytics for serious traders",
                    monthly: PricePoint {
                        unit_amount: 2999,
                        interval: Interval::Month,
                    },
                    yearly: PricePoint {
                        unit_amount: 29999,
                        interval: Interval::Year,
                    },
                },
                Tier {
                    id: "ENTERPRISE",
                    name: "OptionScope Enterprise",
                    description: "Full-featured solution for institutions",
                    monthly: PricePoint {
                        unit_amount: 9999,
                        interval: Interval::Month,
                    },
                    yearly: PricePoint {
                        unit_amount: 99999,
                        interval: Interval::Year,
                    },
                },
            ],
        }
    }
}

/// Price ids returned by the provider, in creation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatedPrices {
    entries: Vec<(String, String)>,
}

impl CreatedPrices {
    pub fn push(&mut self, env_var: String, price_id: String) {
        self.entries.push((env_var, price_id));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `NAME=price_id` lines for the operator to copy into their env
    pub fn env_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, id)| format!("{}={}", name, id))
            .collect()
    }
}
