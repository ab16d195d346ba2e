use serde::{Deserialize, Serialize};
use std::fmt;

use super::format::{fixed_two_decimals, round_cents};

/// A single donor and the running summary of their gifts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    name: String,
    #[serde(default)]
    total_donation: f64,
    #[serde(default)]
    donation_num: u32,
    #[serde(skip)]
    most_recent_donation: f64,
}

impl Donor {
    /// A donor with no recorded gifts
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_donation: 0.0,
            donation_num: 0,
            most_recent_donation: 0.0,
        }
    }

    /// A donor seeded from historical totals.
    ///
    /// Individual gift amounts are unknown, so the most recent donation stays at zero.
    pub fn from_existing(name: impl Into<String>, total_donation: f64, donation_num: u32) -> Self {
        Self {
            name: name.into(),
            total_donation,
            donation_num,
            most_recent_donation: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_donation(&self) -> f64 {
        self.total_donation
    }

    pub fn donation_num(&self) -> u32 {
        self.donation_num
    }

    pub fn most_recent_donation(&self) -> f64 {
        self.most_recent_donation
    }

    /// Record one gift. Negative amounts reduce the total.
    pub fn new_donation(&mut self, amount: f64) {
        self.total_donation += amount;
        self.donation_num += 1;
        self.most_recent_donation = amount;
    }

    /// Average gift rounded to cents, or zero before the first gift
    pub fn avg_donation(&self) -> f64 {
        if self.donation_num == 0 {
            return 0.0;
        }
        round_cents(self.total_donation / f64::from(self.donation_num))
    }

    /// Letter thanking the donor for their latest gift
    pub fn generate_recent_thanks(&self) -> String {
        self.letter(&format!(
            "donation of ${}",
            fixed_two_decimals(self.most_recent_donation)
        ))
    }

    /// Letter thanking the donor for everything they have given
    pub fn generate_total_thanks(&self) -> String {
        self.letter(&format!(
            "donations totalling ${}",
            fixed_two_decimals(self.total_donation)
        ))
    }

    fn letter(&self, gift: &str) -> String {
        format!(
            "Dear {},\n\nThank you for your kind {}.\nIt will be put to very good use.\n\nSincerely,\n-The Team",
            self.name, gift
        )
    }
}

impl fmt::Display for Donor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Donor with a name of {}", self.name)
    }
}
