use std::fmt;
use std::fmt::Write as _;

use super::donor::Donor;
use super::format::default_rendering;

const REPORT_HEADER: &str = "Donor Name      | Total Given | Num Gifts | Average Gift";
const REPORT_RULE_WIDTH: usize = 56;

/// Ordered set of donors, kept in the order they were added
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonorCollection {
    donor_list: Vec<Donor>,
}

impl DonorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a donor with no gifts. Names are not deduplicated.
    pub fn add_new_donor(&mut self, name: impl Into<String>) {
        self.donor_list.push(Donor::new(name));
    }

    /// Append a donor seeded from historical totals
    pub fn add_existing_donor(
        &mut self,
        name: impl Into<String>,
        total_donation: f64,
        donation_num: u32,
    ) {
        self.donor_list
            .push(Donor::from_existing(name, total_donation, donation_num));
    }

    pub fn donors(&self) -> &[Donor] {
        &self.donor_list
    }

    pub fn len(&self) -> usize {
        self.donor_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.donor_list.is_empty()
    }

    /// Names in insertion order
    pub fn list_donor_names(&self) -> Vec<String> {
        self.donor_list
            .iter()
            .map(|donor| donor.name().to_string())
            .collect()
    }

    /// First donor with exactly this name
    pub fn find_donor(&self, name: &str) -> Option<&Donor> {
        self.donor_list.iter().find(|donor| donor.name() == name)
    }

    /// Record a gift against the first donor with this name, adding the donor if needed
    pub fn record_donation(&mut self, name: &str, amount: f64) -> &Donor {
        let index = match self.donor_list.iter().position(|donor| donor.name() == name) {
            Some(index) => index,
            None => {
                self.add_new_donor(name);
                self.donor_list.len() - 1
            }
        };

        let donor = &mut self.donor_list[index];
        donor.new_donation(amount);
        donor
    }

    /// Total-donations letter for every donor, in insertion order
    pub fn generate_all_thanks(&self) -> Vec<String> {
        self.donor_list
            .iter()
            .map(Donor::generate_total_thanks)
            .collect()
    }

    /// Tabular giving summary, largest total first.
    ///
    /// Donors with equal totals keep their insertion order.
    pub fn generate_report(&self) -> String {
        let mut rows: Vec<&Donor> = self.donor_list.iter().collect();
        rows.sort_by(|a, b| b.total_donation().total_cmp(&a.total_donation()));

        let mut report = String::new();
        report.push('\n');
        report.push_str(REPORT_HEADER);
        report.push('\n');
        report.push_str(&"-".repeat(REPORT_RULE_WIDTH));
        report.push('\n');

        for donor in rows {
            // Writing to a String cannot fail
            let _ = writeln!(
                report,
                "{:<15}  ${:>11} {:>11}  ${:>12}",
                donor.name(),
                default_rendering(donor.total_donation()),
                donor.donation_num(),
                default_rendering(donor.avg_donation()),
            );
        }

        report
    }
}

impl fmt::Display for DonorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DonorCollection with {} donors", self.donor_list.len())
    }
}
