/// Commands a driver can run against a donor collection
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Record a gift, adding the donor when the name is new
    RecordDonation { name: String, amount: f64 },

    /// Thank an existing donor for everything they have given
    ThankTotal { name: String },

    /// List donor names in the order they were added
    ListDonors,

    /// Build the giving report
    Report,

    /// Build a total-donations letter for every donor
    AllLetters,

    /// Describe the collection size
    Summary,
}

impl Command {
    /// Whether running the command changes the collection
    pub fn is_mutation(&self) -> bool {
        matches!(self, Command::RecordDonation { .. })
    }
}
