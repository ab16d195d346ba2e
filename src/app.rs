use anyhow::Result;
use mailroom_core::app::Command;
use mailroom_core::{CoreError, DonorCollection};
use tracing::{debug, info};

use crate::cli::CliCommand;
use crate::config::Config;

/// Owns the donor collection for one run of the program
pub struct App {
    pub collection: DonorCollection,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut collection = DonorCollection::new();
        for donor in &config.donors {
            collection.add_existing_donor(donor.name(), donor.total_donation(), donor.donation_num());
        }
        debug!("Seeded {}", collection);

        Self { collection }
    }

    /// Run a command and return the text to show the user
    pub fn execute(&mut self, command: Command) -> Result<String> {
        if command.is_mutation() {
            info!("Executing {:?}", command);
        } else {
            debug!("Executing {:?}", command);
        }

        let output = match command {
            Command::RecordDonation { name, amount } => {
                self.collection
                    .record_donation(&name, amount)
                    .generate_recent_thanks()
            }
            Command::ThankTotal { name } => {
                let donor = self
                    .collection
                    .find_donor(&name)
                    .ok_or(CoreError::DonorNotFound { name })?;
                donor.generate_total_thanks()
            }
            Command::ListDonors => self.collection.list_donor_names().join("\n"),
            Command::Report => self.collection.generate_report(),
            Command::AllLetters => self.collection.generate_all_thanks().join("\n\n"),
            Command::Summary => self.collection.to_string(),
        };

        Ok(output)
    }
}

impl From<CliCommand> for Command {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::Report => Command::Report,
            CliCommand::List => Command::ListDonors,
            CliCommand::Thank { name, amount } => Command::RecordDonation { name, amount },
            CliCommand::ThankTotal { name } => Command::ThankTotal { name },
            CliCommand::Letters => Command::AllLetters,
            CliCommand::Summary => Command::Summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_seeds_from_config() {
        let app = App::new(&Config::default());
        assert_eq!(app.collection.len(), 5);
        assert_eq!(app.collection.donors()[3].name(), "Mark Zuckerberg");
        assert_eq!(app.collection.donors()[3].most_recent_donation(), 0.0);
    }

    #[test]
    fn test_execute_thank_total_unknown_donor() {
        let mut app = App::new(&Config::default());
        let err = app
            .execute(Command::ThankTotal { name: "Nobody".to_string() })
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::DonorNotFound { name: "Nobody".to_string() })
        );
    }

    #[test]
    fn test_execute_summary() -> Result<()> {
        let mut app = App::new(&Config { version: 1, donors: Vec::new() });
        assert_eq!(app.execute(Command::Summary)?, "DonorCollection with 0 donors");
        Ok(())
    }

    #[test]
    fn test_cli_command_mapping() {
        let command: Command = CliCommand::Thank {
            name: "Jeff Bezos".to_string(),
            amount: 10.0,
        }
        .into();
        assert_eq!(
            command,
            Command::RecordDonation {
                name: "Jeff Bezos".to_string(),
                amount: 10.0,
            }
        );
        assert_eq!(Command::from(CliCommand::List), Command::ListDonors);
    }
}
