use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "mailroom")]
#[command(about = "Mailroom - record donations, write thank-you letters and print giving reports")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start from an empty donor list instead of the configured donors
    #[arg(long, global = true)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum CliCommand {
    /// Print the giving report
    Report,

    /// List donor names
    List,

    /// Record a donation and print the thank-you letter for it
    Thank {
        /// Donor name; a new donor is added when the name is unknown
        name: String,

        /// Donation amount
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Print the thank-you letter for a donor's total giving
    ThankTotal {
        /// Name of an existing donor
        name: String,
    },

    /// Print a total-giving letter for every donor
    Letters,

    /// Print how many donors are on file
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_report() {
        let args = CliArgs::parse_from(["mailroom", "report"]);
        assert_eq!(args.command, CliCommand::Report);
        assert_eq!(args.config, None);
        assert!(!args.no_seed);
    }

    #[test]
    fn test_cli_parse_thank() {
        let args = CliArgs::parse_from(["mailroom", "thank", "Jeff Bezos", "122.67"]);
        assert_eq!(
            args.command,
            CliCommand::Thank {
                name: "Jeff Bezos".to_string(),
                amount: 122.67,
            }
        );
    }

    #[test]
    fn test_cli_parse_negative_amount() {
        let args = CliArgs::parse_from(["mailroom", "thank", "Jeff Bezos", "-5"]);
        assert_eq!(
            args.command,
            CliCommand::Thank {
                name: "Jeff Bezos".to_string(),
                amount: -5.0,
            }
        );
    }

    #[test]
    fn test_cli_parse_with_config() {
        let args = CliArgs::parse_from([
            "mailroom",
            "--config", "/custom/mailroom.toml",
            "--no-seed",
            "list",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/mailroom.toml")));
        assert!(args.no_seed);
        assert_eq!(args.command, CliCommand::List);
    }

    #[test]
    fn test_cli_rejects_non_numeric_amount() {
        let result = CliArgs::try_parse_from(["mailroom", "thank", "Jeff Bezos", "lots"]);
        assert!(result.is_err());
    }
}
