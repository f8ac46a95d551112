use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Defaults to listing the appliances.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the appliances available for selection.
    #[clap(name = "list")]
    List,

    /// Record usage of an appliance and show its energy and cost.
    #[clap(name = "calc")]
    Calc(CalcArgs),

    /// Show all recorded usage.
    #[clap(name = "dashboard")]
    Dashboard(DashboardArgs),
}

#[derive(Parser)]
pub struct CalcArgs {
    /// Appliance ID as shown by `list`.
    pub appliance_id: String,

    /// Hours of use; negative or malformed values are rejected by the tracker.
    #[clap(allow_hyphen_values = true)]
    pub hours: String,
}

#[derive(Parser)]
pub struct DashboardArgs {
    /// Print the dashboard view as JSON.
    #[clap(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let args = Args::try_parse_from(["energy-tracker"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_calc_keeps_raw_hours() {
        let args = Args::try_parse_from(["energy-tracker", "calc", "6", "-2"]).unwrap();
        match args.command {
            Some(Command::Calc(calc)) => {
                assert_eq!(calc.appliance_id, "6");
                assert_eq!(calc.hours, "-2");
            }
            _ => panic!("expected the calc subcommand"),
        }
    }

    #[test]
    fn test_dashboard_json_flag() {
        let args = Args::try_parse_from(["energy-tracker", "dashboard", "--json"]).unwrap();
        assert!(matches!(args.command, Some(Command::Dashboard(DashboardArgs { json: true }))));
    }

    #[test]
    fn test_calc_requires_hours() {
        assert!(Args::try_parse_from(["energy-tracker", "calc", "6"]).is_err());
    }
}
