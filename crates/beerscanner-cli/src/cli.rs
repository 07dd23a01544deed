use beerscanner_shared::id::DbId;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "stdout",
        action,
        global = true,
        help = "Controls if it logs to stdout/stderr instead of to a file"
    )]
    pub is_to_std_out: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Finish signing in with the token the server handed back after OAuth
    Login { token: String },
    Logout,
    /// Who the stored token says is signed in, without asking the server
    Status,
    /// The profile of the signed in user as the server has it
    Whoami,
    /// Bars and beers being tracked
    Tracked,
    /// Unread notifications
    Notifications,
    Bars {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    Beers {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    TrackBar { id: DbId },
    UntrackBar { id: DbId },
    /// Without `--bar` a notification is sent when the beer shows up at any bar
    TrackBeer {
        id: DbId,
        #[arg(long = "bar")]
        bar_id: Option<DbId>,
    },
    UntrackBeer { id: DbId },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&["beerscanner", "logout"], Command::Logout)]
    #[case(&["beerscanner", "login", "a.b.c"], Command::Login { token: "a.b.c".into() })]
    #[case(
        &["beerscanner", "bars", "--search", "kaldi"],
        Command::Bars { search: Some("kaldi".into()), page: 0 }
    )]
    #[case(
        &["beerscanner", "track-beer", "7", "--bar", "3"],
        Command::TrackBeer { id: DbId::from(7), bar_id: Some(DbId::from(3)) }
    )]
    #[case(
        &["beerscanner", "track-beer", "7"],
        Command::TrackBeer { id: DbId::from(7), bar_id: None }
    )]
    fn parses(#[case] args: &[&str], #[case] expected: Command) {
        let actual = Cli::try_parse_from(args).unwrap();
        assert_eq!(actual.command, expected);
        assert!(!actual.is_to_std_out);
    }

    #[test]
    fn stdout_flag_after_subcommand() {
        let actual = Cli::try_parse_from(["beerscanner", "status", "-s"]).unwrap();
        assert!(actual.is_to_std_out);
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["beerscanner", "track-bar", "kaldi"]).is_err());
    }
}
