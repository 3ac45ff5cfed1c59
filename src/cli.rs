use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "agecheck", version, about = "Validate user ages")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity on stderr (overridden by RUST_LOG)"
    )]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a single user given on the command line.
    Check {
        #[command(flatten)]
        user: UserArgs,
    },
    /// Validate the built-in roster, optionally followed by one extra user.
    Demo {
        #[command(flatten)]
        user: OptionalUserArgs,
    },
    /// Validate users read from stdin (JSON array or JSON Lines).
    Batch,
}

#[derive(Args, Debug)]
pub struct UserArgs {
    #[arg(long, help = "Name of the user")]
    pub name: String,
    #[arg(long, allow_negative_numbers = true, help = "Age of the user")]
    pub age: i128,
}

#[derive(Args, Debug)]
pub struct OptionalUserArgs {
    #[arg(long, requires = "age", help = "Name of an extra user to validate")]
    pub name: Option<String>,
    #[arg(
        long,
        requires = "name",
        allow_negative_numbers = true,
        help = "Age of the extra user"
    )]
    pub age: Option<i128>,
}
