use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "stdout",
        action,
        help = "Controls if it logs to stdout/stderr instead of to a file"
    )]
    pub is_to_std_out: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Sign in, the password is read from stdin
    Login {
        login: String,
        #[arg(long, help = "Keep the session after this process exits")]
        remember: bool,
    },
    /// Forget the stored session
    Logout,
    /// Show the stored session
    Whoami,
    /// Show where the route guard sends a navigation to PATH
    Navigate { path: String },
    /// List your own evaluation requests
    MyRequests {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
    },
}
