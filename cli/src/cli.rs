use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ipmnemonic")]
#[command(author, version, about = "Turn IP addresses into salted, pronounceable mnemonics")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Secret salt mixed into every mnemonic (at least 40 characters recommended)
    #[arg(long, env = "IPMNEMONIC_SALT", hide_env_values = true)]
    pub salt: Option<String>,

    /// Refuse to run with a missing or weak salt
    #[arg(long)]
    pub strict: bool,

    /// Print the address and its family before each mnemonic
    #[arg(long, short)]
    pub kind: bool,

    /// Addresses to convert; read one per line from stdin when omitted
    pub addresses: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a new random salt
    GenerateSalt,
}
