use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use finvault_core::VERSION;

use crate::constants::CONFIG_ENV;

/// finvault - encrypted value storage and credit-score history tooling
#[derive(Parser)]
#[command(name = "finvault")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Permit the insecure fallback cipher when the config selects it
    #[arg(long, global = true)]
    pub allow_insecure: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Store file path (defaults to the XDG data dir)
    #[arg(long, value_name = "PATH")]
    pub storage: Option<String>,

    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Plaintext (read from stdin when omitted)
    #[arg(long)]
    pub text: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Hex blob (read from stdin when omitted)
    #[arg(value_name = "BLOB")]
    pub blob: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `hash` command
#[derive(Args)]
pub struct HashArgs {
    /// Input text (read from stdin when omitted; one trailing newline is
    /// dropped, so `echo abc | finvault hash` digests "abc")
    #[arg(long)]
    pub text: Option<String>,
}

/// Arguments for the `history` command
#[derive(Args)]
pub struct HistoryArgs {
    /// Current score the series ends at (300-850)
    #[arg(long, value_name = "SCORE")]
    pub score: u16,

    /// Number of monthly points
    #[arg(long)]
    pub months: Option<usize>,

    /// One-year series clamped to 580-850
    #[arg(long)]
    pub short: bool,

    /// Seed for a reproducible series
    #[arg(long)]
    pub seed: Option<u64>,

    /// Final month (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `store` command
#[derive(Args)]
pub struct StoreArgs {
    #[command(subcommand)]
    pub command: StoreCommand,
}

#[derive(Subcommand)]
pub enum StoreCommand {
    /// Encrypt and save a value under a key
    Set {
        /// Key to store under
        #[arg(value_name = "KEY")]
        key: String,

        /// Value (read from stdin when omitted)
        #[arg(value_name = "VALUE")]
        value: Option<String>,

        /// Parse the value as JSON instead of storing it as a string
        #[arg(long)]
        json: bool,

        /// Disable interactive prompts
        #[arg(long)]
        no_input: bool,
    },

    /// Decrypt and print the value under a key
    Get {
        /// Key to read
        #[arg(value_name = "KEY")]
        key: String,

        /// Disable interactive prompts
        #[arg(long)]
        no_input: bool,
    },

    /// Delete a key
    Remove {
        /// Key to delete
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// List stored keys
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete every key
    Clear,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init(InitArgs),

    /// Encrypt a value into a hex blob
    Encrypt(EncryptArgs),

    /// Decrypt a hex blob
    Decrypt(DecryptArgs),

    /// Print the SHA-256 digest of a value
    ///
    /// Input read from stdin has one trailing newline removed before hashing,
    /// so the digest can differ from `sha256sum` on the same stream.
    Hash(HashArgs),

    /// Synthesize a monthly credit-score history
    History(HistoryArgs),

    /// Work with the encrypted key/value store
    Store(StoreArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
