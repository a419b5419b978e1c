//! Application configuration from CLI flags and environment.

use clap::Parser;

/// FibBuddy — Fibonacci buddy-system heap simulator.
#[derive(Parser, Debug)]
#[command(name = "fibbuddy", version, about)]
pub struct AppConfig {
    /// Heap capacity bound; the initial chain holds one free block per
    /// Fibonacci number up to this value.
    #[arg(
        short = 'm',
        long,
        default_value_t = fibbuddy_core::DEFAULT_CAPACITY,
        env = "FIBBUDDY_CAPACITY"
    )]
    pub capacity: u64,

    /// Read commands from stdin without prompts
    /// (alloc NAME SIZE | free NAME | list | stats | quit).
    #[arg(short, long)]
    pub batch: bool,

    /// Render heap layouts as JSON.
    #[arg(short, long)]
    pub json: bool,

    /// Quiet mode (suppress banner, prompts, and success messages).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the final heap layout to a file on exit.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
