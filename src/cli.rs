use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate an integer expression in x", long_about = None)]
pub struct Cli {
    /// Expression over digits, `x`, `+ - * / % ^` and parentheses
    pub expression: String,

    /// Value bound to `x`, repeat to evaluate several times
    #[arg(
        short = 'x',
        long = "at",
        value_name = "VALUE",
        default_value = "0",
        allow_negative_numbers = true
    )]
    pub values: Vec<i64>,

    /// Keep `x * A` as written instead of rewriting it to `A * x`
    #[arg(long)]
    pub no_rewrite: bool,

    /// Print the postfix form
    #[arg(long)]
    pub postfix: bool,

    /// Print the tree
    #[arg(long)]
    pub tree: bool,

    /// Write the sideways tree to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
