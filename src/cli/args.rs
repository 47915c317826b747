//! CLI argument parsing

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "primer")]
#[command(author, version, about = "Replay a guided tour of dynamic-language basics", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Output format as JSON
    #[arg(long, global = true, env = "PRIMER_JSON")]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum SubCommand {
    /// Run the tour, or only the named sections
    Run {
        /// Section to show (repeatable); sections it depends on run silently
        #[arg(long = "section", short = 's', value_name = "NAME")]
        sections: Vec<String>,
    },

    /// List the tour sections
    List,

    /// Render an interpolation template such as "{pi:.2f}"
    Fmt {
        /// Template text with {name} or {name:spec} fields
        template: String,

        /// Template variables in the form name=value
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },
}
