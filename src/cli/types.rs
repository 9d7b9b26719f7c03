use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "figcode")]
#[command(about = "Render captioned, syntax-highlighted code figures from Liquid codeblock tags", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site directory searched for _config.yml, _config.yaml or _config.toml (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Custom configuration file; repeat to layer several
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Vec<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render a document through Liquid, optionally followed by Markdown
    #[command(alias = "r")]
    Render {
        /// Input document (stdin when omitted or `-`)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Run the Markdown pass after Liquid, as for a blog post
        #[arg(short, long, default_value_t = false)]
        markdown: bool,

        /// Write the result here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show how a codeblock argument string is parsed, as JSON
    Parse {
        /// The argument string, e.g. "lang:bash /etc/hosts"
        #[arg(value_name = "ARGS", allow_hyphen_values = true)]
        args: String,
    },

    /// Print the stylesheet for class-based highlighting
    Css {
        /// Theme to generate CSS for (defaults to the configured theme)
        #[arg(long, value_name = "THEME")]
        theme: Option<String>,
    },

    /// List the bundled highlighting themes
    Themes,
}
