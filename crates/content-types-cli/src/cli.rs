use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use content_types::{Config, EXTENSION_TO_CONTENT_TYPE, Fallback, LogLevel, Resolver};
use log::debug;

use crate::error::CliError;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the content type of each filename, path or extension
    #[command(arg_required_else_help = true)]
    Lookup {
        /// Filenames, paths or extensions to resolve
        #[arg(required = true)]
        names: Vec<String>,

        /// Fall back to text/plain instead of application/octet-stream
        #[arg(short, long)]
        text: bool,
    },

    /// Print every known extension and its content type
    List {
        /// Only print entries whose content type starts with this prefix, e.g. `image/`
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// Print the version of the content-types CLI
    Version,
}

#[derive(Parser, Debug)]
#[command(name = "content-types", version, about, long_about = None)]
pub struct Cli {
    /// The log level for the application
    #[arg(short, long)]
    log_level: Option<LogLevel>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }

    /// Load the configuration, set up logging and run the selected command against stdout
    pub fn execute(&self) -> Result<(), CliError> {
        let config = self.load_config()?;

        // NOTE: the CLI flag always overrides the log level set in the configuration file
        let level = self.log_level.unwrap_or(config.log_level).to_log_level_filter();
        env_logger::Builder::new().filter_level(level).init();

        let stdout = io::stdout();
        self.run(&config, &mut stdout.lock())
    }

    fn load_config(&self) -> Result<Config, CliError> {
        match &self.config {
            Some(path) => Ok(Config::load(path)?),
            None => Ok(Config::default()),
        }
    }

    pub fn run<W: Write>(&self, config: &Config, out: &mut W) -> Result<(), CliError> {
        match &self.command {
            Commands::Lookup { names, text } => {
                let mut resolver = Resolver::from(config);
                if *text {
                    resolver = resolver.with_fallback(Fallback::Text);
                }
                debug!("Resolving {} name(s) with {:?} fallback", names.len(), resolver.fallback());

                for name in names {
                    writeln!(out, "{name}\t{}", resolver.resolve(name))?;
                }
            }
            Commands::List { prefix } => {
                let prefix = prefix.as_deref().unwrap_or_default();
                for (extension, content_type) in EXTENSION_TO_CONTENT_TYPE
                    .iter()
                    .filter(|(_, content_type)| content_type.starts_with(prefix))
                {
                    writeln!(out, "{extension}\t{content_type}")?;
                }
            }
            Commands::Version => {
                writeln!(out, "content-types {}", env!("CARGO_PKG_VERSION"))?;
            }
        }

        Ok(())
    }
}
