pub mod workload;

pub use workload::WorkloadConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::WorkloadConfig;
    use crate::domain::model::TaskKind;
    use crate::ops::tokenize_words;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_non_empty_string, Validate};
    use clap::{Parser, ValueEnum};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum OutputFormat {
        Text,
        Json,
    }

    #[derive(Debug, Clone, Parser)]
    #[command(name = "collection-drills")]
    #[command(about = "Time basic list and dictionary operations and report their footprint")]
    pub struct CliConfig {
        /// TOML file overriding the default workload sizes
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(long, value_enum, default_value = "text")]
        pub format: OutputFormat,

        /// Run only these drills (comma separated)
        #[arg(long, value_delimiter = ',')]
        pub only: Vec<TaskKind>,

        /// Free text to count words in, instead of the configured word list
        #[arg(long)]
        pub words: Option<String>,

        #[arg(long, help = "Log process CPU and memory after each drill")]
        pub monitor: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,
    }

    impl CliConfig {
        /// Loads the workload file if one was given and applies overrides.
        pub fn workload(&self) -> Result<WorkloadConfig> {
            let mut workload = match &self.config {
                Some(path) => WorkloadConfig::from_file(path)?,
                None => WorkloadConfig::default(),
            };

            if let Some(text) = &self.words {
                workload.words.words = tokenize_words(text);
                tracing::debug!("Word list overridden with {} words", workload.words.words.len());
            }

            Ok(workload)
        }

        /// Selected drills in report order; all of them when none were named.
        pub fn tasks(&self) -> Vec<TaskKind> {
            if self.only.is_empty() {
                return TaskKind::ALL.to_vec();
            }
            let mut tasks = self.only.clone();
            tasks.sort();
            tasks.dedup();
            tasks
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.config {
                validate_non_empty_string("config", path)?;
            }
            if let Some(text) = &self.words {
                validate_non_empty_string("words", text)?;
            }
            Ok(())
        }
    }

}

#[cfg(feature = "cli")]
pub use cli::{CliConfig, OutputFormat};
