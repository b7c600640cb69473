use clap::ValueEnum;
use strum::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

/// Runtime settings, built from the command line in `main`.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub theme: ThemeChoice,
    /// Print the catalog and exit instead of opening a window.
    pub list: bool,
    pub json: bool,
    pub verbose: bool,
}

impl AppConfig {
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
