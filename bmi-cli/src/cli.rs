use std::path::PathBuf;

use bmi_model::{RawMeasurement, Theme};
use bmi_prefs::ThemeStore;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bmi", version, about = "Body Mass Index calculator")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate BMI for a single person
    Calc {
        #[command(flatten)]
        form: Form,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Calculate BMI for every entry of a JSON file
    Batch {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Show the BMI categories
    Categories,
    /// Show or change the color theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

/// Fields are taken as plain text so that blank or malformed values reach
/// the validator instead of being rejected by the argument parser.
#[derive(Debug, clap::Args)]
pub struct Form {
    /// Age in years (1-120)
    #[arg(long, default_value = "")]
    pub age: String,
    /// male or female
    #[arg(long)]
    pub gender: Option<String>,
    /// Height in centimeters
    #[arg(long, default_value = "")]
    pub height: String,
    /// Weight in kilograms
    #[arg(long, default_value = "")]
    pub weight: String,
}

impl From<Form> for RawMeasurement {
    fn from(form: Form) -> Self {
        RawMeasurement {
            age: form.age,
            gender: form.gender,
            height: form.height,
            weight: form.weight,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ThemeAction {
    Show,
    Set { theme: Theme },
    Toggle,
}

impl ThemeAction {
    pub fn apply(self, theme_store: &mut ThemeStore) -> Result<Theme, bmi_prefs::Error> {
        match self {
            ThemeAction::Show => Ok(theme_store.current()),
            ThemeAction::Set { theme } => theme_store.set(theme).map(|_| theme),
            ThemeAction::Toggle => theme_store.toggle(),
        }
    }
}
