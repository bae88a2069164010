use std::{error::Error, path::Path, process};

use bmi_cli::{
    batch,
    cli::{Command, CommandLine, ThemeAction},
    config::Config,
    logging,
    report::{self, JsonReport},
    Calculator,
};
use bmi_model::RawMeasurement;
use bmi_prefs::{RonFileStore, ThemeStore};
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init("log4rs.yml")?;
    let args = CommandLine::parse_args();
    let config = Config::from_env()?;
    let calculator = Calculator::new(config.policy);

    let succeeded = match args.command {
        Command::Calc { form, json } => calc(&calculator, &form.into(), json)?,
        Command::Batch { file, json } => run_batch(&calculator, &file, json)?,
        Command::Categories => {
            println!("{}", report::legend());
            true
        }
        Command::Theme { action } => {
            theme(&config, action.unwrap_or(ThemeAction::Show))?;
            true
        }
    };

    if !succeeded {
        process::exit(1);
    }
    Ok(())
}

fn calc(calculator: &Calculator, raw: &RawMeasurement, json: bool) -> Result<bool, Box<dyn Error>> {
    let outcome = calculator.calculate(raw);

    if json {
        let report = JsonReport::new(None, &outcome);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &outcome {
            Ok(result) => println!("{}\n\n{}", report::result(result), report::legend()),
            Err(e) => eprintln!("{}", report::error(e)),
        }
    }

    Ok(outcome.is_ok())
}

fn run_batch(calculator: &Calculator, path: &Path, json: bool) -> Result<bool, Box<dyn Error>> {
    let outcomes: Vec<_> = batch::load(path)?
        .iter()
        .map(|raw| calculator.calculate(raw))
        .collect();

    if json {
        let reports: Vec<_> = outcomes
            .iter()
            .enumerate()
            .map(|(i, outcome)| JsonReport::new(Some(i), outcome))
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for (i, outcome) in outcomes.iter().enumerate() {
            match outcome {
                Ok(result) => println!("#{} {}", i, report::summary(result)),
                Err(e) => println!("#{} {}", i, report::error(e).replace('\n', "; ")),
            }
        }
    }

    let failed = outcomes.iter().filter(|o| o.is_err()).count();
    info!("Processed {} measurements, {} rejected", outcomes.len(), failed);
    Ok(failed == 0)
}

fn theme(config: &Config, action: ThemeAction) -> Result<(), Box<dyn Error>> {
    let store = RonFileStore::new(&config.preferences_path);
    let mut theme_store = ThemeStore::init(Box::new(store), config.system_theme);
    theme_store.subscribe(|theme| info!("Theme is now {}", theme));

    action.apply(&mut theme_store)?;
    println!("{}", theme_store.teardown());
    Ok(())
}
