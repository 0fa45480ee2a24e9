mod report;
mod runner;

pub use report::{report_summary, EnergyReport};
pub use runner::run_calculation;

use crate::config::{Args, Config};
use crate::dataset::{load_system, Dataset};
use crate::io::{setup_output, write_report};
use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use std::fs::{self, File};
use tracing::info;

pub struct EnergyApplication {
    args: Args,
    config: Config,
}

impl EnergyApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<EnergyReport> {
        setup_output(self.args.output.as_ref(), self.args.verbose)?;
        info!("Configuration loaded:\n{:?}", self.config);

        let dataset_path = self.config.dataset.as_ref().ok_or_else(|| {
            eyre!("No integral dataset given: pass --dataset or set `dataset` in the configuration")
        })?;
        info!("Reading integrals from: {}", dataset_path);
        let dataset = Dataset::from_yaml_file(dataset_path)
            .wrap_err_with(|| format!("Unable to load dataset: {}", dataset_path))?;

        let system = load_system(&dataset, self.config.eri_chunk_size())?;
        let report = run_calculation(&system, &self.config)?;
        report_summary(&report);

        if let Some(ref path) = self.config.report {
            let mut file = File::create(path)
                .wrap_err_with(|| format!("Unable to create report file: {}", path))?;
            write_report(&mut file, &report)?;
            info!("Energy report written to: {}", path);
        }

        Ok(report)
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let config = match args.config_file {
        Some(ref path) => {
            let config_content = fs::read_to_string(path)
                .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;
            serde_yml::from_str::<Config>(&config_content)
                .wrap_err("Failed to parse configuration file")?
        }
        None => Config::default(),
    };

    Ok(config.with_defaults().merge_args(args))
}
