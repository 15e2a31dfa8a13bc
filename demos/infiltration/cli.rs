// The Cli lets us replace the pre-filled test with our own measurements.
use clap::{Arg, ArgAction, ColorChoice, Command};
use std::fs::read_to_string;

use soakage::prelude::ReadingSeries;

use crate::setup::Setup;

pub struct Cli {
    setup: Setup,
    chart: bool,
}

impl Cli {
    pub fn new() -> Self {
        let cmd = Command::new("infiltration")
            .version(env!("CARGO_PKG_VERSION"))
            .about("BRE Digest 365 soakage test calculator")
            .arg_required_else_help(false)
            .color(ColorChoice::Always)
            .arg(
                Arg::new("cfg")
                    .short('c')
                    .action(ArgAction::Set)
                    .required(false)
                    .help("Load test setup (JSON): pit geometry, void ratio, readings (Optional)"),
            )
            .arg(
                Arg::new("readings")
                    .short('r')
                    .long("readings")
                    .action(ArgAction::Set)
                    .required(false)
                    .help("Load (time [min], depth [mbgl]) readings from CSV file (Optional)"),
            )
            .arg(
                Arg::new("chart")
                    .long("chart")
                    .action(ArgAction::SetTrue)
                    .help("Dump chart description (JSON)"),
            );

        let matches = cmd.get_matches();

        let mut setup = match matches.get_one::<String>("cfg") {
            Some(path) => {
                let content = read_to_string(path)
                    .unwrap_or_else(|e| panic!("failed to read test setup: {}", e));
                let setup: Setup = serde_json::from_str(&content)
                    .unwrap_or_else(|e| panic!("failed to parse test setup: {}", e));
                setup
            },
            None => Setup::default(),
        };

        if let Some(path) = matches.get_one::<String>("readings") {
            let content = read_to_string(path)
                .unwrap_or_else(|e| panic!("failed to read readings: {}", e));
            setup.readings = ReadingSeries::from_csv_str(&content);
        }

        Self {
            setup,
            chart: matches.get_flag("chart"),
        }
    }

    pub fn setup(&self) -> Setup {
        self.setup.clone()
    }

    pub fn chart(&self) -> bool {
        self.chart
    }
}
