// Soakage test demo: runs the calculator over the pre-filled test,
// or the measurements provided through the command line.

#[macro_use]
extern crate log;

use env_logger::{Builder, Target};

mod cli;
use cli::Cli;

mod setup;

use soakage::prelude::{Calculator, Error, Report, SoakageChart};

pub fn main() {
    // Take advantage of generated logs
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();
    let setup = cli.setup();

    info!(
        "pit: {}x{}x{} m | void ratio: {} | {} reading(s)",
        setup.geometry.length_m,
        setup.geometry.width_m,
        setup.geometry.depth_m,
        setup.void_ratio.value(),
        setup.readings.len()
    );

    let calculator = Calculator::new(setup.config);

    match calculator.run(&setup.geometry, setup.void_ratio, &setup.readings) {
        Ok(solution) => {
            info!(
                "plan area: {:.3} m2 | infiltration rate: {:e} m/s",
                setup.geometry.plan_area_m2(),
                solution.infiltration_rate_m_s()
            );
            println!("Results (BRE Digest 365 Method)");
            print!("{}", Report::new(&solution));

            if solution.is_degenerate() {
                warn!("null elapsed time between h25 and h75: rate forced to zero");
            }

            if cli.chart() {
                let chart = SoakageChart::new(&setup.readings, &solution);
                match serde_json::to_string_pretty(&chart) {
                    Ok(content) => println!("{}", content),
                    Err(e) => error!("failed to serialize chart: {}", e),
                }
            }
        },
        Err(Error::InsufficientData { .. }) => {
            warn!("Enter at least two valid time-depth readings.");
        },
        Err(e) => {
            error!("calculation error: {}", e);
        },
    }
}
