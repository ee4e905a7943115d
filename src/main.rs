//! Runs the reference configuration and prints the best individual of
//! every generation.

use bitga::ga::{GaConfig, GaResult, GaRunner, DEFAULT_CHROMOSOME_LENGTH};

fn main() {
    env_logger::init();

    let config = GaConfig::default();
    let result: GaResult<DEFAULT_CHROMOSOME_LENGTH> =
        GaRunner::run_with_observer(&config, |stats| println!("{stats}"));

    log::debug!(
        "best individual {} (x = {}, fitness {})",
        result.best,
        result.best.decode(),
        result.best_fitness
    );
}
