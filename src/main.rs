//! Case table generator
//!
//! Builds the marching-cubes case table, optionally validates it, and writes
//! the configured export files.

use std::process;

use cubecase::config::AppConfig;
use cubecase::output::{write_exports, OutputError};
use cubecase_core::{group_classification, CaseTable, TableError, TableValidator};

/// Why a run stopped early
enum RunError {
    Table(Vec<TableError>),
    Output(OutputError),
}

fn log_classification() {
    let orbits = group_classification();
    log::info!("{} symmetry classes over 256 cube ids", orbits.len());
    for orbit in &orbits {
        log::debug!(
            "class {:3}: {:2} ids, {} positive corners",
            orbit[0].bits(),
            orbit.len(),
            orbit[0].positive_count()
        );
    }
}

fn run(config: &AppConfig) -> Result<(), RunError> {
    let table = CaseTable::try_build().map_err(RunError::Table)?;
    let triangles: usize = table.iter().map(|(_, case)| case.triangle_count()).sum();
    log::info!("Built case table: 256 cases, {} triangles total", triangles);
    log_classification();

    if config.debug.validate_table {
        TableValidator::validate_or_error(&table).map_err(RunError::Table)?;
        log::info!("Case table passed validation");
    }

    let written = write_exports(&config.export, &table).map_err(RunError::Output)?;
    log::info!("Wrote {} export files", written.len());
    Ok(())
}

fn main() {
    // Load configuration before logging so the level can come from it
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting cubecase");

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    match run(&config) {
        Ok(()) => {}
        Err(RunError::Table(errors)) => {
            for error in &errors {
                log::error!("{}", error);
            }
            log::error!("Case table is invalid ({} problems)", errors.len());
            process::exit(1);
        }
        Err(RunError::Output(e)) => {
            log::error!("{}", e);
            process::exit(1);
        }
    }
}
