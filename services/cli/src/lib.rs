mod chart;
mod cli;
mod commands;
mod menu;

use fan_engagement::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
