mod cli;
mod console;
mod infra;
mod routes;
mod server;

use ssum_detector::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
