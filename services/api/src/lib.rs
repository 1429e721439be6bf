mod cli;
mod infra;
mod quiz;
mod routes;
mod server;

use visa_finder::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
