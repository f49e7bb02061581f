mod check;
mod cli;
mod infra;
mod routes;
mod server;

use permit_finder::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
