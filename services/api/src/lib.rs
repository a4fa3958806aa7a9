mod cli;
mod infra;
mod report;
mod routes;
mod server;

use company_scoring::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
