mod cli;
mod infra;
mod report;
mod routes;
mod server;
mod wizard;

use style_assessment::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
