mod assets;
mod auth;
mod cli;
mod infra;
mod routes;
mod server;

use artist_verdict::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
