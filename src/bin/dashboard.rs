use clap::Parser;
use log::info;

use staffroom::client::api::{ApiClient, ClientError};
use staffroom::client::dashboard::Dashboard;
use staffroom::utils::dates;

/// Fetches departments and employees and prints the dashboard figures as JSON.
#[derive(Parser, Debug)]
#[command(name = "dashboard", version)]
struct Args {
    /// Base URL of the staffroom API.
    #[arg(long, env = "API_URL", default_value = "http://127.0.0.1:8080")]
    api_url: String,
}

#[derive(Debug, thiserror::Error)]
enum DashboardError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("cannot encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let client = ApiClient::new(&args.api_url);
    let (departments, employees) = tokio::try_join!(client.departments(), client.employees())?;
    info!(
        "Fetched {} departments and {} employees from {}",
        departments.len(),
        employees.len(),
        args.api_url
    );

    let report = Dashboard::new(&departments, &employees, dates::today()).report();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
