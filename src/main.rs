use color_eyre::eyre::Result;
use dotenv::dotenv;
use meditrack_ai::GeminiClient;
use meditrack_api::config::ApiConfig;
use meditrack_db::{create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create the AI gateway client
    let ai = GeminiClient::from_env().map_err(|e| color_eyre::eyre::eyre!(e))?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Start API server
    meditrack_api::start_server(config, db_pool, ai).await?;

    Ok(())
}
