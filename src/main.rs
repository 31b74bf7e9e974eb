use anyhow::Result;
use hint_words::{config::Config, logging, pipeline};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = Config::from_env()?;
    pipeline::run(&config).await?;
    Ok(())
}
