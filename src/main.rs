use anyhow::Result;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing::info;

use vastu_flow::bot::{callback_handler, command_handler, message_handler, Command};
use vastu_flow::config::Config;
use vastu_flow::dialogue::ChatState;
use vastu_flow::llm::CompletionClient;
use vastu_flow::localization::init_localization;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Missing secrets are fatal here, before any network activity
    let config = Config::from_env()?;

    init_localization()?;

    let client = Arc::new(CompletionClient::new(
        config.deepseek_api_url.clone(),
        config.deepseek_api_key.clone(),
    )?);

    let bot = Bot::new(&config.telegram_token);

    info!("Vastu Flow bot started");

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .enter_dialogue::<Message, InMemStorage<ChatState>, ChatState>()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(command_handler),
                )
                .branch(dptree::endpoint(message_handler)),
        )
        .branch(
            Update::filter_callback_query()
                .enter_dialogue::<CallbackQuery, InMemStorage<ChatState>, ChatState>()
                .endpoint(callback_handler),
        );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![InMemStorage::<ChatState>::new(), client])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
