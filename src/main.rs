use std::env;
use std::sync::Arc;

use gatekeeper_bot::AppState;
use gatekeeper_bot::handler::Handler;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");

    // Member-join events require the privileged GUILD_MEMBERS intent; component
    // interactions already arrive with GUILDS.
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler)
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(Arc::new(AppState::new()));
    }

    if let Err(why) = client.start().await {
        tracing::error!(error = ?why, "client error");
    }
}
