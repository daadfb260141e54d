use colored::*;
use std::error::Error;
use vertex_flow::{
    components::{Authorize, Chat, LoadChatModel},
    Component, ExecutionContext,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    println!("{}", "💬 Vertex AI Chat Demo".bright_green().bold());
    println!("{}", "=====================".bright_green());

    // Load environment variables
    dotenv::dotenv().ok();
    println!("{}", "✓ Environment loaded".green());

    let mut ctx = ExecutionContext::new();

    let mut authorize = Authorize::builder()
        .project(std::env::var("GOOGLE_CLOUD_PROJECT")?)
        .from_env(true)
        .build();
    authorize.execute(&mut ctx).await?;
    println!("{}", "✓ Authorized against Vertex AI".green());

    let mut loader = LoadChatModel::builder().model_name("chat-bison").build();
    loader.execute(&mut ctx).await?;
    println!("{}", "✓ Chat model loaded".green());

    // The conversation handle travels from one invocation to the next
    let mut conversation = None;
    let messages = [
        "What are the three most famous lighthouses in the world?",
        "Which of those can be visited by boat?",
    ];

    for message in messages {
        println!("\n{}", "━".repeat(50).bright_black());
        println!("{} {}", "👤 User:".blue().bold(), message);

        let mut component = match conversation.take() {
            Some(session) => Chat::builder()
                .conversation(session)
                .user_prompt(message)
                .build(),
            None => Chat::builder()
                .context("You are a maritime historian.")
                .user_prompt(message)
                .build(),
        };
        component.execute(&mut ctx).await?;

        println!(
            "{} {}",
            "🤖 Assistant:".green().bold(),
            component.response.unwrap_or_default().white()
        );
        conversation = component.out_conversation;
    }

    println!("\n{}", "✨ Demo completed successfully!".green().bold());
    Ok(())
}
