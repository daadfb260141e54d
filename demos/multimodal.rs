use colored::*;
use std::error::Error;
use vertex_flow::{
    components::{Authorize, MakeMultimodalPrompt, MultimodalGenerate},
    Component, ExecutionContext,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    // Path to a png or jpeg image, from the command line
    let image_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demo.png".to_string());

    let mut ctx = ExecutionContext::new();

    let mut authorize = Authorize::builder()
        .project(std::env::var("GOOGLE_CLOUD_PROJECT")?)
        .from_env(true)
        .build();
    authorize.execute(&mut ctx).await?;

    // Assemble the prompt: leading text, the image, then a follow-up
    let mut prompt = MakeMultimodalPrompt::builder()
        .prompt("What is shown in this picture?")
        .image_path(image_path)
        .follow_up("Answer in one sentence.")
        .build();
    prompt.execute(&mut ctx).await?;

    let mut generate = MultimodalGenerate::builder()
        .parts(prompt.out_parts.unwrap_or_default())
        .build();
    generate.execute(&mut ctx).await?;

    println!("{}", "🖼  Vision response".bright_blue().bold());
    println!("{}", generate.response_text.unwrap_or_default());

    Ok(())
}
