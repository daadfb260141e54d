use dotenv::dotenv;
use vertex_flow::{
    components::{Authorize, GenerateText, LoadTextModel},
    Component, ExecutionContext,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let mut ctx = ExecutionContext::new();

    // Authorize with application default credentials
    let mut authorize = Authorize::builder()
        .project(std::env::var("GOOGLE_CLOUD_PROJECT")?)
        .from_env(true)
        .build();
    authorize.execute(&mut ctx).await?;

    // Resolve the text model and make it the context's current model
    let mut loader = LoadTextModel::builder().model_name("text-bison").build();
    loader.execute(&mut ctx).await?;

    // Generate with the default sampling parameters
    let mut generate = GenerateText::builder()
        .prompt("Write a short poem about lighthouses.")
        .build();
    generate.execute(&mut ctx).await?;

    println!("{}", generate.completion.unwrap_or_default());

    Ok(())
}
