use ckan_client::{CkanApi, CkanClient};
use std::collections::HashMap;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=ckan_client=debug shows each request and response status
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).with_target(false).init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://catalog.data.gov/api/3".to_string());
    let client = CkanClient::from_base_url(base_url);

    println!("Testing basic search...");

    let query = HashMap::from([("res_format".to_string(), "CSV".to_string())]);
    match client.search_packages(&query, "metadata_modified desc", 1).await {
        Ok(result) => {
            println!("Success! Count: {}", result.count);
            println!("Results length: {}", result.results.len());

            if let Some(first) = result.results.first() {
                println!("First result title: {:?}", first.title);
                println!("First result name: {}", first.name);

                match client.get_resource_id(&first.id).await {
                    Ok(resource_id) => println!("First resource id: {}", resource_id),
                    Err(e) => println!("No resource id: {}", e),
                }
            }
        }
        Err(e) => {
            println!("Error: {}", e);
        }
    }

    Ok(())
}
