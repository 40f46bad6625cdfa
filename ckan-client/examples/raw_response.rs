use ckan_client::Configuration;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Configuration::new("https://catalog.data.gov/api/3").with_user_agent("debug-test/1.0");

    // Make the request manually to see the actual envelope structure
    let url = format!(
        "{}/action/recently_changed_packages_activity_list",
        config.base_path
    );

    let response = config.client.get(&url).send().await?;

    let json: Value = response.json().await?;
    println!("Raw JSON structure:");
    println!("{}", serde_json::to_string_pretty(&json)?);

    Ok(())
}
