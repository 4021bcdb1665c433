use petfriends_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    info!("Starting simple client example");
    let client = Client::from_env()?;

    let credentials = client.config().credentials.clone();
    let response = client.authenticate_with(&credentials).await?;
    let Some(auth_key) = AuthKey::from_response(&response) else {
        info!("Login failed with status {}: {}", response.status, response.body);
        return Ok(());
    };
    info!("✓ Authenticated as {}", credentials.email);

    let response = client.list_pets(&auth_key, &PetFilter::MyPets).await?;
    match response.body.decode::<PetList>() {
        Ok(list) => {
            info!("{} pets found", list.pets.len());
            for pet in &list.pets {
                info!("{}", pet);
            }
        }
        Err(e) => info!("Status {}, body not a pet list: {}", response.status, e),
    }

    info!("Request log written to {}", client.request_log().path().display());
    Ok(())
}
