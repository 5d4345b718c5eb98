use geoloc_bridge::app_config::AppConfig;
use geoloc_bridge::bridge::CallbackSet;
use geoloc_bridge::domain::error_object;
use geoloc_bridge::encode;
use geoloc_bridge::payload_loader::load_locations_from;
use geoloc_bridge::remote::{fetch_location, new_client};
use tracing::{info, warn};

const ON_LOCATION: &str = "onLocationChanged";
const ON_ERROR: &str = "onError";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt().with_max_level(config.logging().level()).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");

    let callbacks = CallbackSet::new()
        .with(ON_LOCATION, |location| match serde_json::to_string(location) {
            Ok(json) => println!("{}", json),
            Err(err) => warn!("⚠️ Unable to print location: {}", err),
        })
        .with(ON_ERROR, |error| warn!("⚠️ {:?}", error));

    let payloads = config.payloads();
    let locations = load_locations_from(payloads.directory(), payloads.extension()).await?;
    for location in &locations {
        callbacks.invoke(ON_LOCATION, &encode(Some(location.record())));
    }
    info!("✅  Replayed {} recorded locations", locations.len());

    if let Some(remote) = config.remote() {
        let client = new_client(remote)?;
        match fetch_location(&client, remote.url()).await {
            Ok(record) => {
                callbacks.invoke(ON_LOCATION, &encode(record.as_ref()));
            }
            Err(err) => {
                callbacks.invoke(ON_ERROR, &error_object(err.code(), &err.to_string()));
            }
        }
    }

    info!("🔥 {} is done", env!("CARGO_PKG_NAME"));
    Ok(())
}
