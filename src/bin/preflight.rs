use collections_api::characters::CharacterClient;
use collections_api::infra::{config, telemetry};
use collections_api::{record_id, CollectionRegistry, CollectionService};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--check-upstream]\n\
         \n\
         Reads env vars (all optional):\n\
           DATA_DIR, CHARACTER_API_BASE_URL, CHARACTER_API_TIMEOUT_SECS\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_env();
    telemetry::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let check_upstream = args.iter().any(|a| a == "--check-upstream");

    let data_dir = config::data_dir();
    println!("> Preflight:");
    println!("  DATA_DIR={}", data_dir.display());

    let service = CollectionService::new(&data_dir, CollectionRegistry::with_defaults());
    service.ensure_directories().await?;
    service
        .check_storage()
        .await
        .map_err(|e| anyhow::anyhow!("Storage root is not usable: {}", e))?;

    // Write probe: create + delete one record per collection.
    for name in service.collections() {
        let (Some(model), Some(store)) = (service.model(&name), service.store(&name)) else {
            continue;
        };
        let payload = model
            .sample_payload()
            .as_object()
            .cloned()
            .unwrap_or_default();
        let created = store.create(payload).await?;
        let id = record_id(&created)
            .ok_or_else(|| anyhow::anyhow!("{}: created record has no id", name))?
            .to_string();
        let deleted = store.delete_by_id(&id).await?;
        if deleted != 1 {
            anyhow::bail!("{}: probe record {} was not removed", name, id);
        }
        println!("  {}: write probe ok", name);
    }

    if check_upstream {
        let client = CharacterClient::from_env()?;
        println!("  CHARACTER_API_BASE_URL={}", client.base_url());
        let character = client
            .get_character(1)
            .await
            .map_err(|e| anyhow::anyhow!("Character API not reachable: {}", e))?;
        println!(
            "  Character API ok (id 1 -> {})",
            character
                .name
                .as_ref()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "<no name>".to_string())
        );
    }

    println!("> Preflight OK.");
    Ok(())
}
