use clap::Parser;
use tracing_subscriber::EnvFilter;

use notemap::cli::{
    handle_add, handle_delete, handle_init, handle_list, handle_seed, handle_show, handle_update,
    Cli, Commands,
};
use notemap::config::resolve_data_dir;

#[tokio::main]
async fn main() {
    // RUST_LOG=notemap=debug for store-level traces.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("notemap=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir);

    let result = match cli.command {
        Commands::Init => handle_init(&data_dir),
        Commands::Add {
            title,
            lat,
            lon,
            description,
            date,
            image,
            json,
        } => handle_add(&data_dir, title, lat, lon, description, date, image, json).await,
        Commands::List { json } => handle_list(&data_dir, json).await,
        Commands::Show { id, json } => handle_show(&data_dir, id, json).await,
        Commands::Update {
            id,
            title,
            description,
            date,
            image,
            clear_image,
            lat,
            lon,
            json,
        } => {
            handle_update(
                &data_dir,
                id,
                title,
                description,
                date,
                image,
                clear_image,
                lat,
                lon,
                json,
            )
            .await
        }
        Commands::Delete { id, force } => handle_delete(&data_dir, id, force).await,
        Commands::Seed { lat, lon, json } => handle_seed(&data_dir, lat, lon, json).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
