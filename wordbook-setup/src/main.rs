use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wordbook::config::StoreConfig;
use wordbook::utils::cli::StoreArgs;
use wordbook::utils::logging::init_tracing;

mod assets;
mod bucket;
mod s3;
mod seed;

#[derive(Parser)]
#[command(name = "wordbook-setup")]
#[command(about = "Seed the word store and manage the word image bucket", long_about = None)]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    /// Custom object store endpoint, e.g. a local MinIO
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Replace the word store contents with the records in a JSON file")]
    Seed {
        #[arg(long, value_name = "FILE", default_value = "wordbook-setup/data/words.json")]
        file: PathBuf,
    },
    #[command(about = "Create the image bucket and make its objects publicly readable")]
    CreateBucket,
    #[command(about = "Upload every file under an asset directory into the image bucket")]
    Upload {
        #[arg(long, value_name = "DIR", default_value = "assets")]
        assets_dir: PathBuf,
        #[arg(long, default_value = assets::DEFAULT_PREFIX)]
        prefix: String,
    },
    #[command(about = "List the uploaded images with their sizes")]
    Verify {
        #[arg(long, default_value = assets::DEFAULT_PREFIX)]
        prefix: String,
    },
    #[command(about = "Print the public URL an object key is served from")]
    UrlFor {
        #[arg(value_name = "KEY")]
        key: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();
    let store = StoreConfig::from_args(&cli.store)?;

    match cli.command {
        Commands::Seed { file } => seed::run(&store, &file).await,
        Commands::CreateBucket => {
            let target = store.object_store()?;
            let client = s3::client(&target, cli.endpoint_url.as_deref()).await;
            bucket::create_public_bucket(&client, &target).await
        }
        Commands::Upload { assets_dir, prefix } => {
            let target = store.object_store()?;
            let client = s3::client(&target, cli.endpoint_url.as_deref()).await;
            let uploaded = assets::upload_assets(&client, &target.bucket, &assets_dir, &prefix).await?;
            tracing::info!("Upload completed successfully: {uploaded} files");
            Ok(())
        }
        Commands::Verify { prefix } => {
            let target = store.object_store()?;
            let client = s3::client(&target, cli.endpoint_url.as_deref()).await;
            bucket::list_uploaded(&client, &target.bucket, &prefix).await?;
            Ok(())
        }
        Commands::UrlFor { key } => {
            let target = store.object_store()?;
            println!("{}", bucket::public_url(&target, &key));
            Ok(())
        }
    }
}
