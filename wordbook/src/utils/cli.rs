use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Listening host
    #[arg(long, env = "WORDBOOK_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Listening port
    #[arg(short, long, env = "WORDBOOK_PORT", default_value_t = 8080)]
    pub port: u16,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Settings shared by the server and the setup tooling.
#[derive(clap::Args, Debug, Clone)]
pub struct StoreArgs {
    /// Word store connection URI
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://wordbook.db")]
    pub database_url: String,

    /// Maximum number of pooled word store connections
    #[arg(long, env = "WORDBOOK_DB_MAX_CONNECTIONS", default_value_t = 12)]
    pub max_connections: u32,

    /// Object store region
    #[arg(long, env = "AWS_REGION")]
    pub aws_region: Option<String>,

    /// Object store bucket holding the word images
    #[arg(long, env = "AWS_S3_BUCKET")]
    pub bucket: Option<String>,
}
