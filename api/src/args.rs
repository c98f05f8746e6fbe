use std::path::PathBuf;

use clap::Parser;
use ferrisquery_core::domain::query::value_objects::ColumnAllowList;

#[derive(Debug, Clone, Parser)]
#[command(name = "ferrisquery-api", version, about = "FerrisQuery API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5555"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CatalogArgs {
    /// JSON file holding an array of catalog items. The catalog starts empty without it.
    #[arg(long = "catalog-path", env = "CATALOG_PATH")]
    pub path: Option<PathBuf>,

    /// Attributes clients may filter and sort on, as `name=column` pairs.
    /// `name` alone maps to itself and `name=` marks it as not queryable.
    #[arg(
        long = "catalog-columns",
        env = "CATALOG_COLUMNS",
        default_value = "name,description,version,createTime=create_time"
    )]
    pub columns: ColumnAllowList,

    /// Page size used when a request does not set `pageSize`; 0 returns every item.
    #[arg(long = "default-page-size", env = "DEFAULT_PAGE_SIZE", default_value_t = 20)]
    pub default_page_size: i32,
}
