//! HTTP server command for the pet registry
//!
//! Picks a store (PostgreSQL or in-memory) and runs the server until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use pet_registry_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use pet_registry_server::db::{create_pool_with_options, MemoryPetStore, PetStore, PgPetStore};
use pet_registry_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "PET_REGISTRY_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "PET_REGISTRY_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Keep pets in memory instead of PostgreSQL (lost on exit)
    #[arg(long, conflicts_with = "database_url")]
    pub memory: bool,
}

async fn open_store(args: &ServeArgs) -> Result<Arc<dyn PetStore>> {
    if args.memory {
        tracing::warn!("Using in-memory store - pets are lost on shutdown");
        return Ok(Arc::new(MemoryPetStore::new()));
    }

    let Some(database_url) = args.database_url.as_deref() else {
        bail!("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env, or pass --memory");
    };

    let pool = create_pool_with_options(database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;
    tracing::info!(max_connections = args.max_connections, "Connected to database");

    Ok(Arc::new(PgPetStore::new(pool)))
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting pet registry on {}", args.bind);

    let store = open_store(&args).await?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: ServeArgs,
    }

    #[test]
    fn memory_conflicts_with_database_url() {
        let result = Wrapper::try_parse_from(["serve", "--memory", "--database-url", "postgres://x"]);
        assert!(result.is_err());
    }

    #[test]
    fn bind_parses_socket_addr() {
        let parsed = Wrapper::try_parse_from(["serve", "-b", "0.0.0.0:8080"]).unwrap();
        assert_eq!(parsed.args.bind.port(), 8080);
        assert!(!parsed.args.memory);
    }

    #[tokio::test]
    async fn missing_database_url_is_an_error() {
        let args = ServeArgs {
            bind: "127.0.0.1:0".parse().unwrap(),
            cors_permissive: false,
            database_url: None,
            max_connections: 1,
            memory: false,
        };
        let err = open_store(&args).await.err().expect("expected error");
        assert!(err.to_string().contains("DATABASE_URL"));
    }
}
