#![cfg_attr(test, allow(unused_crate_dependencies))]

use std::{fs, path::Path};

use anyhow::anyhow;
use args::{Args, LogLevel};
use clap::crate_version;
use graphql_possible_types::{GenerationConfig, IntrospectionResponse, Schema};
use tokio::runtime;
use tracing_subscriber::EnvFilter;

mod args;

fn main() -> anyhow::Result<()> {
    let args = self::args::parse();
    init_tracing(args.log_level);

    tracing::debug!("possible-types {}", crate_version!());

    let config = args.config()?;

    let runtime = runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(run(&args, &config))
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.as_filter_str()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

async fn run(args: &Args, config: &GenerationConfig) -> anyhow::Result<()> {
    let encoding = graphql_possible_types::validate(config, &args.output)?;

    let source = fs::read_to_string(&args.schema)
        .map_err(|e| anyhow!("error loading schema {}:\n{e}", args.schema.display()))?;

    let artifact = if is_introspection_result(&args.schema) {
        if config.federation_aware {
            tracing::warn!("Federation types cannot be stripped from an introspection result, ignoring.");
        }

        let response = IntrospectionResponse::from_json(&source)?;
        graphql_possible_types::generate_from_introspection(&response, config, encoding).await?
    } else {
        let schema = Schema::parse(&source)?;
        graphql_possible_types::generate(&schema, config, encoding).await?
    };

    fs::write(&args.output, artifact).map_err(|e| anyhow!("error writing {}:\n{e}", args.output.display()))?;

    tracing::info!("Generated {}", args.output.display());

    Ok(())
}

fn is_introspection_result(path: &Path) -> bool {
    path.extension().is_some_and(|extension| extension == "json")
}
