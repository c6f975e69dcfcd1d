use std::{fs, path::PathBuf};

use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use graphql_possible_types::{ConsumerVersion, GenerationConfig, ModuleStyle};

mod log;

pub(crate) use log::LogLevel;

#[derive(Debug, Parser)]
#[command(name = "possible-types", version)]
#[command(arg_required_else_help = true)]
/// Generates the possible types of the unions and interfaces of a GraphQL schema
pub(crate) struct Args {
    /// Path to the schema: GraphQL SDL, or a saved introspection result if it ends with .json
    #[arg(env = "POSSIBLE_TYPES_SCHEMA")]
    pub schema: PathBuf,
    /// Path of the generated file. The extension selects the format: .json, .js, .jsx, .ts or .tsx
    #[arg(long, short, env = "POSSIBLE_TYPES_OUTPUT")]
    pub output: PathBuf,
    /// Path to the TOML configuration file
    #[arg(long, short, env = "POSSIBLE_TYPES_CONFIG_PATH")]
    pub config: Option<PathBuf>,
    /// Export statement of .js and .jsx files. Overrides the configuration file.
    #[arg(long)]
    pub module: Option<ModuleArg>,
    /// Major version of the client consuming the artifact, 2 or 3. Overrides the configuration file.
    #[arg(long)]
    pub consumer_version: Option<u8>,
    /// Declare the exact type of the data in TypeScript files. `--explicit-typing=false` turns it off.
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub explicit_typing: Option<bool>,
    /// Strip federation types from the schema before generating. `--federation=false` turns it off.
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub federation: Option<bool>,
    /// Set the logging level
    #[arg(long = "log", env = "POSSIBLE_TYPES_LOG", default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModuleArg {
    /// `module.exports = ...`
    Commonjs,
    /// `export default ...`
    Esmodule,
}

impl From<ModuleArg> for ModuleStyle {
    fn from(value: ModuleArg) -> Self {
        match value {
            ModuleArg::Commonjs => ModuleStyle::CommonJs,
            ModuleArg::Esmodule => ModuleStyle::EsModule,
        }
    }
}

impl Args {
    /// The configuration file, if any, with the command line flags applied on top.
    pub fn config(&self) -> anyhow::Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| anyhow!("error loading config:\n{e}"))?;
                toml::from_str(&content).map_err(|e| anyhow!("invalid config at {}:\n{e}", path.display()))?
            }
            None => GenerationConfig::default(),
        };

        if let Some(module) = self.module {
            config.module = module.into();
        }

        if let Some(version) = self.consumer_version {
            config.consumer_major_version = ConsumerVersion::try_from(version)?;
        }

        if let Some(explicit_typing) = self.explicit_typing {
            config.explicit_typing = explicit_typing;
        }

        if let Some(federation) = self.federation {
            config.federation_aware = federation;
        }

        Ok(config)
    }
}

pub(crate) fn parse() -> Args {
    Args::parse()
}
