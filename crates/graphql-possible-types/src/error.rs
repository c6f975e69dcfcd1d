use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The introspection request returned no data.
    #[error("Couldn't introspect the schema{}", details(.0))]
    SchemaIntrospection(Vec<String>),
    /// `extension` is `None` when the file name has no extension at all.
    #[error(
        "{} is not supported. The output file must end with one of: .json, .js, .jsx, .ts, .tsx",
        describe_extension(.file, .extension)
    )]
    UnsupportedOutputExtension { file: String, extension: Option<String> },
    #[error("Invalid configuration: {0}")]
    InvalidConfigCombination(String),
    #[error("Could not parse the schema: {0}")]
    SchemaParse(String),
    #[error("Could not serialize the possible types: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Could not write the artifact: {0}")]
    Format(#[from] fmt::Error),
}

fn describe_extension(file: &str, extension: &Option<String>) -> String {
    match extension {
        Some(extension) => format!("Extension {extension}"),
        None => format!("Output file {file} has no extension, which"),
    }
}

fn details(messages: &[String]) -> String {
    if messages.is_empty() {
        return String::new();
    }

    format!(": {}", messages.join(", "))
}
