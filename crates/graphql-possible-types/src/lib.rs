//! Generates the possible-types artifact GraphQL clients need to match fragments on unions and
//! interfaces: every abstract type of a schema, with the object types that can stand behind it.
//!
//! The pipeline introspects the schema ([`classify`]), arranges the abstract types in the layout
//! the consuming client expects ([`build_shape`]) and renders them as JSON, a JavaScript module or
//! a TypeScript module ([`emit`]).
//!
//! ```ignore
//! # async fn run() -> Result<(), graphql_possible_types::Error> {
//! use graphql_possible_types::{GenerationConfig, Schema};
//!
//! let schema = Schema::parse("union SearchResult = Book | Movie type Book { id: ID } type Movie { id: ID }")?;
//! let artifact = graphql_possible_types::generate_for_path(&schema, &GenerationConfig::default(), "possible-types.ts").await?;
//! # Ok(())
//! # }
//! ```

mod classify;
mod config;
mod emit;
mod error;
mod federation;
mod introspection;
mod schema;
mod shape;

pub use self::{
    classify::{classify, DescriptorKind, SchemaTypeDescriptor},
    config::{validate, ConsumerVersion, GenerationConfig, ModuleStyle, OutputEncoding},
    emit::emit,
    error::Error,
    federation::{SchemaTransform, StripFederation},
    introspection::{
        Introspect, IntrospectionData, IntrospectionResponse, IntrospectionSchema, IntrospectionType, NamedType,
        ResponseError, TypeKind,
    },
    schema::{Definition, Schema},
    shape::{
        build_shape, AbstractKind, AbstractType, AbstractTypeMap, AbstractTypes, IntrospectionResultData,
        PossibleType, PossibleTypesResultData, Shape,
    },
};

use std::path::Path;

/// Generates the artifact for `schema`. Federation types are stripped first when the
/// configuration asks for it.
pub async fn generate(schema: &Schema, config: &GenerationConfig, encoding: OutputEncoding) -> Result<String, Error> {
    if config.federation_aware {
        let schema = StripFederation.transform(schema.clone());
        return generate_from_introspection(&schema, config, encoding).await;
    }

    generate_from_introspection(schema, config, encoding).await
}

/// Validates the output file name, then generates the artifact it should contain.
pub async fn generate_for_path(
    schema: &Schema,
    config: &GenerationConfig,
    output_file: impl AsRef<Path>,
) -> Result<String, Error> {
    let encoding = validate(config, output_file)?;
    generate(schema, config, encoding).await
}

/// Generates the artifact from any introspection source. The source is used as is: schema
/// transforms are the caller's business.
pub async fn generate_from_introspection<I>(
    source: &I,
    config: &GenerationConfig,
    encoding: OutputEncoding,
) -> Result<String, Error>
where
    I: Introspect + ?Sized,
{
    config.check(encoding)?;

    let descriptors = classify(source).await?;
    let shape = build_shape(&descriptors, config.consumer_major_version);

    tracing::debug!("Built the version {} shape", config.consumer_major_version);

    emit(&shape, encoding, config)
}
