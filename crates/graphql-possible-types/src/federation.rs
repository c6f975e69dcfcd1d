use crate::Schema;

/// A rewrite applied to the schema before it is introspected.
pub trait SchemaTransform {
    fn transform(&self, schema: Schema) -> Schema;
}

/// Removes the types a federation subgraph exposes for the router only (`_Entity`, `_Service`, the
/// `link__` and `federation__` imports...), so they never end up in the generated artifact.
#[derive(Clone, Copy, Debug, Default)]
pub struct StripFederation;

const FEDERATION_TYPES: &[&str] = &["_Service", "_Entity", "_Any", "_FieldSet", "FieldSet"];
const FEDERATION_PREFIXES: &[&str] = &["link__", "federation__"];

impl StripFederation {
    pub fn is_federation_type(name: &str) -> bool {
        FEDERATION_TYPES.contains(&name) || FEDERATION_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
    }
}

impl SchemaTransform for StripFederation {
    fn transform(&self, mut schema: Schema) -> Schema {
        let before = schema.len();
        schema.retain(|name| !Self::is_federation_type(name));

        tracing::debug!("Stripped {} federation types", before - schema.len());

        schema
    }
}
