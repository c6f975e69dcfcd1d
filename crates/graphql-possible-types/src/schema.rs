use crate::{
    introspection::{IntrospectionData, IntrospectionResponse, IntrospectionSchema, IntrospectionType, NamedType, TypeKind},
    Error, Introspect,
};
use cynic_parser::type_system as ast;
use indexmap::IndexMap;
use std::collections::HashSet;

/// The named types of a GraphQL schema, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    types: IndexMap<String, Definition>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Scalar,
    Object { interfaces: Vec<String> },
    Interface { interfaces: Vec<String> },
    Union { members: Vec<String> },
    Enum,
    InputObject,
}

impl Definition {
    fn kind(&self) -> TypeKind {
        match self {
            Definition::Scalar => TypeKind::Scalar,
            Definition::Object { .. } => TypeKind::Object,
            Definition::Interface { .. } => TypeKind::Interface,
            Definition::Union { .. } => TypeKind::Union,
            Definition::Enum => TypeKind::Enum,
            Definition::InputObject => TypeKind::InputObject,
        }
    }

    fn references_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            Definition::Object { interfaces } | Definition::Interface { interfaces } => Some(interfaces),
            Definition::Union { members } => Some(members),
            Definition::Scalar | Definition::Enum | Definition::InputObject => None,
        }
    }
}

impl Schema {
    /// Reads the type definitions of an SDL document. Type extensions are folded into the type
    /// they extend. The document is not validated.
    pub fn parse(sdl: &str) -> Result<Self, Error> {
        let document = cynic_parser::parse_type_system_document(sdl).map_err(|err| Error::SchemaParse(err.to_string()))?;
        let mut schema = Schema::default();

        let defined: HashSet<&str> = document
            .definitions()
            .filter_map(|definition| match definition {
                ast::Definition::Type(ty) => Some(ty.name()),
                _ => None,
            })
            .collect();

        // Extensions of defined types apply after every definition, like introspection sees them.
        let mut extensions = Vec::new();

        for definition in document.definitions() {
            match definition {
                ast::Definition::Type(ty) => schema.merge(ty),
                ast::Definition::TypeExtension(ty) if defined.contains(ty.name()) => extensions.push(ty),
                ast::Definition::TypeExtension(ty) => schema.merge(ty),
                ast::Definition::Schema(_) | ast::Definition::SchemaExtension(_) | ast::Definition::Directive(_) => (),
            }
        }

        for extension in extensions {
            schema.merge(extension);
        }

        tracing::debug!("Parsed a schema with {} type definitions", schema.types.len());

        Ok(schema)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.types.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Definition)> + '_ {
        self.types.iter().map(|(name, definition)| (name.as_str(), definition))
    }

    /// Keeps the types for which `keep` returns true, and drops every union member or implemented
    /// interface pointing to a removed type. References to types that were never defined are left alone.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        let removed: HashSet<String> = self.types.keys().filter(|name| !keep(name)).cloned().collect();

        if removed.is_empty() {
            return;
        }

        self.types.retain(|name, _| !removed.contains(name));

        for definition in self.types.values_mut() {
            if let Some(references) = definition.references_mut() {
                references.retain(|name| !removed.contains(name));
            }
        }
    }

    /// Object types implementing `interface`, in declaration order.
    fn implementers<'a>(&'a self, interface: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.types.iter().filter_map(move |(name, definition)| match definition {
            Definition::Object { interfaces } if interfaces.iter().any(|i| i == interface) => Some(name.as_str()),
            _ => None,
        })
    }

    fn merge(&mut self, ty: ast::TypeDefinition<'_>) {
        let name = ty.name();
        let incoming = match ty {
            ast::TypeDefinition::Scalar(_) => Definition::Scalar,
            ast::TypeDefinition::Object(object) => Definition::Object {
                interfaces: object.implements_interfaces().map(str::to_owned).collect(),
            },
            ast::TypeDefinition::Interface(interface) => Definition::Interface {
                interfaces: interface.implements_interfaces().map(str::to_owned).collect(),
            },
            ast::TypeDefinition::Union(union) => Definition::Union {
                members: union.members().map(|member| member.name().to_owned()).collect(),
            },
            ast::TypeDefinition::Enum(_) => Definition::Enum,
            ast::TypeDefinition::InputObject(_) => Definition::InputObject,
        };

        let Some(existing) = self.types.get_mut(name) else {
            self.types.insert(name.to_owned(), incoming);
            return;
        };

        match (existing, incoming) {
            (Definition::Object { interfaces }, Definition::Object { interfaces: more })
            | (Definition::Interface { interfaces }, Definition::Interface { interfaces: more })
            | (Definition::Union { members: interfaces }, Definition::Union { members: more }) => {
                interfaces.extend(more);
            }
            (existing, incoming) if existing.kind() == incoming.kind() => (),
            (existing, incoming) => {
                tracing::warn!(
                    "Ignoring {:?} definition of {name}, it is already defined as {:?}",
                    incoming.kind(),
                    existing.kind()
                );
            }
        }
    }

    fn introspection_data(&self) -> IntrospectionData {
        let types = self
            .types
            .iter()
            .map(|(name, definition)| {
                let possible_types = match definition {
                    Definition::Union { members } => Some(members.iter().map(String::as_str).map(named).collect()),
                    Definition::Interface { .. } => Some(self.implementers(name).map(named).collect()),
                    _ => None,
                };

                IntrospectionType {
                    kind: definition.kind(),
                    name: name.clone(),
                    possible_types,
                }
            })
            .collect();

        IntrospectionData {
            schema: IntrospectionSchema { types },
        }
    }
}

fn named(name: &str) -> NamedType {
    NamedType { name: name.to_owned() }
}

#[async_trait::async_trait]
impl Introspect for Schema {
    async fn introspect(&self) -> IntrospectionResponse {
        IntrospectionResponse {
            data: Some(self.introspection_data()),
            errors: Vec::new(),
        }
    }
}
