use crate::{
    classify::{DescriptorKind, SchemaTypeDescriptor},
    ConsumerVersion,
};
use indexmap::IndexMap;

/// Abstract type name to the names of its concrete types.
pub type AbstractTypeMap = IndexMap<String, Vec<String>>;

/// The data written to the artifact, in the layout the consuming client expects.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    V2(IntrospectionResultData),
    V3(PossibleTypesResultData),
}

/// `{ "__schema": { "types": [...] } }`
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntrospectionResultData {
    #[serde(rename = "__schema")]
    pub schema: AbstractTypes,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AbstractTypes {
    pub types: Vec<AbstractType>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AbstractType {
    pub kind: AbstractKind,
    pub name: String,
    #[serde(rename = "possibleTypes")]
    pub possible_types: Vec<PossibleType>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AbstractKind {
    Union,
    Interface,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PossibleType {
    pub name: String,
}

/// `{ "possibleTypes": { "Abstract": ["Concrete", ...] } }`
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PossibleTypesResultData {
    #[serde(rename = "possibleTypes")]
    pub possible_types: AbstractTypeMap,
}

impl Shape {
    /// Name of the TypeScript interface describing this shape.
    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::V2(_) => "IntrospectionResultData",
            Shape::V3(_) => "PossibleTypesResultData",
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        match self {
            Shape::V2(data) => serde_json::to_string_pretty(data),
            Shape::V3(data) => serde_json::to_string_pretty(data),
        }
    }
}

/// Keeps the unions and interfaces of `descriptors`, in order, in the layout of `version`.
/// Abstract types without any concrete type are kept with an empty list.
pub fn build_shape(descriptors: &[SchemaTypeDescriptor], version: ConsumerVersion) -> Shape {
    let abstract_types = descriptors.iter().filter(|descriptor| descriptor.kind.is_abstract());

    match version {
        ConsumerVersion::V2 => {
            let types = abstract_types
                .map(|descriptor| AbstractType {
                    kind: match descriptor.kind {
                        DescriptorKind::Interface => AbstractKind::Interface,
                        _ => AbstractKind::Union,
                    },
                    name: descriptor.name.clone(),
                    possible_types: descriptor
                        .possible_types
                        .iter()
                        .map(|name| PossibleType { name: name.clone() })
                        .collect(),
                })
                .collect();

            Shape::V2(IntrospectionResultData {
                schema: AbstractTypes { types },
            })
        }
        ConsumerVersion::V3 => {
            let possible_types = abstract_types
                .map(|descriptor| (descriptor.name.clone(), descriptor.possible_types.clone()))
                .collect();

            Shape::V3(PossibleTypesResultData { possible_types })
        }
    }
}
