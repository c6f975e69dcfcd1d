//! The slice of GraphQL introspection the generator consumes, and the capability that produces it.

use crate::Error;

/// A schema that can answer the introspection query:
///
/// ```graphql
/// query IntrospectionFragmentMatcher {
///   __schema {
///     types {
///       kind
///       name
///       possibleTypes {
///         name
///       }
///     }
///   }
/// }
/// ```
///
/// Executing it may require a round-trip through a remote executor, hence the async signature.
#[async_trait::async_trait]
pub trait Introspect: Send + Sync {
    async fn introspect(&self) -> IntrospectionResponse;
}

/// A GraphQL response to the introspection query.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct IntrospectionResponse {
    pub data: Option<IntrospectionData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ResponseError {
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct IntrospectionSchema {
    pub types: Vec<IntrospectionType>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct IntrospectionType {
    pub kind: TypeKind,
    pub name: String,
    #[serde(rename = "possibleTypes", default)]
    pub possible_types: Option<Vec<NamedType>>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedType {
    pub name: String,
}

/// `__TypeKind`
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl IntrospectionResponse {
    /// Reads a saved introspection result. Both a full response (`{"data": {"__schema": ...}}`)
    /// and the bare data (`{"__schema": ...}`) are accepted.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Document {
            Data(IntrospectionData),
            Response(IntrospectionResponse),
        }

        Ok(match serde_json::from_str(json)? {
            Document::Data(data) => IntrospectionResponse {
                data: Some(data),
                errors: Vec::new(),
            },
            Document::Response(response) => response,
        })
    }
}

#[async_trait::async_trait]
impl Introspect for IntrospectionResponse {
    async fn introspect(&self) -> IntrospectionResponse {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn full_response() {
        let json = indoc! {r#"
            {
              "data": {
                "__schema": {
                  "types": [
                    { "kind": "UNION", "name": "SearchResult", "possibleTypes": [{ "name": "Book" }] },
                    { "kind": "OBJECT", "name": "Book", "possibleTypes": null, "fields": [] }
                  ]
                }
              }
            }
        "#};

        let response = IntrospectionResponse::from_json(json).unwrap();
        let types = response.data.unwrap().schema.types;

        assert_eq!(types.len(), 2);
        assert_eq!(types[0].kind, TypeKind::Union);
        assert_eq!(
            types[0].possible_types,
            Some(vec![NamedType {
                name: "Book".to_owned()
            }])
        );
        assert_eq!(types[1].kind, TypeKind::Object);
        assert_eq!(types[1].possible_types, None);
    }

    #[test]
    fn bare_data() {
        let json = r#"{ "__schema": { "types": [{ "kind": "INPUT_OBJECT", "name": "Filter" }] } }"#;

        let response = IntrospectionResponse::from_json(json).unwrap();

        assert!(response.errors.is_empty());
        assert_eq!(response.data.unwrap().schema.types[0].kind, TypeKind::InputObject);
    }

    #[test]
    fn response_without_data() {
        let json = r#"{ "data": null, "errors": [{ "message": "introspection is disabled", "path": [] }] }"#;

        let response = IntrospectionResponse::from_json(json).unwrap();

        assert_eq!(response.data, None);
        assert_eq!(response.errors[0].message, "introspection is disabled");
    }

    #[test]
    fn malformed_json() {
        let error = IntrospectionResponse::from_json("{").unwrap_err();
        assert!(matches!(error, Error::Serialization(_)));
    }
}
