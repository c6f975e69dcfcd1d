use crate::{
    introspection::{IntrospectionType, TypeKind},
    Error, Introspect,
};

/// A type of the schema, reduced to what matters for fragment matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaTypeDescriptor {
    pub kind: DescriptorKind,
    pub name: String,
    /// Concrete types behind an abstract type, in introspection order. Always empty for
    /// [`DescriptorKind::Other`].
    pub possible_types: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescriptorKind {
    Union,
    Interface,
    Other,
}

impl DescriptorKind {
    pub fn is_abstract(self) -> bool {
        matches!(self, DescriptorKind::Union | DescriptorKind::Interface)
    }
}

impl From<TypeKind> for DescriptorKind {
    fn from(kind: TypeKind) -> Self {
        match kind {
            TypeKind::Union => DescriptorKind::Union,
            TypeKind::Interface => DescriptorKind::Interface,
            _ => DescriptorKind::Other,
        }
    }
}

impl From<IntrospectionType> for SchemaTypeDescriptor {
    fn from(ty: IntrospectionType) -> Self {
        let kind = DescriptorKind::from(ty.kind);

        let possible_types = match ty.possible_types {
            Some(possible_types) if kind.is_abstract() => possible_types.into_iter().map(|ty| ty.name).collect(),
            _ => Vec::new(),
        };

        SchemaTypeDescriptor {
            kind,
            name: ty.name,
            possible_types,
        }
    }
}

/// Introspects the schema and describes every type it defines, in introspection order.
pub async fn classify<I>(schema: &I) -> Result<Vec<SchemaTypeDescriptor>, Error>
where
    I: Introspect + ?Sized,
{
    let response = schema.introspect().await;

    let Some(data) = response.data else {
        let messages = response.errors.into_iter().map(|error| error.message).collect();
        return Err(Error::SchemaIntrospection(messages));
    };

    let descriptors: Vec<SchemaTypeDescriptor> = data.schema.types.into_iter().map(Into::into).collect();

    tracing::debug!(
        "Found {} abstract types out of {}",
        descriptors.iter().filter(|descriptor| descriptor.kind.is_abstract()).count(),
        descriptors.len()
    );

    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        introspection::{IntrospectionResponse, ResponseError},
        Schema,
    };
    use indoc::indoc;

    #[tokio::test]
    async fn classifies_every_type() {
        let schema = Schema::parse(indoc! {r"
            interface Node { id: ID! }
            type Book implements Node { id: ID! }
            type Movie implements Node { id: ID! }
            union SearchResult = Book | Movie
            scalar Cursor
        "})
        .unwrap();

        let descriptors = classify(&schema).await.unwrap();

        let expected = [
            (DescriptorKind::Interface, "Node", vec!["Book", "Movie"]),
            (DescriptorKind::Other, "Book", vec![]),
            (DescriptorKind::Other, "Movie", vec![]),
            (DescriptorKind::Union, "SearchResult", vec!["Book", "Movie"]),
            (DescriptorKind::Other, "Cursor", vec![]),
        ];

        assert_eq!(descriptors.len(), expected.len());

        for (descriptor, (kind, name, possible_types)) in descriptors.iter().zip(expected) {
            assert_eq!(descriptor.kind, kind);
            assert_eq!(descriptor.name, name);
            assert_eq!(descriptor.possible_types, possible_types);
        }
    }

    #[tokio::test]
    async fn no_data() {
        let response = IntrospectionResponse {
            data: None,
            errors: vec![ResponseError {
                message: "GraphQL introspection is not allowed".to_owned(),
            }],
        };

        let error = classify(&response).await.unwrap_err();

        assert_eq!(
            error.to_string(),
            "Couldn't introspect the schema: GraphQL introspection is not allowed"
        );
    }

    #[tokio::test]
    async fn possible_types_of_concrete_types_are_ignored() {
        let response = IntrospectionResponse::from_json(
            r#"{ "__schema": { "types": [{ "kind": "OBJECT", "name": "Odd", "possibleTypes": [{ "name": "X" }] }] } }"#,
        )
        .unwrap();

        let descriptors = classify(&response).await.unwrap();

        assert_eq!(descriptors[0].kind, DescriptorKind::Other);
        assert!(descriptors[0].possible_types.is_empty());
    }
}
