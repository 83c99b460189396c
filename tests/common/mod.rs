//! Shared fixture: a museum collection schema exercising every encoding
//! the translator is sensitive to.
#![allow(dead_code)]

use vellum::prelude::*;

/// Builds the registry for the `Museum` document type.
///
/// Wire names follow camel-casing except `_id`; `tags` is a
/// document-represented mapping while `attrs` keeps the array-of-documents
/// representation, so the same construct succeeds on one and fails on the
/// other.
pub fn registry() -> SerializerRegistry {
    let conventions = Conventions::camel_case();

    let geo = StructSerializer::builder("Geo", conventions)
        .field("lat", scalars::double())
        .field("lng", scalars::double())
        .build();
    let address = StructSerializer::builder("Address", conventions)
        .field("city", scalars::string())
        .field("zip", scalars::string())
        .field("geo", geo.clone())
        .build();
    let exhibit = StructSerializer::builder("Exhibit", conventions)
        .field("title", scalars::string())
        .field("year", scalars::int32())
        .build();
    let status = EnumSerializer::new("Status", EnumRepresentation::String);

    let museum = StructSerializer::builder("Museum", conventions)
        .field_as("id", "_id", scalars::object_id())
        .field("name", scalars::string())
        .field("open", scalars::boolean())
        .field("opening_hours", scalars::string())
        .field("visitors", scalars::int64())
        .field("rating", NullableSerializer::new(scalars::double()))
        .field("founded", scalars::date_time())
        .field("legacy_code", scalars::uuid(UuidRepresentation::Standard))
        .field("status", status.clone())
        .field("address", address.clone())
        .field(
            "tags",
            MappingSerializer::new(
                scalars::string(),
                scalars::int32(),
                MappingRepresentation::Document,
            ),
        )
        .field(
            "attrs",
            MappingSerializer::new(
                scalars::string(),
                scalars::string(),
                MappingRepresentation::ArrayOfDocuments,
            ),
        )
        .field("scores", ListSerializer::new(scalars::int32()))
        .field("exhibits", ListSerializer::new(exhibit.clone()))
        .build();

    let mut registry = SerializerRegistry::new();
    registry.register(geo);
    registry.register(address);
    registry.register(exhibit);
    registry.register(status);
    registry.register(museum);
    registry
}

pub fn museum() -> ExprRef {
    Expr::parameter("m", TypeRef::named("Museum"))
}

/// A member access on the museum parameter.
pub fn member(name: &str, ty: TypeRef) -> ExprRef {
    Expr::member(museum(), name, ty)
}

pub fn tags() -> ExprRef {
    member("tags", TypeRef::map(TypeRef::String, TypeRef::Int32))
}

pub fn attrs() -> ExprRef {
    member("attrs", TypeRef::map(TypeRef::String, TypeRef::String))
}

pub fn scores() -> ExprRef {
    member("scores", TypeRef::list(TypeRef::Int32))
}

pub fn status_active() -> Constant {
    Constant::EnumVariant {
        type_name: "Status".into(),
        variant: "Active".into(),
        ordinal: 1,
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
