use chrono::{DateTime, Utc};
use propkit::{
    ByteString, Entity,
    model::{EntityModel, TypeShape},
    registration::get_entity_by_kind,
};

#[derive(Entity)]
#[allow(dead_code)]
struct Article {
    #[datastore("title")]
    pub title: String,
    #[datastore("body,noindex")]
    pub body: Vec<u8>,
    #[datastore("tags")]
    pub tags: Vec<String>,
    #[datastore("digest")]
    pub digest: ByteString,
    #[datastore("published")]
    pub published: DateTime<Utc>,
    pub views: i32,
    draft: bool,
}

#[derive(Entity)]
#[allow(dead_code)]
#[datastore(kind = "Attachment")]
struct Blob {
    #[datastore("chunks")]
    pub chunks: Vec<Vec<u8>>,
    #[datastore("sizes")]
    pub sizes: std::vec::Vec<i64>,
    #[datastore("meta")]
    pub meta: Option<String>,
}

#[test]
fn def_records_fields_in_declaration_order() {
    let def = Article::entity_def();
    assert_eq!(Article::KIND, "Article");
    assert_eq!(def.type_name, "Article");

    let names: Vec<_> = def.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["title", "body", "tags", "digest", "published", "views", "draft"]);

    let shapes: Vec<_> = def.fields.iter().map(|f| f.shape.clone()).collect();
    assert_eq!(
        shapes,
        [
            TypeShape::Str,
            TypeShape::Bytes,
            TypeShape::seq(TypeShape::Str),
            TypeShape::ByteString,
            TypeShape::Timestamp,
            TypeShape::unsupported("i32"),
            TypeShape::Bool,
        ]
    );
}

#[test]
fn def_keeps_annotations_verbatim() {
    let def = Article::entity_def();
    assert_eq!(def.fields[1].tag.as_deref(), Some("body,noindex"));
    assert_eq!(def.fields[5].tag, None);

    let draft = &def.fields[6];
    assert!(!draft.exported);
    assert!(def.fields[..6].iter().all(|f| f.exported));
}

#[test]
fn nested_and_unknown_types_are_described_not_rejected() {
    let def = Blob::entity_def();
    assert_eq!(def.fields[0].shape, TypeShape::seq(TypeShape::Bytes));
    assert_eq!(def.fields[1].shape, TypeShape::seq(TypeShape::I64));
    assert_eq!(def.fields[2].shape, TypeShape::unsupported("Option<String>"));
    assert_eq!(def.fields[2].shape.to_string(), "Option<String>");
}

#[test]
fn kind_override_is_registered() {
    assert_eq!(Blob::KIND, "Attachment");

    let reg = get_entity_by_kind("Attachment").expect("blob registered");
    assert_eq!(reg.type_name, "Blob");
    assert_eq!((reg.def_fn)(), Blob::entity_def());

    assert!(get_entity_by_kind("Blob").is_none());
    assert!(get_entity_by_kind("Article").is_some());
}
