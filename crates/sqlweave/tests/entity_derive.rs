#![allow(dead_code)]

use chrono::NaiveDateTime;
use sqlweave::prelude::*;
use sqlweave::{MemberType, registered_entities};

#[derive(Entity)]
#[orm(table = "T_People", schema = "dbo")]
struct Person {
    #[orm(id)]
    id: i32,
    #[orm(column = "姓")]
    last_name: String,
    #[orm(column = "名")]
    first_name: Option<String>,
    #[orm(skip)]
    full_name: String,
    age: i32,
    #[orm(ambient = "SYSDATETIME()")]
    created_at: NaiveDateTime,
    #[orm(column = "UpdatedAt", ambient = "SYSDATETIME()")]
    modified_at: NaiveDateTime,
}

#[derive(Entity)]
struct Tag {
    #[orm(id, no_identity)]
    code: String,
    #[orm(member = "Label", order = 2)]
    label: String,
    payload: Vec<u8>,
}

#[derive(Entity)]
#[orm(table = "order_lines")]
struct OrderLine {
    #[orm(id)]
    order_id: i64,
    #[orm(id)]
    line_no: i32,
    r#type: String,
}

#[derive(Entity)]
#[orm(table = "audit")]
struct Audit {
    #[orm(identity)]
    seq: i64,
}

#[test]
fn derived_columns_follow_field_order() {
    let table = Person::table().unwrap();
    assert_eq!(table.name(), "T_People");
    assert_eq!(table.schema(), Some("dbo"));

    let members: Vec<_> = table.columns().iter().map(|c| c.member_name()).collect();
    assert_eq!(
        members,
        [
            "id",
            "last_name",
            "first_name",
            "full_name",
            "age",
            "created_at",
            "modified_at"
        ]
    );

    let id = table.mapped_column("id").unwrap();
    assert!(id.is_primary_key());
    assert!(id.is_auto_increment());
    assert_eq!(id.member_type(), MemberType::I32);

    let first_name = table.mapped_column("first_name").unwrap();
    assert_eq!(first_name.column_name(), "名");
    assert!(first_name.is_nullable());
    assert_eq!(first_name.member_type(), MemberType::Text);

    assert!(!table.column("full_name").unwrap().is_mapped());

    let modified = table.mapped_column("modified_at").unwrap();
    assert_eq!(modified.column_name(), "UpdatedAt");
    assert_eq!(modified.ambient(), Some("SYSDATETIME()"));
    assert_eq!(modified.member_type(), MemberType::DateTime);
}

#[test]
fn derived_entity_renders_statements() {
    let query = sqlweave::select::<Person>(&Dialect::SQL_SERVER, Some(&col("age").ge(20))).unwrap();
    assert_eq!(
        query.text(),
        "select
    [id] as [id],
    [姓] as [last_name],
    [名] as [first_name],
    [age] as [age],
    [created_at] as [created_at],
    [UpdatedAt] as [modified_at]
from [dbo].[T_People]
where
    [age] >= @p1"
    );

    let query = sqlweave::insert::<Person>(&Dialect::SQL_SERVER, true).unwrap();
    assert_eq!(
        query.text(),
        "insert into [dbo].[T_People]
(
    [姓],
    [名],
    [age],
    [created_at],
    [UpdatedAt]
)
values
(
    @last_name,
    @first_name,
    @age,
    SYSDATETIME(),
    SYSDATETIME()
)"
    );
}

#[test]
fn member_override_and_explicit_identity() {
    let table = Tag::table().unwrap();
    assert_eq!(table.name(), "Tag");
    assert_eq!(table.schema(), None);

    let code = table.mapped_column("code").unwrap();
    assert!(code.is_primary_key());
    assert!(!code.is_auto_increment());

    let label = table.mapped_column("Label").unwrap();
    assert_eq!(label.column_name(), "Label");
    assert_eq!(label.order(), 2);
    assert!(table.column("label").is_none());

    assert_eq!(
        table.mapped_column("payload").unwrap().member_type(),
        MemberType::Bytes
    );

    let query = sqlweave::insert::<Tag>(&Dialect::SQLITE, false).unwrap();
    assert_eq!(
        query.text(),
        "insert into \"Tag\"\n(\n    \"code\",\n    \"Label\",\n    \"payload\"\n)\nvalues\n(\n    @code,\n    @Label,\n    @payload\n)"
    );
}

#[test]
fn composite_key_is_not_auto_increment() {
    let table = OrderLine::table().unwrap();
    assert_eq!(table.primary_key().count(), 2);
    assert!(table.columns().iter().all(|c| !c.is_auto_increment()));
    assert!(table.column("type").is_some());
}

#[test]
fn identity_on_non_key_fails_to_describe() {
    let err = Audit::table().unwrap_err();
    assert!(err.is_mapping());
}

#[test]
fn derived_entities_are_registered() {
    let names: Vec<_> = registered_entities().collect();
    for expected in ["Person", "Tag", "OrderLine", "Audit"] {
        assert!(names.contains(&expected), "{expected} missing from {names:?}");
    }
}
