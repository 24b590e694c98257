use super::*;
use crate::dialect::Dialect;
use crate::mapping::MemberType;
use crate::param::BindParameters;
use crate::predicate::col;
use crate::value::Value;

fn table() -> TableDescriptor {
    TableDescriptor::builder("Items")
        .column(ColumnDescriptor::builder("Id", MemberType::I64).primary_key())
        .column(ColumnDescriptor::builder("Name", MemberType::Text))
        .column(ColumnDescriptor::builder("Cached", MemberType::Text).not_mapped())
        .column(ColumnDescriptor::builder("Stamp", MemberType::DateTime).ambient("now()"))
        .build()
        .unwrap()
}

fn run(command: impl Command) -> WeaveResult<(String, Option<BindParameters>)> {
    let table = table();
    let mut writer = SqlWriter::new(&Dialect::SQLITE);
    command.write(&table, &mut writer)?;
    Ok(writer.into_parts())
}

#[test]
fn select_skips_unmapped_members() {
    let (sql, params) = run(Select::all()).unwrap();
    assert_eq!(
        sql,
        "select\n    \"Id\" as \"Id\",\n    \"Name\" as \"Name\",\n    \"Stamp\" as \"Stamp\"\nfrom \"Items\""
    );
    assert!(params.is_none());
}

#[test]
fn subset_keeps_declaration_order_and_ignores_duplicates() {
    let (sql, _) = run(Select::members(&["Stamp", "Id", "Stamp", "Cached"])).unwrap();
    assert_eq!(
        sql,
        "select\n    \"Id\" as \"Id\",\n    \"Stamp\" as \"Stamp\"\nfrom \"Items\""
    );
}

#[test]
fn subset_with_unknown_member_is_a_mapping_error() {
    let err = run(Select::members(&["Id", "Price"])).unwrap_err();
    assert!(matches!(err, WeaveError::Mapping { ref member, .. } if member == "Price"));
}

#[test]
fn subset_of_only_unmapped_members_is_a_validation_error() {
    let err = run(Select::members(&["Cached"])).unwrap_err();
    assert!(matches!(err, WeaveError::Validation(_)));
}

#[test]
fn insert_of_only_auto_increment_is_a_validation_error() {
    let err = run(Insert {
        use_ambient: false,
        members: Some(&["Id"]),
    })
    .unwrap_err();
    assert!(matches!(err, WeaveError::Validation(_)));
}

#[test]
fn insert_binds_member_named_nulls() {
    let (sql, params) = run(Insert {
        use_ambient: true,
        members: None,
    })
    .unwrap();
    assert_eq!(
        sql,
        "insert into \"Items\"\n(\n    \"Name\",\n    \"Stamp\"\n)\nvalues\n(\n    @Name,\n    now()\n)"
    );
    let params = params.unwrap();
    assert_eq!(params.names().collect::<Vec<_>>(), ["Name"]);
    assert_eq!(params.get("Name"), Some(&Value::Null));
}

#[test]
fn update_keeps_auto_increment_columns() {
    let (sql, params) = run(Update {
        use_ambient: false,
        members: Some(&["Id", "Stamp"]),
    })
    .unwrap();
    assert_eq!(sql, "update \"Items\"\nset\n    \"Id\" = @Id,\n    \"Stamp\" = @Stamp");
    assert_eq!(params.unwrap().len(), 2);
}

#[test]
fn where_on_empty_writer_has_no_leading_newline() {
    let predicate = col("Id").eq(3);
    let (sql, _) = run(Where {
        predicate: &predicate,
    })
    .unwrap();
    assert_eq!(sql, "where\n    \"Id\" = @p1");
}

#[test]
fn then_by_on_empty_writer_starts_with_indent() {
    let (sql, _) = run(ThenBy {
        member: "Name",
        ascending: false,
    })
    .unwrap();
    assert_eq!(sql, "    \"Name\" desc");
}

#[test]
fn order_by_unmapped_member_is_a_mapping_error() {
    let err = run(OrderBy {
        member: "Cached",
        ascending: true,
    })
    .unwrap_err();
    assert!(err.is_mapping());
}

#[test]
fn raw_fragment_can_bind() {
    let (sql, params) = run(Raw::new(|w| {
        w.push_str("limit ").bind("take", 10)?;
        Ok(())
    }))
    .unwrap();
    assert_eq!(sql, "limit @take");
    assert_eq!(params.unwrap().get("take"), Some(&Value::Int(10)));
}

#[test]
fn fixed_templates() {
    assert_eq!(run(Count).unwrap().0, "select count(*) as \"Count\" from \"Items\"");
    assert_eq!(run(Delete).unwrap().0, "delete from \"Items\"");
    assert_eq!(run(Truncate).unwrap().0, "truncate table \"Items\"");
}
