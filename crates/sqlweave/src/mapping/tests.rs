use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn people() -> TableBuilder {
    TableDescriptor::builder("T_People")
        .schema("dbo")
        .column(ColumnDescriptor::builder("Id", MemberType::I32).primary_key())
        .column(ColumnDescriptor::builder("LastName", MemberType::Text).column_name("姓"))
        .column(ColumnDescriptor::builder("FullName", MemberType::Text).not_mapped())
        .column(
            ColumnDescriptor::builder("CreatedAt", MemberType::DateTime).ambient("SYSDATETIME()"),
        )
}

#[test]
fn columns_keep_declaration_order() {
    let table = people().build().unwrap();
    let members: Vec<_> = table.columns().iter().map(|c| c.member_name()).collect();
    assert_eq!(members, ["Id", "LastName", "FullName", "CreatedAt"]);

    let mapped: Vec<_> = table.mapped_columns().map(|c| c.column_name()).collect();
    assert_eq!(mapped, ["Id", "姓", "CreatedAt"]);
    assert_eq!(table.schema(), Some("dbo"));
}

#[test]
fn column_defaults() {
    let table = people().build().unwrap();
    let last = table.column("LastName").unwrap();
    assert_eq!(last.order(), -1);
    assert!(!last.is_nullable());
    assert!(last.ambient().is_none());
    assert_eq!(table.column("CreatedAt").unwrap().ambient(), Some("SYSDATETIME()"));
}

#[test]
fn mapped_column_rejects_unknown_and_unmapped() {
    let table = people().build().unwrap();
    assert_eq!(table.mapped_column("LastName").unwrap().column_name(), "姓");

    let err = table.mapped_column("FullName").unwrap_err();
    assert!(matches!(&err, crate::WeaveError::Mapping { member, .. } if member == "FullName"));

    assert!(table.mapped_column("Nickname").unwrap_err().is_mapping());
}

#[test]
fn single_integer_key_is_auto_increment() {
    let table = people().build().unwrap();
    assert!(table.column("Id").unwrap().is_auto_increment());
    assert_eq!(table.primary_key().count(), 1);
}

#[test]
fn composite_or_text_keys_are_not_auto_increment() {
    let composite = TableDescriptor::builder("Link")
        .column(ColumnDescriptor::builder("A", MemberType::I64).primary_key())
        .column(ColumnDescriptor::builder("B", MemberType::I64).primary_key())
        .build()
        .unwrap();
    assert!(composite.columns().iter().all(|c| !c.is_auto_increment()));

    let text_key = TableDescriptor::builder("Code")
        .column(ColumnDescriptor::builder("Code", MemberType::Text).primary_key())
        .build()
        .unwrap();
    assert!(!text_key.column("Code").unwrap().is_auto_increment());
}

#[test]
fn explicit_auto_increment_flag_wins() {
    let table = TableDescriptor::builder("T")
        .column(
            ColumnDescriptor::builder("Id", MemberType::I32)
                .primary_key()
                .auto_increment(false),
        )
        .build()
        .unwrap();
    assert!(!table.column("Id").unwrap().is_auto_increment());

    let table = TableDescriptor::builder("T")
        .column(
            ColumnDescriptor::builder("Id", MemberType::Uuid)
                .primary_key()
                .auto_increment(true),
        )
        .build()
        .unwrap();
    assert!(table.column("Id").unwrap().is_auto_increment());
}

#[test]
fn auto_increment_requires_primary_key() {
    let err = TableDescriptor::builder("T")
        .column(ColumnDescriptor::builder("Seq", MemberType::I32).auto_increment(true))
        .build()
        .unwrap_err();
    assert!(err.is_mapping());
}

#[test]
fn duplicate_members_are_rejected() {
    let err = TableDescriptor::builder("T")
        .column(ColumnDescriptor::builder("Id", MemberType::I32))
        .column(ColumnDescriptor::builder("Id", MemberType::I64))
        .build()
        .unwrap_err();
    assert!(err.is_mapping());
}

static DESCRIBE_CALLS: AtomicUsize = AtomicUsize::new(0);

struct Counted;

impl Entity for Counted {
    fn describe() -> crate::WeaveResult<TableDescriptor> {
        DESCRIBE_CALLS.fetch_add(1, Ordering::SeqCst);
        TableDescriptor::builder("Counted")
            .column(ColumnDescriptor::builder("Id", MemberType::I32).primary_key())
            .build()
    }
}

#[test]
fn table_is_described_once_and_shared() {
    let first = Counted::table().unwrap();
    let second = Counted::table().unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(DESCRIBE_CALLS.load(Ordering::SeqCst), 1);
}

static SHARED_DESCRIBE_CALLS: AtomicUsize = AtomicUsize::new(0);

#[test]
fn cache_is_safe_across_threads() {
    struct Shared;
    impl Entity for Shared {
        fn describe() -> crate::WeaveResult<TableDescriptor> {
            SHARED_DESCRIBE_CALLS.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(50));
            TableDescriptor::builder("Shared").build()
        }
    }

    let barrier = std::sync::Barrier::new(8);
    let ptrs: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    Shared::table().unwrap() as *const TableDescriptor as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(ptrs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(SHARED_DESCRIBE_CALLS.load(Ordering::SeqCst), 1);
}

struct Broken;

impl Entity for Broken {
    fn describe() -> crate::WeaveResult<TableDescriptor> {
        TableDescriptor::builder("Broken")
            .column(ColumnDescriptor::builder("X", MemberType::I32))
            .column(ColumnDescriptor::builder("X", MemberType::I32))
            .build()
    }
}

#[test]
fn failed_description_is_reported_every_time() {
    assert!(Broken::table().unwrap_err().is_mapping());
    assert!(Broken::table().unwrap_err().is_mapping());
}
