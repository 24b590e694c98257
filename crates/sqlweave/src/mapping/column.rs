use serde::Serialize;

/// Kind of an entity member, as far as statement generation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MemberType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Decimal,
    Text,
    Bytes,
    Date,
    Time,
    DateTime,
    Timestamp,
    Uuid,
    Json,
    Other,
}

impl MemberType {
    /// Integer members are eligible for auto-increment inference.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            MemberType::I8
                | MemberType::I16
                | MemberType::I32
                | MemberType::I64
                | MemberType::U8
                | MemberType::U16
                | MemberType::U32
                | MemberType::U64
        )
    }
}

/// Metadata for one entity member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    pub(crate) member_name: String,
    pub(crate) member_type: MemberType,
    pub(crate) column_name: String,
    pub(crate) order: i32,
    pub(crate) ambient: Option<String>,
    pub(crate) primary_key: bool,
    pub(crate) nullable: bool,
    pub(crate) mapped: bool,
    pub(crate) auto_increment: bool,
}

impl ColumnDescriptor {
    /// Start describing `member`. The column name defaults to the member name.
    pub fn builder(member: impl Into<String>, member_type: MemberType) -> ColumnBuilder {
        let member = member.into();
        ColumnBuilder {
            column_name: member.clone(),
            member_name: member,
            member_type,
            order: None,
            ambient: None,
            primary_key: false,
            nullable: false,
            mapped: true,
            auto_increment: None,
        }
    }

    pub fn member_name(&self) -> &str {
        &self.member_name
    }

    pub fn member_type(&self) -> MemberType {
        self.member_type
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    /// SQL literal substituted in ambient mode, e.g. `SYSDATETIME()`.
    pub fn ambient(&self) -> Option<&str> {
        self.ambient.as_deref()
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_mapped(&self) -> bool {
        self.mapped
    }

    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }
}

/// Builder for [`ColumnDescriptor`]; finished by
/// [`TableBuilder::column`](super::TableBuilder::column).
#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    pub(crate) member_name: String,
    pub(crate) member_type: MemberType,
    pub(crate) column_name: String,
    pub(crate) order: Option<i32>,
    pub(crate) ambient: Option<String>,
    pub(crate) primary_key: bool,
    pub(crate) nullable: bool,
    pub(crate) mapped: bool,
    pub(crate) auto_increment: Option<bool>,
}

impl ColumnBuilder {
    pub fn column_name(mut self, name: impl Into<String>) -> Self {
        self.column_name = name.into();
        self
    }

    /// Declared column order, `-1` when absent. Statements always follow
    /// declaration order; this is carried as metadata only.
    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn ambient(mut self, literal: impl Into<String>) -> Self {
        self.ambient = Some(literal.into());
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Exclude the member from every statement.
    pub fn not_mapped(mut self) -> Self {
        self.mapped = false;
        self
    }

    /// Override auto-increment inference.
    pub fn auto_increment(mut self, enabled: bool) -> Self {
        self.auto_increment = Some(enabled);
        self
    }
}
