//! Board domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AuftragError, AuftragResult};

/// Default column definitions for a new board, in display order.
pub const DEFAULT_COLUMNS: &[&str] = &[
    "Offen",
    "In Bearbeitung",
    "Termin",
    "Nochmal vorbeigehen",
    "Erledigt",
    "Rechnung",
];

/// A work order (Auftrag) on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: String,
    #[serde(flatten)]
    pub fields: WorkOrderFields,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The editable fields of a work order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkOrderFields {
    pub customer: String,
    pub address: String,
    pub tenant: String,
    pub phone: String,
    pub email: String,
    pub problem_description: String,
    /// Opaque reference to an externally stored file; may be empty.
    pub attachment_ref: String,
}

/// A partial set of editable fields. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderPatch {
    pub customer: Option<String>,
    pub address: Option<String>,
    pub tenant: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub problem_description: Option<String>,
    pub attachment_ref: Option<String>,
}

impl WorkOrderPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite every field that is set in the patch.
    pub fn apply_to(self, fields: &mut WorkOrderFields) {
        let slots = [
            (self.customer, &mut fields.customer),
            (self.address, &mut fields.address),
            (self.tenant, &mut fields.tenant),
            (self.phone, &mut fields.phone),
            (self.email, &mut fields.email),
            (self.problem_description, &mut fields.problem_description),
            (self.attachment_ref, &mut fields.attachment_ref),
        ];
        for (value, slot) in slots {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

impl From<WorkOrderFields> for WorkOrderPatch {
    fn from(fields: WorkOrderFields) -> Self {
        Self {
            customer: Some(fields.customer),
            address: Some(fields.address),
            tenant: Some(fields.tenant),
            phone: Some(fields.phone),
            email: Some(fields.email),
            problem_description: Some(fields.problem_description),
            attachment_ref: Some(fields.attachment_ref),
        }
    }
}

/// Where a moved work order lands inside its destination column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderPolicy {
    /// Always land after the last card of the destination column; the
    /// requested index is ignored.
    #[default]
    Append,
    /// Land at the requested index within the destination column.
    Positional,
}

impl ReorderPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "append" => Some(Self::Append),
            "positional" => Some(Self::Positional),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Positional => "positional",
        }
    }
}

/// The fixed, ordered set of column names a board is initialised with.
///
/// Never empty, and names are unique and non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ColumnSet(Vec<String>);

impl ColumnSet {
    pub fn new<I, S>(names: I) -> AuftragResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(AuftragError::config("a board needs at least one column"));
        }
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(AuftragError::config(format!("column #{} has a blank name", i + 1)));
            }
            if names[..i].contains(name) {
                return Err(AuftragError::config(format!("duplicate column '{}'", name)));
            }
        }

        Ok(Self(names))
    }

    /// The column new work orders start in.
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    /// Reject a name outside the configured set.
    pub fn require(&self, name: &str) -> AuftragResult<()> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(AuftragError::InvalidColumn {
                column: name.to_string(),
                valid: self.0.join(", "),
            })
        }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|c| c == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self(DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for ColumnSet {
    type Error = AuftragError;

    fn try_from(names: Vec<String>) -> AuftragResult<Self> {
        Self::new(names)
    }
}

impl From<ColumnSet> for Vec<String> {
    fn from(columns: ColumnSet) -> Self {
        columns.0
    }
}
