//! The work-order form, used both for new work orders and for edits.

use serde::{Deserialize, Serialize};

use super::model::{WorkOrder, WorkOrderFields, WorkOrderPatch};
use super::store::RecordStore;
use crate::error::{AuftragError, AuftragResult};

/// A single editable field of a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Customer,
    Address,
    Tenant,
    Phone,
    Email,
    ProblemDescription,
    AttachmentRef,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Self::Customer,
        Self::Address,
        Self::Tenant,
        Self::Phone,
        Self::Email,
        Self::ProblemDescription,
        Self::AttachmentRef,
    ];

    /// Parse from an English or German field name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "customer" | "kunde" => Some(Self::Customer),
            "address" | "adresse" => Some(Self::Address),
            "tenant" | "mieter" => Some(Self::Tenant),
            "phone" | "telnr" | "tel" => Some(Self::Phone),
            "email" | "e_mail" => Some(Self::Email),
            "problem_description" | "problem" => Some(Self::ProblemDescription),
            "attachment_ref" | "attachment" | "pdf" => Some(Self::AttachmentRef),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Address => "address",
            Self::Tenant => "tenant",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::ProblemDescription => "problem_description",
            Self::AttachmentRef => "attachment_ref",
        }
    }

    /// Placeholder label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Customer => "Kunde",
            Self::Address => "Adresse",
            Self::Tenant => "Mieter",
            Self::Phone => "Tel. Nr.",
            Self::Email => "E-Mail",
            Self::ProblemDescription => "Problem",
            Self::AttachmentRef => "PDF",
        }
    }

    pub fn get<'a>(&self, fields: &'a WorkOrderFields) -> &'a str {
        match self {
            Self::Customer => &fields.customer,
            Self::Address => &fields.address,
            Self::Tenant => &fields.tenant,
            Self::Phone => &fields.phone,
            Self::Email => &fields.email,
            Self::ProblemDescription => &fields.problem_description,
            Self::AttachmentRef => &fields.attachment_ref,
        }
    }

    pub fn set(&self, fields: &mut WorkOrderFields, value: impl Into<String>) {
        let slot = match self {
            Self::Customer => &mut fields.customer,
            Self::Address => &mut fields.address,
            Self::Tenant => &mut fields.tenant,
            Self::Phone => &mut fields.phone,
            Self::Email => &mut fields.email,
            Self::ProblemDescription => &mut fields.problem_description,
            Self::AttachmentRef => &mut fields.attachment_ref,
        };
        *slot = value.into();
    }

    /// Parse a `field=value` assignment.
    pub fn parse_assignment(s: &str) -> AuftragResult<(Self, String)> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| AuftragError::config(format!("expected field=value, got '{}'", s)))?;
        let field = Self::from_str(name.trim())
            .ok_or_else(|| AuftragError::config(format!("unknown field '{}'", name.trim())))?;
        Ok((field, value.to_string()))
    }
}

/// What the form is currently doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Collecting fields for a new work order.
    Create(WorkOrderFields),
    /// Editing an existing work order, starting from its current fields.
    Edit { id: String, draft: WorkOrderFields },
}

impl Default for FormMode {
    fn default() -> Self {
        Self::Create(WorkOrderFields::default())
    }
}

impl FormMode {
    /// Start editing `order`, pre-filled with its fields.
    pub fn edit(order: &WorkOrder) -> Self {
        Self::Edit {
            id: order.id.clone(),
            draft: order.fields.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }

    pub fn draft(&self) -> &WorkOrderFields {
        match self {
            Self::Create(draft) | Self::Edit { draft, .. } => draft,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let draft = match self {
            Self::Create(draft) | Self::Edit { draft, .. } => draft,
        };
        field.set(draft, value);
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Create(_) => "Neuer Auftrag",
            Self::Edit { .. } => "Auftrag bearbeiten",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create(_) => "Hinzufügen",
            Self::Edit { .. } => "Aktualisieren",
        }
    }

    /// Write the draft to the store and reset the form to an empty new
    /// work order. Returns the id of the created or updated work order.
    ///
    /// The form is reset even when the edited work order no longer exists.
    pub fn submit(&mut self, store: &mut RecordStore) -> AuftragResult<String> {
        match std::mem::take(self) {
            Self::Create(draft) => Ok(store.create(draft).id.clone()),
            Self::Edit { id, draft } => {
                store.update(&id, WorkOrderPatch::from(draft))?;
                Ok(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::model::ColumnSet;

    #[test]
    fn test_field_names() {
        assert_eq!(Field::from_str("kunde"), Some(Field::Customer));
        assert_eq!(Field::from_str("telNr"), Some(Field::Phone));
        assert_eq!(Field::from_str("problem-description"), Some(Field::ProblemDescription));
        assert_eq!(Field::from_str("pdfUrl"), None);
        for field in Field::ALL {
            assert_eq!(Field::from_str(field.as_str()), Some(field));
        }
    }

    #[test]
    fn test_parse_assignment() {
        let (field, value) = Field::parse_assignment("mieter=Herr Müller").unwrap();
        assert_eq!(field, Field::Tenant);
        assert_eq!(value, "Herr Müller");

        let (_, value) = Field::parse_assignment("email=").unwrap();
        assert_eq!(value, "");

        assert!(Field::parse_assignment("customer").is_err());
        assert!(Field::parse_assignment("colour=red").is_err());
    }

    #[test]
    fn test_create_submit_resets_form() {
        let mut store = RecordStore::new(ColumnSet::default());
        let mut form = FormMode::default();
        form.set(Field::Customer, "Alice");
        form.set(Field::ProblemDescription, "Heizung defekt");
        assert_eq!(form.title(), "Neuer Auftrag");

        let id = form.submit(&mut store).unwrap();
        let order = store.get(&id).unwrap();
        assert_eq!(order.fields.customer, "Alice");
        assert_eq!(order.status, "Offen");
        assert_eq!(form, FormMode::default());
    }

    #[test]
    fn test_edit_prefills_and_updates_in_place() {
        let mut store = RecordStore::new(ColumnSet::default());
        let id = store
            .create(WorkOrderFields {
                customer: "Alice".into(),
                phone: "0123".into(),
                ..Default::default()
            })
            .id
            .clone();
        store.move_order(&id, "Termin", 0).unwrap();

        let mut form = FormMode::edit(store.get(&id).unwrap());
        assert!(form.is_edit());
        assert_eq!(form.draft().phone, "0123");
        assert_eq!(form.submit_label(), "Aktualisieren");

        form.set(Field::Customer, "Alice B.");
        assert_eq!(form.submit(&mut store).unwrap(), id);

        let order = store.get(&id).unwrap();
        assert_eq!(order.fields.customer, "Alice B.");
        assert_eq!(order.fields.phone, "0123");
        assert_eq!(order.status, "Termin");
        assert!(!form.is_edit());
    }

    #[test]
    fn test_edit_of_deleted_order_changes_nothing() {
        let mut store = RecordStore::new(ColumnSet::default());
        let id = store.create(WorkOrderFields::default()).id.clone();
        let mut form = FormMode::edit(store.get(&id).unwrap());
        store.delete(&id).unwrap();

        form.set(Field::Customer, "Ghost");
        assert!(form.submit(&mut store).unwrap_err().is_not_found());
        assert!(store.is_empty());
        assert_eq!(form, FormMode::default());
    }
}
