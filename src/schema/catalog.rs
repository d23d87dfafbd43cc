//! # Field Catalog
//!
//! The catalog maps each field's lookup name to its position in the record.
//! It is rebuilt for every query call from the record's descriptor and never
//! outlives that call.

use super::RecordDescriptor;
use crate::error::{MappingError, Result};
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

/// What to do when two fields resolve to the same lookup name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateFieldPolicy {
    /// The later field replaces the earlier catalog entry.
    #[default]
    LastWins,
    /// Building the catalog fails with `MappingError::DuplicateField`.
    Reject,
}

#[derive(Debug, Clone)]
pub struct FieldCatalog {
    type_name: &'static str,
    by_name: HashMap<String, usize>,
}

impl FieldCatalog {
    /// Builds the lookup table for `descriptor`. Fails only under
    /// `DuplicateFieldPolicy::Reject`, when two fields share a lookup name.
    pub fn build(descriptor: &RecordDescriptor, policy: DuplicateFieldPolicy) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(descriptor.field_count());

        for (position, field) in descriptor.fields().iter().enumerate() {
            let name = field.lookup_name().into_owned();
            match by_name.entry(name) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(mut slot) => {
                    let first = *slot.get();
                    if policy == DuplicateFieldPolicy::Reject {
                        return Err(MappingError::DuplicateField {
                            name: slot.key().clone(),
                            first,
                            second: position,
                        });
                    }
                    tracing::warn!(
                        record = descriptor.type_name(),
                        name = slot.key().as_str(),
                        first,
                        second = position,
                        "duplicate field name, later field wins"
                    );
                    slot.insert(position);
                }
            }
        }

        Ok(Self {
            type_name: descriptor.type_name(),
            by_name,
        })
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Field position for an exact, case-sensitive lookup name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Number of distinct lookup names, which is fewer than the field count
    /// when duplicates collapsed.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDef;

    const PERSON: RecordDescriptor = RecordDescriptor::new(
        "Person",
        &[
            FieldDef::new("Id"),
            FieldDef::new("Name"),
            FieldDef::renamed("Email", "mail"),
        ],
    );

    #[test]
    fn catalog_maps_lookup_names_to_positions() {
        let catalog = FieldCatalog::build(&PERSON, DuplicateFieldPolicy::LastWins).unwrap();

        assert_eq!(catalog.type_name(), "Person");
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.position("id"), Some(0));
        assert_eq!(catalog.position("name"), Some(1));
        assert_eq!(catalog.position("mail"), Some(2));
    }

    #[test]
    fn renamed_field_is_not_reachable_by_declared_name() {
        let catalog = FieldCatalog::build(&PERSON, DuplicateFieldPolicy::LastWins).unwrap();
        assert_eq!(catalog.position("email"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = FieldCatalog::build(&PERSON, DuplicateFieldPolicy::LastWins).unwrap();
        assert_eq!(catalog.position("Id"), None);
        assert_eq!(catalog.position("MAIL"), None);
    }

    const CLASHING: RecordDescriptor = RecordDescriptor::new(
        "Clashing",
        &[
            FieldDef::new("code"),
            FieldDef::new("label"),
            FieldDef::renamed("alt_code", "code"),
        ],
    );

    #[test]
    fn duplicate_name_later_field_wins_by_default() {
        let catalog = FieldCatalog::build(&CLASHING, DuplicateFieldPolicy::default()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.position("code"), Some(2));
    }

    #[test]
    fn duplicate_name_rejected_under_strict_policy() {
        let err = FieldCatalog::build(&CLASHING, DuplicateFieldPolicy::Reject).unwrap_err();
        match err {
            MappingError::DuplicateField {
                name,
                first,
                second,
            } => {
                assert_eq!(name, "code");
                assert_eq!(first, 0);
                assert_eq!(second, 2);
            }
            other => panic!("expected DuplicateField, got {other:?}"),
        }
    }

    #[test]
    fn empty_descriptor_builds_empty_catalog() {
        const EMPTY: RecordDescriptor = RecordDescriptor::new("Empty", &[]);
        let catalog = FieldCatalog::build(&EMPTY, DuplicateFieldPolicy::Reject).unwrap();
        assert!(catalog.is_empty());
    }
}
