use std::collections::HashMap;

use tracing::debug;

use super::error::ExtractionErrorKind;
use super::resolver::ResolvedDescriptor;
use crate::core::data::{DescriptorLocation, MessageDescriptor, storage_key};

/// Per-unit descriptors keyed by effective storage key, in first-seen order.
#[derive(Debug, Default)]
pub struct ExtractionStore {
    entries: Vec<MessageDescriptor>,
    index: HashMap<String, usize>,
    enforce_descriptions: bool,
}

impl ExtractionStore {
    pub fn new(enforce_descriptions: bool) -> Self {
        Self {
            enforce_descriptions,
            ..Default::default()
        }
    }

    /// Validate and store a descriptor.
    ///
    /// A repeated key must agree on `description` and `defaultMessage`; the
    /// repeat then replaces the stored entry in place.
    pub fn insert(
        &mut self,
        descriptor: ResolvedDescriptor,
        source_location: Option<DescriptorLocation>,
    ) -> Result<&MessageDescriptor, ExtractionErrorKind> {
        let ResolvedDescriptor {
            id,
            description,
            default_message,
            comment,
        } = descriptor;

        let id = id.ok_or(ExtractionErrorKind::MissingRequiredField { field: "id" })?;
        let default_message = default_message.ok_or(ExtractionErrorKind::MissingRequiredField {
            field: "defaultMessage",
        })?;
        if self.enforce_descriptions && description.is_none() {
            return Err(ExtractionErrorKind::MissingDescription);
        }

        let key = storage_key(&id, comment.as_deref());
        let entry = MessageDescriptor {
            id: key.clone(),
            description,
            default_message,
            comment,
            source_location,
        };

        let index = match self.index.get(&key) {
            Some(&index) => {
                let existing = &self.entries[index];
                if existing.description != entry.description
                    || existing.default_message != entry.default_message
                {
                    return Err(ExtractionErrorKind::DuplicateIdConflict { id: key });
                }
                self.entries[index] = entry;
                index
            }
            None => {
                debug!(id = %key, "stored message descriptor");
                self.entries.push(entry);
                self.index.insert(key, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        Ok(&self.entries[index])
    }

    pub fn get(&self, key: &str) -> Option<&MessageDescriptor> {
        self.index.get(key).map(|&index| &self.entries[index])
    }

    pub fn messages(&self) -> &[MessageDescriptor] {
        &self.entries
    }

    pub fn into_messages(self) -> Vec<MessageDescriptor> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
