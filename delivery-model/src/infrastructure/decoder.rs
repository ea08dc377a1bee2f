//! Builds content fragments from decoded API records.

use serde::Deserialize;
use serde_json::Value;

use crate::common::ModelError;
use crate::domain::conformance;
use crate::domain::{
    Content, ContentFragment, ContentFragmentDraft, ContentNamespace, CustomMetaConnection,
    ItemType,
};
use crate::infrastructure::config::DecoderConfig;

/// One content item as it appears in an API response.
///
/// Every field is optional here; required fields are enforced when the
/// draft is built.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentRecord {
    pub id: Option<String>,
    pub item_id: Option<u32>,
    pub publication_id: Option<u32>,
    pub owning_publication_id: Option<u32>,
    pub namespace_id: Option<String>,
    pub item_type: Option<String>,
    pub title: Option<String>,
    pub content: Option<Value>,
    pub custom_metas: Option<CustomMetaConnection>,
    pub creation_date: Option<String>,
    pub initial_publish_date: Option<String>,
    pub last_publish_date: Option<String>,
    pub updated_date: Option<String>,
}

impl FragmentRecord {
    /// Copies every present field onto a fresh draft.
    pub fn into_draft(self) -> Result<ContentFragmentDraft, ModelError> {
        let mut draft = ContentFragmentDraft::new();

        if let Some(id) = self.id {
            draft.set_id(id);
        }
        if let Some(item_id) = self.item_id {
            draft.set_item_id(item_id);
        }
        if let Some(publication_id) = self.publication_id {
            draft.set_publication_id(publication_id);
        }
        if let Some(owning_publication_id) = self.owning_publication_id {
            draft.set_owning_publication_id(owning_publication_id);
        }
        if let Some(ns) = self.namespace_id {
            draft.set_namespace_id(ns.parse::<ContentNamespace>()?);
        }
        if let Some(item_type) = self.item_type {
            draft.set_item_type(item_type.parse::<ItemType>()?);
        }
        if let Some(content) = self.content {
            draft.set_content(Content::new(content));
        }
        if let Some(custom_metas) = self.custom_metas {
            draft.set_custom_metas(custom_metas);
        }

        draft
            .set_title(self.title)
            .set_creation_date(self.creation_date)
            .set_initial_publish_date(self.initial_publish_date)
            .set_last_publish_date(self.last_publish_date)
            .set_updated_date(self.updated_date);

        Ok(draft)
    }
}

/// Turns API records into frozen [`ContentFragment`]s and applies the
/// configured validation policy.
#[derive(Debug, Clone, Default)]
pub struct FragmentDecoder {
    config: DecoderConfig,
}

impl FragmentDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn decode_str(&self, json: &str) -> Result<ContentFragment, ModelError> {
        let record: FragmentRecord = serde_json::from_str(json)?;
        self.decode_record(record)
    }

    pub fn decode_value(&self, value: Value) -> Result<ContentFragment, ModelError> {
        let record: FragmentRecord = serde_json::from_value(value)?;
        self.decode_record(record)
    }

    /// Decodes a JSON array of records. Stops at the first failure.
    pub fn decode_many(&self, json: &str) -> Result<Vec<ContentFragment>, ModelError> {
        let records: Vec<FragmentRecord> = serde_json::from_str(json)?;
        tracing::debug!("Decoding {} content fragment records", records.len());
        records
            .into_iter()
            .map(|record| self.decode_record(record))
            .collect()
    }

    pub fn decode_record(&self, record: FragmentRecord) -> Result<ContentFragment, ModelError> {
        let fragment = record.into_draft()?.build()?;

        let violations = conformance::check(&fragment);
        if !violations.is_empty() {
            if self.config.strict {
                tracing::warn!(
                    "Rejecting content fragment {} with {} violation(s)",
                    fragment.id(),
                    violations.len()
                );
                return Err(ModelError::NonConformant(violations));
            }
            if self.config.log_violations {
                for violation in &violations {
                    tracing::warn!("Content fragment {}: {}", fragment.id(), violation);
                }
            }
        }

        tracing::debug!(
            "Decoded content fragment {} ({} in publication {})",
            fragment.id(),
            fragment.item_type(),
            fragment.publication_id()
        );
        Ok(fragment)
    }
}
