//! The content fragment read model.
//!
//! Construction happens on a [`ContentFragmentDraft`], where every attribute
//! can be read and written freely. [`ContentFragmentDraft::build`] freezes the
//! draft into a [`ContentFragment`], which only exposes reads and can be
//! shared across threads.

use serde::Serialize;

use crate::common::ModelError;
use crate::domain::content::Content;
use crate::domain::content_namespace::ContentNamespace;
use crate::domain::custom_meta::CustomMetaConnection;
use crate::domain::item_type::ItemType;

/// One published content item as delivered by the content API.
///
/// Timestamps are kept as the strings the API delivered. Publish dates are
/// absent for items that were never published, which is distinct from an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFragment {
    id: String,
    item_id: u32,
    publication_id: u32,
    owning_publication_id: u32,
    namespace_id: ContentNamespace,
    item_type: ItemType,
    title: Option<String>,
    content: Content,
    custom_metas: CustomMetaConnection,
    creation_date: Option<String>,
    initial_publish_date: Option<String>,
    last_publish_date: Option<String>,
    updated_date: Option<String>,
}

const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ContentFragment>();
};

impl ContentFragment {
    pub fn builder() -> ContentFragmentDraft {
        ContentFragmentDraft::new()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Numeric id of the item inside its publication.
    pub fn item_id(&self) -> u32 {
        self.item_id
    }

    /// Publication the item is delivered under.
    pub fn publication_id(&self) -> u32 {
        self.publication_id
    }

    /// Publication that owns the item. Equal to `publication_id` unless the
    /// item is shared from another publication.
    pub fn owning_publication_id(&self) -> u32 {
        self.owning_publication_id
    }

    pub fn namespace_id(&self) -> ContentNamespace {
        self.namespace_id
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn custom_metas(&self) -> &CustomMetaConnection {
        &self.custom_metas
    }

    pub fn creation_date(&self) -> Option<&str> {
        self.creation_date.as_deref()
    }

    pub fn initial_publish_date(&self) -> Option<&str> {
        self.initial_publish_date.as_deref()
    }

    pub fn last_publish_date(&self) -> Option<&str> {
        self.last_publish_date.as_deref()
    }

    pub fn updated_date(&self) -> Option<&str> {
        self.updated_date.as_deref()
    }

    /// Returns a draft holding the same values, for building a changed copy.
    pub fn into_draft(self) -> ContentFragmentDraft {
        ContentFragmentDraft {
            id: Some(self.id),
            item_id: Some(self.item_id),
            publication_id: Some(self.publication_id),
            owning_publication_id: Some(self.owning_publication_id),
            namespace_id: Some(self.namespace_id),
            item_type: Some(self.item_type),
            title: self.title,
            content: Some(self.content),
            custom_metas: Some(self.custom_metas),
            creation_date: self.creation_date,
            initial_publish_date: self.initial_publish_date,
            last_publish_date: self.last_publish_date,
            updated_date: self.updated_date,
        }
    }
}

/// Mutable build phase of a [`ContentFragment`].
///
/// Setters replace the held value unconditionally and never validate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentFragmentDraft {
    id: Option<String>,
    item_id: Option<u32>,
    publication_id: Option<u32>,
    owning_publication_id: Option<u32>,
    namespace_id: Option<ContentNamespace>,
    item_type: Option<ItemType>,
    title: Option<String>,
    content: Option<Content>,
    custom_metas: Option<CustomMetaConnection>,
    creation_date: Option<String>,
    initial_publish_date: Option<String>,
    last_publish_date: Option<String>,
    updated_date: Option<String>,
}

impl ContentFragmentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    pub fn item_id(&self) -> Option<u32> {
        self.item_id
    }

    pub fn set_item_id(&mut self, item_id: u32) -> &mut Self {
        self.item_id = Some(item_id);
        self
    }

    pub fn publication_id(&self) -> Option<u32> {
        self.publication_id
    }

    pub fn set_publication_id(&mut self, publication_id: u32) -> &mut Self {
        self.publication_id = Some(publication_id);
        self
    }

    pub fn owning_publication_id(&self) -> Option<u32> {
        self.owning_publication_id
    }

    pub fn set_owning_publication_id(&mut self, owning_publication_id: u32) -> &mut Self {
        self.owning_publication_id = Some(owning_publication_id);
        self
    }

    pub fn namespace_id(&self) -> Option<ContentNamespace> {
        self.namespace_id
    }

    pub fn set_namespace_id(&mut self, namespace_id: ContentNamespace) -> &mut Self {
        self.namespace_id = Some(namespace_id);
        self
    }

    pub fn item_type(&self) -> Option<ItemType> {
        self.item_type
    }

    pub fn set_item_type(&mut self, item_type: ItemType) -> &mut Self {
        self.item_type = Some(item_type);
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) -> &mut Self {
        self.title = title;
        self
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn set_content(&mut self, content: Content) -> &mut Self {
        self.content = Some(content);
        self
    }

    pub fn custom_metas(&self) -> Option<&CustomMetaConnection> {
        self.custom_metas.as_ref()
    }

    pub fn set_custom_metas(&mut self, custom_metas: CustomMetaConnection) -> &mut Self {
        self.custom_metas = Some(custom_metas);
        self
    }

    pub fn creation_date(&self) -> Option<&str> {
        self.creation_date.as_deref()
    }

    pub fn set_creation_date(&mut self, creation_date: Option<String>) -> &mut Self {
        self.creation_date = creation_date;
        self
    }

    pub fn initial_publish_date(&self) -> Option<&str> {
        self.initial_publish_date.as_deref()
    }

    pub fn set_initial_publish_date(&mut self, initial_publish_date: Option<String>) -> &mut Self {
        self.initial_publish_date = initial_publish_date;
        self
    }

    pub fn last_publish_date(&self) -> Option<&str> {
        self.last_publish_date.as_deref()
    }

    pub fn set_last_publish_date(&mut self, last_publish_date: Option<String>) -> &mut Self {
        self.last_publish_date = last_publish_date;
        self
    }

    pub fn updated_date(&self) -> Option<&str> {
        self.updated_date.as_deref()
    }

    pub fn set_updated_date(&mut self, updated_date: Option<String>) -> &mut Self {
        self.updated_date = updated_date;
        self
    }

    /// Freezes the draft.
    ///
    /// Fails when a required attribute is unset, the content is null, or the
    /// id is empty. Publish date consistency is not checked here; see
    /// [`crate::conformance`].
    pub fn build(self) -> Result<ContentFragment, ModelError> {
        let id = self.id.ok_or(ModelError::MissingField("id"))?;
        if id.is_empty() {
            return Err(ModelError::EmptyId);
        }

        Ok(ContentFragment {
            id,
            item_id: self.item_id.ok_or(ModelError::MissingField("itemId"))?,
            publication_id: self
                .publication_id
                .ok_or(ModelError::MissingField("publicationId"))?,
            owning_publication_id: self
                .owning_publication_id
                .ok_or(ModelError::MissingField("owningPublicationId"))?,
            namespace_id: self
                .namespace_id
                .ok_or(ModelError::MissingField("namespaceId"))?,
            item_type: self.item_type.ok_or(ModelError::MissingField("itemType"))?,
            title: self.title,
            content: self
                .content
                .filter(|c| !c.is_null())
                .ok_or(ModelError::MissingField("content"))?,
            custom_metas: self
                .custom_metas
                .ok_or(ModelError::MissingField("customMetas"))?,
            creation_date: self.creation_date,
            initial_publish_date: self.initial_publish_date,
            last_publish_date: self.last_publish_date,
            updated_date: self.updated_date,
        })
    }
}
