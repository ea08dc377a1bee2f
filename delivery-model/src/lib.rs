//! Read model for content items delivered by a content-delivery API.
//!
//! A transport layer decodes API responses into [`ContentFragmentDraft`]s,
//! freezes them with [`ContentFragmentDraft::build`] and hands the resulting
//! [`ContentFragment`] to application code, which only reads it.

pub mod common;
pub mod domain;
pub mod infrastructure;

pub use common::ModelError;
pub use domain::{
    conformance, Content, ContentFragment, ContentFragmentDraft, ContentNamespace, CustomMeta,
    CustomMetaConnection, CustomMetaEdge, ItemType, PageInfo, Violation,
};
pub use infrastructure::{ConfigError, DecoderConfig, FragmentDecoder, FragmentRecord};
