pub mod conformance;
pub mod content;
pub mod content_fragment;
pub mod content_namespace;
pub mod custom_meta;
pub mod item_type;

pub use conformance::Violation;
pub use content::Content;
pub use content_fragment::{ContentFragment, ContentFragmentDraft};
pub use content_namespace::ContentNamespace;
pub use custom_meta::{CustomMeta, CustomMetaConnection, CustomMetaEdge, PageInfo};
pub use item_type::ItemType;
