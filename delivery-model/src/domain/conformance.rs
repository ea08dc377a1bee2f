//! Invariant checks for finished content fragments.
//!
//! A fragment stores whatever upstream delivered. These checks report
//! contract violations without repairing them.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

use crate::domain::content_fragment::ContentFragment;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("lastPublishDate is set without initialPublishDate")]
    LastPublishWithoutInitial,

    #[error("initialPublishDate {initial} is later than lastPublishDate {last}")]
    PublishDatesOutOfOrder { initial: String, last: String },

    #[error("{field} is not an RFC 3339 timestamp: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },
}

/// Runs every detectable invariant and returns all violations found.
pub fn check(fragment: &ContentFragment) -> Vec<Violation> {
    let mut violations = Vec::new();

    // creation and update dates carry no ordering constraint
    for (field, value) in [
        ("creationDate", fragment.creation_date()),
        ("updatedDate", fragment.updated_date()),
    ] {
        parse_field(field, value, &mut violations);
    }

    let initial = parse_field(
        "initialPublishDate",
        fragment.initial_publish_date(),
        &mut violations,
    );
    let last = parse_field(
        "lastPublishDate",
        fragment.last_publish_date(),
        &mut violations,
    );

    match (fragment.initial_publish_date(), fragment.last_publish_date()) {
        (None, Some(_)) => violations.push(Violation::LastPublishWithoutInitial),
        (Some(initial_raw), Some(last_raw)) => {
            if let (Some(initial), Some(last)) = (initial, last) {
                if initial > last {
                    violations.push(Violation::PublishDatesOutOfOrder {
                        initial: initial_raw.to_string(),
                        last: last_raw.to_string(),
                    });
                }
            }
        }
        _ => {}
    }

    violations
}

pub fn is_conformant(fragment: &ContentFragment) -> bool {
    check(fragment).is_empty()
}

/// Parses a present timestamp, recording a violation when it is malformed.
fn parse_field(
    field: &'static str,
    value: Option<&str>,
    violations: &mut Vec<Violation>,
) -> Option<DateTime<FixedOffset>> {
    let raw = value?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Some(ts),
        Err(_) => {
            violations.push(Violation::InvalidTimestamp {
                field,
                value: raw.to_string(),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Content, ContentNamespace, CustomMetaConnection, ItemType};
    use crate::ContentFragmentDraft;

    fn fragment_with(
        initial: Option<&str>,
        last: Option<&str>,
        updated: Option<&str>,
    ) -> ContentFragment {
        let mut draft = ContentFragmentDraft::new();
        draft
            .set_id("tcm:1-2-64")
            .set_item_id(2)
            .set_publication_id(1)
            .set_owning_publication_id(1)
            .set_namespace_id(ContentNamespace::Sites)
            .set_item_type(ItemType::Page)
            .set_content(Content::empty())
            .set_custom_metas(CustomMetaConnection::empty())
            .set_creation_date(Some("2023-01-01T00:00:00Z".into()))
            .set_initial_publish_date(initial.map(str::to_string))
            .set_last_publish_date(last.map(str::to_string))
            .set_updated_date(updated.map(str::to_string));
        draft.build().unwrap()
    }

    #[test]
    fn test_unpublished_item_is_conformant() {
        assert!(is_conformant(&fragment_with(None, None, None)));
    }

    #[test]
    fn test_ordered_publish_dates_are_conformant() {
        let fragment = fragment_with(
            Some("2023-01-02T00:00:00Z"),
            Some("2023-01-03T00:00:00Z"),
            None,
        );
        assert!(check(&fragment).is_empty());
    }

    #[test]
    fn test_equal_publish_dates_are_conformant() {
        let fragment = fragment_with(
            Some("2023-01-02T00:00:00Z"),
            Some("2023-01-02T00:00:00Z"),
            None,
        );
        assert!(is_conformant(&fragment));
    }

    #[test]
    fn test_last_publish_without_initial() {
        let fragment = fragment_with(None, Some("2023-01-03T00:00:00Z"), None);
        assert_eq!(check(&fragment), vec![Violation::LastPublishWithoutInitial]);
    }

    #[test]
    fn test_initial_only_is_conformant() {
        let fragment = fragment_with(Some("2023-01-02T00:00:00Z"), None, None);
        assert!(is_conformant(&fragment));
    }

    #[test]
    fn test_out_of_order_publish_dates() {
        let fragment = fragment_with(
            Some("2023-01-05T00:00:00Z"),
            Some("2023-01-03T00:00:00Z"),
            None,
        );
        assert_eq!(
            check(&fragment),
            vec![Violation::PublishDatesOutOfOrder {
                initial: "2023-01-05T00:00:00Z".into(),
                last: "2023-01-03T00:00:00Z".into(),
            }]
        );
    }

    #[test]
    fn test_ordering_compares_instants_across_offsets() {
        // 01:00+02:00 is 23:00Z on the previous day
        let fragment = fragment_with(
            Some("2023-01-03T01:00:00+02:00"),
            Some("2023-01-03T00:00:00Z"),
            None,
        );
        assert!(is_conformant(&fragment));
    }

    #[test]
    fn test_updated_date_has_no_ordering_constraint() {
        let fragment = fragment_with(
            Some("2023-01-02T00:00:00Z"),
            Some("2023-01-03T00:00:00Z"),
            Some("2022-06-01T00:00:00Z"),
        );
        assert!(is_conformant(&fragment));
    }

    #[test]
    fn test_malformed_timestamp_skips_ordering() {
        let fragment = fragment_with(Some("yesterday"), Some("2023-01-03T00:00:00Z"), None);
        assert_eq!(
            check(&fragment),
            vec![Violation::InvalidTimestamp {
                field: "initialPublishDate",
                value: "yesterday".into(),
            }]
        );
    }

    #[test]
    fn test_empty_string_date_is_invalid_not_absent() {
        let fragment = fragment_with(None, None, Some(""));
        assert_eq!(
            check(&fragment),
            vec![Violation::InvalidTimestamp {
                field: "updatedDate",
                value: String::new(),
            }]
        );
    }
}
