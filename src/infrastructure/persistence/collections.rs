//! Mapping from record kind to storage collection.

/// The kinds of records persisted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    AffiliateLink,
    Click,
}

impl RecordKind {
    /// Name of the collection holding records of this kind.
    pub const fn collection_name(self) -> &'static str {
        match self {
            RecordKind::AffiliateLink => "affiliatelink",
            RecordKind::Click => "click",
        }
    }
}
