use crate::error::CatalogError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PublicationKind {
    Journal,
    Conference,
    Book,
    Patent,
}

impl PublicationKind {
    pub const ALL: [PublicationKind; 4] = [
        PublicationKind::Journal,
        PublicationKind::Conference,
        PublicationKind::Book,
        PublicationKind::Patent,
    ];

    /// Lower-case key used in markup and filter controls.
    pub fn key(self) -> &'static str {
        match self {
            PublicationKind::Journal => "journal",
            PublicationKind::Conference => "conference",
            PublicationKind::Book => "book",
            PublicationKind::Patent => "patent",
        }
    }

    /// Badge text shown next to a record.
    pub fn label(self) -> &'static str {
        match self {
            PublicationKind::Journal => "Journal Paper",
            PublicationKind::Conference => "Conference Paper",
            PublicationKind::Book => "Book Chapter",
            PublicationKind::Patent => "Patent",
        }
    }
}

impl FromStr for PublicationKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PublicationKind::ALL
            .into_iter()
            .find(|k| k.key() == s.trim())
            .ok_or_else(|| CatalogError::UnknownKind(s.trim().to_string()))
    }
}

/// One entry of the publication list.
#[derive(Clone, Debug, PartialEq)]
pub struct Publication {
    pub id: u32,
    pub title: String,
    /// Journal, proceedings, book or patent office the work appeared in.
    pub journal: String,
    pub year: u16,
    pub kind: PublicationKind,
    pub url: Option<String>,
    /// Author line as printed, e.g. `"Kothai G, et al."`.
    pub authors: String,
    pub highlight: bool,
}
