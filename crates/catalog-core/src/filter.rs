use crate::error::CatalogError;
use crate::publication::{Publication, PublicationKind};
use std::str::FromStr;

/// The type tab selected above the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(PublicationKind),
}

impl KindFilter {
    #[inline]
    pub fn admits(self, kind: PublicationKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(k) => k == kind,
        }
    }
}

impl FromStr for KindFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(KindFilter::All),
            other => other.parse().map(KindFilter::Only),
        }
    }
}

impl From<PublicationKind> for KindFilter {
    fn from(kind: PublicationKind) -> Self {
        KindFilter::Only(kind)
    }
}

/// Records admitted by `kind` whose title, journal or author line contains
/// `term`, ignoring case. An empty term matches everything. Input order is
/// kept.
pub fn filter<'a>(
    records: &'a [Publication],
    kind: KindFilter,
    term: &str,
) -> Vec<&'a Publication> {
    let needle = term.to_lowercase();
    let matched: Vec<&Publication> = records
        .iter()
        .filter(|p| kind.admits(p.kind))
        .filter(|p| matches_term(p, &needle))
        .collect();
    log::debug!(
        "publication filter {:?} {:?}: {} of {}",
        kind,
        term,
        matched.len(),
        records.len()
    );
    matched
}

fn matches_term(p: &Publication, needle: &str) -> bool {
    [&p.title, &p.journal, &p.authors]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
