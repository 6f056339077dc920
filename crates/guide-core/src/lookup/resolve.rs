// crates/guide-core/src/lookup/resolve.rs
use crate::guide::Guide;
use crate::model::District;
use crate::text::{normalize_name, slug_token};
use crate::traits::NameMatch;
use serde::Serialize;
use std::fmt;

/// Which rule produced a district match, strongest first.
///
/// `Substring` and `Slug` are fallbacks: they can pick the wrong district
/// for overlapping names, so every match they produce is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Normalized names are equal.
    Exact,
    /// Stored name is the query plus `-district` (`"Belém District"` for `"Belém"`).
    Suffixed,
    /// Stored name contains the query.
    Substring,
    /// Stored slug equals or contains the lowercased, hyphenated query.
    Slug,
}

impl MatchTier {
    pub const ALL: [MatchTier; 4] = [
        MatchTier::Exact,
        MatchTier::Suffixed,
        MatchTier::Substring,
        MatchTier::Slug,
    ];

    pub fn is_fallback(self) -> bool {
        matches!(self, MatchTier::Substring | MatchTier::Slug)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Suffixed => "suffixed",
            MatchTier::Substring => "substring",
            MatchTier::Slug => "slug",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved district together with the rule that found it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistrictMatch<'a> {
    pub district: &'a District,
    pub tier: MatchTier,
}

/// Query tokens computed once per lookup.
struct Query {
    normalized: String,
    suffixed: String,
    slug: String,
}

impl Query {
    fn new(raw: &str) -> Self {
        let normalized = normalize_name(raw);
        let suffixed = format!("{normalized}-district");
        Query {
            normalized,
            suffixed,
            slug: slug_token(raw),
        }
    }

    /// Whitespace-only input normalizes to hyphens, which would still hit
    /// every hyphenated name in the substring rule.
    fn is_blank(&self) -> bool {
        self.normalized.chars().all(|c| c == '-')
    }

    fn accepts(&self, tier: MatchTier, candidate_name: &str, candidate: &District) -> bool {
        match tier {
            MatchTier::Exact => candidate_name == self.normalized,
            MatchTier::Suffixed => candidate_name == self.suffixed,
            MatchTier::Substring => candidate_name.contains(&self.normalized),
            MatchTier::Slug => {
                !self.slug.is_empty()
                    && (candidate.slug == self.slug || candidate.slug.contains(&self.slug))
            }
        }
    }
}

/// Find the district a free-text place name refers to.
///
/// Rules are tried in [`MatchTier`] order. Each rule is checked against
/// every candidate before the next rule is tried, and inside a rule the
/// first candidate in list order wins. There is no scoring: when several
/// candidates satisfy the winning rule the first one is returned and the
/// ambiguity is logged.
///
/// A blank name (nothing left but hyphens after normalizing) resolves to
/// `None`; otherwise the
/// substring rule would accept every district.
///
/// # Examples
///
/// ```rust
/// use guide_core::lookup::{resolve_district, MatchTier};
/// use guide_core::Guide;
///
/// let guide = Guide::embedded().unwrap();
/// let districts = guide.districts_for("north-region");
///
/// let hit = resolve_district("BRAGANÇA", districts).unwrap();
/// assert_eq!(hit.district.slug, "braganca");
/// assert_eq!(hit.tier, MatchTier::Exact);
///
/// assert!(resolve_district("Nonexistent Place", districts).is_none());
/// ```
pub fn resolve_district<'a>(raw_name: &str, districts: &'a [District]) -> Option<DistrictMatch<'a>> {
    let query = Query::new(raw_name);
    if query.is_blank() {
        tracing::debug!(raw = raw_name, "blank place name, nothing to resolve");
        return None;
    }

    let names: Vec<String> = districts.iter().map(NameMatch::normalized_name).collect();

    for tier in MatchTier::ALL {
        let mut hits = districts
            .iter()
            .zip(&names)
            .filter(|(d, name)| query.accepts(tier, name, d))
            .map(|(d, _)| d);

        let Some(first) = hits.next() else {
            continue;
        };

        let others: Vec<&str> = hits.map(|d| d.slug.as_str()).collect();
        if !others.is_empty() {
            tracing::warn!(
                raw = raw_name,
                %tier,
                chosen = %first.slug,
                also_matched = ?others,
                "ambiguous district name, first match wins"
            );
        }

        if tier.is_fallback() {
            tracing::warn!(
                raw = raw_name,
                %tier,
                district = %first.slug,
                "district resolved by fallback rule"
            );
        } else {
            tracing::debug!(raw = raw_name, %tier, district = %first.slug, "district resolved");
        }

        return Some(DistrictMatch {
            district: first,
            tier,
        });
    }

    tracing::debug!(raw = raw_name, candidates = districts.len(), "no district matched");
    None
}

/// Like [`resolve_district`] but only returns the record.
pub fn resolve<'a>(raw_name: &str, districts: &'a [District]) -> Option<&'a District> {
    resolve_district(raw_name, districts).map(|m| m.district)
}

/// Resolve against the districts a guide stores for `region_slug`.
///
/// An unknown region has no districts and therefore resolves nothing.
pub fn resolve_in_region<'a>(
    guide: &'a Guide,
    region_slug: &str,
    raw_name: &str,
) -> Option<DistrictMatch<'a>> {
    resolve_district(raw_name, guide.districts_for(region_slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn district(name: &str, slug: &str) -> District {
        District {
            name: name.to_string(),
            slug: slug.to_string(),
            description: String::new(),
            main_city: None,
            coordinates: [0.0, 0.0],
            image: None,
            highlights: Vec::new(),
        }
    }

    fn lisbon_list() -> Vec<District> {
        vec![
            district("Lisbon", "lisbon-center"),
            district("Belém District", "belem"),
        ]
    }

    #[test]
    fn exact_match_ignores_case_and_accents() {
        let list = vec![district("Bragança", "braganca"), district("Braga", "braga")];
        let hit = resolve_district("braganca", &list).unwrap();
        assert_eq!(hit.district.slug, "braganca");
        assert_eq!(hit.tier, MatchTier::Exact);
    }

    #[test]
    fn exact_beats_earlier_substring_candidate() {
        // "Bragança" contains "braga", but the exact rule runs across the
        // whole list first.
        let list = vec![district("Bragança", "braganca"), district("Braga", "braga")];
        let hit = resolve_district("Braga", &list).unwrap();
        assert_eq!(hit.district.slug, "braga");
        assert_eq!(hit.tier, MatchTier::Exact);
    }

    #[test]
    fn suffixed_match_for_district_names() {
        let list = lisbon_list();
        let hit = resolve_district("Belém", &list).unwrap();
        assert_eq!(hit.district.slug, "belem");
        assert_eq!(hit.tier, MatchTier::Suffixed);
    }

    #[test]
    fn substring_match_is_a_fallback() {
        let list = vec![district("Viana do Castelo", "viana-do-castelo")];
        let hit = resolve_district("Castelo", &list).unwrap();
        assert_eq!(hit.tier, MatchTier::Substring);
        assert!(hit.tier.is_fallback());
    }

    #[test]
    fn slug_match_when_names_disagree() {
        let list = vec![district("Portalegere", "portalegre")];
        let hit = resolve_district("Portalegre", &list).unwrap();
        assert_eq!(hit.tier, MatchTier::Slug);
    }

    #[test]
    fn slug_containment_counts() {
        let list = lisbon_list();
        let hit = resolve_district("center", &list).unwrap();
        assert_eq!(hit.district.slug, "lisbon-center");
        assert_eq!(hit.tier, MatchTier::Slug);
    }

    #[test]
    fn first_candidate_wins_ties() {
        let list = vec![
            district("North Coast", "north-coast"),
            district("South Coast", "south-coast"),
        ];
        let hit = resolve_district("coast", &list).unwrap();
        assert_eq!(hit.district.slug, "north-coast");
        assert_eq!(hit.tier, MatchTier::Substring);
    }

    #[test]
    fn unknown_and_empty_names_resolve_to_none() {
        let list = lisbon_list();
        assert!(resolve_district("Nonexistent Place", &list).is_none());
        assert!(resolve_district("", &list).is_none());
        assert!(resolve_district("Lisbon", &[]).is_none());
    }

    #[test]
    fn whitespace_only_names_resolve_to_none() {
        let guide = Guide::embedded().unwrap();
        let north = guide.districts_for("north-region");
        for blank in ["   ", "\t", " \n "] {
            assert!(resolve_district(blank, north).is_none(), "{blank:?}");
        }
    }

    #[test]
    fn every_district_resolves_to_itself() {
        let guide = Guide::embedded().unwrap();
        for (d, region) in guide.iter_districts() {
            let found = resolve(&d.name, guide.districts_for(region));
            assert_eq!(found, Some(d), "{} in {region}", d.name);
        }
    }

    #[test]
    fn braga_feature_resolves_in_north_region() {
        let guide = Guide::embedded().unwrap();
        let hit = resolve_in_region(&guide, "north-region", "Braga").unwrap();
        assert_eq!(hit.district.name, "Braga");
        assert_eq!(hit.tier, MatchTier::Exact);
    }

    #[test]
    fn unknown_region_resolves_nothing() {
        let guide = Guide::embedded().unwrap();
        assert!(resolve_in_region(&guide, "atlantis", "Braga").is_none());
    }
}
