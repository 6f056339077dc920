// crates/guide-core/src/lookup/region.rs
use crate::model::Region;
use serde::Serialize;

/// Placeholder for any region field that cannot be shown.
pub const UNAVAILABLE: &str = "Information unavailable";

/// Find a region by its display name.
///
/// Case-insensitive exact comparison against `Region::name` only. Unlike
/// the district resolver there is no diacritic folding and no partial
/// match, so `"PORTO"` finds `"Porto"` but `"Pôrto"` does not.
///
/// ```rust
/// use guide_core::lookup::find_region;
/// use guide_core::Guide;
///
/// let guide = Guide::embedded().unwrap();
/// let regions = guide.country("portugal").unwrap().regions();
///
/// assert_eq!(find_region("algarve region", regions).unwrap().slug, "algarve-region");
/// assert!(find_region("Setubal Peninsula", regions).is_none());
/// ```
pub fn find_region<'a>(display_name: &str, regions: &'a [Region]) -> Option<&'a Region> {
    let wanted = display_name.to_lowercase();
    let found = regions.iter().find(|r| r.name.to_lowercase() == wanted);
    if found.is_none() {
        tracing::debug!(name = display_name, "no region with this display name");
    }
    found
}

/// What a map popup shows for a region, with every field filled.
///
/// Built from an optional lookup result so callers never render a missing
/// capital, area or population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCard {
    /// The name as shown on the map.
    pub title: String,
    pub slug: Option<String>,
    pub capital: String,
    pub area: String,
    pub population: String,
    pub image: Option<String>,
    pub summary: Option<String>,
}

impl RegionCard {
    pub fn from_lookup(region: Option<&Region>, display_name: &str) -> Self {
        match region {
            Some(r) => RegionCard {
                title: display_name.to_string(),
                slug: Some(r.slug.clone()),
                capital: or_unavailable(&r.capital),
                area: or_unavailable(&r.area),
                population: or_unavailable(&r.population),
                image: r.image.clone().filter(|s| !s.trim().is_empty()),
                summary: Some(r.summary.clone()).filter(|s| !s.trim().is_empty()),
            },
            None => RegionCard {
                title: display_name.to_string(),
                slug: None,
                capital: UNAVAILABLE.to_string(),
                area: UNAVAILABLE.to_string(),
                population: UNAVAILABLE.to_string(),
                image: None,
                summary: None,
            },
        }
    }

    /// Look the name up and build the card in one step.
    pub fn lookup(display_name: &str, regions: &[Region]) -> Self {
        Self::from_lookup(find_region(display_name, regions), display_name)
    }

    pub fn is_known(&self) -> bool {
        self.slug.is_some()
    }
}

fn or_unavailable(value: &str) -> String {
    if value.trim().is_empty() {
        UNAVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(name: &str, slug: &str) -> Region {
        Region {
            name: name.to_string(),
            slug: slug.to_string(),
            capital: "Porto".to_string(),
            area: "21,278 km²".to_string(),
            population: String::new(),
            summary: "Heartland".to_string(),
            description: String::new(),
            image: None,
            climate_image: None,
            hero_image: None,
        }
    }

    #[test]
    fn matches_case_insensitively() {
        let regions = vec![region("Porto", "porto")];
        assert_eq!(find_region("PORTO", &regions).unwrap().slug, "porto");
        assert_eq!(find_region("porto", &regions).unwrap().slug, "porto");
    }

    #[test]
    fn does_not_fold_diacritics_or_match_partially() {
        let regions = vec![region("Porto", "porto")];
        assert!(find_region("Pôrto", &regions).is_none());
        assert!(find_region("Port", &regions).is_none());
        assert!(find_region("", &regions).is_none());
    }

    #[test]
    fn non_ascii_names_still_compare_case_insensitively() {
        let regions = vec![region("Setúbal Peninsula", "setubal-peninsula")];
        assert!(find_region("SETÚBAL PENINSULA", &regions).is_some());
    }

    #[test]
    fn card_fills_defaults_for_missing_region() {
        let card = RegionCard::lookup("Atlantis", &[]);
        assert!(!card.is_known());
        assert_eq!(card.capital, UNAVAILABLE);
        assert_eq!(card.area, UNAVAILABLE);
        assert_eq!(card.population, UNAVAILABLE);
        assert!(card.image.is_none());
    }

    #[test]
    fn card_fills_defaults_for_blank_fields() {
        let regions = vec![region("Porto", "porto")];
        let card = RegionCard::lookup("Porto", &regions);
        assert!(card.is_known());
        assert_eq!(card.capital, "Porto");
        assert_eq!(card.population, UNAVAILABLE);
    }
}
