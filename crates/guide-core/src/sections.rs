// crates/guide-core/src/sections.rs

//! # Page sections
//!
//! Groupings and orderings the country page applies to raw records before
//! showing them. Everything here borrows from the dataset and allocates
//! only the containers.

use crate::model::{EntryKind, EntryPoint, Language, SafetyTip, VisaKind, VisaRequirement};
use crate::text::capitalize;
use serde::Serialize;

/// Icon shown for categories without an entry of their own.
pub const DEFAULT_CATEGORY_ICON: &str = "📌";

pub fn category_icon(category: &str) -> &'static str {
    match category {
        "general" => "🚨",
        "health" => "💉",
        "transportation" => "🚗",
        "scams" => "⚠️",
        "weather" => "⛅",
        "food" => "🍽️",
        "water" => "🚱",
        _ => DEFAULT_CATEGORY_ICON,
    }
}

/// Safety tips sharing a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipGroup<'a> {
    pub category: &'a str,
    pub heading: String,
    pub icon: &'static str,
    pub tips: Vec<&'a str>,
}

/// Group tips by category, categories in order of first appearance.
///
/// ```rust
/// use guide_core::model::SafetyTip;
/// use guide_core::sections::group_safety_tips;
///
/// let tips = vec![
///     SafetyTip { category: "theft".into(), tip: "Watch bags.".into() },
///     SafetyTip { category: "general".into(), tip: "Low crime.".into() },
///     SafetyTip { category: "theft".into(), tip: "Use the hotel safe.".into() },
/// ];
/// let groups = group_safety_tips(&tips);
///
/// assert_eq!(groups[0].heading, "Theft");
/// assert_eq!(groups[0].tips.len(), 2);
/// assert_eq!(groups[1].icon, "🚨");
/// ```
pub fn group_safety_tips(tips: &[SafetyTip]) -> Vec<TipGroup<'_>> {
    let mut groups: Vec<TipGroup<'_>> = Vec::new();
    for tip in tips {
        match groups.iter_mut().find(|g| g.category == tip.category) {
            Some(group) => group.tips.push(&tip.tip),
            None => groups.push(TipGroup {
                category: &tip.category,
                heading: capitalize(&tip.category),
                icon: category_icon(&tip.category),
                tips: vec![tip.tip.as_str()],
            }),
        }
    }
    groups
}

/// Official languages first, then by share of speakers, highest first.
///
/// A missing percentage sorts as zero. Ties keep dataset order.
pub fn sort_languages(languages: &[Language]) -> Vec<&Language> {
    let mut sorted: Vec<&Language> = languages.iter().collect();
    sorted.sort_by(|a, b| {
        b.official.cmp(&a.official).then_with(|| {
            b.percentage
                .unwrap_or(0.0)
                .total_cmp(&a.percentage.unwrap_or(0.0))
        })
    });
    sorted
}

/// Rules that name `citizenship` among their nationalities, ignoring case.
pub fn requirements_for_citizen<'a>(
    requirements: &'a [VisaRequirement],
    citizenship: &str,
) -> Vec<&'a VisaRequirement> {
    let wanted = citizenship.trim().to_lowercase();
    requirements
        .iter()
        .filter(|r| r.for_citizens.iter().any(|c| c.trim().to_lowercase() == wanted))
        .collect()
}

pub fn requirements_of_kind<'a>(
    requirements: &'a [VisaRequirement],
    kind: &VisaKind,
) -> Vec<&'a VisaRequirement> {
    requirements.iter().filter(|r| &r.requirement == kind).collect()
}

/// Entry points split by kind, dataset order kept within each list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntryPointGroups<'a> {
    pub airports: Vec<&'a EntryPoint>,
    pub borders: Vec<&'a EntryPoint>,
    pub ports: Vec<&'a EntryPoint>,
}

impl<'a> EntryPointGroups<'a> {
    pub fn get(&self, kind: EntryKind) -> &[&'a EntryPoint] {
        match kind {
            EntryKind::Airport => &self.airports,
            EntryKind::Border => &self.borders,
            EntryKind::Port => &self.ports,
        }
    }

    pub fn len(&self) -> usize {
        self.airports.len() + self.borders.len() + self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn entry_points_by_kind(points: &[EntryPoint]) -> EntryPointGroups<'_> {
    let mut groups = EntryPointGroups::default();
    for point in points {
        match point.kind {
            EntryKind::Airport => groups.airports.push(point),
            EntryKind::Border => groups.borders.push(point),
            EntryKind::Port => groups.ports.push(point),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Guide;

    fn lang(name: &str, official: bool, percentage: Option<f64>) -> Language {
        Language {
            name: name.to_string(),
            official,
            percentage,
            notes: None,
        }
    }

    #[test]
    fn unknown_category_gets_pin() {
        assert_eq!(category_icon("theft"), DEFAULT_CATEGORY_ICON);
        assert_eq!(category_icon("health"), "💉");
    }

    #[test]
    fn dataset_tips_grouped() {
        let guide = Guide::embedded().unwrap();
        let portugal = guide.country("portugal").unwrap();
        let groups = group_safety_tips(&portugal.safety_tips);
        let headings: Vec<_> = groups.iter().map(|g| g.heading.as_str()).collect();
        assert_eq!(headings, vec!["General", "Theft"]);
    }

    #[test]
    fn languages_official_then_share() {
        let langs = vec![
            lang("English", false, Some(27.0)),
            lang("Mirandese", true, Some(0.1)),
            lang("Sign", false, None),
            lang("Portuguese", true, Some(100.0)),
            lang("French", false, Some(27.0)),
        ];
        let names: Vec<_> = sort_languages(&langs).iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Portuguese", "Mirandese", "English", "French", "Sign"]);
    }

    #[test]
    fn visa_filters() {
        let guide = Guide::embedded().unwrap();
        let reqs = &guide.country("portugal").unwrap().visa_requirements;
        assert_eq!(requirements_for_citizen(reqs, "united kingdom").len(), 1);
        assert!(requirements_for_citizen(reqs, "Narnia").is_empty());
        assert_eq!(requirements_of_kind(reqs, &VisaKind::VisaFree).len(), 1);
        assert!(requirements_of_kind(reqs, &VisaKind::EVisa).is_empty());
    }

    #[test]
    fn entry_points_split() {
        let guide = Guide::embedded().unwrap();
        let groups = entry_points_by_kind(&guide.country("portugal").unwrap().entry_points);
        assert_eq!(groups.get(EntryKind::Airport).len(), 2);
        assert_eq!(groups.borders.len(), 2);
        assert_eq!(groups.ports[1].name, "Port of Leixões");
        assert_eq!(groups.len(), 6);
    }
}
