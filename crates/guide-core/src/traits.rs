// crates/guide-core/src/traits.rs
use crate::text::normalize_name;

/// Name-based matching helpers for records that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get comparisons on the normalized form
/// produced by [`normalize_name`]:
/// - [`NameMatch::is_named`]: equality on normalized form
/// - [`NameMatch::name_contains`]: substring match on normalized form
///
/// # Examples
/// ```rust
/// use guide_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Bragança").is_named("braganca"));
/// assert!(Place("Viana do Castelo").name_contains("castelo"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// The name after [`normalize_name`].
    #[inline]
    fn normalized_name(&self) -> String {
        normalize_name(self.name_str())
    }

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.normalized_name() == normalize_name(q)
    }

    /// Accent-insensitive and case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.normalized_name().contains(&normalize_name(q))
    }
}
