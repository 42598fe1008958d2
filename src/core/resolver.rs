use crate::core::catalog::SampleCatalog;
use crate::core::headline::synthesized_headlines;
use crate::domain::model::BusinessRecord;
use rand::Rng;

pub const SYNTHESIZED_MIN_RATING: f64 = 3.5;
pub const SYNTHESIZED_MAX_RATING: f64 = 5.0;
pub const SYNTHESIZED_MIN_REVIEWS: u32 = 50;
pub const SYNTHESIZED_MAX_REVIEWS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Partial,
    Synthesized,
}

/// Maps a query onto a business record. Never fails.
///
/// Lookup order: exact (case-insensitive) match on both fields, then the first
/// catalog entry whose name contains the query name or whose location contains
/// the query location, then a synthesized record. Callers validate that both
/// inputs are non-empty; an empty needle would partially match every entry.
pub fn resolve<R: Rng + ?Sized>(
    name: &str,
    location: &str,
    catalog: &SampleCatalog,
    rng: &mut R,
) -> BusinessRecord {
    resolve_with_kind(name, location, catalog, rng).0
}

pub fn resolve_with_kind<R: Rng + ?Sized>(
    name: &str,
    location: &str,
    catalog: &SampleCatalog,
    rng: &mut R,
) -> (BusinessRecord, MatchKind) {
    let name_key = name.to_lowercase();
    let location_key = location.to_lowercase();

    if let Some(hit) = catalog.iter().find(|biz| {
        biz.name.to_lowercase() == name_key && biz.location.to_lowercase() == location_key
    }) {
        tracing::debug!("Exact catalog match for '{}, {}'", name, location);
        return (hit.clone(), MatchKind::Exact);
    }

    if let Some(hit) = catalog.iter().find(|biz| {
        biz.name.to_lowercase().contains(&name_key)
            || biz.location.to_lowercase().contains(&location_key)
    }) {
        tracing::debug!(
            "Partial catalog match for '{}, {}' -> '{}'",
            name,
            location,
            hit.search_label()
        );
        return (hit.clone(), MatchKind::Partial);
    }

    tracing::debug!("No catalog match for '{}, {}', synthesizing", name, location);
    (synthesize(name, location, rng), MatchKind::Synthesized)
}

pub fn synthesize<R: Rng + ?Sized>(name: &str, location: &str, rng: &mut R) -> BusinessRecord {
    let raw = rng.gen_range(SYNTHESIZED_MIN_RATING..=SYNTHESIZED_MAX_RATING);
    let rating = round_to(raw, 1).clamp(SYNTHESIZED_MIN_RATING, SYNTHESIZED_MAX_RATING);
    let review_count = rng.gen_range(SYNTHESIZED_MIN_REVIEWS..SYNTHESIZED_MAX_REVIEWS);

    BusinessRecord {
        name: name.to_string(),
        location: location.to_string(),
        rating,
        review_count,
        headline_variants: synthesized_headlines(name, location),
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::headline::SYNTHESIZED_HEADLINE_COUNT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_exact_match_returns_catalog_entry() {
        let catalog = SampleCatalog::default();
        let mut rng = rng();
        for entry in catalog.iter() {
            let (found, kind) = resolve_with_kind(&entry.name, &entry.location, &catalog, &mut rng);
            assert_eq!(&found, entry);
            assert_eq!(kind, MatchKind::Exact);
        }
    }

    #[test]
    fn test_exact_match_ignores_case() {
        let catalog = SampleCatalog::default();
        let found = resolve("PIZZA heaven", "delhi", &catalog, &mut rng());
        assert_eq!(found.name, "Pizza Heaven");
        assert_eq!(found.review_count, 512);
    }

    #[test]
    fn test_partial_match_on_name() {
        let catalog = SampleCatalog::default();
        let (found, kind) = resolve_with_kind("bean", "Kolkata", &catalog, &mut rng());
        assert_eq!(kind, MatchKind::Partial);
        assert_eq!(found.name, "Bean There");
    }

    #[test]
    fn test_partial_match_on_location() {
        let catalog = SampleCatalog::default();
        let (found, kind) = resolve_with_kind("Tea Tales", "chenn", &catalog, &mut rng());
        assert_eq!(kind, MatchKind::Partial);
        assert_eq!(found.name, "Spice Trail");
        assert_eq!(found.location, "Chennai");
    }

    #[test]
    fn test_partial_match_takes_first_hit_in_catalog_order() {
        let catalog = SampleCatalog::default();
        // "n" appears in several names; the first catalog entry holding it wins.
        let found = resolve("n", "Nowhere", &catalog, &mut rng());
        assert_eq!(found.name, "Pizza Heaven");

        // Name matches Burger Junction, location matches Cake & Co, which comes first.
        let found = resolve("Burger", "Mumbai", &catalog, &mut rng());
        assert_eq!(found.name, "Cake & Co");
    }

    #[test]
    fn test_synthesized_record_bounds() {
        let catalog = SampleCatalog::default();
        let mut rng = rng();
        for i in 0..100 {
            let name = format!("Tea Tales {}", i);
            let (record, kind) = resolve_with_kind(&name, "Pune", &catalog, &mut rng);
            assert_eq!(kind, MatchKind::Synthesized);
            assert_eq!(record.name, name);
            assert_eq!(record.location, "Pune");
            assert_eq!(record.headline_variants.len(), SYNTHESIZED_HEADLINE_COUNT);
            assert!((3.5..=5.0).contains(&record.rating), "{}", record.rating);
            assert_eq!(round_to(record.rating, 1), record.rating);
            assert!((50..500).contains(&record.review_count));
        }
    }

    #[test]
    fn test_synthesis_is_reproducible_with_seed() {
        let catalog = SampleCatalog::default();
        let first = resolve("Tea Tales", "Pune", &catalog, &mut StdRng::seed_from_u64(9));
        let second = resolve("Tea Tales", "Pune", &catalog, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(4.449, 1), 4.4);
        assert_eq!(round_to(4.25, 2), 4.25);
        assert_eq!(round_to(4.456, 2), 4.46);
    }
}
