use crate::domain::model::HeadlineOption;
use rand::Rng;

pub const SYNTHESIZED_HEADLINE_COUNT: usize = 10;
pub const DEFAULT_ALTERNATIVES: usize = 3;

/// Headline templates for a business that is not in the catalog.
/// Every variant mentions both the name and the location.
pub fn synthesized_headlines(name: &str, location: &str) -> Vec<String> {
    vec![
        format!("Why {name} is {location}'s Top Choice in 2025"),
        format!("Discover {location}'s Best Kept Secret: {name}"),
        format!("{name}: Redefining Excellence in {location}"),
        format!("The Ultimate Guide to {name} in {location}"),
        format!("{name} - {location}'s Favorite Destination This Year"),
        format!("How {name} is Changing the Game in {location}"),
        format!("{location}'s Hidden Gem: The Story of {name}"),
        format!("10 Reasons Why {name} Stands Out in {location}"),
        format!("{name}: A Must-Visit Spot in {location} This Season"),
        format!("The Rise of {name} in {location}'s Competitive Market"),
    ]
}

/// Picks a new headline index uniformly among the ones other than `current`.
///
/// With fewer than two headlines there is nothing to rotate to and `current`
/// is returned as is. The draw is over `len - 1` offsets, so it never retries.
pub fn rotate<R: Rng + ?Sized>(headlines: &[String], current: usize, rng: &mut R) -> usize {
    let len = headlines.len();
    if len <= 1 {
        return current;
    }

    let current = current % len;
    let offset = rng.gen_range(1..len);
    (current + offset) % len
}

/// The first `limit` headlines other than the displayed one.
pub fn alternatives(headlines: &[String], current: usize, limit: usize) -> Vec<HeadlineOption> {
    headlines
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != current)
        .take(limit)
        .map(|(index, text)| HeadlineOption {
            index,
            text: text.clone(),
        })
        .collect()
}
