use crate::core::resolver::round_to;
use crate::domain::model::{BusinessRecord, HighestRated, SearchAggregate};

/// Folds one resolved record into the running statistics.
///
/// The average is rounded to two decimals and that rounded value is what the
/// next step starts from, so long sessions drift from the exact mean.
pub fn update(aggregate: &SearchAggregate, record: &BusinessRecord) -> SearchAggregate {
    let previous_total = aggregate.total_searches;
    let new_total = previous_total + 1;
    let new_average = ((aggregate.average_rating * previous_total as f64) + record.rating)
        / new_total as f64;

    let highest_rated = match &aggregate.highest_rated {
        Some(best) if best.rating >= record.rating => Some(best.clone()),
        _ => Some(HighestRated {
            name: record.name.clone(),
            rating: record.rating,
        }),
    };

    SearchAggregate {
        total_searches: new_total,
        average_rating: round_to(new_average, 2),
        highest_rated,
    }
}
