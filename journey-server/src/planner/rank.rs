//! Ordering helpers for search results.
//!
//! The planner returns itineraries unranked; callers that want a price
//! ordering ask for it explicitly.

use crate::domain::Itinerary;

/// Sort itineraries by total price, cheapest first.
///
/// The sort is stable: equally priced itineraries keep their order.
pub fn sort_by_total_price(mut itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    itineraries.sort_by_key(Itinerary::total_price);
    itineraries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::leg::test_support::{pair, priced};

    fn direct(service: u32, km: f64) -> Itinerary {
        Itinerary::Direct(priced(pair(
            service,
            "Express",
            (1, 1, 0.0, "08:00"),
            (2, 2, km, "12:00"),
        )))
    }

    #[test]
    fn cheapest_first() {
        let sorted = sort_by_total_price(vec![direct(1, 900.0), direct(2, 100.0), direct(3, 400.0)]);
        let prices: Vec<_> = sorted.iter().map(Itinerary::total_price).collect();

        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sorted[0].legs()[0].service().id.0, 2);
    }

    #[test]
    fn ties_keep_order() {
        let sorted = sort_by_total_price(vec![direct(5, 300.0), direct(4, 300.0)]);
        assert_eq!(sorted[0].legs()[0].service().id.0, 5);
        assert_eq!(sorted[1].legs()[0].service().id.0, 4);
    }

    #[test]
    fn empty_is_fine() {
        assert!(sort_by_total_price(Vec::new()).is_empty());
    }
}
