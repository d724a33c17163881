//! Catalog Filter
//!
//! The one filter implementation every screen consumes (customer list,
//! partner dashboard, admin views). A restaurant is retained iff ALL
//! active constraint categories pass; within a category the selected
//! values are alternatives (OR). Absent/empty criteria impose no
//! constraint, so the default spec returns the input unchanged.

use serde::{Deserialize, Serialize};

use crate::models::{PriceRange, Restaurant};

use super::TimeRange;

/// User-selected narrowing criteria
///
/// Every field defaults to "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    /// OR semantics, matched case-insensitively against cuisine tags
    pub cuisines: Vec<String>,
    /// OR semantics
    pub price_ranges: Vec<PriceRange>,
    /// Restaurant matches iff `rating >= min_rating` (0.0 is a no-op)
    pub min_rating: f64,
    /// OR semantics; numeric bucket matching, see [`TimeRange::matches_bucket`]
    pub delivery_time: Vec<TimeRange>,
    /// Case-insensitive substring match against name or any cuisine tag
    pub search: String,
}

impl FilterSpec {
    /// Spec with only a search query set
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: query.into(),
            ..Self::default()
        }
    }

    /// Does `restaurant` pass every active constraint?
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if !self.cuisines.is_empty() {
            let hit = restaurant.cuisines.iter().any(|tag| {
                self.cuisines
                    .iter()
                    .any(|wanted| tag.eq_ignore_ascii_case(wanted))
            });
            if !hit {
                return false;
            }
        }

        if !self.price_ranges.is_empty() && !self.price_ranges.contains(&restaurant.price_range) {
            return false;
        }

        if restaurant.rating < self.min_rating {
            return false;
        }

        if !self.delivery_time.is_empty() {
            // No parsed window means the source text was malformed; such a
            // restaurant fails every time-bucket constraint instead of erroring.
            let Some(window) = restaurant.delivery_window else {
                return false;
            };
            if !self
                .delivery_time
                .iter()
                .any(|bucket| window.matches_bucket(bucket))
            {
                return false;
            }
        }

        let query = self.search.trim();
        if !query.is_empty() {
            let query = query.to_lowercase();
            let name_hit = restaurant.name.to_lowercase().contains(&query);
            let tag_hit = restaurant
                .cuisines
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query));
            if !name_hit && !tag_hit {
                return false;
            }
        }

        true
    }
}

/// Filter a restaurant list against a spec
///
/// Pure, single pass, input order preserved, no mutation.
pub fn filter_restaurants(restaurants: &[Restaurant], spec: &FilterSpec) -> Vec<Restaurant> {
    restaurants
        .iter()
        .filter(|r| spec.matches(r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_restaurant(
        id: &str,
        name: &str,
        cuisines: &[&str],
        rating: f64,
        price_range: PriceRange,
        delivery_time: &str,
    ) -> Restaurant {
        let mut r = Restaurant {
            id: id.to_string(),
            slug: id.to_string(),
            name: name.to_string(),
            cuisines: cuisines.iter().map(|s| s.to_string()).collect(),
            rating,
            delivery_time: delivery_time.to_string(),
            delivery_window: None,
            price_range,
            delivery_fee: 2.99,
            min_order: 15.0,
            is_promoted: false,
            discount: None,
        };
        r.reparse_delivery_window();
        r
    }

    fn sample() -> Vec<Restaurant> {
        vec![
            make_restaurant(
                "r1",
                "Burger Barn",
                &["American"],
                4.5,
                PriceRange::Moderate,
                "20-30 min",
            ),
            make_restaurant(
                "r2",
                "Sakura House",
                &["Japanese"],
                4.8,
                PriceRange::Premium,
                "30-40 min",
            ),
            make_restaurant(
                "r3",
                "Pizza Italia",
                &["Italian", "Pizza"],
                4.3,
                PriceRange::Moderate,
                "25-35 min",
            ),
        ]
    }

    fn ids(result: &[Restaurant]) -> Vec<&str> {
        result.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_spec_is_identity() {
        let restaurants = sample();
        let out = filter_restaurants(&restaurants, &FilterSpec::default());
        assert_eq!(ids(&out), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn test_idempotence() {
        let restaurants = sample();
        let spec = FilterSpec {
            cuisines: vec!["Italian".into(), "American".into()],
            min_rating: 4.0,
            ..Default::default()
        };
        let once = filter_restaurants(&restaurants, &spec);
        let twice = filter_restaurants(&once, &spec);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_monotonicity_adding_constraints_never_grows() {
        let restaurants = sample();
        let loose = FilterSpec {
            cuisines: vec!["Italian".into(), "Japanese".into(), "American".into()],
            ..Default::default()
        };
        let base = filter_restaurants(&restaurants, &loose);

        let mut tighter = loose.clone();
        tighter.min_rating = 4.4;
        assert!(filter_restaurants(&restaurants, &tighter).len() <= base.len());

        let mut tighter = loose.clone();
        tighter.price_ranges = vec![PriceRange::Premium];
        assert!(filter_restaurants(&restaurants, &tighter).len() <= base.len());

        let mut tighter = loose.clone();
        tighter.delivery_time = vec![TimeRange::closed(20, 30)];
        assert!(filter_restaurants(&restaurants, &tighter).len() <= base.len());
    }

    #[test]
    fn test_or_within_category() {
        // {"Italian","Pizza"} restaurant matches a {"Mexican","Italian"} selection
        let restaurants = sample();
        let spec = FilterSpec {
            cuisines: vec!["Mexican".into(), "Italian".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_restaurants(&restaurants, &spec)), vec!["r3"]);
    }

    #[test]
    fn test_and_across_categories() {
        // Cuisine matches but rating threshold fails -> excluded
        let restaurants = sample();
        let spec = FilterSpec {
            cuisines: vec!["Italian".into()],
            min_rating: 4.6,
            ..Default::default()
        };
        assert!(filter_restaurants(&restaurants, &spec).is_empty());
    }

    #[test]
    fn test_min_rating_example() {
        let restaurants = vec![
            make_restaurant("a", "A", &["American"], 4.5, PriceRange::Moderate, "20-30 min"),
            make_restaurant("j", "J", &["Japanese"], 4.8, PriceRange::Premium, "30-40 min"),
        ];
        let spec = FilterSpec {
            min_rating: 4.6,
            ..Default::default()
        };
        assert_eq!(ids(&filter_restaurants(&restaurants, &spec)), vec!["j"]);
    }

    #[test]
    fn test_search_case_insensitive() {
        let restaurants = sample();
        // Matches "Pizza Italia" by name and the "Pizza" cuisine tag
        let out = filter_restaurants(&restaurants, &FilterSpec::search("PIZZA"));
        assert_eq!(ids(&out), vec!["r3"]);
        // Tag-only hit
        let out = filter_restaurants(&restaurants, &FilterSpec::search("japan"));
        assert_eq!(ids(&out), vec!["r2"]);
    }

    #[test]
    fn test_whitespace_search_is_no_constraint() {
        let restaurants = sample();
        let out = filter_restaurants(&restaurants, &FilterSpec::search("   "));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_cuisine_match_is_case_insensitive() {
        let restaurants = sample();
        let spec = FilterSpec {
            cuisines: vec!["japanese".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_restaurants(&restaurants, &spec)), vec!["r2"]);
    }

    #[test]
    fn test_time_bucket_filtering() {
        let restaurants = sample();
        let spec = FilterSpec {
            delivery_time: vec![TimeRange::closed(10, 20)],
            ..Default::default()
        };
        // Only Burger Barn's 20-30 window touches the 10-20 bucket
        assert_eq!(ids(&filter_restaurants(&restaurants, &spec)), vec!["r1"]);
    }

    #[test]
    fn test_unparsed_window_fails_time_buckets() {
        let broken = make_restaurant(
            "rx",
            "Mystery Kitchen",
            &["Fusion"],
            4.9,
            PriceRange::Luxury,
            "whenever",
        );
        assert_eq!(broken.delivery_window, None);
        let spec = FilterSpec {
            delivery_time: vec![TimeRange::open(0)],
            ..Default::default()
        };
        assert!(filter_restaurants(std::slice::from_ref(&broken), &spec).is_empty());

        // But it still passes when no time constraint is active
        assert_eq!(
            filter_restaurants(std::slice::from_ref(&broken), &FilterSpec::default()).len(),
            1
        );
    }

    #[test]
    fn test_order_preserved() {
        let restaurants = sample();
        let spec = FilterSpec {
            price_ranges: vec![PriceRange::Moderate, PriceRange::Premium],
            ..Default::default()
        };
        assert_eq!(ids(&filter_restaurants(&restaurants, &spec)), vec!["r1", "r2", "r3"]);
    }
}
