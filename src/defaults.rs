use rand::Rng;

/// Source of the generated fields a real backend would own. Injected into
/// the store and editor so tests can supply deterministic values.
pub trait DefaultSource {
    /// Plausible price in [5, 25), rounded to cents.
    fn price(&self) -> f64;
    /// Plausible rating in [3, 5], rounded to one decimal.
    fn rating(&self) -> f64;
    /// Placeholder ISBN in the `978-` prefix range.
    fn isbn(&self) -> String;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomDefaults;

impl DefaultSource for RandomDefaults {
    fn price(&self) -> f64 {
        let raw: f64 = rand::thread_rng().gen_range(5.0..25.0);
        (raw * 100.0).round() / 100.0
    }

    fn rating(&self) -> f64 {
        let raw: f64 = rand::thread_rng().gen_range(3.0..=5.0);
        (raw * 10.0).round() / 10.0
    }

    fn isbn(&self) -> String {
        let digits: u64 = rand::thread_rng().gen_range(0..10_000_000_000);
        format!("978-{:010}", digits)
    }
}

/// Fixed source for tests.
#[derive(Debug, Clone)]
pub struct FixedDefaults {
    pub price: f64,
    pub rating: f64,
    pub isbn: String,
}

impl Default for FixedDefaults {
    fn default() -> Self {
        FixedDefaults {
            price: 9.99,
            rating: 4.0,
            isbn: "978-0000000000".to_string(),
        }
    }
}

impl DefaultSource for FixedDefaults {
    fn price(&self) -> f64 {
        self.price
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn isbn(&self) -> String {
        self.isbn.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_defaults_stay_in_range() {
        let source = RandomDefaults;
        for _ in 0..200 {
            let price = source.price();
            assert!((5.0..25.0).contains(&price), "price out of range: {price}");
            let rating = source.rating();
            assert!((3.0..=5.0).contains(&rating), "rating out of range: {rating}");
            assert!(source.isbn().starts_with("978-"));
        }
    }

    #[test]
    fn placeholder_isbn_is_zero_padded_to_ten_digits() {
        let source = RandomDefaults;
        for _ in 0..50 {
            let isbn = source.isbn();
            assert_eq!(isbn.len(), 14, "unexpected length: {isbn}");
            let digits = isbn.strip_prefix("978-").expect("missing prefix");
            assert!(digits.chars().all(|c| c.is_ascii_digit()), "bad digits: {isbn}");
        }
    }

    #[test]
    fn rounding_matches_display_precision() {
        let source = RandomDefaults;
        let price = source.price();
        assert!(((price * 100.0).round() - price * 100.0).abs() < 1e-9);
        let rating = source.rating();
        assert!(((rating * 10.0).round() - rating * 10.0).abs() < 1e-9);
    }
}
