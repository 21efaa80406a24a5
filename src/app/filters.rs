//! Filtering logic

use super::App;
use crate::status::is_expired;
use crate::types::Subscriber;
use chrono::NaiveDateTime;

/// Indices of the rows to display, in insertion order
pub fn filter_indices(subscribers: &[Subscriber], expired_only: bool, now: NaiveDateTime) -> Vec<usize> {
    subscribers
        .iter()
        .enumerate()
        .filter(|(_, s)| !expired_only || is_expired(s.end_date, now))
        .map(|(i, _)| i)
        .collect()
}

impl App {
    /// Recomputed every frame; expiry depends on the clock
    pub fn filtered_indices(&self, now: NaiveDateTime) -> Vec<usize> {
        filter_indices(self.subscribers.all(), self.filter_expired, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::types::NewSubscriber;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app_with_end_dates(ends: &[NaiveDate]) -> App {
        let mut app = App::with_settings(Settings::default(), std::env::temp_dir());
        for (i, &end_date) in ends.iter().enumerate() {
            app.subscribers.insert(
                NewSubscriber {
                    first_name: format!("Subscriber {i}"),
                    last_name: "Test".to_string(),
                    phone: "000".to_string(),
                    amount: 100.0,
                    start_date: date(2024, 1, 1),
                    end_date,
                },
                i as i64,
            );
        }
        app
    }

    #[test]
    fn filter_off_shows_everything() {
        let now = date(2024, 6, 15).and_hms_opt(12, 0, 0).unwrap();
        let app = app_with_end_dates(&[date(2024, 1, 1), date(2024, 6, 20), date(2025, 1, 1)]);
        assert_eq!(app.filtered_indices(now), vec![0, 1, 2]);
    }

    #[test]
    fn toggle_shows_expired_subset_then_restores() {
        let now = date(2024, 6, 15).and_hms_opt(12, 0, 0).unwrap();
        let mut app = app_with_end_dates(&[
            date(2024, 1, 1),
            date(2024, 6, 20),
            date(2024, 6, 15),
            date(2025, 1, 1),
            date(2023, 3, 3),
        ]);
        let before: Vec<Subscriber> = app.subscribers.all().to_vec();

        app.filter_expired = true;
        assert_eq!(app.filtered_indices(now), vec![0, 2, 4]);

        app.filter_expired = false;
        assert_eq!(app.filtered_indices(now), vec![0, 1, 2, 3, 4]);
        assert_eq!(app.subscribers.all(), before.as_slice());
    }

    #[test]
    fn empty_list_filters_to_nothing() {
        let now = date(2024, 6, 15).and_hms_opt(12, 0, 0).unwrap();
        assert!(filter_indices(&[], true, now).is_empty());
        assert!(filter_indices(&[], false, now).is_empty());
    }
}
