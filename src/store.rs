//! In-memory subscriber list
//! Append-only, insertion ordered, gone when the process exits

use crate::types::{NewSubscriber, Subscriber, SubscriberId};
use tracing::debug;

#[derive(Debug, Default)]
pub struct SubscriberList {
    subscribers: Vec<Subscriber>,
    last_id_millis: Option<i64>,
}

impl SubscriberList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, keyed by the creation time in milliseconds.
    /// Two records created within the same millisecond get consecutive keys.
    pub fn insert(&mut self, new: NewSubscriber, now_millis: i64) -> &Subscriber {
        let millis = match self.last_id_millis {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last_id_millis = Some(millis);

        let subscriber = Subscriber {
            id: SubscriberId::from_millis(millis),
            first_name: new.first_name,
            last_name: new.last_name,
            phone: new.phone,
            amount: new.amount,
            start_date: new.start_date,
            end_date: new.end_date,
        };
        debug!(id = %subscriber.id, total = self.subscribers.len() + 1, "Subscriber stored");
        self.subscribers.push(subscriber);
        &self.subscribers[self.subscribers.len() - 1]
    }

    /// All records in insertion order
    pub fn all(&self) -> &[Subscriber] {
        &self.subscribers
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(first: &str) -> NewSubscriber {
        NewSubscriber {
            first_name: first.to_string(),
            last_name: "Haddad".to_string(),
            phone: "0555 12 34 56".to_string(),
            amount: 1500.0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        }
    }

    #[test]
    fn insert_keeps_order() {
        let mut list = SubscriberList::new();
        assert_eq!(list.len(), 0);
        list.insert(sample("Amina"), 1_000);
        list.insert(sample("Karim"), 2_000);
        list.insert(sample("Sara"), 3_000);

        let names: Vec<&str> = list.all().iter().map(|s| s.first_name.as_str()).collect();
        assert_eq!(names, ["Amina", "Karim", "Sara"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.all()[1].id.as_str(), "2000");
    }

    #[test]
    fn same_millisecond_gets_distinct_ids() {
        let mut list = SubscriberList::new();
        let a = list.insert(sample("Amina"), 5_000).id.clone();
        let b = list.insert(sample("Karim"), 5_000).id.clone();
        // clock went backwards
        let c = list.insert(sample("Sara"), 4_000).id.clone();

        assert_eq!(a.as_str(), "5000");
        assert_eq!(b.as_str(), "5001");
        assert_eq!(c.as_str(), "5002");
    }

    #[test]
    fn stores_fields_unchanged() {
        let mut list = SubscriberList::new();
        let mut new = sample("Amina");
        new.amount = -20.5;
        new.end_date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let stored = list.insert(new, 1);

        assert_eq!(stored.amount, -20.5);
        assert!(stored.end_date < stored.start_date);
        assert_eq!(stored.full_name(), "Amina Haddad");
    }
}
