//! Subscriber form state, validation and the submit handler

use super::App;
use crate::error::FormError;
use crate::types::{Field, NewSubscriber, SubscriberId};
use crate::utils::parse_date;
use tracing::{debug, info};

/// Raw text of the six inputs, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriberForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub amount: String,
    pub start_date: String,
    pub end_date: String,
}

impl SubscriberForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Phone => &self.phone,
            Field::Amount => &self.amount,
            Field::StartDate => &self.start_date,
            Field::EndDate => &self.end_date,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Phone => &mut self.phone,
            Field::Amount => &mut self.amount,
            Field::StartDate => &mut self.start_date,
            Field::EndDate => &mut self.end_date,
        }
    }

    /// Number and date inputs drop surrounding whitespace; text inputs keep it
    fn sanitized(&self, field: Field) -> &str {
        match field {
            Field::Amount | Field::StartDate | Field::EndDate => self.value(field).trim(),
            _ => self.value(field),
        }
    }

    fn required(&self, field: Field) -> Result<&str, FormError> {
        let value = self.sanitized(field);
        if value.is_empty() {
            Err(FormError::MissingField(field))
        } else {
            Ok(value)
        }
    }

    /// Check a single input the way submission does
    pub fn check(&self, field: Field) -> Result<(), FormError> {
        let value = self.required(field)?;
        match field {
            Field::Amount => parse_amount(value).map(|_| ()),
            Field::StartDate | Field::EndDate => parse_date(value)
                .map(|_| ())
                .ok_or_else(|| FormError::InvalidDate {
                    field,
                    value: value.to_string(),
                }),
            _ => Ok(()),
        }
    }

    /// Every input that would block a submission, in display order
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| self.check(field).is_err())
            .collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn parse_amount(value: &str) -> Result<f64, FormError> {
    match value.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(FormError::InvalidAmount(value.to_string())),
    }
}

impl TryFrom<&SubscriberForm> for NewSubscriber {
    type Error = FormError;

    fn try_from(form: &SubscriberForm) -> Result<Self, Self::Error> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|&field| form.sanitized(field).is_empty())
        {
            return Err(FormError::MissingField(field));
        }

        let date = |field: Field| {
            let value = form.sanitized(field);
            parse_date(value).ok_or_else(|| FormError::InvalidDate {
                field,
                value: value.to_string(),
            })
        };

        Ok(NewSubscriber {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            phone: form.phone.clone(),
            amount: parse_amount(form.sanitized(Field::Amount))?,
            start_date: date(Field::StartDate)?,
            end_date: date(Field::EndDate)?,
        })
    }
}

impl App {
    /// Append the form contents as a new subscriber and reset the form.
    /// A blocked submission leaves both the form and the list untouched.
    pub fn submit_form(&mut self, now_millis: i64) -> Result<SubscriberId, FormError> {
        match NewSubscriber::try_from(&self.form) {
            Ok(new) => {
                let id = self.subscribers.insert(new, now_millis).id.clone();
                self.form.clear();
                self.invalid_fields.clear();
                info!(id = %id, total = self.subscribers.len(), "Subscriber added");
                Ok(id)
            }
            Err(e) => {
                self.invalid_fields = self.form.invalid_fields().into_iter().collect();
                debug!(error = %e, field = %e.field(), invalid = self.invalid_fields.len(), "Submission blocked");
                Err(e)
            }
        }
    }

    /// Drop the red outline once the user has fixed the field
    pub fn revalidate_field(&mut self, field: Field) {
        if self.invalid_fields.contains(&field) && self.form.check(field).is_ok() {
            self.invalid_fields.remove(&field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled() -> SubscriberForm {
        SubscriberForm {
            first_name: "Amina".to_string(),
            last_name: "Haddad".to_string(),
            phone: "+213 555 12 34 56".to_string(),
            amount: "2500".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-12-31".to_string(),
        }
    }

    fn app() -> App {
        App::with_settings(
            crate::settings::Settings::default(),
            std::env::temp_dir(),
        )
    }

    #[test]
    fn complete_form_converts() {
        let new = NewSubscriber::try_from(&filled()).unwrap();
        assert_eq!(new.first_name, "Amina");
        assert_eq!(new.amount, 2500.0);
        assert_eq!(new.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(new.end_date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn empty_fields_are_missing() {
        for field in Field::ALL {
            let mut form = filled();
            form.value_mut(field).clear();
            assert_eq!(
                NewSubscriber::try_from(&form),
                Err(FormError::MissingField(field))
            );
            assert_eq!(form.invalid_fields(), vec![field]);
        }
    }

    #[test]
    fn text_fields_are_stored_as_typed() {
        let mut form = filled();
        form.first_name = "   ".to_string();
        form.last_name = " Haddad ".to_string();
        form.phone = " 0555 ".to_string();
        form.amount = " 40 ".to_string();
        form.end_date = " 2024-12-31 ".to_string();

        assert!(form.invalid_fields().is_empty());
        let new = NewSubscriber::try_from(&form).unwrap();
        assert_eq!(new.first_name, "   ");
        assert_eq!(new.last_name, " Haddad ");
        assert_eq!(new.phone, " 0555 ");
        assert_eq!(new.amount, 40.0);
        assert_eq!(new.end_date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn blank_number_and_date_are_missing() {
        let mut form = filled();
        form.amount = "  ".to_string();
        assert_eq!(
            NewSubscriber::try_from(&form),
            Err(FormError::MissingField(Field::Amount))
        );

        let mut form = filled();
        form.start_date = " ".to_string();
        assert_eq!(form.invalid_fields(), vec![Field::StartDate]);
    }

    #[test]
    fn amount_must_be_a_number() {
        let mut form = filled();
        form.amount = "abc".to_string();
        assert_eq!(
            NewSubscriber::try_from(&form),
            Err(FormError::InvalidAmount("abc".to_string()))
        );

        form.amount = "NaN".to_string();
        assert!(NewSubscriber::try_from(&form).is_err());

        form.amount = "-12.5".to_string();
        assert_eq!(NewSubscriber::try_from(&form).unwrap().amount, -12.5);
    }

    #[test]
    fn dates_must_parse() {
        let mut form = filled();
        form.end_date = "31/12/2024".to_string();
        let err = NewSubscriber::try_from(&form).unwrap_err();
        assert_eq!(err.field(), Field::EndDate);
    }

    #[test]
    fn end_before_start_is_accepted() {
        let mut form = filled();
        form.start_date = "2024-06-01".to_string();
        form.end_date = "2024-01-01".to_string();
        assert!(NewSubscriber::try_from(&form).is_ok());
    }

    #[test]
    fn submit_appends_one_record_and_clears_form() {
        let mut app = app();
        app.form = filled();

        let id = app.submit_form(1_700_000_000_000).unwrap();

        assert_eq!(app.subscribers.len(), 1);
        assert_eq!(app.subscribers.all()[0].id, id);
        assert_eq!(app.subscribers.all()[0].phone, "+213 555 12 34 56");
        assert_eq!(app.form, SubscriberForm::default());
        assert!(app.invalid_fields.is_empty());
    }

    #[test]
    fn blocked_submit_changes_nothing() {
        let mut app = app();
        app.form = filled();
        app.form.phone.clear();
        app.form.amount = "x".to_string();
        let before = app.form.clone();

        assert!(app.submit_form(1).is_err());

        assert_eq!(app.subscribers.len(), 0);
        assert_eq!(app.form, before);
        assert!(app.invalid_fields.contains(&Field::Phone));
        assert!(app.invalid_fields.contains(&Field::Amount));
        assert_eq!(app.invalid_fields.len(), 2);
    }

    #[test]
    fn fixing_a_field_clears_its_outline() {
        let mut app = app();
        app.form = filled();
        app.form.last_name.clear();
        assert!(app.submit_form(1).is_err());

        app.form.last_name = "Haddad".to_string();
        app.revalidate_field(Field::LastName);
        assert!(app.invalid_fields.is_empty());
        assert!(app.submit_form(2).is_ok());
    }
}
