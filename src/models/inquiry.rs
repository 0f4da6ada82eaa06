use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use super::{Listing, ListingId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InquiryError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// What a visitor types into the contact form of a listing.
#[derive(Debug, Clone, Default)]
pub struct InquiryForm {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub tour_date: Option<NaiveDate>,
    pub tour_time: Option<String>,
}

/// Body of `POST /inquiries`. Absent optionals are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inquiry {
    pub property_id: ListingId,
    pub agent_id: Option<ListingId>,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub tour_date: Option<NaiveDate>,
    pub tour_time: Option<String>,
}

impl InquiryForm {
    /// Validate the form and address it to `listing` and its agent.
    pub fn into_inquiry(self, listing: &Listing) -> Result<Inquiry, InquiryError> {
        let property_id = listing
            .id
            .clone()
            .ok_or(InquiryError::MissingField("property_id"))?;
        let full_name = required(self.full_name, "full_name")?;
        let email = required(self.email, "email")?;
        let tour_time = self.tour_time.and_then(non_blank);
        let message = tour_message(&self.message, self.tour_date, tour_time.as_deref());

        Ok(Inquiry {
            property_id,
            agent_id: agent_of(listing),
            full_name,
            email,
            phone: self.phone.and_then(non_blank),
            message,
            tour_date: self.tour_date,
            tour_time,
        })
    }
}

/// Append the visit request to `message`.
///
/// A time without a date is not a request and leaves the message alone.
pub fn tour_message(message: &str, date: Option<NaiveDate>, time: Option<&str>) -> String {
    match (date, time) {
        (Some(date), Some(time)) => format!(
            "{}\n\nDemande de visite: J'aimerais planifier une visite le {} à {}.",
            message,
            date.format("%A, %B %-d, %Y"),
            time
        ),
        (Some(date), None) => format!(
            "{}\n\nDemande de visite: J'aimerais planifier une visite le {}.",
            message,
            date.format("%A, %B %-d, %Y")
        ),
        _ => message.to_string(),
    }
}

fn agent_of(listing: &Listing) -> Option<ListingId> {
    listing
        .extra
        .get("agent_id")
        .and_then(|value| serde_json::from_value(value.clone()).ok())
}

fn required(value: String, field: &'static str) -> Result<String, InquiryError> {
    non_blank(value).ok_or(InquiryError::MissingField(field))
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
