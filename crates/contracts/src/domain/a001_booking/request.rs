use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::{Booking, BookingId};
use crate::enums::ServiceType;

/// Raw state of the booking form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub car_model: String,
    pub service_type: Option<ServiceType>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormField {
    Name,
    Email,
    Phone,
    CarModel,
    ServiceType,
    Date,
    Time,
}

impl FormField {
    /// Translation key of the field placeholder
    pub fn label_key(&self) -> &'static str {
        match self {
            FormField::Name => "bookingName",
            FormField::Email => "bookingEmail",
            FormField::Phone => "bookingPhone",
            FormField::CarModel => "bookingCar",
            FormField::ServiceType => "bookingService",
            FormField::Date => "bookingDate",
            FormField::Time => "bookingTime",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing required fields: {0:?}")]
    MissingFields(Vec<FormField>),

    #[error("date {0} is in the past")]
    DateInPast(NaiveDate),
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBooking {
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub vehicle_description: String,
    pub service_type: ServiceType,
    pub scheduled_at: NaiveDateTime,
}

impl BookingRequest {
    /// All fields are required; the date may not be before `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<ValidBooking, FormError> {
        let mut missing = Vec::new();
        let text_fields = [
            (FormField::Name, &self.name),
            (FormField::Email, &self.email),
            (FormField::Phone, &self.phone),
            (FormField::CarModel, &self.car_model),
        ];
        for (field, value) in text_fields {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }
        if self.service_type.is_none() {
            missing.push(FormField::ServiceType);
        }
        if self.date.is_none() {
            missing.push(FormField::Date);
        }
        if self.time.is_none() {
            missing.push(FormField::Time);
        }

        let (Some(service_type), Some(date), Some(time)) = (self.service_type, self.date, self.time)
        else {
            return Err(FormError::MissingFields(missing));
        };
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        if date < today {
            return Err(FormError::DateInPast(date));
        }

        Ok(ValidBooking {
            client_name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            vehicle_description: self.car_model.trim().to_string(),
            service_type,
            scheduled_at: date.and_time(time),
        })
    }
}

impl ValidBooking {
    /// An upcoming booking with no tasks yet
    pub fn into_booking(self, id: BookingId) -> Booking {
        Booking::new(
            id,
            self.client_name,
            self.vehicle_description,
            self.service_type,
            self.scheduled_at,
        )
    }
}

/// Selectable appointment times across the day, `interval_minutes` apart
pub fn time_slots(interval_minutes: u32) -> Vec<NaiveTime> {
    let step = Duration::minutes(i64::from(interval_minutes.clamp(1, 24 * 60)));
    let mut slots = Vec::new();
    let mut offset = Duration::zero();
    while offset < Duration::days(1) {
        slots.push(NaiveTime::default() + offset);
        offset += step;
    }
    slots
}

/// `10:30 AM` style label
pub fn format_slot(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Value used in `<option value=..>`
pub fn slot_value(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn parse_slot(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}
