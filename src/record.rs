//! The booking record rendered onto a confirmation page.
//!
//! A [`BookingRecord`] holds one optional [`FieldValue`] per recognised booking key. Records are
//! usually deserialized from the JSON payload handed over by the booking workflow, where the keys
//! use camelCase (`bookingId`, `customerName`, ...). Unknown keys are ignored and `null` values are
//! treated the same as absent ones.

use std::fmt;

use serde::Deserialize;

/// Display text of a single booking field.
///
/// Any JSON scalar is accepted: strings are kept verbatim while numbers and booleans are formatted
/// through their [`Display`](fmt::Display) implementation, so an amount of `250` renders as `250`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "ScalarValue")]
pub struct FieldValue(String);

impl FieldValue {
    /// Creates a field value from display text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the display text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

macro_rules! field_value_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

field_value_from_display!(i32, i64, u32, u64, f32, f64, bool);

#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Decimal(f64),
    Flag(bool),
}

impl From<ScalarValue> for FieldValue {
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::Text(text) => Self(text),
            ScalarValue::Integer(value) => value.into(),
            ScalarValue::Unsigned(value) => value.into(),
            ScalarValue::Decimal(value) => value.into(),
            ScalarValue::Flag(value) => value.into(),
        }
    }
}

/// The recognised booking fields, in the order they appear on the confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BookingField {
    /// Reservation identifier, labelled "Booking ID".
    BookingId,
    /// Customer name, labelled "Customer".
    CustomerName,
    /// Customer e-mail address, labelled "Email".
    CustomerEmail,
    /// Kind of booking such as flight or hotel, labelled "Type".
    Type,
    /// Travel destination, labelled "Destination".
    Destination,
    /// Date of the booking, labelled "Date".
    BookingDate,
    /// Amount charged, labelled "Amount" and prefixed with the currency symbol.
    Amount,
    /// Booking status, labelled "Status".
    Status,
}

impl BookingField {
    /// All fields in rendering order.
    pub const ALL: [BookingField; 8] = [
        BookingField::BookingId,
        BookingField::CustomerName,
        BookingField::CustomerEmail,
        BookingField::Type,
        BookingField::Destination,
        BookingField::BookingDate,
        BookingField::Amount,
        BookingField::Status,
    ];

    /// Returns the JSON key used by the booking workflow for this field.
    pub fn key(self) -> &'static str {
        match self {
            BookingField::BookingId => "bookingId",
            BookingField::CustomerName => "customerName",
            BookingField::CustomerEmail => "customerEmail",
            BookingField::Type => "type",
            BookingField::Destination => "destination",
            BookingField::BookingDate => "bookingDate",
            BookingField::Amount => "amount",
            BookingField::Status => "status",
        }
    }

    /// Returns the label printed in front of the field value.
    pub fn label(self) -> &'static str {
        match self {
            BookingField::BookingId => "Booking ID",
            BookingField::CustomerName => "Customer",
            BookingField::CustomerEmail => "Email",
            BookingField::Type => "Type",
            BookingField::Destination => "Destination",
            BookingField::BookingDate => "Date",
            BookingField::Amount => "Amount",
            BookingField::Status => "Status",
        }
    }

    /// Looks up a field by its JSON key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Booking details supplied by the caller. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub booking_id: Option<FieldValue>,
    pub customer_name: Option<FieldValue>,
    pub customer_email: Option<FieldValue>,
    #[serde(rename = "type")]
    pub booking_type: Option<FieldValue>,
    pub destination: Option<FieldValue>,
    pub booking_date: Option<FieldValue>,
    pub amount: Option<FieldValue>,
    pub status: Option<FieldValue>,
}

impl BookingRecord {
    /// Creates an empty record; every field renders as `N/A`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a record from the JSON object produced by the booking workflow.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Builds a record from `(key, value)` pairs, ignoring unrecognised keys.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        let mut record = Self::new();
        for (key, value) in pairs {
            if let Some(field) = BookingField::from_key(key.as_ref()) {
                record.set(field, value);
            }
        }
        record
    }

    /// Returns the value stored for `field`, if any.
    pub fn get(&self, field: BookingField) -> Option<&FieldValue> {
        self.slot(field).as_ref()
    }

    /// Stores `value` for `field`, replacing any previous value.
    pub fn set(&mut self, field: BookingField, value: impl Into<FieldValue>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Sets `field` and returns the updated record.
    pub fn with(mut self, field: BookingField, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Sets the booking ID and returns the updated record.
    pub fn with_booking_id(self, value: impl Into<FieldValue>) -> Self {
        self.with(BookingField::BookingId, value)
    }

    /// Sets the customer name and returns the updated record.
    pub fn with_customer_name(self, value: impl Into<FieldValue>) -> Self {
        self.with(BookingField::CustomerName, value)
    }

    /// Sets the customer e-mail address and returns the updated record.
    pub fn with_customer_email(self, value: impl Into<FieldValue>) -> Self {
        self.with(BookingField::CustomerEmail, value)
    }

    /// Sets the booking type and returns the updated record.
    pub fn with_type(self, value: impl Into<FieldValue>) -> Self {
        self.with(BookingField::Type, value)
    }

    /// Sets the destination and returns the updated record.
    pub fn with_destination(self, value: impl Into<FieldValue>) -> Self {
        self.with(BookingField::Destination, value)
    }

    /// Sets the booking date and returns the updated record.
    pub fn with_booking_date(self, value: impl Into<FieldValue>) -> Self {
        self.with(BookingField::BookingDate, value)
    }

    /// Sets the amount, printed after the currency symbol, and returns the updated record.
    pub fn with_amount(self, value: impl Into<FieldValue>) -> Self {
        self.with(BookingField::Amount, value)
    }

    /// Sets the booking status and returns the updated record.
    pub fn with_status(self, value: impl Into<FieldValue>) -> Self {
        self.with(BookingField::Status, value)
    }

    fn slot(&self, field: BookingField) -> &Option<FieldValue> {
        match field {
            BookingField::BookingId => &self.booking_id,
            BookingField::CustomerName => &self.customer_name,
            BookingField::CustomerEmail => &self.customer_email,
            BookingField::Type => &self.booking_type,
            BookingField::Destination => &self.destination,
            BookingField::BookingDate => &self.booking_date,
            BookingField::Amount => &self.amount,
            BookingField::Status => &self.status,
        }
    }

    fn slot_mut(&mut self, field: BookingField) -> &mut Option<FieldValue> {
        match field {
            BookingField::BookingId => &mut self.booking_id,
            BookingField::CustomerName => &mut self.customer_name,
            BookingField::CustomerEmail => &mut self.customer_email,
            BookingField::Type => &mut self.booking_type,
            BookingField::Destination => &mut self.destination,
            BookingField::BookingDate => &mut self.booking_date,
            BookingField::Amount => &mut self.amount,
            BookingField::Status => &mut self.status,
        }
    }
}
