//! Core entry point for the booking_pdf crate.
//!
//! ```no_run
//! use booking_pdf::{render_booking_confirmation, BookingRecord};
//!
//! let record = BookingRecord::new()
//!     .with_booking_id("BK123")
//!     .with_customer_name("Jane Doe")
//!     .with_amount(250);
//! let path = render_booking_confirmation(&record, "out/confirm.pdf")?;
//! # Ok::<(), booking_pdf::RenderError>(())
//! ```

pub mod builder;
pub mod confirmation;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod metrics;
pub mod record;
mod render;

pub use builder::ConfirmationBuilder;
pub use confirmation::{ensure_parent_directory, render_booking_confirmation};
pub use error::RenderError;
pub use fonts::FontProvider;
pub use record::{BookingField, BookingRecord, FieldValue};
