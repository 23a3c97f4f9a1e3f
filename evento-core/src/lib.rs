//! Core types for evento.
//!
//! This crate holds everything the console front end drives:
//! - `Event`, `Category` and the derived `EventStatus`
//! - the `;`-separated line format and the `EventStore` that reads and writes it
//! - `Registry`, the in-memory event list for a session
//! - `User` and `EventoConfig`

pub mod category;
pub mod codec;
pub mod config;
pub mod error;
pub mod event;
pub mod registry;
pub mod status;
pub mod store;
pub mod user;

pub use category::Category;
pub use error::{EventoError, EventoResult};
pub use event::Event;
pub use registry::Registry;
pub use status::EventStatus;
pub use store::EventStore;
pub use user::User;
