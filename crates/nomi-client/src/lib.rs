//! HTTP client SDK for the Nomi.ai API.
//!
//! This crate provides a typed client for the Nomi.ai REST API.
//!
//! # Example
//!
//! ```no_run
//! use nomi_client::{NomiClient, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = NomiClient::builder()
//!     .base_url("https://api.nomi.ai/v1")
//!     .api_key("secret")
//!     .build()?;
//!
//! // Find a Nomi by name and talk to it
//! let nomi = client.nomis().find_by_name("alice").await?;
//! let response = client.nomis().chat(&nomi.uuid, "Hello!").await?;
//! println!("{}: {}", nomi.name, response.reply_message.text);
//!
//! // List rooms
//! for room in client.rooms().list().await?.rooms {
//!     println!("{}", room.uuid);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Nomis**: list, get, find by name, chat
//! - **Rooms**: list

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, NomiClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use types::*;
