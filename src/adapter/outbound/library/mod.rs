//! Library catalog adapter (Library Information Naru API).

mod client;
mod dto;

pub use client::{LibraryApiClient, LibraryApiSettings};
