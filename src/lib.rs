//! # ascii_qr
//!
//! Generate QR codes and render them as ASCII art for the terminal.
//!
//! Symbol encoding is delegated to the [`qrcode`] crate. This crate renders the
//! resulting bitmap into text: a full block (`█`) per dark module and a space per
//! light module, one line per row.
//!
//! ## Features
//!
//! - Automatic or fixed QR version (1 to 40), low error correction.
//! - Optional horizontal stretch for terminals whose character cells are taller than wide.
//! - Optional light border (quiet zone) around the symbol.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ascii-qr = "0.1" # Replace with the latest version
//! ```
//!
//! Or install the command-line tool:
//!
//! ```text
//! cargo install ascii-qr
//! ascii-qr "https://example.com" --stretch
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ascii_qr::helper::{generate_qr_ascii, Options};
//!
//! let options = Options { version: Some(3), stretch: true, border: 0 };
//! let art = generate_qr_ascii("https://example.com", &options).unwrap();
//! print!("{}", art);
//! ```
//!
//! ## Modules
//!
//! - [`encode`]: QR bitmap generation.
//! - [`helper`]: Bitmap to ASCII rendering.
//! - [`error`]: Error type.

pub mod encode;
pub mod error;
pub mod helper;

pub use error::{Error, Result};
pub use helper::{generate_qr_ascii, Options};
