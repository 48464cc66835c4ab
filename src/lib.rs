//! # emx-plaintext
//!
//! Decide whether data is plaintext or binary.
//!
//! Works on in-memory buffers, any [`std::io::Read`] stream, and files by
//! path. Streams and files can be checked in full or as a size-limited
//! preview of their first N kilobytes.
//!
//! ## What counts as plaintext
//!
//! Data is plaintext when:
//! 1. It is valid UTF-8 (no invalid or truncated sequences)
//! 2. Every code point is `U+0020` or above, or one of `\n`, `\r`, `\t`
//!
//! Empty input is plaintext. There is no partial verdict.
//!
//! ## Example
//!
//! ```
//! assert!(emx_plaintext::is_plaintext(b"Hello, World!\n"));
//! assert!(!emx_plaintext::is_plaintext(&[0x00, 0x01, 0x02, 0x03]));
//!
//! let data = std::io::Cursor::new("你好，世界！\n");
//! assert!(emx_plaintext::from_reader(data).unwrap());
//! ```
//!
//! ## Previews
//!
//! [`from_reader_preview`] and [`from_file_preview`] read at most
//! `max_kb * 1024` bytes; anything after the cap is never read. A limit of
//! zero is rejected with [`PlaintextError::InvalidLength`].
//!
//! The cap is a byte count. If it lands inside a multi-byte character the
//! truncated prefix is not valid UTF-8 and the preview reports binary.
//!
//! ## Detailed results
//!
//! [`detect`] and [`Detector`] return a [`Detection`] that carries the
//! [`BinaryReason`] and byte offset of the first offending byte.

pub mod config;
pub mod detect;
pub mod detector;
pub mod error;
pub mod file;
pub mod reader;

pub use config::{DetectConfig, PreviewLimit};
pub use detect::{detect, is_plaintext, BinaryReason, Detection};
pub use detector::Detector;
pub use error::{PlaintextError, Result};
pub use file::{from_file, from_file_preview};
pub use reader::{from_reader, from_reader_preview};
