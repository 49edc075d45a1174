//! Escape-aware text primitives for the tagged-segment ("universal") text
//! encoding.
//!
//! Text in the universal encoding is a byte string in which a bracketed unit
//! such as `<alpha>` or `<#20AC>` stands for a single logical character. The
//! modules of this crate classify and case-fold bytes, walk strings one
//! logical character at a time, convert to and from XML, shell and Scheme
//! notations, transcode legacy 8-bit codepages, and provide the small search,
//! completion and binary decoding helpers that sit next to them.
//!
//! Every operation is a pure function over borrowed input returning freshly
//! allocated output. Malformed input never fails: unterminated escapes are
//! consumed to the end of the string and decoders return what they managed
//! to produce. The only fallible API is [`binary`], whose reads report
//! [`ReadError`] instead of running past the end of the buffer.
//!
//! ```rust
//! use tmcodec::{scanner, transform};
//!
//! let s = b"a<alpha>b";
//! assert_eq!(scanner::logical_length(s), 3);
//! assert_eq!(scanner::nth_logical_unit(s, 1), b"<alpha>");
//! assert_eq!(transform::tm_decode(&transform::tm_encode(b"x<y")), "x<y");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod binary;
pub mod case;
pub mod classify;
pub mod codepage;
pub mod completion;
pub mod numbering;
pub mod scanner;
pub mod search;
pub mod segment;
pub mod transform;

mod error;
mod options;

#[cfg(test)]
mod tests;

pub use binary::{Primitive, parse, parse_array};
pub use codepage::{ByteTranscoder, Ispell, Koi8, Koi8Layout, Latin2};
pub use error::ReadError;
pub use options::{ShellFlavor, TmCodecOptions, WildcardOptions};
pub use scanner::LogicalChars;
pub use segment::Segment;
pub use transform::{Cdata, CdataPiece};

pub use bstr::{BStr, BString};
