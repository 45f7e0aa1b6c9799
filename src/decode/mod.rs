//! Response decoder module
//!
//! # Overview
//!
//! Turns a raw page body into a typed [`PageResult`] at the boundary, so the
//! rest of the pipeline never touches untyped JSON. Three results are possible:
//! a page with listings, the end-of-data signal, or a decode error that the
//! engine treats as a skippable page.

mod decoders;
mod types;

pub use decoders::JsonPageDecoder;
pub use types::{
    DecodeOutcome, ListingRecord, PageDecoder, PageMeta, PageResult, SalaryRecord,
};
