//! Export format primitives shared by the scanner, the normalizer and the
//! test data generator.

pub mod whatsapp;

pub use whatsapp::{
    MEDIA_PLACEHOLDER, SENDER_LOOKAHEAD, SEPARATOR_LEN, TIMESTAMP_PATTERN,
    parse_whatsapp_timestamp, timestamp_regex,
};
