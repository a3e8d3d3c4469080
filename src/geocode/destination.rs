// src/geocode/destination.rs
use crate::config::DestinationStyle;

/// Query-component encoding: space → `+`, unreserved characters and `,` kept,
/// everything else percent-encoded per UTF-8 byte.
pub fn plus_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b' ' => out.push('+'),
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b',' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Destination parameter for a stadium/club pair.
pub fn destination_query(stadium: &str, club: &str, style: DestinationStyle) -> String {
    let raw = match style {
        DestinationStyle::Separated => format!("{stadium}, {club}"),
        DestinationStyle::Concatenated => format!("{stadium}{club}"),
    };
    plus_encode(&raw)
}
