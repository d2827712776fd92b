use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::InputError;
use crate::graph::builder::EdgeTriplet;

/// Two vertex letters followed by a one-digit weight, optionally followed by
/// a comma, e.g. `AB5,`.
static EDGE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z])([a-zA-Z])([0-9])\s*,?").expect("edge token pattern is valid")
});

/// Extracts every edge token from free-form text. Text that does not look like
/// a token is skipped.
pub fn parse_triplets(text: &str) -> Vec<EdgeTriplet> {
    EDGE_TOKEN
        .captures_iter(text)
        .map(|caps| {
            // a single ASCII digit always fits
            let weight = caps[3].parse().unwrap_or_default();
            EdgeTriplet::new(&caps[1], &caps[2], weight)
        })
        .collect()
}

/// Reads `path` and returns its raw contents together with the edges found in
/// them.
pub fn read_triplets_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<(String, Vec<EdgeTriplet>), InputError> {
    let raw = fs::read_to_string(path)?;
    let triplets = parse_triplets(&raw);
    Ok((raw, triplets))
}

/// Splits a route like `A-B-C` into its labels. Commas and whitespace are
/// accepted as separators too.
pub fn parse_route(spec: &str) -> Vec<String> {
    spec.split(|c: char| c == '-' || c == ',' || c.is_whitespace())
        .filter(|label| !label.is_empty())
        .map(str::to_owned)
        .collect()
}
