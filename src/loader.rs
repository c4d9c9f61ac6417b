//! City text loader.
//!
//! Parses whitespace-delimited `label x y` records, one city per line:
//!
//! ```text
//! Arad      46.18  21.31
//! Brasov    45.65  25.60
//! Cluj      46.77  23.59
//! ```
//!
//! Blank lines are skipped. Fields beyond the third are ignored, matching
//! the lenient convention of hand-written instance files.

use crate::model::City;
use std::fs;
use std::path::Path;

/// Parses cities from `label x y` text.
///
/// Returns `Err` naming the 1-based line number for the first malformed
/// line. Empty input yields an empty list (the runner rejects it when a
/// tour is actually requested).
///
/// # Examples
///
/// ```
/// use tsp_evo::loader::parse_cities;
///
/// let cities = parse_cities("A 0.0 0.0\nB 3.0 4.0\n").unwrap();
/// assert_eq!(cities.len(), 2);
/// assert_eq!(cities[1].name(), "B");
/// ```
pub fn parse_cities(input: &str) -> Result<Vec<City>, String> {
    let mut cities = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(name), Some(xs), Some(ys)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(format!(
                "line {}: expected `label x y`, got `{line}`",
                idx + 1
            ));
        };
        let x: f64 = xs
            .parse()
            .map_err(|_| format!("line {}: invalid x coordinate `{xs}`", idx + 1))?;
        let y: f64 = ys
            .parse()
            .map_err(|_| format!("line {}: invalid y coordinate `{ys}`", idx + 1))?;
        cities.push(City::new(name, x, y));
    }
    Ok(cities)
}

/// Reads a city file and parses it with [`parse_cities`].
pub fn load_cities<P: AsRef<Path>>(path: P) -> Result<Vec<City>, String> {
    let text = fs::read_to_string(path.as_ref())
        .map_err(|e| format!("cannot read {}: {e}", path.as_ref().display()))?;
    parse_cities(&text)
}
