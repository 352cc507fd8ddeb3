use indexmap::IndexMap;
use itertools::Itertools;

use crate::coord::LatLng;

/// Node labels keyed by coordinate, in assignment order.
pub type LabelMap = IndexMap<LatLng, String>;

/// Spreadsheet-style label for a zero-based position:
/// `0 -> "A"`, `25 -> "Z"`, `26 -> "AA"`, `701 -> "ZZ"`, `702 -> "AAA"`.
///
/// Bijective base-26 over `A..=Z`, so every position maps to exactly
/// one label and no label is ever skipped or reused.
pub fn alphabetic(position: usize) -> String {
    let mut digits = Vec::new();
    let mut remaining = position;

    loop {
        digits.push((b'A' + (remaining % 26) as u8) as char);
        match (remaining / 26).checked_sub(1) {
            Some(next) => remaining = next,
            None => break,
        }
    }

    digits.iter().rev().collect()
}

/// Assigns a label to every node, in the order the sequence yields
/// them. The same sequence always produces the same map.
pub fn labels<I>(nodes: I) -> LabelMap
where
    I: IntoIterator<Item = LatLng>,
{
    nodes
        .into_iter()
        .enumerate()
        .map(|(position, node)| (node, alphabetic(position)))
        .collect()
}

/// Renders a node path as labels joined with `" -> "`. Nodes missing
/// from the map render as `"?"` rather than dropping out, so the
/// rendering always carries one token per node.
pub fn rendered(path: &[LatLng], labels: &LabelMap) -> String {
    path.iter()
        .map(|node| labels.get(node).map_or("?", String::as_str))
        .join(" -> ")
}
