//! Query Layer Module
//!
//! Filtering and pagination over an item collection view. Pure functions;
//! filtering always runs before pagination so the page metadata reflects
//! the filtered count.

use crate::catalog::Item;

// == Page Meta ==
/// Pagination metadata returned alongside a page of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    /// Effective page number after clamping
    pub page: usize,
    /// Effective page size after clamping
    pub limit: usize,
    /// Collection size before pagination (after filtering)
    pub total_items: usize,
    /// ceil(total_items / limit); 0 for an empty collection
    pub total_pages: usize,
}

// == Search ==
/// Case-insensitive substring match of `q` against item names.
///
/// An absent or empty query returns the collection unfiltered.
pub fn search(items: Vec<Item>, q: Option<&str>) -> Vec<Item> {
    match q {
        Some(q) if !q.is_empty() => {
            let needle = q.to_lowercase();
            items
                .into_iter()
                .filter(|item| item.name.to_lowercase().contains(&needle))
                .collect()
        }
        _ => items,
    }
}

// == Parse Page Param ==
/// Parses a raw `page`/`limit` query value, clamping to a minimum of 1.
///
/// An absent value takes the default. Values are read leniently: a leading
/// integer prefix counts (`"3.5"` and `"3abc"` both read as 3); anything
/// without one, zero, or negative clamps to 1.
pub fn parse_page_param(raw: Option<&str>, default: usize) -> usize {
    match raw {
        None => default.max(1),
        Some(raw) => leading_int(raw).map_or(1, |n| n.max(1)) as usize,
    }
}

/// Parses a leading base-10 integer prefix with an optional sign.
///
/// Returns None when no digits lead the (trimmed) input or the prefix does
/// not fit in an i64.
fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    rest[..end].parse::<i64>().ok().map(|n| sign * n)
}

// == Paginate ==
/// Slices out one page of the collection.
///
/// Slice boundaries are `start = (page-1)*limit`, `end = start+limit`;
/// an out-of-range page yields an empty slice rather than an error.
pub fn paginate(items: Vec<Item>, page: usize, limit: usize) -> (Vec<Item>, PageMeta) {
    // Callers normally clamp via parse_page_param; enforce the floor here
    // too so direct calls cannot underflow the start index.
    let page = page.max(1);
    let limit = limit.max(1);

    let total_items = items.len();
    let total_pages = total_items.div_ceil(limit);

    // Saturate so an absurdly large page cannot overflow the start index;
    // it just skips past the end and yields an empty slice.
    let start = (page - 1).saturating_mul(limit);
    let page_items = items.into_iter().skip(start).take(limit).collect();

    (
        page_items,
        PageMeta {
            page,
            limit,
            total_items,
            total_pages,
        },
    )
}
