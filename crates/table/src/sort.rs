use std::fmt;

use crate::table::DepartmentEntry;

/// Separator placed between name and code when a pair is rendered as one string.
pub const PAIR_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Compare `name + "," + code` by UTF-16 code unit. This is the order
    /// existing `dept.json` consumers were built against.
    #[default]
    Legacy,
    /// Compare `name` alone by UTF-16 code unit.
    Name,
    /// Keep the table order.
    Source,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Legacy => "legacy",
            SortOrder::Name => "name",
            SortOrder::Source => "source",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `name,code`, the string a pair is compared by under [`SortOrder::Legacy`].
pub fn legacy_key(entry: &DepartmentEntry<'_>) -> String {
    let mut key = String::with_capacity(entry.name.len() + entry.code.len() + 1);
    key.push_str(entry.name);
    key.push(PAIR_SEPARATOR);
    key.push_str(entry.code);
    key
}

#[inline]
fn utf16_units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Stable in every mode: entries with equal keys keep their relative order.
pub fn sort_entries(entries: &mut [DepartmentEntry<'_>], order: SortOrder) {
    match order {
        SortOrder::Legacy => entries.sort_by_cached_key(|e| utf16_units(&legacy_key(e))),
        SortOrder::Name => entries.sort_by_cached_key(|e| utf16_units(e.name)),
        SortOrder::Source => {}
    }
}

pub fn sorted<'a>(entries: &[DepartmentEntry<'a>], order: SortOrder) -> Vec<DepartmentEntry<'a>> {
    let mut out = entries.to_vec();
    sort_entries(&mut out, order);
    out
}
