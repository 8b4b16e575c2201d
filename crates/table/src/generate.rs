use std::{fs, path::Path};

use crate::{
    map::DepartmentMap,
    sort::{SortOrder, sorted},
    table::{DEPARTMENTS, DepartmentEntry},
};

pub const DEFAULT_OUTPUT: &str = "dept.json";

pub fn build_map_from(entries: &[DepartmentEntry<'_>], order: SortOrder) -> DepartmentMap {
    DepartmentMap::from_entries(&sorted(entries, order))
}

pub fn build_map(order: SortOrder) -> DepartmentMap {
    build_map_from(&DEPARTMENTS, order)
}

/// Two-space indented, one member per line, no trailing newline.
pub fn to_json(map: &DepartmentMap) -> Result<String, String> {
    serde_json::to_string_pretty(map).map_err(|e| format!("json failed: {e}"))
}

/// Overwrites `path`. Returns the number of bytes written.
pub fn write_json(path: &Path, map: &DepartmentMap) -> Result<usize, String> {
    write_json_text(path, &to_json(map)?)
}

/// Writes text already produced by [`to_json`] as is.
pub fn write_json_text(path: &Path, json: &str) -> Result<usize, String> {
    fs::write(path, json.as_bytes()).map_err(|e| format!("write failed: {e}"))?;
    Ok(json.len())
}

pub fn read_json(path: &Path) -> Result<DepartmentMap, String> {
    let bytes = fs::read(path).map_err(|e| format!("read failed: {e}"))?;
    serde_json::from_slice(&bytes).map_err(|e| format!("json failed: {e}"))
}
