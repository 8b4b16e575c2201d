pub mod table;
pub use table::{DEPARTMENT_COUNT, DEPARTMENTS, DepartmentEntry};
pub mod sort;
pub use sort::{SortOrder, sort_entries};
pub mod map;
pub use map::DepartmentMap;
pub mod generate;
pub use generate::{
    DEFAULT_OUTPUT, build_map, build_map_from, read_json, to_json, write_json,
    write_json_text,
};

use once_cell::sync::Lazy;

/// The table in legacy order, built on first use.
pub static DEPT_MAP: Lazy<DepartmentMap> = Lazy::new(|| build_map(SortOrder::Legacy));

pub fn get(name: &str) -> Option<&'static str> {
    DEPT_MAP.get(name)
}

#[cfg(test)]
mod tests;
