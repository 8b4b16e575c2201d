use std::{fs, path::Path};

use dept::DepartmentMap;
use serde_json::Value;

pub fn read_text(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("cannot read {:?}: {}", path, e))
}

/// Keys in the order they appear in the file.
pub fn file_keys(path: &Path) -> Vec<String> {
    let map: DepartmentMap = serde_json::from_str(&read_text(path))
        .unwrap_or_else(|e| panic!("{:?} is not a department map: {}", path, e));
    map.keys().map(str::to_string).collect()
}

pub fn file_value(path: &Path) -> Value {
    serde_json::from_str(&read_text(path))
        .unwrap_or_else(|e| panic!("{:?} is not json: {}", path, e))
}
