use std::collections::BTreeMap;
use std::path::PathBuf;

/// One data record of a CSV export after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// 1-based record number; the header is line 1.
    pub line: usize,
    /// Normalized header name -> cleaned value.
    pub fields: BTreeMap<String, String>,
}

impl Row {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            fields: BTreeMap::new(),
        }
    }

    /// Builds a row from `(key, value)` pairs; later keys overwrite earlier ones.
    pub fn from_pairs<I, K, V>(line: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            line,
            fields: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Value of `key`, or `""` when the column is absent.
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// True when every cell is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|value| value.trim().is_empty())
    }
}

/// Headers and rows of one CSV file.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub path: PathBuf,
    /// Normalized headers in file order, duplicates preserved.
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl CsvTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }
}
