use crate::error::{Result, StoreError};
use rolodex_core::ContactRecord;
use std::collections::HashMap;
use std::fmt;

/// In-memory contacts keyed by name.
///
/// Iteration follows the order in which each name was first added; replacing
/// or editing a record keeps its position.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    order: Vec<String>,
    records: HashMap<String, ContactRecord>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, replacing any record stored under the same name.
    pub fn add(&mut self, record: ContactRecord) {
        let key = record.name().as_str().to_string();
        if !self.records.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.records.insert(key, record);
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    pub fn get(&self, name: &str) -> Result<&ContactRecord> {
        self.find(name).ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut ContactRecord> {
        self.records
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    pub fn delete(&mut self, name: &str) -> Result<ContactRecord> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        Ok(record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, record) in self.records().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}
