//! Name-keyed, insertion-ordered storage for one declaration kind
//!
//! Lookups go through an index map; iteration follows insertion order so
//! generated code is deterministic.

use super::Declaration;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct DeclarationBucket<D> {
    declarations: Vec<D>,
    names: FxHashMap<String, usize>,
}

impl<D> Default for DeclarationBucket<D> {
    fn default() -> Self {
        Self {
            declarations: Vec::new(),
            names: FxHashMap::default(),
        }
    }
}

impl<D: Declaration> DeclarationBucket<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration
    ///
    /// Returns false and leaves the bucket untouched if the name is taken.
    pub fn insert(&mut self, declaration: D) -> bool {
        if self.names.contains_key(declaration.name()) {
            return false;
        }

        let index = self.declarations.len();
        self.names.insert(declaration.name().to_string(), index);
        self.declarations.push(declaration);

        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Get declaration by name
    pub fn get(&self, name: &str) -> Option<&D> {
        let index = self.names.get(name)?;
        self.declarations.get(*index)
    }

    /// Get insertion index from name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, D> {
        self.declarations.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|declaration| declaration.name())
    }

    pub fn as_slice(&self) -> &[D] {
        &self.declarations
    }

    /// Sum of the declarations' byte estimates
    pub fn bytes(&self) -> u32 {
        self.declarations.iter().map(|declaration| declaration.bytes()).sum()
    }

    /// Render the bucket as a labelled section
    ///
    /// Empty buckets render `/* No <label> */`.
    pub fn generate(&self, code: &mut String, label: &str) {
        if self.declarations.is_empty() {
            code.push_str(&format!("/* No {} */\n\n", label));
            return;
        }

        code.push_str(&format!("/* {} */\n", label));
        for declaration in &self.declarations {
            code.push_str(&declaration.source_code());
        }
        code.push('\n');
    }
}

impl<'a, D> IntoIterator for &'a DeclarationBucket<D> {
    type Item = &'a D;
    type IntoIter = std::slice::Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

#[cfg(test)]
#[path = "bucket_tests.rs"]
mod tests;
