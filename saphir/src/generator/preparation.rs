//! Memoized preparations
//!
//! Shared matrices computed once at the top of `main()`, in the order they
//! were first needed.

use crate::keys::ShaderVariable;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreparationKey {
    ModelViewMatrix,
    NormalMatrix,
    ModelViewProjectionMatrix,
    BillboardModelMatrix,
}

impl PreparationKey {
    /// Variable declared by the preparation
    pub fn variable(self) -> ShaderVariable {
        match self {
            PreparationKey::ModelViewMatrix => ShaderVariable::ModelViewMatrix,
            PreparationKey::NormalMatrix => ShaderVariable::NormalMatrix,
            PreparationKey::ModelViewProjectionMatrix => ShaderVariable::ModelViewProjectionMatrix,
            PreparationKey::BillboardModelMatrix => ShaderVariable::BillboardModelMatrix,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preparation {
    key: PreparationKey,
    code: String,
}

impl Preparation {
    pub fn key(&self) -> PreparationKey {
        self.key
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

#[derive(Debug, Clone, Default)]
pub struct PreparationSet {
    keys: FxHashSet<PreparationKey>,
    preparations: Vec<Preparation>,
}

impl PreparationSet {
    pub fn contains(&self, key: PreparationKey) -> bool {
        self.keys.contains(&key)
    }

    /// Record a preparation, ignored if the key is already present
    pub fn insert(&mut self, key: PreparationKey, code: impl Into<String>) -> bool {
        if !self.keys.insert(key) {
            return false;
        }

        self.preparations.push(Preparation { key, code: code.into() });
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Preparation> {
        self.preparations.iter()
    }

    pub fn len(&self) -> usize {
        self.preparations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preparations.is_empty()
    }

    pub(crate) fn code_lines(&self) -> Vec<String> {
        self.preparations.iter().map(|p| p.code.clone()).collect()
    }
}
