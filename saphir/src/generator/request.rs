//! Synthesis requests
//!
//! Ordered, unique by variable. Prerequisites of a new request are added
//! first, at `Local` scope, by walking the dependency table with a work
//! list.

use crate::error::{Error, Result};
use crate::keys::ShaderVariable;
use rustc_hash::{FxHashMap, FxHashSet};

const SOURCE: &str = "saphir::ShaderGenerator";

/// Where a synthesized variable must be available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableScope {
    /// Computed at the top of `main()` for the shader's own use
    Local,
    /// Written to a stage output at the end of `main()`
    ToNextStage,
    /// Computed at the top of `main()` and exported
    Both,
}

impl VariableScope {
    /// Scope covering both `self` and `other`
    pub fn merge(self, other: VariableScope) -> VariableScope {
        if self == other {
            self
        } else {
            VariableScope::Both
        }
    }

    /// Whether a stage output is declared
    pub fn exports(self) -> bool {
        self != VariableScope::Local
    }

    /// Whether the value is computed in the top section
    pub fn is_computed_first(self) -> bool {
        self != VariableScope::ToNextStage
    }
}

/// A variable to synthesize and its scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisRequest {
    variable: ShaderVariable,
    scope: VariableScope,
}

impl SynthesisRequest {
    pub fn variable(&self) -> ShaderVariable {
        self.variable
    }

    pub fn scope(&self) -> VariableScope {
        self.scope
    }
}

/// Ordered request list
#[derive(Debug, Clone, Default)]
pub struct RequestList {
    requests: Vec<SynthesisRequest>,
    indexes: FxHashMap<ShaderVariable, usize>,
}

impl RequestList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a variable
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedSyntheticVariable` for variables without a
    /// synthesis routine.
    pub fn request(&mut self, variable: ShaderVariable, scope: VariableScope) -> Result<()> {
        if !variable.is_synthesizable() {
            crate::saphir_bail!(SOURCE, Error::UnsupportedSyntheticVariable,
                "'{}' cannot be synthesized", variable);
        }

        if self.indexes.contains_key(&variable) {
            self.insert_or_merge(variable, scope);
            return Ok(());
        }

        // Post-order walk: every prerequisite lands before its dependents
        let mut order = Vec::new();
        let mut visited = FxHashSet::default();
        let mut pending = vec![(variable, false)];

        while let Some((current, expanded)) = pending.pop() {
            if expanded {
                order.push(current);
                continue;
            }

            if !visited.insert(current) {
                continue;
            }

            pending.push((current, true));
            for prerequisite in current.prerequisites().iter().rev() {
                pending.push((*prerequisite, false));
            }
        }

        for current in order {
            if current == variable {
                self.insert_or_merge(current, scope);
            } else {
                crate::saphir_trace!(SOURCE, "'{}' requires '{}'", variable, current);
                self.insert_or_merge(current, VariableScope::Local);
            }
        }

        Ok(())
    }

    fn insert_or_merge(&mut self, variable: ShaderVariable, scope: VariableScope) {
        match self.indexes.get(&variable) {
            Some(&index) => {
                let request = &mut self.requests[index];
                request.scope = request.scope.merge(scope);
            }
            None => {
                self.indexes.insert(variable, self.requests.len());
                self.requests.push(SynthesisRequest { variable, scope });
            }
        }
    }

    pub fn get(&self, variable: ShaderVariable) -> Option<&SynthesisRequest> {
        let index = self.indexes.get(&variable)?;
        self.requests.get(*index)
    }

    pub fn as_slice(&self) -> &[SynthesisRequest] {
        &self.requests
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SynthesisRequest> {
        self.requests.iter()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
