use super::{ArraySize, Declaration, DeclarationKind};
use crate::keys::VariableType;

// ===== SAMPLER =====

/// Opaque uniform bound through a descriptor set
/// (`layout(set = S, binding = B) uniform sampler2D name;`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sampler {
    set: u32,
    binding: u32,
    variable_type: VariableType,
    name: String,
    array_size: ArraySize,
}

impl Sampler {
    pub fn new(
        set: u32,
        binding: u32,
        variable_type: VariableType,
        name: impl Into<String>,
    ) -> Self {
        Self {
            set,
            binding,
            variable_type,
            name: name.into(),
            array_size: ArraySize::None,
        }
    }

    pub fn with_array_size(mut self, array_size: ArraySize) -> Self {
        self.array_size = array_size;
        self
    }

    pub fn set(&self) -> u32 {
        self.set
    }

    pub fn binding(&self) -> u32 {
        self.binding
    }

    pub fn variable_type(&self) -> &VariableType {
        &self.variable_type
    }
}

impl Declaration for Sampler {
    const KIND: DeclarationKind = DeclarationKind::Sampler;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && self.variable_type.is_opaque()
            && !self.variable_type.is_buffer_sampler()
            && self.array_size.is_valid()
    }

    fn source_code(&self) -> String {
        format!(
            "layout(set = {}, binding = {}) uniform {} {}{};\n",
            self.set,
            self.binding,
            self.variable_type,
            self.name,
            self.array_size.suffix()
        )
    }
}

// ===== TEXEL BUFFER =====

/// Buffer texture (`layout(set = S, binding = B) uniform samplerBuffer name;`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexelBuffer {
    set: u32,
    binding: u32,
    variable_type: VariableType,
    name: String,
}

impl TexelBuffer {
    pub fn new(
        set: u32,
        binding: u32,
        variable_type: VariableType,
        name: impl Into<String>,
    ) -> Self {
        Self {
            set,
            binding,
            variable_type,
            name: name.into(),
        }
    }

    pub fn set(&self) -> u32 {
        self.set
    }

    pub fn binding(&self) -> u32 {
        self.binding
    }
}

impl Declaration for TexelBuffer {
    const KIND: DeclarationKind = DeclarationKind::TexelBuffer;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.variable_type.is_buffer_sampler()
    }

    fn source_code(&self) -> String {
        format!(
            "layout(set = {}, binding = {}) uniform {} {};\n",
            self.set, self.binding, self.variable_type, self.name
        )
    }
}
