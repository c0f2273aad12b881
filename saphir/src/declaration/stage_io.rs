//! Inter-stage interface declarations
//!
//! Outputs of one stage become the inputs of the next one with the same
//! location, type, name, interpolation and array size. Geometry and
//! tesselation control inputs turn scalar outputs into arrays sized by the
//! input primitive (see `shader::StageWiringContext`).

use super::{block_body, members_are_valid, ArraySize, Declaration, DeclarationKind, Member};
use crate::keys::{Interpolation, VariableType};

fn interface_variable(
    location: u32,
    interpolation: Option<Interpolation>,
    storage: &str,
    variable_type: &VariableType,
    name: &str,
    array_size: ArraySize,
) -> String {
    let interpolation = interpolation
        .map(|i| format!("{} ", i.to_str()))
        .unwrap_or_default();
    format!(
        "layout(location = {}) {}{} {} {}{};\n",
        location,
        interpolation,
        storage,
        variable_type,
        name,
        array_size.suffix()
    )
}

fn interface_variable_is_valid(
    name: &str,
    variable_type: &VariableType,
    array_size: ArraySize,
) -> bool {
    !name.is_empty() && variable_type.is_interface() && array_size.is_valid()
}

// ===== STAGE OUTPUT =====

/// Variable sent to the next stage (`layout(location = L) smooth out vec4 name;`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    location: u32,
    variable_type: VariableType,
    name: String,
    interpolation: Option<Interpolation>,
    array_size: ArraySize,
}

impl StageOutput {
    pub fn new(location: u32, variable_type: VariableType, name: impl Into<String>) -> Self {
        Self {
            location,
            variable_type,
            name: name.into(),
            interpolation: None,
            array_size: ArraySize::None,
        }
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = Some(interpolation);
        self
    }

    pub fn with_array_size(mut self, array_size: ArraySize) -> Self {
        self.array_size = array_size;
        self
    }

    pub fn location(&self) -> u32 {
        self.location
    }

    pub fn variable_type(&self) -> &VariableType {
        &self.variable_type
    }

    pub fn interpolation(&self) -> Option<Interpolation> {
        self.interpolation
    }

    pub fn array_size(&self) -> ArraySize {
        self.array_size
    }
}

impl Declaration for StageOutput {
    const KIND: DeclarationKind = DeclarationKind::StageOutput;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        interface_variable_is_valid(&self.name, &self.variable_type, self.array_size)
    }

    fn source_code(&self) -> String {
        interface_variable(
            self.location,
            self.interpolation,
            "out",
            &self.variable_type,
            &self.name,
            self.array_size,
        )
    }

    fn bytes(&self) -> u32 {
        self.variable_type.bytes() * self.array_size.multiplier()
    }
}

// ===== STAGE INPUT =====

/// Variable received from the previous stage (`layout(location = L) smooth in vec4 name;`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageInput {
    location: u32,
    variable_type: VariableType,
    name: String,
    interpolation: Option<Interpolation>,
    array_size: ArraySize,
}

impl StageInput {
    pub fn new(location: u32, variable_type: VariableType, name: impl Into<String>) -> Self {
        Self {
            location,
            variable_type,
            name: name.into(),
            interpolation: None,
            array_size: ArraySize::None,
        }
    }

    /// Mirror an upstream output with a different array size
    pub fn from_output_with_array_size(output: &StageOutput, array_size: ArraySize) -> Self {
        Self {
            array_size,
            ..Self::from(output)
        }
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = Some(interpolation);
        self
    }

    pub fn with_array_size(mut self, array_size: ArraySize) -> Self {
        self.array_size = array_size;
        self
    }

    pub fn location(&self) -> u32 {
        self.location
    }

    pub fn variable_type(&self) -> &VariableType {
        &self.variable_type
    }

    pub fn interpolation(&self) -> Option<Interpolation> {
        self.interpolation
    }

    pub fn array_size(&self) -> ArraySize {
        self.array_size
    }
}

impl From<&StageOutput> for StageInput {
    fn from(output: &StageOutput) -> Self {
        Self {
            location: output.location,
            variable_type: output.variable_type.clone(),
            name: output.name.clone(),
            interpolation: output.interpolation,
            array_size: output.array_size,
        }
    }
}

impl Declaration for StageInput {
    const KIND: DeclarationKind = DeclarationKind::StageInput;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        interface_variable_is_valid(&self.name, &self.variable_type, self.array_size)
    }

    fn source_code(&self) -> String {
        interface_variable(
            self.location,
            self.interpolation,
            "in",
            &self.variable_type,
            &self.name,
            self.array_size,
        )
    }

    fn bytes(&self) -> u32 {
        self.variable_type.bytes() * self.array_size.multiplier()
    }

    fn is_unsized_input(&self) -> bool {
        self.array_size == ArraySize::Unsized
    }
}

// ===== OUTPUT BLOCK =====

/// Interface block sent to the next stage
///
/// ```text
/// layout(location = 1) out VertexData
/// {
///     smooth vec4 color;
/// } vertexData;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputBlock {
    location: u32,
    name: String,
    instance_name: String,
    members: Vec<Member>,
    array_size: ArraySize,
}

impl OutputBlock {
    pub fn new(location: u32, name: impl Into<String>, instance_name: impl Into<String>) -> Self {
        Self {
            location,
            name: name.into(),
            instance_name: instance_name.into(),
            members: Vec::new(),
            array_size: ArraySize::None,
        }
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_array_size(mut self, array_size: ArraySize) -> Self {
        self.array_size = array_size;
        self
    }

    pub fn location(&self) -> u32 {
        self.location
    }

    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn array_size(&self) -> ArraySize {
        self.array_size
    }
}

impl Declaration for OutputBlock {
    const KIND: DeclarationKind = DeclarationKind::OutputBlock;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && !self.instance_name.is_empty()
            && members_are_valid(&self.members)
            && self.array_size.is_valid()
    }

    fn source_code(&self) -> String {
        format!(
            "layout(location = {}) out {}\n{}",
            self.location,
            self.name,
            block_body(&self.members, Some(&self.instance_name), self.array_size)
        )
    }
}

// ===== INPUT BLOCK =====

/// Interface block received from the previous stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBlock {
    location: u32,
    name: String,
    instance_name: String,
    members: Vec<Member>,
    array_size: ArraySize,
}

impl InputBlock {
    pub fn new(location: u32, name: impl Into<String>, instance_name: impl Into<String>) -> Self {
        Self {
            location,
            name: name.into(),
            instance_name: instance_name.into(),
            members: Vec::new(),
            array_size: ArraySize::None,
        }
    }

    /// Mirror an upstream block with a different array size
    pub fn from_output_with_array_size(output: &OutputBlock, array_size: ArraySize) -> Self {
        Self {
            array_size,
            ..Self::from(output)
        }
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_array_size(mut self, array_size: ArraySize) -> Self {
        self.array_size = array_size;
        self
    }

    pub fn location(&self) -> u32 {
        self.location
    }

    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn array_size(&self) -> ArraySize {
        self.array_size
    }
}

impl From<&OutputBlock> for InputBlock {
    fn from(output: &OutputBlock) -> Self {
        Self {
            location: output.location,
            name: output.name.clone(),
            instance_name: output.instance_name.clone(),
            members: output.members.clone(),
            array_size: output.array_size,
        }
    }
}

impl Declaration for InputBlock {
    const KIND: DeclarationKind = DeclarationKind::InputBlock;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && !self.instance_name.is_empty()
            && members_are_valid(&self.members)
            && self.array_size.is_valid()
    }

    fn source_code(&self) -> String {
        format!(
            "layout(location = {}) in {}\n{}",
            self.location,
            self.name,
            block_body(&self.members, Some(&self.instance_name), self.array_size)
        )
    }

    fn is_unsized_input(&self) -> bool {
        self.array_size == ArraySize::Unsized
    }
}
