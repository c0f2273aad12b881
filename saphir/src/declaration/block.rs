use super::{
    block_body, members_are_valid, members_bytes, ArraySize, Declaration, DeclarationKind, Member,
};
use crate::keys::MemoryLayout;

// ===== UNIFORM BLOCK =====

/// Uniform buffer object
///
/// ```text
/// layout(set = 0, binding = 0, std140) uniform ViewUniformBlock
/// {
///     mat4 viewMatrix;
/// } ubView;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformBlock {
    set: u32,
    binding: u32,
    layout: MemoryLayout,
    name: String,
    instance_name: Option<String>,
    members: Vec<Member>,
}

impl UniformBlock {
    /// Create an empty std140 uniform block
    ///
    /// Members are added with `with_member`; a block without members is
    /// not valid.
    pub fn new(set: u32, binding: u32, name: impl Into<String>) -> Self {
        Self {
            set,
            binding,
            layout: MemoryLayout::Std140,
            name: name.into(),
            instance_name: None,
            members: Vec::new(),
        }
    }

    pub fn with_layout(mut self, layout: MemoryLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_instance_name(mut self, instance_name: impl Into<String>) -> Self {
        self.instance_name = Some(instance_name.into());
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn set(&self) -> u32 {
        self.set
    }

    pub fn binding(&self) -> u32 {
        self.binding
    }

    pub fn instance_name(&self) -> Option<&str> {
        self.instance_name.as_deref()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

impl Declaration for UniformBlock {
    const KIND: DeclarationKind = DeclarationKind::UniformBlock;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        !self.name.is_empty() && members_are_valid(&self.members)
    }

    fn source_code(&self) -> String {
        format!(
            "layout(set = {}, binding = {}, {}) uniform {}\n{}",
            self.set,
            self.binding,
            self.layout.to_str(),
            self.name,
            block_body(&self.members, self.instance_name.as_deref(), ArraySize::None)
        )
    }

    fn bytes(&self) -> u32 {
        members_bytes(&self.members)
    }
}

// ===== SHADER STORAGE BLOCK =====

/// Shader storage buffer object
///
/// The last member may be an unsized runtime array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderStorageBlock {
    set: u32,
    binding: u32,
    layout: MemoryLayout,
    read_only: bool,
    name: String,
    instance_name: Option<String>,
    members: Vec<Member>,
}

impl ShaderStorageBlock {
    /// Create an empty std430 storage block
    pub fn new(set: u32, binding: u32, name: impl Into<String>) -> Self {
        Self {
            set,
            binding,
            layout: MemoryLayout::Std430,
            read_only: false,
            name: name.into(),
            instance_name: None,
            members: Vec::new(),
        }
    }

    pub fn with_layout(mut self, layout: MemoryLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_instance_name(mut self, instance_name: impl Into<String>) -> Self {
        self.instance_name = Some(instance_name.into());
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn set(&self) -> u32 {
        self.set
    }

    pub fn binding(&self) -> u32 {
        self.binding
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

impl Declaration for ShaderStorageBlock {
    const KIND: DeclarationKind = DeclarationKind::ShaderStorageBlock;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        if self.name.is_empty() || !members_are_valid(&self.members) {
            return false;
        }

        // Only the last member may be a runtime array
        let last = self.members.len() - 1;
        self.members
            .iter()
            .enumerate()
            .all(|(index, member)| index == last || member.array_size != ArraySize::Unsized)
    }

    fn source_code(&self) -> String {
        let access = if self.read_only { "readonly " } else { "" };
        format!(
            "layout(set = {}, binding = {}, {}) {}buffer {}\n{}",
            self.set,
            self.binding,
            self.layout.to_str(),
            access,
            self.name,
            block_body(&self.members, self.instance_name.as_deref(), ArraySize::None)
        )
    }

    fn bytes(&self) -> u32 {
        members_bytes(&self.members)
    }
}

// ===== PUSH CONSTANT BLOCK =====

/// Push constant block (`layout(push_constant) uniform Name { ... } instance;`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushConstantBlock {
    name: String,
    instance_name: Option<String>,
    members: Vec<Member>,
}

impl PushConstantBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instance_name: None,
            members: Vec::new(),
        }
    }

    pub fn with_instance_name(mut self, instance_name: impl Into<String>) -> Self {
        self.instance_name = Some(instance_name.into());
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn instance_name(&self) -> Option<&str> {
        self.instance_name.as_deref()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

impl Declaration for PushConstantBlock {
    const KIND: DeclarationKind = DeclarationKind::PushConstantBlock;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        !self.name.is_empty() && members_are_valid(&self.members)
    }

    fn source_code(&self) -> String {
        format!(
            "layout(push_constant) uniform {}\n{}",
            self.name,
            block_body(&self.members, self.instance_name.as_deref(), ArraySize::None)
        )
    }

    fn bytes(&self) -> u32 {
        members_bytes(&self.members)
    }
}
