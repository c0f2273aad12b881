use super::{
    block_body, members_are_valid, members_bytes, ArraySize, Declaration, DeclarationKind, Member,
};

/// User structure type (`struct Name { ... };`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    name: String,
    members: Vec<Member>,
}

impl Structure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

impl Declaration for Structure {
    const KIND: DeclarationKind = DeclarationKind::Structure;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        !self.name.is_empty() && members_are_valid(&self.members)
    }

    fn source_code(&self) -> String {
        format!("struct {}\n{}", self.name, block_body(&self.members, None, ArraySize::None))
    }

    fn bytes(&self) -> u32 {
        members_bytes(&self.members)
    }
}
