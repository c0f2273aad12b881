use super::{Declaration, DeclarationKind};
use crate::keys::VariableType;

/// Fragment shader color output (`layout(location = 0) out vec4 name;`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFragment {
    location: u32,
    variable_type: VariableType,
    name: String,
}

impl OutputFragment {
    pub fn new(location: u32, variable_type: VariableType, name: impl Into<String>) -> Self {
        Self {
            location,
            variable_type,
            name: name.into(),
        }
    }

    pub fn location(&self) -> u32 {
        self.location
    }

    pub fn variable_type(&self) -> &VariableType {
        &self.variable_type
    }
}

impl Declaration for OutputFragment {
    const KIND: DeclarationKind = DeclarationKind::OutputFragment;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.variable_type.is_fragment_output()
    }

    fn source_code(&self) -> String {
        format!(
            "layout(location = {}) out {} {};\n",
            self.location, self.variable_type, self.name
        )
    }

    fn bytes(&self) -> u32 {
        self.variable_type.bytes()
    }
}
