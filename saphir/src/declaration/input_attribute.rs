use super::{Declaration, DeclarationKind};
use crate::keys::VertexAttributeType;

/// Vertex buffer attribute (`layout(location = 0) in vec3 sva_Vertex;`)
///
/// Name, type and location all derive from the attribute slot. Matrix
/// attributes are declared through their first row; declaring another row
/// is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputAttribute {
    attribute: VertexAttributeType,
}

impl InputAttribute {
    pub fn new(attribute: VertexAttributeType) -> Self {
        Self { attribute }
    }

    pub fn attribute(&self) -> VertexAttributeType {
        self.attribute
    }

    pub fn location(&self) -> u32 {
        self.attribute.location()
    }
}

impl Declaration for InputAttribute {
    const KIND: DeclarationKind = DeclarationKind::InputAttribute;

    fn name(&self) -> &str {
        self.attribute.name().unwrap_or_default()
    }

    fn is_valid(&self) -> bool {
        self.attribute.name().is_some()
    }

    fn source_code(&self) -> String {
        match self.attribute.variable_type() {
            Some(variable_type) => format!(
                "layout(location = {}) in {} {};\n",
                self.attribute.location(),
                variable_type,
                self.name()
            ),
            None => String::new(),
        }
    }

    fn bytes(&self) -> u32 {
        self.attribute.component_count() * 4 * self.attribute.occupied_slots().len() as u32
    }
}
