//! Unit tests for keys.rs

use super::*;

// ============================================================================
// VARIABLE TYPE TESTS
// ============================================================================

#[test]
fn test_variable_type_keywords() {
    assert_eq!(VariableType::FloatVector4.to_str(), "vec4");
    assert_eq!(VariableType::Matrix3.to_str(), "mat3");
    assert_eq!(VariableType::UIntSamplerBuffer.to_str(), "usamplerBuffer");
    assert_eq!(VariableType::Structure("Light".to_string()).to_str(), "Light");
    assert_eq!(format!("{}", VariableType::DoubleVector3), "dvec3");
}

#[test]
fn test_variable_type_bytes() {
    assert_eq!(VariableType::Float.bytes(), 4);
    assert_eq!(VariableType::Double.bytes(), 8);
    assert_eq!(VariableType::FloatVector2.bytes(), 16);
    assert_eq!(VariableType::FloatVector3.bytes(), 16);
    assert_eq!(VariableType::DoubleVector4.bytes(), 32);
    assert_eq!(VariableType::Matrix3.bytes(), 48);
    assert_eq!(VariableType::Matrix4.bytes(), 64);
    assert_eq!(VariableType::DoubleMatrix4.bytes(), 128);
    assert_eq!(VariableType::Sampler2D.bytes(), 0);
}

#[test]
fn test_variable_type_categories() {
    assert!(VariableType::Integer.is_scalar());
    assert!(!VariableType::FloatVector2.is_scalar());

    assert!(VariableType::SamplerCube.is_opaque());
    assert!(VariableType::SamplerBuffer.is_opaque());
    assert!(VariableType::SamplerBuffer.is_buffer_sampler());
    assert!(!VariableType::Sampler2D.is_buffer_sampler());

    assert!(VariableType::FloatVector4.is_fragment_output());
    assert!(!VariableType::Matrix4.is_fragment_output());

    assert!(VariableType::Matrix3.is_interface());
    assert!(!VariableType::Void.is_interface());
    assert!(!VariableType::Sampler2D.is_interface());
}

// ============================================================================
// PRIMITIVE TESTS
// ============================================================================

#[test]
fn test_input_primitive_vertex_counts() {
    assert_eq!(InputPrimitiveType::Points.vertex_count(), 1);
    assert_eq!(InputPrimitiveType::Lines.vertex_count(), 2);
    assert_eq!(InputPrimitiveType::LinesAdjacency.vertex_count(), 4);
    assert_eq!(InputPrimitiveType::Triangles.vertex_count(), 3);
    assert_eq!(InputPrimitiveType::TrianglesAdjacency.vertex_count(), 6);
}

#[test]
fn test_primitive_layout_tokens() {
    assert_eq!(InputPrimitiveType::TrianglesAdjacency.to_str(), "triangles_adjacency");
    assert_eq!(OutputPrimitiveType::TriangleStrip.to_str(), "triangle_strip");
    assert_eq!(OutputPrimitiveType::LineStrip.to_str(), "line_strip");
}

// ============================================================================
// VERTEX ATTRIBUTE TESTS
// ============================================================================

#[test]
fn test_vertex_attribute_locations() {
    assert_eq!(VertexAttributeType::Position.location(), 0);
    assert_eq!(VertexAttributeType::Normal.location(), 3);
    assert_eq!(VertexAttributeType::VertexColor.location(), 8);
    assert_eq!(VertexAttributeType::ModelMatrixR0.location(), 9);
    assert_eq!(VertexAttributeType::NormalModelMatrixR2.location(), 15);
}

#[test]
fn test_vertex_attribute_names_and_types() {
    assert_eq!(VertexAttributeType::Position.name(), Some("sva_Vertex"));
    assert_eq!(VertexAttributeType::Position.variable_type(), Some(VariableType::FloatVector3));
    assert_eq!(
        VertexAttributeType::Primary2DTextureCoordinates.variable_type(),
        Some(VariableType::FloatVector2)
    );
    assert_eq!(VertexAttributeType::ModelMatrixR0.variable_type(), Some(VariableType::Matrix4));
    assert_eq!(VertexAttributeType::ModelMatrixR2.name(), None);
    assert_eq!(VertexAttributeType::NormalModelMatrixR1.variable_type(), None);
}

#[test]
fn test_vertex_attribute_slots() {
    assert_eq!(VertexAttributeType::ModelMatrixR0.occupied_slots().len(), 4);
    assert_eq!(VertexAttributeType::NormalModelMatrixR0.occupied_slots().len(), 3);
    assert_eq!(VertexAttributeType::Normal.occupied_slots(), &[VertexAttributeType::Normal]);
    assert!(VertexAttributeType::ModelMatrixR3.is_instance_attribute());
    assert!(!VertexAttributeType::VertexColor.is_instance_attribute());
    assert_eq!(VertexAttributeType::VertexColor.component_count(), 4);
    assert_eq!(VertexAttributeType::Secondary2DTextureCoordinates.component_count(), 2);
}

// ============================================================================
// SHADER VARIABLE TESTS
// ============================================================================

#[test]
fn test_shader_variable_parse() {
    assert_eq!(
        "PositionTextureSpace".parse::<ShaderVariable>(),
        Ok(ShaderVariable::PositionTextureSpace)
    );
    assert!("ssv_PositionTextureSpace".parse::<ShaderVariable>().is_err());
    assert!("Nonsense".parse::<ShaderVariable>().is_err());

    for variable in ShaderVariable::ALL {
        assert_eq!(variable.key().parse::<ShaderVariable>(), Ok(variable));
    }
}

#[test]
fn test_shader_variable_synthesizable_set() {
    let synthesizable = ShaderVariable::ALL.iter().filter(|v| v.is_synthesizable()).count();
    assert_eq!(synthesizable, 19);
    assert!(!ShaderVariable::ModelViewMatrix.is_synthesizable());
    assert!(!ShaderVariable::OutputFragment.is_synthesizable());
}

#[test]
fn test_shader_variable_prerequisites() {
    let prerequisites = ShaderVariable::PositionTextureSpace.prerequisites();
    assert_eq!(prerequisites.len(), 4);
    assert!(prerequisites.contains(&ShaderVariable::PositionViewSpace));
    assert!(prerequisites.contains(&ShaderVariable::NormalViewSpace));
    assert!(ShaderVariable::Color.prerequisites().is_empty());
}

#[test]
fn test_shader_variable_locations_do_not_overlap() {
    // mat3 outputs take three locations
    let mut used = std::collections::BTreeSet::new();
    for variable in ShaderVariable::ALL {
        if variable == ShaderVariable::OutputFragment {
            continue;
        }
        if let Some(location) = variable.location() {
            let span = if variable.variable_type() == VariableType::Matrix3 { 3 } else { 1 };
            for slot in location..location + span {
                assert!(used.insert(slot), "location {} used twice", slot);
            }
        }
    }
}
