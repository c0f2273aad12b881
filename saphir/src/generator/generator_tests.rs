//! Unit tests for the shader generator

use super::*;
use crate::declaration::{InputAttribute, Member, StageOutput, UniformBlock};
use crate::shader::{FragmentShader, GeometryShader, VertexShader};

// ============================================================================
// BINDING TESTS
// ============================================================================

#[test]
fn test_generator_stages_declarations() {
    let mut shader = VertexShader::new("Staged");
    {
        let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
        generator
            .declare(InputAttribute::new(crate::keys::VertexAttributeType::Position))
            .unwrap();
        assert_eq!(generator.shader_name(), "Staged");
        assert!(generator.shader().is_declared::<InputAttribute>("sva_Vertex"));
        // Dropped without generation
    }

    assert!(!shader.is_declared::<InputAttribute>("sva_Vertex"));
    assert!(!shader.is_generated());
}

#[test]
fn test_generator_keeps_existing_declarations() {
    let mut shader = VertexShader::new("Existing");
    shader
        .declare(
            UniformBlock::new(2, 0, "Skinning")
                .with_member(Member::new(VariableType::Matrix4, "bones")),
        )
        .unwrap();

    let generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
    assert!(generator.shader().is_declared::<UniformBlock>("Skinning"));
    generator.generate_source_code().unwrap();

    assert!(shader.source_code().contains("uniform Skinning\n"));
}

#[test]
fn test_generator_config() {
    let mut shader = VertexShader::new("Config");
    let config = GeneratorConfig::instanced().with_billboarding();
    let generator = ShaderGenerator::new(&mut shader, config);
    assert!(generator.config().is_instanced());
    assert!(generator.config().billboarding);
    assert_eq!(generator.config().set_indexes.per_model, 1);
}

#[test]
fn test_material_uniform_block_uses_model_layer_set() {
    let mut shader = FragmentShader::new("Material");
    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
    let declared = generator
        .declare_material_uniform_block([
            Member::new(VariableType::FloatVector4, "diffuseColor"),
            Member::new(VariableType::Float, "shininess"),
        ])
        .unwrap();
    assert!(declared.is_added());
    generator.declare_default_output_fragment().unwrap();
    generator.add_output_instruction(format!(
        "ssv_OutputFragment = {};",
        material_uniform("diffuseColor")
    ));
    generator.generate_source_code().unwrap();

    let code = shader.source_code();
    assert!(code.contains("layout(set = 2, binding = 0, std140) uniform MaterialUniformBlock\n"));
    assert!(code.contains("} ubMaterial;\n"));
    assert!(code.contains("ssv_OutputFragment = ubMaterial.diffuseColor;"));
}

#[test]
fn test_material_uniform_block_without_members_is_invalid() {
    let mut shader = FragmentShader::new("Material");
    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
    let result = generator.declare_material_uniform_block(Vec::new());
    assert!(matches!(result, Err(Error::InvalidDeclaration(_))));
}

// ============================================================================
// REQUEST TESTS
// ============================================================================

#[test]
fn test_request_by_name() {
    let mut shader = VertexShader::new("Named");
    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());

    generator
        .request_synthesis_by_name("PositionViewSpace", VariableScope::Local)
        .unwrap();
    assert_eq!(generator.requests().len(), 1);

    let result = generator.request_synthesis_by_name("PositionClipSpace", VariableScope::Local);
    assert!(matches!(result, Err(Error::UnsupportedSyntheticVariable(_))));

    let result = generator.request_synthesis_by_name("ModelViewMatrix", VariableScope::Local);
    assert!(matches!(result, Err(Error::UnsupportedSyntheticVariable(_))));
    assert_eq!(generator.requests().len(), 1);
}

#[test]
fn test_shader_variable_lookups() {
    assert_eq!(
        ShaderGenerator::<VertexStage>::shader_variable_location(ShaderVariable::Color),
        Some(3)
    );
    assert_eq!(
        ShaderGenerator::<VertexStage>::shader_variable_location(
            ShaderVariable::PositionScreenSpace
        ),
        None
    );
    assert_eq!(
        ShaderGenerator::<VertexStage>::shader_variable_type(ShaderVariable::ViewTBNMatrix),
        VariableType::Matrix3
    );
}

// ============================================================================
// GENERATION TESTS
// ============================================================================

#[test]
fn test_screen_position_only() {
    let mut shader = VertexShader::new("Depth");
    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
    generator
        .request_synthesis(ShaderVariable::PositionScreenSpace, VariableScope::ToNextStage)
        .unwrap();
    generator.generate_source_code().unwrap();

    let code = shader.source_code();
    assert!(code.ends_with(
        "void main ()\n{\n\t/* Output instructions */\n\tgl_Position = pcMatrices.modelViewProjectionMatrix * vec4(sva_Vertex, 1.0);\n}\n"
    ));
    assert_eq!(code.matches("gl_Position").count(), 1);
    assert_eq!(shader.declarations::<InputAttribute>().len(), 1);
    assert!(shader.declarations::<StageOutput>().is_empty());
    assert_eq!(
        shader.vertex_attributes().iter().copied().collect::<Vec<_>>(),
        vec![crate::keys::VertexAttributeType::Position]
    );
    assert!(!shader.is_instancing_enabled());
}

#[test]
fn test_body_order() {
    let mut shader = VertexShader::new("Order");
    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::instanced());
    generator
        .request_synthesis(ShaderVariable::PositionViewSpace, VariableScope::Both)
        .unwrap();
    generator.add_top_instruction("const float callerTop = 1.0;");
    generator.add_instruction("float callerMain = callerTop;");
    generator.add_output_instruction("callerOutput();");
    generator.generate_source_code().unwrap();

    let code = shader.source_code();
    let lines = [
        "const mat4 ssv_ModelViewMatrix = ubView.viewMatrix * sva_ModelMatrix;",
        "ssv_PositionViewSpace = ssv_ModelViewMatrix * vec4(sva_Vertex, 1.0);",
        "const float callerTop = 1.0;",
        "float callerMain = callerTop;",
        "callerOutput();",
    ];
    let positions = lines
        .iter()
        .map(|line| code.find(line).unwrap())
        .collect::<Vec<_>>();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    assert!(code.contains("layout(location = 1) smooth out vec4 ssv_PositionViewSpace;\n"));
    assert!(shader.is_instancing_enabled());
}

#[test]
fn test_failed_generation_leaves_target_untouched() {
    let mut shader = GeometryShader::new("Broken");

    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
    generator
        .declare(StageOutput::new(0, VariableType::FloatVector4, "color"))
        .unwrap();
    generator.add_instruction("float broken = 1.0;");
    let result = generator.generate_source_code();

    assert!(matches!(result, Err(Error::GenerationFailed(_))));
    assert!(!shader.is_generated());
    assert_eq!(shader.hash(), 0);
    assert!(shader.declarations::<StageOutput>().is_empty());
    assert!(shader.instructions().is_empty());
}

// ============================================================================
// SECOND PASS TESTS
// ============================================================================

fn caller_pass(shader: &mut VertexShader) -> Result<()> {
    let mut generator = ShaderGenerator::new(shader, GeneratorConfig::default());
    generator.add_instruction("float callerMain = 1.0;");
    generator.request_synthesis(ShaderVariable::PositionScreenSpace, VariableScope::ToNextStage)?;
    generator.generate_source_code()
}

#[test]
fn test_second_pass_on_generated_shader_fails() {
    let mut shader = VertexShader::new("TwoPasses");
    caller_pass(&mut shader).unwrap();
    let code = shader.source_code().to_string();
    let hash = shader.hash();

    let result = caller_pass(&mut shader);

    assert!(matches!(result, Err(Error::GenerationFailed(_))));
    assert_eq!(shader.source_code(), code);
    assert_eq!(shader.hash(), hash);
    assert_eq!(shader.source_code().matches("float callerMain = 1.0;").count(), 1);
    assert_eq!(shader.instructions().instructions().len(), 1);
}

#[test]
fn test_second_pass_after_reset_source() {
    let mut shader = VertexShader::new("TwoPasses");
    caller_pass(&mut shader).unwrap();
    let hash = shader.hash();

    shader.reset_source();
    assert!(!shader.is_generated());
    assert!(shader.instructions().is_empty());

    caller_pass(&mut shader).unwrap();

    assert_eq!(shader.source_code().matches("float callerMain = 1.0;").count(), 1);
    assert_eq!(shader.source_code().matches("gl_Position = ").count(), 1);
    assert_eq!(shader.hash(), hash);
}

#[test]
fn test_generation_is_deterministic() {
    let generate = || {
        let mut shader = VertexShader::new("Deterministic");
        let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
        generator
            .request_synthesis(ShaderVariable::PositionTextureSpace, VariableScope::ToNextStage)
            .unwrap();
        generator
            .request_synthesis(ShaderVariable::Color, VariableScope::ToNextStage)
            .unwrap();
        generator.generate_source_code().unwrap();
        shader
    };

    let first = generate();
    let second = generate();
    assert_eq!(first.source_code(), second.source_code());
    assert_eq!(first.hash(), second.hash());
}

// ============================================================================
// FRAGMENT TESTS
// ============================================================================

#[test]
fn test_default_output_fragment() {
    let mut shader = FragmentShader::new("Unlit");
    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
    assert!(generator.declare_default_output_fragment().unwrap().is_added());
    assert!(!generator.declare_default_output_fragment().unwrap().is_added());
    generator.add_instruction("ssv_OutputFragment = vec4(1.0);");
    generator.set_extension_behavior("GL_EXT_nonuniform_qualifier", ExtensionBehavior::Enable);
    assert!(generator.declaration_stats().contains(" - Output fragments : 1\n"));
    generator.generate_source_code().unwrap();

    assert!(shader
        .source_code()
        .contains("layout(location = 0) out vec4 ssv_OutputFragment;\n"));
    assert!(shader
        .source_code()
        .contains("#extension GL_EXT_nonuniform_qualifier : enable\n"));
    assert_eq!(shader.fragment_outputs(), ["ssv_OutputFragment"]);
}
