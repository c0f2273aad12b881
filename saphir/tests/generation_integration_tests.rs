//! Integration tests for shader generation
//!
//! Build complete programs through the public API and check the produced
//! GLSL text.
//!
//! Run with: cargo test --test generation_integration_tests

use saphir::{
    ArraySize, CodeGenerator, ComputeShader, Error, FragmentShader, Function, GeneratorConfig,
    InputAttribute, Member, Parameter, PushConstantBlock, Sampler, ShaderGenerator,
    ShaderStorageBlock, ShaderVariable, SpecializationConstant, StageOutput, Structure,
    UniformBlock, VariableScope, VariableType, VertexAttributeType, VertexShader,
};

// ============================================================================
// VERTEX GENERATION TESTS
// ============================================================================

#[test]
fn test_integration_minimal_vertex_shader() {
    let mut shader = VertexShader::new("Shadow");
    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
    generator
        .request_synthesis(ShaderVariable::PositionScreenSpace, VariableScope::ToNextStage)
        .unwrap();
    generator.generate_source_code().unwrap();

    let code = shader.source_code();
    assert!(code.starts_with("#version 460 core\n\n/* Vertex shader : Shadow */\n\n"));
    assert!(code.contains(
        "/* Push constant blocks */\n\
         layout(push_constant) uniform MatricesPushConstant\n\
         {\n\
         \tmat4 modelViewProjectionMatrix;\n\
         } pcMatrices;\n"
    ));
    assert!(code.contains(
        "/* Input vertex attributes */\nlayout(location = 0) in vec3 sva_Vertex;\n\n"
    ));
    assert!(code.contains("/* No Stage outputs (To next stage) */\n"));
    assert!(code.contains(
        "\t/* Output instructions */\n\tgl_Position = pcMatrices.modelViewProjectionMatrix * vec4(sva_Vertex, 1.0);\n"
    ));

    assert_eq!(shader.declarations::<InputAttribute>().len(), 1);
    assert!(shader.declarations::<StageOutput>().is_empty());
}

#[test]
fn test_integration_lit_vertex_shader() {
    let mut shader = VertexShader::new("Lit");
    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
    for variable in [
        ShaderVariable::PositionScreenSpace,
        ShaderVariable::PositionWorldSpace,
        ShaderVariable::NormalWorldSpace,
        ShaderVariable::Primary2DTextureCoordinates,
    ] {
        generator
            .request_synthesis(variable, VariableScope::ToNextStage)
            .unwrap();
    }
    generator.generate_source_code().unwrap();

    let outputs = shader
        .declarations::<StageOutput>()
        .iter()
        .map(|output| (output.location(), output.variable_type().to_string()))
        .collect::<Vec<_>>();
    assert_eq!(
        outputs,
        vec![
            (0, "vec4".to_string()),
            (12, "vec3".to_string()),
            (4, "vec2".to_string()),
        ]
    );

    // One model block even if three routines need it
    assert_eq!(shader.uniform_blocks(), vec!["ModelUniformBlock"]);
    assert_eq!(
        shader.vertex_attributes().iter().copied().collect::<Vec<_>>(),
        vec![
            VertexAttributeType::Position,
            VertexAttributeType::Normal,
            VertexAttributeType::Primary2DTextureCoordinates,
        ]
    );
}

#[test]
fn test_integration_instanced_memoization() {
    let mut shader = VertexShader::new("Forest");
    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::instanced());
    generator
        .request_synthesis(ShaderVariable::PositionViewSpace, VariableScope::ToNextStage)
        .unwrap();
    generator
        .request_synthesis(ShaderVariable::NormalViewSpace, VariableScope::ToNextStage)
        .unwrap();
    generator
        .request_synthesis(ShaderVariable::TangentViewSpace, VariableScope::Local)
        .unwrap();
    generator.generate_source_code().unwrap();

    let code = shader.source_code();
    assert_eq!(code.matches("const mat4 ssv_ModelViewMatrix = ").count(), 1);
    assert_eq!(code.matches("const mat3 ssv_NormalMatrix = ").count(), 1);
    assert!(code.contains("layout(location = 9) in mat4 sva_ModelMatrix;\n"));
    assert!(shader.is_instancing_enabled());
    assert!(shader
        .vertex_attributes()
        .contains(&VertexAttributeType::ModelMatrixR3));
}

#[test]
fn test_integration_request_twice_is_idempotent() {
    let build = |twice: bool| {
        let mut shader = VertexShader::new("Twice");
        let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
        generator
            .request_synthesis(ShaderVariable::Color, VariableScope::ToNextStage)
            .unwrap();
        if twice {
            generator
                .request_synthesis(ShaderVariable::Color, VariableScope::ToNextStage)
                .unwrap();
        }
        generator.generate_source_code().unwrap();
        shader
    };

    assert_eq!(build(false).hash(), build(true).hash());
}

#[test]
fn test_integration_scope_promotion_to_both() {
    let mut shader = VertexShader::new("Both");
    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
    generator
        .request_synthesis(ShaderVariable::Color, VariableScope::Local)
        .unwrap();
    generator
        .request_synthesis(ShaderVariable::Color, VariableScope::ToNextStage)
        .unwrap();
    assert_eq!(
        generator.requests().get(ShaderVariable::Color).unwrap().scope(),
        VariableScope::Both
    );
    generator.add_instruction("vec4 tinted = ssv_Color * 0.5;");
    generator.generate_source_code().unwrap();

    let code = shader.source_code();
    assert!(code.contains("layout(location = 3) smooth out vec4 ssv_Color;\n"));
    let assignment = code.find("\tssv_Color = sva_Color;\n").unwrap();
    let usage = code.find("vec4 tinted").unwrap();
    assert!(assignment < usage);
}

// ============================================================================
// COMMON DECLARATION TESTS
// ============================================================================

#[test]
fn test_integration_fragment_with_every_common_section() {
    let mut shader = FragmentShader::new("Everything");
    shader
        .declare(SpecializationConstant::new(0, VariableType::UnsignedInteger, "lightCount", "8"))
        .unwrap();
    shader
        .declare(
            Structure::new("Light")
                .with_member(Member::new(VariableType::FloatVector4, "position"))
                .with_member(Member::new(VariableType::FloatVector4, "color")),
        )
        .unwrap();
    shader
        .declare(
            UniformBlock::new(2, 0, "MaterialUniformBlock")
                .with_instance_name("ubMaterial")
                .with_member(Member::new(VariableType::FloatVector4, "albedo")),
        )
        .unwrap();
    shader
        .declare(
            ShaderStorageBlock::new(3, 0, "LightBlock")
                .read_only()
                .with_instance_name("sbLights")
                .with_member(
                    Member::new(VariableType::Structure("Light".to_string()), "lights")
                        .with_array_size(ArraySize::Unsized),
                ),
        )
        .unwrap();
    shader
        .declare(Sampler::new(2, 1, VariableType::Sampler2D, "albedoMap"))
        .unwrap();
    shader
        .declare(
            PushConstantBlock::new("Tint")
                .with_instance_name("pcTint")
                .with_member(Member::new(VariableType::FloatVector4, "tint")),
        )
        .unwrap();

    let mut function = Function::new(VariableType::FloatVector4, "shade")
        .with_parameter(Parameter::new(VariableType::FloatVector4, "albedo"));
    function.add_instruction("return albedo * pcTint.tint;");
    shader.declare(function).unwrap();

    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
    generator.declare_default_output_fragment().unwrap();
    generator.add_instruction("ssv_OutputFragment = shade(ubMaterial.albedo);");
    generator.generate_source_code().unwrap();

    let code = shader.source_code();
    assert!(code.contains("layout(constant_id = 0) const uint lightCount = 8;\n"));
    assert!(code.contains("struct Light\n{\n\tvec4 position;\n\tvec4 color;\n};\n"));
    assert!(code.contains(
        "layout(set = 3, binding = 0, std430) readonly buffer LightBlock\n{\n\tLight lights[];\n} sbLights;\n"
    ));
    assert!(code.contains("layout(set = 2, binding = 1) uniform sampler2D albedoMap;\n"));
    assert!(code.contains("vec4 shade (vec4 albedo)\n{\n"));
    assert!(code.contains("/* No Texel buffers */\n"));
    assert_eq!(shader.uniforms(), vec!["albedoMap"]);
    assert_eq!(shader.shader_storage_blocks(), vec!["LightBlock"]);
}

// ============================================================================
// COMPUTE TESTS
// ============================================================================

#[test]
fn test_integration_compute_shader() {
    let mut shader = ComputeShader::with_local_size("Cull", 64, 1, 1);
    shader
        .declare(
            ShaderStorageBlock::new(0, 0, "Instances")
                .with_instance_name("sbInstances")
                .with_member(
                    Member::new(VariableType::Matrix4, "models")
                        .with_array_size(ArraySize::Unsized),
                ),
        )
        .unwrap();

    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
    generator.add_instruction("uint index = gl_GlobalInvocationID.x;");
    generator.generate_source_code().unwrap();

    let code = shader.source_code();
    assert!(code.contains("/* Compute shader : Cull */"));
    assert!(code.contains("layout(local_size_x = 64, local_size_y = 1, local_size_z = 1) in;\n"));
}

#[test]
fn test_integration_compute_zero_workgroup_fails() {
    let mut shader = ComputeShader::with_local_size("Broken", 0, 1, 1);
    let generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
    assert!(matches!(
        generator.generate_source_code(),
        Err(Error::GenerationFailed(_))
    ));
    assert!(!shader.is_generated());
}
