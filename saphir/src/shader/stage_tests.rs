//! Unit tests for stage.rs

use super::*;

// ============================================================================
// CAPABILITY TABLE TESTS
// ============================================================================

#[test]
fn test_every_stage_accepts_common_kinds() {
    for stage in ShaderStage::ALL {
        assert!(stage.accepts(DeclarationKind::UniformBlock), "{}", stage);
        assert!(stage.accepts(DeclarationKind::Sampler), "{}", stage);
        assert!(stage.accepts(DeclarationKind::Function), "{}", stage);
        assert!(stage.accepts(DeclarationKind::SpecializationConstant), "{}", stage);
    }
}

#[test]
fn test_vertex_capabilities() {
    let stage = ShaderStage::Vertex;
    assert!(stage.accepts(DeclarationKind::InputAttribute));
    assert!(stage.accepts(DeclarationKind::StageOutput));
    assert!(stage.accepts(DeclarationKind::OutputBlock));
    assert!(!stage.accepts(DeclarationKind::StageInput));
    assert!(!stage.accepts(DeclarationKind::OutputFragment));
}

#[test]
fn test_fragment_capabilities() {
    let stage = ShaderStage::Fragment;
    assert!(stage.accepts(DeclarationKind::StageInput));
    assert!(stage.accepts(DeclarationKind::InputBlock));
    assert!(stage.accepts(DeclarationKind::OutputFragment));
    assert!(!stage.accepts(DeclarationKind::InputAttribute));
    assert!(!stage.accepts(DeclarationKind::StageOutput));
}

#[test]
fn test_primitive_stage_capabilities() {
    for stage in [
        ShaderStage::TesselationControl,
        ShaderStage::TesselationEvaluation,
        ShaderStage::Geometry,
    ] {
        assert!(stage.accepts(DeclarationKind::InputPrimitive));
        assert!(stage.accepts(DeclarationKind::OutputPrimitive));
        assert!(stage.accepts(DeclarationKind::StageInput));
        assert!(stage.accepts(DeclarationKind::OutputBlock));
        assert!(!stage.accepts(DeclarationKind::InputAttribute));
        assert!(!stage.accepts(DeclarationKind::OutputFragment));
    }
}

#[test]
fn test_compute_accepts_only_common_kinds() {
    assert_eq!(
        ShaderStage::Compute.accepted_declarations(),
        DeclarationKinds::COMMON
    );
}

// ============================================================================
// WIRING RULE TESTS
// ============================================================================

#[test]
fn test_can_feed() {
    assert!(ShaderStage::Vertex.can_feed(ShaderStage::Fragment));
    assert!(ShaderStage::Vertex.can_feed(ShaderStage::Geometry));
    assert!(ShaderStage::Vertex.can_feed(ShaderStage::TesselationControl));
    assert!(ShaderStage::TesselationControl.can_feed(ShaderStage::TesselationEvaluation));
    assert!(ShaderStage::TesselationEvaluation.can_feed(ShaderStage::Geometry));
    assert!(ShaderStage::Geometry.can_feed(ShaderStage::Fragment));

    assert!(!ShaderStage::Fragment.can_feed(ShaderStage::Vertex));
    assert!(!ShaderStage::Vertex.can_feed(ShaderStage::TesselationEvaluation));
    assert!(!ShaderStage::Vertex.can_feed(ShaderStage::Compute));
    assert!(!ShaderStage::Compute.can_feed(ShaderStage::Fragment));
}

#[test]
fn test_unsized_inputs() {
    assert!(ShaderStage::Geometry.accepts_unsized_inputs());
    assert!(ShaderStage::TesselationControl.accepts_unsized_inputs());
    assert!(!ShaderStage::Fragment.accepts_unsized_inputs());
}

// ============================================================================
// ORDER AND LABEL TESTS
// ============================================================================

#[test]
fn test_graphics_order() {
    assert!(ShaderStage::Vertex < ShaderStage::TesselationControl);
    assert!(ShaderStage::TesselationEvaluation < ShaderStage::Geometry);
    assert!(ShaderStage::Geometry < ShaderStage::Fragment);
    assert!(!ShaderStage::Compute.is_graphics());
    assert!(ShaderStage::Fragment.is_graphics());
}

#[test]
fn test_labels() {
    assert_eq!(ShaderStage::Vertex.to_string(), "Vertex shader");
    assert_eq!(ShaderStage::Compute.label(), "Compute shader");
}
