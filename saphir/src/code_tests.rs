//! Unit tests for code.rs

use super::*;

// ============================================================================
// INSTRUCTION BUFFER TESTS
// ============================================================================

#[test]
fn test_instruction_lists_are_separate() {
    let mut buffer = InstructionBuffer::new();
    assert!(buffer.is_empty());

    buffer.add_top_instruction("const float a = 1.0;");
    buffer.add_instruction("float b = a * 2.0;");
    buffer.add_output_instruction("outValue = b;");

    assert_eq!(buffer.top_instructions(), ["const float a = 1.0;"]);
    assert_eq!(buffer.instructions(), ["float b = a * 2.0;"]);
    assert_eq!(buffer.output_instructions(), ["outValue = b;"]);
    assert!(!buffer.is_empty());
}

#[test]
fn test_instructions_keep_duplicates_and_order() {
    let mut buffer = InstructionBuffer::new();
    buffer.add_instruction("x += 1;");
    buffer.add_instruction("y += 1;");
    buffer.add_instruction("x += 1;");
    assert_eq!(buffer.instructions(), ["x += 1;", "y += 1;", "x += 1;"]);
}

#[test]
fn test_clear_empties_every_list() {
    let mut buffer = InstructionBuffer::new();
    buffer.add_top_instruction("const float a = 1.0;");
    buffer.add_instruction("x += a;");
    buffer.add_output_instruction("gl_Position = vec4(x);");

    buffer.clear();

    assert!(buffer.is_empty());
    assert_eq!(buffer.assemble(&[], &[]), "");
}

#[test]
fn test_comments() {
    let mut buffer = InstructionBuffer::new();
    buffer.add_comment("Lighting");
    buffer.add_comment_at("Inner loop", 3);
    buffer.add_comment_at("Depth zero", 0);

    assert_eq!(
        buffer.instructions(),
        ["/* Lighting */", "\t\t/* Inner loop */", "/* Depth zero */"]
    );
}

// ============================================================================
// ASSEMBLY TESTS
// ============================================================================

#[test]
fn test_assemble_empty() {
    let buffer = InstructionBuffer::new();
    assert_eq!(buffer.assemble(&[], &[]), "");
}

#[test]
fn test_assemble_sections() {
    let mut buffer = InstructionBuffer::new();
    buffer.add_top_instruction("const vec4 c = vec4(1.0);");
    buffer.add_instruction("vec4 d = c * 0.5;");
    buffer.add_output_instruction("outColor = d;");

    assert_eq!(
        buffer.assemble(&[], &[]),
        "\t/* Preparation instructions */\n\
         \tconst vec4 c = vec4(1.0);\n\
         \n\
         \t/* Main instructions */\n\
         \tvec4 d = c * 0.5;\n\
         \n\
         \t/* Output instructions */\n\
         \toutColor = d;\n"
    );
}

#[test]
fn test_assemble_prepends_before_caller_lines() {
    let mut buffer = InstructionBuffer::new();
    buffer.add_top_instruction("caller top;");
    buffer.add_output_instruction("caller output;");

    let code = buffer.assemble(&["prepared;".to_string()], &["synthesized;".to_string()]);

    assert_eq!(
        code,
        "\t/* Preparation instructions */\n\
         \tprepared;\n\
         \tcaller top;\n\
         \n\
         \t/* Output instructions */\n\
         \tsynthesized;\n\
         \tcaller output;\n"
    );
}

#[test]
fn test_assemble_indents_multiline_instructions() {
    let mut buffer = InstructionBuffer::new();
    buffer.add_instruction("if (x > 0.0)\n{\n\tx = 0.0;\n}");

    assert_eq!(
        buffer.assemble(&[], &[]),
        "\t/* Main instructions */\n\tif (x > 0.0)\n\t{\n\t\tx = 0.0;\n\t}\n"
    );
}

// ============================================================================
// CODE GENERATOR TRAIT TESTS
// ============================================================================

#[derive(Default)]
struct Body {
    instructions: InstructionBuffer,
}

impl CodeGenerator for Body {
    fn instructions(&self) -> &InstructionBuffer {
        &self.instructions
    }

    fn instructions_mut(&mut self) -> &mut InstructionBuffer {
        &mut self.instructions
    }
}

#[test]
fn test_code_generator_default_methods() {
    let mut body = Body::default();
    body.add_top_instruction("top;");
    body.add_instruction("main;");
    body.add_output_instruction("output;");
    body.add_comment("note");

    assert_eq!(body.instructions().top_instructions(), ["top;"]);
    assert_eq!(body.instructions().instructions(), ["main;", "/* note */"]);
    assert_eq!(body.instructions().output_instructions(), ["output;"]);
}
