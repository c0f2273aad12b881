//! Instruction buffer
//!
//! Shader `main()` bodies and function bodies are built from three
//! append-only instruction lists:
//! - top: preparations and local variables,
//! - main: the caller's computations,
//! - output: writes to stage outputs and `gl_Position`.
//!
//! Lists are never reordered nor deduplicated. Assembly renders each
//! non-empty list under a comment header, one tab-indented line per
//! instruction line.

/// Three ordered instruction lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionBuffer {
    top: Vec<String>,
    main: Vec<String>,
    output: Vec<String>,
}

impl InstructionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_top_instruction(&mut self, instruction: impl Into<String>) {
        self.top.push(instruction.into());
    }

    pub fn add_instruction(&mut self, instruction: impl Into<String>) {
        self.main.push(instruction.into());
    }

    pub fn add_output_instruction(&mut self, instruction: impl Into<String>) {
        self.output.push(instruction.into());
    }

    /// Append a comment to the main list at body level
    pub fn add_comment(&mut self, comment: &str) {
        self.add_comment_at(comment, 1);
    }

    /// Append a comment to the main list at the given indentation depth
    ///
    /// Depth 1 is the body level; deeper levels add one tab each.
    pub fn add_comment_at(&mut self, comment: &str, depth: usize) {
        let indent = "\t".repeat(depth.saturating_sub(1));
        self.main.push(format!("{}/* {} */", indent, comment));
    }

    pub fn top_instructions(&self) -> &[String] {
        &self.top
    }

    pub fn instructions(&self) -> &[String] {
        &self.main
    }

    pub fn output_instructions(&self) -> &[String] {
        &self.output
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.main.is_empty() && self.output.is_empty()
    }

    /// Drop every instruction of the three lists
    pub fn clear(&mut self) {
        self.top.clear();
        self.main.clear();
        self.output.clear();
    }

    /// Render the body
    ///
    /// # Arguments
    ///
    /// * `prepend_top` - Lines placed before the top list (preparations, synthesized locals)
    /// * `prepend_output` - Lines placed before the output list (synthesized outputs)
    pub fn assemble(&self, prepend_top: &[String], prepend_output: &[String]) -> String {
        let sections: [(&str, Vec<&String>); 3] = [
            (
                "Preparation instructions",
                prepend_top.iter().chain(self.top.iter()).collect(),
            ),
            ("Main instructions", self.main.iter().collect()),
            (
                "Output instructions",
                prepend_output.iter().chain(self.output.iter()).collect(),
            ),
        ];

        let mut code = String::new();
        for (title, lines) in sections {
            if lines.is_empty() {
                continue;
            }

            if !code.is_empty() {
                code.push('\n');
            }

            code.push_str(&format!("\t/* {} */\n", title));
            for line in lines {
                for sub_line in line.lines() {
                    if !sub_line.is_empty() {
                        code.push('\t');
                        code.push_str(sub_line);
                    }
                    code.push('\n');
                }
            }
        }

        code
    }
}

/// Anything that owns an instruction buffer
///
/// Implemented by shaders, functions and shader generators so material
/// code writes instructions the same way everywhere.
pub trait CodeGenerator {
    fn instructions(&self) -> &InstructionBuffer;

    fn instructions_mut(&mut self) -> &mut InstructionBuffer;

    fn add_top_instruction(&mut self, instruction: impl Into<String>) {
        self.instructions_mut().add_top_instruction(instruction);
    }

    fn add_instruction(&mut self, instruction: impl Into<String>) {
        self.instructions_mut().add_instruction(instruction);
    }

    fn add_output_instruction(&mut self, instruction: impl Into<String>) {
        self.instructions_mut().add_output_instruction(instruction);
    }

    fn add_comment(&mut self, comment: &str) {
        self.instructions_mut().add_comment(comment);
    }

    fn add_comment_at(&mut self, comment: &str, depth: usize) {
        self.instructions_mut().add_comment_at(comment, depth);
    }
}

#[cfg(test)]
#[path = "code_tests.rs"]
mod tests;
