//! Integration tests for the Saphir logging facade
//!
//! These tests install a capturing logger and check what shaders and
//! generators report.
//!
//! Run with: cargo test --test logging_integration_tests

use saphir::log::{LogEntry, LogSeverity, Logger};
use saphir::{
    CodeGenerator, Error, FragmentShader, GeneratorConfig, OutputFragment, Saphir,
    ShaderGenerator, ShaderVariable, VariableScope, VariableType, VertexShader,
};
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// FACADE TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    Saphir::set_logger(test_logger);

    Saphir::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Saphir::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());
    Saphir::log_detailed(
        LogSeverity::Error,
        "test::module",
        "Test error message".to_string(),
        "shader.rs",
        42,
    );

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 3);

        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "test::module");
        assert_eq!(captured[0].message, "Test info message");
        assert!(captured[0].file.is_none());

        assert_eq!(captured[1].severity, LogSeverity::Warn);

        assert_eq!(captured[2].severity, LogSeverity::Error);
        assert_eq!(captured[2].file, Some("shader.rs"));
        assert_eq!(captured[2].line, Some(42));
    }

    Saphir::reset_logger();
}

#[test]
#[serial]
fn test_integration_reset_logger() {
    let (test_logger, entries) = TestLogger::new();
    Saphir::set_logger(test_logger);
    Saphir::reset_logger();

    Saphir::log(LogSeverity::Info, "test::module", "After reset".to_string());

    assert!(entries.lock().unwrap().is_empty());
}

// ============================================================================
// SHADER LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_duplicate_declaration_warns() {
    let (test_logger, entries) = TestLogger::new();
    Saphir::set_logger(test_logger);

    let mut shader = FragmentShader::new("Dedup");
    shader
        .declare(OutputFragment::new(0, VariableType::FloatVector4, "outColor"))
        .unwrap();
    shader
        .declare(OutputFragment::new(1, VariableType::FloatVector4, "outColor"))
        .unwrap();

    {
        let captured = entries.lock().unwrap();
        let warnings = captured
            .iter()
            .filter(|entry| entry.severity == LogSeverity::Warn)
            .collect::<Vec<_>>();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].source, "saphir::Shader");
        assert!(warnings[0].message.contains("outColor"));
    }

    Saphir::reset_logger();
}

#[test]
#[serial]
fn test_integration_errors_are_logged_before_returning() {
    let (test_logger, entries) = TestLogger::new();
    Saphir::set_logger(test_logger);

    let mut shader = VertexShader::new("Unsupported");
    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
    let result = generator.request_synthesis(ShaderVariable::NormalMatrix, VariableScope::Local);
    assert!(matches!(result, Err(Error::UnsupportedSyntheticVariable(_))));

    {
        let captured = entries.lock().unwrap();
        let error = captured
            .iter()
            .find(|entry| entry.severity == LogSeverity::Error)
            .unwrap();
        assert_eq!(error.source, "saphir::ShaderGenerator");
        assert!(error.message.contains("NormalMatrix"));
        assert!(error.file.is_some());
        assert!(error.line.is_some());
    }

    Saphir::reset_logger();
}

#[test]
#[serial]
fn test_integration_generation_reports_info() {
    let (test_logger, entries) = TestLogger::new();
    Saphir::set_logger(test_logger);

    let mut shader = VertexShader::new("Reported");
    let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
    generator
        .request_synthesis(ShaderVariable::PositionScreenSpace, VariableScope::ToNextStage)
        .unwrap();
    generator.add_comment("Reported body");
    generator.generate_source_code().unwrap();

    {
        let captured = entries.lock().unwrap();
        assert!(captured.iter().any(|entry| {
            entry.severity == LogSeverity::Info
                && entry.source == "saphir::ShaderGenerator"
                && entry.message.contains("'Reported' generated")
        }));
    }

    Saphir::reset_logger();
}
