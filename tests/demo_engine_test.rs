use llm_patterns::utils::validation::Validate;
use llm_patterns::{DemoConfig, DemoEngine, Pattern, PatternError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_config_reproduces_sample_output() {
    let engine = DemoEngine::new(DemoConfig::default());
    let reports = engine.run(&Pattern::ALL).unwrap();

    let names: Vec<&str> = reports.iter().map(|r| r.pattern.as_str()).collect();
    assert_eq!(names, vec!["adapter", "builder", "observer", "strategy"]);

    assert_eq!(
        reports[0].lines,
        vec![
            "OpenAI response to: What is Python?",
            "HuggingFace response to: What is Python?"
        ]
    );
    assert!(reports[1].lines[0].starts_with("Few-shot Query: Query(prompt=\"Input: What is Python?"));
    assert_eq!(reports[2].lines.len(), 3);
    assert!(reports[2].lines[0].starts_with("Logger:"));
    assert!(reports[2].lines[2].starts_with("UI:"));
    assert_eq!(
        reports[3].lines[1],
        "Generated response based on: [\"Document 2: Advanced Python Design Patterns.\"]"
    );
}

#[test]
fn test_config_file_overrides_samples() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[adapter]
prompt = "What is Rust?"

[[adapter.models]]
provider = "openai"
model_name = "gpt-4o-mini"
method = "query"

[builder.no_shot]
prompt = "Say hi"
temperature = 2.5
max_tokens = -4

[observer]
outputs = ["one", "two", "three"]
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let config = DemoConfig::from_file(temp_file.path()).unwrap();
    config.validate().unwrap();

    let reports = DemoEngine::new(config)
        .run(&[Pattern::Adapter, Pattern::Builder, Pattern::Observer])
        .unwrap();

    assert_eq!(reports[0].lines, vec!["OpenAI response to: What is Rust?"]);
    assert_eq!(
        reports[1].lines[1],
        "No-shot Query: Query(prompt=\"Say hi\", temperature=2.5, max_tokens=-4)"
    );
    assert_eq!(
        reports[2].lines,
        vec![
            "Logger: Saving LLM output to logs: one",
            "UI: Displaying LLM output to the user: one",
            "UI: Displaying LLM output to the user: two",
            "UI: Displaying LLM output to the user: three",
        ]
    );
}

#[test]
fn test_unsupported_method_fails_adapter_demo() {
    let config = DemoConfig::from_toml_str(
        r#"
[[adapter.models]]
provider = "huggingface"
model_name = "Mistral7b"
quantization_method = "bitsandbytes"
method = "query"
"#,
    )
    .unwrap();
    assert!(config.validate().is_ok());

    let engine = DemoEngine::new(config);
    let err = engine.run(&[Pattern::Adapter]).unwrap_err();
    assert!(matches!(err, PatternError::MissingCapability { .. }));
    assert!(err.recovery_suggestion().contains("generate"));
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = DemoConfig::from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(PatternError::IoError(_))));
}

#[test]
fn test_reports_serialize_to_json() {
    let reports = DemoEngine::new(DemoConfig::default())
        .run(&[Pattern::Strategy])
        .unwrap();
    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["pattern"], "strategy");
    assert_eq!(json[0]["lines"].as_array().unwrap().len(), 2);
}
