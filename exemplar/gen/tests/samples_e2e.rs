//! End-to-end tests: a code model loaded from JSON through to sample text and files.

use std::fs;

use exemplar_define::CodeModel;
use exemplar_gen::codegen::{SampleAssembler, SampleMode};
use exemplar_gen::config::GeneratorSettings;
use exemplar_gen::diagnostics::{CollectingSink, DiagnosticKind};
use exemplar_gen::errors::GeneratorError;
use exemplar_gen::output::generate_samples;
use tempfile::TempDir;

const WIDGET_MODEL: &str = r#"{
  "name": "WidgetClient",
  "family": "typeScript",
  "modelTypes": [
    {
      "className": "Widget",
      "properties": [
        {
          "name": "name",
          "serializedName": "name",
          "modelType": { "type": "primitive", "kind": "string" },
          "required": true
        },
        {
          "name": "tags",
          "serializedName": "tags",
          "modelType": {
            "type": "sequence",
            "element": { "type": "primitive", "kind": "string" }
          }
        }
      ]
    }
  ],
  "operationGroups": [
    {
      "name": "",
      "operations": [
        {
          "name": "putWidget",
          "parameters": [
            {
              "name": "widgetBody",
              "serializedName": "widgetBody",
              "modelType": { "type": "composite", "name": "Widget" },
              "required": true
            }
          ],
          "returnType": { "body": "Widget" },
          "examples": [
            { "name": "Named", "parameters": { "widgetBody": { "name": "acme" } } },
            { "name": "Empty", "parameters": { "widgetBody": {} } },
            { "name": "Absent", "parameters": { "somethingElse": 1 } },
            { "name": "Tagged", "parameters": { "widgetBody": { "tags": ["a"], "name": "b" } } }
          ]
        }
      ]
    },
    {
      "name": "settings",
      "operations": [
        {
          "name": "update",
          "parameters": [
            {
              "name": "p",
              "serializedName": "p",
              "modelType": { "type": "primitive", "kind": "int" },
              "required": true
            }
          ],
          "transformations": [{ "flattenedName": "p", "originalName": "orig" }],
          "examples": [{ "name": "Flattened", "parameters": { "orig": { "p": 42 } } }]
        }
      ]
    }
  ]
}"#;

fn load_model() -> CodeModel {
    CodeModel::from_json(WIDGET_MODEL).unwrap()
}

fn sample(model: &CodeModel, sink: &CollectingSink, group: usize, example: &str) -> Option<String> {
    let settings = GeneratorSettings::default();
    let assembler = SampleAssembler::new(model, &settings, sink);
    let group = &model.operation_groups[group];
    let operation = &group.operations[0];
    let example = operation
        .examples
        .iter()
        .find(|e| e.name == example)
        .unwrap();
    assembler.core_statements(operation, group, example)
}

#[test]
fn present_name_declares_typed_widget_without_tags() {
    let model = load_model();
    let sink = CollectingSink::new();

    let text = sample(&model, &sink, 0, "Named").unwrap();

    assert_eq!(
        text,
        "const widgetBody: WidgetModels.Widget = {\n  name: \"acme\"\n};\n\nconst widget = await client.putWidget(widgetBody);\nconsole.log(widget);\n"
    );
    assert!(!text.contains("tags"));
    assert!(sink.is_empty());
}

#[test]
fn empty_body_reports_missing_name_and_emits_empty_literal() {
    let model = load_model();
    let sink = CollectingSink::new();

    let text = sample(&model, &sink, 0, "Empty").unwrap();

    assert!(text.starts_with("const widgetBody: WidgetModels.Widget = {};\n"));
    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    match &diagnostics[0].kind {
        DiagnosticKind::MissingRequiredField {
            class_name,
            property,
        } => {
            assert_eq!(class_name, "Widget");
            assert_eq!(property, "name");
        }
        other => panic!("Expected MissingRequiredField, got: {:?}", other),
    }
}

#[test]
fn absent_body_suppresses_sample() {
    let model = load_model();
    let sink = CollectingSink::new();

    assert!(sample(&model, &sink, 0, "Absent").is_none());

    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        diagnostics[0].kind,
        DiagnosticKind::MissingRequiredParameter { .. }
    ));
}

#[test]
fn properties_follow_declared_order_not_json_order() {
    let model = load_model();
    let sink = CollectingSink::new();

    let text = sample(&model, &sink, 0, "Tagged").unwrap();

    let name_at = text.find("name: \"b\"").unwrap();
    let tags_at = text.find("tags: [").unwrap();
    assert!(name_at < tags_at);
}

#[test]
fn flattened_parameter_is_found_through_original() {
    let model = load_model();
    let sink = CollectingSink::new();

    let text = sample(&model, &sink, 1, "Flattened").unwrap();

    assert!(text.starts_with("const p = 42;\n"));
    assert!(text.contains("await client.settings.update(p);"));
}

#[test]
fn suppressed_example_leaves_siblings_intact() {
    let model = load_model();
    let settings = GeneratorSettings::default();
    let sink = CollectingSink::new();
    let assembler = SampleAssembler::new(&model, &settings, &sink);
    let group = &model.operation_groups[0];
    let operation = &group.operations[0];

    let emitted: Vec<_> = operation
        .examples
        .iter()
        .map(|example| {
            assembler
                .assemble(SampleMode::Inline, operation, group, example)
                .is_some()
        })
        .collect();

    assert_eq!(emitted, vec![true, true, false, true]);
}

#[test]
fn generated_program_batches_surviving_examples() {
    let temp_dir = TempDir::new().unwrap();
    let model = load_model();
    let sink = CollectingSink::new();

    let summary = generate_samples(
        &model,
        &GeneratorSettings::default(),
        &sink,
        temp_dir.path(),
        false,
    )
    .unwrap();

    assert_eq!(summary.samples, 4);
    assert_eq!(summary.suppressed, 1);

    let program = fs::read_to_string(temp_dir.path().join("client/putWidget.ts")).unwrap();
    assert_eq!(program.matches("import * as msRest ").count(), 1);
    assert_eq!(program.matches("await client.putWidget(widgetBody);").count(), 3);
    assert!(program.ends_with("  }\n}\n"));

    let flattened = fs::read_to_string(temp_dir.path().join("settings/update.ts")).unwrap();
    assert!(flattened.contains("const p = 42;"));
}

#[test]
fn unknown_family_aborts_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("out");
    let json = WIDGET_MODEL.replace("\"typeScript\"", "\"python\"");
    let model = CodeModel::from_json(&json).unwrap();

    let result = generate_samples(
        &model,
        &GeneratorSettings::default(),
        &CollectingSink::new(),
        &output_dir,
        false,
    );

    match result {
        Err(GeneratorError::WrongModelKind { .. }) => {}
        other => panic!("Expected WrongModelKind, got: {:?}", other),
    }
    assert!(!output_dir.exists());
}

#[test]
fn settings_file_drives_import_path() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("exemplar.toml");
    fs::write(
        &settings_path,
        "package_name = \"@acme/widgets\"\nclient_prefix = \"Acme\"\n",
    )
    .unwrap();
    let settings = GeneratorSettings::from_path(&settings_path).unwrap();
    let model = load_model();
    let sink = CollectingSink::new();
    let assembler = SampleAssembler::new(&model, &settings, &sink);

    let prelude = assembler.prelude();

    assert!(prelude.contains("import { WidgetClient, AcmeModels } from \"@acme/widgets\";"));
}
