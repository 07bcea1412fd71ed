use std::path::Path;

use lexgen_compiler::{Compiler, CompilerConfig, CompilerError, GeneratorOptions};
use walkdir::WalkDir;

const TODO_STATE: &str = r#"{
  "version": "1.0",
  "lastSaved": "2026-01-01T00:00:00.000Z",
  "currentStep": 5,
  "currentRecordTypeIndex": 0,
  "appInfo": {
    "appName": "Todo App",
    "domain": "example.com",
    "description": "",
    "authorName": "Ada"
  },
  "recordTypes": [
    {
      "id": "r1",
      "name": "todo",
      "description": "",
      "fields": [
        { "id": "f1", "name": "title", "type": "string", "required": true, "maxLength": 200 },
        { "id": "f2", "name": "done", "type": "boolean", "required": false },
        { "id": "f3", "name": "tags", "type": "array-string", "required": false }
      ]
    }
  ],
  "queryMethods": [
    { "id": "q1", "name": "listTodos", "description": "", "returnsRecordType": "todo", "returnsList": true }
  ],
  "procedureMethods": [
    { "id": "p1", "name": "archiveTodo", "description": "", "inputRecordType": "todo", "outputType": "success" }
  ],
  "appConfig": {
    "primaryRecordType": "todo",
    "listDisplayFields": ["title", "done"],
    "outputMethod": "zip"
  }
}"#;

fn write_state(dir: &Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("lexgen.json");
    std::fs::write(&path, json).unwrap();
    path
}

fn compiler(dir: &Path, state_json: &str, generator: GeneratorOptions) -> Compiler {
    Compiler::new(CompilerConfig {
        state_path: write_state(dir, state_json),
        out_dir: dir.join("out"),
        generator,
    })
}

fn written_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

#[test]
fn todo_app_generates_expected_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let (_, generated) = compiler(dir.path(), TODO_STATE, GeneratorOptions::default())
        .generate()
        .unwrap();

    let lexicon: serde_json::Value =
        serde_json::from_str(generated.get("lexicons/com/example/todo.json").unwrap()).unwrap();
    assert_eq!(lexicon["id"], "com.example.todo");
    assert_eq!(lexicon["defs"]["main"]["key"], "tid");
    assert_eq!(lexicon["defs"]["main"]["record"]["required"], serde_json::json!(["title"]));
    assert_eq!(
        lexicon["defs"]["main"]["record"]["properties"]["tags"]["items"]["type"],
        "string"
    );

    let types = generated.get("services/types.ts").unwrap();
    assert!(types.contains("  title: string;\n"));
    assert!(types.contains("  done?: boolean;\n"));
    assert!(types.contains("  tags?: string[];\n"));

    let api = generated.get("services/API.ts").unwrap();
    assert!(api.contains("export async function createTodo("));
    assert!(api.contains("export async function getTodos("));
    assert!(api.contains("limit < 1 || limit > 100"));

    assert!(!generated.contains("lexicons/com/example/listtodos.json"));
    assert_eq!(generated.paths().last(), Some("README.md"));
}

#[test]
fn method_lexicons_are_opt_in() {
    let dir = tempfile::TempDir::new().unwrap();
    let options = GeneratorOptions {
        method_lexicons: true,
        ..Default::default()
    };
    let (_, generated) = compiler(dir.path(), TODO_STATE, options).generate().unwrap();

    let query: serde_json::Value =
        serde_json::from_str(generated.get("lexicons/com/example/listtodos.json").unwrap()).unwrap();
    assert_eq!(query["defs"]["main"]["type"], "query");

    let procedure: serde_json::Value =
        serde_json::from_str(generated.get("lexicons/com/example/archivetodo.json").unwrap()).unwrap();
    assert_eq!(procedure["defs"]["main"]["type"], "procedure");
    assert_eq!(procedure["defs"]["main"]["input"]["schema"]["ref"], "com.example.todo");
}

#[test]
fn compile_writes_tree_to_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let compiler = compiler(dir.path(), TODO_STATE, GeneratorOptions::default());

    let result = compiler.compile().unwrap();
    assert_eq!(result.record_types, 1);
    assert_eq!(result.queries, 1);
    assert_eq!(result.procedures, 1);

    let files = written_files(&dir.path().join("out"));
    assert_eq!(files.len(), result.files);
    for expected in [
        "app.ts",
        "index.html",
        "lexicons/com/example/todo.json",
        "package.json",
        "services/API.ts",
        "services/views/FormView.ts",
        "tsconfig.json",
    ] {
        assert!(files.iter().any(|f| f == expected), "missing {expected}");
    }

    let package: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("out/package.json")).unwrap())
            .unwrap();
    assert_eq!(package["name"], "todo-app");
    assert_eq!(package["description"], "Todo App - An AT Protocol application");
}

#[test]
fn generation_is_deterministic() {
    let dir = tempfile::TempDir::new().unwrap();
    let compiler = compiler(dir.path(), TODO_STATE, GeneratorOptions::default());

    let (_, first) = compiler.generate().unwrap();
    let (_, second) = compiler.generate().unwrap();
    assert_eq!(first, second);
}

#[test]
fn check_rejects_invalid_domain() {
    let dir = tempfile::TempDir::new().unwrap();
    let state = TODO_STATE.replace("\"example.com\"", "\"not a domain\"");
    let err = compiler(dir.path(), &state, GeneratorOptions::default())
        .check()
        .unwrap_err();
    assert!(matches!(err, CompilerError::InvalidDomain { .. }));
}

#[test]
fn generate_rejects_names_that_break_typescript() {
    let dir = tempfile::TempDir::new().unwrap();
    let state = TODO_STATE.replace("\"name\": \"done\"", "\"name\": \"uri\"");
    let err = compiler(dir.path(), &state, GeneratorOptions::default())
        .generate()
        .unwrap_err();
    assert!(matches!(err, CompilerError::ReservedFieldName { .. }));

    let state = TODO_STATE.replace("\"name\": \"todo\"", "\"name\": \"3d model\"");
    let err = compiler(dir.path(), &state, GeneratorOptions::default())
        .generate()
        .unwrap_err();
    assert!(matches!(err, CompilerError::InvalidRecordName { name } if name == "3d model"));
}

#[test]
fn validation_can_be_skipped() {
    let dir = tempfile::TempDir::new().unwrap();
    let state = TODO_STATE.replace("\"example.com\"", "\"localhost\"");
    let options = GeneratorOptions {
        validate: false,
        ..Default::default()
    };
    let (_, generated) = compiler(dir.path(), &state, options).generate().unwrap();
    assert!(generated.contains("lexicons/localhost/todo.json"));
}

#[test]
fn missing_state_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let compiler = Compiler::new(CompilerConfig {
        state_path: dir.path().join("nope.json"),
        out_dir: dir.path().join("out"),
        ..Default::default()
    });
    assert!(matches!(compiler.generate(), Err(CompilerError::IoError { .. })));
}

#[test]
fn malformed_state_is_parse_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = compiler(dir.path(), "{ not json", GeneratorOptions::default())
        .generate()
        .unwrap_err();
    assert!(matches!(err, CompilerError::StateParseFailed { .. }));
}
