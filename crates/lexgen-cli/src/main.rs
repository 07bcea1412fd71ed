//! Lexgen CLI.
//!
//! Takes a wizard state saved by the app builder and turns it into an AT
//! Protocol client app on disk, in a zip archive, or in a new GitHub
//! repository.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};

use lexgen_compiler::model::{
    Field, FieldType, OutputMethod, ProcedureMethod, ProcedureOutput, QueryMethod, RecordType,
};
use lexgen_compiler::naming::{nsid, package_name};
use lexgen_compiler::validate::{reference_warnings, validate_state};
use lexgen_compiler::{
    load_state, save_state, Compiler, CompilerConfig, GeneratedCode, GeneratorOptions, WizardState,
};

mod export;
mod logging;
mod ui;

use export::{repo_description, ArchiveExporter, DirectoryExporter, Exporter, GithubPusher};

const DEFAULT_STATE: &str = "lexgen.json";

#[derive(Parser)]
#[command(name = "lexgen")]
#[command(about = "Generate AT Protocol client apps from an app builder wizard state")]
#[command(version)]
struct Cli {
    /// Log debug output (overridden by LEXGEN_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an example wizard state (a todo app)
    Init {
        #[arg(default_value = DEFAULT_STATE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate a wizard state without generating code
    Check {
        #[arg(short, long, default_value = DEFAULT_STATE)]
        state: PathBuf,
    },

    /// Generate the app into a directory
    Generate {
        #[arg(short, long, default_value = DEFAULT_STATE)]
        state: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "app")]
        out: PathBuf,

        /// Also emit lexicons for queries and procedures
        #[arg(long)]
        method_lexicons: bool,

        /// Skip validation
        #[arg(long)]
        no_validate: bool,
    },

    /// Print every lexicon document as JSON
    Lexicons {
        #[arg(short, long, default_value = DEFAULT_STATE)]
        state: PathBuf,

        /// Also emit lexicons for queries and procedures
        #[arg(long)]
        method_lexicons: bool,
    },

    /// Export the app the way the wizard state asks for (zip or GitHub)
    Export {
        #[arg(short, long, default_value = DEFAULT_STATE)]
        state: PathBuf,

        /// Write a zip archive regardless of the saved output method
        #[arg(long, conflicts_with = "repo")]
        archive: bool,

        /// Push to a new GitHub repository with this name
        #[arg(long)]
        repo: Option<String>,

        /// GitHub personal access token
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Directory the archive is written to
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Open the new repository in a browser
        #[arg(long)]
        open: bool,

        /// Also emit lexicons for queries and procedures
        #[arg(long)]
        method_lexicons: bool,
    },

    /// Regenerate whenever the wizard state changes
    Watch {
        #[arg(short, long, default_value = DEFAULT_STATE)]
        state: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "app")]
        out: PathBuf,

        /// Also emit lexicons for queries and procedures
        #[arg(long)]
        method_lexicons: bool,
    },
}

/// Export target picked from flags and the saved output method.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Archive,
    Repository(String),
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Init { path, force } => init_state(&path, force),

        Commands::Check { state } => check_state(&state),

        Commands::Generate {
            state,
            out,
            method_lexicons,
            no_validate,
        } => {
            let generator = GeneratorOptions {
                method_lexicons,
                validate: !no_validate,
            };
            generate_app(&state, &out, generator)
        }

        Commands::Lexicons {
            state,
            method_lexicons,
        } => print_lexicons(&state, method_lexicons),

        Commands::Export {
            state,
            archive,
            repo,
            token,
            dir,
            open,
            method_lexicons,
        } => {
            let generator = GeneratorOptions {
                method_lexicons,
                ..Default::default()
            };
            export_app(&state, generator, archive, repo, token, &dir, open).await
        }

        Commands::Watch {
            state,
            out,
            method_lexicons,
        } => {
            let generator = GeneratorOptions {
                method_lexicons,
                ..Default::default()
            };
            run_watch_mode(&state, &out, generator).await
        }
    }
}

fn compiler_for(state: &Path, out: &Path, generator: GeneratorOptions) -> Compiler {
    Compiler::new(CompilerConfig {
        state_path: state.to_path_buf(),
        out_dir: out.to_path_buf(),
        generator,
    })
}

/// Write the example todo app state.
fn init_state(path: &Path, force: bool) -> miette::Result<()> {
    if path.exists() && !force {
        return Err(miette::miette!(
            help = "Pass --force to overwrite it.",
            "'{}' already exists",
            path.display()
        ));
    }

    let mut state = example_state();
    save_state(path, &mut state)?;

    ui::success(&format!("Wrote {}", path.display()));
    println!();
    ui::tree_item("todo", Some("title, done, dueDate, tags"), false);
    ui::tree_item("listTodos", Some("query returning a list of todos"), false);
    ui::tree_item("completeTodo", Some("procedure taking a todo"), true);
    println!();
    println!("  Now do this:");
    println!();
    println!("    lexgen generate --state {}", path.display());
    println!();

    Ok(())
}

fn example_state() -> WizardState {
    let mut state = WizardState::new();
    state.app_info.app_name = "Todo App".to_string();
    state.app_info.domain = "example.com".to_string();
    state.app_info.description = "A simple todo list on AT Protocol".to_string();

    state.record_types.push(
        RecordType::new("todo")
            .with_description("A single todo item")
            .with_field(
                Field::new("title", FieldType::Text)
                    .required()
                    .with_max_length(200)
                    .with_description("What needs doing"),
            )
            .with_field(Field::new("done", FieldType::Boolean))
            .with_field(Field::new("dueDate", FieldType::Text).with_format("datetime"))
            .with_field(Field::new("tags", FieldType::StringArray)),
    );

    state.query_methods.push(QueryMethod {
        id: "query-1".to_string(),
        name: "listTodos".to_string(),
        description: "List todos".to_string(),
        returns_record_type: "todo".to_string(),
        returns_list: true,
    });

    state.procedure_methods.push(ProcedureMethod {
        id: "procedure-1".to_string(),
        name: "completeTodo".to_string(),
        description: "Mark a todo as done".to_string(),
        input_record_type: Some("todo".to_string()),
        output_type: ProcedureOutput::Success,
        output_record_type: None,
    });

    state.app_config.primary_record_type = "todo".to_string();
    state.app_config.list_display_fields = Some(vec!["title".to_string(), "done".to_string()]);
    state
}

/// Validate a wizard state and report warnings.
fn check_state(path: &Path) -> miette::Result<()> {
    let spinner = ui::spinner("Checking wizard state...");
    let loaded = load_state(path)?;
    let result = validate_state(&loaded.state);
    spinner.finish_and_clear();

    if let Err(e) = result {
        ui::nope_header();
        return Err(e.into());
    }

    if loaded.is_stale {
        ui::warn(&format!(
            "Last saved {}; this state may be out of date",
            loaded.state.last_saved
        ));
    }
    for warning in reference_warnings(&loaded.state) {
        ui::warn(&warning);
    }

    ui::looking_good();
    Ok(())
}

/// Generate the app into a directory.
fn generate_app(state: &Path, out: &Path, generator: GeneratorOptions) -> miette::Result<()> {
    ui::print_compact_header(env!("CARGO_PKG_VERSION"));
    let start = Instant::now();
    let spinner = ui::spinner("Generating app...");

    let compiler = compiler_for(state, out, generator);
    let (wizard, files) = compiler.generate()?;
    let report = DirectoryExporter::new(out).export(&files)?;

    spinner.finish_and_clear();
    print_summary(&wizard, &files);
    ui::timing(&format!("Wrote {} files", report.files), start.elapsed().as_millis());
    println!();

    ui::box_header(&format!("{} What's Next", ui::symbols::ARROW));
    ui::box_line("");
    ui::box_line(&format!("   cd {} && npm install", out.display()));
    ui::box_line("   npm run dev");
    ui::box_line("");
    ui::box_line("   Then open http://localhost:8080");
    ui::box_line("");
    ui::box_footer();
    println!();

    Ok(())
}

fn print_summary(state: &WizardState, files: &GeneratedCode) {
    ui::box_header("RECORD TYPES");
    ui::box_line("");
    for record in &state.record_types {
        ui::record_line(
            &record.name,
            &nsid(&state.app_info.domain, &record.name),
            record.fields.len(),
        );
    }
    ui::box_line("");
    ui::box_footer();
    println!();

    let lexicons = files.paths().filter(|p| p.starts_with("lexicons/")).count();
    ui::info(&format!(
        "{} source files, {} lexicons",
        files.len() - lexicons,
        lexicons
    ));
}

/// Print every lexicon document to stdout.
fn print_lexicons(state: &Path, method_lexicons: bool) -> miette::Result<()> {
    let generator = GeneratorOptions {
        method_lexicons,
        ..Default::default()
    };
    let (_, files) = compiler_for(state, Path::new("."), generator).generate()?;

    for (path, content) in files.iter().filter(|(p, _)| p.starts_with("lexicons/")) {
        tracing::debug!(path, "printing lexicon");
        print!("{}", content);
        if !content.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}

fn export_target(method: OutputMethod, archive: bool, repo: Option<String>, app_name: &str) -> Target {
    match (archive, repo) {
        (true, _) => Target::Archive,
        (false, Some(name)) => Target::Repository(name),
        (false, None) => match method {
            OutputMethod::Archive => Target::Archive,
            OutputMethod::RemoteRepository => Target::Repository(package_name(app_name)),
        },
    }
}

/// Export the app as a zip archive or to a new GitHub repository.
async fn export_app(
    state: &Path,
    generator: GeneratorOptions,
    archive: bool,
    repo: Option<String>,
    token: Option<String>,
    dir: &Path,
    open: bool,
) -> miette::Result<()> {
    let compiler = compiler_for(state, dir, generator);
    let (wizard, files) = compiler.generate()?;

    let target = export_target(
        wizard.app_config.output_method,
        archive,
        repo,
        &wizard.app_info.app_name,
    );

    match target {
        Target::Archive => {
            let spinner = ui::spinner("Packing archive...");
            let report = ArchiveExporter::for_app(dir, &wizard.app_info.app_name).export(&files)?;
            spinner.finish_and_clear();

            ui::success(&format!("Wrote {} ({} files)", report.destination, report.files));
            println!();
            println!("  Extract it, then run npm install && npm run dev");
            println!();
        }
        Target::Repository(name) => {
            let token = token.ok_or(export::ExportError::MissingToken)?;
            let pusher = GithubPusher::new(token, name.clone(), repo_description(&wizard.app_info));

            let spinner = ui::spinner(&format!("Pushing {} files to {}...", files.len(), name));
            let pushed = tokio::task::spawn_blocking(move || pusher.export(&files))
                .await
                .map_err(|e| miette::miette!("Push task failed: {}", e))?;
            spinner.finish_and_clear();
            let report = pushed?;

            ui::success(&format!("Created {}", report.destination));
            println!();
            println!("  Clone it, then run npm install && npm run dev");
            println!();

            if open {
                if let Err(e) = open::that(&report.destination) {
                    ui::dim(&format!("Could not open a browser: {}", e));
                }
            }
        }
    }

    Ok(())
}

/// Regenerate on every change of the state file until Ctrl-C.
async fn run_watch_mode(state: &Path, out: &Path, generator: GeneratorOptions) -> miette::Result<()> {
    let compiler = compiler_for(state, out, generator);
    recompile(&compiler);

    let (tx, mut rx) = tokio::sync::mpsc::channel::<()>(1);
    let file_name = state.file_name().map(|n| n.to_os_string());

    let mut debouncer = new_debouncer(
        Duration::from_millis(500),
        move |result: DebounceEventResult| {
            if let Ok(events) = result {
                let touched = events
                    .iter()
                    .any(|e| e.path.file_name().map(|n| n.to_os_string()) == file_name);
                if touched {
                    let _ = tx.try_send(());
                }
            }
        },
    )
    .map_err(|e| miette::miette!("Failed to create file watcher: {}", e))?;

    let watch_dir = match state.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    debouncer
        .watcher()
        .watch(&watch_dir, RecursiveMode::NonRecursive)
        .map_err(|e| miette::miette!("Failed to watch {}: {}", watch_dir.display(), e))?;

    ui::info(&format!("Watching {} for changes", state.display()));

    loop {
        tokio::select! {
            _ = rx.recv() => {
                println!();
                recompile(&compiler);
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                ui::dim("Stopping watch mode.");
                break;
            }
        }
    }

    Ok(())
}

fn recompile(compiler: &Compiler) {
    let spinner = ui::spinner("Regenerating...");
    let start = Instant::now();

    match compiler.compile() {
        Ok(result) => {
            spinner.finish_and_clear();
            ui::success(&format!(
                "Generated {} files for {} record type(s) in {}ms",
                result.files,
                result.record_types,
                start.elapsed().as_millis()
            ));
        }
        Err(e) => {
            spinner.finish_and_clear();
            ui::error(&format!("{}", e));
        }
    }
    ui::info("Ready! Waiting for changes...");
}
