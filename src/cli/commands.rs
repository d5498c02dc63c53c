use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::editor::{Command, Editor, EditorConfig, EditorEffect};
use crate::evaluator::{EvalOptions, evaluate_with};
use crate::history::HistoryStore;
use crate::models::HistoryEntry;
use crate::models::entry::format_result;
use crate::units;
use crate::utils::get_data_dir;

#[derive(Parser)]
#[command(name = "deskcalc")]
#[command(version = "0.1.0")]
#[command(about = "Calculator with persisted history and unit conversion", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate an expression and record it in the history
    Eval {
        expression: String,
        /// Accept % as an operator (a % b = a * b/100)
        #[arg(long)]
        percent: bool,
        /// Do not record the calculation in the history
        #[arg(long)]
        no_save: bool,
    },
    /// Interactive calculator
    Repl {
        /// Accept % as an operator (a % b = a * b/100)
        #[arg(long)]
        percent: bool,
        /// Preview incomplete expressions by trimming the trailing operator
        #[arg(long)]
        preview_partial: bool,
    },
    /// Browse or clear the calculation history
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Convert a value between units of the same category
    Convert { value: f64, from: String, to: String },
    /// List the supported conversion units
    Units,
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Print all recorded calculations, newest first
    Show,
    /// Delete all recorded calculations
    Clear,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Eval { expression, percent, no_save }) => {
            eval_once(&expression, percent, no_save)?;
        }
        Some(Commands::Repl { percent, preview_partial }) => {
            repl(EditorConfig { enable_percent: percent, preview_partial })?;
        }
        Some(Commands::History { command: HistoryCommands::Show }) => {
            let store = HistoryStore::open(&get_data_dir()?)?;
            print_history(&store);
        }
        Some(Commands::History { command: HistoryCommands::Clear }) => {
            let mut store = HistoryStore::open(&get_data_dir()?)?;
            store.clear();
            store.save()?;
            println!("History cleared");
        }
        Some(Commands::Convert { value, from, to }) => {
            let result = units::convert(value, &from, &to)?;
            println!("{} {} = {} {}", value, from, format_result(result), to);
        }
        Some(Commands::Units) => {
            for &category in units::categories() {
                println!("{}: {}", category.name(), units::units_in(category).join(", "));
            }
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn eval_once(expression: &str, percent: bool, no_save: bool) -> Result<()> {
    let options = EvalOptions { enable_percent: percent };
    let result = evaluate_with(expression, &options)?;
    println!("{}", format_result(result));

    if !no_save {
        let mut store = HistoryStore::open(&get_data_dir()?)?;
        store.append(HistoryEntry::new(expression, result));
        store.save()?;
    }

    Ok(())
}

/// Line-oriented interactive mode. Each line is fed character by character
/// through the editor so keypad entry rules apply to typed input too, then
/// committed as if `=` were pressed.
fn repl(config: EditorConfig) -> Result<()> {
    let mut store = HistoryStore::open(&get_data_dir()?)?;
    let mut editor = Editor::new(config);

    println!("deskcalc interactive mode (:history, :recall N, :clear, :quit)");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            ":quit" | ":q" => break,
            ":history" => print_history(&store),
            ":clear" => {
                store.clear();
                store.save()?;
                println!("History cleared");
            }
            _ if input.starts_with(":recall") => {
                recall_entry(input, &store, &mut editor);
            }
            _ => {
                process_line(input, &mut editor, &mut store)?;
            }
        }
    }

    Ok(())
}

/// Feed one typed line into the editor and commit it.
fn process_line(input: &str, editor: &mut Editor, store: &mut HistoryStore) -> Result<()> {
    let config = editor.config();
    let mut line_committed = false;

    for ch in input.chars() {
        let Some(command) = Command::from_char(ch, &config) else {
            continue; // ignore characters outside the input language
        };
        line_committed = matches!(command, Command::Equals);
        match editor.apply(command) {
            Ok(EditorEffect::Committed(entry)) => {
                report_commit(&entry, store)?;
            }
            Ok(_) => {}
            Err(err) => {
                println!("Error: {err}");
                editor.apply(Command::Clear).ok();
                return Ok(());
            }
        }
    }

    if line_committed {
        return Ok(());
    }

    match editor.apply(Command::Equals) {
        Ok(EditorEffect::Committed(entry)) => report_commit(&entry, store)?,
        Ok(_) => {}
        Err(err) => {
            // An incomplete line may still have a partial preview; keep the
            // expression so the next line can finish it.
            if let Some(partial) = editor.preview() {
                println!("... {} ({})", format_result(partial), editor.expression());
            } else {
                println!("Error: {err}");
                editor.apply(Command::Clear).ok();
            }
        }
    }

    Ok(())
}

fn report_commit(entry: &HistoryEntry, store: &mut HistoryStore) -> Result<()> {
    println!("{} = {}", entry.expression, format_result(entry.result));
    if store.append(entry.clone()) {
        store.save()?;
    }
    Ok(())
}

/// `:recall N` loads the Nth most recent calculation back into the editor.
/// A bare `:recall` means the most recent one.
fn recall_entry(input: &str, store: &HistoryStore, editor: &mut Editor) {
    let rest = input.strip_prefix(":recall").map(str::trim).unwrap_or("");
    let index = if rest.is_empty() {
        1
    } else {
        match rest.parse::<usize>() {
            Ok(n) if n >= 1 => n,
            _ => {
                println!("Usage: :recall N (1 = most recent entry)");
                return;
            }
        }
    };

    let recent = store.recent(index);
    match recent.get(index.saturating_sub(1)) {
        Some(entry) => {
            let expression = entry.expression.clone();
            editor.recall(&expression);
            println!("Recalled: {expression}");
        }
        None => println!("No history entry #{index}"),
    }
}

fn print_history(store: &HistoryStore) {
    if store.is_empty() {
        println!("No calculations recorded");
        return;
    }
    for (date, entries) in store.days_desc() {
        println!("{date}");
        for entry in entries {
            println!("  {}", entry.display_line());
        }
    }
}
