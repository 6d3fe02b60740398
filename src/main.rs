use std::{env, io, process};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use ember_lang::{ember, RunMode};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut stdout = io::stdout();
    let mut ember = ember::new(&mut stdout);

    match args.len() {
        n if n > 3 => {
            usage();
            process::exit(64);
        },
        3 => {
            if args[1] == "-d" {
                ember.set_debug(true);
                ember.run_file(args[2].clone());
            } else {
                usage();
                process::exit(64);
            }
        },
        2 => {
            if args[1] == "-d" {
                ember.set_debug(true);
                run_prompt(&mut ember);
            } else {
                ember.run_file(args[1].clone());
            }
        },
        _ => run_prompt(&mut ember),
    };
}

fn run_prompt(ember: &mut ember) {
    println!("Ember {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl-D to quit.");

    let mut editor = DefaultEditor::new().expect("to open a line editor");
    let history = home::home_dir().map(|path| path.join(".ember_history"));
    if let Some(history) = &history {
        let _ = editor.load_history(history);
    }

    loop {
        match editor.readline(">>> ") {
            Ok(line) => {
                if line == "exit" {
                    break;
                }

                let _ = editor.add_history_entry(&line);

                ember.run(&line, RunMode::Repl);
                ember.reset_errors();
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("{error}");
                break;
            },
        }
    }

    if let Some(history) = &history {
        let _ = editor.save_history(history);
    }
}

fn usage() {
    println!("Usage: ember *-d <script>");
    println!("* Optional flag that prints the lexical breakdown and the AST");
    println!("  instead of running the script.");
}
