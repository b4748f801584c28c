use bilisp::{parse, read, render};
use bilisp_runtime::{ReplConfig, eval, init_tracing};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::env;
use std::fs;
use std::process;

fn repl(mut config: ReplConfig) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;

    if let Some(path) = &config.history_path {
        // Missing on first run
        if let Err(e) = rl.load_history(path) {
            tracing::debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    println!("Bilisp {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+c to Exit");
    println!("Type :help for commands");
    println!();

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                match line {
                    ":help" => {
                        print_help();
                        continue;
                    }
                    ":ast" => {
                        config.show_ast = !config.show_ast;
                        let state = if config.show_ast { "on" } else { "off" };
                        println!("syntax tree dump {state}");
                        continue;
                    }
                    ":quit" | "exit" => break,
                    _ => {}
                }

                evaluate_line(line, config.show_ast);
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            }
        }
    }

    if let Some(path) = &config.history_path
        && let Err(e) = rl.save_history(path)
    {
        tracing::warn!(path = %path.display(), error = %e, "failed to save history");
    }

    Ok(())
}

fn evaluate_line(line: &str, show_ast: bool) {
    match parse(line) {
        Ok(tree) => {
            if show_ast {
                print!("{}", tree.root);
            }
            let result = eval(read(&tree));
            println!("{}", render(&result));
        }
        Err(e) => eprintln!("{e}"),
    }
}

fn run_file(filename: &str) -> Result<(), String> {
    let contents = fs::read_to_string(filename)
        .map_err(|e| format!("Failed to read file '{filename}': {e}"))?;

    // Each line is an independent input
    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        let tree = parse(line).map_err(|e| format!("{filename}:{}: {e}", number + 1))?;
        let result = eval(read(&tree));
        println!("{}", render(&result));
    }

    Ok(())
}

fn print_help() {
    println!("Enter expressions like (+ 1 2) or (head {{1 2 3}})");
    println!("Builtins: + - * / % max min list head tail join eval");
    println!();
    println!("Commands:");
    println!("  :help   Show this message");
    println!("  :ast    Toggle syntax tree dump");
    println!("  :quit   Exit the REPL");
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  bilisp               Start interactive REPL");
    eprintln!("  bilisp <file.lispy>  Evaluate each line of a file");
    eprintln!("  bilisp --help        Show this help message");
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            if let Err(e) = repl(ReplConfig::from_env()) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        2 => {
            let arg = &args[1];
            if arg == "--help" || arg == "-h" {
                print_usage();
            } else if let Err(e) = run_file(arg) {
                eprintln!("{e}");
                process::exit(1);
            }
        }
        _ => {
            eprintln!("Error: Too many arguments");
            print_usage();
            process::exit(1);
        }
    }
}
