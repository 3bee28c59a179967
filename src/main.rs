//! SIC - a simple interpreted concatenative array language
//!
//! Usage:
//!   siclang              Start interactive REPL
//!   siclang -c "prog"    Evaluate a single program
//!   siclang script.sic   Evaluate a script file line by line

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use siclang::Interpreter;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!(
        r#"siclang {} - SIC, a simple interpreted concatenative array language

USAGE:
    siclang                 Start interactive REPL
    siclang -c <program>    Evaluate a single program
    siclang <script>        Evaluate a script file line by line
    siclang --help          Show this help message
    siclang --version       Show version

SYNTAX:
    5  3.5  -2e3            Numbers (one-element arrays)
    x                       Single character
    "quoted text"           String
    [1, 2, [3, 4]]          Array literal, arbitrarily nested
    :name tok... :end       Define a function
    :dump                   Print the whole stack, top first

BUILTINS:
    + - * / ^               Broadcasting element-wise arithmetic
    cat                     Flat concatenation of two arrays
    .                       Pop and print
    clear swap dup          Stack manipulation
    range                   n range -> [0, 1, ..., n-1]
    reshape                 data shape reshape -> nested rectangular array
    dim                     Replace top array with its shape
    matmul                  2-D matrix product"#,
        VERSION
    );
}

fn run_lines(interp: &mut Interpreter, source: &str) {
    for line in source.lines() {
        interp.process(line);
    }
}

fn run_script(path: &str) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("siclang: {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };
    let mut interp = Interpreter::new();
    run_lines(&mut interp, &source);
    ExitCode::SUCCESS
}

fn repl() -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("siclang: failed to initialize line editor: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut interp = Interpreter::new();

    println!("SIC - a simple interpreted concatenative language");
    println!("Type 'exit' to quit");

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.trim() == "exit" {
                    break;
                }
                let _ = rl.add_history_entry(line.as_str());
                interp.process(&line);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("siclang: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => repl(),
        Some("--help") | Some("-h") => {
            print_help();
            ExitCode::SUCCESS
        }
        Some("--version") => {
            println!("siclang {}", VERSION);
            ExitCode::SUCCESS
        }
        Some("-c") => match args.get(1) {
            Some(program) => {
                let mut interp = Interpreter::new();
                run_lines(&mut interp, program);
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("siclang: -c requires a program string");
                ExitCode::FAILURE
            }
        },
        Some(path) => run_script(path),
    }
}
