use rustyline::error::ReadlineError;
use rustyline::Editor;
use tracing::debug;

use monkey_interpreter::{evaluate, Env, Environment};
use monkey_parser::{lexer::Lexer, parser::Parser};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = ">> ";

pub fn repl() {
    println!("Monkey language v{}", VERSION);
    println!("Type in commands, or `exit` to leave");

    // Bindings live for the whole session
    let env = Environment::new().into_shared();

    // `()` can be used when no completer is required
    let mut rl = Editor::<()>::new();
    loop {
        let readline = rl.readline(PROMPT);
        match readline {
            Ok(line) => {
                if line.trim() == "exit" || line.trim() == "quit" {
                    break;
                }
                // Skip empty lines
                else if line.trim().is_empty() {
                    continue;
                }

                rl.add_history_entry(line.as_str());

                println!("{}", run_line(&line, &env));
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
}

/// Parse and evaluate one line, returning what the REPL should print for it.
fn run_line(line: &str, env: &Env) -> String {
    let l = Lexer::new(line);
    let mut p = Parser::new(l);
    let prog = p.parse_program();

    if !p.errors().is_empty() {
        debug!(errors = p.errors().len(), "discarding line with parse errors");

        let mut out = String::from("Parser errors:");
        for error in p.errors() {
            out.push_str(&format!("\n\t{} {}", error, error.span().at_str()));
        }
        return out;
    }

    evaluate(&prog, env).to_code_string()
}
