//! Strand command-line interpreter.
//!
//! Usage:
//!   strand <file>       Evaluate a file
//!   strand -e <code>    Evaluate a string
//!   strand              Read from stdin
//!
//! Registers two host words on top of the standard set: `.` pops and
//! prints the top of stack, `.s` prints the whole stack top-first
//! without disturbing it.

use std::{
    env, fs,
    io::{self, Read},
    process::ExitCode,
};

use strand::Interp;

const USAGE: &str = "\
Usage: strand [OPTIONS] [FILE]

Arguments:
  [FILE]  Strand source file to evaluate

Options:
  -e <CODE>  Evaluate CODE string
  -h, --help Print this help message

If no arguments are given, reads from stdin.";

fn op_print(interp: &mut Interp) {
    if let Some(v) = interp.pop() {
        println!("{}", v);
        interp.free_value(v);
    }
}

fn op_print_stack(interp: &mut Interp) {
    for v in interp.stack().as_slice().iter().rev() {
        println!("{}", v);
    }
}

fn read_stdin() -> Result<String, io::Error> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

enum Action {
    Eval(String),
    Help,
}

fn parse_args() -> Result<Action, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [] => Ok(Action::Eval(
            read_stdin().map_err(|e| format!("error reading stdin: {e}"))?,
        )),
        [arg] if arg == "-" => Ok(Action::Eval(
            read_stdin().map_err(|e| format!("error reading stdin: {e}"))?,
        )),
        [arg] if arg == "-h" || arg == "--help" => Ok(Action::Help),
        [flag, code] if flag == "-e" => Ok(Action::Eval(code.clone())),
        [file] => Ok(Action::Eval(
            fs::read_to_string(file).map_err(|e| format!("error reading {file}: {e}"))?,
        )),
        _ => Err(USAGE.into()),
    }
}

fn main() -> ExitCode {
    match parse_args() {
        Ok(Action::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Action::Eval(source)) => {
            let mut interp = strand_stdlib::interp();
            interp.register(".", op_print);
            interp.register(".s", op_print_stack);
            for line in source.lines() {
                interp.run_line(line);
            }
            if interp.open_depth() > 0 {
                match interp.pending_definition() {
                    Some(word) => {
                        eprintln!("warning: input ended inside the definition of `{word}`")
                    }
                    None => eprintln!(
                        "warning: input ended with {} unclosed sequence(s)",
                        interp.open_depth()
                    ),
                }
                return ExitCode::FAILURE;
            }
            for value in interp.stack().as_slice() {
                println!("{value}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
