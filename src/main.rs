//! Interactive calculator: reads one expression per line and prints
//! its value.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use languid::{SyntaxTree, Token};

struct Options {
    show_tree: bool,
    show_tokens: bool,
}

fn usage() {
    eprintln!("Usage: languid [--tree] [--tokens]");
    eprintln!();
    eprintln!("Reads arithmetic expressions from stdin, one per line.");
    eprintln!("An empty line ends the session.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tree    Print the syntax tree of each line");
    eprintln!("  --tokens  Print the scanned tokens of each line");
}

fn main() -> ExitCode {
    let mut options = Options {
        show_tree: false,
        show_tokens: false,
    };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--tree" => options.show_tree = true,
            "--tokens" => options.show_tokens = true,
            "-h" | "--help" => {
                usage();
                return ExitCode::from(2);
            }
            _ => {
                eprintln!("Unknown option: {arg}");
                usage();
                return ExitCode::from(2);
            }
        }
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 || line.trim().is_empty() {
            return Ok(());
        }

        let source = line.trim_end_matches(['\r', '\n']);
        report(options, source, &languid::parse(source));
    }
}

fn report(options: &Options, source: &str, tree: &SyntaxTree) {
    if options.show_tree {
        print!("{}", languid::pretty_print(&tree.root));
    }

    if options.show_tokens {
        let (tokens, _) = languid::tokenize(source);
        for Token { kind, text, .. } in &tokens {
            println!("{kind}: '{text}'");
        }
    }

    if !tree.is_valid() {
        for diagnostic in &tree.diagnostics {
            eprintln!("{diagnostic}");
        }
        return;
    }

    match languid::evaluate(&tree.root) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
