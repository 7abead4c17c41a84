use clap::Parser;
use sparse_bf::cli_util::{print_load_error, print_runtime_error};
use sparse_bf::logging::init_logging;
use sparse_bf::{run_source, Error, Settings, StdPort};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} <FILE>   # Run the Brainfuck program stored in FILE

Notes:
- Characters other than ><+-.,[] are comments and are ignored.
- The tape is unbounded in both directions; every cell starts at 0.
- Input (`,`) reads a single UTF-8 character from stdin and stores its code point;
  characters above U+00FF and running out of input are errors.

Examples:
- Run a program:
    {0} ./hello.bf
- Feed a file to the program's input:
    {0} ./cat.bf < input.txt
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}

#[derive(Parser, Debug)]
#[command(name = "bf", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Path of the Brainfuck program to run
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn run_file(program: &str, path: &Path) -> i32 {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{program}: failed to read {}: {e}", path.display());
            let _ = io::stderr().flush();
            return 1;
        }
    };
    // Only ><+-.,[] matter, so undecodable comment bytes can be replaced
    let code = String::from_utf8_lossy(&bytes);
    debug!(path = %path.display(), bytes = bytes.len(), "read program file");

    match run_source(&code, Settings::default(), StdPort::new()) {
        Ok(()) => 0,
        Err(Error::Load(err)) => {
            print_load_error(Some(program), &code, &err);
            1
        }
        Err(Error::Runtime(err)) => {
            print_runtime_error(Some(program), &code, &err);
            1
        }
    }
}

fn main() {
    // We still pull the program name for usage rendering
    let program = env::args().next().unwrap_or_else(|| String::from("bf"));

    init_logging();

    // Exactly one positional FILE; anything else is a usage error
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => usage_and_exit(&program, 2),
    };
    let Some(path) = cli.file else {
        usage_and_exit(&program, 2);
    };

    // Flush whatever the program printed if it is interrupted, e.g. in an infinite loop
    if let Err(e) = ctrlc::set_handler(|| {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        std::process::exit(130);
    }) {
        eprintln!("{program}: failed to set ctrl+c handler: {e}");
        let _ = io::stderr().flush();
        std::process::exit(1);
    }

    let code = run_file(&program, &path);
    let _ = io::stdout().flush();
    std::process::exit(code);
}
