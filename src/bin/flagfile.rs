use std::collections::BTreeMap;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use flagfile::{ParseOptions, from_path_with_options};

const HELP: &str = "\
flagfile - validate and inspect INI-style configuration files

Usage:
  flagfile check [OPTIONS] FILE...
  flagfile dump [OPTIONS] FILE
  flagfile --help
  flagfile --version

Commands:
  check     Parse files and report the first error in each
  dump      Print the effective key=value pairs of a file
";

const CHECK_HELP: &str = "\
flagfile check - parse configuration files and report errors

Usage:
  flagfile check [OPTIONS] FILE...

Options:
  -s, --sections    Compose [section] headers into dotted keys.
  -h, --help        Show this help text.
";

const DUMP_HELP: &str = "\
flagfile dump - print the effective key=value pairs of a file

Usage:
  flagfile dump [OPTIONS] FILE

Options:
  -s, --sections    Compose [section] headers into dotted keys.
  -h, --help        Show this help text.
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Execute(Options),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Options {
    sections: bool,
    files: Vec<PathBuf>,
}

fn main() {
    process::exit(run(env::args_os()));
}

fn run(args: impl IntoIterator<Item = OsString>) -> i32 {
    let mut args = args.into_iter();
    let _bin = args.next();

    let Some(subcommand) = args.next() else {
        print_help();
        return 0;
    };

    let subcommand = subcommand.to_string_lossy();
    match subcommand.as_ref() {
        "-h" | "--help" | "help" => {
            print_help();
            0
        }
        "-V" | "--version" | "version" => {
            print_version();
            0
        }
        "check" => match parse_options(args.collect()) {
            Ok(Command::Help) => {
                println!("{CHECK_HELP}");
                0
            }
            Ok(Command::Execute(options)) => execute_check(options),
            Err(err) => {
                eprintln!("flagfile: {err}");
                eprintln!("Try `flagfile check --help`.");
                1
            }
        },
        "dump" => match parse_options(args.collect()) {
            Ok(Command::Help) => {
                println!("{DUMP_HELP}");
                0
            }
            Ok(Command::Execute(options)) => execute_dump(options),
            Err(err) => {
                eprintln!("flagfile: {err}");
                eprintln!("Try `flagfile dump --help`.");
                1
            }
        },
        unknown => {
            eprintln!("flagfile: unknown subcommand `{unknown}`");
            eprintln!("Try `flagfile --help`.");
            1
        }
    }
}

fn parse_options(args: Vec<OsString>) -> Result<Command, String> {
    let mut options = Options::default();
    let mut index = 0usize;
    while index < args.len() {
        let token = args[index].to_string_lossy();
        match token.as_ref() {
            "--" => {
                index += 1;
                break;
            }
            "-h" | "--help" => return Ok(Command::Help),
            "-s" | "--sections" => {
                options.sections = true;
                index += 1;
            }
            unknown if unknown.starts_with('-') => {
                return Err(format!("unknown option `{unknown}`"));
            }
            _ => break,
        }
    }

    options
        .files
        .extend(args[index..].iter().map(PathBuf::from));
    if options.files.is_empty() {
        return Err("missing file argument".to_owned());
    }
    Ok(Command::Execute(options))
}

fn execute_check(options: Options) -> i32 {
    let parse_options = ParseOptions::new().parse_sections(options.sections);
    let mut failed = false;

    for file in &options.files {
        // The accept-all registry keeps check focused on syntax.
        let mut sink = BTreeMap::<String, String>::new();
        if let Err(err) = from_path_with_options(file, &mut sink, &parse_options) {
            eprintln!("flagfile: {err}");
            failed = true;
        }
    }

    if failed { 1 } else { 0 }
}

fn execute_dump(options: Options) -> i32 {
    let [file] = options.files.as_slice() else {
        eprintln!("flagfile: dump takes exactly one file");
        return 1;
    };

    let parse_options = ParseOptions::new().parse_sections(options.sections);
    let mut pairs = BTreeMap::<String, String>::new();
    if let Err(err) = from_path_with_options(file, &mut pairs, &parse_options) {
        eprintln!("flagfile: {err}");
        return 1;
    }

    for (key, value) in &pairs {
        println!("{key}={value}");
    }
    0
}

fn print_help() {
    println!("{HELP}");
}

fn print_version() {
    println!("flagfile {}", env!("CARGO_PKG_VERSION"));
}
