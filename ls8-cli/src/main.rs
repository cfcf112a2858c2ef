//! LS-8 CLI: run, trace, assemble, and disassemble programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage/input/load/assembly error
//! - 3: Runtime fault

mod commands;

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "trace" => commands::trace(&args[2..]),
        "assemble" => commands::assemble(&args[2..]),
        "disassemble" => commands::disassemble(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: ls8 <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <input.ls8> [--strict] [--load-address N]   Load and execute a program");
    eprintln!("  trace <input.ls8> [--strict] [--load-address N] Execute, tracing each cycle");
    eprintln!("  assemble <input.asm> [-o output.ls8]           Assemble mnemonics to .ls8");
    eprintln!("  disassemble <input.ls8>                        Disassemble .ls8 to mnemonics");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LS8_STRICT=1   same as --strict");
    eprintln!("  RUST_LOG       log filter (default: warn)");
}
