//! CLI command implementations.

use std::fs;
use std::io::{self, Write};

use ls8_common::Program;
use ls8_loader::Policy;
use ls8_vm::{Config, Cpu, State};

/// Options shared by `run` and `trace`.
struct RunOptions {
    input: String,
    config: Config,
    policy: Policy,
}

fn strict_from_env() -> bool {
    matches!(
        std::env::var("LS8_STRICT").as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}

/// Parse `<input> [--strict] [--load-address N]`.
fn parse_run_args(command: &str, args: &[String]) -> Result<RunOptions, i32> {
    let usage = || {
        eprintln!("Usage: ls8 {command} <input.ls8> [--strict] [--load-address N]");
        1
    };

    let mut input = None;
    let mut strict = strict_from_env();
    let mut load_address = 0;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--strict" => strict = true,
            "--load-address" => {
                let Some(value) = iter.next() else {
                    eprintln!("error: --load-address requires a value");
                    return Err(usage());
                };
                load_address = parse_address(value).ok_or_else(|| {
                    eprintln!("error: invalid load address '{value}'");
                    1
                })?;
            }
            flag if flag.starts_with("--") => {
                eprintln!("error: unknown flag '{flag}'");
                return Err(usage());
            }
            path if input.is_none() => input = Some(path.to_string()),
            extra => {
                eprintln!("error: unexpected argument '{extra}'");
                return Err(usage());
            }
        }
    }

    let Some(input) = input else {
        eprintln!("error: {command} requires an input file");
        return Err(usage());
    };

    let policy = if strict {
        Policy::Strict
    } else {
        Policy::Permissive
    };
    let config = Config::default()
        .with_strict(strict)
        .with_load_address(load_address);
    log::debug!("{command}: {input} with {config:?}");

    Ok(RunOptions {
        input,
        config,
        policy,
    })
}

fn parse_address(text: &str) -> Option<usize> {
    match text.strip_prefix("0x") {
        Some(hex) => usize::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

/// Load and execute a .ls8 program, printing its output to stdout.
pub fn run(args: &[String]) -> Result<(), i32> {
    let opts = parse_run_args("run", args)?;
    let program = read_image(&opts.input, opts.policy)?;

    match ls8_vm::run_with(program.as_bytes(), opts.config, io::stdout()) {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

/// Execute a .ls8 program, printing a trace line per cycle to stderr.
pub fn trace(args: &[String]) -> Result<(), i32> {
    let opts = parse_run_args("trace", args)?;
    let program = read_image(&opts.input, opts.policy)?;

    let mut cpu = Cpu::new(opts.config, io::stdout());
    if let Err(fault) = cpu.load(program.as_bytes()) {
        eprintln!("runtime error: {fault}");
        return Err(3);
    }

    let mut cycles = 0usize;
    loop {
        eprintln!("{}", cpu.trace());
        let state = cpu.step().map_err(|e| {
            eprintln!("runtime error: {e}");
            3
        })?;
        cycles += 1;
        if state == State::Halted {
            break;
        }
    }

    cpu.into_output().flush().map_err(|e| {
        eprintln!("error: cannot write output: {e}");
        1
    })?;
    eprintln!("halted after {cycles} cycles");
    Ok(())
}

/// Assemble a mnemonic .asm file to annotated .ls8 text.
pub fn assemble(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: assemble requires an input file");
        eprintln!("Usage: ls8 assemble <input.asm> [-o output.ls8]");
        return Err(1);
    }

    let input = &args[0];

    let output = if args.len() >= 3 && args[1] == "-o" {
        args[2].clone()
    } else if let Some(stem) = input.strip_suffix(".asm") {
        format!("{stem}.ls8")
    } else {
        format!("{input}.ls8")
    };

    let text = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{input}': {e}");
        1
    })?;

    let program = ls8_loader::assemble(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    fs::write(&output, ls8_loader::annotate(&program)).map_err(|e| {
        eprintln!("error: cannot write '{output}': {e}");
        1
    })?;

    eprintln!("assembled {} bytes -> {output}", program.len());
    Ok(())
}

/// Disassemble a .ls8 program to mnemonic text on stdout.
pub fn disassemble(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: disassemble requires an input file");
        eprintln!("Usage: ls8 disassemble <input.ls8>");
        return Err(1);
    }

    let program = read_image(&args[0], Policy::Permissive)?;
    print!("{}", ls8_loader::disassemble(&program));
    Ok(())
}

/// Read and load a .ls8 file, reporting errors.
fn read_image(path: &str, policy: Policy) -> Result<Program, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })?;
    ls8_loader::load(&text, policy).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}
