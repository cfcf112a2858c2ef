//! Integration tests for the LS-8 loader and assembler.
//!
//! Tests cover:
//! - The sample programs under `tests/programs/` (assemble, load, execute)
//! - Loader policies on malformed input
//! - Roundtrip properties (disassemble → assemble, annotate → load)

use std::fs;
use std::path::{Path, PathBuf};

use ls8_common::Program;
use ls8_loader::{annotate, assemble, disassemble, load, LoadError, Policy};
use ls8_vm::{run_with, Config};

// ---- Test helpers ----

/// Return the absolute path to a sample program file.
fn sample(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/programs")
        .join(name)
}

fn read(name: &str) -> String {
    fs::read_to_string(sample(name)).unwrap()
}

/// Load `<name>.ls8` strictly and assemble `<name>.asm`; both must agree.
fn sample_image(name: &str) -> Program {
    let loaded = load(&read(&format!("{name}.ls8")), Policy::Strict).unwrap();
    let assembled = assemble(&read(&format!("{name}.asm"))).unwrap();
    assert_eq!(assembled, loaded, "{name}.asm and {name}.ls8 differ");
    loaded
}

fn output_of(program: &Program) -> String {
    let cpu = run_with(program.as_bytes(), Config::default(), Vec::new()).unwrap();
    assert!(cpu.is_halted());
    String::from_utf8(cpu.into_output()).unwrap()
}

// ---- Sample programs ----

#[test]
fn print8_sample() {
    let program = sample_image("print8");
    assert_eq!(program.len(), 6);
    assert_eq!(output_of(&program), "8\n");
}

#[test]
fn mult_sample() {
    assert_eq!(output_of(&sample_image("mult")), "90\n");
}

#[test]
fn stack_sample() {
    assert_eq!(output_of(&sample_image("stack")), "2\n4\n1\n");
}

#[test]
fn branch_sample() {
    assert_eq!(output_of(&sample_image("branch")), "1\n4\n");
}

#[test]
fn call_sample() {
    assert_eq!(output_of(&sample_image("call")), "10\n42\n");
}

#[test]
fn samples_disassemble_and_reassemble() {
    for name in ["print8", "mult", "stack", "branch", "call"] {
        let program = sample_image(name);
        let text = disassemble(&program);
        assert!(!text.contains("DB"), "{name} disassembled to raw data");
        assert_eq!(assemble(&text).unwrap(), program, "{name}");
    }
}

// ---- Loader policies ----

const WITH_GARBAGE: &str = "\
# header comment
10000010 # LDI R0,5

00000000
00000101
not a byte
01000111 # PRN R0
00000000
00000001 # HLT
";

#[test]
fn permissive_skips_malformed_lines() {
    let program = load(WITH_GARBAGE, Policy::Permissive).unwrap();
    assert_eq!(program.len(), 6);
    assert_eq!(output_of(&program), "5\n");
}

#[test]
fn strict_rejects_malformed_lines() {
    let err = load(WITH_GARBAGE, Policy::Strict).unwrap_err();
    assert_eq!(
        err,
        LoadError::MalformedLine {
            line: 6,
            text: "not a byte".to_string()
        }
    );
}

#[test]
fn default_policy_is_permissive() {
    assert_eq!(Policy::default(), Policy::Permissive);
}

#[test]
fn empty_source_loads_empty_image() {
    let program = load("# nothing here\n\n", Policy::Strict).unwrap();
    assert!(program.is_empty());
}

#[test]
fn annotated_assembly_loads_back() {
    let program = assemble(&read("call.asm")).unwrap();
    assert_eq!(load(&annotate(&program), Policy::Strict).unwrap(), program);
}

// ---- Property tests ----

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any byte image survives disassembly and reassembly unchanged.
        #[test]
        fn disassemble_then_assemble(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let program = Program::new(bytes);
            let text = disassemble(&program);
            prop_assert_eq!(assemble(&text).unwrap(), program);
        }

        /// Binary text written by `to_binary_text` loads back strictly.
        #[test]
        fn binary_text_loads_back(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let program = Program::new(bytes);
            prop_assert_eq!(load(&program.to_binary_text(), Policy::Strict).unwrap(), program);
        }
    }
}
