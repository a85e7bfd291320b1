//! `opurl info` – describe the processor contract.

use anyhow::Result;
use opurl_core::processor::{VariableSpec, DESCRIPTION, INPUT_VARIABLES, OUTPUT_VARIABLES};

pub fn run_info() -> Result<()> {
    println!("Description: {DESCRIPTION}");
    println!("Input variables:");
    print_vars(INPUT_VARIABLES);
    println!("Output variables:");
    print_vars(OUTPUT_VARIABLES);
    Ok(())
}

fn print_vars(vars: &[VariableSpec]) {
    for v in vars {
        let required = if v.required { "required" } else { "optional" };
        println!("    {} ({})", v.name, required);
        println!("        {}", v.description);
    }
}
