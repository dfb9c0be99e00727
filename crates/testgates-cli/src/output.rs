use clap::ValueEnum;
use serde::Serialize;
use testgates_core::{DiscoveryResult, GateRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Human-readable rendering of a successful discovery.
pub fn render_text(result: &DiscoveryResult) -> String {
    match result {
        DiscoveryResult::Next {
            next_gate: Some(gate),
            ..
        } => format!(
            "Next Test Gate: {}\nCommand: {}\nPurpose: {}\n",
            gate.name, gate.command, gate.purpose
        ),
        DiscoveryResult::Next {
            next_gate: None,
            all_gates,
        } => render_gate_list(all_gates),
        DiscoveryResult::Gates { test_gates } => render_gate_list(test_gates),
        DiscoveryResult::Error { error, .. } => format!("Error: {error}\n"),
    }
}

fn render_gate_list(gates: &[GateRecord]) -> String {
    gates
        .iter()
        .map(|g| {
            format!(
                "\nTest Gate: {}\n  Trigger: {}\n  Command: {}\n  Purpose: {}\n",
                g.name, g.trigger, g.command, g.purpose
            )
        })
        .collect()
}
