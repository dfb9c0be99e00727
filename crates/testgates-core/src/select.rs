use crate::gate::GateRecord;
use tracing::debug;

/// Pick the gate that should run next.
///
/// Returns the first gate in document order, or `None` when there are no
/// gates. The story key does not influence the choice yet: correlating a
/// story's completion with a gate's `trigger` is not defined, so every story
/// (known or not) gets the first gate.
pub fn next_gate<'a>(gates: &'a [GateRecord], story: Option<&str>) -> Option<&'a GateRecord> {
    debug!(?story, gates = gates.len(), "selecting next test gate");
    gates.first()
}
