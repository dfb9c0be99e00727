use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::debug;

// ---------------------------------------------------------------------------
// GateRecord
// ---------------------------------------------------------------------------

/// A test gate declared in the epics document.
///
/// `name` is always non-empty. The other fields are empty strings when the
/// document leaves them out, so every record has the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateRecord {
    pub name: String,
    pub trigger: String,
    pub command: String,
    pub purpose: String,
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static HEADING_RE: OnceLock<Regex> = OnceLock::new();
static TRIGGER_RE: OnceLock<Regex> = OnceLock::new();
static COMMAND_RE: OnceLock<Regex> = OnceLock::new();
static PURPOSE_RE: OnceLock<Regex> = OnceLock::new();

fn heading_re() -> &'static Regex {
    HEADING_RE.get_or_init(|| Regex::new(r"(?m)^[ \t]*###[ \t]+Test Gate:(.*)$").unwrap())
}

fn trigger_re() -> &'static Regex {
    TRIGGER_RE.get_or_init(|| Regex::new(r"\*\*Trigger:\*\*[ \t]+(.+)").unwrap())
}

fn command_re() -> &'static Regex {
    COMMAND_RE.get_or_init(|| Regex::new(r"\*\*Command:\*\*[ \t]+`([^`\r\n]+)`").unwrap())
}

fn purpose_re() -> &'static Regex {
    PURPOSE_RE.get_or_init(|| Regex::new(r"\*\*Purpose:\*\*[ \t]+(.+)").unwrap())
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// First match of `re` inside `block`, trimmed. `None` when the label is
/// missing, malformed, or carries only whitespace.
fn field<'a>(re: &Regex, block: &'a str) -> Option<&'a str> {
    let value = re.captures(block)?.get(1)?.as_str().trim();
    (!value.is_empty()).then_some(value)
}

/// Parse every `### Test Gate: <name>` block out of `content`, in document
/// order.
///
/// A block runs from its heading to the next gate heading or end of input.
/// Headings with an empty name still end the previous block but produce no
/// record. This never fails: missing or malformed fields become empty
/// strings.
pub fn parse_test_gates(content: &str) -> Vec<GateRecord> {
    let headings: Vec<(usize, usize, &str)> = heading_re()
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str().trim();
            Some((whole.start(), whole.end(), name))
        })
        .collect();

    let mut gates = Vec::with_capacity(headings.len());
    for (i, &(_, body_start, name)) in headings.iter().enumerate() {
        if name.is_empty() {
            debug!("skipping test gate heading with empty name");
            continue;
        }
        let body_end = headings
            .get(i + 1)
            .map(|&(next_start, _, _)| next_start)
            .unwrap_or(content.len());
        let block = &content[body_start..body_end];

        gates.push(GateRecord {
            name: name.to_string(),
            trigger: field(trigger_re(), block).unwrap_or_default().to_string(),
            command: field(command_re(), block).unwrap_or_default().to_string(),
            purpose: field(purpose_re(), block).unwrap_or_default().to_string(),
        });
    }

    debug!(count = gates.len(), "extracted test gates");
    gates
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
