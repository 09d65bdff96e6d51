use crate::operand::Operand;
use stridex_core::layout::Layout;

/// Where the output index stream comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSpec<'a> {
    /// No output operand; only positions and input indices are produced.
    None,
    /// Output is operand A; its index is A's index at every step.
    AliasA,
    /// Output is operand B; its index is B's index at every step.
    AliasB,
    /// Output is a separate array with its own layout.
    Distinct(&'a Layout),
}

/// Decides once whether `out` shares its identity with `a` or `b`.
///
/// An output that is both A and B follows A.
pub fn resolve_output<'a, T: Operand>(a: &T, b: &T, out: Option<&'a T>) -> OutputSpec<'a> {
    let spec = match out {
        None => OutputSpec::None,
        Some(o) if o.is_same(a) => OutputSpec::AliasA,
        Some(o) if o.is_same(b) => OutputSpec::AliasB,
        Some(o) => OutputSpec::Distinct(o.layout()),
    };

    tracing::debug!(output = spec_name(&spec), "resolved broadcast output");
    spec
}

fn spec_name(spec: &OutputSpec<'_>) -> &'static str {
    match spec {
        OutputSpec::None => "none",
        OutputSpec::AliasA => "alias-a",
        OutputSpec::AliasB => "alias-b",
        OutputSpec::Distinct(_) => "distinct",
    }
}
