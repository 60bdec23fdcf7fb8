use crate::error::{EsfError, EsfResult};
use std::fmt::Write;

/// Canonical rendering of the permutation on zero elements.
pub const EMPTY_PERMUTATION: &str = "()";

/// Split `labels` into consecutive groups sized by `cycle_lengths` and write
/// them in disjoint-cycle notation, e.g. `(3 1)(5 2 4)`.
pub fn format_cycle_notation(cycle_lengths: &[usize], labels: &[usize]) -> EsfResult<String> {
    if let Some(position) = cycle_lengths.iter().position(|&len| len == 0) {
        return Err(EsfError::EmptyCycle(position));
    }
    let cycle_total = cycle_lengths
        .iter()
        .try_fold(0usize, |acc, &len| acc.checked_add(len));
    match cycle_total {
        Some(total) if total == labels.len() => {}
        _ => {
            return Err(EsfError::PreconditionViolation {
                cycle_total: cycle_total.unwrap_or(usize::MAX),
                label_count: labels.len(),
            })
        }
    }
    if labels.is_empty() {
        return Ok(EMPTY_PERMUTATION.to_string());
    }

    let mut out = String::with_capacity(labels.len() * 3 + cycle_lengths.len() * 2);
    let mut cycle = 0;
    let mut remaining = cycle_lengths[0];
    out.push('(');
    for (i, label) in labels.iter().enumerate() {
        // writing into a String cannot fail
        let _ = write!(out, "{label}");
        remaining -= 1;
        if remaining > 0 {
            out.push(' ');
            continue;
        }
        out.push(')');
        cycle += 1;
        if i + 1 < labels.len() {
            out.push('(');
            remaining = cycle_lengths[cycle];
        }
    }
    log::trace!("formatted {} labels into {cycle} cycles", labels.len());
    Ok(out)
}
