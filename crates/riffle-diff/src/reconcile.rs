// Single-line copy between the two sides.

use crate::lines::join_lines;

/// Overwrite `target[index]` with `source[index]` and return the new full
/// text for the target side.
///
/// The copy is skipped (and the target returned unchanged) when the source
/// index is out of range, the source line is empty, or the index is past
/// the end of the target. No growth of the target ever happens and no case
/// is an error. The returned text is already normalized; the caller feeds
/// it straight back into the next alignment cycle.
pub fn copy_line(source: &[String], target: &[String], index: usize) -> String {
    let mut out = target.to_vec();
    if let Some(line) = source.get(index) {
        if !line.is_empty() && index < out.len() {
            out[index] = line.clone();
        }
    }
    join_lines(&out)
}
