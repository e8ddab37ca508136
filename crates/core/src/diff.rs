//! Line diff between two article revisions.
//!
//! Markdown articles are line-oriented enough that a plain LCS over lines
//! gives a readable revision comparison without pulling in a diff crate.

/// Classification of one output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLineType {
    Added,
    Removed,
    Unchanged,
}

/// One line of the comparison, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub line_type: DiffLineType,
    pub content: String,
}

/// Compare two revisions line by line.
///
/// Lines present in both revisions (per longest common subsequence) come out
/// `Unchanged`; lines only in `old` come out `Removed`, lines only in `new`
/// come out `Added`. The result reads top to bottom as the new revision with
/// removals interleaved where they used to be.
pub fn compute_line_diff(old: &str, new: &str) -> Vec<DiffLine> {
    let before: Vec<&str> = old.lines().collect();
    let after: Vec<&str> = new.lines().collect();

    // lcs[i][j] is the LCS length of before[i..] and after[j..].
    let mut lcs = vec![vec![0usize; after.len() + 1]; before.len() + 1];
    for i in (0..before.len()).rev() {
        for j in (0..after.len()).rev() {
            lcs[i][j] = if before[i] == after[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    // Walk both revisions forward, emitting lines as we consume them.
    let mut lines = Vec::with_capacity(before.len().max(after.len()));
    let (mut i, mut j) = (0, 0);
    while i < before.len() && j < after.len() {
        if before[i] == after[j] {
            lines.push(DiffLine {
                line_type: DiffLineType::Unchanged,
                content: before[i].to_string(),
            });
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            lines.push(DiffLine {
                line_type: DiffLineType::Removed,
                content: before[i].to_string(),
            });
            i += 1;
        } else {
            lines.push(DiffLine {
                line_type: DiffLineType::Added,
                content: after[j].to_string(),
            });
            j += 1;
        }
    }
    for line in &before[i..] {
        lines.push(DiffLine {
            line_type: DiffLineType::Removed,
            content: line.to_string(),
        });
    }
    for line in &after[j..] {
        lines.push(DiffLine {
            line_type: DiffLineType::Added,
            content: line.to_string(),
        });
    }

    lines
}
