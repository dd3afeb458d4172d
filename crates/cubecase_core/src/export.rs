//! Text renderings of a finished [`CaseTable`]
//!
//! - [`format_hardcoded`]: a Rust static holding every edge list and
//!   triangle list, for embedding the table in another crate
//! - [`format_triangle_table`]: the classic flattened layout where each row
//!   lists the edges of every triangle and ends with `-1`
//! - [`format_ron`]: the table data serialized with serde

use std::fmt::Write;

use ron::ser::PrettyConfig;

use crate::table::CaseTable;

/// Row terminator used by the flattened triangle table
pub const ROW_SENTINEL: i32 = -1;

fn push_padded(out: &mut String, values: impl Iterator<Item = usize>) {
    out.push_str("&[ ");
    for value in values {
        // Writing into a String cannot fail
        let _ = write!(out, "{:2}, ", value);
    }
    out.push(']');
}

/// Rust source for a `CASES` static, one `(edges, triangles)` entry per id
pub fn format_hardcoded(table: &CaseTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "pub static CASES: [(&[u8], &[u8]); {}] = [", table.iter().count());

    for (id, case) in table.iter() {
        out.push_str("    (");
        push_padded(&mut out, case.edges().iter().map(|e| e.index()));
        out.push_str(", ");
        push_padded(&mut out, case.triangles().iter().map(|&t| t as usize));
        let _ = writeln!(out, "), // {}", id);
    }

    out.push_str("];\n");
    out
}

/// Resolved edge ids of every case, each row closed by [`ROW_SENTINEL`]
pub fn triangle_table_rows(table: &CaseTable) -> Vec<Vec<i32>> {
    table
        .iter()
        .map(|(_, case)| {
            case.resolved_triangles()
                .map(|edge| edge.index() as i32)
                .chain(std::iter::once(ROW_SENTINEL))
                .collect()
        })
        .collect()
}

/// The flattened `TriangleTable` layout
pub fn format_triangle_table(table: &CaseTable) -> String {
    let mut out = String::from("const TriangleTable = [\n");
    for row in triangle_table_rows(table) {
        out.push_str("\t[");
        for value in row {
            let _ = write!(out, "{}, ", value);
        }
        // Drop the separator after the sentinel
        out.truncate(out.len() - 2);
        out.push_str(" ],\n");
    }
    out.push_str("];");
    out
}

/// The table as pretty-printed RON
pub fn format_ron(table: &CaseTable) -> Result<String, ron::Error> {
    ron::ser::to_string_pretty(table, PrettyConfig::default())
}
