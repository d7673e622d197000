//! HTML hook-table rendering.
//!
//! One table per letter bank, one row per word: lowercased front hooks, the
//! word itself with `&centerdot;` markers when it takes an internal front or
//! back hook, then lowercased back hooks.

use std::fmt::Write;

use super::WordEntry;

fn lowered(hooks: &[char]) -> String {
    hooks.iter().map(|c| c.to_ascii_lowercase()).collect()
}

/// Render one table row.
fn render_row(out: &mut String, entry: &WordEntry) {
    out.push_str("<tr>");
    let _ = write!(out, "<td class=\"fronthook\">{}</td>", lowered(&entry.front_hooks));
    out.push_str("<td class=\"mainword\">");
    if entry.has_internal_front_hook {
        out.push_str("&centerdot;");
    }
    out.push_str(&entry.word);
    if entry.has_internal_back_hook {
        out.push_str("&centerdot;");
    }
    out.push_str("</td>");
    let _ = write!(out, "<td class=\"backhook\">{}</td>", lowered(&entry.back_hooks));
    out.push_str("</tr>\n");
}

/// Render the hook table for one letter bank.
pub fn render_hook_table(bank: &str, entries: &[WordEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} <table>", bank);
    for entry in entries {
        render_row(&mut out, entry);
    }
    out.push_str("</table>\n");
    out
}
