//! Rust module and demo rendering.

use std::fmt::Write;

use crate::list::InsultList;

/// Render `sudo_insults.rs`.
pub(super) fn render_module(insults: &InsultList) -> String {
    let mut out = String::new();
    out.push_str("use std::time::{SystemTime, UNIX_EPOCH};\n\n");
    out.push_str("pub const INSULTS: &[&str] = &[\n");
    for insult in insults.iter() {
        // Debug formatting of a str is a valid Rust string literal.
        let _ = writeln!(out, "    {:?},", insult);
    }
    out.push_str("];\n\n");
    out.push_str("pub fn get_insult() -> Option<&'static str> {\n");
    out.push_str("    if INSULTS.is_empty() {\n");
    out.push_str("        return None;\n");
    out.push_str("    }\n");
    out.push_str("    let millis = SystemTime::now()\n");
    out.push_str("        .duration_since(UNIX_EPOCH)\n");
    out.push_str("        .map(|d| d.as_millis())\n");
    out.push_str("        .unwrap_or(0);\n");
    out.push_str("    Some(INSULTS[(millis % INSULTS.len() as u128) as usize])\n");
    out.push_str("}\n");
    out
}

/// Render `demo.rs`, which pulls the module in by path.
pub(super) fn render_demo(module_name: &str) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "#[path = \"{module_name}.rs\"]\nmod {module_name};\n\n"
    );
    out.push_str("fn main() {\n");
    let _ = writeln!(
        out,
        "    if let Some(insult) = {module_name}::get_insult() {{"
    );
    out.push_str("        println!(\"{}\", insult);\n");
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}
