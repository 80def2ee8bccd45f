//! Python module and demo rendering.

use std::fmt::Write;

use crate::error::Result;
use crate::list::InsultList;

const HEADER: &str = "#!/usr/bin/env python\n# -*- coding: utf-8 -*-\n";

/// Render `SudoInsults.py`.
pub(super) fn render_module(insults: &InsultList) -> Result<String> {
    let mut out = String::from(HEADER);
    out.push_str("import time\n\n");
    out.push_str("INSULTS = [\n");
    for insult in insults.iter() {
        // JSON string literals are valid Python string literals.
        let _ = writeln!(out, "    {},", serde_json::to_string(insult)?);
    }
    out.push_str("]\n\n\n");
    out.push_str("def get_insult():\n");
    out.push_str("    if not INSULTS:\n");
    out.push_str("        return None\n");
    out.push_str("    return INSULTS[int(round(time.time() * 1000)) % len(INSULTS)]\n");
    Ok(out)
}

/// Render `demo.py`. A missing module makes the demo a no-op.
pub(super) fn render_demo(module_name: &str) -> String {
    let mut out = String::from(HEADER);
    let _ = write!(
        out,
        "try:\n    from {module_name} import get_insult\nexcept ImportError:\n    get_insult = None\n\n"
    );
    out.push_str("if get_insult:\n");
    out.push_str("    insult = get_insult()\n");
    out.push_str("    if insult is not None:\n");
    out.push_str("        print(insult)\n");
    out
}
