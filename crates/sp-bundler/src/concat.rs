//! Stage 2: Concat — merge ordered fragments into one text.

use sp_core::{FragmentRole, SourceFragment};

/// Merge headers then sources into a single text. Each fragment is preceded
/// by an origin marker comment (stripped by the comment stage) and any line
/// whose first non-indent content is a quoted `#include "…"` is dropped —
/// those are project-local and already inlined by the merge order. Angle
/// bracket includes are left for the downstream compiler.
pub fn merge(headers: &[SourceFragment], sources: &[SourceFragment]) -> String {
    let mut merged = String::new();
    for frag in headers.iter().chain(sources.iter()) {
        let tag = match frag.role {
            FragmentRole::Header => "HEADER",
            FragmentRole::TranslationUnit => "SOURCE",
        };
        merged.push_str(&format!("// {} {}\n", tag, frag.path.display()));
        merged.push_str(&frag.text);
        merged.push('\n');
    }
    drop_local_includes(&merged)
}

/// Remove every line that opens a project-local include directive.
pub fn drop_local_includes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        if line.trim_start().starts_with("#include \"") {
            continue;
        }
        out.push_str(line);
    }
    out
}
