// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use chipmark_engine::ReferenceEntry;

#[allow(dead_code)]
pub fn generate_note_content(size: usize) -> String {
    let base = "# Weekly sync\n\nPing @Acme Corp about the **contract** and see [[Roadmap|the plan]].\nSecond line with `inline code` and _emphasis_.\n\n- [ ] follow up with @Ann\n- [x] send *draft* to [[Legal]]\n- plain bullet\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_reference_heavy_content(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&format!(
            "@Person {i} met @Acme Corp re [[Note {i}]] and [[Roadmap|plan {i}]]\n"
        ));
    }
    content
}

#[allow(dead_code)]
pub fn generate_references(count: usize) -> Vec<ReferenceEntry> {
    let mut refs = vec![
        ReferenceEntry::new("e-acme", "Acme Corp"),
        ReferenceEntry::new("e-ann", "Ann"),
        ReferenceEntry::new("n-roadmap", "Roadmap"),
        ReferenceEntry::new("n-legal", "Legal"),
    ];
    for i in 0..count {
        refs.push(ReferenceEntry::new(format!("n-{i}"), format!("Note {i}")));
    }
    refs
}
