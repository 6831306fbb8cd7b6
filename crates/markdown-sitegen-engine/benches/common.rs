// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** _content_ and a [link](https://example.com).\n\n- Bullet point\n- Another item with `code`\n\n1. First\n2. Second\n\n> Quoted\n> text\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_line(words: usize) -> String {
    let pieces = [
        "plain ",
        "**bold** ",
        "_italic_ ",
        "`code` ",
        "[link](https://example.com/a_b) ",
        "![img](/i.png) ",
    ];
    (0..words).map(|i| pieces[i % pieces.len()]).collect()
}
