//! Integration tests for parsing and rendering.

use docuflow::render::{self, to_html, to_standalone, to_text, CITATION_CLASS};
use docuflow::{
    extract_table, parse, Block, Docuflow, Inline, JsonFormat, RenderOptions, StandaloneFormat,
    Theme,
};

const SAMPLE: &str = "# Title\n\nSome **bold** text with a [link](http://example.com).\n";

#[test]
fn test_concrete_scenario() {
    let doc = parse(SAMPLE);

    assert_eq!(
        doc.blocks,
        vec![
            Block::heading(1, vec![Inline::text("Title")]),
            Block::paragraph(vec![
                Inline::text("Some "),
                Inline::bold("bold"),
                Inline::text(" text with a "),
                Inline::link("link", "http://example.com"),
                Inline::text("."),
            ]),
        ]
    );
}

#[test]
fn test_plain_text_is_single_paragraph() {
    for input in ["hello world", "a plain sentence, with punctuation.", "x & y < z"] {
        let doc = parse(input);
        assert_eq!(doc.len(), 1, "input: {:?}", input);
        assert_eq!(doc.blocks[0], Block::text(docuflow::parser::escape_html(input)));
    }
}

#[test]
fn test_reserved_characters_never_become_markup() {
    let html = to_html(&parse("<b>bold?</b>"), &RenderOptions::default()).unwrap();
    assert!(html.contains("&lt;b&gt;bold?&lt;/b&gt;"));
    assert!(!html.contains("<b>"));
}

#[test]
fn test_table_counts_follow_lines() {
    let lines = [
        "| h1 | h2 | h3 |",
        "|----|:--:|---:|",
        "| a | b | c |",
        "",
        "| d | e |",
        "| f |",
    ];
    let table = extract_table(&lines).unwrap();
    let non_blank = lines.iter().filter(|l| !l.trim().is_empty()).count();

    assert_eq!(table.headers.len(), 3);
    assert_eq!(table.alignments.len(), 3);
    assert_eq!(table.rows.len(), non_blank - 2);
}

#[test]
fn test_bold_line_is_level_three_heading() {
    let doc = parse("Intro\n\n**Section**\n\nBody");
    assert_eq!(doc.blocks[1], Block::heading(3, vec![Inline::text("Section")]));
}

#[test]
fn test_triple_emphasis_single_span() {
    let doc = parse("a ***word*** b");
    assert_eq!(
        doc.blocks[0],
        Block::paragraph(vec![
            Inline::text("a "),
            Inline::bold_italic("word"),
            Inline::text(" b"),
        ])
    );
}

#[test]
fn test_two_items_then_paragraph() {
    let doc = parse("- one\n- two\n\nA paragraph.");
    assert_eq!(doc.len(), 2);
    assert!(matches!(&doc.blocks[0], Block::List(list) if list.len() == 2 && !list.ordered));
    assert_eq!(doc.blocks[1], Block::text("A paragraph."));
}

#[test]
fn test_theme_never_changes_structure() {
    let input = "# T\n\n**S**\n\n- a\n- b\n\n| x |\n|---|\n| 1 |\n\n> q\n\n$$m$$";
    let doc = parse(input);

    let structure = |html: &str| {
        html.split('<')
            .filter_map(|tag| tag.split([' ', '>']).next())
            .map(str::to_string)
            .collect::<Vec<_>>()
    };

    let baseline = structure(&to_html(&doc, &RenderOptions::default()).unwrap());
    for theme in Theme::ALL {
        let html = to_html(&doc, &RenderOptions::new().with_theme(theme)).unwrap();
        assert_eq!(structure(&html), baseline, "theme {}", theme);
        assert!(html.contains(theme.profile().accent));
    }
}

#[test]
fn test_links_marked_for_citation() {
    let html = to_html(&parse(SAMPLE), &RenderOptions::default()).unwrap();
    assert!(html.contains(&format!("class=\"{} ", CITATION_CLASS)));
    assert!(html.contains("href=\"http://example.com\""));
}

#[test]
fn test_math_isolated_from_emphasis() {
    let doc = parse("Energy $a*b*c$ here and\n$$\nx_1 * y_1\n$$");
    let html = to_html(&doc, &RenderOptions::default()).unwrap();

    assert!(html.contains(">$a*b*c$</span>"));
    assert!(html.contains(">$$x_1 * y_1$$</div>"));
    assert!(!html.contains("<em"));
}

#[test]
fn test_unterminated_delimiters_survive() {
    let inputs = ["**open", "`tick", "$money", "[label](", "```\nunfinished", "__"];
    for input in inputs {
        let text = to_text(&parse(input));
        assert_eq!(text, input, "input: {:?}", input);
    }
}

#[test]
fn test_text_roundtrip_unescapes() {
    let doc = parse("Fish & chips <3");
    assert_eq!(to_text(&doc), "Fish & chips <3");
}

#[test]
fn test_json_has_tagged_blocks() {
    let json = render::to_json(&parse(SAMPLE), JsonFormat::Compact).unwrap();
    assert!(json.contains("\"type\":\"heading\""));
    assert!(json.contains("\"type\":\"link\""));
    assert!(json.contains("\"citation\":true"));
}

#[test]
fn test_standalone_export() {
    let doc = parse(SAMPLE);
    let page = to_standalone(&doc, "Title", StandaloneFormat::Word, &RenderOptions::default())
        .unwrap();
    assert!(page.contains("<title>Title</title>"));
    assert!(page.contains("citation-link"));
}

#[test]
fn test_builder_result() {
    let result = Docuflow::new().with_theme(Theme::Modern).parse(SAMPLE);
    let text = result.to_text();
    assert_eq!(text, "Title\n\nSome bold text with a link.");
}

#[test]
fn test_large_input_does_not_fail() {
    let line = "word **bold *nested [x](y) ".repeat(2000);
    let doc = parse(&line);
    assert_eq!(doc.len(), 1);
    assert!(to_html(&doc, &RenderOptions::default()).is_ok());
}

#[test]
fn test_private_use_characters_kept() {
    for input in ["icon \u{E000} here", "\u{E001}\u{E000}0\u{E001}"] {
        let doc = parse(input);
        assert_eq!(doc.blocks, vec![Block::text(input)], "input: {:?}", input);
    }
}

#[test]
fn test_decomposed_input_unchanged() {
    let input = "cafe\u{301}";
    let doc = parse(input);
    assert_eq!(doc.blocks, vec![Block::text(input)]);

    let options = docuflow::ParseOptions::new().with_unicode_normalization(true);
    let composed = docuflow::parse_with_options(input, &options);
    assert_eq!(composed.blocks, vec![Block::text("caf\u{e9}")]);
}

#[test]
fn test_emphasis_inside_link_label() {
    let mut doc = parse("See [**bold** work](https://b.example).");
    let html = to_html(&doc, &RenderOptions::default()).unwrap();
    assert!(html.contains("<strong class=\"font-bold\">bold</strong> work</a>"));
    assert!(!html.contains("**"));

    let bib = docuflow::generate_bibliography(&mut doc).unwrap();
    assert_eq!(bib.references[0].label, "bold work");
}
