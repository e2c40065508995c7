//! End-to-end parse tests: source text in, tree out.

use plume::{parse, Converter, Node};

fn text(value: &str) -> Node {
    Node::Text {
        value: value.to_string(),
    }
}

#[test]
fn heading_scenario() {
    assert_eq!(parse("## Title"), Node::Document {
        children: vec![Node::Header {
            level: 2,
            children: vec![text("Title")],
        }],
    });
}

#[test]
fn two_item_list_scenario() {
    assert_eq!(parse("- a\n- b"), Node::Document {
        children: vec![Node::List {
            level: 1,
            ordered: false,
            children: vec![
                Node::ListItem {
                    children: vec![text("a")]
                },
                Node::ListItem {
                    children: vec![text("b")]
                },
            ],
        }],
    });
}

#[test]
fn task_list_scenario() {
    let Node::Document { children } = parse("- [ ] x\n- [x] y") else {
        panic!("expected document");
    };
    let Node::List { children: items, .. } = &children[0] else {
        panic!("expected list");
    };
    assert_eq!(items[0], Node::TaskItem {
        checked: false,
        children: vec![text("x")],
    });
    assert_eq!(items[1], Node::TaskItem {
        checked: true,
        children: vec![text("y")],
    });
}

#[test]
fn footnote_reference_before_definition() {
    let parsed = Converter::default().parse("see[^1]\n[^1]: note");
    assert!(parsed.footnotes.is_valid());
    assert_eq!(parsed.footnotes.ref_index("1"), Some(1));
    assert_eq!(parsed.footnotes.get_def("1"), Some("note"));

    let Node::Document { children } = parsed.document else {
        panic!("expected document");
    };
    assert_eq!(children, vec![Node::Paragraph {
        children: vec![
            text("see"),
            Node::FootnoteRef {
                id: "1".to_string()
            },
        ],
    }]);
}

#[test]
fn footnote_first_use_ordering() {
    let parsed = Converter::default().parse("[^a] then [^b] then [^a] again");
    assert_eq!(parsed.footnotes.used_refs(), ["a", "b"]);
    assert_eq!(parsed.footnotes.ref_index("a"), Some(1));
    assert_eq!(parsed.footnotes.ref_index("b"), Some(2));
    // References without definitions still get a use-order index, but the
    // resolver as a whole is not valid.
    assert!(!parsed.footnotes.is_valid());
}

#[test]
fn definitions_overwrite_and_produce_no_nodes() {
    let parsed = Converter::default().parse("[^x]: first\n[^x]: second\nbody[^x]");
    assert_eq!(parsed.footnotes.get_def("x"), Some("second"));
    let Node::Document { children } = parsed.document else {
        panic!("expected document");
    };
    // Only the body paragraph survives; definitions are side effects.
    assert_eq!(children.len(), 1);
}

#[test]
fn malformed_table_degrades_to_a_single_text_node() {
    let Node::Document { children } = parse("| a | b |\n|---|") else {
        panic!("expected document");
    };
    assert_eq!(children, vec![Node::Paragraph {
        children: vec![text("| a | b |\n|---|\n")],
    }]);
}

#[test]
fn well_formed_table_round_trip() {
    let input = "| h1 | h2 | h3 |\n|---|---|---|\n| a | b | c |\n| d | e | f |";
    let Node::Document { children } = parse(input) else {
        panic!("expected document");
    };
    assert_eq!(children.len(), 1);
    let Node::Table { rows } = &children[0] else {
        panic!("expected table");
    };
    assert_eq!(rows.len(), 3);
    assert!(rows[0].is_header);
    assert!(rows.iter().all(|row| row.cells.len() == 3));
}

#[test]
fn image_is_a_block_level_node() {
    let Node::Document { children } = parse("before ![x](y.png) after") else {
        panic!("expected document");
    };
    // The image splits the line: paragraph, image, paragraph.
    assert_eq!(children.len(), 3);
    assert!(matches!(children[0], Node::Paragraph { .. }));
    assert_eq!(children[1], Node::Image {
        src: "y.png".to_string(),
        alt: "x".to_string(),
    });
    assert!(matches!(children[2], Node::Paragraph { .. }));
}

#[test]
fn quote_wraps_rest_of_line_in_a_paragraph() {
    assert_eq!(parse("> quoted"), Node::Document {
        children: vec![Node::Quote {
            children: vec![Node::Paragraph {
                children: vec![text(" quoted")],
            }],
        }],
    });
}

#[test]
fn every_input_yields_a_document() {
    for input in [
        "",
        "\n\n\n",
        "****",
        "~~",
        "[",
        "![",
        "[^",
        "|",
        "- ",
        "> ",
        "``````",
        "<",
        "<>",
        "\\",
    ] {
        let node = parse(input);
        assert!(
            matches!(node, Node::Document { .. }),
            "input {input:?} did not produce a document"
        );
    }
}

#[test]
fn serialized_nodes_carry_a_type_tag() {
    let value = serde_json::to_value(parse("## T")).expect("serializable");
    assert_eq!(value["type"], "Document");
    assert_eq!(value["children"][0]["type"], "Header");
    assert_eq!(value["children"][0]["level"], 2);
}
