use super::{walk, Block, Body, Cell, Paragraph, Run, Table};

fn para(text: &str) -> Block {
    Block::Paragraph(Paragraph::plain(text))
}

fn cell(blocks: Vec<Block>) -> Cell {
    Cell { blocks }
}

#[test]
fn test_walk_plain_paragraphs_in_order() {
    let body = Body {
        blocks: vec![para("one"), para("two"), para("three")],
    };
    let texts: Vec<&str> = walk(&body).map(|r| r.text).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
    assert!(walk(&body).all(|r| !r.is_table_cell));
}

#[test]
fn test_walk_tables_row_major_depth_first() {
    let nested = Block::Table(Table {
        rows: vec![vec![cell(vec![para("n1")]), cell(vec![para("n2")])]],
    });
    let body = Body {
        blocks: vec![
            para("before"),
            Block::Table(Table {
                rows: vec![
                    vec![cell(vec![para("r1c1")]), cell(vec![para("r1c2"), nested])],
                    vec![cell(vec![]), cell(vec![para("r2c2")])],
                ],
            }),
            para("after"),
        ],
    };

    let records: Vec<(&str, bool)> = walk(&body).map(|r| (r.text, r.is_table_cell)).collect();
    assert_eq!(
        records,
        vec![
            ("before", false),
            ("r1c1", true),
            ("r1c2", true),
            ("n1", true),
            ("n2", true),
            ("r2c2", true),
            ("after", false),
        ]
    );
}

#[test]
fn test_walk_empty_body() {
    assert_eq!(walk(&Body::default()).count(), 0);
}

#[test]
fn test_record_carries_style_runs_and_alignment() {
    let paragraph = Paragraph::from_runs(
        vec![
            Run {
                text: "Общие ".to_string(),
                bold: true,
            },
            Run {
                text: "сведения".to_string(),
                bold: true,
            },
            Run {
                text: ":".to_string(),
                bold: false,
            },
        ],
        "Normal",
        Some("center".to_string()),
    );
    let body = Body {
        blocks: vec![Block::Paragraph(paragraph)],
    };
    let record = walk(&body).next().unwrap();
    assert_eq!(record.text, "Общие сведения:");
    assert_eq!(record.style_name, "Normal");
    assert_eq!(record.alignment, Some("center"));
    assert_eq!(record.bold_text(), "Общие сведения");
}

#[test]
fn test_body_json_shape() {
    let json = r#"{"blocks": [
        {"type": "paragraph", "text": "Заголовок", "style": "Heading 1"},
        {"type": "table", "rows": [[{"blocks": [{"type": "paragraph", "text": "cell"}]}]]}
    ]}"#;
    let body: Body = serde_json::from_str(json).unwrap();
    let records: Vec<_> = walk(&body).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].style_name, "Heading 1");
    assert!(records[0].runs.is_empty());
    assert!(records[1].is_table_cell);
}
