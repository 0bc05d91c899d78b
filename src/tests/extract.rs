use super::{Extractor, PassKind, Sections};
use crate::document::{walk, Block, Body, Cell, Paragraph, Run, Table};
use crate::engine::Settings;
use crate::matcher::LeafMatcher;
use crate::nlp::{Language, Scorer};

const LEAVES: [&str; 3] = [
    "Общие сведения",
    "Требования к надежности",
    "Условное обозначение",
];

fn body(paragraphs: &[&str]) -> Body {
    Body {
        blocks: paragraphs
            .iter()
            .map(|t| Block::Paragraph(Paragraph::plain(*t)))
            .collect(),
    }
}

fn extract(pass: PassKind, body: &Body, settings: &Settings) -> Sections {
    let scorer = Scorer::for_language(Language::Russian);
    let matcher = LeafMatcher::new(&scorer, &LEAVES);
    let records: Vec<_> = walk(body).collect();
    Extractor::new(&matcher, settings).run(pass, &records)
}

fn scenario() -> Body {
    body(&[
        "1.1 Общие сведения:",
        "Система предназначена для учёта.",
        "2.1 Требования к надежности: Среднее время восстановления — 1 час.",
    ])
}

#[test]
fn test_pass_kind_names() {
    for pass in [PassKind::ColonSplit, PassKind::Positional, PassKind::ColonGrouping] {
        assert_eq!(pass.name().parse::<PassKind>().unwrap(), pass);
    }
    assert!("sideways".parse::<PassKind>().is_err());
}

#[test]
fn test_colon_split_on_scenario() {
    let sections = extract(PassKind::ColonSplit, &scenario(), &Settings::default());
    assert_eq!(sections.len(), 1);
    assert_eq!(
        sections["2.1 Требования к надежности"],
        "Среднее время восстановления — 1 час."
    );
}

#[test]
fn test_positional_on_scenario() {
    let sections = extract(PassKind::Positional, &scenario(), &Settings::default());
    assert_eq!(sections.len(), 1);
    assert_eq!(
        sections["Общие сведения:"],
        "Система предназначена для учёта."
    );
}

#[test]
fn test_colon_split_requires_both_halves() {
    let doc = body(&["Общие сведения:", ": пусто", "Общие сведения:   "]);
    assert!(extract(PassKind::ColonSplit, &doc, &Settings::default()).is_empty());
}

#[test]
fn test_colon_split_skips_table_cells() {
    let cell = Cell {
        blocks: vec![Block::Paragraph(Paragraph::plain(
            "Условное обозначение: АИС",
        ))],
    };
    let doc = Body {
        blocks: vec![Block::Table(Table {
            rows: vec![vec![cell]],
        })],
    };
    assert!(extract(PassKind::ColonSplit, &doc, &Settings::default()).is_empty());
}

#[test]
fn test_colon_split_accepts_bold_label() {
    let paragraph = Paragraph::from_runs(
        vec![
            Run {
                text: "Шифр темы:".to_string(),
                bold: true,
            },
            Run {
                text: " АИС ТСЖ".to_string(),
                bold: false,
            },
        ],
        "Normal",
        None,
    );
    let doc = Body {
        blocks: vec![Block::Paragraph(paragraph)],
    };
    let sections = extract(PassKind::ColonSplit, &doc, &Settings::default());
    assert_eq!(sections["Шифр темы"], "АИС ТСЖ");
}

#[test]
fn test_positional_joins_and_terminates_chunks() {
    let doc = body(&[
        "Общие сведения",
        "1) первая строка",
        "",
        "вторая строка!",
        "Требования к надежности",
        "Надежность обеспечивается резервированием",
    ]);
    let sections = extract(PassKind::Positional, &doc, &Settings::default());
    assert_eq!(
        sections["Общие сведения"],
        "первая строка.\nвторая строка!"
    );
    assert_eq!(
        sections["Требования к надежности"],
        "Надежность обеспечивается резервированием."
    );
}

#[test]
fn test_positional_keeps_capital_one_letter_words() {
    let doc = body(&[
        "Общие сведения",
        "В системе предусмотрено резервирование.",
        "К системе предъявляются требования.",
    ]);
    let sections = extract(PassKind::Positional, &doc, &Settings::default());
    assert_eq!(
        sections["Общие сведения"],
        "В системе предусмотрено резервирование.\nК системе предъявляются требования."
    );
}

#[test]
fn test_positional_custom_joiner_without_termination() {
    let settings = Settings {
        joiner: " ".to_string(),
        terminate_sentences: false,
        ..Settings::default()
    };
    let doc = body(&["Общие сведения", "раз", "два"]);
    let sections = extract(PassKind::Positional, &doc, &settings);
    assert_eq!(sections["Общие сведения"], "раз два");
}

#[test]
fn test_positional_ignores_text_before_first_heading() {
    let doc = body(&["Титульный лист", "Общие сведения", "Содержание раздела."]);
    let sections = extract(PassKind::Positional, &doc, &Settings::default());
    assert_eq!(sections.len(), 1);
    assert_eq!(sections["Общие сведения"], "Содержание раздела.");
}

#[test]
fn test_positional_repeated_heading_keeps_last_text() {
    let doc = body(&[
        "Общие сведения",
        "Первый вариант.",
        "Общие сведения",
        "Второй вариант.",
    ]);
    let sections = extract(PassKind::Positional, &doc, &Settings::default());
    assert_eq!(sections.len(), 1);
    assert_eq!(sections["Общие сведения"], "Второй вариант.");
}

#[test]
fn test_colon_grouping_collects_following_paragraphs() {
    let doc = body(&[
        "1.2 Условное обозначение: АИС «Товарищество»",
        "Полное наименование системы",
        "3.1 Заказчик: ООО «Ромашка»",
        "Требования к надежности:",
        "Резервирование серверов",
    ]);
    let sections = extract(PassKind::ColonGrouping, &doc, &Settings::default());
    assert_eq!(
        sections["Условное обозначение"],
        "АИС «Товарищество».\nПолное наименование системы."
    );
    assert_eq!(sections["Заказчик"], "ООО «Ромашка»");
    assert_eq!(
        sections["Требования к надежности"],
        "Резервирование серверов."
    );
}

#[test]
fn test_colon_grouping_drops_unmatched_colon_paragraphs() {
    let doc = body(&[
        "Условное обозначение: АИС",
        "Примечание: см. приложение",
        "Полное наименование системы",
    ]);
    let sections = extract(PassKind::ColonGrouping, &doc, &Settings::default());
    assert_eq!(sections.len(), 1);
    assert_eq!(
        sections["Условное обозначение"],
        "АИС.\nПолное наименование системы."
    );
}
