use super::{
    ends_with_punctuation, has_numbering, is_styled_heading, matches_template, split_heading,
    strip_numbering, trim_special,
};
use crate::document::{ParagraphRecord, Run};
use crate::matcher::LeafMatcher;
use crate::nlp::{Language, Scorer};

fn record<'a>(
    text: &'a str,
    style: &'a str,
    runs: &'a [Run],
    alignment: Option<&'a str>,
) -> ParagraphRecord<'a> {
    ParagraphRecord {
        text,
        style_name: style,
        runs,
        alignment,
        is_table_cell: false,
    }
}

fn bold(text: &str) -> Run {
    Run {
        text: text.to_string(),
        bold: true,
    }
}

fn plain(text: &str) -> Run {
    Run {
        text: text.to_string(),
        bold: false,
    }
}

#[test]
fn test_strip_numbering() {
    assert_eq!(strip_numbering("2.1 Требования к надежности"), "Требования к надежности");
    assert_eq!(strip_numbering("1.1.2. Состав работ").trim(), "Состав работ");
    assert_eq!(strip_numbering("а) перечень").trim(), "перечень");
    assert_eq!(strip_numbering("Общие сведения"), "Общие сведения");
    assert_eq!(strip_numbering("В системе"), "В системе");
    assert_eq!(strip_numbering("К. Иванов"), "К. Иванов");
    assert_eq!(strip_numbering(""), "");
}

#[test]
fn test_has_numbering() {
    assert!(has_numbering("4.2 Порядок контроля"));
    assert!(!has_numbering("Порядок контроля"));
    assert!(!has_numbering("4.2 "));
}

#[test]
fn test_split_heading_first_colon_only() {
    assert_eq!(
        split_heading("Шифр: АИС: версия 2"),
        Some(("Шифр", " АИС: версия 2"))
    );
    assert_eq!(split_heading("без двоеточия"), None);
}

#[test]
fn test_trim_special() {
    assert_eq!(trim_special("  — «АИС».  "), "«АИС»");
    assert_eq!(trim_special("(текст);"), "текст");
    assert_eq!(trim_special("..."), "");
}

#[test]
fn test_heading_style_names() {
    let runs = [plain("Введение")];
    assert!(is_styled_heading(&record("Введение", "Heading 1", &runs, None), "Введение"));
    assert!(is_styled_heading(&record("Введение", "heading 2", &runs, None), "Введение"));
    let localized = record("Введение", "Заголовок 1", &runs, Some("center"));
    assert!(is_styled_heading(&localized, "Введение"));
    assert!(!is_styled_heading(&record("Введение", "Normal", &runs, None), "Введение"));
    assert!(!is_styled_heading(&record("   ", "Heading 1", &runs, None), "   "));
}

#[test]
fn test_bold_paragraph_is_heading_only_with_default_alignment() {
    let runs = [bold("Общие "), bold("сведения")];
    let left = record("Общие сведения", "Normal", &runs, None);
    let centered = record("Общие сведения", "Normal", &runs, Some("center"));
    assert!(is_styled_heading(&left, left.text));
    assert!(!is_styled_heading(&centered, centered.text));
}

#[test]
fn test_partially_bold_paragraph_is_not_heading() {
    let runs = [bold("Внимание"), plain(" обычный текст")];
    let r = record("Внимание обычный текст", "Normal", &runs, None);
    assert!(!is_styled_heading(&r, r.text));
}

#[test]
fn test_bold_label_before_colon() {
    let runs = [bold("Шифр темы:"), plain(" АИС ТСЖ")];
    let r = record("Шифр темы: АИС ТСЖ", "Normal", &runs, None);
    let (heading, _) = split_heading(r.text).unwrap();
    assert!(is_styled_heading(&r, heading));
}

#[test]
fn test_matches_template_ignores_numbering() {
    let scorer = Scorer::for_language(Language::Russian);
    let matcher = LeafMatcher::new(&scorer, &["Общие сведения", "Требования к надежности"]);
    assert!(matches_template(&matcher, "1.1 Общие сведения", 0.5));
    assert!(matches_template(&matcher, "а) Требования к надежности", 0.6));
    assert!(!matches_template(&matcher, "3.4 ", 0.5));
    assert!(!matches_template(&matcher, "Система предназначена для учёта", 0.5));
}

#[test]
fn test_ends_with_punctuation() {
    assert!(ends_with_punctuation("Конец."));
    assert!(ends_with_punctuation("Вопрос?"));
    assert!(!ends_with_punctuation("Без точки"));
    assert!(!ends_with_punctuation("Кавычки»"));
    assert!(!ends_with_punctuation(""));
}
