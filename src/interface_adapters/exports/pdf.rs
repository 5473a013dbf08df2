use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use crate::use_cases::event_report::EventReport;

// A4 in PDF points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 50.0;
const LEADING: f32 = 16.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 11.0;

const TITLE: &str = "Relatório de Convidados Confirmados";
const NO_COMPANIONS: &str = "—";

// Render the report as a paginated PDF: title, one line per confirmed
// guest, then the deduplicated total. Uses the built-in Helvetica font
// with WinAnsi encoding so the Portuguese text survives.
pub fn render(report: &EventReport) -> Vec<u8> {
    let mut lines: Vec<(f32, String)> = vec![
        (TITLE_SIZE, TITLE.to_string()),
        (BODY_SIZE, String::new()),
    ];

    for row in &report.rows {
        let companions = if row.companions.is_empty() {
            NO_COMPANIONS.to_string()
        } else {
            row.companions.join(", ")
        };
        lines.push((
            BODY_SIZE,
            format!("{}  |  {}  |  {}", row.name, companions, row.companions.len()),
        ));
    }

    lines.push((BODY_SIZE, String::new()));
    lines.push((
        BODY_SIZE,
        format!("Total de pessoas no evento: {}", report.total_people),
    ));

    let lines_per_page = (((PAGE_HEIGHT - 2.0 * MARGIN) / LEADING) as usize).max(1);
    let chunks: Vec<&[(f32, String)]> = lines.chunks(lines_per_page).collect();

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let font_id = Ref::new(3);
    let page_ids: Vec<Ref> = (0..chunks.len())
        .map(|index| Ref::new(4 + 2 * index as i32))
        .collect();
    let content_ids: Vec<Ref> = (0..chunks.len())
        .map(|index| Ref::new(5 + 2 * index as i32))
        .collect();
    let font_name = Name(b"F1");

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);

    for (index, chunk) in chunks.iter().enumerate() {
        let mut page = pdf.page(page_ids[index]);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(page_tree_id);
        page.contents(content_ids[index]);
        page.resources().fonts().pair(font_name, font_id);
        page.finish();

        let mut content = Content::new();
        content.begin_text();
        let mut at_top = true;
        for (size, text) in chunk.iter() {
            content.set_font(font_name, *size);
            if at_top {
                content.next_line(MARGIN, PAGE_HEIGHT - MARGIN);
                at_top = false;
            } else {
                content.next_line(0.0, -LEADING);
            }
            if !text.is_empty() {
                content.show(Str(&encode_win_ansi(text)));
            }
        }
        content.end_text();
        pdf.stream(content_ids[index], &content.finish());
    }

    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    pdf.finish()
}

// Helvetica with WinAnsiEncoding takes single-byte text; Latin-1 covers
// the Portuguese alphabet, plus a few Windows-1252 specials.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2014}' => 0x97, // em dash
            '\u{2013}' => 0x96, // en dash
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            _ if (c as u32) <= 0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}
