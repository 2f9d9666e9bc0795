//! Minimal PDF table rendering for the "Print PDF" export.
//!
//! Produces a single A4 document: title, generated-date line, then a
//! grid-themed table over the same columns and rows as the CSV export,
//! flowing onto additional pages as needed.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 40.0;
const HEADER_H: f32 = 18.0;
const ROW_H: f32 = 16.0;

pub fn build_table_pdf(
    title: &str,
    date_line: &str,
    headers: &[String],
    rows: &[Vec<String>],
) -> Vec<u8> {
    let ncols = headers.len().max(1);
    let col_w = (PAGE_W - 2.0 * MARGIN) / ncols as f32;
    // Rough glyph budget for 8pt Helvetica.
    let max_chars = (((col_w - 6.0) / 4.2) as usize).max(4);

    let first_table_top = PAGE_H - MARGIN - 46.0;
    let later_table_top = PAGE_H - MARGIN;
    let capacity = |table_top: f32| {
        (((table_top - MARGIN - HEADER_H) / ROW_H).floor() as usize).max(1)
    };

    // Split rows into per-page chunks; always at least one page.
    let mut chunks: Vec<&[Vec<String>]> = Vec::new();
    let mut rest = rows;
    let first = rest.len().min(capacity(first_table_top));
    let (head, tail) = rest.split_at(first);
    chunks.push(head);
    rest = tail;
    while !rest.is_empty() {
        let take = rest.len().min(capacity(later_table_top));
        let (head, tail) = rest.split_at(take);
        chunks.push(head);
        rest = tail;
    }

    let mut pdf = Pdf::new();
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let font_id = Ref::new(3);
    let bold_font_id = Ref::new(4);

    let mut next_id = 5;
    let mut page_ids = Vec::with_capacity(chunks.len());
    let mut content_ids = Vec::with_capacity(chunks.len());
    for _ in &chunks {
        page_ids.push(Ref::new(next_id));
        content_ids.push(Ref::new(next_id + 1));
        next_id += 2;
    }

    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);
    pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
    pdf.type1_font(bold_font_id)
        .base_font(Name(b"Helvetica-Bold"));

    for (index, chunk) in chunks.iter().enumerate() {
        let is_first = index == 0;
        let table_top = if is_first {
            first_table_top
        } else {
            later_table_top
        };

        let mut content = Content::new();

        if is_first {
            content.begin_text();
            content.set_font(Name(b"F2"), 16.0);
            content.set_fill_rgb(0.0, 0.0, 0.0);
            content.next_line(MARGIN, PAGE_H - MARGIN - 12.0);
            content.show(Str(sanitize(title, 80).as_bytes()));
            content.end_text();

            content.begin_text();
            content.set_font(Name(b"F1"), 10.0);
            content.next_line(MARGIN, PAGE_H - MARGIN - 28.0);
            content.show(Str(sanitize(&format!("Date: {}", date_line), 80).as_bytes()));
            content.end_text();
        }

        // Header band, slate-800.
        content.set_fill_rgb(0.12, 0.16, 0.23);
        content.rect(MARGIN, table_top - HEADER_H, PAGE_W - 2.0 * MARGIN, HEADER_H);
        content.fill_nonzero();

        content.set_fill_rgb(1.0, 1.0, 1.0);
        for (i, header) in headers.iter().enumerate() {
            content.begin_text();
            content.set_font(Name(b"F2"), 8.0);
            content.next_line(MARGIN + i as f32 * col_w + 3.0, table_top - HEADER_H + 5.0);
            content.show(Str(sanitize(header, max_chars).as_bytes()));
            content.end_text();
        }

        content.set_fill_rgb(0.0, 0.0, 0.0);
        let mut y = table_top - HEADER_H;
        for row in chunk.iter() {
            y -= ROW_H;
            for (i, cell) in row.iter().take(ncols).enumerate() {
                content.begin_text();
                content.set_font(Name(b"F1"), 8.0);
                content.next_line(MARGIN + i as f32 * col_w + 3.0, y + 5.0);
                content.show(Str(sanitize(cell, max_chars).as_bytes()));
                content.end_text();
            }
        }

        // Grid lines.
        let table_bottom = table_top - HEADER_H - chunk.len() as f32 * ROW_H;
        content.set_stroke_rgb(0.8, 0.8, 0.8);
        content.set_line_width(0.5);
        let mut line_y = table_top - HEADER_H;
        while line_y >= table_bottom {
            content.move_to(MARGIN, line_y);
            content.line_to(PAGE_W - MARGIN, line_y);
            line_y -= ROW_H;
        }
        for i in 0..=ncols {
            let x = MARGIN + i as f32 * col_w;
            content.move_to(x, table_top);
            content.line_to(x, table_bottom);
        }
        content.move_to(MARGIN, table_top);
        content.line_to(PAGE_W - MARGIN, table_top);
        content.stroke();

        pdf.stream(content_ids[index], &content.finish());

        let mut page = pdf.page(page_ids[index]);
        page.media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H));
        page.parent(page_tree_id);
        page.contents(content_ids[index]);
        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), font_id);
        fonts.pair(Name(b"F2"), bold_font_id);
        fonts.finish();
        resources.finish();
        page.finish();
    }

    pdf.finish()
}

/// Clamp to the printable ASCII range the builtin fonts cover, truncating
/// with an ellipsis when over budget.
fn sanitize(text: &str, max_chars: usize) -> String {
    let mut out: String = text
        .chars()
        .map(|c| if (' '..='~').contains(&c) { c } else { '?' })
        .collect();
    if out.len() > max_chars {
        out.truncate(max_chars.saturating_sub(3));
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_a_parsable_header_and_pages() {
        let headers = vec!["ID".to_string(), "Name".to_string()];
        let rows: Vec<Vec<String>> = (0..100)
            .map(|i| vec![i.to_string(), format!("Medicine {}", i)])
            .collect();
        let bytes = build_table_pdf("Medicines", "Dec 13, 2025", &headers, &rows);
        assert!(bytes.starts_with(b"%PDF-"));
        // 100 rows cannot fit on one A4 page at 16pt row height.
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.matches("/Type /Page").count() >= 2);
    }

    #[test]
    fn sanitize_replaces_non_ascii_and_truncates() {
        assert_eq!(sanitize("caf\u{e9}", 10), "caf?");
        assert_eq!(sanitize("abcdefghij", 8), "abcde...");
    }
}
