use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, PageMargin, Paragraph, Run, RunFonts, Style, StyleType,
};

use navigator_core::models::care_level::CareLevel;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Generate a DOCX document from the rendered Markdown report.
///
/// The report uses a small subset of Markdown:
/// - `#` / `##` / `###` headings map to Heading 1–3; deeper ones to Heading 3
/// - `- item` and `* item` → bullet paragraph
/// - `1. item` → numbered paragraph, number kept as text
/// - `| label | value |` table rows → `label: value` paragraphs with a bold
///   label; a header row and its `| --- |` separator are dropped
/// - `**bold**` → bold run
/// - `---` or `***` → page break
/// - `**Care Level:** <level>` → label plus the level in its highlight colour
/// - Everything else → normal paragraph
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut buf = Cursor::new(Vec::new());
    build_docx(rendered, styles)
        .build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

/// The unpacked document behind [`generate_docx`].
pub fn build_docx(rendered: &str, styles: &DocumentStyles) -> Docx {
    let margin = styles.margin_twips();
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    let mut lines = rendered.lines().peekable();
    while let Some(line) = lines.next() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
            continue;
        }

        if let Some(cells) = table_cells(trimmed) {
            let next_is_separator = lines
                .peek()
                .and_then(|next| table_cells(next.trim()))
                .is_some_and(|next| is_separator_row(&next));
            if next_is_separator {
                lines.next();
            } else if !is_separator_row(&cells) {
                docx = docx.add_paragraph(label_paragraph(&cells, styles));
            }
            continue;
        }

        if let Some((level, text)) = heading(trimmed) {
            let style_id = match level {
                1 => "Heading1",
                2 => "Heading2",
                _ => "Heading3",
            };
            docx = docx.add_paragraph(heading_paragraph(text, style_id, styles));
        } else if trimmed == "---" || trimmed == "***" {
            let page_break = Paragraph::new().add_run(Run::new().add_break(BreakType::Page));
            docx = docx.add_paragraph(page_break);
        } else if let Some(text) = bullet(trimmed) {
            docx = docx.add_paragraph(bullet_paragraph(text, styles));
        } else if let Some(level) = care_level(trimmed) {
            docx = docx.add_paragraph(care_level_paragraph(level, styles));
        } else {
            docx = docx.add_paragraph(body_paragraph(trimmed, styles));
        }
    }

    docx
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if level == 0 {
        return None;
    }
    line[level..].strip_prefix(' ').map(|text| (level, text.trim()))
}

fn bullet(line: &str) -> Option<&str> {
    line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
}

fn table_cells(line: &str) -> Option<Vec<&str>> {
    let inner = line.strip_prefix('|')?.strip_suffix('|')?;
    Some(inner.split(" | ").map(str::trim).collect())
}

fn is_separator_row(cells: &[&str]) -> bool {
    cells
        .iter()
        .all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':'))
}

fn care_level(line: &str) -> Option<CareLevel> {
    line.strip_prefix(CARE_LEVEL_LABEL)?.trim().parse().ok()
}

const CARE_LEVEL_LABEL: &str = "**Care Level:**";

fn care_level_paragraph(level: CareLevel, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run("Care Level: ", styles).bold())
        .add_run(
            body_run(level.as_str(), styles)
                .bold()
                .color(level.color_hex().trim_start_matches('#')),
        )
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn label_paragraph(cells: &[&str], styles: &DocumentStyles) -> Paragraph {
    let (label, rest) = match cells.split_first() {
        Some((label, rest)) => (*label, rest.join(" ").replace("\\|", "|")),
        None => ("", String::new()),
    };
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run(&format!("{label}: "), styles).bold())
        .add_run(body_run(&rest, styles))
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run("\u{2022} ", styles));

    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }

    para
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Parse simple inline formatting: **bold** segments.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(body_run(before, styles));
        }

        let after_start = &remaining[start + 2..];
        if let Some(end) = after_start.find("**") {
            runs.push(body_run(&after_start[..end], styles).bold());
            remaining = &after_start[end + 2..];
        } else {
            // No closing **, treat rest as normal text
            runs.push(body_run(remaining, styles));
            return runs;
        }
    }

    if !remaining.is_empty() {
        runs.push(body_run(remaining, styles));
    }

    runs
}
