use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

type Rgb = (f32, f32, f32);

const BLACK: Rgb = (0.0, 0.0, 0.0);
const WHITE: Rgb = (1.0, 1.0, 1.0);
const BAND: Rgb = (0.13, 0.32, 0.55);
const HEADER_FILL: Rgb = (0.85, 0.87, 0.90);
const ZEBRA_FILL: Rgb = (0.96, 0.96, 0.96);
const POSITIVE_FILL: Rgb = (0.80, 0.93, 0.82);
const NEGATIVE_FILL: Rgb = (0.97, 0.82, 0.82);

/// Background tint of a highlighted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTint {
    Positive,
    Negative,
}

impl CellTint {
    fn rgb(self) -> Rgb {
        match self {
            CellTint::Positive => POSITIVE_FILL,
            CellTint::Negative => NEGATIVE_FILL,
        }
    }
}

/// A table row with at most one tinted cell (column index, tint).
#[derive(Debug, Clone)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub tint: Option<(usize, CellTint)>,
}

/// Helvetica is a standard Type1 font: text goes out as WinAnsi bytes.
/// Characters outside Latin-1 are replaced by '?'.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code < 0x80 || (0xA0..=0xFF).contains(&code) {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 45.0,
            row_h: 18.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 9.0,
            header_font_size: 9.5,
            title_font_size: 16.0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// New page plus its content stream object.
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);

            page.resources()
                .fonts()
                .pair(Name(b"F1"), self.font_id)
                .pair(Name(b"F2"), self.bold_font_id);
        }

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        color: Rgb,
        text: &str,
    ) {
        let font = if bold { Name(b"F2") } else { Name(b"F1") };
        let bytes = win_ansi(text);

        content.save_state();
        content.set_fill_rgb(color.0, color.1, color.2);
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
        content.restore_state();
    }

    fn fill_rect(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        content.save_state();
        content.set_fill_rgb(color.0, color.1, color.2);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        cells: &[String],
        tint: Option<(usize, CellTint)>,
        header: bool,
    ) {
        let mut x = self.margin;
        let size = if header {
            self.header_font_size
        } else {
            self.font_size
        };

        for (i, text) in cells.iter().enumerate() {
            let w = col_widths.get(i).copied().unwrap_or(0.0);

            if let Some((col, t)) = tint
                && col == i
            {
                self.fill_rect(content, x, y, w, self.row_h, t.rgb());
            }

            self.draw_text(content, x + 4.0, y + 5.5, size, header, BLACK, text);
            self.draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header + content length, scaled down to the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[TableRow]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * 5.6 + 10.0)
            .collect();

        for row in rows {
            for (i, cell) in row.cells.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (cell.chars().count() as f32 * 5.2 + 10.0).max(*w);
                }
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_footer(&self, content: &mut Content, page: usize) {
        let pg = format!("Página {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 50.0,
            self.margin - 25.0,
            self.font_size,
            false,
            BLACK,
            &pg,
        );
    }

    /// Coloured band across the top of the first page. Returns the y below it.
    fn draw_title_band(&self, content: &mut Content, title: &str, subtitle: &str) -> f32 {
        let band_h = 52.0;
        let y = self.page_h - self.margin - band_h;

        self.fill_rect(
            content,
            self.margin,
            y,
            self.page_w - 2.0 * self.margin,
            band_h,
            BAND,
        );
        self.draw_text(
            content,
            self.margin + 12.0,
            y + 28.0,
            self.title_font_size,
            true,
            WHITE,
            title,
        );
        self.draw_text(
            content,
            self.margin + 12.0,
            y + 11.0,
            self.font_size,
            false,
            WHITE,
            subtitle,
        );

        y - 20.0
    }

    fn draw_summary_block(&self, content: &mut Content, top: f32, lines: &[String]) -> f32 {
        let line_h = 14.0;
        let mut y = top;

        self.draw_text(content, self.margin, y, 11.0, true, BLACK, "Resumo do período");
        y -= line_h + 2.0;

        for line in lines {
            self.draw_text(content, self.margin + 8.0, y, 10.0, false, BLACK, line);
            y -= line_h;
        }

        y - 12.0
    }

    fn draw_table_header(&self, content: &mut Content, y: f32, widths: &[f32], headers: &[&str]) {
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        self.fill_rect(
            content,
            self.margin,
            y,
            widths.iter().sum(),
            self.row_h,
            HEADER_FILL,
        );
        self.draw_row(content, y, widths, &header_row, None, true);
    }

    /// Title band, summary block and a paginated table. An empty table still
    /// produces one page with the header row.
    pub fn write_report(
        &mut self,
        title: &str,
        subtitle: &str,
        summary: &[String],
        headers: &[&str],
        rows: &[TableRow],
    ) {
        let col_widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = col_widths.iter().sum();

        let mut remaining: &[TableRow] = rows;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();

            let mut y = if page_idx == 1 {
                let below_band = self.draw_title_band(&mut content, title, subtitle);
                self.draw_summary_block(&mut content, below_band, summary) - self.row_h
            } else {
                self.draw_text(
                    &mut content,
                    self.margin,
                    self.page_h - self.margin,
                    11.0,
                    true,
                    BLACK,
                    title,
                );
                self.page_h - self.margin - 20.0 - self.row_h
            };

            self.draw_table_header(&mut content, y, &col_widths, headers);
            y -= self.row_h;

            let mut consumed = 0;

            for (i, row) in remaining.iter().enumerate() {
                if y < self.margin {
                    break;
                }

                if i % 2 == 0 {
                    self.fill_rect(&mut content, self.margin, y, table_w, self.row_h, ZEBRA_FILL);
                }

                self.draw_row(&mut content, y, &col_widths, &row.cells, row.tint, false);

                y -= self.row_h;
                consumed += 1;
            }

            self.draw_footer(&mut content, page_idx);
            self.finalize_page(content);

            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() || consumed == 0 {
                break;
            }
        }
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
