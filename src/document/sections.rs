//! Builders for each block of the offer layout.
//!
//! Every builder returns plain `docx_rs` values; `OfferGenerator` decides the
//! order. Sizes are half-points, spacing is twips.

use docx_rs::{
    AlignmentType, BorderType, BreakType, Docx, LineSpacing, Paragraph, Pic, Run, Shading, Table,
    TableCell, TableCellBorder, TableCellBorderPosition, TableRow, VAlignType, WidthType,
};

use super::common::{colors, font_sizes, px_to_emu};
use crate::logo::LogoAsset;
use crate::offer::{Customer, Product, Term, Totals};

/// Usable width of an A4 page with one-inch margins, in twips.
pub const TEXT_WIDTH_TWIPS: usize = 9026;

const INTRO: &str = "a seguito della Sua gentile richiesta, con la presente invio l'offerta economica per il prodotto in oggetto.";
const CLOSING_THANKS: &str = "Vi ringraziamo per l'attenzione prestata e siamo a disposizione per qualsiasi ulteriore chiarimento in merito desideriate richiedere.";
const CLOSING_REGARDS: &str = "In attesa di un Vs. gradito, positivo riscontro, ci pregiamo porgerVi i più distinti saluti.";
const CUSTOMER_SIGNATURE_LINE: &str = "…………………………………………………";
const RESIMIX_SIGNATURE_LINE: &str = "……………………………………………………";

/// A top-level body element.
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

impl Block {
    pub fn add_to(self, docx: Docx) -> Docx {
        match self {
            Self::Paragraph(p) => docx.add_paragraph(p),
            Self::Table(t) => docx.add_table(t),
        }
    }
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Self::Paragraph(p)
    }
}

impl From<Table> for Block {
    fn from(t: Table) -> Self {
        Self::Table(t)
    }
}

fn run(text: &str, size: usize) -> Run {
    Run::new().add_text(text).size(size)
}

fn bold_run(text: &str, size: usize) -> Run {
    run(text, size).bold()
}

/// Run whose `\n` become line breaks.
fn multiline_run(text: &str, size: usize) -> Run {
    text.split('\n')
        .enumerate()
        .fold(Run::new().size(size), |run, (i, line)| {
            let run = if i > 0 {
                run.add_break(BreakType::TextWrapping)
            } else {
                run
            };
            run.add_text(line)
        })
}

fn paragraph(run: Run, before: u32, after: u32) -> Paragraph {
    Paragraph::new()
        .add_run(run)
        .line_spacing(LineSpacing::new().before(before).after(after))
}

/// Empty paragraph used for vertical space.
pub fn spacer(after: u32) -> Paragraph {
    Paragraph::new().line_spacing(LineSpacing::new().after(after))
}

/// Percent of the text width in the fiftieths-of-a-percent unit of `pct`.
fn pct(percent: usize) -> usize {
    percent * 50
}

fn grid(percentages: &[usize]) -> Vec<usize> {
    percentages
        .iter()
        .map(|p| TEXT_WIDTH_TWIPS * p / 100)
        .collect()
}

fn full_width_table(rows: Vec<TableRow>, percentages: &[usize]) -> Table {
    Table::new(rows)
        .width(pct(100), WidthType::Pct)
        .set_grid(grid(percentages))
}

/// A cell always holds at least one paragraph.
fn cell(paragraphs: Vec<Paragraph>) -> TableCell {
    if paragraphs.is_empty() {
        return TableCell::new().add_paragraph(Paragraph::new());
    }
    paragraphs
        .into_iter()
        .fold(TableCell::new(), |cell, p| cell.add_paragraph(p))
}

fn borderless(cell: TableCell) -> TableCell {
    cell.clear_all_border()
}

fn single_borders(cell: TableCell, size: usize) -> TableCell {
    [
        TableCellBorderPosition::Top,
        TableCellBorderPosition::Bottom,
        TableCellBorderPosition::Left,
        TableCellBorderPosition::Right,
    ]
    .into_iter()
    .fold(cell, |cell, position| {
        cell.set_border(
            TableCellBorder::new(position)
                .border_type(BorderType::Single)
                .size(size),
        )
    })
}

/// `Offerta N° <number> • <date>`
pub fn header(offer_number: &str, date: &str) -> Paragraph {
    let text = format!("Offerta N° {} • {}", offer_number, date);
    paragraph(
        run(&text, font_sizes::HEADER).color(colors::RESIMIX_BLUE),
        0,
        200,
    )
    .align(AlignmentType::Center)
}

/// The logo as an inline picture or as the styled placeholder text.
pub fn logo(asset: &LogoAsset) -> Paragraph {
    let content = match asset {
        LogoAsset::Image {
            bytes,
            width,
            height,
        } => {
            let pic = Pic::new_with_dimensions(bytes.clone(), *width, *height)
                .size(px_to_emu(*width), px_to_emu(*height));
            Run::new().add_image(pic)
        }
        LogoAsset::Text { label, style } => {
            let text = run(label, style.size_pt as usize * 2).color(style.color.as_str());
            if style.bold {
                text.bold()
            } else {
                text
            }
        }
    };

    paragraph(content, 0, 400).align(AlignmentType::Center)
}

pub fn customer_info(customer: &Customer, validity: &str) -> Vec<Paragraph> {
    vec![
        paragraph(bold_run(&customer.name, font_sizes::MEDIUM), 0, 100),
        paragraph(run(&customer.attention, font_sizes::BODY), 0, 100),
        paragraph(
            run(&format!("Validità: {}", validity), font_sizes::BODY),
            0,
            300,
        ),
    ]
}

pub fn greeting(title: &str) -> Paragraph {
    paragraph(
        run(&format!("Egregio {},", title), font_sizes::BODY),
        0,
        200,
    )
}

pub fn intro() -> Paragraph {
    paragraph(run(INTRO, font_sizes::BODY), 0, 400)
}

/// Product heading, quantity/price table and characteristics.
pub fn product_section(product: &Product) -> Vec<Block> {
    let mut blocks: Vec<Block> = vec![
        paragraph(bold_run(&product.name, font_sizes::MEDIUM), 0, 100).into(),
        paragraph(run(&product.subtitle, font_sizes::BODY), 0, 50).into(),
        paragraph(run(&product.configuration, font_sizes::BODY), 0, 200).into(),
    ];

    let widths = [33, 34, 33];
    let header_cells = ["QUANTITÀ", "PREZZO UNITARIO", "SUBTOTALE"]
        .iter()
        .zip(widths)
        .map(|(label, width)| {
            cell(vec![Paragraph::new()
                .add_run(bold_run(label, font_sizes::SMALL))
                .align(AlignmentType::Center)])
            .width(pct(width), WidthType::Pct)
            .shading(Shading::new().fill(colors::LIGHT_GRAY))
        })
        .collect();

    let centered = |run: Run| {
        cell(vec![Paragraph::new()
            .add_run(run)
            .align(AlignmentType::Center)])
    };
    let data_cells = vec![
        centered(run(&product.quantity, font_sizes::BODY)),
        centered(run(&product.unit_price, font_sizes::BODY)),
        centered(bold_run(&product.subtotal, font_sizes::BODY)),
    ];

    blocks.push(
        full_width_table(
            vec![TableRow::new(header_cells), TableRow::new(data_cells)],
            &widths,
        )
        .into(),
    );

    blocks.push(paragraph(bold_run("Caratteristiche:", font_sizes::BODY), 200, 100).into());
    for characteristic in &product.characteristics {
        blocks.push(
            paragraph(
                run(&format!("  {}", characteristic), font_sizes::BODY),
                0,
                80,
            )
            .into(),
        );
    }
    blocks.push(spacer(400).into());

    blocks
}

/// Right-aligned totals, closed by the bordered TOTALE OFFERTA row.
pub fn totals(totals: &Totals) -> Table {
    let right = |run: Run| {
        cell(vec![Paragraph::new()
            .add_run(run)
            .align(AlignmentType::Right)])
    };

    let row = |label: Run, value: Run| {
        TableRow::new(vec![
            borderless(right(label)).width(pct(70), WidthType::Pct),
            borderless(right(value)).width(pct(30), WidthType::Pct),
        ])
    };

    let top_rule = |cell: TableCell| {
        cell.clear_all_border().set_border(
            TableCellBorder::new(TableCellBorderPosition::Top)
                .border_type(BorderType::Single)
                .size(2),
        )
    };

    let rows = vec![
        row(
            bold_run("Subtotale materiali", font_sizes::BODY),
            bold_run(&totals.materials_subtotal, font_sizes::BODY),
        ),
        row(
            run("Peso totale sistema", font_sizes::BODY),
            run(&totals.total_weight, font_sizes::BODY),
        ),
        row(
            run("IVA (22%)", font_sizes::BODY),
            run(&totals.vat, font_sizes::BODY),
        ),
        TableRow::new(vec![
            top_rule(right(bold_run("TOTALE OFFERTA", font_sizes::LARGE)))
                .width(pct(70), WidthType::Pct),
            top_rule(right(bold_run(&totals.offer_total, font_sizes::LARGE)))
                .width(pct(30), WidthType::Pct),
        ]),
    ];

    full_width_table(rows, &[70, 30])
}

pub fn section_heading(text: &str) -> Paragraph {
    paragraph(
        bold_run(text, font_sizes::LARGE).color(colors::RESIMIX_BLUE),
        400,
        200,
    )
}

fn term_paragraphs(terms: &[Term]) -> Vec<Paragraph> {
    terms
        .iter()
        .flat_map(|term| {
            [
                paragraph(
                    bold_run(&format!("✓ {}", term.title), font_sizes::SMALL),
                    0,
                    80,
                ),
                paragraph(multiline_run(&term.content, font_sizes::BODY), 0, 200),
            ]
        })
        .collect()
}

/// Two bordered columns of supply conditions.
pub fn terms_table(left: &[Term], right: &[Term]) -> Table {
    let column = |terms: &[Term]| {
        single_borders(cell(term_paragraphs(terms)), 1).width(pct(50), WidthType::Pct)
    };

    full_width_table(
        vec![TableRow::new(vec![column(left), column(right)])],
        &[50, 50],
    )
}

pub fn closing() -> Vec<Paragraph> {
    vec![
        paragraph(run(CLOSING_THANKS, font_sizes::BODY), 400, 200),
        paragraph(run(CLOSING_REGARDS, font_sizes::BODY), 0, 400),
    ]
}

/// Customer acceptance on the left, Resimix technical office on the right.
pub fn signature_table(customer_name: &str) -> Table {
    let block = |caption: &str, name: &str, role: &str, line: &str| {
        let paragraphs = vec![
            paragraph(run(caption, font_sizes::SMALL), 0, 100),
            paragraph(bold_run(name, font_sizes::BODY), 0, 80),
            paragraph(run(role, font_sizes::SMALL), 0, 200),
            Paragraph::new().add_run(run(line, font_sizes::BODY)),
        ];
        borderless(cell(paragraphs))
            .width(pct(50), WidthType::Pct)
            .vertical_align(VAlignType::Top)
    };

    full_width_table(
        vec![TableRow::new(vec![
            block(
                "Per accettazione",
                customer_name,
                "Il Legale rappresentante",
                CUSTOMER_SIGNATURE_LINE,
            ),
            block(
                " ",
                "Resimix s.r.l.",
                "(ufficio tecnico commerciale)",
                RESIMIX_SIGNATURE_LINE,
            ),
        ])],
        &[50, 50],
    )
}
