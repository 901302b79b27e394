//! Column-aware table layout for `--format table`.
//!
//! Cells are typed by the field they come from. Ids and amounts are
//! right-aligned, money gets two decimals and digit grouping, timestamps are
//! cut to the minute, and status cells are colored by where the status sits
//! in its lifecycle.

use chrono::DateTime;
use hub_core::enums::{
    ApplicationStatus, AttendanceStatus, ContractStatus, LeaveStatus, MilestoneStatus,
    OfferStatus, PaymentStatus, PayrollStatus, ProjectStatus, TaskStatus,
};
use hub_core::machine::Lifecycle;
use serde_json::Value;

const GAP: &str = "  ";
const MIN_TEXT_WIDTH: usize = 8;

/// Statuses that end a lifecycle without the outcome the record was for.
const FAILED: &[&str] = &["rejected", "cancelled", "refunded", "absent"];

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// What a field holds, derived from its name. Declaration order is the
/// column order in list tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColumnKind {
    Id,
    Reference,
    Status,
    Text,
    Money,
    Measure,
    Date,
    Timestamp,
}

impl ColumnKind {
    /// Classify a field; dotted names use their last segment.
    #[must_use]
    pub fn of(field: &str) -> Self {
        let name = field.rsplit('.').next().unwrap_or(field);
        match name {
            "id" => Self::Id,
            "status" | "payment_status" | "from" | "to" => Self::Status,
            "amount" | "budget" | "base_salary" | "bonus" | "deductions" | "net_salary" => {
                Self::Money
            }
            "hours_worked" | "days" | "cascaded" => Self::Measure,
            "created_at" => Self::Timestamp,
            "date" => Self::Date,
            _ if name.ends_with("_id") => Self::Reference,
            _ if name.ends_with("_date") || name.starts_with("period_") => Self::Date,
            _ => Self::Text,
        }
    }

    const fn right_aligned(self) -> bool {
        matches!(self, Self::Id | Self::Reference | Self::Money | Self::Measure)
    }
}

/// How a status reads at a glance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Still moving through its lifecycle.
    Open,
    /// Reached a terminal status.
    Settled,
    /// Ended without the intended outcome.
    Failed,
}

impl Tone {
    const fn ansi(self) -> &'static str {
        match self {
            Self::Open => "33",
            Self::Settled => "32",
            Self::Failed => "31",
        }
    }
}

fn terminal_in<S: Lifecycle>(status: &str) -> Option<bool> {
    S::parse(status).ok().map(Lifecycle::is_terminal)
}

/// Tone of a status name, or `None` if no lifecycle knows it.
///
/// A name shared by several lifecycles is settled if it is terminal in any
/// of them.
#[must_use]
pub fn tone(status: &str) -> Option<Tone> {
    if FAILED.contains(&status) {
        return Some(Tone::Failed);
    }
    let known = [
        terminal_in::<OfferStatus>(status),
        terminal_in::<ApplicationStatus>(status),
        terminal_in::<ContractStatus>(status),
        terminal_in::<PaymentStatus>(status),
        terminal_in::<MilestoneStatus>(status),
        terminal_in::<LeaveStatus>(status),
        terminal_in::<AttendanceStatus>(status),
        terminal_in::<PayrollStatus>(status),
        terminal_in::<ProjectStatus>(status),
        terminal_in::<TaskStatus>(status),
    ];
    let mut seen = false;
    for terminal in known.into_iter().flatten() {
        if terminal {
            return Some(Tone::Settled);
        }
        seen = true;
    }
    seen.then_some(Tone::Open)
}

/// Two decimals with comma digit grouping.
#[must_use]
pub fn money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}

/// One rendered value with its alignment and optional status tone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub right: bool,
    pub tone: Option<Tone>,
}

impl Cell {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            right: false,
            tone: None,
        }
    }

    /// Format `value` as a field of kind `kind`.
    #[must_use]
    pub fn typed(kind: ColumnKind, value: &Value) -> Self {
        let text = match (kind, value) {
            (_, Value::Null) => String::from("-"),
            (ColumnKind::Money, Value::Number(n)) => n.as_f64().map_or_else(|| n.to_string(), money),
            (ColumnKind::Measure, Value::Number(n)) if n.is_f64() => {
                n.as_f64().map_or_else(|| n.to_string(), |v| format!("{v:.2}"))
            }
            (ColumnKind::Timestamp, Value::String(raw)) => DateTime::parse_from_rfc3339(raw)
                .map_or_else(|_| raw.clone(), |at| at.format("%Y-%m-%d %H:%M").to_string()),
            (_, Value::String(s)) => s.clone(),
            (_, Value::Bool(b)) => String::from(if *b { "yes" } else { "no" }),
            (_, other) => other.to_string(),
        };
        let tone = match (kind, value) {
            (ColumnKind::Status, Value::String(s)) => tone(s),
            _ => None,
        };
        Self {
            text,
            right: kind.right_aligned(),
            tone,
        }
    }

    fn layout(&self, width: usize, color: bool) -> String {
        let fitted = fit(&self.text, width);
        let pad = " ".repeat(width.saturating_sub(fitted.chars().count()));
        let padded = if self.right {
            format!("{pad}{fitted}")
        } else {
            format!("{fitted}{pad}")
        };
        match self.tone {
            Some(tone) if color => format!("\u{1b}[{}m{padded}\u{1b}[0m", tone.ansi()),
            _ => padded,
        }
    }
}

/// A column header and the kind of values under it.
#[derive(Clone, Debug)]
pub struct Column {
    pub header: String,
    pub kind: ColumnKind,
}

impl Column {
    #[must_use]
    pub fn new(header: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            header: header.into(),
            kind,
        }
    }
}

/// Lay out `rows` under `columns`. Only text columns are narrowed to fit
/// `max_width`; ids, amounts, statuses and dates keep their full width.
#[must_use]
pub fn render(columns: &[Column], rows: &[Vec<Cell>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.header.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.text.chars().count());
        }
    }
    if let Some(max_width) = options.max_width {
        narrow_text_columns(columns, &mut widths, max_width);
    }

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|c| Cell {
            right: c.kind.right_aligned(),
            ..Cell::plain(c.header.clone())
        })
        .collect();
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join_row(&header_cells, &widths, false));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(GAP),
    );
    for row in rows {
        lines.push(join_row(row, &widths, options.color));
    }
    lines.join("\n")
}

fn join_row(cells: &[Cell], widths: &[usize], color: bool) -> String {
    let line = widths
        .iter()
        .enumerate()
        .map(|(idx, width)| match cells.get(idx) {
            Some(cell) => cell.layout(*width, color),
            None => Cell::plain("-").layout(*width, false),
        })
        .collect::<Vec<_>>()
        .join(GAP);
    line.trim_end().to_string()
}

/// Share the width left after fixed columns among text columns, narrowest
/// first so slack from short columns goes to long ones.
fn narrow_text_columns(columns: &[Column], widths: &mut [usize], max_width: usize) {
    let gaps = GAP.len() * widths.len().saturating_sub(1);
    if widths.iter().sum::<usize>() + gaps <= max_width {
        return;
    }
    let fixed: usize = columns
        .iter()
        .zip(widths.iter())
        .filter(|(column, _)| column.kind != ColumnKind::Text)
        .map(|(_, width)| *width)
        .sum();
    let mut text: Vec<usize> = (0..columns.len())
        .filter(|&idx| columns[idx].kind == ColumnKind::Text)
        .collect();
    text.sort_by_key(|&idx| widths[idx]);

    let mut remaining = max_width.saturating_sub(fixed + gaps);
    let mut left = text.len();
    for idx in text {
        let share = (remaining / left).max(MIN_TEXT_WIDTH);
        widths[idx] = widths[idx].min(share);
        remaining = remaining.saturating_sub(widths[idx]);
        left -= 1;
    }
}

fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
