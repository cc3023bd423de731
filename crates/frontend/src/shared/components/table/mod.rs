//! Entity tables.
//!
//! Each entity converts its records into a row type implementing
//! [`TableRow`]; [`DataTable`] redraws the whole body from the latest
//! collection every time it changes.

pub mod number_format;
pub mod row_action;

pub use row_action::RowAction;

use crate::shared::components::ui::StatusBadge;
use contracts::enums::StatusBadge as BadgeModel;
use leptos::prelude::*;

/// Shown for any missing or unusable field
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Strong(String),
    Badge(BadgeModel),
    Actions(Vec<RowAction>),
}

impl Cell {
    pub fn text<T: ToString>(value: Option<T>) -> Self {
        Cell::Text(value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string()))
    }

    pub fn strong<T: ToString>(value: Option<T>) -> Self {
        Cell::Strong(value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string()))
    }

    /// Status badge, or the placeholder when the record has no status
    pub fn badge(code: Option<&str>) -> Self {
        match code {
            Some(code) => Cell::Badge(BadgeModel::for_code(code)),
            None => Cell::Text(PLACEHOLDER.to_string()),
        }
    }

    /// Plain text of the cell, as a screen reader or test would see it
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) | Cell::Strong(s) => s.clone(),
            Cell::Badge(b) => b.label.clone(),
            Cell::Actions(actions) => actions
                .iter()
                .map(RowAction::label)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

pub trait TableRow {
    fn key(&self) -> String;
    fn cells(&self) -> Vec<Cell>;
}

/// Rows in backend order, or the empty state.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody<R> {
    Empty,
    Rows(Vec<R>),
}

impl<R> TableBody<R> {
    /// `<tr>` elements the body renders; the empty state is one row.
    pub fn rendered_row_count(&self) -> usize {
        match self {
            TableBody::Empty => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }
}

/// Builds one row per record, keeping backend order.
pub fn build_rows<'a, T, R>(items: &'a [T]) -> TableBody<R>
where
    R: From<&'a T>,
{
    if items.is_empty() {
        TableBody::Empty
    } else {
        TableBody::Rows(items.iter().map(R::from).collect())
    }
}

fn render_cell(cell: Cell, on_action: Callback<RowAction>) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <td class="table__cell">{text}</td> }.into_any(),
        Cell::Strong(text) => view! {
            <td class="table__cell"><strong>{text}</strong></td>
        }
        .into_any(),
        Cell::Badge(badge) => view! {
            <td class="table__cell"><StatusBadge badge=badge /></td>
        }
        .into_any(),
        Cell::Actions(actions) => view! {
            <td class="table__cell table__cell--actions">
                {actions
                    .into_iter()
                    .map(|action| {
                        view! {
                            <button
                                class=action.css_class()
                                on:click=move |_| on_action.run(action)
                            >
                                {action.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </td>
        }
        .into_any(),
    }
}

#[component]
pub fn DataTable<R>(
    /// Header labels in column order
    columns: &'static [&'static str],
    #[prop(into)] body: Signal<TableBody<R>>,
    /// Text of the single row shown for an empty collection
    #[prop(into)]
    empty_text: String,
    #[prop(optional)] on_action: Option<Callback<RowAction>>,
) -> impl IntoView
where
    R: TableRow + Clone + Send + Sync + 'static,
{
    let on_action = on_action.unwrap_or_else(|| Callback::new(|_| {}));
    let span = columns.len();

    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {columns
                            .iter()
                            .map(|title| view! { <th class="table__header-cell">{*title}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || match body.get() {
                        TableBody::Empty => view! {
                            <tr class="table__row table__row--empty">
                                <td class="table__cell" colspan=span>{empty_text.clone()}</td>
                            </tr>
                        }
                        .into_any(),
                        TableBody::Rows(rows) => rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr class="table__row" data-key=row.key()>
                                        {row
                                            .cells()
                                            .into_iter()
                                            .map(|cell| render_cell(cell, on_action))
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any(),
                    }}
                </tbody>
            </table>
        </div>
    }
}
