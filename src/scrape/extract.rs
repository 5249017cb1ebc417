//! HTML extraction rules for the portal pages
//!
//! The dashboard labels each account field with a tooltip icon; the field
//! value lives somewhere inside the icon's flex container, with the exact
//! spot varying by field. Rather than branching ad hoc, each tooltip title
//! maps to a [`FieldRule`] describing where the text lives and how to
//! post-process it. A field whose icon or container cannot be located
//! degrades to the literal `"N/A"` — missing markup is never an error.

use crate::types::{PaymentRecord, UsageRecord, UserInfo};
use scraper::{ElementRef, Html, Selector};

/// Sentinel value for dashboard fields whose markup is absent
pub const MISSING_FIELD: &str = "N/A";

/// Where a labeled field's text lives inside its flex container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Text of a nested `font` element
    FontText,
    /// Text of a nested `span.bg-success` badge
    SuccessBadge,
    /// Text of a nested `font` inside a `span.text-success`
    SuccessFont,
    /// Text of a nested `span`, whitespace runs collapsed
    CollapsedSpan,
    /// The container's own text nodes, child elements stripped
    OwnText,
}

/// Extraction rule for a tooltip title
pub fn extraction_rule(title: &str) -> FieldRule {
    match title {
        "Account Status" => FieldRule::FontText,
        "Connection Status" => FieldRule::SuccessBadge,
        "Expiry Date" => FieldRule::SuccessFont,
        "Plan rate" => FieldRule::CollapsedSpan,
        _ => FieldRule::OwnText,
    }
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

/// Collapse runs of whitespace to single spaces and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Text of the first descendant matching `css`, or empty when absent
///
/// An absent nested element is not the same as an absent field: the
/// container was found, so the value is an empty string, not `"N/A"`.
fn nested_text(container: ElementRef<'_>, css: &str) -> String {
    selector(css)
        .and_then(|sel| container.select(&sel).next())
        .map(element_text)
        .unwrap_or_default()
}

/// The container's direct text nodes with child elements stripped
fn own_text(container: ElementRef<'_>) -> String {
    container
        .children()
        .filter_map(|child| child.value().as_text())
        .map(|text| &**text)
        .collect::<String>()
}

/// Extract one labeled dashboard field by its tooltip title
pub fn labeled_field(document: &Html, title: &str) -> String {
    let Some(icon_selector) = selector(&format!(
        r#"i[data-toggle="tooltip"][title="{}"]"#,
        title
    )) else {
        return MISSING_FIELD.to_string();
    };

    let Some(icon) = document.select(&icon_selector).next() else {
        return MISSING_FIELD.to_string();
    };

    // Walk up to the nearest flex container holding both icon and value
    let Some(container) = icon
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().classes().any(|class| class == "d-flex"))
    else {
        return MISSING_FIELD.to_string();
    };

    match extraction_rule(title) {
        FieldRule::FontText => nested_text(container, "font").trim().to_string(),
        FieldRule::SuccessBadge => nested_text(container, "span.bg-success").trim().to_string(),
        FieldRule::SuccessFont => nested_text(container, "span.text-success font")
            .trim()
            .to_string(),
        FieldRule::CollapsedSpan => collapse_whitespace(&nested_text(container, "span")),
        FieldRule::OwnText => own_text(container).trim().to_string(),
    }
}

/// Extract all labeled account fields from the dashboard page
pub fn user_info(document: &Html) -> UserInfo {
    UserInfo {
        name: labeled_field(document, "Name"),
        id: labeled_field(document, "ID"),
        username: labeled_field(document, "Username"),
        mobile: labeled_field(document, "Mobile"),
        account_status: labeled_field(document, "Account Status"),
        connection_status: labeled_field(document, "Connection Status"),
        expiry_date: labeled_field(document, "Expiry Date"),
        package: labeled_field(document, "Package"),
        plan_rate: labeled_field(document, "Plan rate"),
    }
}

/// CSRF token from the login form's hidden input, if present and non-empty
pub fn csrf_token(document: &Html) -> Option<String> {
    let sel = selector(r#"input[name="_csrf"]"#)?;
    document
        .select(&sel)
        .next()
        .and_then(|input| input.value().attr("value"))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Cell texts of every body row of the table matching `rows_css`
///
/// Rows come back in source order; each cell is trimmed.
fn table_rows(document: &Html, rows_css: &str) -> Vec<Vec<String>> {
    let Some(row_selector) = selector(rows_css) else {
        return Vec::new();
    };
    let Some(cell_selector) = selector("td") else {
        return Vec::new();
    };

    document
        .select(&row_selector)
        .map(|row| {
            row.select(&cell_selector)
                .map(|cell| element_text(cell).trim().to_string())
                .collect()
        })
        .collect()
}

fn cell(cells: &[String], index: usize) -> String {
    cells.get(index).cloned().unwrap_or_default()
}

/// Parse the dashboard's payment-history table
pub fn payment_history(document: &Html) -> Vec<PaymentRecord> {
    table_rows(document, "#paymentH tbody tr")
        .into_iter()
        .map(|cells| PaymentRecord {
            pay_date: cell(&cells, 0),
            bill_amount: cell(&cells, 1),
            received_amount: cell(&cells, 2),
            remarks: collapse_whitespace(&cell(&cells, 3)),
        })
        .collect()
}

/// Parse the usage log's session-history table
pub fn usage_history(document: &Html) -> Vec<UsageRecord> {
    table_rows(document, "#sessionL tbody tr")
        .into_iter()
        .map(|cells| UsageRecord {
            connection_date: cell(&cells, 0),
            disconnection_date: cell(&cells, 1),
            upload: cell(&cells, 2),
            download: cell(&cells, 3),
            session_time: cell(&cells, 4),
        })
        .collect()
}
