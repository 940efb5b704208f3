use std::fmt::Write as _;

use intake_core::{AppViewModel, PreviewView, ProgressView, StorageUsage, UploadRowView, Viewer};

const BAR_WIDTH: usize = 25;

/// Renders the dashboard as plain text. `preview_uri` is what the engine
/// resolved for the open preview, if it has backed it yet.
pub fn render(view: &AppViewModel, preview_uri: Option<&str>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "== Upload Center ==");
    let _ = writeln!(out, "Storage: {}", storage_line(&view.storage));

    if let Some(bar) = progress_line(&view.progress) {
        let _ = writeln!(out, "{bar}");
    }
    if let Some(rejection) = &view.rejection {
        let _ = writeln!(out, "! {rejection}");
    }
    if let Some(error) = &view.last_error {
        let _ = writeln!(out, "! {error}");
    }

    if !view.uploads.is_empty() {
        let _ = writeln!(out, "-- Recent Uploads --");
        for (idx, row) in view.uploads.iter().enumerate() {
            let _ = writeln!(out, "{}", format_upload_row(idx + 1, row));
        }
    }

    let _ = writeln!(out, "-- Activity Log --");
    for record in &view.activity {
        let _ = writeln!(out, "{} — {}", record.time, record.text);
    }

    if let Some(preview) = &view.preview {
        let _ = writeln!(out, "{}", format_preview(preview, preview_uri));
    }

    out
}

fn storage_line(storage: &StorageUsage) -> String {
    let filled = storage
        .gauge_circumference
        .saturating_sub(storage.gauge_offset);
    let ratio = if storage.gauge_circumference == 0 {
        0.0
    } else {
        filled as f64 / storage.gauge_circumference as f64
    };
    let marker = if storage.over_capacity() { " (over capacity)" } else { "" };
    format!(
        "{}MB / {}MB [gauge {:.0}%]{}",
        format_with_commas(storage.used_mb),
        format_with_commas(storage.capacity_mb),
        ratio * 100.0,
        marker
    )
}

fn progress_line(progress: &ProgressView) -> Option<String> {
    if !progress.visible {
        return None;
    }
    let filled = (progress.percent as usize * BAR_WIDTH / 100).min(BAR_WIDTH);
    Some(format!(
        "Uploading [{}{}] {}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        progress.percent
    ))
}

fn format_upload_row(row_number: usize, row: &UploadRowView) -> String {
    format!(
        "[{row_number}] {icon} {name}  {size} KB  ({time})",
        icon = row.icon,
        name = row.name,
        size = format_with_commas(row.size_kb),
        time = row.accepted_at
    )
}

fn format_preview(preview: &PreviewView, uri: Option<&str>) -> String {
    let viewer = match preview.viewer {
        Viewer::Image => "image viewer",
        Viewer::Document => "document viewer",
    };
    format!(
        "== Preview: {} ({viewer}) <- {} ==  (type 'close' to dismiss)",
        preview.caption,
        uri.unwrap_or("loading…")
    )
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
