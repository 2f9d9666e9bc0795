//! CSV building and browser-side file downloads.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::date_format::today_iso;

/// Build CSV text: header line first, every field double-quoted, embedded
/// quotes doubled, lines joined with `\n`.
pub fn build_csv(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.iter().map(|h| quote(h)).collect::<Vec<_>>().join(","));
    for row in rows {
        lines.push(row.iter().map(|c| quote(c)).collect::<Vec<_>>().join(","));
    }
    lines.join("\n")
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// `"All Medicines"` -> `All_Medicines_2025-12-13.csv`
pub fn export_filename(title: &str, extension: &str) -> String {
    let stem = title.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}_{}.{}", stem, today_iso(), extension)
}

/// Trigger a browser download of text content.
pub fn download_text(content: &str, mime: &str, filename: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));
    let properties = BlobPropertyBag::new();
    properties.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    download_blob(&blob, filename)
}

/// Trigger a browser download of binary content.
pub fn download_bytes(content: &[u8], mime: &str, filename: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(content);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let properties = BlobPropertyBag::new();
    properties.set_type(mime);
    let blob = Blob::new_with_buffer_source_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    download_blob(&blob, filename)
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quotes_every_field_and_doubles_quotes() {
        let headers = vec!["ID".to_string(), "Name".to_string()];
        let rows = vec![vec!["1".to_string(), "A\"B".to_string()]];
        assert_eq!(build_csv(&headers, &rows), "\"ID\",\"Name\"\n\"1\",\"A\"\"B\"");
    }

    #[test]
    fn csv_with_no_rows_is_just_the_header() {
        let headers = vec!["Name".to_string()];
        assert_eq!(build_csv(&headers, &[]), "\"Name\"");
    }

    #[test]
    fn filename_replaces_whitespace_runs() {
        let name = export_filename("All  Medicines list", "csv");
        assert!(name.starts_with("All_Medicines_list_"));
        assert!(name.ends_with(".csv"));
    }
}
