//! Record display-name resolution.
//!
//! Host records have no schema guarantee, so the name is probed from an
//! ordered list of sources; the first non-empty value wins. Callers depend
//! on which source wins when several are present, so the order is a fixed
//! contract:
//!
//! 1. structured attributes name
//! 2. flat name
//! 3. title
//! 4. display name
//! 5. subject
//! 6. host-supplied name getter
//! 7. page title, with any `" | "`-delimited branding suffix stripped
//! 8. reference number
//! 9. the literal `"this feature"`

use crate::host::HostContext;
use crate::types::Record;

/// Displayed when no name source and no reference number is available.
pub const FALLBACK_NAME: &str = "this feature";

type RecordNameSource = fn(&Record) -> Option<String>;

/// Record-level sources in priority order; first non-empty value wins.
const RECORD_NAME_SOURCES: &[RecordNameSource] = &[
    |record| record.attribute_name(),
    |record| record.name.clone(),
    |record| record.title.clone(),
    |record| record.display_name.clone(),
    |record| record.subject.clone(),
    |record| record.getter_name(),
];

/// Resolve the human-readable name for a record.
///
/// Empty strings are treated as missing, so a host that populates a field
/// with `""` does not mask lower-priority sources.
pub fn resolve_record_name(record: &Record, host: &dyn HostContext) -> String {
    for source in RECORD_NAME_SOURCES {
        if let Some(name) = source(record).filter(|name| !name.is_empty()) {
            return name;
        }
    }

    if let Some(name) = page_title_name(host) {
        return name;
    }

    record
        .reference_num
        .clone()
        .filter(|reference| !reference.is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

/// Last-resort name from the page title.
///
/// A title equal to the host's bare default title carries no record name
/// and is skipped. Otherwise the segment before the first `" | "` is used;
/// if that segment is empty the whole title is kept.
fn page_title_name(host: &dyn HostContext) -> Option<String> {
    let title = host.document_title().filter(|title| !title.is_empty())?;
    if host.bare_page_title().is_some_and(|bare| bare == title) {
        return None;
    }

    let segment = title.split(" | ").next().unwrap_or_default();
    if segment.is_empty() {
        Some(title)
    } else {
        Some(segment.to_string())
    }
}
