//! Fixed symptom catalog.
//!
//! The clinic recognises a closed set of twelve symptoms, identified by the
//! integers 1..=12. Labels are the Thai strings shown to requesters. Id 12 is
//! reserved for a free-text "other" entry; selecting it reveals an extra text
//! field on the form.

/// Catalog id reserved for the free-text "other" symptom.
pub const OTHER_SYMPTOM_ID: u32 = 12;

/// Placeholder label for ids outside the catalog.
///
/// The catalog is closed, so this should never be rendered in practice; it is
/// a fallback so a stray id cannot poison a whole summary line.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// The full catalog, ascending by id.
const SYMPTOMS: [(u32, &str); 12] = [
    (1, "ปวดหัวเป็นไข้"),
    (2, "ปวดท้อง"),
    (3, "ท้องเสีย"),
    (4, "ปวดรอบเดือน"),
    (5, "เป็นหวัด"),
    (6, "ปวดฟัน"),
    (7, "เป็นแผล"),
    (8, "เป็นลม"),
    (9, "ตาเจ็บ"),
    (10, "ผื่นคัน"),
    (11, "นอนพัก"),
    (12, "อื่นๆ"),
];

/// Looks up the display label for a catalog id.
///
/// Unknown ids yield [`UNKNOWN_LABEL`] and are logged, since they indicate a
/// bug upstream of the catalog rather than user error.
pub fn label_for(id: u32) -> &'static str {
    match SYMPTOMS.iter().find(|(catalog_id, _)| *catalog_id == id) {
        Some((_, label)) => label,
        None => {
            tracing::warn!(id, "symptom id not in catalog");
            UNKNOWN_LABEL
        }
    }
}

/// Iterates the catalog in ascending id order, for rendering pickers.
pub fn symptoms() -> impl Iterator<Item = (u32, &'static str)> {
    SYMPTOMS.iter().copied()
}

/// Renders a selection as a comma-joined label line.
///
/// Ids are sorted ascending and deduplicated before lookup, so the line is
/// stable regardless of the order the user picked symptoms in. This is the
/// string used in both the confirmation summary and the success notification.
pub fn label_line(ids: &[u32]) -> String {
    let mut sorted: Vec<u32> = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    sorted
        .iter()
        .map(|id| label_for(*id))
        .collect::<Vec<_>>()
        .join(", ")
}
