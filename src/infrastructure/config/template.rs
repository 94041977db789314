//! Rendering of input files in schema order.

use std::fmt::Write as _;

use super::loader::COMMENT_MARKER;
use crate::domain::models::{ConfigRecord, FieldKind, FieldSpec, FieldValue, SCHEMA};

const HEADER: &str = "\
# Input arguments for the land data system
#
# One value per line, in the order below. Blank lines, lines starting
# with '#' and anything after a '#' are ignored. Whitespace is removed.
";

/// A commented skeleton with a placeholder in every slot.
///
/// Integer slots get `0`, text slots get `<field_name>`.
pub fn render_template() -> String {
    render(|spec| match spec.kind() {
        FieldKind::Integer => "0".to_string(),
        FieldKind::Text => format!("<{}>", spec.name),
    })
}

/// The same layout as [`render_template`], filled from `record`.
pub fn render_record(record: &ConfigRecord) -> String {
    render(|spec| match spec.read(record) {
        FieldValue::Integer(value) => value.to_string(),
        FieldValue::Text(value) => value.to_string(),
    })
}

fn render(value_for: impl Fn(&FieldSpec) -> String) -> String {
    let mut out = String::from(HEADER);
    for spec in &SCHEMA {
        // writing to a String cannot fail
        let _ = write!(
            out,
            "\n{COMMENT_MARKER} [{:02}] {} ({}): {}\n{}\n",
            spec.slot,
            spec.name,
            spec.kind(),
            spec.description,
            value_for(spec)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ConfigLoader;
    use crate::SCHEMA_LEN;
    use std::io::Cursor;
    use std::path::Path;

    #[test]
    fn test_template_has_one_value_per_slot() {
        let text = render_template();
        let values: Vec<_> = text
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        assert_eq!(values.len(), SCHEMA_LEN);
        assert_eq!(values[0], "0");
        assert_eq!(values[5], "<inpath>");
        assert!(text.contains("# [54] lt_map_fname (text)"));
    }

    #[test]
    fn test_template_loads() {
        let text = render_template();
        let record = ConfigLoader::new()
            .load_reader(Cursor::new(text), Path::new("template"))
            .unwrap();
        assert_eq!(record.diagnostics, 0);
        assert_eq!(record.wf_fname, "<wf_fname>");
    }

    #[test]
    fn test_rendered_record_reloads_equal() {
        let mut record = ConfigRecord {
            diagnostics: 1,
            out_year_prod_ha_lr: 2010,
            in_year_sage_crops: 2000,
            out_year_usd: 2010,
            in_year_lr_usd: 2001,
            ..Default::default()
        };
        for spec in SCHEMA.iter().filter(|spec| spec.kind() == FieldKind::Text) {
            if let crate::FieldAccess::Text { set, .. } = spec.access {
                set(&mut record, format!("./{}.csv", spec.name));
            }
        }

        let reloaded = ConfigLoader::new()
            .load_reader(Cursor::new(render_record(&record)), Path::new("rendered"))
            .unwrap();
        assert_eq!(reloaded, record);
    }
}
