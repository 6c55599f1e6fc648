//! Descriptive labels for iterable axis indices, and the path-safe composite
//! labels derived from them.
//!
//! Each recognized axis name has a fixed, ordered label table: month names
//! for the time axis, depth ranges for the soil axis, carbon pool names, and
//! plant-functional-type identifiers. Lookups fail loudly for unknown axes
//! and out-of-range indices; nothing defaults silently.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{DiagError, Result};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const SOIL_LAYERS: [&str; 4] = ["0-0.1 m", "0.1-0.35 m", "0.35-1.0 m", "1.0-2.0 m"];

const POOLS: [&str; 4] = ["DPM", "RPM", "Micro. Bio", "Humus"];

const PFTS: [&str; 13] = [
    "BET-Tr", "BET-Te", "BDT", "NET", "NDT", "C3G", "C4G", "ESh", "DSh", "C3Cr", "C4Cr",
    "C3Pa", "C4Pa",
];

/// The label table for an axis name, if one exists.
///
/// `month` and `layer` are accepted as aliases for `time` and `soil` (older
/// JULES runs name the dimensions that way).
fn label_table(axis: &str) -> Option<&'static [&'static str]> {
    match axis {
        "time" | "month" => Some(&MONTHS),
        "soil" | "layer" => Some(&SOIL_LAYERS),
        "pool" => Some(&POOLS),
        "pft" => Some(&PFTS),
        _ => None,
    }
}

/// Descriptive label for one index along a recognized axis.
pub fn label_for(axis: &str, index: usize) -> Result<&'static str> {
    let table = label_table(axis).ok_or_else(|| DiagError::unknown_axis(axis))?;
    table.get(index).copied().ok_or(DiagError::LabelIndex {
        axis: axis.to_string(),
        index,
        len: table.len(),
    })
}

/// Ordered labels for one combination: leading context strings (e.g. the
/// year) followed by one `"(index)Label"` entry per iterable axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    leading: Vec<String>,
    entries: Vec<String>,
}

impl LabelSet {
    /// All labels in order, leading context first.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.leading
            .iter()
            .map(String::as_str)
            .chain(self.entries.iter().map(String::as_str))
    }

    /// The per-axis entries (without the leading context).
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Deterministic, filesystem-safe composite label.
    ///
    /// Structural characters `[`, `]`, `'`, `,` are stripped; spaces become
    /// underscores and periods become `p`.
    pub fn to_path_component(&self) -> String {
        let joined = self.all().collect::<Vec<_>>().join(" ");
        joined
            .chars()
            .filter(|c| !"[]',".contains(*c))
            .map(|c| match c {
                ' ' => '_',
                '.' => 'p',
                other => other,
            })
            .collect()
    }

    /// Sub-directory name for variables with more than one iterable axis:
    /// the last entry with periods as `p` and spaces removed. `None` when a
    /// single level of directories is enough.
    pub fn sub_folder(&self) -> Option<String> {
        if self.entries.len() < 2 {
            return None;
        }
        let last = self.entries.last()?;
        Some(last.replace('.', "p").replace(' ', ""))
    }

    /// Human-readable form with the `(index)` markers stripped, for legends
    /// and axis titles.
    pub fn clean_text(&self) -> String {
        strip_parenthetical(&self.all().collect::<Vec<_>>().join("  "))
    }
}

/// Build the label set for one combination.
///
/// `axis_names` and `combo` run in the same order as the partition that
/// produced them.
pub fn build_label_set(
    combo: &[usize],
    axis_names: &[String],
    leading: &[String],
) -> Result<LabelSet> {
    let mut entries = Vec::with_capacity(combo.len());
    for (axis, &index) in axis_names.iter().zip(combo) {
        entries.push(format!("({}){}", index, label_for(axis, index)?));
    }
    Ok(LabelSet {
        leading: leading.to_vec(),
        entries,
    })
}

/// Remove every balanced `(...)` span, including nested ones.
///
/// Each span start emits a single space so adjacent words do not concatenate.
/// A `)` at depth zero is kept literally; the depth counter never goes
/// negative.
pub fn strip_parenthetical(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut depth = 0usize;
    for c in s.chars() {
        if c == '(' {
            depth += 1;
            if depth == 1 {
                out.push(' ');
            }
        } else if c == ')' && depth > 0 {
            depth -= 1;
        } else if depth == 0 {
            out.push(c);
        }
    }
    out
}

/// Rewrite exponent notation in a unit string to Unicode superscripts, so
/// `kg m-2 s-1` reads as `kg m⁻² s⁻¹` in legend text.
pub fn cleanup_exponents(text: &str) -> String {
    static POWER_OF_TEN: OnceLock<Regex> = OnceLock::new();
    static LETTER_EXPONENT: OnceLock<Regex> = OnceLock::new();

    let power_of_ten =
        POWER_OF_TEN.get_or_init(|| Regex::new(r"(10)\^([-\d]+)").expect("literal regex"));
    let letter_exponent =
        LETTER_EXPONENT.get_or_init(|| Regex::new(r"([a-zA-Z])([-\d]+)").expect("literal regex"));

    let superscript = |exp: &str| -> String {
        exp.chars()
            .map(|c| match c {
                '0' => '⁰',
                '1' => '¹',
                '2' => '²',
                '3' => '³',
                '4' => '⁴',
                '5' => '⁵',
                '6' => '⁶',
                '7' => '⁷',
                '8' => '⁸',
                '9' => '⁹',
                '-' => '⁻',
                '+' => '⁺',
                other => other,
            })
            .collect()
    };

    let text = power_of_ten.replace_all(text, |caps: &regex::Captures<'_>| {
        format!("{}{}", &caps[1], superscript(&caps[2]))
    });
    letter_exponent
        .replace_all(&text, |caps: &regex::Captures<'_>| {
            format!("{}{}", &caps[1], superscript(&caps[2]))
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_and_soil_labels_match_the_tables() {
        assert_eq!(label_for("time", 0).unwrap(), "Jan");
        assert_eq!(label_for("time", 5).unwrap(), "Jun");
        assert_eq!(label_for("soil", 3).unwrap(), "1.0-2.0 m");
        assert_eq!(label_for("pool", 2).unwrap(), "Micro. Bio");
        assert_eq!(label_for("pft", 12).unwrap(), "C4Pa");
    }

    #[test]
    fn axis_aliases_share_tables() {
        assert_eq!(label_for("month", 2).unwrap(), "Mar");
        assert_eq!(label_for("layer", 0).unwrap(), "0-0.1 m");
    }

    #[test]
    fn unknown_axis_is_an_error() {
        assert!(matches!(
            label_for("depth", 0),
            Err(DiagError::UnknownAxis { .. })
        ));
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        assert!(matches!(
            label_for("time", 12),
            Err(DiagError::LabelIndex { index: 12, .. })
        ));
        assert!(matches!(
            label_for("pool", 4),
            Err(DiagError::LabelIndex { len: 4, .. })
        ));
    }

    #[test]
    fn label_set_for_june_second_soil_layer() {
        let set = build_label_set(
            &[5, 1],
            &["time".to_string(), "soil".to_string()],
            &["2016".to_string()],
        )
        .unwrap();

        let all: Vec<&str> = set.all().collect();
        assert_eq!(all, vec!["2016", "(5)Jun", "(1)0.1-0.35 m"]);
    }

    #[test]
    fn path_component_policy_is_fixed() {
        let set = build_label_set(
            &[5, 1],
            &["time".to_string(), "soil".to_string()],
            &["2016".to_string()],
        )
        .unwrap();
        assert_eq!(set.to_path_component(), "2016_(5)Jun_(1)0p1-0p35_m");
    }

    #[test]
    fn sub_folder_only_for_multi_axis_combinations() {
        let multi = build_label_set(
            &[5, 1],
            &["time".to_string(), "soil".to_string()],
            &["2016".to_string()],
        )
        .unwrap();
        assert_eq!(multi.sub_folder().unwrap(), "(1)0p1-0p35m");

        let single = build_label_set(&[5], &["time".to_string()], &["2016".to_string()]).unwrap();
        assert_eq!(single.sub_folder(), None);
    }

    #[test]
    fn strip_parenthetical_replaces_spans_with_spaces() {
        assert_eq!(strip_parenthetical("(1)Jan(2)Feb"), " Jan Feb");
    }

    #[test]
    fn strip_parenthetical_handles_nesting() {
        assert_eq!(strip_parenthetical("a(b(c)d)e"), "a e");
    }

    #[test]
    fn unbalanced_closer_is_kept() {
        assert_eq!(strip_parenthetical("a)b"), "a)b");
    }

    #[test]
    fn exponents_become_superscripts() {
        assert_eq!(cleanup_exponents("kg m-2 s-1"), "kg m⁻² s⁻¹");
        assert_eq!(cleanup_exponents("10^6 m3"), "10⁶ m³");
        assert_eq!(cleanup_exponents("K"), "K");
    }
}
