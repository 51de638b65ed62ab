//! Renders the display detection report.
//!
//! The report is plain text meant to be read in a terminal and copy-pasted
//! from: a per-display summary, folder-name suggestions, and configuration
//! snippets for the video player's `DISPLAY_VIDEO_CONFIG` table keyed four
//! different ways.

use std::fmt;

use crate::{
    DisplayRecord,
    ident::{classify_orientation, derive_simple_id, orientation_label},
};

const RULE_WIDTH: usize = 80;

/// A lazily rendered report over a set of display records.
///
/// Rendering is deterministic: the same records always produce the same text.
pub struct Report<'a> {
    displays: &'a [DisplayRecord],
}

impl<'a> Report<'a> {
    pub fn new(displays: &'a [DisplayRecord]) -> Self {
        Self { displays }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        section_heading(f, 25, "DISPLAY DETECTION REPORT")?;
        writeln!(f, "Total Displays Found: {}\n", self.displays.len())?;

        for display in self.displays {
            detail_block(f, display)?;
        }

        section_heading(f, 25, "FOLDER NAME SUGGESTIONS")?;
        folder_suggestions(f, self.displays)?;

        section_heading(f, 22, "CONFIGURATION FOR main.js")?;
        config_snippet(f, self.displays)?;

        section_heading(f, 20, "ALTERNATIVE IDENTIFICATION METHODS")?;
        alternative_methods(f, self.displays)?;

        writeln!(f, "{}\n", "=".repeat(RULE_WIDTH))
    }
}

/// Render the full report for the given records.
pub fn generate_report(displays: &[DisplayRecord]) -> String {
    Report::new(displays).to_string()
}

fn section_heading(f: &mut fmt::Formatter<'_>, indent: usize, title: &str) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(f, "{rule}")?;
    writeln!(f, "{}{title}", " ".repeat(indent))?;
    writeln!(f, "{rule}\n")
}

fn detail_block(f: &mut fmt::Formatter<'_>, display: &DisplayRecord) -> fmt::Result {
    let primary_text = if display.is_primary { " (PRIMARY)" } else { "" };
    let orientation = classify_orientation(display.width, display.height);
    let simple_id = derive_simple_id(&display.device_id);

    writeln!(f, "┌{}┐", "─".repeat(78))?;
    writeln!(f, "│ Display {}{primary_text:<70}│", display.index)?;
    writeln!(f, "└{}┘", "─".repeat(78))?;

    writeln!(f, "  Monitor Name:       {}", display.device_string)?;
    writeln!(f, "  Device Name:        {}", display.device_name)?;
    writeln!(f, "  Simple ID:          {simple_id}")?;
    writeln!(f, "  Resolution:         {}x{}", display.width, display.height)?;
    // Both orientation views are shown on purpose: the geometry-based word
    // and the raw rotation label can disagree on a rotated display.
    writeln!(
        f,
        "  Orientation:        {orientation} ({})",
        orientation_label(display.orientation)
    )?;
    writeln!(
        f,
        "  Position:           x:{}, y:{}",
        display.position_x, display.position_y
    )?;
    writeln!(f, "  Refresh Rate:       {} Hz", display.frequency)?;
    writeln!(f, "  Color Depth:        {}-bit", display.bits_per_pixel)?;
    writeln!(
        f,
        "  Primary Display:    {}",
        if display.is_primary { "Yes" } else { "No" }
    )?;
    writeln!(f, "\n  Full Device ID:")?;
    writeln!(f, "    {}", display.device_id)?;
    writeln!(f, "\n  Registry Key:")?;
    writeln!(f, "    {}", display.device_key)?;
    writeln!(f)
}

fn folder_suggestions(f: &mut fmt::Formatter<'_>, displays: &[DisplayRecord]) -> fmt::Result {
    writeln!(f, "Create these folders in C:\\ for your videos:\n")?;

    for display in displays {
        let simple_id = derive_simple_id(&display.device_id);
        let orientation = classify_orientation(display.width, display.height);

        writeln!(
            f,
            "Display {}: {} ({}x{} {})",
            display.index,
            display.device_string,
            display.width,
            display.height,
            orientation.folder_word()
        )?;
        writeln!(f, "  C:\\{simple_id}_default\\video.mp4")?;
        writeln!(f, "  C:\\{simple_id}_trigger\\video.mp4")?;
        writeln!(f)?;
    }

    Ok(())
}

fn config_snippet(f: &mut fmt::Formatter<'_>, displays: &[DisplayRecord]) -> fmt::Result {
    writeln!(f, "Add this to DISPLAY_VIDEO_CONFIG in main.js:\n")?;
    writeln!(f, "const DISPLAY_VIDEO_CONFIG = {{")?;

    for display in displays {
        let simple_id = derive_simple_id(&display.device_id);
        let orientation = classify_orientation(display.width, display.height);

        writeln!(
            f,
            "  // {} ({}x{} {})",
            display.device_string,
            display.width,
            display.height,
            orientation.folder_word()
        )?;
        writeln!(f, "  '{simple_id}': 'your_custom_name',")?;
        writeln!(f)?;
    }

    writeln!(f, "}};\n")
}

fn alternative_methods(f: &mut fmt::Formatter<'_>, displays: &[DisplayRecord]) -> fmt::Result {
    writeln!(f, "Option 1: By Simple ID (Extracted from Device ID)")?;
    writeln!(f, "const DISPLAY_VIDEO_CONFIG = {{")?;
    for display in displays {
        writeln!(f, "  '{}': 'folder_name',", derive_simple_id(&display.device_id))?;
    }
    writeln!(f, "}};\n")?;

    writeln!(f, "Option 2: By Resolution")?;
    writeln!(f, "const DISPLAY_VIDEO_CONFIG = {{")?;
    for display in displays {
        writeln!(f, "  '{}x{}': 'folder_name',", display.width, display.height)?;
    }
    writeln!(f, "}};\n")?;

    writeln!(f, "Option 3: By Position")?;
    writeln!(f, "const DISPLAY_VIDEO_CONFIG = {{")?;
    for display in displays {
        writeln!(
            f,
            "  'x{}_y{}': 'folder_name',",
            display.position_x, display.position_y
        )?;
    }
    writeln!(f, "}};\n")?;

    writeln!(f, "Option 4: By Monitor Name (only if different)")?;
    writeln!(f, "const DISPLAY_VIDEO_CONFIG = {{")?;
    for display in displays {
        writeln!(f, "  '{}': 'folder_name',", display.device_string)?;
    }
    writeln!(f, "}};\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dual_display_fixture() -> Vec<DisplayRecord> {
        vec![
            DisplayRecord {
                index: 0,
                device_name: r"\\.\DISPLAY1".to_owned(),
                device_string: "LG ULTRAWIDE".to_owned(),
                device_id: r"\\?\DISPLAY#GSM5BBB#4&1a2b3c&0&UID0#{e6f07b5f-ee97-4a90-b076-33f57bf4eaa7}".to_owned(),
                device_key: r"\Registry\Machine\System\CurrentControlSet\Control\Video\{guid}\0000".to_owned(),
                width: 1920,
                height: 1080,
                position_x: 0,
                position_y: 0,
                frequency: 60,
                bits_per_pixel: 32,
                orientation: 0,
                is_primary: true,
                state_flags: 0x5,
            },
            DisplayRecord {
                index: 1,
                device_name: r"\\.\DISPLAY2".to_owned(),
                device_string: "DELL P2419H".to_owned(),
                device_id: r"\\?\DISPLAY#DEL40A9#5&9f8e7d&0&UID1#{e6f07b5f-ee97-4a90-b076-33f57bf4eaa7}".to_owned(),
                device_key: r"\Registry\Machine\System\CurrentControlSet\Control\Video\{guid}\0001".to_owned(),
                width: 1080,
                height: 1920,
                position_x: 1920,
                position_y: 0,
                frequency: 75,
                bits_per_pixel: 32,
                orientation: 1,
                is_primary: false,
                state_flags: 0x1,
            },
        ]
    }

    #[test]
    fn sections_appear_in_order() {
        let report = generate_report(&dual_display_fixture());

        let detection = report.find("DISPLAY DETECTION REPORT").unwrap();
        let folders = report.find("FOLDER NAME SUGGESTIONS").unwrap();
        let config = report.find("CONFIGURATION FOR main.js").unwrap();
        let alternatives = report.find("ALTERNATIVE IDENTIFICATION METHODS").unwrap();

        assert!(detection < folders);
        assert!(folders < config);
        assert!(config < alternatives);
    }

    #[test]
    fn reports_total_count() {
        let report = generate_report(&dual_display_fixture());
        assert!(report.contains("Total Displays Found: 2"));
    }

    #[test]
    fn detail_block_marks_only_the_primary() {
        let report = generate_report(&dual_display_fixture());

        assert!(report.contains("│ Display 0 (PRIMARY)"));
        assert!(report.contains("│ Display 1 "));
        assert_eq!(report.matches("(PRIMARY)").count(), 1);
        assert!(report.contains("  Primary Display:    Yes"));
        assert!(report.contains("  Primary Display:    No"));
    }

    #[test]
    fn detail_block_shows_both_orientation_views() {
        let report = generate_report(&dual_display_fixture());

        assert!(report.contains("  Orientation:        Landscape (Landscape (0°))"));
        assert!(report.contains("  Orientation:        Portrait (Portrait (90°))"));
    }

    #[test]
    fn detail_block_carries_mode_and_identity_fields() {
        let report = generate_report(&dual_display_fixture());

        assert!(report.contains("  Monitor Name:       LG ULTRAWIDE"));
        assert!(report.contains("  Device Name:        \\\\.\\DISPLAY1"));
        assert!(report.contains("  Simple ID:          GSM5BBB_4&1a2b3c&0&UID0"));
        assert!(report.contains("  Resolution:         1920x1080"));
        assert!(report.contains("  Position:           x:1920, y:0"));
        assert!(report.contains("  Refresh Rate:       75 Hz"));
        assert!(report.contains("  Color Depth:        32-bit"));
        assert!(report.contains(r"\Registry\Machine\System\CurrentControlSet\Control\Video\{guid}\0001"));
    }

    #[test]
    fn folder_suggestions_cover_each_display_with_both_suffixes() {
        let report = generate_report(&dual_display_fixture());

        assert!(report.contains("Display 0: LG ULTRAWIDE (1920x1080 landscape)"));
        assert!(report.contains(r"  C:\GSM5BBB_4&1a2b3c&0&UID0_default\video.mp4"));
        assert!(report.contains(r"  C:\GSM5BBB_4&1a2b3c&0&UID0_trigger\video.mp4"));

        assert!(report.contains("Display 1: DELL P2419H (1080x1920 portrait)"));
        assert!(report.contains(r"  C:\DEL40A9_5&9f8e7d&0&UID1_default\video.mp4"));
        assert!(report.contains(r"  C:\DEL40A9_5&9f8e7d&0&UID1_trigger\video.mp4"));

        // Enumeration order is preserved.
        let first = report.find("Display 0: LG ULTRAWIDE").unwrap();
        let second = report.find("Display 1: DELL P2419H").unwrap();
        assert!(first < second);
    }

    #[test]
    fn config_snippet_uses_placeholder_values() {
        let report = generate_report(&dual_display_fixture());

        assert!(report.contains("  'GSM5BBB_4&1a2b3c&0&UID0': 'your_custom_name',"));
        assert!(report.contains("  'DEL40A9_5&9f8e7d&0&UID1': 'your_custom_name',"));
        assert_eq!(report.matches("'your_custom_name'").count(), 2);
    }

    #[test]
    fn alternative_blocks_hold_two_entries_per_scheme() {
        let report = generate_report(&dual_display_fixture());

        // Option 1: simple id.
        assert!(report.contains("  'GSM5BBB_4&1a2b3c&0&UID0': 'folder_name',"));
        assert!(report.contains("  'DEL40A9_5&9f8e7d&0&UID1': 'folder_name',"));
        // Option 2: resolution.
        assert!(report.contains("  '1920x1080': 'folder_name',"));
        assert!(report.contains("  '1080x1920': 'folder_name',"));
        // Option 3: position.
        assert!(report.contains("  'x0_y0': 'folder_name',"));
        assert!(report.contains("  'x1920_y0': 'folder_name',"));
        // Option 4: monitor name.
        assert!(report.contains("  'LG ULTRAWIDE': 'folder_name',"));
        assert!(report.contains("  'DELL P2419H': 'folder_name',"));

        // Four schemes, two displays each.
        assert_eq!(report.matches("'folder_name',").count(), 8);
        assert_eq!(report.matches("const DISPLAY_VIDEO_CONFIG = {").count(), 5);
    }

    #[test]
    fn rendering_is_deterministic() {
        let displays = dual_display_fixture();
        assert_eq!(generate_report(&displays), generate_report(&displays));
    }

    #[test]
    fn simple_id_collisions_are_reported_as_is() {
        let mut displays = dual_display_fixture();
        displays[1].device_id = displays[0].device_id.clone();

        let report = generate_report(&displays);
        assert_eq!(
            report.matches("  'GSM5BBB_4&1a2b3c&0&UID0': 'folder_name',").count(),
            2
        );
    }
}
