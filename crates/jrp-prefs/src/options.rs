//! Option structs parsed from the preference TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// CSS variable values interpolated into the generated stylesheet.
///
/// Every field is a raw CSS value string and is inserted verbatim, so any
/// unit or color syntax the host renderer accepts is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    /// Font size of ruby readings, relative to the base text.
    pub ruby_font_size: String,
    /// Font size of pitch graphs, relative to the base text.
    pub graph_font_size: String,
    /// Accent color for heiban words.
    pub heiban_color: String,
    /// Accent color for atamadaka words.
    pub atamadaka_color: String,
    /// Accent color for nakadaka words.
    pub nakadaka_color: String,
    /// Accent color for odaka words.
    pub odaka_color: String,
    /// Accent color for kifuku words.
    pub kifuku_color: String,
    /// Accent color for words without pitch information.
    pub unknown_color: String,
    /// Stroke width of pitch graph outlines.
    pub graph_border_width: String,
    /// Stroke color of pitch graph outlines.
    pub graph_border_color: String,
    /// Width of the bar-style accent indicator.
    pub indicator_bar_width: String,
    /// Corner radius of the bar-style accent indicator.
    pub indicator_bar_radius: String,
    /// Edge length of the diamond-style accent indicator.
    pub indicator_diamond_size: String,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            ruby_font_size: "40%".to_string(),
            graph_font_size: "70%".to_string(),
            heiban_color: "#611bf8".to_string(),
            atamadaka_color: "#ff1d48".to_string(),
            nakadaka_color: "#008000".to_string(),
            odaka_color: "#c68229".to_string(),
            kifuku_color: "#eb8c00".to_string(),
            unknown_color: "#808080".to_string(),
            graph_border_width: "0.08em".to_string(),
            graph_border_color: "black".to_string(),
            indicator_bar_width: "3px".to_string(),
            indicator_bar_radius: "2px".to_string(),
            indicator_diamond_size: "10px".to_string(),
        }
    }
}

/// Resolved per-note-type options consumed by the synchronizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteTypeOptions {
    /// Maintain the managed section of the stylesheet.
    pub manage_style: bool,
    /// Maintain the managed section of every card-layout side.
    pub manage_script: bool,
    /// Use the diamond accent indicator instead of the bar.
    pub use_diamond_indicators: bool,
    /// Strip predecessor-tool markers before updating a field.
    pub remove_mia_migaku: bool,
    /// Stylesheet variable values.
    pub style: StyleOptions,
}

impl Default for NoteTypeOptions {
    fn default() -> Self {
        Self {
            manage_style: true,
            manage_script: true,
            use_diamond_indicators: false,
            remove_mia_migaku: false,
            style: StyleOptions::default(),
        }
    }
}

/// One note type under management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedNoteType {
    /// Host identifier of the note type.
    pub id: i64,
    /// Options applied to it.
    #[serde(flatten)]
    pub options: NoteTypeOptions,
}

/// Root preference document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefs {
    /// Note types the tool manages, in declaration order.
    pub note_types: Vec<ManagedNoteType>,
}

impl Prefs {
    /// Parses preferences from TOML content.
    ///
    /// # Arguments
    ///
    /// * `content` - TOML string to parse
    ///
    /// # Example
    ///
    /// ```
    /// use jrp_prefs::Prefs;
    ///
    /// let prefs = Prefs::parse(r#"
    /// [[note_types]]
    /// id = 1286120344
    /// use_diamond_indicators = true
    /// "#).unwrap();
    ///
    /// assert_eq!(prefs.note_types.len(), 1);
    /// assert!(prefs.note_types[0].options.use_diamond_indicators);
    /// assert!(prefs.note_types[0].options.manage_style);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let prefs: Prefs = toml::from_str(content)?;
        Ok(prefs)
    }

    /// Loads preferences from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] when the file cannot be read and
    /// [`Error::Parse`] when its content is not a valid preference document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Returns the options configured for a note type id.
    pub fn options_for(&self, id: i64) -> Option<&NoteTypeOptions> {
        self.note_types
            .iter()
            .find(|nt| nt.id == id)
            .map(|nt| &nt.options)
    }
}
