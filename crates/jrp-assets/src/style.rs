//! Generated stylesheet payload.

use jrp_prefs::StyleOptions;

use crate::compress_spaces;

/// Generation counter of the style payload format.
pub const STYLE_VERSION: u32 = 1;

static UNIT_CSS: &str = include_str!("../assets/style/unit.css");
static PATTERN_CSS: &str = include_str!("../assets/style/pattern.css");
static INDICATOR_BAR_CSS: &str = include_str!("../assets/style/indicator-bar.css");
static INDICATOR_DIAMOND_CSS: &str = include_str!("../assets/style/indicator-diamond.css");
static GRAPH_CSS: &str = include_str!("../assets/style/graph.css");

/// Builds the stylesheet payload for one note type.
///
/// The sheet opens with a `:root` block carrying the values from `options`,
/// followed by the static fragments: unit styling, pitch-pattern colors, one
/// of the two accent indicators, and the pitch graph styling. The result is
/// whitespace-compressed to a single line.
///
/// # Arguments
/// * `options` - CSS variable values to interpolate
/// * `use_diamond_indicators` - Pick the diamond indicator fragment instead
///   of the bar
pub fn generate_style(options: &StyleOptions, use_diamond_indicators: bool) -> String {
    let indicator = if use_diamond_indicators {
        INDICATOR_DIAMOND_CSS
    } else {
        INDICATOR_BAR_CSS
    };
    let sheet = [
        variable_block(options).as_str(),
        UNIT_CSS,
        PATTERN_CSS,
        indicator,
        GRAPH_CSS,
    ]
    .concat();
    compress_spaces(&sheet)
}

fn variable_block(options: &StyleOptions) -> String {
    format!(
        ":root {{\n\
         --jrp-ruby-font-size: {};\n\
         --jrp-graph-font-size: {};\n\
         --jrp-heiban-color: {};\n\
         --jrp-atamadaka-color: {};\n\
         --jrp-nakadaka-color: {};\n\
         --jrp-odaka-color: {};\n\
         --jrp-kifuku-color: {};\n\
         --jrp-unknown-color: {};\n\
         --jrp-graph-border-width: {};\n\
         --jrp-graph-border-color: {};\n\
         --jrp-indicator-bar-width: {};\n\
         --jrp-indicator-bar-radius: {};\n\
         --jrp-indicator-diamond-size: {};\n\
         }}\n",
        options.ruby_font_size,
        options.graph_font_size,
        options.heiban_color,
        options.atamadaka_color,
        options.nakadaka_color,
        options.odaka_color,
        options.kifuku_color,
        options.unknown_color,
        options.graph_border_width,
        options.graph_border_color,
        options.indicator_bar_width,
        options.indicator_bar_radius,
        options.indicator_diamond_size,
    )
}
