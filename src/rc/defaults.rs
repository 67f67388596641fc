use super::{Cycle, Params, Value};

const FONT_SERIF: &[&str] = &[
    "DejaVu Serif",
    "Bitstream Vera Serif",
    "Computer Modern Roman",
    "New Century Schoolbook",
    "Times New Roman",
    "Times",
    "Palatino",
    "serif",
];
const FONT_SANS_SERIF: &[&str] = &[
    "DejaVu Sans",
    "Bitstream Vera Sans",
    "Computer Modern Sans Serif",
    "Lucida Grande",
    "Verdana",
    "Geneva",
    "Lucid",
    "Arial",
    "Helvetica",
    "Avant Garde",
    "sans-serif",
];
const FONT_MONOSPACE: &[&str] = &[
    "DejaVu Sans Mono",
    "Bitstream Vera Sans Mono",
    "Computer Modern Typewriter",
    "Andale Mono",
    "Nimbus Mono L",
    "Courier New",
    "Courier",
    "Fixed",
    "Terminal",
    "monospace",
];
const FONT_CURSIVE: &[&str] = &[
    "Apple Chancery",
    "Textile",
    "Zapf Chancery",
    "Sand",
    "Script MT",
    "Felipa",
    "Comic Neue",
    "Comic Sans MS",
    "cursive",
];
const FONT_FANTASY: &[&str] = &[
    "Chicago",
    "Charcoal",
    "Impact",
    "Western",
    "Humor Sans",
    "xkcd",
    "fantasy",
];

const PALETTE: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

fn list(names: &[&str]) -> Value {
    Value::List(names.iter().map(|s| s.to_string()).collect())
}

/// Library defaults for every key a theme can write
pub fn defaults() -> Params {
    let entries: Vec<(&str, Value)> = vec![
        // title
        ("axes.titlelocation", "center".into()),
        ("axes.titlepad", 6.0.into()),
        ("axes.titlesize", "large".into()),
        ("axes.titleweight", "normal".into()),
        // grid
        ("polaraxes.grid", true.into()),
        ("axes.grid", false.into()),
        ("axes3d.grid", true.into()),
        ("axes.grid.axis", "both".into()),
        ("axes.grid.which", "major".into()),
        ("grid.alpha", 1.0.into()),
        ("grid.linestyle", "-".into()),
        ("grid.linewidth", 0.8.into()),
        // lines
        ("lines.linestyle", "-".into()),
        ("lines.linewidth", 1.5.into()),
        // fonts
        ("font.family", list(&["sans-serif"])),
        ("font.cursive", list(FONT_CURSIVE)),
        ("font.fantasy", list(FONT_FANTASY)),
        ("font.monospace", list(FONT_MONOSPACE)),
        ("font.sans-serif", list(FONT_SANS_SERIF)),
        ("font.serif", list(FONT_SERIF)),
        ("font.size", 10.0.into()),
        ("font.stretch", "normal".into()),
        ("font.style", "normal".into()),
        ("font.variant", "normal".into()),
        ("font.weight", "normal".into()),
        // colors
        ("figure.facecolor", "white".into()),
        ("figure.edgecolor", "white".into()),
        ("axes.facecolor", "white".into()),
        ("axes.edgecolor", "black".into()),
        ("lines.color", "C0".into()),
        ("text.color", "black".into()),
        ("axes.titlecolor", "auto".into()),
        ("axes.labelcolor", "black".into()),
        ("grid.color", "#b0b0b0".into()),
        ("xtick.color", "black".into()),
        ("ytick.color", "black".into()),
        ("xtick.labelcolor", "inherit".into()),
        ("ytick.labelcolor", "inherit".into()),
        (
            "axes.prop_cycle",
            Cycle::color(PALETTE.iter().map(|s| s.to_string()).collect()).into(),
        ),
        // axes
        ("axes.linewidth", 0.8.into()),
        ("axes.spines.bottom", true.into()),
        ("axes.spines.left", true.into()),
        ("axes.spines.right", true.into()),
        ("axes.spines.top", true.into()),
        ("axes.xmargin", 0.05.into()),
        ("axes.ymargin", 0.05.into()),
        ("axes.zmargin", 0.05.into()),
        // ticks
        ("xtick.alignment", "center".into()),
        ("ytick.alignment", "center_baseline".into()),
        ("xtick.direction", "out".into()),
        ("ytick.direction", "out".into()),
        ("xtick.minor.visible", false.into()),
        ("ytick.minor.visible", false.into()),
        ("xtick.minor.width", 0.6.into()),
        ("ytick.minor.width", 0.6.into()),
        ("xtick.major.width", 0.8.into()),
        ("ytick.major.width", 0.8.into()),
        ("xtick.minor.size", 2.0.into()),
        ("ytick.minor.size", 2.0.into()),
        ("xtick.major.size", 3.5.into()),
        ("ytick.major.size", 3.5.into()),
        ("xtick.major.pad", 3.5.into()),
        ("ytick.major.pad", 3.5.into()),
        ("xtick.minor.pad", 3.4.into()),
        ("ytick.minor.pad", 3.4.into()),
        // axis labels
        ("axes.labelpad", 4.0.into()),
        ("axes.labelsize", "medium".into()),
        ("axes.labelweight", "normal".into()),
        // tick labels
        ("xaxis.labellocation", "center".into()),
        ("yaxis.labellocation", "center".into()),
        ("xtick.labelsize", "medium".into()),
        ("ytick.labelsize", "medium".into()),
        ("xtick.labelbottom", true.into()),
        ("xtick.labeltop", false.into()),
        ("ytick.labelleft", true.into()),
        ("ytick.labelright", false.into()),
    ];
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
