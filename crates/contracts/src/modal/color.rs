//! CSS color syntax check.
//!
//! In the browser the components ask the document itself (see
//! `DomHost::accepts_color` in the frontend crate). This module is the
//! syntactic equivalent used off the browser. It follows CSS Color 4 and 5:
//! named and system colors, `transparent`, `currentcolor`, CSS-wide keywords,
//! hex notation, `rgb()`, `hsl()`, `hwb()`, `lab()`, `lch()`, `oklab()`,
//! `oklch()`, `color()`, `color-mix()`, `light-dark()`, math functions such as
//! `calc()` in channel position, and relative colors (`rgb(from red r g b)`).
//! Only syntax is checked; channel values are not range-limited because
//! browsers clamp them.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static NAMED_COLORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
        "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
        "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
        "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
        "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
        "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
        "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
        "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
        "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
        "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
        "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
        "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
        "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen",
        "magenta", "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
        "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
        "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
        "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
        "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
        "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
        "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
        "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue",
        "tan", "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke",
        "yellow", "yellowgreen",
        // special and CSS-wide keywords
        "transparent", "currentcolor", "inherit", "initial", "unset", "revert", "revert-layer",
    ]
    .into_iter()
    .collect()
});

static SYSTEM_COLORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "accentcolor", "accentcolortext", "activetext", "buttonborder", "buttonface",
        "buttontext", "canvas", "canvastext", "field", "fieldtext", "graytext", "highlight",
        "highlighttext", "linktext", "mark", "marktext", "selecteditem", "selecteditemtext",
        "visitedtext",
        // deprecated, still accepted by browsers
        "activeborder", "activecaption", "appworkspace", "background", "buttonhighlight",
        "buttonshadow", "captiontext", "inactiveborder", "inactivecaption",
        "inactivecaptiontext", "infobackground", "infotext", "menu", "menutext", "scrollbar",
        "threeddarkshadow", "threedface", "threedhighlight", "threedlightshadow",
        "threedshadow", "window", "windowframe", "windowtext",
    ]
    .into_iter()
    .collect()
});

const MATH_FUNCTIONS: &[&str] = &[
    "calc", "min", "max", "clamp", "round", "mod", "rem", "abs", "sign", "sin", "cos", "tan",
    "asin", "acos", "atan", "atan2", "pow", "sqrt", "hypot", "log", "exp",
];

/// Channel keywords usable inside a relative color (`rgb(from red r g b / alpha)`)
const RELATIVE_CHANNELS: &[&str] = &["r", "g", "b", "h", "s", "l", "w", "a", "c", "x", "y", "z", "alpha"];

const PREDEFINED_SPACES: &[&str] = &[
    "srgb", "srgb-linear", "display-p3", "a98-rgb", "prophoto-rgb", "rec2020", "xyz", "xyz-d50",
    "xyz-d65",
];

const POLAR_SPACES: &[&str] = &["hsl", "hwb", "lch", "oklch"];

#[derive(Clone, Copy, PartialEq)]
enum Token {
    Number,
    Percentage,
    Angle,
    None,
    /// `calc()` and friends, or a relative channel keyword; resolves to any numeric type
    Computed,
}

/// Returns true when `value` would be accepted as a CSS color
pub fn is_valid_css_color(value: &str) -> bool {
    is_color(&value.trim().to_ascii_lowercase())
}

fn is_color(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if NAMED_COLORS.contains(value) || SYSTEM_COLORS.contains(value) {
        return true;
    }
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    let Some((name, args)) = split_function(value) else {
        return false;
    };
    match name {
        "rgb" | "rgba" => is_valid_rgb(args),
        "hsl" | "hsla" => is_valid_hue_function(args, true),
        "hwb" => is_valid_hue_function(args, false),
        "lab" | "oklab" => parse_modern(args).is_some_and(|m| {
            m.channels.iter().all(|c| is_channel(c, m.relative()))
        }),
        "lch" | "oklch" => parse_modern(args).is_some_and(|m| {
            is_channel(m.channels[0], m.relative())
                && is_channel(m.channels[1], m.relative())
                && is_hue(m.channels[2], m.relative())
        }),
        "color" => is_valid_color_function(args),
        "color-mix" => is_valid_color_mix(args),
        "light-dark" => {
            let parts = split_top_level(args, ',');
            parts.len() == 2 && parts.iter().all(|p| is_color(p.trim()))
        }
        _ => false,
    }
}

/// `name(args)` with balanced parentheses; `None` for anything else
fn split_function(value: &str) -> Option<(&str, &str)> {
    let open = value.find('(')?;
    let name = &value[..open];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }
    let args = value[open + 1..].strip_suffix(')')?;
    is_balanced(args).then_some((name, args))
}

fn is_balanced(text: &str) -> bool {
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

/// Split on `separator` outside of nested parentheses
fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Whitespace-separated words outside of nested parentheses
fn words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    words.push(&text[s..i]);
                }
                continue;
            }
            _ => {}
        }
        start.get_or_insert(i);
    }
    if let Some(s) = start {
        words.push(&text[s..]);
    }
    words
}

/// Space-separated arguments: `[from <color>] c1 c2 c3 [/ alpha]`
struct Modern<'a> {
    origin: Option<&'a str>,
    channels: Vec<&'a str>,
    alpha: Option<&'a str>,
}

impl Modern<'_> {
    fn relative(&self) -> bool {
        self.origin.is_some()
    }

    fn alpha_ok(&self) -> bool {
        self.alpha.map_or(true, |a| is_channel(a, self.relative()))
    }
}

/// Parses the modern argument form; the origin of a relative color must itself be valid.
/// With `leading > 0`, that many words (e.g. the color space of `color()`) are kept
/// in front of the channels.
fn parse_modern_with(args: &str, leading: usize) -> Option<Modern<'_>> {
    let halves = split_top_level(args, '/');
    let alpha = match halves.as_slice() {
        [_] => None,
        [_, alpha] => match words(alpha).as_slice() {
            [alpha] => Some(*alpha),
            _ => return None,
        },
        _ => return None,
    };

    let mut channels = words(halves[0]);
    let origin = if channels.first() == Some(&"from") {
        if channels.len() < 2 || !is_color(channels[1]) {
            return None;
        }
        let origin = channels[1];
        channels.drain(..2);
        Some(origin)
    } else {
        None
    };
    if channels.len() != 3 + leading {
        return None;
    }
    let modern = Modern { origin, channels, alpha };
    modern.alpha_ok().then_some(modern)
}

fn parse_modern(args: &str) -> Option<Modern<'_>> {
    parse_modern_with(args, 0)
}

fn is_valid_rgb(args: &str) -> bool {
    if has_legacy_commas(args) {
        let Some((channels, alpha)) = split_legacy(args) else {
            return false;
        };
        let kinds: Option<Vec<Token>> = channels.iter().map(|c| classify(c)).collect();
        let Some(kinds) = kinds else {
            return false;
        };
        // legacy syntax does not allow mixing numbers and percentages
        let uniform = kinds.iter().all(|k| matches!(k, Token::Number | Token::Computed))
            || kinds.iter().all(|k| matches!(k, Token::Percentage | Token::Computed));
        return uniform && alpha.map_or(true, is_legacy_alpha);
    }

    parse_modern(args).is_some_and(|m| m.channels.iter().all(|c| is_channel(c, m.relative())))
}

/// `hsl()` / `hwb()`: a hue followed by two percentages.
/// Only `hsl` has a legacy comma form.
fn is_valid_hue_function(args: &str, allow_legacy: bool) -> bool {
    if has_legacy_commas(args) {
        if !allow_legacy {
            return false;
        }
        let Some((channels, alpha)) = split_legacy(args) else {
            return false;
        };
        return matches!(classify(channels[0]), Some(Token::Number | Token::Angle | Token::Computed))
            && channels[1..]
                .iter()
                .all(|c| matches!(classify(c), Some(Token::Percentage | Token::Computed)))
            && alpha.map_or(true, is_legacy_alpha);
    }

    parse_modern(args).is_some_and(|m| {
        is_hue(m.channels[0], m.relative())
            && m.channels[1..].iter().all(|c| is_channel(c, m.relative()))
    })
}

/// `color(<space> c1 c2 c3 [/ alpha])`, optionally relative
fn is_valid_color_function(args: &str) -> bool {
    parse_modern_with(args, 1).is_some_and(|m| {
        PREDEFINED_SPACES.contains(&m.channels[0])
            && m.channels[1..].iter().all(|c| is_channel(c, m.relative()))
    })
}

/// `color-mix(in <space> [<hue-method> hue], <color> [<pct>], <color> [<pct>])`
fn is_valid_color_mix(args: &str) -> bool {
    let parts = split_top_level(args, ',');
    let [method, first, second] = parts.as_slice() else {
        return false;
    };
    let method_ok = match words(method).as_slice() {
        ["in", space] => PREDEFINED_SPACES.contains(space) || is_mix_space(space),
        ["in", space, interpolation, "hue"] => {
            POLAR_SPACES.contains(space)
                && matches!(*interpolation, "shorter" | "longer" | "increasing" | "decreasing")
        }
        _ => false,
    };
    method_ok && is_mix_component(first) && is_mix_component(second)
}

fn is_mix_space(space: &str) -> bool {
    matches!(space, "lab" | "oklab") || POLAR_SPACES.contains(&space)
}

fn is_mix_component(part: &str) -> bool {
    let is_percentage = |w: &str| matches!(classify(w), Some(Token::Percentage | Token::Computed));
    match words(part).as_slice() {
        [color] => is_color(color),
        [color, pct] if is_color(color) => is_percentage(*pct),
        [pct, color] => is_percentage(*pct) && is_color(color),
        _ => false,
    }
}

fn has_legacy_commas(args: &str) -> bool {
    split_top_level(args, ',').len() > 1
}

fn split_legacy(args: &str) -> Option<(Vec<&str>, Option<&str>)> {
    let parts: Vec<&str> = split_top_level(args, ',').into_iter().map(str::trim).collect();
    if parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    match parts.len() {
        3 => Some((parts, None)),
        4 => Some((parts[..3].to_vec(), Some(parts[3]))),
        _ => None,
    }
}

/// Number, percentage or `none`; channel keywords too when `relative`
fn is_channel(token: &str, relative: bool) -> bool {
    match classify(token) {
        Some(Token::Number | Token::Percentage | Token::None | Token::Computed) => true,
        Some(Token::Angle) => false,
        None => relative && RELATIVE_CHANNELS.contains(&token),
    }
}

fn is_hue(token: &str, relative: bool) -> bool {
    match classify(token) {
        Some(Token::Number | Token::Angle | Token::None | Token::Computed) => true,
        Some(Token::Percentage) => false,
        None => relative && RELATIVE_CHANNELS.contains(&token),
    }
}

fn is_legacy_alpha(token: &str) -> bool {
    matches!(classify(token), Some(Token::Number | Token::Percentage | Token::Computed))
}

fn classify(token: &str) -> Option<Token> {
    if token == "none" {
        return Some(Token::None);
    }
    if let Some((name, _)) = split_function(token) {
        return MATH_FUNCTIONS.contains(&name).then_some(Token::Computed);
    }
    if let Some(number) = token.strip_suffix('%') {
        return parse_number(number).map(|_| Token::Percentage);
    }
    for unit in ["deg", "grad", "rad", "turn"] {
        if let Some(number) = token.strip_suffix(unit) {
            return parse_number(number).map(|_| Token::Angle);
        }
    }
    parse_number(token).map(|_| Token::Number)
}

fn parse_number(token: &str) -> Option<f64> {
    // f64::from_str also accepts "inf" and "nan", CSS does not
    if token.is_empty()
        || !token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e'))
    {
        return None;
    }
    token.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert!(is_valid_css_color("red"));
        assert!(is_valid_css_color("RebeccaPurple"));
        assert!(is_valid_css_color("transparent"));
        assert!(is_valid_css_color("currentColor"));
        assert!(is_valid_css_color("inherit"));
        assert!(!is_valid_css_color("not-a-color"));
        assert!(!is_valid_css_color("invalid-color"));
        assert!(!is_valid_css_color(""));
        assert!(!is_valid_css_color("   "));
    }

    #[test]
    fn test_hex() {
        assert!(is_valid_css_color("#fff"));
        assert!(is_valid_css_color("#1F1F1F"));
        assert!(is_valid_css_color("#18181880"));
        assert!(is_valid_css_color("#abcd"));
        assert!(!is_valid_css_color("#12345"));
        assert!(!is_valid_css_color("#ggg"));
        assert!(!is_valid_css_color("#"));
    }

    #[test]
    fn test_rgb_legacy() {
        assert!(is_valid_css_color("rgba(0, 0, 0, 0.42)"));
        assert!(is_valid_css_color("rgba(255, 0, 0, 0.42)"));
        assert!(is_valid_css_color("rgb(255,255,255)"));
        assert!(is_valid_css_color("rgb(100%, 0%, 50%)"));
        assert!(is_valid_css_color("rgb(1, 2, 3, 50%)"));
        assert!(!is_valid_css_color("rgb(255, 50%, 0)"));
        assert!(!is_valid_css_color("rgb(1, 2)"));
        assert!(!is_valid_css_color("rgb(1, 2, 3, 4, 5)"));
        assert!(!is_valid_css_color("rgb(a, b, c)"));
        assert!(!is_valid_css_color("rgb(1, , 3)"));
        assert!(!is_valid_css_color("rgb(1, 2, 3"));
    }

    #[test]
    fn test_rgb_modern() {
        assert!(is_valid_css_color("rgb(255 0 0)"));
        assert!(is_valid_css_color("rgb(255 0 0 / 50%)"));
        assert!(is_valid_css_color("rgba(255 50% none / .5)"));
        assert!(!is_valid_css_color("rgb(255 0)"));
        assert!(!is_valid_css_color("rgb(255 0 0 /)"));
        assert!(!is_valid_css_color("rgb(255 0 0 / 1 / 1)"));
    }

    #[test]
    fn test_hue_functions() {
        assert!(is_valid_css_color("hsl(120, 100%, 50%)"));
        assert!(is_valid_css_color("hsla(120deg, 100%, 50%, 0.3)"));
        assert!(is_valid_css_color("hsl(0.5turn 40% 60% / 1)"));
        assert!(is_valid_css_color("hwb(90 10% 10%)"));
        assert!(!is_valid_css_color("hsl(120, 100, 50)"));
        assert!(!is_valid_css_color("hsl(red, 10%, 10%)"));
        assert!(!is_valid_css_color("hwb(90, 10%, 10%)"));
    }

    #[test]
    fn test_color_4_functions() {
        assert!(is_valid_css_color("oklch(70% 0.1 200)"));
        assert!(is_valid_css_color("oklch(0.7 0.1 200deg / 50%)"));
        assert!(is_valid_css_color("lab(50% 40 59.5)"));
        assert!(is_valid_css_color("lch(52% 40 30)"));
        assert!(is_valid_css_color("oklab(0.5 0.1 0.1)"));
        assert!(is_valid_css_color("color(srgb 1 0 0)"));
        assert!(is_valid_css_color("color(display-p3 1 0.5 0 / .8)"));
        assert!(!is_valid_css_color("lab(50% 40)"));
        assert!(!is_valid_css_color("lab(50%, 40, 59.5)"));
        assert!(!is_valid_css_color("oklch(70% 0.1 50%)"));
        assert!(!is_valid_css_color("color(cmyk 1 0 0)"));
        assert!(!is_valid_css_color("color(srgb 1 0)"));
    }

    #[test]
    fn test_system_colors() {
        assert!(is_valid_css_color("Canvas"));
        assert!(is_valid_css_color("ButtonText"));
        assert!(is_valid_css_color("GrayText"));
        assert!(!is_valid_css_color("ButtonColor"));
    }

    #[test]
    fn test_computed_channels() {
        assert!(is_valid_css_color("rgb(calc(255) 0 0)"));
        assert!(is_valid_css_color("rgb(calc(100 / 2), 0, 0)"));
        assert!(is_valid_css_color("hsl(calc(120deg + 10deg) 50% 50% / min(1, 0.5))"));
        assert!(!is_valid_css_color("rgb(var(--r) 0 0)"));
        assert!(!is_valid_css_color("rgb(calc(255 0 0)"));
    }

    #[test]
    fn test_relative_colors() {
        assert!(is_valid_css_color("rgb(from red r g b)"));
        assert!(is_valid_css_color("rgb(from #123456 r g b / alpha)"));
        assert!(is_valid_css_color("oklch(from rgb(10 20 30) l c h)"));
        assert!(is_valid_css_color("color(from red srgb r g calc(b + 0.1))"));
        assert!(!is_valid_css_color("rgb(from nope r g b)"));
        assert!(!is_valid_css_color("rgb(r g b)"));
    }

    #[test]
    fn test_mixing_functions() {
        assert!(is_valid_css_color("color-mix(in srgb, red, blue)"));
        assert!(is_valid_css_color("color-mix(in oklch longer hue, red 30%, #00f)"));
        assert!(is_valid_css_color("color-mix(in lab, 25% rgb(0 0 0), white)"));
        assert!(is_valid_css_color("light-dark(white, #1f1f1f)"));
        assert!(!is_valid_css_color("color-mix(srgb, red, blue)"));
        assert!(!is_valid_css_color("color-mix(in srgb longer hue, red, blue)"));
        assert!(!is_valid_css_color("color-mix(in srgb, red)"));
    }

    #[test]
    fn test_rejects_non_finite_numbers() {
        assert!(!is_valid_css_color("rgb(inf, 0, 0)"));
        assert!(!is_valid_css_color("rgb(nan 0 0)"));
        assert!(!is_valid_css_color("cmyk(0, 0, 0, 0)"));
    }
}
