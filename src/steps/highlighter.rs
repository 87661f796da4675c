//! Signal highlighting for step text.
//!
//! Indicator abbreviations (ASCII word-bounded, so `RSI超卖` still counts)
//! become `**RSI**`; percentage and dollar literals
//! become `` `12.5%` `` / `` `$1,000.50` ``. Rules run in order, one
//! `replace_all` pass each.

use regex::Regex;
use std::sync::LazyLock;

struct Substitution {
    pattern: Regex,
    replacement: &'static str,
}

static SUBSTITUTIONS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    vec![
        Substitution {
            pattern: Regex::new(r"(?-u:\b)(RSI|MACD|EMA|ATR|SMA|BB)(?-u:\b)")
                .expect("regex should compile"),
            replacement: "**${1}**",
        },
        // The leading group stands in for a lookbehind: a percentage must not
        // continue a number ("1,2345%") or an expression ("5-3%").
        Substitution {
            pattern: Regex::new(r"(^|[^\d,.+\-])([+-]?(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?%)")
                .expect("regex should compile"),
            replacement: "${1}`${2}`",
        },
        Substitution {
            pattern: Regex::new(r"(\$(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?)")
                .expect("regex should compile"),
            replacement: "`${1}`",
        },
    ]
});

/// Wrap indicator names and numeric signals in emphasis markers.
pub fn highlight_signals(text: &str) -> String {
    let mut out = text.to_string();
    for rule in SUBSTITUTIONS.iter() {
        out = rule.pattern.replace_all(&out, rule.replacement).into_owned();
    }
    out
}
