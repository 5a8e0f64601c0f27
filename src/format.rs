//! Printf-style detail formatting.
//!
//! Error details are built from a format string and positional arguments.
//! Format strings may come from translation catalogs at runtime, so a
//! placeholder/argument mismatch never fails: it is rendered into the output
//! so the problem stays visible in the resulting message.

use std::fmt::Display;

/// Substitute positional arguments into a printf-style format string.
///
/// Supported verbs:
/// - `%v`, `%s`, `%d` render the argument with `Display`
/// - `%q` renders the argument as a double-quoted, escaped string
/// - `%%` renders a literal `%`
///
/// Mismatches are rendered inline:
/// - a verb without an argument renders `%!s(MISSING)`
/// - unused arguments are appended as `%!(EXTRA a, b)`
/// - a trailing `%` renders `%!(NOVERB)`
/// - an unknown verb `x` renders `%!x(value)`
///
/// # Example
/// ```
/// use rpc_errors::format::sprintf;
///
/// assert_eq!(sprintf("user %s not found", &[&"bob"]), "user bob not found");
/// assert_eq!(sprintf("%s and %s", &[&"one"]), "one and %!s(MISSING)");
/// ```
pub fn sprintf(format: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut next_arg = 0;
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.next() {
            None => out.push_str("%!(NOVERB)"),
            Some('%') => out.push('%'),
            Some(verb) => match args.get(next_arg) {
                Some(arg) => {
                    next_arg += 1;
                    render_verb(&mut out, verb, *arg);
                }
                None => out.push_str(&format!("%!{}(MISSING)", verb)),
            },
        }
    }

    if next_arg < args.len() {
        let extra: Vec<String> = args[next_arg..].iter().map(|a| a.to_string()).collect();
        out.push_str(&format!("%!(EXTRA {})", extra.join(", ")));
    }

    out
}

fn render_verb(out: &mut String, verb: char, arg: &dyn Display) {
    match verb {
        'v' | 's' | 'd' => out.push_str(&arg.to_string()),
        'q' => out.push_str(&format!("{:?}", arg.to_string())),
        other => out.push_str(&format!("%!{}({})", other, arg)),
    }
}
