/// Convierte los fragmentos `$...$` a texto Unicode legible en egui.
/// Lo que está fuera de los `$` no se toca; un `$` sin cerrar se deja tal cual.
pub fn typeset_math(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('$') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        // $$...$$ se trata igual que $...$
        let (after, delim) = match after.strip_prefix('$') {
            Some(inner) => (inner, "$$"),
            None => (after, "$"),
        };
        match after.find(delim) {
            Some(end) => {
                out.push_str(&render_expr(&after[..end]));
                rest = &after[end + delim.len()..];
            }
            None => {
                out.push_str(delim);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

const SYMBOLS: &[(&str, &str)] = &[
    ("\\times", "×"),
    ("\\div", "÷"),
    ("\\pm", "±"),
    ("\\cdot", "·"),
    ("\\leq", "≤"),
    ("\\le", "≤"),
    ("\\geq", "≥"),
    ("\\ge", "≥"),
    ("\\neq", "≠"),
    ("\\ne", "≠"),
    ("\\approx", "≈"),
    ("\\infty", "∞"),
    ("\\pi", "π"),
    ("\\theta", "θ"),
    ("\\alpha", "α"),
    ("\\beta", "β"),
    ("\\degree", "°"),
    ("\\circ", "°"),
    ("\\left", ""),
    ("\\right", ""),
];

fn render_expr(expr: &str) -> String {
    let mut out = String::new();
    let chars: Vec<char> = expr.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                let name: String = chars[i + 1..]
                    .iter()
                    .take_while(|ch| ch.is_ascii_alphabetic())
                    .collect();
                let next = i + 1 + name.chars().count();
                match name.as_str() {
                    "frac" => {
                        let (num, j) = read_group(&chars, next);
                        let (den, k) = read_group(&chars, j);
                        out.push_str(&wrap_compound(&render_expr(&num)));
                        out.push('/');
                        out.push_str(&wrap_compound(&render_expr(&den)));
                        i = k;
                    }
                    "sqrt" => {
                        let (radicand, j) = read_group(&chars, next);
                        out.push('√');
                        out.push_str(&wrap_compound(&render_expr(&radicand)));
                        i = j;
                    }
                    "" => {
                        // \, \; \{ etc.
                        if let Some(&escaped) = chars.get(i + 1) {
                            if matches!(escaped, '{' | '}' | '%' | '$') {
                                out.push(escaped);
                            } else {
                                out.push(' ');
                            }
                        }
                        i += 2;
                    }
                    _ => {
                        let key = format!("\\{name}");
                        match SYMBOLS.iter().find(|(k, _)| *k == key) {
                            Some((_, symbol)) => out.push_str(symbol),
                            None => out.push_str(&name),
                        }
                        i = next;
                    }
                }
            }
            '^' | '_' => {
                let (group, j) = read_group(&chars, i + 1);
                let rendered = render_expr(&group);
                let mapped = if c == '^' {
                    map_script(&rendered, superscript)
                } else {
                    map_script(&rendered, subscript)
                };
                match mapped {
                    Some(s) => out.push_str(&s),
                    None => {
                        out.push(c);
                        out.push_str(&wrap_compound(&rendered));
                    }
                }
                i = j;
            }
            '{' | '}' => i += 1,
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

/// Lee `{...}` (con anidación) o un único carácter a partir de `start`.
fn read_group(chars: &[char], start: usize) -> (String, usize) {
    let mut i = start;
    while chars.get(i).is_some_and(|c| *c == ' ') {
        i += 1;
    }
    match chars.get(i) {
        Some('{') => {
            let mut depth = 0usize;
            let mut group = String::new();
            for (offset, &c) in chars[i..].iter().enumerate() {
                match c {
                    '{' => {
                        depth += 1;
                        if depth > 1 {
                            group.push(c);
                        }
                    }
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            return (group, i + offset + 1);
                        }
                        group.push(c);
                    }
                    _ => group.push(c),
                }
            }
            (group, chars.len())
        }
        Some(&c) => (c.to_string(), i + 1),
        None => (String::new(), i),
    }
}

fn wrap_compound(s: &str) -> String {
    if s.chars().count() <= 1 || s.chars().all(|c| c.is_alphanumeric()) {
        s.to_string()
    } else {
        format!("({s})")
    }
}

fn map_script(s: &str, f: fn(char) -> Option<char>) -> Option<String> {
    if s.is_empty() {
        return None;
    }
    s.chars().map(f).collect()
}

fn superscript(c: char) -> Option<char> {
    Some(match c {
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
        '+' => '⁺',
        '-' => '⁻',
        'n' => 'ⁿ',
        _ => return None,
    })
}

fn subscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' => '₋',
        'n' => 'ₙ',
        _ => return None,
    })
}
