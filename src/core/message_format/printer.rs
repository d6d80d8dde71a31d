use super::ast::{Element, Message, MessageOption};

/// Serialize a message back to its canonical ICU text.
pub fn print(message: &Message) -> String {
    let mut out = String::new();
    print_message(message, false, &mut out);
    out
}

fn print_message(message: &Message, in_plural: bool, out: &mut String) {
    for element in &message.elements {
        match element {
            Element::Literal(text) => escape_into(text, in_plural, out),
            Element::Pound => out.push('#'),
            Element::Argument(name) => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
            Element::Formatted { name, kind, style } => {
                out.push('{');
                out.push_str(name);
                out.push_str(", ");
                out.push_str(kind.as_str());
                if let Some(style) = style {
                    out.push_str(", ");
                    out.push_str(style);
                }
                out.push('}');
            }
            Element::Plural {
                name,
                kind,
                offset,
                options,
            } => {
                out.push('{');
                out.push_str(name);
                out.push_str(", ");
                out.push_str(kind.as_str());
                out.push(',');
                if *offset != 0 {
                    out.push_str(&format!(" offset:{}", offset));
                }
                print_options(options, true, out);
                out.push('}');
            }
            Element::Select { name, options } => {
                out.push('{');
                out.push_str(name);
                out.push_str(", select,");
                print_options(options, in_plural, out);
                out.push('}');
            }
        }
    }
}

fn print_options(options: &[MessageOption], in_plural: bool, out: &mut String) {
    for option in options {
        out.push(' ');
        out.push_str(&option.selector);
        out.push_str(" {");
        print_message(&option.value, in_plural, out);
        out.push('}');
    }
}

fn escape_into(text: &str, in_plural: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '\\' | '{' | '}' => out.push('\\'),
            '#' if in_plural => out.push('\\'),
            _ => {}
        }
        out.push(c);
    }
}
