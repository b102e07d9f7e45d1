use crate::codegen::{MockOptions, Struct, StructMethod};

/// Render the mock type and its delegating methods, starting with a blank
/// line.
pub fn mock_def(def: &Struct, opts: &MockOptions) -> String {
    let mut out = String::new();
    let mock_name = format!("{}{}", opts.prefix, def.name);

    out.push('\n');
    out.push_str(&gen_struct(&mock_name, def));

    let receiver = format!("{} {}{}", opts.receiver, mock_name, def.type_args);
    for method in &def.methods {
        out.push('\n');
        out.push_str(&gen_method(&receiver, &opts.receiver, method));
    }

    out
}

fn gen_struct(mock_name: &str, def: &Struct) -> String {
    let mut out = format!("type {}{} struct {{\n", mock_name, def.type_params);
    for method in &def.methods {
        out.push_str(&format!("\t{} {}\n", method.field(), func_type(method)));
    }
    out.push_str("}\n");
    out
}

fn func_type(method: &StructMethod) -> String {
    signature("func", method)
}

fn signature(name: &str, method: &StructMethod) -> String {
    if method.results.is_empty() {
        format!("{}({})", name, method.params)
    } else {
        format!("{}({}) {}", name, method.params, method.results)
    }
}

fn gen_method(receiver: &str, receiver_ident: &str, method: &StructMethod) -> String {
    let call = format!("{}.{}({})", receiver_ident, method.field(), method.call_args);

    // Returning a call without results is not valid Go
    let body = if method.results.is_empty() {
        call
    } else {
        format!("return {}", call)
    };

    format!(
        "func ({}) {} {{\n\t{}\n}}\n",
        receiver,
        signature(&method.name, method),
        body
    )
}
