use crate::models::{Arg, Interface, Method};

pub mod interface;
pub mod mock;

pub const FN_SUFFIX: &str = "Fn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockOptions {
    pub prefix: String,
    pub receiver: String,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            prefix: "Mock".to_string(),
            receiver: "o".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Struct {
    pub name: String,
    /// Declaration form, e.g. `[K comparable, V any]`, empty if not generic
    pub type_params: String,
    /// Instantiation form used by receivers, e.g. `[K, V]`
    pub type_args: String,
    pub methods: Vec<StructMethod>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructMethod {
    pub name: String,
    pub params: String,
    pub results: String,
    pub call_args: String,
}

impl StructMethod {
    pub fn field(&self) -> String {
        format!("{}{}", self.name, FN_SUFFIX)
    }
}

/// Every parameter is expected to carry a name already.
pub fn to_struct(iface: &Interface) -> Struct {
    let (type_params, type_args) = if iface.type_params.is_empty() {
        (String::new(), String::new())
    } else {
        let names = iface
            .type_params
            .iter()
            .map(|p| p.name.as_str().unwrap_or("_"))
            .collect::<Vec<_>>();
        (
            format!("[{}]", param_list(&iface.type_params)),
            format!("[{}]", names.join(", ")),
        )
    };

    Struct {
        name: iface.name.clone(),
        type_params,
        type_args,
        methods: iface.methods.iter().map(gen_struct_method).collect(),
    }
}

fn gen_struct_method(method: &Method) -> StructMethod {
    let call_args = method
        .params
        .iter()
        .map(|p| {
            let name = p.name.as_str().unwrap_or_default();
            // A variadic parameter arrives as a slice and has to be spread again
            if p.ty.starts_with("...") {
                format!("{}...", name)
            } else {
                name.to_string()
            }
        })
        .collect::<Vec<_>>();

    StructMethod {
        name: method.name.clone(),
        params: param_list(&method.params),
        results: result_list(&method.results),
        call_args: call_args.join(", "),
    }
}

fn arg_to_string(arg: &Arg) -> String {
    match arg.name.as_str() {
        Some(name) => format!("{} {}", name, arg.ty),
        None => arg.ty.clone(),
    }
}

pub fn param_list(args: &[Arg]) -> String {
    args.iter().map(arg_to_string).collect::<Vec<_>>().join(", ")
}

/// Parenthesized when there is more than one result or the only one is named.
pub fn result_list(args: &[Arg]) -> String {
    let results = param_list(args);
    match args {
        [] => String::new(),
        [single] if single.name.is_unnamed() => results,
        _ => format!("({})", results),
    }
}
