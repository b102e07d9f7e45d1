use std::fmt;

use crate::codegen::{param_list, result_list};
use crate::models::{Interface, Method};

/// Prints the method as it appears inside an interface body,
/// e.g. `Get[K comparable](key K) (string, error)`.
impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.type_params.is_empty() {
            write!(f, "[{}]", param_list(&self.type_params))?;
        }
        write!(f, "({})", param_list(&self.params))?;

        let results = result_list(&self.results);
        if !results.is_empty() {
            write!(f, " {}", results)?;
        }
        Ok(())
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {}", self.name)?;
        if !self.type_params.is_empty() {
            write!(f, "[{}]", param_list(&self.type_params))?;
        }
        if self.methods.is_empty() {
            return write!(f, " interface{{}}");
        }

        writeln!(f, " interface {{")?;
        for method in &self.methods {
            writeln!(f, "\t{}", method)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Arg, ArgName, Interface, Method};

    fn method() -> Method {
        Method {
            name: "Get".to_string(),
            type_params: vec![Arg::new(ArgName::ident("K"), "comparable")],
            params: vec![Arg::new(ArgName::Unnamed, "K"), Arg::new(ArgName::Blank, "bool")],
            results: vec![Arg::new(ArgName::Unnamed, "string"), Arg::new(ArgName::Unnamed, "error")],
        }
    }

    #[test]
    fn test_method_display() {
        assert_eq!(method().to_string(), "Get[K comparable](K, _ bool) (string, error)");

        let close = Method {
            name: "Close".to_string(),
            type_params: Vec::new(),
            params: Vec::new(),
            results: Vec::new(),
        };
        assert_eq!(close.to_string(), "Close()");
    }

    #[test]
    fn test_interface_display() {
        let iface = Interface {
            name: "Cache".to_string(),
            type_params: vec![Arg::new(ArgName::ident("V"), "any")],
            methods: vec![method()],
        };
        assert_eq!(
            iface.to_string(),
            "type Cache[V any] interface {\n\tGet[K comparable](K, _ bool) (string, error)\n}"
        );

        let empty = Interface {
            name: "Empty".to_string(),
            type_params: Vec::new(),
            methods: Vec::new(),
        };
        assert_eq!(empty.to_string(), "type Empty interface{}");
    }
}
