use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(into = "String")]
pub enum ArgName {
    /// Only a type was given, e.g. `Bar(int)`
    Unnamed,
    Blank,
    Ident(String),
}

impl ArgName {
    pub fn ident<S: Into<String>>(name: S) -> Self {
        ArgName::Ident(name.into())
    }

    /// Name as written in the source; `_` becomes `Blank`.
    pub fn from_ident(name: &str) -> Self {
        if name == "_" {
            ArgName::Blank
        } else {
            ArgName::ident(name)
        }
    }

    pub fn is_unnamed(&self) -> bool {
        matches!(self, ArgName::Unnamed)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgName::Unnamed => None,
            ArgName::Blank => Some("_"),
            ArgName::Ident(name) => Some(name),
        }
    }
}

impl From<ArgName> for String {
    fn from(name: ArgName) -> Self {
        name.as_str().unwrap_or_default().to_string()
    }
}

/// A `<name> <type>` pair used for parameters, results and type parameters.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Arg {
    pub name: ArgName,
    /// Canonical Go text of the declared type
    #[serde(rename(serialize = "type"))]
    pub ty: String,
}

impl Arg {
    pub fn new<S: Into<String>>(name: ArgName, ty: S) -> Self {
        Self {
            name,
            ty: ty.into(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    #[serde(rename(serialize = "typeParams"))]
    pub type_params: Vec<Arg>,
    pub params: Vec<Arg>,
    pub results: Vec<Arg>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    #[serde(rename(serialize = "typeParams"))]
    pub type_params: Vec<Arg>,
    pub methods: Vec<Method>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_identifier() {
        assert_eq!(ArgName::from_ident("_"), ArgName::Blank);
        assert_eq!(ArgName::from_ident("ctx"), ArgName::ident("ctx"));
        assert_eq!(ArgName::Blank.as_str(), Some("_"));
        assert_eq!(ArgName::Unnamed.as_str(), None);
    }

    #[test]
    fn test_serialize_method() {
        let method = Method {
            name: "Get".to_string(),
            type_params: Vec::new(),
            params: vec![Arg::new(ArgName::ident("key"), "string")],
            results: vec![Arg::new(ArgName::Unnamed, "error"), Arg::new(ArgName::Blank, "int")],
        };
        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Get",
                "typeParams": [],
                "params": [{"name": "key", "type": "string"}],
                "results": [{"name": "", "type": "error"}, {"name": "_", "type": "int"}],
            })
        );
    }
}
