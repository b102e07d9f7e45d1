use log::trace;

use crate::models::{Arg, ArgName, Interface, Method};

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Hands out `a`, `b`, `c`, ... for a single method, skipping letters the
/// method already declares.
pub struct NameSupply<'m> {
    method: &'m str,
    taken: Vec<&'m str>,
    next: usize,
    used: usize,
}

impl<'m> NameSupply<'m> {
    pub fn new(method: &'m str) -> Self {
        Self {
            method,
            taken: Vec::new(),
            next: 0,
            used: 0,
        }
    }

    pub fn for_method(method: &'m Method) -> Self {
        let mut supply = Self::new(&method.name);
        supply.taken = method
            .params
            .iter()
            .chain(&method.results)
            .filter_map(|arg| match &arg.name {
                ArgName::Ident(name) => Some(name.as_str()),
                _ => None,
            })
            .collect();
        supply
    }

    /// # Panics
    ///
    /// Panics once every letter has been handed out or taken.
    pub fn next_name(&mut self) -> ArgName {
        loop {
            let letter = match ALPHABET.get(self.next) {
                Some(letter) => (*letter as char).to_string(),
                None => panic!("method {} has no unused single-letter name left", self.method),
            };
            self.next += 1;
            if !self.taken.contains(&letter.as_str()) {
                self.used += 1;
                return ArgName::Ident(letter);
            }
        }
    }

    pub fn used(&self) -> usize {
        self.used
    }
}

/// Return a copy of `iface` where every parameter is named.
///
/// # Panics
///
/// Panics if one method runs out of single-letter names.
pub fn apply_defaults(iface: &Interface) -> Interface {
    Interface {
        name: iface.name.clone(),
        type_params: iface.type_params.clone(),
        methods: iface.methods.iter().map(default_method).collect(),
    }
}

pub fn default_method(method: &Method) -> Method {
    let mut supply = NameSupply::for_method(method);

    let params = fill_names(&method.params, &mut supply);
    let results = if method.results.iter().any(|r| !r.name.is_unnamed()) {
        fill_names(&method.results, &mut supply)
    } else {
        method.results.clone()
    };

    if supply.used() > 0 {
        trace!("Generated {} name(s) for {}", supply.used(), method.name);
    }

    Method {
        name: method.name.clone(),
        type_params: method.type_params.clone(),
        params,
        results,
    }
}

fn fill_names(args: &[Arg], supply: &mut NameSupply) -> Vec<Arg> {
    args.iter()
        .map(|arg| match arg.name {
            ArgName::Unnamed => Arg::new(supply.next_name(), arg.ty.clone()),
            _ => arg.clone(),
        })
        .collect()
}
