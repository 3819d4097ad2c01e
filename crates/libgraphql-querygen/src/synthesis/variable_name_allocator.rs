use std::collections::HashMap;
use std::collections::HashSet;

/// Hands out operation-unique variable names.
///
/// The first request for a name gets it verbatim; later requests for the
/// same name get `name1`, `name2`, ... in request order. A suffixed
/// candidate that is already taken (say a field argument literally named
/// `id1`) is skipped.
#[derive(Debug, Default)]
pub struct VariableNameAllocator {
    next_suffix: HashMap<String, usize>,
    taken: HashSet<String>,
}
impl VariableNameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, base_name: &str) -> String {
        if self.taken.insert(base_name.to_string()) {
            return base_name.to_string();
        }

        let suffix = self.next_suffix.entry(base_name.to_string()).or_insert(1);
        loop {
            let candidate = format!("{base_name}{suffix}");
            *suffix += 1;
            if self.taken.insert(candidate.clone()) {
                log::trace!("Disambiguated variable `{base_name}` as `{candidate}`.");
                return candidate;
            }
        }
    }
}
