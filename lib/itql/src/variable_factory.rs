use mulgara_model::Variable;

/// Generates the variables that name projected constants and nested queries: `k0`, `k1`, ...
#[derive(Debug, Default)]
pub struct VariableFactory {
    next: usize,
}

impl VariableFactory {
    pub fn new_variable(&mut self) -> Variable {
        let variable = Variable::new_unchecked(format!("k{}", self.next));
        self.next += 1;
        variable
    }
}
