//! Transition-system view consumed by the unwinding passes: module-grouped
//! symbols, ports, and the namespace lookups over them.

use indexmap::IndexMap;

use crate::expr::{Expr, Type};

/// A named variable of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub identifier: String,
    pub ty: Type,
    /// Set for registers and latches; clear for wires and locals.
    pub is_state_var: bool,
}

impl Symbol {
    pub fn new(identifier: impl Into<String>, ty: Type, is_state_var: bool) -> Self {
        Self {
            identifier: identifier.into(),
            ty,
            is_state_var,
        }
    }

    pub fn symbol_expr(&self) -> Expr {
        Expr::symbol(self.identifier.clone(), self.ty)
    }
}

/// A module port. A port may be both input and output (inout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub identifier: String,
    pub ty: Type,
    pub input: bool,
    pub output: bool,
}

impl Port {
    pub fn input(identifier: impl Into<String>, ty: Type) -> Self {
        Self {
            identifier: identifier.into(),
            ty,
            input: true,
            output: false,
        }
    }

    pub fn output(identifier: impl Into<String>, ty: Type) -> Self {
        Self {
            identifier: identifier.into(),
            ty,
            input: false,
            output: true,
        }
    }
}

/// A module with its ordered port list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    pub identifier: String,
    pub ports: Vec<Port>,
}

impl Module {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ports: Vec::new(),
        }
    }

    pub fn with_ports(identifier: impl Into<String>, ports: Vec<Port>) -> Self {
        Self {
            identifier: identifier.into(),
            ports,
        }
    }
}

/// Symbols grouped by the module that declares them.
///
/// Iteration order within a module is declaration order.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: IndexMap<String, Vec<Symbol>>,
    modules: IndexMap<String, Module>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_module(&mut self, module: Module) {
        self.modules.insert(module.identifier.clone(), module);
    }

    pub fn add_symbol(&mut self, module_identifier: impl Into<String>, symbol: Symbol) {
        self.symbols
            .entry(module_identifier.into())
            .or_default()
            .push(symbol);
    }

    pub fn symbols_of_module(&self, module_identifier: &str) -> &[Symbol] {
        self.symbols
            .get(module_identifier)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn module(&self, module_identifier: &str) -> Option<&Module> {
        self.modules.get(module_identifier)
    }
}

/// Lookup view over a symbol table, handed to the passes that need to
/// resolve modules and their variables.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    pub symbol_table: SymbolTable,
}

impl Namespace {
    pub fn new(symbol_table: SymbolTable) -> Self {
        Self { symbol_table }
    }

    pub fn symbols_of_module(&self, module_identifier: &str) -> &[Symbol] {
        self.symbol_table.symbols_of_module(module_identifier)
    }

    pub fn lookup_module(&self, module_identifier: &str) -> Option<&Module> {
        self.symbol_table.module(module_identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_of_module_preserves_declaration_order() {
        let mut table = SymbolTable::new();
        table.add_symbol("m", Symbol::new("b", Type::Bool, true));
        table.add_symbol("m", Symbol::new("a", Type::BitVector(8), true));
        table.add_symbol("other", Symbol::new("x", Type::Bool, false));

        let symbols = table.symbols_of_module("m");
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].identifier, "b");
        assert_eq!(symbols[1].identifier, "a");
    }

    #[test]
    fn unknown_module_has_no_symbols() {
        let table = SymbolTable::new();
        assert!(table.symbols_of_module("missing").is_empty());
        assert!(table.module("missing").is_none());
    }

    #[test]
    fn namespace_resolves_modules_and_ports() {
        let mut table = SymbolTable::new();
        table.add_module(Module::with_ports(
            "m",
            vec![
                Port::input("clk", Type::Bool),
                Port::output("done", Type::Bool),
            ],
        ));
        let ns = Namespace::new(table);

        let module = ns.lookup_module("m").expect("module m is declared");
        assert_eq!(module.ports.len(), 2);
        assert!(module.ports[0].input && !module.ports[0].output);
        assert!(ns.lookup_module("n").is_none());
    }

    #[test]
    fn symbol_expr_carries_identifier_and_type() {
        let symbol = Symbol::new("state", Type::BitVector(4), true);
        assert_eq!(
            symbol.symbol_expr(),
            Expr::symbol("state", Type::BitVector(4))
        );
    }
}
