#![allow(dead_code)]

use spool_ir::expr::{Expr, Type};
use spool_ir::transition::{Module, Namespace, Port, Symbol, SymbolTable};

pub const MODULE: &str = "m";

/// Namespace with a module `m` declaring the boolean state variables `p`
/// and `q` and a single pure input `in`.
pub fn module_namespace() -> Namespace {
    let mut table = SymbolTable::new();
    table.add_symbol(MODULE, Symbol::new("p", Type::Bool, true));
    table.add_symbol(MODULE, Symbol::new("q", Type::Bool, true));
    table.add_module(Module::with_ports(
        MODULE,
        vec![Port::input("in", Type::Bool)],
    ));
    Namespace::new(table)
}

pub fn p() -> Expr {
    Expr::symbol("p", Type::Bool)
}

pub fn q() -> Expr {
    Expr::symbol("q", Type::Bool)
}

pub fn at(identifier: &str, timeframe: usize) -> Expr {
    spool_unwind::instantiate::timeframe_symbol(timeframe, identifier, Type::Bool)
}
