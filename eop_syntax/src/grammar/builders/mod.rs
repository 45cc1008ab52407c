//! Builder functions for EOP grammar productions
//!
//! `atomic` defines the [`Parser`] interface and single-token productions.
//! The other modules layer on it: `helpers` for separated lists,
//! `expressions` for the precedence ladder, `statements` for procedure
//! bodies and `blocks` for declarations and the program driver.

pub mod atomic;
pub mod blocks;
pub mod expressions;
pub mod helpers;
pub mod statements;

pub use atomic::{attempt, guarded, Checkpoint, Parser};

pub use blocks::{
    parse_declaration, parse_enumeration, parse_member, parse_procedure, parse_program,
    parse_specialization, parse_structure, parse_template, parse_template_decl,
};

pub use expressions::{parse_additive, parse_expression, parse_parameter, parse_primary};

pub use helpers::{
    parse_additive_list, parse_expression_list, parse_parameter_list, parse_template_arguments,
};

pub use statements::{
    parse_compound, parse_construction, parse_control, parse_initialization, parse_statement,
    parse_typedef,
};
