pub mod ops_closure;
pub mod ops_list;
pub mod ops_naive;
pub mod ops_resolve;
pub mod ops_tree;
