//! # OpenSCAD Lists
//!
//! Pure list manipulation for geometry code: the vertex, anchor and
//! parameter lists that modelling macros build before handing them to the
//! geometry layer.
//!
//! ## Architecture
//!
//! ```text
//! index (wraparound) ──┬─> accessors ─┐
//!                      ├─> mutators   │
//! shape (nesting) ─────┼─> sets       ├─> caller
//!                      ├─> distribution
//!                      └─> combinatorics
//! ```
//!
//! Every operation is a pure function over slices. Nothing is mutated in
//! place and no state survives a call, so operations may run concurrently
//! without coordination.
//!
//! ## Index Policy
//!
//! - **Reads** wrap: `select(&[a, b, c], 4)` is `b`
//! - **Writes** extend: `list_set` past the end pads with a default
//! - **Repeated write indices** are an error
//!
//! ## Example
//!
//! ```rust
//! use openscad_lists::{list_set, repeat_entries, select, DistributionTarget};
//!
//! let profile = [2, 3, 4, 5];
//! assert_eq!(*select(&profile, -1).unwrap(), 5);
//! assert_eq!(list_set(&profile, &[1, 3], &[81, 47], &0, 0).unwrap(), vec![2, 81, 4, 47]);
//!
//! let holes = repeat_entries(&[0, 1, 2, 3], &DistributionTarget::Total(6), true).unwrap();
//! assert_eq!(holes.len(), 6);
//! ```

pub mod accessors;
pub mod combinatorics;
pub mod distribution;
pub mod error;
pub mod index;
pub mod mutators;
pub mod sets;
pub mod shape;
pub mod value;

// Re-export public API
pub use accessors::{
    bselect, column, enumerate, enumerate_columns, head, idx, last, select, select_many,
    select_span, slice, tail,
};
pub use combinatorics::{
    binomial, combinations, combinations_par, combinations_par_with, pair, permutations, triplet,
    zip, zip_long,
};
pub use config::constants::ListConfig;
pub use distribution::{
    count, repeat, repeat_dims, repeat_entries, shuffle, sum_preserving_round, DistributionTarget,
};
pub use error::{ListError, ListResult};
pub use index::{resolve_index, resolve_range, resolve_selector, IndexRange, Selector};
pub use mutators::{
    deduplicate, deduplicate_by, deduplicate_indexed, list_bset, list_fit, list_insert,
    list_insert_at, list_pad, list_remove, list_remove_values, list_rotate, list_set, list_set_at,
    list_trim, reverse,
};
pub use sets::{
    find_first_match, in_list, in_list_column, set_difference, set_intersection, set_union,
    set_union_indexed,
};
pub use shape::{
    flatten, force_list, full_flatten, full_flatten_with, is_homogeneous, list_shape,
    list_shape_at, list_shape_with, list_to_matrix, max_length, min_length, transpose, Dim,
    ShapeDescriptor,
};
pub use value::{vector, Nested, Value};
