// SPDX-FileCopyrightText: The course-tree authors
// SPDX-License-Identifier: MPL-2.0

/// Traversal order of a depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TraversalOrder {
    /// Visit and test a node before its children.
    PreOrder,

    /// Visit and test a node after all its children.
    PostOrder,
}
