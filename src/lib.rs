// SPDX-FileCopyrightText: The course-tree authors
// SPDX-License-Identifier: MPL-2.0

//! Read-only, id-addressable tree of course content.
//!
//! The hierarchy is a fixed, four-level forest: [`Course`] → [`Lab`] →
//! [`Task`] → [`Step`]. Lookups either descend along a known path of ids
//! or scan the whole forest depth-first for a single id.

mod item;
pub use self::item::{Course, Identifiable, Item, ItemRef, Lab, Step, Task};

mod order;
pub use self::order::TraversalOrder;

mod reader;
pub use self::reader::{get_item_by_id, parse_courses, read_courses, ReadCoursesError};

mod search;
pub use self::search::{
    find_by_id, get_course_by_id, get_course_by_path, get_item_by_id_dfs_iterative,
    get_item_by_id_dfs_recursive, get_lab_by_id, get_lab_by_path, get_step_by_id,
    get_step_by_path, get_task_by_id, get_task_by_path, FoundItem, FoundItemRef,
};
