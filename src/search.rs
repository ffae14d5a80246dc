// SPDX-FileCopyrightText: The course-tree authors
// SPDX-License-Identifier: MPL-2.0

use crate::{Course, Identifiable, Item, ItemRef, Lab, Step, Task, TraversalOrder};

/// Result of a full-tree search.
///
/// Borrows the matched node from the searched forest.
///
/// `visited_nodes` counts the nodes examined up to and including the match.
/// It instruments the traversal and carries no business meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundItemRef<'a> {
    pub item: ItemRef<'a>,
    pub visited_nodes: usize,
}

impl FoundItemRef<'_> {
    /// Clone the matched node into an owned [`FoundItem`].
    #[must_use]
    pub fn to_owned(self) -> FoundItem {
        let Self {
            item,
            visited_nodes,
        } = self;
        FoundItem {
            item: item.to_owned(),
            visited_nodes,
        }
    }
}

/// Result of a full-tree search.
///
/// Owns the matched node, detached from any forest snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundItem {
    pub item: Item,
    pub visited_nodes: usize,
}

/// Searches a sequence of items for a specific id.
///
/// Returns the first item whose id matches, in sequence order, or `None`.
#[must_use]
pub fn find_by_id<'a, T: Identifiable>(items: &'a [T], item_id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == item_id)
}

#[must_use]
pub fn get_course_by_id<'a>(courses: &'a [Course], course_id: &str) -> Option<&'a Course> {
    find_by_id(courses, course_id)
}

#[must_use]
pub fn get_lab_by_id<'a>(course: &'a Course, lab_id: &str) -> Option<&'a Lab> {
    find_by_id(&course.labs, lab_id)
}

#[must_use]
pub fn get_task_by_id<'a>(lab: &'a Lab, task_id: &str) -> Option<&'a Task> {
    find_by_id(&lab.tasks, task_id)
}

#[must_use]
pub fn get_step_by_id<'a>(task: &'a Task, step_id: &str) -> Option<&'a Step> {
    find_by_id(&task.steps, step_id)
}

#[must_use]
pub fn get_course_by_path<'a>(courses: &'a [Course], course_id: &str) -> Option<&'a Course> {
    get_course_by_id(courses, course_id)
}

#[must_use]
pub fn get_lab_by_path<'a>(
    courses: &'a [Course],
    course_id: &str,
    lab_id: &str,
) -> Option<&'a Lab> {
    let course = get_course_by_path(courses, course_id)?;
    get_lab_by_id(course, lab_id)
}

#[must_use]
pub fn get_task_by_path<'a>(
    courses: &'a [Course],
    course_id: &str,
    lab_id: &str,
    task_id: &str,
) -> Option<&'a Task> {
    let lab = get_lab_by_path(courses, course_id, lab_id)?;
    get_task_by_id(lab, task_id)
}

#[must_use]
pub fn get_step_by_path<'a>(
    courses: &'a [Course],
    course_id: &str,
    lab_id: &str,
    task_id: &str,
    step_id: &str,
) -> Option<&'a Step> {
    let task = get_task_by_path(courses, course_id, lab_id, task_id)?;
    get_step_by_id(task, step_id)
}

/// Finds an item by its id with an iterative depth-first search.
///
/// Children are visited in sequence order. Each node is counted once,
/// immediately before its id is tested. Visits at most every node in
/// the forest.
#[must_use]
pub fn get_item_by_id_dfs_iterative<'a>(
    courses: &'a [Course],
    item_id: &str,
    order: TraversalOrder,
) -> Option<FoundItemRef<'a>> {
    let mut visited_nodes = 0;
    match order {
        TraversalOrder::PreOrder => {
            for course in courses {
                visited_nodes += 1;
                if course.id == item_id {
                    return Some(FoundItemRef {
                        item: ItemRef::Course(course),
                        visited_nodes,
                    });
                }

                for lab in &course.labs {
                    visited_nodes += 1;
                    if lab.id == item_id {
                        return Some(FoundItemRef {
                            item: ItemRef::Lab(lab),
                            visited_nodes,
                        });
                    }

                    for task in &lab.tasks {
                        visited_nodes += 1;
                        if task.id == item_id {
                            return Some(FoundItemRef {
                                item: ItemRef::Task(task),
                                visited_nodes,
                            });
                        }

                        for step in &task.steps {
                            visited_nodes += 1;
                            if step.id == item_id {
                                return Some(FoundItemRef {
                                    item: ItemRef::Step(step),
                                    visited_nodes,
                                });
                            }
                        }
                    }
                }
            }
        }
        TraversalOrder::PostOrder => {
            // Explicit two-phase stack: a node is pushed back with
            // `children_done` set before its children, so it is only
            // counted and tested after its whole subtree.
            let mut stack: Vec<(ItemRef<'a>, bool)> = courses
                .iter()
                .rev()
                .map(|course| (ItemRef::from(course), false))
                .collect();
            while let Some((item, children_done)) = stack.pop() {
                if children_done {
                    visited_nodes += 1;
                    if item.id() == item_id {
                        return Some(FoundItemRef {
                            item,
                            visited_nodes,
                        });
                    }
                } else {
                    stack.push((item, true));
                    let first_child = stack.len();
                    stack.extend(item.children().map(|child| (child, false)));
                    // Children must be popped in sequence order.
                    stack[first_child..].reverse();
                }
            }
        }
    }
    None
}

/// Finds an item by its id with a recursive depth-first search.
///
/// Accepts a sibling sequence of any node kind and searches the subtrees
/// rooted there. The visit counter is threaded through all recursive
/// calls, so it increases monotonically across the entire search.
#[must_use]
pub fn get_item_by_id_dfs_recursive<'a, T>(
    items: &'a [T],
    item_id: &str,
    order: TraversalOrder,
) -> Option<FoundItemRef<'a>>
where
    ItemRef<'a>: From<&'a T>,
{
    let mut visited_nodes = 0;
    let item = search_depth_first(
        items.iter().map(ItemRef::from),
        item_id,
        order,
        &mut visited_nodes,
    )?;
    Some(FoundItemRef {
        item,
        visited_nodes,
    })
}

fn search_depth_first<'a>(
    items: impl Iterator<Item = ItemRef<'a>>,
    item_id: &str,
    order: TraversalOrder,
    visited_nodes: &mut usize,
) -> Option<ItemRef<'a>> {
    for item in items {
        if order == TraversalOrder::PreOrder {
            *visited_nodes += 1;
            if item.id() == item_id {
                return Some(item);
            }
        }
        let found_below = search_depth_first(item.children(), item_id, order, visited_nodes);
        if found_below.is_some() {
            return found_below;
        }
        if order == TraversalOrder::PostOrder {
            *visited_nodes += 1;
            if item.id() == item_id {
                return Some(item);
            }
        }
    }
    None
}
