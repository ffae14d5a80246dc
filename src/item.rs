// SPDX-FileCopyrightText: The course-tree authors
// SPDX-License-Identifier: MPL-2.0

use serde::{Deserialize, Serialize};

/// Capability shared by all node kinds in the hierarchy.
///
/// Ids are unique only within their direct sibling group, not globally.
pub trait Identifiable {
    #[must_use]
    fn id(&self) -> &str;
}

/// Root node kind of the content forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub labs: Vec<Lab>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lab {
    pub id: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub steps: Vec<Step>,
}

/// Leaf node kind. Has no children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
}

impl Identifiable for Course {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Lab {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Step {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Node of any kind in the hierarchy.
///
/// Borrows the underlying node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRef<'a> {
    Course(&'a Course),
    Lab(&'a Lab),
    Task(&'a Task),
    Step(&'a Step),
}

impl<'a> ItemRef<'a> {
    /// Returns an iterator over all direct children of this node.
    ///
    /// Children are yielded in their stored sequence order. Empty for
    /// [`Step`] nodes.
    pub fn children(self) -> Box<dyn Iterator<Item = ItemRef<'a>> + 'a> {
        match self {
            Self::Course(course) => Box::new(course.labs.iter().map(ItemRef::from)),
            Self::Lab(lab) => Box::new(lab.tasks.iter().map(ItemRef::from)),
            Self::Task(task) => Box::new(task.steps.iter().map(ItemRef::from)),
            Self::Step(_) => Box::new(std::iter::empty()),
        }
    }

    #[must_use]
    pub const fn as_course(self) -> Option<&'a Course> {
        match self {
            Self::Course(course) => Some(course),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_lab(self) -> Option<&'a Lab> {
        match self {
            Self::Lab(lab) => Some(lab),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_task(self) -> Option<&'a Task> {
        match self {
            Self::Task(task) => Some(task),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_step(self) -> Option<&'a Step> {
        match self {
            Self::Step(step) => Some(step),
            _ => None,
        }
    }

    /// Clone the borrowed node into an owned [`Item`].
    #[must_use]
    pub fn to_owned(self) -> Item {
        match self {
            Self::Course(course) => Item::Course(course.clone()),
            Self::Lab(lab) => Item::Lab(lab.clone()),
            Self::Task(task) => Item::Task(task.clone()),
            Self::Step(step) => Item::Step(step.clone()),
        }
    }
}

impl Identifiable for ItemRef<'_> {
    fn id(&self) -> &str {
        match self {
            Self::Course(course) => course.id(),
            Self::Lab(lab) => lab.id(),
            Self::Task(task) => task.id(),
            Self::Step(step) => step.id(),
        }
    }
}

impl<'a> From<&'a Course> for ItemRef<'a> {
    fn from(course: &'a Course) -> Self {
        Self::Course(course)
    }
}

impl<'a> From<&'a Lab> for ItemRef<'a> {
    fn from(lab: &'a Lab) -> Self {
        Self::Lab(lab)
    }
}

impl<'a> From<&'a Task> for ItemRef<'a> {
    fn from(task: &'a Task) -> Self {
        Self::Task(task)
    }
}

impl<'a> From<&'a Step> for ItemRef<'a> {
    fn from(step: &'a Step) -> Self {
        Self::Step(step)
    }
}

/// Node of any kind in the hierarchy.
///
/// Owns the underlying node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Course(Course),
    Lab(Lab),
    Task(Task),
    Step(Step),
}

impl Identifiable for Item {
    fn id(&self) -> &str {
        match self {
            Self::Course(course) => course.id(),
            Self::Lab(lab) => lab.id(),
            Self::Task(task) => task.id(),
            Self::Step(step) => step.id(),
        }
    }
}
