// SPDX-FileCopyrightText: The course-tree authors
// SPDX-License-Identifier: MPL-2.0

use std::{fs, io, path::Path};

use thiserror::Error;

use crate::{get_item_by_id_dfs_iterative, Course, FoundItem, FoundItemRef, TraversalOrder};

/// Failed to obtain a course forest from its external source.
///
/// A missing item is never an error. Absence is an expected outcome of
/// every search and reported as `None`.
#[derive(Debug, Error)]
pub enum ReadCoursesError {
    #[error("failed to read course data: {0}")]
    Io(#[from] io::Error),

    #[error("malformed course data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parse a course forest from JSON.
///
/// The input must be an array of courses conforming to the four-level
/// schema.
pub fn parse_courses(json: &str) -> Result<Vec<Course>, ReadCoursesError> {
    let courses = serde_json::from_str(json)?;
    Ok(courses)
}

/// Read and parse a course forest from a JSON file.
pub fn read_courses(path: impl AsRef<Path>) -> Result<Vec<Course>, ReadCoursesError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let courses = parse_courses(&json)?;
    log::debug!(
        "Read {num_courses} course(s) from {path}",
        num_courses = courses.len(),
        path = path.display()
    );
    Ok(courses)
}

/// Load the course forest from a JSON file and search it for an item.
///
/// Thin composition of [`read_courses`] and
/// [`get_item_by_id_dfs_iterative`]. The loaded snapshot does not outlive
/// the call, so the matched node is returned as an owned clone.
pub fn get_item_by_id(
    path: impl AsRef<Path>,
    item_id: &str,
    order: TraversalOrder,
) -> Result<Option<FoundItem>, ReadCoursesError> {
    let courses = read_courses(path)?;
    let found = get_item_by_id_dfs_iterative(&courses, item_id, order);
    Ok(found.map(FoundItemRef::to_owned))
}
