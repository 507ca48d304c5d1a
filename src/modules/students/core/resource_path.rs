// Classification of the request path below the students base path.
//
// The sub-path arrives percent-decoded once and is otherwise kept as received:
// no trimming, no further decoding. A name may therefore contain '/'.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcePath {
    /// The request targeted the base path itself.
    Absent,
    /// Everything after the base path, leading separator included.
    Present(String),
}

impl ResourcePath {
    pub fn from_path_info(path_info: Option<&str>) -> Self {
        match path_info {
            None | Some("") => Self::Absent,
            Some(path) => Self::Present(path.to_string()),
        }
    }

    /// True for the "empty" shape: no sub-path, or a single separator.
    pub fn is_collection(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Present(path) => path == "/",
        }
    }

    /// The student name carried by the "one segment" shape.
    pub fn student_name(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Present(path) => Some(path.strip_prefix('/').unwrap_or(path)),
        }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Present(path) => f.write_str(path),
        }
    }
}
