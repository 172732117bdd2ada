//! Error types for URDF reading and chain assembly.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URDF file could not be read.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not valid URDF. Carries the parser's message.
    #[error("URDF parse error: {0}")]
    Parse(String),

    /// Two `<link>` elements share a name.
    #[error("link {0} is declared more than once")]
    DuplicateLink(String),

    /// Following parent links from `link` never reaches a root.
    #[error("link graph has a cycle through {link}")]
    Cycle { link: String },

    /// A joint names a parent link that is not declared.
    #[error("link {link} has unknown parent {parent}")]
    DanglingParent { link: String, parent: String },

    /// A joint names a child link that is not declared.
    #[error("joint child {link} is not a declared link")]
    DanglingChild { link: String },

    /// A link is the child of more than one joint.
    #[error("link {link} is the child of more than one joint")]
    MultipleParents { link: String },

    #[error("more than one root link: {0:?}")]
    MultipleRoots(Vec<String>),

    #[error("no root link found")]
    NoRoot,

    #[error("link not found: {0}")]
    LinkNotFound(String),

    /// A joint axis of zero length.
    #[error("joint axis has zero length")]
    DegenerateAxis,

    #[error("expected {expected} joint coordinates, got {actual}")]
    JointCountMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let e = Error::LinkNotFound("Part6".into());
        assert_eq!(e.to_string(), "link not found: Part6");

        let e = Error::Parse("missing field `ixx`".into());
        assert_eq!(e.to_string(), "URDF parse error: missing field `ixx`");

        let e = Error::DanglingParent {
            link: "l2".into(),
            parent: "ghost".into(),
        };
        assert_eq!(e.to_string(), "link l2 has unknown parent ghost");

        let e = Error::DanglingChild {
            link: "gripper".into(),
        };
        assert_eq!(e.to_string(), "joint child gripper is not a declared link");

        let e = Error::DuplicateLink("base".into());
        assert_eq!(e.to_string(), "link base is declared more than once");

        let e = Error::JointCountMismatch {
            expected: 6,
            actual: 2,
        };
        assert_eq!(e.to_string(), "expected 6 joint coordinates, got 2");
    }

    #[test]
    fn io_error_includes_path() {
        let e = Error::Io {
            path: PathBuf::from("/tmp/robot.urdf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/tmp/robot.urdf"));
        assert!(msg.contains("not found"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn error_is_send_sync() {
        assert_send_sync::<Error>();
    }
}
