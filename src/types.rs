use std::ffi::OsString;

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: OsString,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn dir(name: impl Into<OsString>) -> Self {
        DirEntry {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<OsString>) -> Self {
        DirEntry {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// Which entries end up in the rendered tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Directories only.
    #[default]
    DirsOnly,
    /// Files (with sizes) and directories, sorted together.
    WithFiles,
}

impl RenderMode {
    /// The second CLI argument enables files only when it is exactly `-f`.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("-f") => RenderMode::WithFiles,
            _ => RenderMode::DirsOnly,
        }
    }

    pub fn includes_files(self) -> bool {
        self == RenderMode::WithFiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_flag_enables_files() {
        assert_eq!(RenderMode::from_flag(Some("-f")), RenderMode::WithFiles);
        assert_eq!(RenderMode::from_flag(Some("-F")), RenderMode::DirsOnly);
        assert_eq!(RenderMode::from_flag(Some("--files")), RenderMode::DirsOnly);
        assert_eq!(RenderMode::from_flag(Some("f")), RenderMode::DirsOnly);
        assert_eq!(RenderMode::from_flag(None), RenderMode::DirsOnly);
    }
}
