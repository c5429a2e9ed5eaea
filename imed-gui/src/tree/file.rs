use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, warn};

use super::{FileIcons, OnSelected, TreeError, TreeItem};
use crate::frontend::Frontend;
use crate::widget::Widget;

/// How [`FreeTreeNode::build_from_dir_with`] walks the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Directory levels listed below the root. `None` walks everything.
    pub max_depth: Option<usize>,
    /// Keep entries whose name starts with a dot.
    pub include_hidden: bool,
    /// Directories first, then by file name. Otherwise the order is whatever
    /// the OS lists.
    pub sort: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            include_hidden: true,
            sort: false,
        }
    }
}

impl BuildOptions {
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    pub fn sorted(mut self) -> Self {
        self.sort = true;
        self
    }

    fn descends_into(&self, depth: usize) -> bool {
        !matches!(self.max_depth, Some(max) if depth >= max)
    }
}

/// Tree of file system paths, drawn with an icon in front of each entry.
#[derive(Clone, Default)]
pub struct FreeTreeNode {
    pub path: PathBuf,
    pub nodes: Vec<FreeTreeNode>,
    pub is_dir: bool,
    on_selected: Option<OnSelected<FreeTreeNode>>,
    icons: Option<Rc<FileIcons>>,
}

impl FreeTreeNode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            is_dir: true,
            ..Self::new(path)
        }
    }

    /// Mirror the directory at `root`, recursing into every subdirectory.
    pub fn build_from_dir(root: impl AsRef<Path>) -> Result<Self, TreeError> {
        Self::build_from_dir_with(root, &BuildOptions::default())
    }

    /// Errors reading `root` itself are returned. A subdirectory that cannot
    /// be read is logged and kept as an entry without children.
    pub fn build_from_dir_with(
        root: impl AsRef<Path>,
        options: &BuildOptions,
    ) -> Result<Self, TreeError> {
        let root = root.as_ref();
        let metadata = fs::metadata(root).map_err(|source| TreeError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(TreeError::NotADirectory(root.to_path_buf()));
        }

        let mut node = Self::dir(root);
        if options.descends_into(0) {
            node.nodes = read_children(root, options, 1)?;
        }
        debug!(
            "built file tree for {} with {} entries",
            root.display(),
            node.count() - 1
        );
        Ok(node)
    }

    pub fn with_child(mut self, child: FreeTreeNode) -> Self {
        self.nodes.push(child);
        self
    }

    pub fn push(&mut self, child: FreeTreeNode) {
        self.nodes.push(child);
    }

    /// File name, or the whole path when there is none (`/`, `..`).
    pub fn display_name(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.path.display().to_string(),
        }
    }

    /// Extension without the dot, empty when there is none.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn icons(&self) -> Option<&Rc<FileIcons>> {
        self.icons.as_ref()
    }

    /// Icons for this node and, unless they carry their own, its descendants.
    pub fn with_icons(mut self, icons: Rc<FileIcons>) -> Self {
        self.icons = Some(icons);
        self
    }

    pub fn set_icons(&mut self, icons: Option<Rc<FileIcons>>) {
        self.icons = icons;
    }

    pub fn with_on_selected(mut self, callback: impl Fn(&FreeTreeNode) + 'static) -> Self {
        self.on_selected = Some(Rc::new(callback));
        self
    }

    pub fn set_on_selected(&mut self, callback: Option<OnSelected<FreeTreeNode>>) {
        self.on_selected = callback;
    }

    pub fn with_on_selected_recursive(
        mut self,
        callback: impl Fn(&FreeTreeNode) + 'static,
    ) -> Self {
        self.set_on_selected_recursive(Rc::new(callback));
        self
    }

    pub fn set_on_selected_recursive(&mut self, callback: OnSelected<FreeTreeNode>) {
        for child in &mut self.nodes {
            child.set_on_selected_recursive(Rc::clone(&callback));
        }
        self.on_selected = Some(callback);
    }

    pub fn find(&self, path: impl AsRef<Path>) -> Option<&FreeTreeNode> {
        let path = path.as_ref();
        self.iter().find(|node| node.path == path)
    }

    fn selected(&self) {
        if let Some(callback) = &self.on_selected {
            callback(self);
        }
    }

    pub fn render(&self, ui: &mut dyn Frontend) {
        self.render_with(ui, None);
    }

    fn render_with(&self, ui: &mut dyn Frontend, inherited: Option<&FileIcons>) {
        let icons = self.icons.as_deref().or(inherited);
        if let Some(icons) = icons {
            let icon = if self.is_dir || !self.is_leaf() {
                icons.folder.clone()
            } else {
                icons.for_file(&self.extension())
            };
            if !icon.is_empty() {
                icon.show(ui, icons.size);
                ui.same_line();
            }
        }

        let name = self.display_name();
        if self.is_leaf() {
            if ui.tree_leaf(&name) {
                self.selected();
            }
            return;
        }

        ui.tree_node(&name, &mut |ui| {
            self.selected();
            for child in &self.nodes {
                child.render_with(ui, icons);
            }
        });
    }
}

fn read_children(
    dir: &Path,
    options: &BuildOptions,
    depth: usize,
) -> Result<Vec<FreeTreeNode>, TreeError> {
    let io_error = |source| TreeError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut nodes = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        if !options.include_hidden && entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        // symlinks are listed but not followed
        let is_dir = entry.file_type().is_ok_and(|kind| kind.is_dir());
        let path = entry.path();
        if !is_dir {
            nodes.push(FreeTreeNode::new(path));
            continue;
        }

        let mut node = FreeTreeNode::dir(path);
        if options.descends_into(depth) {
            match read_children(&node.path, options, depth + 1) {
                Ok(children) => node.nodes = children,
                Err(err) => warn!("skipping contents of {}: {err}", node.path.display()),
            }
        }
        nodes.push(node);
    }

    if options.sort {
        nodes.sort_by(compare_entries);
    }
    Ok(nodes)
}

fn compare_entries(a: &FreeTreeNode, b: &FreeTreeNode) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.path.file_name().cmp(&b.path.file_name()))
}

impl TreeItem for FreeTreeNode {
    fn children(&self) -> &[Self] {
        &self.nodes
    }
}

impl Widget for FreeTreeNode {
    fn show(&mut self, ui: &mut dyn Frontend) {
        self.render(ui);
    }
}

impl fmt::Debug for FreeTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreeTreeNode")
            .field("path", &self.path)
            .field("is_dir", &self.is_dir)
            .field("nodes", &self.nodes)
            .field("on_selected", &self.on_selected.is_some())
            .finish()
    }
}
