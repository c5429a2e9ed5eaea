use std::fmt;
use std::rc::Rc;

use super::{OnSelected, TreeItem};
use crate::frontend::Frontend;
use crate::widget::Widget;

/// Tree of text labels.
#[derive(Clone, Default)]
pub struct TreeNode {
    pub label: String,
    pub nodes: Vec<TreeNode>,
    on_selected: Option<OnSelected<TreeNode>>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.nodes.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.nodes.extend(children);
        self
    }

    pub fn push(&mut self, child: TreeNode) {
        self.nodes.push(child);
    }

    pub fn with_on_selected(mut self, callback: impl Fn(&TreeNode) + 'static) -> Self {
        self.on_selected = Some(Rc::new(callback));
        self
    }

    pub fn set_on_selected(&mut self, callback: Option<OnSelected<TreeNode>>) {
        self.on_selected = callback;
    }

    /// Install one callback on this node and every descendant.
    pub fn with_on_selected_recursive(mut self, callback: impl Fn(&TreeNode) + 'static) -> Self {
        self.set_on_selected_recursive(Rc::new(callback));
        self
    }

    pub fn set_on_selected_recursive(&mut self, callback: OnSelected<TreeNode>) {
        for child in &mut self.nodes {
            child.set_on_selected_recursive(Rc::clone(&callback));
        }
        self.on_selected = Some(callback);
    }

    /// First node in the subtree with this label.
    pub fn find(&self, label: &str) -> Option<&TreeNode> {
        self.iter().find(|node| node.label == label)
    }

    pub fn find_mut(&mut self, label: &str) -> Option<&mut TreeNode> {
        if self.label == label {
            return Some(self);
        }
        self.nodes.iter_mut().find_map(|child| child.find_mut(label))
    }

    fn selected(&self) {
        if let Some(callback) = &self.on_selected {
            callback(self);
        }
    }

    /// Draw the subtree. Open branches fire their callback every frame,
    /// leaves fire when clicked.
    pub fn render(&self, ui: &mut dyn Frontend) {
        if self.is_leaf() {
            if ui.tree_leaf(&self.label) {
                self.selected();
            }
            return;
        }

        ui.tree_node(&self.label, &mut |ui| {
            self.selected();
            for child in &self.nodes {
                child.render(ui);
            }
        });
    }
}

impl TreeItem for TreeNode {
    fn children(&self) -> &[Self] {
        &self.nodes
    }
}

impl Widget for TreeNode {
    fn show(&mut self, ui: &mut dyn Frontend) {
        self.render(ui);
    }
}

impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("label", &self.label)
            .field("nodes", &self.nodes)
            .field("on_selected", &self.on_selected.is_some())
            .finish()
    }
}
