use crate::vfs::VirtualFS;
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

/// Build the directory tree from the VFS entries, returning the root node.
fn build_tree(vfs: &VirtualFS, destination: &Path) -> Rc<RefCell<TreeNode>> {
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let root = Rc::new(RefCell::new(TreeNode::new(root_name, false)));

    // keyed by path relative to the destination; the root is the empty path
    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();
    lookup.insert(PathBuf::new(), Rc::clone(&root));

    for entry in &vfs.entries {
        let rel_path = &entry.destination;
        let parent_path = rel_path.parent().unwrap_or_else(|| Path::new(""));

        let Some(parent_node) = lookup.get(parent_path).map(Rc::clone) else {
            log::debug!(
                "parent: {}, not found for path: {}",
                parent_path.display(),
                rel_path.display()
            );
            continue;
        };

        let child_name = rel_path
            .file_name()
            .map(|os| os.to_string_lossy().to_string())
            .unwrap_or_else(|| rel_path.display().to_string());

        let new_child = Rc::new(RefCell::new(TreeNode::new(child_name, entry.is_file)));

        parent_node
            .borrow_mut()
            .children
            .push(Rc::clone(&new_child));

        if !entry.is_file {
            lookup.insert(rel_path.clone(), new_child);
        }
    }

    root
}

fn write_tree(out: &mut String, node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool) {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node_borrow.is_file {
        node_borrow.name.green()
    } else {
        node_borrow.name.blue()
    };
    let _ = writeln!(out, "{}{}{}", prefix.yellow(), connector, name);

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        write_tree(out, child, &child_prefix, i == len - 1);
    }
}

/// Renders the plan as an ASCII tree rooted at `destination`.
pub fn render_tree(vfs: &VirtualFS, destination: &Path) -> String {
    let tree_root = build_tree(vfs, destination);

    let mut out = String::new();
    write_tree(&mut out, &tree_root, "", true);

    out
}

pub fn preview_as_tree(vfs: &VirtualFS, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    println!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    print!("{}", render_tree(vfs, destination));

    println!(
        "\n{} {}",
        "└─".bold().bright_blue(),
        format!(
            "{} directories, {} files (nothing written)",
            vfs.directories().count(),
            vfs.files().count()
        )
        .bright_green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;

    #[test]
    fn renders_nested_entries_under_their_parents() {
        colored::control::set_override(false);

        let vfs = VirtualFS::from_manifest(&Manifest::builtin());
        let tree = render_tree(&vfs, Path::new("/tmp/proj"));
        let lines: Vec<&str> = tree.lines().collect();

        assert_eq!(lines[0], "└── proj");
        assert_eq!(lines[1], "    ├── css");
        assert!(lines.contains(&"    │   ├── components"));
        assert!(lines.contains(&"    │   │   ├── pig.css"));
        assert!(lines.contains(&"    └── README.md"));
        // root + every staged entry
        assert_eq!(lines.len(), 1 + 14 + 68);
    }
}
