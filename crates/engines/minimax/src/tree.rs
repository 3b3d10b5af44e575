//! Arena-backed game tree.
//!
//! Nodes live in one `Vec` and refer to each other by index. Children are
//! owned top-down through the arena; the parent link is only used to rebuild
//! the move path to a node. Dropping the tree frees every node at once.

use quixo_core::{Board, Move};

/// Index of a node in its [`GameTree`].
pub type NodeId = usize;

#[derive(Debug, Clone)]
pub struct GameNode {
    pub board: Board,
    /// Move that produced this node (None for the root)
    pub mv: Option<Move>,
    pub parent: Option<NodeId>,
    /// Children in expansion order
    pub children: Vec<NodeId>,
    /// Static value at a leaf, or minimax value once fully expanded
    pub value: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<GameNode>,
}

impl GameTree {
    pub const ROOT: NodeId = 0;

    pub fn new(root: Board) -> Self {
        Self {
            nodes: vec![GameNode {
                board: root,
                mv: None,
                parent: None,
                children: Vec::new(),
                value: None,
            }],
        }
    }

    /// Append a child of `parent` reached by `mv`.
    pub fn add_child(&mut self, parent: NodeId, mv: Move, board: Board) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(GameNode {
            board,
            mv: Some(mv),
            parent: Some(parent),
            children: Vec::new(),
            value: None,
        });
        self.nodes[parent].children.push(id);
        id
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &GameNode {
        &self.nodes[id]
    }

    /// Record the value of `id`. The first value written wins.
    pub fn set_value(&mut self, id: NodeId, value: i32) {
        let slot = &mut self.nodes[id].value;
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    /// Moves leading from the root to `id`.
    pub fn path_to(&self, id: NodeId) -> Vec<Move> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(node) = cur.map(|i| &self.nodes[i]) {
            if let Some(mv) = node.mv {
                path.push(mv);
            }
            cur = node.parent;
        }
        path.reverse();
        path
    }

    /// Follow the child whose cached value equals its parent's from `id`
    /// down to a leaf, returning the moves along the way.
    pub fn principal_variation(&self, id: NodeId) -> Vec<Move> {
        let mut line = self.path_to(id);
        let mut cur = id;
        while let Some(value) = self.nodes[cur].value {
            let next = self.nodes[cur]
                .children
                .iter()
                .copied()
                .find(|&c| self.nodes[c].value == Some(value));
            match next {
                Some(child) => {
                    if let Some(mv) = self.nodes[child].mv {
                        line.push(mv);
                    }
                    cur = child;
                }
                None => break,
            }
        }
        line
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quixo_core::{Direction, Pos, Symbol};

    fn mv(dir: Direction, row: u8, col: u8) -> Move {
        Move::new(dir, Pos::new(row, col))
    }

    #[test]
    fn test_path_reconstruction() {
        let root = Board::new();
        let mut tree = GameTree::new(root);
        let a = mv(Direction::Down, 0, 2);
        let b = mv(Direction::Up, 4, 0);
        let after_a = root.apply_move(a, Symbol::X).unwrap();
        let after_b = after_a.apply_move(b, Symbol::O).unwrap();

        let child = tree.add_child(GameTree::ROOT, a, after_a);
        let grandchild = tree.add_child(child, b, after_b);

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.node(GameTree::ROOT).children, vec![child]);
        assert_eq!(tree.path_to(grandchild), vec![a, b]);
        assert!(tree.path_to(GameTree::ROOT).is_empty());
    }

    #[test]
    fn test_value_is_set_once() {
        let mut tree = GameTree::new(Board::new());
        tree.set_value(GameTree::ROOT, 5);
        tree.set_value(GameTree::ROOT, 7);
        assert_eq!(tree.node(GameTree::ROOT).value, Some(5));
    }

    #[test]
    fn test_principal_variation_follows_matching_values() {
        let root = Board::new();
        let mut tree = GameTree::new(root);
        let a = mv(Direction::Down, 0, 2);
        let b = mv(Direction::Right, 2, 0);
        let c = mv(Direction::Up, 4, 4);
        let ba = root.apply_move(a, Symbol::X).unwrap();
        let bb = root.apply_move(b, Symbol::X).unwrap();
        let bc = bb.apply_move(c, Symbol::O).unwrap();

        let na = tree.add_child(GameTree::ROOT, a, ba);
        let nb = tree.add_child(GameTree::ROOT, b, bb);
        let nc = tree.add_child(nb, c, bc);
        tree.set_value(na, 3);
        tree.set_value(nc, 10);
        tree.set_value(nb, 10);
        tree.set_value(GameTree::ROOT, 10);

        assert_eq!(tree.principal_variation(GameTree::ROOT), vec![b, c]);
    }
}
