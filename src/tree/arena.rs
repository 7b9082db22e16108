//! Reference arena substrate.
//!
//! A minimal octree backing store for the fusion engine: nodes live in a
//! flat arena with the root at index 0 and explicit 8-slot child tables.
//! It carries no spatial key machinery and no sensor model - occupancy
//! values are whatever callers store - but it satisfies [`OctreeBase`],
//! so the whole engine runs against it. Production substrates with their
//! own allocation and log-odds fusion implement the trait themselves.

use crate::core::Result;
use crate::voxel::color::LabelColorTable;
use crate::voxel::payload::VoxelPayload;

use super::aggregate::update_inner_summaries;
use super::base::{NodeId, OctreeBase};

const NO_CHILD: NodeId = NodeId::MAX;

#[derive(Clone, Debug)]
struct Node {
    children: [NodeId; 8],
    payload: VoxelPayload,
}

impl Node {
    fn new() -> Self {
        Self {
            children: [NO_CHILD; 8],
            payload: VoxelPayload::new(),
        }
    }
}

/// Arena-backed semantic octree
#[derive(Clone, Debug)]
pub struct SemanticOctree {
    /// All nodes (root is at index 0)
    nodes: Vec<Node>,
    max_depth: u8,
    /// Optional class-color map; when present, inner-node colors come
    /// from it instead of child averaging
    table: Option<LabelColorTable>,
}

impl SemanticOctree {
    /// Create a tree with an empty root
    pub fn new(max_depth: u8) -> Self {
        Self {
            nodes: vec![Node::new()],
            max_depth,
            table: None,
        }
    }

    /// Create a tree that colors inner nodes from a label-to-color table
    pub fn with_table(max_depth: u8, table: LabelColorTable) -> Self {
        Self {
            nodes: vec![Node::new()],
            max_depth,
            table: Some(table),
        }
    }

    /// Root node id (the root always exists)
    pub fn root_id(&self) -> NodeId {
        0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn table(&self) -> Option<&LabelColorTable> {
        self.table.as_ref()
    }

    /// Get or create the child in octant slot `octant` (0..8)
    pub fn create_child(&mut self, node: NodeId, octant: u8) -> NodeId {
        debug_assert!(octant < 8);
        let existing = self.nodes[node as usize].children[octant as usize];
        if existing != NO_CHILD {
            return existing;
        }
        let child = self.nodes.len() as NodeId;
        self.nodes.push(Node::new());
        self.nodes[node as usize].children[octant as usize] = child;
        child
    }

    /// Refresh every inner node's occupancy, semantics, and color from
    /// its children, using the table configured at construction for the
    /// color path if one was supplied.
    pub fn update_inner_summaries(&mut self) -> Result<()> {
        let table = self.table.clone();
        update_inner_summaries(self, table.as_ref())
    }
}

impl OctreeBase for SemanticOctree {
    fn root(&self) -> Option<NodeId> {
        Some(0)
    }

    fn max_depth(&self) -> u8 {
        self.max_depth
    }

    fn has_children(&self, node: NodeId) -> bool {
        self.nodes[node as usize]
            .children
            .iter()
            .any(|&c| c != NO_CHILD)
    }

    fn child(&self, node: NodeId, octant: u8) -> Option<NodeId> {
        debug_assert!(octant < 8);
        let child = self.nodes[node as usize].children[octant as usize];
        (child != NO_CHILD).then_some(child)
    }

    fn payload(&self, node: NodeId) -> &VoxelPayload {
        &self.nodes[node as usize].payload
    }

    fn payload_mut(&mut self, node: NodeId) -> &mut VoxelPayload {
        &mut self.nodes[node as usize].payload
    }

    /// Max over the children's occupancy, the usual log-odds summary for
    /// a conservative inner-node estimate
    fn aggregate_occupancy_from_children(&self, node: NodeId) -> f32 {
        let mut max = f32::NEG_INFINITY;
        let mut any = false;
        for &child in &self.nodes[node as usize].children {
            if child != NO_CHILD {
                max = max.max(self.nodes[child as usize].payload.occupancy());
                any = true;
            }
        }
        if any {
            max
        } else {
            self.nodes[node as usize].payload.occupancy()
        }
    }
}
