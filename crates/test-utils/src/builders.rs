#![allow(dead_code)]

use building_blocker::config::model::{CONFIG_NODE, GAME_MODE_NODE, HIDE_FACILITY_NODE, NAME_KEY};
use building_blocker::node::{Forest, RawNode};

/// Builder for a `GAMEMODE` node.
pub struct GameModeNodeBuilder {
    node: RawNode,
}

impl GameModeNodeBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            node: RawNode::new(GAME_MODE_NODE).with_value(NAME_KEY, name),
        }
    }

    /// A section with no `name` value at all.
    pub fn unnamed() -> Self {
        Self {
            node: RawNode::new(GAME_MODE_NODE),
        }
    }

    pub fn hide(mut self, facility: &str) -> Self {
        self.node = self
            .node
            .with_node(RawNode::new(HIDE_FACILITY_NODE).with_value(NAME_KEY, facility));
        self
    }

    /// A `HIDEFACILITY` child with no `name`.
    pub fn hide_nameless(mut self) -> Self {
        self.node = self.node.with_node(RawNode::new(HIDE_FACILITY_NODE));
        self
    }

    pub fn build(self) -> RawNode {
        self.node
    }
}

/// Builder for a `BUILDINGBLOCKERCONFIG` node.
pub struct BlockerConfigBuilder {
    node: RawNode,
}

impl BlockerConfigBuilder {
    pub fn new() -> Self {
        Self {
            node: RawNode::new(CONFIG_NODE),
        }
    }

    pub fn with_mode(mut self, mode: GameModeNodeBuilder) -> Self {
        self.node = self.node.with_node(mode.build());
        self
    }

    pub fn build(self) -> RawNode {
        self.node
    }
}

impl Default for BlockerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a whole forest of top-level nodes.
#[derive(Default)]
pub struct ForestBuilder {
    roots: Vec<RawNode>,
}

impl ForestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: BlockerConfigBuilder) -> Self {
        self.roots.push(config.build());
        self
    }

    pub fn with_node(mut self, node: RawNode) -> Self {
        self.roots.push(node);
        self
    }

    pub fn build(self) -> Forest {
        Forest::new(self.roots)
    }
}
